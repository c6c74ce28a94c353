use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to list the orders a courier may take
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CourierOrdersRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "courier_id", rename = "courierId")]
    pub courier_id: String,
}

impl CourierOrdersRequest {
    pub fn new(courier_id: impl Into<String>) -> Self {
        Self {
            courier_id: courier_id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_courier_id_is_rejected() {
        assert!(CourierOrdersRequest::new("").validate().is_err());
        assert!(CourierOrdersRequest::new("courier-1").validate().is_ok());
    }

    #[test]
    fn test_accepts_snake_case_alias() {
        let req: CourierOrdersRequest =
            serde_json::from_str(r#"{"courier_id": "courier-2"}"#).unwrap();
        assert_eq!(req.courier_id, "courier-2");
    }
}
