use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{error::ConfigurationError, priority::PrioritizedOrder};
use crate::models::{Courier, Order};

/// A single ranking criterion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortingCriterion {
    /// Closer distance slot first
    DistanceSlot,
    /// VIP orders first
    Vip,
    /// Food orders first
    Food,
    /// Closer delivery first
    AbsoluteDistance,
}

impl SortingCriterion {
    pub const ALL: [SortingCriterion; 4] = [
        SortingCriterion::DistanceSlot,
        SortingCriterion::Vip,
        SortingCriterion::Food,
        SortingCriterion::AbsoluteDistance,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortingCriterion::DistanceSlot => "DISTANCE_SLOT",
            SortingCriterion::Vip => "VIP",
            SortingCriterion::Food => "FOOD",
            SortingCriterion::AbsoluteDistance => "ABSOLUTE_DISTANCE",
        }
    }

    /// Ascending ordering for this criterion
    #[inline]
    pub fn compare(self, a: &PrioritizedOrder, b: &PrioritizedOrder) -> Ordering {
        match self {
            SortingCriterion::DistanceSlot => a.key.priority.cmp(&b.key.priority),
            // `true` sorts after `false`, so compare reversed to put flagged orders first
            SortingCriterion::Vip => b.order.vip.cmp(&a.order.vip),
            SortingCriterion::Food => b.order.food.cmp(&a.order.food),
            SortingCriterion::AbsoluteDistance => a
                .key
                .distance_to_courier_km
                .total_cmp(&b.key.distance_to_courier_km),
        }
    }
}

impl fmt::Display for SortingCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortingCriterion {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortingCriterion::ALL
            .into_iter()
            .find(|criterion| criterion.as_str() == s.trim())
            .ok_or_else(|| ConfigurationError::UnknownCriterion(s.to_string()))
    }
}

/// Precedence of the four ranking criteria, highest first
///
/// Always holds every criterion exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CriteriaOrder([SortingCriterion; 4]);

impl CriteriaOrder {
    pub fn new(criteria: [SortingCriterion; 4]) -> Result<Self, ConfigurationError> {
        for (i, criterion) in criteria.iter().enumerate() {
            if criteria[..i].contains(criterion) {
                return Err(ConfigurationError::DuplicateCriterion(*criterion));
            }
        }
        Ok(Self(criteria))
    }

    /// Parse configured tags such as `["DISTANCE_SLOT", "VIP", "FOOD", "ABSOLUTE_DISTANCE"]`
    pub fn parse<S: AsRef<str>>(tags: &[S]) -> Result<Self, ConfigurationError> {
        let parsed = tags
            .iter()
            .map(|tag| tag.as_ref().parse::<SortingCriterion>())
            .collect::<Result<Vec<_>, _>>()?;

        let criteria: [SortingCriterion; 4] = parsed
            .try_into()
            .map_err(|parsed: Vec<SortingCriterion>| ConfigurationError::CriteriaCount(parsed.len()))?;

        Self::new(criteria)
    }

    pub fn criteria(&self) -> &[SortingCriterion; 4] {
        &self.0
    }

    /// Compare by the first criterion, breaking ties with the following ones
    #[inline]
    pub fn compare(&self, a: &PrioritizedOrder, b: &PrioritizedOrder) -> Ordering {
        self.0
            .iter()
            .fold(Ordering::Equal, |ordering, criterion| {
                ordering.then_with(|| criterion.compare(a, b))
            })
    }
}

impl Default for CriteriaOrder {
    fn default() -> Self {
        Self(SortingCriterion::ALL)
    }
}

/// Ranks the orders offered to a courier
#[derive(Debug, Clone)]
pub struct OrderSorter {
    criteria: CriteriaOrder,
    slot_distance_km: f64,
}

impl OrderSorter {
    pub fn new(criteria: CriteriaOrder, slot_distance_km: f64) -> Result<Self, ConfigurationError> {
        if !(slot_distance_km > 0.0) {
            return Err(ConfigurationError::InvalidSlotDistance(slot_distance_km));
        }

        Ok(Self {
            criteria,
            slot_distance_km,
        })
    }

    pub fn criteria(&self) -> &CriteriaOrder {
        &self.criteria
    }

    pub fn slot_distance_km(&self) -> f64 {
        self.slot_distance_km
    }

    /// Attach the ranking key of an order for the courier
    pub fn prioritize(&self, order: Order, courier: &Courier) -> PrioritizedOrder {
        PrioritizedOrder::new(order, courier, self.slot_distance_km)
    }

    /// Sort orders for a courier
    ///
    /// The sort is stable: orders equal under every criterion keep their
    /// input order.
    pub fn sort_orders(&self, orders: Vec<Order>, courier: &Courier) -> Vec<Order> {
        let mut prioritized: Vec<PrioritizedOrder> = orders
            .into_iter()
            .map(|order| self.prioritize(order, courier))
            .collect();

        prioritized.sort_by(|a, b| self.criteria.compare(a, b));

        prioritized
            .into_iter()
            .map(PrioritizedOrder::into_order)
            .collect()
    }
}
