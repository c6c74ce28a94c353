use crate::core::{distance::haversine_distance, error::ConfigurationError};
use crate::models::{Courier, Order};

/// Capability-based order filters
///
/// Each predicate is built for one courier and evaluated per order. The two
/// predicates are independent; callers combine them with a logical AND.
#[derive(Debug, Clone)]
pub struct OrderFilter {
    excluded_words: Vec<String>,
    distance_threshold_km: f64,
}

impl OrderFilter {
    /// Build a filter from the configured keyword list
    ///
    /// `excluded_words` is split on `delimiter`; tokens are trimmed and
    /// lowercased, empty tokens are dropped. An empty delimiter keeps the
    /// whole string as a single keyword.
    pub fn new(excluded_words: &str, delimiter: &str, distance_threshold_km: f64) -> Self {
        let tokens: Vec<&str> = if delimiter.is_empty() {
            vec![excluded_words]
        } else {
            excluded_words.split(delimiter).collect()
        };

        let excluded_words = tokens
            .into_iter()
            .map(|word| word.trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();

        Self {
            excluded_words,
            distance_threshold_km,
        }
    }

    pub fn excluded_words(&self) -> &[String] {
        &self.excluded_words
    }

    pub fn distance_threshold_km(&self) -> f64 {
        self.distance_threshold_km
    }

    /// Fail if the distance threshold is not strictly positive
    pub fn check_distance_threshold(&self) -> Result<(), ConfigurationError> {
        // Written as a negation so that NaN is rejected as well
        if !(self.distance_threshold_km > 0.0) {
            return Err(ConfigurationError::InvalidDistanceThreshold(
                self.distance_threshold_km,
            ));
        }
        Ok(())
    }

    /// Orders with excluded words are only accepted if the courier carries a box
    pub fn filter_by_courier_box<'a>(&'a self, courier: &'a Courier) -> impl Fn(&Order) -> bool + 'a {
        move |order: &Order| courier.has_box || !self.contains_excluded_words(&order.description)
    }

    /// Orders delivered further than the threshold are only accepted for
    /// couriers on a motorcycle or an electric scooter
    ///
    /// Fails before evaluating any order if the threshold is not positive.
    pub fn filter_by_distance_to_courier<'a>(
        &'a self,
        courier: &'a Courier,
    ) -> Result<impl Fn(&Order) -> bool + 'a, ConfigurationError> {
        self.check_distance_threshold()?;

        let threshold = self.distance_threshold_km;
        Ok(move |order: &Order| {
            if courier.vehicle.ignores_distance_threshold() {
                return true;
            }
            haversine_distance(&order.delivery, &courier.location) <= threshold
        })
    }

    #[inline]
    fn contains_excluded_words(&self, description: &str) -> bool {
        let description = description.to_lowercase();
        self.excluded_words
            .iter()
            .any(|word| description.contains(word.as_str()))
    }
}
