use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::core::{ConfigurationError, CriteriaOrder, OrderFilter, OrderSorter, SortingCriterion};

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub filter: FilterSettings,
    #[serde(default)]
    pub sorting: SortingSettings,
    #[serde(default)]
    pub data: DataSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FilterSettings {
    #[serde(default = "default_excluded_words")]
    pub excluded_words: String,
    #[serde(default = "default_excluded_words_delimiter")]
    pub excluded_words_delimiter: String,
    #[serde(default = "default_distance_threshold_km")]
    pub distance_threshold_km: f64,
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            excluded_words: default_excluded_words(),
            excluded_words_delimiter: default_excluded_words_delimiter(),
            distance_threshold_km: default_distance_threshold_km(),
        }
    }
}

fn default_excluded_words() -> String { "pizza,cake,flamingo".to_string() }
fn default_excluded_words_delimiter() -> String { ",".to_string() }
fn default_distance_threshold_km() -> f64 { 5.0 }

#[derive(Debug, Clone, Deserialize)]
pub struct SortingSettings {
    #[serde(default = "default_slot_distance_km")]
    pub slot_distance_km: f64,
    /// Criterion tags, highest precedence first
    #[serde(default = "default_criteria")]
    pub criteria: Vec<String>,
}

impl Default for SortingSettings {
    fn default() -> Self {
        Self {
            slot_distance_km: default_slot_distance_km(),
            criteria: default_criteria(),
        }
    }
}

fn default_slot_distance_km() -> f64 { 0.5 }
fn default_criteria() -> Vec<String> {
    SortingCriterion::ALL
        .iter()
        .map(|criterion| criterion.as_str().to_string())
        .collect()
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataSettings {
    #[serde(default = "default_orders_path")]
    pub orders_path: String,
    #[serde(default = "default_couriers_path")]
    pub couriers_path: String,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            orders_path: default_orders_path(),
            couriers_path: default_couriers_path(),
        }
    }
}

fn default_orders_path() -> String { "data/orders.json".to_string() }
fn default_couriers_path() -> String { "data/couriers.json".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "compact".to_string() }

/// Environment variables prefixed with BACKENDER__
///
/// e.g., BACKENDER__FILTER__DISTANCE_THRESHOLD_KM -> filter.distance_threshold_km
/// BACKENDER__SORTING__CRITERIA takes a comma-separated list.
fn environment() -> Environment {
    Environment::with_prefix("BACKENDER")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("sorting.criteria")
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with BACKENDER__)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    /// Build the order filter, failing on an invalid distance threshold
    pub fn order_filter(&self) -> Result<OrderFilter, ConfigurationError> {
        let filter = OrderFilter::new(
            &self.filter.excluded_words,
            &self.filter.excluded_words_delimiter,
            self.filter.distance_threshold_km,
        );
        filter.check_distance_threshold()?;
        Ok(filter)
    }

    /// Build the order sorter from the configured criteria
    pub fn order_sorter(&self) -> Result<OrderSorter, ConfigurationError> {
        let criteria = CriteriaOrder::parse(self.sorting.criteria.as_slice())?;
        OrderSorter::new(criteria, self.sorting.slot_distance_km)
    }
}
