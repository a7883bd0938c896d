mod configuration_error;
mod range_calculator;
mod range_config;

pub use configuration_error::ConfigurationError;
pub use range_calculator::RangeCalculator;
pub use range_config::RangeConfig;
pub use range_config::DEFAULT_STEP;
