pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{api::ApiAdapter, database::DatabaseStub};
pub use config::{lambda::LambdaConfig, toml_config::TomlConfig, AppSettings};
pub use core::business_logic::PassThroughCalculator;
pub use domain::model::{CalculationRequest, Number, Response, SaveReceipt};
pub use domain::ports::{BusinessLogic, Persistence};
pub use utils::error::{AppError, Result};
