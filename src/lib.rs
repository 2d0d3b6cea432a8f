pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::http::HttpSalaryCalculator;
pub use config::{toml_config::TomlConfig, FormData};
pub use core::controller::FormController;
pub use core::form::{ClickTarget, FormEvent, FormSettings, FormState, SubmissionStatus};
pub use utils::currency::CurrencyFormatter;
pub use utils::error::{FormError, Result};
