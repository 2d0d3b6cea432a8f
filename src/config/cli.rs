use crate::adapters::http::DEFAULT_ENDPOINT;
use crate::config::{parse_campus_arg, CampusInput, FormData};
use crate::core::render::OutputFormat;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
use clap::Parser;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "salary-form")]
#[command(about = "Fill and submit the teacher salary form against the calculation service")]
pub struct CliConfig {
    /// Calculation service endpoint
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Hourly rate, parsed like the browser form does
    #[arg(long)]
    pub hourly_rate: Option<String>,

    /// Campus row as NAME=HOURS, repeatable
    #[arg(long = "campus", value_parser = parse_campus_arg)]
    pub campuses: Vec<CampusInput>,

    /// HTTP timeout; no timeout when omitted
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// Ignore submissions while a request is in flight
    #[arg(long)]
    pub block_concurrent: bool,

    /// Skip the required/number field checks before submitting
    #[arg(long)]
    pub no_field_constraints: bool,

    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl CliConfig {
    pub fn form_data(&self) -> FormData {
        FormData {
            hourly_rate: self.hourly_rate.clone(),
            campuses: self.campuses.clone(),
        }
    }
}

impl ConfigProvider for CliConfig {
    fn endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }

    fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }

    fn block_concurrent_submissions(&self) -> bool {
        self.block_concurrent
    }

    fn enforce_field_constraints(&self) -> bool {
        !self.no_field_constraints
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("endpoint", self.endpoint())?;
        if let Some(timeout) = self.timeout_seconds {
            validate_positive_number("timeout_seconds", timeout, 1)?;
        }
        Ok(())
    }
}
