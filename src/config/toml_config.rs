use crate::adapters::http::DEFAULT_ENDPOINT;
use crate::config::{CampusInput, FormData};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{FormError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub service: ServiceConfig,
    pub form: Option<FormConfig>,
    pub form_data: Option<FormDataConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub endpoint: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormConfig {
    pub block_concurrent_submissions: Option<bool>,
    pub enforce_field_constraints: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormDataConfig {
    pub hourly_rate: Option<f64>,
    #[serde(default)]
    pub campuses: Vec<CampusConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampusConfig {
    pub name: String,
    pub hours: f64,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| FormError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SALARY_SERVICE_URL})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| FormError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 命令列參數優先於檔案內容
    #[cfg(feature = "cli")]
    pub fn apply_cli_overrides(&mut self, cli: &crate::config::cli::CliConfig) {
        if let Some(endpoint) = &cli.endpoint {
            self.service.endpoint = Some(endpoint.clone());
        }
        if let Some(timeout) = cli.timeout_seconds {
            self.service.timeout_seconds = Some(timeout);
        }
        let form = self.form.get_or_insert(FormConfig {
            block_concurrent_submissions: None,
            enforce_field_constraints: None,
        });
        if cli.block_concurrent {
            form.block_concurrent_submissions = Some(true);
        }
        if cli.no_field_constraints {
            form.enforce_field_constraints = Some(false);
        }
    }

    pub fn form_data(&self) -> FormData {
        match &self.form_data {
            Some(data) => FormData {
                hourly_rate: data.hourly_rate.map(|rate| rate.to_string()),
                campuses: data
                    .campuses
                    .iter()
                    .map(|campus| CampusInput {
                        name: campus.name.clone(),
                        hours: campus.hours.to_string(),
                    })
                    .collect(),
            },
            None => FormData::default(),
        }
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_url("service.endpoint", self.endpoint())?;

        if let Some(timeout) = self.service.timeout_seconds {
            validate_positive_number("service.timeout_seconds", timeout, 1)?;
        }

        if let Some(data) = &self.form_data {
            for campus in &data.campuses {
                validate_non_empty_string("form_data.campuses.name", &campus.name)?;
            }
        }

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn endpoint(&self) -> &str {
        self.service.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }

    fn timeout(&self) -> Option<Duration> {
        self.service.timeout_seconds.map(Duration::from_secs)
    }

    fn block_concurrent_submissions(&self) -> bool {
        self.form
            .as_ref()
            .and_then(|f| f.block_concurrent_submissions)
            .unwrap_or(false)
    }

    fn enforce_field_constraints(&self) -> bool {
        self.form
            .as_ref()
            .and_then(|f| f.enforce_field_constraints)
            .unwrap_or(true)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
