use crate::domain::model::{SalaryRequest, SalaryResult};
use crate::domain::ports::{ConfigProvider, SalaryCalculator};
use crate::utils::error::{FormError, Result};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/calcular-salario";

/// 透過 HTTP 呼叫外部薪資計算服務
#[derive(Debug, Clone)]
pub struct HttpSalaryCalculator {
    client: Client,
    endpoint: String,
}

impl HttpSalaryCalculator {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            endpoint: config.endpoint().to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SalaryCalculator for HttpSalaryCalculator {
    async fn calculate(&self, request: &SalaryRequest) -> Result<SalaryResult> {
        let body = request.to_json()?;
        tracing::debug!("Making API request to: {}", self.endpoint);
        tracing::debug!("Request body: {}", body);

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);
        let text = response.text().await?;

        if !status.is_success() {
            return Err(FormError::ServiceError {
                status: status.as_u16(),
                body: text,
            });
        }

        SalaryResult::from_json(&text)
    }
}
