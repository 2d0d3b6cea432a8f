use crate::domain::model::{SalaryRequest, SalaryResult};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// 外部薪資計算服務
#[async_trait]
pub trait SalaryCalculator: Send + Sync {
    async fn calculate(&self, request: &SalaryRequest) -> Result<SalaryResult>;
}

pub trait ConfigProvider: Send + Sync {
    fn endpoint(&self) -> &str;
    fn timeout(&self) -> Option<Duration>;
    fn block_concurrent_submissions(&self) -> bool;
    fn enforce_field_constraints(&self) -> bool;
}
