use crate::utils::error::{FormError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 畫面上一列 campus 的識別碼，同一個表單內不會重複使用
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(pub(crate) u64);

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "campus-{}", self.0)
    }
}

/// 一列輸入欄位的原始內容 (尚未解析)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampusEntry {
    pub id: RowId,
    pub name: String,
    pub hours: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CampusHours {
    pub campus: String,
    #[serde(serialize_with = "js_number::serialize")]
    pub hours: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalaryRequest {
    #[serde(serialize_with = "js_number::serialize")]
    pub hourly_rate: f64,
    pub campuses: Vec<CampusHours>,
}

impl SalaryRequest {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CampusSalary {
    pub campus: String,
    pub weekly_salary: f64,
    pub monthly_salary: f64,
    #[serde(default)]
    pub weekly_hours: Option<f64>,
    #[serde(default)]
    pub monthly_hours: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SalaryResult {
    pub overall_weekly_salary: f64,
    pub overall_monthly_salary: f64,
    pub details: Vec<CampusSalary>,
}

impl SalaryResult {
    /// 在邊界驗證回應的結構，任何缺欄位或型別錯誤都轉成 MalformedResponse
    pub fn from_json(body: &str) -> Result<Self> {
        serde_json::from_str(body).map_err(|e| FormError::MalformedResponse {
            message: e.to_string(),
        })
    }
}

/// 與 `JSON.stringify` 相同的數字輸出：整數不帶小數點，NaN 與無限大輸出為 null
mod js_number {
    use serde::Serializer;

    const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        let value = *value;
        if !value.is_finite() {
            serializer.serialize_none()
        } else if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
            serializer.serialize_i64(value as i64)
        } else {
            serializer.serialize_f64(value)
        }
    }
}
