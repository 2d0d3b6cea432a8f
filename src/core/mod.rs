pub mod controller;
pub mod form;
pub mod render;

pub use crate::domain::model::{CampusEntry, RowId, SalaryRequest, SalaryResult};
pub use crate::domain::ports::{ConfigProvider, SalaryCalculator};
pub use crate::utils::error::Result;
