#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::controller::FormController;
use crate::core::form::FormEvent;
use crate::domain::ports::SalaryCalculator;

/// 一列 campus 的預填內容 (原始字串，與使用者輸入相同)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampusInput {
    pub name: String,
    pub hours: String,
}

/// 啟動時要填進表單的內容
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    pub hourly_rate: Option<String>,
    pub campuses: Vec<CampusInput>,
}

impl FormData {
    /// 以一般使用者事件的方式填入表單
    pub fn fill<C: SalaryCalculator + 'static>(&self, controller: &mut FormController<C>) {
        if let Some(rate) = &self.hourly_rate {
            controller.dispatch(FormEvent::EditHourlyRate(rate.clone()));
        }
        for campus in &self.campuses {
            controller.add_campus(&campus.name, &campus.hours);
        }
    }
}

/// 解析 `NAME=HOURS`，名稱本身可以包含 `=`，以最後一個為準
pub fn parse_campus_arg(raw: &str) -> Result<CampusInput, String> {
    match raw.rsplit_once('=') {
        Some((name, hours)) => Ok(CampusInput {
            name: name.to_string(),
            hours: hours.to_string(),
        }),
        None => Err(format!("expected NAME=HOURS, got '{}'", raw)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_campus_arg() {
        assert_eq!(
            parse_campus_arg("Main=40").unwrap(),
            CampusInput {
                name: "Main".to_string(),
                hours: "40".to_string(),
            }
        );
        assert_eq!(parse_campus_arg("A=B=12.5").unwrap().name, "A=B");
        assert_eq!(parse_campus_arg("Main=").unwrap().hours, "");
        assert!(parse_campus_arg("Main").is_err());
    }
}
