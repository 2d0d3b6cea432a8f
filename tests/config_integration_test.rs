use httpmock::prelude::*;
use salary_form::core::render::{render, OutputFormat};
use salary_form::utils::validation::Validate;
use salary_form::{
    CurrencyFormatter, FormController, FormSettings, HttpSalaryCalculator, SubmissionStatus,
    TomlConfig,
};
use std::time::Duration;
use tempfile::TempDir;

#[tokio::test]
async fn test_toml_form_data_end_to_end() -> anyhow::Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/calcular-salario").body(
            r#"{"hourly_rate":25.5,"campuses":[{"campus":"Centro","hours":20},{"campus":"Norte","hours":12.5}]}"#,
        );
        then.status(200).json_body(serde_json::json!({
            "overall_weekly_salary": 828.75,
            "overall_monthly_salary": 3315,
            "details": [
                {"campus": "Centro", "weekly_hours": 20, "weekly_salary": 510,
                 "monthly_hours": 80, "monthly_salary": 2040},
                {"campus": "Norte", "weekly_hours": 12.5, "weekly_salary": 318.75,
                 "monthly_hours": 50, "monthly_salary": 1275}
            ]
        }));
    });

    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("salary-form.toml");
    tokio::fs::write(
        &config_path,
        format!(
            r#"
[service]
endpoint = "{}"
timeout_seconds = 5

[form_data]
hourly_rate = 25.5

[[form_data.campuses]]
name = "Centro"
hours = 20

[[form_data.campuses]]
name = "Norte"
hours = 12.5
"#,
            server.url("/calcular-salario")
        ),
    )
    .await?;

    let config = TomlConfig::from_file(&config_path)?;
    tokio_test::assert_ok!(config.validate());

    let calculator = HttpSalaryCalculator::from_config(&config)?;
    let mut controller = FormController::new(calculator, FormSettings::from_config(&config));
    config.form_data().fill(&mut controller);
    controller.submit().await;

    api_mock.assert();
    assert_eq!(controller.state().status(), SubmissionStatus::Rendered);

    let text = render(controller.state(), OutputFormat::Text, &CurrencyFormatter::brl());
    assert!(text.contains("Salário Semanal Total: R$\u{a0}828,75"));
    assert!(text.contains("Salário Mensal Total: R$\u{a0}3.315,00"));
    assert!(text.contains("- Norte: R$\u{a0}318,75 (semana), R$\u{a0}1.275,00 (mês) [12.5h/semana, 50h/mês]"));
    Ok(())
}

#[tokio::test]
async fn test_configured_timeout_collapses_into_error_notice() -> anyhow::Result<()> {
    let server = MockServer::start();
    let _slow_mock = server.mock(|when, then| {
        when.method(POST).path("/calcular-salario");
        then.status(200)
            .delay(Duration::from_secs(3))
            .json_body(serde_json::json!({
                "overall_weekly_salary": 0,
                "overall_monthly_salary": 0,
                "details": []
            }));
    });

    let config = TomlConfig::from_toml_str(&format!(
        r#"
[service]
endpoint = "{}"
timeout_seconds = 1

[form_data]
hourly_rate = 20
"#,
        server.url("/calcular-salario")
    ))?;

    let calculator = HttpSalaryCalculator::from_config(&config)?;
    let mut controller = FormController::new(calculator, FormSettings::from_config(&config));
    config.form_data().fill(&mut controller);
    controller.submit().await;

    assert_eq!(controller.state().status(), SubmissionStatus::ErrorShown);

    let text = render(controller.state(), OutputFormat::Text, &CurrencyFormatter::brl());
    assert_eq!(text, "Erro ao calcular o salário. Tente novamente.");
    Ok(())
}
