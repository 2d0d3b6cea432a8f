use clap::Parser;
use salary_form::config::FormData;
use salary_form::core::render;
use salary_form::domain::ports::ConfigProvider;
use salary_form::utils::{logger, validation::Validate};
use salary_form::{
    CliConfig, CurrencyFormatter, FormController, FormEvent, FormSettings, HttpSalaryCalculator,
    SubmissionStatus, TomlConfig,
};

fn load_config(cli: &CliConfig) -> salary_form::Result<(Box<dyn ConfigProvider>, FormData)> {
    let Some(path) = &cli.config else {
        cli.validate()?;
        let provider: Box<dyn ConfigProvider> = Box::new(cli.clone());
        return Ok((provider, cli.form_data()));
    };

    tracing::info!("📁 Loading configuration from: {}", path);
    let mut config = TomlConfig::from_file(path)?;
    config.apply_cli_overrides(cli);
    config.validate()?;

    let mut data = config.form_data();
    if cli.hourly_rate.is_some() {
        data.hourly_rate = cli.hourly_rate.clone();
    }
    if !cli.campuses.is_empty() {
        data.campuses = cli.campuses.clone();
    }
    let provider: Box<dyn ConfigProvider> = Box::new(config);
    Ok((provider, data))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::info!("Starting salary-form CLI");
    tracing::debug!("CLI config: {:?}", cli);

    let (config, data) = match load_config(&cli) {
        Ok(loaded) => loaded,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let calculator = HttpSalaryCalculator::from_config(config.as_ref())?;
    tracing::info!("🌐 Calculation service: {}", calculator.endpoint());

    let settings = FormSettings::from_config(config.as_ref());
    let mut controller = FormController::new(calculator, settings);
    data.fill(&mut controller);

    if controller.dispatch(FormEvent::Submit).is_none() {
        for violation in controller.state().violations() {
            eprintln!("❌ {:?}: {:?}", violation.field, violation.violation);
        }
        eprintln!("💡 Fill in the hourly rate and every campus name and hours");
        std::process::exit(2);
    }
    controller.settle_all().await;

    let output = render::render(controller.state(), cli.format, &CurrencyFormatter::brl());
    match controller.state().status() {
        SubmissionStatus::Rendered => {
            println!("{}", output);
            Ok(())
        }
        _ => {
            eprintln!("❌ {}", output);
            std::process::exit(1);
        }
    }
}
