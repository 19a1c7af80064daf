use clap::Parser;
use staffing_calc::config::OutputFormat;
use staffing_calc::utils::{logger, validation::Validate};
use staffing_calc::{CalcError, CalculatorEngine, CliConfig, TomlConfig};

fn main() {
    let args = CliConfig::parse();

    let config = match &args.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(e.exit_code());
            }
        },
        None => TomlConfig::default(),
    };

    logger::init_logger(config.log_format(), args.verbose);
    tracing::debug!("CLI config: {:?}", args);

    if let Err(e) = config.validate().and_then(|_| args.validate()) {
        fail(&e);
    }

    let format = args.format;
    let engine = CalculatorEngine::new(args.clone().with_defaults(config.field_defaults()))
        .with_cost_format(config.cost_format());

    match engine.run() {
        Ok(report) => match format {
            OutputFormat::Text => println!("{}", report),
            OutputFormat::Json => match report.to_json() {
                Ok(json) => println!("{}", json),
                Err(e) => fail(&e),
            },
        },
        Err(e) => fail(&e),
    }
}

fn fail(e: &CalcError) -> ! {
    tracing::error!(
        "❌ Calculation failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
