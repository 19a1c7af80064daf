use clap::Parser;
use staffing_calc::utils::{logger, validation::Validate};
use staffing_calc::{BatchCalculator, BatchSummary, CostFormat, LocalStorage, TomlConfig};

#[derive(Parser)]
#[command(name = "staffing-batch")]
#[command(about = "Run staffing calculations for every row of a CSV file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "staffing.toml")]
    config: String,

    /// Input CSV, overrides [batch] input_path
    #[arg(short, long)]
    input: Option<String>,

    /// Output CSV, overrides [batch] output_path
    #[arg(short, long)]
    output: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Stop at the first invalid row
    #[arg(long)]
    fail_fast: bool,

    /// Dry run - validate and count rows without writing results
    #[arg(long)]
    dry_run: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(e.exit_code());
        }
    };

    logger::init_logger(config.log_format(), args.verbose);
    tracing::info!("📁 Loaded configuration from: {}", args.config);

    if let Some(input) = args.input {
        config.batch.input_path = Some(input);
    }
    if let Some(output) = args.output {
        config.batch.output_path = Some(output);
    }
    if args.fail_fast {
        config.batch.fail_fast = true;
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    let input_path = config
        .batch
        .input_path
        .clone()
        .ok_or_else(|| anyhow::anyhow!("no input file: pass --input or set [batch] input_path"))?;
    let output_path = config
        .batch
        .output_path
        .clone()
        .unwrap_or_else(|| "staffing_results.csv".to_string());

    let batch = BatchCalculator::new(LocalStorage::new("."))
        .with_defaults(config.field_defaults())
        .with_fail_fast(config.batch.fail_fast);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - no results will be written");
        let rows = batch.read_requests(&input_path)?;
        let valid = rows.iter().filter(|(_, request)| request.is_ok()).count();
        println!("🔍 {} rows read, {} valid, {} invalid", rows.len(), valid, rows.len() - valid);
        for (line, request) in &rows {
            if let Err(e) = request {
                println!("  line {}: {}", line, e);
            }
        }
        return Ok(());
    }

    match batch.run(&input_path, &output_path) {
        Ok(summary) => {
            print_summary(&summary, &config.cost_format());
            println!("📁 Results saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Batch failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}

fn print_summary(summary: &BatchSummary, cost_format: &CostFormat) {
    println!("✅ Batch complete");
    println!("  Rows calculated: {}", summary.processed);
    println!("  Rows skipped: {}", summary.rejected.len());
    println!("  Total staff: {}", summary.total_staff);
    println!("  Total cost: {}", cost_format.format(summary.total_cost));

    for rejected in &summary.rejected {
        println!("  ⚠️ line {}: {}", rejected.line, rejected.reason);
    }
}
