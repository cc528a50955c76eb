mod display;

use clap::Parser;
use lotto::utils::error::ErrorSeverity;
use lotto::utils::logger;
use lotto::{CliConfig, Command, HttpLottoSource, LottoApp, LottoError, Tab};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting lotto CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = run(&cli).await {
        tracing::error!(
            "❌ Command failed: {} (Severity: {:?})",
            e,
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }

    Ok(())
}

async fn run(cli: &CliConfig) -> Result<(), LottoError> {
    let config = cli.resolve()?;
    tracing::debug!("Using lottery API at {}", config.source.base_url);

    let source = HttpLottoSource::from_config(&config)?;
    let mut app = LottoApp::new(source, &config);

    match &cli.command {
        Command::Generate { mode, count, .. } => {
            app.set_generation_mode(*mode);
            for _ in 0..*count {
                let draw = app.generate().await?;
                display::print_draw(&draw, cli.json)?;
            }
        }
        Command::Drawings { page, .. } => {
            app.select_tab(Tab::WinningNumbers).await;
            if *page > 1 {
                app.change_page(*page).await;
            }

            if app.winning_numbers.total_pages().is_none() {
                // Nothing was ever loaded; the store already logged why.
                return Err(LottoError::source_unavailable(
                    config.source.base_url.as_str(),
                    "drawings could not be loaded",
                ));
            }
            display::print_drawings(&app.winning_numbers, cli.json)?;
        }
        Command::Stats { .. } => {
            app.select_tab(Tab::Statistics).await;
            display::print_statistics(app.top_frequencies(), &app.statistics.positional, cli.json)?;
        }
    }

    Ok(())
}
