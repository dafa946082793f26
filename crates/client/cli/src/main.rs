//! Command-line entry point: runs one Wumpus World session and prints the
//! report.
mod config;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use wumpus_runtime::{Runtime, SessionReport};

use config::CliConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = CliConfig::from_env();
    let _guard = setup_logging(&config)?;

    info!(
        seed = config.runtime.game.seed,
        grid_size = config.runtime.game.grid_size,
        max_turns = config.runtime.max_turns,
        route_planning = config.runtime.navigator.route_planning,
        "starting session"
    );

    let runtime = Runtime::builder().config(config.runtime.clone()).build().await?;
    let report = runtime.run_session().await?;
    runtime.shutdown().await?;

    print_report(&config, &report)
}

/// Stderr logging plus an optional file layer. The returned guard flushes
/// the file writer on drop.
fn setup_logging(
    config: &CliConfig,
) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    let (file_layer, guard) = if config.log_to_file {
        let log_dir = config.resolved_log_dir();
        std::fs::create_dir_all(&log_dir)?;

        let file_name = format!("session_{}.log", config.runtime.game.seed);
        let file_appender = tracing_appender::rolling::never(&log_dir, file_name);
        let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);
        let layer = tracing_subscriber::fmt::layer()
            .with_writer(non_blocking_file)
            .with_ansi(false);
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    if config.log_to_file {
        info!("Log directory: {}", config.resolved_log_dir().display());
    }

    Ok(guard)
}

fn print_report(config: &CliConfig, report: &SessionReport) -> Result<()> {
    if config.report_json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    println!("seed:     {}", config.runtime.game.seed);
    println!("result:   {}", report.end);
    let won = report.end.outcome().is_some_and(|outcome| outcome.is_success());
    println!("won:      {}", if won { "yes" } else { "no" });
    println!("turns:    {}", report.turns);
    println!("elapsed:  {:?}", report.elapsed);
    if let Some(pose) = &report.final_pose {
        println!("explorer: {pose}");
    }
    Ok(())
}
