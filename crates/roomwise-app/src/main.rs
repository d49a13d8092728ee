use roomwise_app::command::{ViewMode, parse_args, run, run_day};
use roomwise_core::config::load_config;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    let config = load_config()?;

    tracing::debug!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping info");
    }

    let invocation = parse_args(std::env::args().skip(1))?;
    let now = chrono::Utc::now();
    let output = match invocation.mode {
        ViewMode::Week => {
            serde_json::to_string_pretty(&run(&config, invocation.anchor, now).await?)?
        }
        ViewMode::Day => {
            serde_json::to_string_pretty(&run_day(&config, invocation.anchor, now).await?)?
        }
    };

    println!("{output}");

    Ok(())
}
