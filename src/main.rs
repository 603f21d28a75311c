use clap::Parser;
use dns_sync::cli::{Cli, Commands};
use dns_sync::config::Config;
use dns_sync::{Record, Synchronizer, ZoneLocks, providers};
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn print_records(records: &[Record], json: bool) -> Result<(), serde_json::Error> {
    if json {
        println!("{}", serde_json::to_string_pretty(records)?);
        return Ok(());
    }
    for record in records {
        if record.has_id() {
            println!("{}\t{}", record.id, record);
        } else {
            println!("{record}");
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging; stdout is reserved for records
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;
    let zone = cli
        .zone
        .clone()
        .or_else(|| config.zone.clone())
        .ok_or("no zone given, pass --zone or set DNS_ZONE")?;
    let provider = providers::from_config(config.with_zone(&zone))?;
    info!(provider = provider.name(), zone = %zone, "starting");

    // Cancel in-flight vendor calls on ctrl-c
    let cancel = CancellationToken::new();
    let on_signal = cancel.clone();
    tokio::spawn(async move {
        match signal::ctrl_c().await {
            Ok(()) => {
                info!("Shutdown signal received");
                on_signal.cancel();
            }
            Err(e) => error!("Failed to listen for shutdown signal: {}", e),
        }
    });

    let locks = ZoneLocks::new();
    let _guard = locks.lock(&zone).await;
    let sync = Synchronizer::new(provider).with_cancellation(cancel);

    let result = match &cli.command {
        Commands::List => sync.list_records(&zone).await,
        Commands::Append { records } => sync.append_records(&zone, records).await,
        Commands::Set { records } => sync.set_records(&zone, records).await,
        Commands::Delete { records } => sync.delete_records(&zone, records).await,
    };

    match result {
        Ok(records) => print_records(&records, cli.json)?,
        Err(e) => {
            error!("{}", e);
            return Err(e.into());
        }
    }
    Ok(())
}
