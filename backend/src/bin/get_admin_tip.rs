use backend::bridge::write_admin_tip;
use backend::cli::Cli;
use clap::error::ErrorKind;
use clap::Parser;
use sqldaily::configuration::get_configuration;
use sqldaily::domain::TipResolver;
use std::process::ExitCode;
use std::sync::Arc;
use telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            eprintln!("Error: Please provide a date in YYYY-MM-DD format\n\n{}", e);
            return ExitCode::FAILURE;
        }
    };

    let configuration = match get_configuration() {
        Ok(configuration) => configuration,
        Err(e) => {
            eprintln!("Failed to read configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // stdout carries the tip and nothing else
    let subscriber = get_subscriber(
        format!("{}-bridge", configuration.telemetry.service_name),
        configuration.telemetry.log_level.clone(),
        std::io::stderr,
    );
    init_subscriber(subscriber);

    let resolver = TipResolver::new(Arc::new(configuration.storage.tip_collection()));

    match write_admin_tip(&resolver, &cli.date, &mut std::io::stdout()).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error.cause_chain = ?e, error.message = %e, "Admin tip lookup failed");
            eprintln!("{:?}", e);
            ExitCode::FAILURE
        }
    }
}
