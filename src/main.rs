use clap::Parser;
use miette::{IntoDiagnostic, Result};
use scheme_payments::application::payment_service::PaymentService;
use scheme_payments::config::{AppConfig, DataStoreType};
use scheme_payments::infrastructure::DataStoreFactory;
use scheme_payments::interfaces::csv::account_reader::AccountReader;
use scheme_payments::interfaces::csv::account_writer::AccountWriter;
use scheme_payments::interfaces::csv::payment_reader::PaymentRequestReader;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Payment requests CSV file
    payments: PathBuf,

    /// Accounts CSV file used to seed the account store
    #[arg(long)]
    accounts: Option<PathBuf>,

    /// Account store to use. "Backup" selects persistent storage.
    #[arg(long)]
    data_store_type: Option<DataStoreType>,

    /// Path to the persistent account database
    #[arg(long)]
    db_path: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::from_env();
    if let Some(data_store_type) = cli.data_store_type {
        config.data_store_type = data_store_type;
    }
    if let Some(db_path) = cli.db_path {
        config.backup_db_path = db_path;
    }

    let store = DataStoreFactory::new(config).data_store().into_diagnostic()?;

    if let Some(path) = cli.accounts {
        let file = File::open(path).into_diagnostic()?;
        for account in AccountReader::new(file).accounts() {
            match account {
                Ok(account) => store.update(account).await.into_diagnostic()?,
                Err(e) => tracing::error!("Error reading account: {}", e),
            }
        }
    }

    let service = PaymentService::new(store);

    let file = File::open(cli.payments).into_diagnostic()?;
    for request in PaymentRequestReader::new(file).requests() {
        match request {
            // Unsupported schemes and storage faults abort the run.
            Ok(request) => {
                service.make_payment(&request).await.into_diagnostic()?;
            }
            Err(e) => tracing::error!("Error reading payment: {}", e),
        }
    }

    let accounts = service.into_results().await.into_diagnostic()?;

    let stdout = io::stdout();
    let mut writer = AccountWriter::new(stdout.lock());
    writer.write_accounts(accounts).into_diagnostic()?;

    Ok(())
}
