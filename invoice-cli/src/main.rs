use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use invoice_core::{
    download_invoice, format::format_money, Dealership, InvoiceData, InvoiceSource,
    SqliteInvoiceSource,
};

#[derive(Parser, Debug)]
#[command(version, about = "Generate vehicle sale invoices as PDF files")]
struct CliArguments {
    /// Directory the invoice PDF is saved into.
    #[arg(short = 'o', long = "out-dir", value_name = "dir", default_value = ".", global = true)]
    out_dir: PathBuf,
    /// JSON file with the seller name, address and phone.
    #[arg(long = "dealership", value_name = "json_file", global = true)]
    dealership_path: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render an invoice from a JSON document.
    Render {
        #[arg(short = 'i', long = "invoice", value_name = "json_file")]
        invoice_path: PathBuf,
    },
    /// Render the invoice for a sale stored in the dealership database.
    Export {
        #[arg(long = "db", value_name = "sqlite_file")]
        db_path: PathBuf,
        #[arg(short = 's', long = "sale", value_name = "sale_id")]
        sale_id: String,
    },
    /// List recent sales.
    List {
        #[arg(long = "db", value_name = "sqlite_file")]
        db_path: PathBuf,
        #[arg(short = 'n', long = "limit", default_value_t = 20)]
        limit: usize,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    match fallible_main() {
        Ok(code) => code,
        Err(error) => {
            log::error!("{:#}", error);
            ExitCode::FAILURE
        }
    }
}

fn fallible_main() -> anyhow::Result<ExitCode> {
    let arguments = CliArguments::parse();
    log::debug!("{:?}", arguments);

    let seller = match &arguments.dealership_path {
        Some(path) => Dealership::from_path(path)?,
        None => Dealership::default(),
    };

    match &arguments.command {
        Command::Render { invoice_path } => {
            let invoice = read_invoice(invoice_path)?;
            download_invoice(&invoice, &seller, &arguments.out_dir)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Export { db_path, sale_id } => {
            let source = open_source(db_path)?;
            match source.invoice(sale_id) {
                Ok(invoice) => {
                    download_invoice(&invoice, &seller, &arguments.out_dir)?;
                    Ok(ExitCode::SUCCESS)
                }
                Err(error) if error.is_missing_record() => {
                    // Never render partial data; show the sales list instead.
                    log::warn!("cannot build invoice: {}", error);
                    print_sales(&source, 20)?;
                    Ok(ExitCode::from(2))
                }
                Err(error) => Err(error).context(format!("failed to load sale {}", sale_id)),
            }
        }
        Command::List { db_path, limit } => {
            let source = open_source(db_path)?;
            print_sales(&source, *limit)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn read_invoice(path: &Path) -> anyhow::Result<InvoiceData> {
    let content = std::fs::read(path)
        .with_context(|| format!("failed to read invoice document {}", path.display()))?;
    serde_json::from_slice(&content)
        .with_context(|| format!("failed to parse invoice document {}", path.display()))
}

fn open_source(path: &Path) -> anyhow::Result<SqliteInvoiceSource> {
    SqliteInvoiceSource::open(path)
        .with_context(|| format!("failed to open database {}", path.display()))
}

fn print_sales(source: &SqliteInvoiceSource, limit: usize) -> anyhow::Result<()> {
    let sales = source.recent_sales(limit)?;
    if sales.is_empty() {
        println!("no sales recorded");
    }
    for sale in sales {
        println!(
            "{:<12} {:<10} {:>14}  {:<24} {}",
            sale.sale_id,
            sale.date,
            format_money(sale.price),
            sale.vehicle,
            sale.customer,
        );
    }
    Ok(())
}
