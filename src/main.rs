use clap::Parser;
use fecproxy::core::cycles::page_info;
use fecproxy::core::summary::{process_cash_data, process_raising_data, process_spending_data};
use fecproxy::domain::model::{Pagination, SummaryLine, Totals};
use fecproxy::utils::{logger, validation::Validate};
use fecproxy::{ApiGateway, AppConfig, Environment};
use serde_json::Value;

#[derive(Debug, Parser)]
#[command(name = "fecproxy")]
#[command(about = "Query the campaign finance API and print display-ready summaries")]
struct Cli {
    /// Committee to fetch financial summaries for, e.g. C00000935
    #[arg(long)]
    committee_id: Option<String>,

    /// Search candidates and committees by name
    #[arg(long)]
    search: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::from_env();

    if config.environment == Environment::Prod {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("starting fecproxy ({})", config.environment.as_str());
    if let Err(e) = config.validate() {
        tracing::error!("configuration invalid: {}", e);
        eprintln!("configuration invalid: {}", e);
        std::process::exit(1);
    }

    let gateway = ApiGateway::new(&config)?;

    if let Some(query) = cli.search.as_deref() {
        let results = gateway.load_search_results(Some(query)).await?;
        for (label, listing) in [
            ("candidates", &results.candidates),
            ("committees", &results.committees),
        ] {
            match parse_pagination(listing) {
                Some(pagination) => println!("{}: {}", label, page_info(&pagination)),
                None => println!("{}: no results", label),
            }
        }
        println!("{}", serde_json::to_string_pretty(&results)?);
    }

    if let Some(committee_id) = cli.committee_id.as_deref() {
        let financials = gateway.load_cmte_financials(committee_id).await?;
        let mut totals = latest_totals(&financials.totals);
        if totals.is_empty() {
            println!("no totals on file for {}", committee_id);
        } else {
            print_summary("Raising", &process_raising_data(&mut totals));
            print_summary("Spending", &process_spending_data(&mut totals));
            print_summary("Cash", &process_cash_data(&totals));
        }
    }

    Ok(())
}

/// The totals endpoint returns one row per cycle, most recent first.
fn latest_totals(totals: &Value) -> Totals {
    match totals.get(0) {
        Some(Value::Object(row)) => row.clone(),
        _ => Totals::new(),
    }
}

fn parse_pagination(listing: &Value) -> Option<Pagination> {
    serde_json::from_value(listing.get("pagination")?.clone()).ok()
}

fn print_summary(title: &str, lines: &[SummaryLine]) {
    println!("{}", title);
    for line in lines {
        let indent = (line.spec.level as usize).saturating_sub(1) * 2;
        println!("{:indent$}{}: {}", "", line.spec.label, line.amount);
    }
    println!();
}
