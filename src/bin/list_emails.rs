//! List every user and group in the Workspace domain.
//!
//! Prints an HTML fragment (or, with `--format json`, a JSON document) to
//! stdout for embedding in the intranet contact page.

use clap::Parser;
use env_logger::Env;

use gapps_email_tools::cli::{self, CommonArgs, list};
use gapps_email_tools::error::Result;
use gapps_email_tools::output::{self, OutputFormat};

#[derive(Parser)]
#[command(
    name = "list_emails",
    version,
    about = "List email accounts in the Workspace domain as HTML"
)]
struct Cli {
    /// Workspace domain to list groups for
    #[arg(long, env = "GAPPS_DOMAIN", value_name = "DOMAIN")]
    domain: Option<String>,

    /// Customer ID for the user listing
    #[arg(long, env = "GAPPS_CUSTOMER", value_name = "ID")]
    customer: Option<String>,

    /// Output format
    #[arg(long, default_value = "html")]
    format: OutputFormat,

    #[command(flatten)]
    common: CommonArgs,
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    if let Err(err) = run().await {
        eprintln!("list_emails: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut config = cli.common.resolve_config()?;
    if let Some(domain) = cli.domain {
        config.domain = domain;
    }
    if let Some(customer) = cli.customer {
        config.customer = customer;
    }

    let client = cli::build_client(&config)?;
    let listing = list::run(&client, &config).await?;

    print!("{}", output::render(&listing, cli.format)?);
    Ok(())
}
