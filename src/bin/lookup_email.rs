//! Check whether an email address exists in the Workspace domain.
//!
//! Exit codes: 0 if the address resolves to a user or group, 1 if it does
//! not, 2 if the directory API is unreachable or misconfigured.

use clap::Parser;
use env_logger::Env;

use gapps_email_tools::cli::lookup::{self, LookupOutcome};
use gapps_email_tools::cli::{self, CommonArgs};
use gapps_email_tools::error::Result;

#[derive(Parser)]
#[command(
    name = "lookup_email",
    version,
    about = "Try to find an email address in the Workspace domain"
)]
struct Cli {
    /// Email address to look up
    address: String,

    #[command(flatten)]
    common: CommonArgs,
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let code = match run(&cli).await {
        Ok(LookupOutcome::Found) => 0,
        Ok(LookupOutcome::NotFound) => 1,
        Ok(LookupOutcome::ApiUnavailable) => {
            eprintln!("lookup_email: API not working");
            2
        }
        Err(err) => {
            eprintln!("lookup_email: {}", err);
            2
        }
    };
    std::process::exit(code);
}

async fn run(cli: &Cli) -> Result<LookupOutcome> {
    let config = cli.common.resolve_config()?;
    let client = cli::build_client(&config)?;

    // The delegation subject doubles as the canary: it must exist.
    Ok(lookup::run(&client, &config.subject, &cli.address).await)
}
