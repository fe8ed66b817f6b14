use clap::{Parser, Subcommand};
use monoapi::{Client, StatementRange, render_client_info, render_transactions};
use std::error::Error;

#[derive(Debug, Parser)]
#[command(name = "monoapi-cli", about = "CLI wrapper for the Monobank personal API")]
struct Cli {
    /// API token; falls back to MONOBANK_TOKEN env var
    #[arg(long, env = "MONOBANK_TOKEN")]
    token: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show the public currency-rate table (no token required)
    Currency,
    /// Show client profile with accounts and jars
    ClientInfo,
    /// Show a statement for an account and optional date window
    Statement {
        /// Account id; "0" selects the primary account
        #[arg(long, default_value = "0")]
        account: String,
        /// Window start, "YYYY-MM-DD HH:MM:SS" in UTC; defaults to 31 days
        /// before the window end
        #[arg(long)]
        from: Option<String>,
        /// Window end, same format; defaults to now
        #[arg(long)]
        to: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let client = Client::new(cli.token)?;

    match cli.command {
        Commands::Currency => {
            let body = client.fetch_currency_table().await?;
            println!("{}", String::from_utf8_lossy(&body));
        }
        Commands::ClientInfo => {
            let info = client.fetch_client_info().await?;
            print!("{}", render_client_info(&info));
        }
        Commands::Statement { account, from, to } => {
            let range = StatementRange::resolve(from.as_deref(), to.as_deref())?;
            let transactions = client.fetch_statement(&account, &range).await?;
            print!("{}", render_transactions(&transactions));
        }
    }

    Ok(())
}
