use monoapi::{Client, DEFAULT_ACCOUNT, StatementRange, render_transactions};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let client = Client::from_env()
        .map_err(|_| "Set MONOBANK_TOKEN in your environment or .env file")?;

    // Fetch the default window: the last 31 days on the primary account.
    let range = StatementRange::resolve(None, None)?;
    let transactions = client.fetch_statement(DEFAULT_ACCOUNT, &range).await?;

    println!(
        "Fetched {} transactions between {} and {}:",
        transactions.len(),
        range.from,
        range.to
    );
    print!("{}", render_transactions(&transactions));

    Ok(())
}
