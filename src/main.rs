use folio_holdings::core::{AppConfig, AppError};
use folio_holdings::holdings::bundle::EmbeddedBundle;
use folio_holdings::holdings::client::HttpRemote;
use folio_holdings::holdings::store::FileStore;
use folio_holdings::holdings::HoldingsResolver;
use folio_holdings::portfolio::PortfolioView;

fn usage() -> &'static str {
    r#"Usage:
    cargo run -- holdings
    cargo run -- summary

Env:
    HOLDINGS_ENDPOINT (default: bundled demo endpoint)
    HOLDINGS_CACHE_DIR (default: OS temp dir)
    HTTP_TIMEOUT_SECS (default 10)
    RUST_LOG (tracing filter, default info)
"#
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cmd = std::env::args().nth(1).unwrap_or_else(|| "summary".to_string());

    let config = AppConfig::from_env();
    let resolver = HoldingsResolver::new(
        HttpRemote::from_config(&config)?,
        FileStore::from_config(&config),
        EmbeddedBundle,
    );

    match cmd.as_str() {
        "holdings" => {
            let holdings = resolver.fetch_holdings().await?;
            println!("{}", serde_json::to_string_pretty(&holdings)?);
        }
        "summary" => {
            let mut view = PortfolioView::new();
            view.refresh(&resolver).await;

            if let Some(msg) = view.error_message() {
                eprintln!("{msg}");
                std::process::exit(1);
            }

            println!("Holdings:         {}", view.holdings().len());
            println!("Current value:    {:.2}", view.current_value());
            println!("Total investment: {:.2}", view.total_investment());
            println!("Total P&L:        {:.2}", view.total_pnl());
            println!("Today's P&L:      {:.2}", view.todays_pnl());
        }
        _ => {
            eprintln!("Unknown command: {cmd}\n\n{}", usage());
            std::process::exit(2);
        }
    }

    Ok(())
}
