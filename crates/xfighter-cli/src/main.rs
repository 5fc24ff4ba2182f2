/*
[INPUT]:  CLI arguments, optional YAML configuration, XFIGHTER_* environment
[OUTPUT]: API results printed as JSON
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or subcommands
*/

mod settings;

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::json;
use tracing::info;
use tracing_subscriber::EnvFilter;

use settings::Settings;
use xfighter::{OrderType, XfighterClient};

#[derive(Parser, Debug)]
#[command(name = "xfighter", version, about = "Command-line client for the Xfighter trading API")]
struct Cli {
    #[arg(long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "warn")]
    log_level: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the API is up
    Heartbeat,
    /// Check that a venue is up
    VenueHeartbeat {
        #[arg(long)]
        venue: Option<String>,
    },
    /// List the stocks traded on a venue
    Stocks {
        #[arg(long)]
        venue: Option<String>,
    },
    /// Show the current quote for a stock
    Quote {
        symbol: String,
        #[arg(long)]
        venue: Option<String>,
    },
    /// Show the orderbook for a stock
    Orderbook {
        symbol: String,
        #[arg(long)]
        venue: Option<String>,
    },
    /// Place a buy order
    Buy(OrderArgs),
    /// Place a sell order
    Sell(OrderArgs),
    /// Show the state of an order
    Status {
        symbol: String,
        id: u64,
        #[arg(long)]
        venue: Option<String>,
    },
    /// Cancel an order
    Cancel {
        symbol: String,
        id: u64,
        #[arg(long)]
        venue: Option<String>,
    },
    /// List the orders of an account, optionally for one stock
    Orders {
        #[arg(long)]
        symbol: Option<String>,
        #[arg(long)]
        venue: Option<String>,
        #[arg(long)]
        account: Option<String>,
    },
}

#[derive(clap::Args, Debug)]
struct OrderArgs {
    symbol: String,
    /// Limit price in cents
    #[arg(long)]
    price: u64,
    #[arg(long)]
    qty: u64,
    /// limit, market, fill-or-kill or immediate-or-cancel
    #[arg(long = "type", default_value = "limit")]
    order_type: OrderType,
    #[arg(long)]
    venue: Option<String>,
    #[arg(long)]
    account: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    let settings = Settings::load(args.config_path.as_deref()).context("load settings")?;
    info!(base_url = %settings.base_url, "configuration loaded");

    let client =
        XfighterClient::with_config(settings.client_config()).context("create API client")?;

    run(&client, &settings, args.command).await
}

async fn run(client: &XfighterClient, settings: &Settings, command: Command) -> Result<()> {
    match command {
        Command::Heartbeat => {
            let up = client.heartbeat().await.context("API heartbeat")?;
            print_json(&json!({ "up": up }))
        }
        Command::VenueHeartbeat { venue } => {
            let venue = settings.venue_or(venue)?;
            let up = client
                .venue_heartbeat(&venue)
                .await
                .with_context(|| format!("heartbeat for venue {venue}"))?;
            print_json(&json!({ "venue": venue, "up": up }))
        }
        Command::Stocks { venue } => {
            let venue = settings.venue_or(venue)?;
            print_json(&client.stocks(&venue).await.context("list stocks")?)
        }
        Command::Quote { symbol, venue } => {
            let venue = settings.venue_or(venue)?;
            print_json(&client.quote(&venue, &symbol).await.context("fetch quote")?)
        }
        Command::Orderbook { symbol, venue } => {
            let venue = settings.venue_or(venue)?;
            print_json(
                &client
                    .orderbook(&venue, &symbol)
                    .await
                    .context("fetch orderbook")?,
            )
        }
        Command::Buy(order) => {
            let (account, venue) = order_target(settings, &order)?;
            let placed = client
                .buy(&account, &venue, &order.symbol, order.price, order.qty, order.order_type)
                .await
                .context("place buy order")?;
            print_json(&placed)
        }
        Command::Sell(order) => {
            let (account, venue) = order_target(settings, &order)?;
            let placed = client
                .sell(&account, &venue, &order.symbol, order.price, order.qty, order.order_type)
                .await
                .context("place sell order")?;
            print_json(&placed)
        }
        Command::Status { symbol, id, venue } => {
            let venue = settings.venue_or(venue)?;
            print_json(
                &client
                    .order_status(&venue, &symbol, id)
                    .await
                    .with_context(|| format!("status of order {id}"))?,
            )
        }
        Command::Cancel { symbol, id, venue } => {
            let venue = settings.venue_or(venue)?;
            print_json(
                &client
                    .cancel_order(&venue, &symbol, id)
                    .await
                    .with_context(|| format!("cancel order {id}"))?,
            )
        }
        Command::Orders {
            symbol,
            venue,
            account,
        } => {
            let venue = settings.venue_or(venue)?;
            let account = settings.account_or(account)?;
            let status = match symbol {
                Some(symbol) => client.account_stock_orders(&venue, &account, &symbol).await,
                None => client.account_orders(&venue, &account).await,
            }
            .with_context(|| format!("orders for account {account}"))?;
            print_json(&status)
        }
    }
}

fn order_target(settings: &Settings, order: &OrderArgs) -> Result<(String, String)> {
    Ok((
        settings.account_or(order.account.clone())?,
        settings.venue_or(order.venue.clone())?,
    ))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("render JSON output")?;
    println!("{rendered}");
    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}
