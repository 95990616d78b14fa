//! Command-line interface for tradeagent-rs

mod catalog;
mod models;
mod prompts;

use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tradeagent_data::{
    AlphaVantageClient, DEFAULT_GLOBAL_NEWS_LIMIT, DEFAULT_LOOK_BACK_DAYS, FundamentalDataTool,
    InsiderTransactionsTool, NewsSentimentTool, WebResearchTool,
};
use tradeagent_utils::Config;

use crate::prompts::{DialoguerPrompter, collect_selections};

#[derive(Parser, Debug)]
#[command(name = "tradeagent")]
#[command(version, about = "Trading research setup and market-data adapters", long_about = None)]
struct Cli {
    /// JSON config file (environment variables still override it)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Choose ticker, date, analysts, depth and models interactively (default)
    Select,
    /// Company overview
    Overview { ticker: String },
    /// Latest balance sheet
    BalanceSheet { ticker: String },
    /// Latest cash flow statement
    CashFlow { ticker: String },
    /// Latest income statement
    IncomeStatement { ticker: String },
    /// News and sentiment between two dates
    News {
        ticker: String,
        /// YYYY-MM-DD or "YYYY-MM-DD HH:MM"
        #[arg(long)]
        start: String,
        #[arg(long)]
        end: String,
    },
    /// Insider transactions (raw vendor output)
    Insider { symbol: String },
    /// Web search for news and social discussion
    WebNews {
        query: String,
        #[arg(long)]
        start: String,
        #[arg(long)]
        end: String,
    },
    /// Web search for global macro news
    GlobalNews {
        /// Current date, YYYY-MM-DD
        date: String,
        #[arg(long, default_value_t = DEFAULT_LOOK_BACK_DAYS)]
        look_back_days: u32,
        #[arg(long, default_value_t = DEFAULT_GLOBAL_NEWS_LIMIT)]
        limit: u32,
    },
    /// Web search for fundamentals discussion
    WebFundamentals { ticker: String, date: String },
}

#[tokio::main]
async fn main() {
    tradeagent_utils::init_tracing();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("\n{}", format!("{e:#}").red());
        std::process::exit(1);
    }
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<Config> {
    let config = match path {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::from_env(),
    };
    config.validate()?;
    Ok(config)
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_ref())?;
    let command = cli.command.unwrap_or(Command::Select);
    info!(?command, "Starting tradeagent");

    let output = match command {
        Command::Select => {
            let selections = collect_selections(&mut DialoguerPrompter::new())?;
            println!("\n{}", "Selections".bold().green());
            serde_json::to_string_pretty(&selections)?
        }
        Command::Overview { ticker } => fundamentals(&config)?.overview(&ticker).await?,
        Command::BalanceSheet { ticker } => fundamentals(&config)?.balance_sheet(&ticker).await?,
        Command::CashFlow { ticker } => fundamentals(&config)?.cash_flow(&ticker).await?,
        Command::IncomeStatement { ticker } => {
            fundamentals(&config)?.income_statement(&ticker).await?
        }
        Command::News { ticker, start, end } => {
            NewsSentimentTool::new(alpha_vantage(&config)?)
                .news(&ticker, &start, &end)
                .await?
        }
        Command::Insider { symbol } => {
            InsiderTransactionsTool::new(alpha_vantage(&config)?)
                .transactions(&symbol)
                .await?
        }
        Command::WebNews { query, start, end } => {
            WebResearchTool::from_config(&config)?
                .stock_news(&query, &start, &end)
                .await?
        }
        Command::GlobalNews {
            date,
            look_back_days,
            limit,
        } => {
            WebResearchTool::from_config(&config)?
                .global_news(&date, look_back_days, limit)
                .await?
        }
        Command::WebFundamentals { ticker, date } => {
            WebResearchTool::from_config(&config)?
                .fundamentals(&ticker, &date)
                .await?
        }
    };

    println!("{output}");
    Ok(())
}

fn alpha_vantage(config: &Config) -> anyhow::Result<Arc<AlphaVantageClient>> {
    Ok(Arc::new(AlphaVantageClient::from_config(config)?))
}

fn fundamentals(config: &Config) -> anyhow::Result<FundamentalDataTool> {
    Ok(FundamentalDataTool::new(alpha_vantage(config)?))
}
