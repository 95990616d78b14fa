//! Company overview and financial statement summaries

use serde_json::Value;
use std::sync::Arc;
use tracing::instrument;

use crate::api::{VendorFetch, VendorParams};
use crate::error::Result;
use crate::markdown::{field_table, json_text, truncate_chars};
use crate::tools::summarize_or_raw;

const DESCRIPTION_MAX_CHARS: usize = 700;

/// Overview table rows: label and the payload key(s) joined with ` / `
const OVERVIEW_ROWS: &[(&str, &[&str])] = &[
    ("Symbol", &["Symbol"]),
    ("Name", &["Name"]),
    ("Sector / Industry", &["Sector", "Industry"]),
    ("Market Cap", &["MarketCapitalization"]),
    ("Currency", &["Currency"]),
    ("EPS", &["EPS"]),
    ("P/E", &["PERatio"]),
    ("PEG", &["PEGRatio"]),
    ("P/S", &["PriceToSalesRatioTTM"]),
    ("P/B", &["PriceToBookRatio"]),
    ("Dividend Yield", &["DividendYield"]),
    ("Dividend/Share", &["DividendPerShare"]),
    ("52W Low / High", &["52WeekLow", "52WeekHigh"]),
    ("Beta", &["Beta"]),
    ("Analyst Target Price", &["AnalystTargetPrice"]),
    ("Latest Quarter", &["LatestQuarter"]),
];

/// Financial statement endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    BalanceSheet,
    CashFlow,
    IncomeStatement,
}

impl StatementKind {
    /// Vendor function identifier
    pub fn function(self) -> &'static str {
        match self {
            Self::BalanceSheet => "BALANCE_SHEET",
            Self::CashFlow => "CASH_FLOW",
            Self::IncomeStatement => "INCOME_STATEMENT",
        }
    }

    /// Section title used in the summary header
    pub fn title(self) -> &'static str {
        match self {
            Self::BalanceSheet => "Balance Sheet",
            Self::CashFlow => "Cash Flow",
            Self::IncomeStatement => "Income Statement",
        }
    }

    /// Report fields shown after `fiscalDateEnding`
    pub fn key_fields(self) -> &'static [&'static str] {
        match self {
            Self::BalanceSheet => &[
                "totalAssets",
                "totalLiabilities",
                "totalShareholderEquity",
                "cashAndCashEquivalentsAtCarryingValue",
                "currentDebt",
                "shortLongTermDebtTotal",
            ],
            Self::CashFlow => &[
                "operatingCashflow",
                "cashflowFromInvestment",
                "cashflowFromFinancing",
                "capitalExpenditures",
                "dividendPayout",
            ],
            Self::IncomeStatement => &[
                "totalRevenue",
                "grossProfit",
                "operatingIncome",
                "netIncome",
                "ebitda",
                "interestExpense",
            ],
        }
    }
}

/// Fetches fundamentals and renders them as markdown
///
/// Every method returns either the summary or, when the payload cannot be
/// summarized, the vendor's raw text.
pub struct FundamentalDataTool {
    fetcher: Arc<dyn VendorFetch>,
}

impl FundamentalDataTool {
    /// Create a new fundamental data tool
    pub fn new(fetcher: Arc<dyn VendorFetch>) -> Self {
        Self { fetcher }
    }

    /// Company overview (`OVERVIEW`)
    #[instrument(skip(self))]
    pub async fn overview(&self, ticker: &str) -> Result<String> {
        let raw = self
            .fetcher
            .fetch("OVERVIEW", &symbol_params(ticker))
            .await?;
        Ok(summarize_or_raw("OVERVIEW", raw, |payload| {
            summarize_overview(payload, ticker)
        }))
    }

    /// Latest balance sheet reports
    pub async fn balance_sheet(&self, ticker: &str) -> Result<String> {
        self.statement(StatementKind::BalanceSheet, ticker).await
    }

    /// Latest cash flow reports
    pub async fn cash_flow(&self, ticker: &str) -> Result<String> {
        self.statement(StatementKind::CashFlow, ticker).await
    }

    /// Latest income statement reports
    pub async fn income_statement(&self, ticker: &str) -> Result<String> {
        self.statement(StatementKind::IncomeStatement, ticker).await
    }

    #[instrument(skip(self))]
    pub async fn statement(&self, kind: StatementKind, ticker: &str) -> Result<String> {
        let raw = self
            .fetcher
            .fetch(kind.function(), &symbol_params(ticker))
            .await?;
        Ok(summarize_or_raw(kind.function(), raw, |payload| {
            summarize_statement(payload, ticker, kind)
        }))
    }
}

fn symbol_params(ticker: &str) -> VendorParams {
    VendorParams::from([("symbol".to_string(), ticker.to_string())])
}

/// Render an `OVERVIEW` payload; empty when it carries no `Symbol`
pub fn summarize_overview(payload: &Value, ticker: &str) -> String {
    let Some(fields) = payload.as_object().filter(|m| m.contains_key("Symbol")) else {
        return String::new();
    };
    let get = |key: &str| json_text(fields.get(key)).unwrap_or_default();

    let rows: Vec<(&str, String)> = OVERVIEW_ROWS
        .iter()
        .map(|(label, keys)| {
            let value = match *label {
                "Symbol" => json_text(fields.get("Symbol"))
                    .unwrap_or_else(|| ticker.to_string())
                    .to_uppercase(),
                _ => keys
                    .iter()
                    .map(|&k| get(k))
                    .collect::<Vec<_>>()
                    .join(" / "),
            };
            (*label, value)
        })
        .collect();

    let mut out = vec![
        format!(
            "## {} Company Overview (Alpha Vantage)",
            ticker.to_uppercase()
        ),
        String::new(),
        field_table(&rows),
    ];

    let description = get("Description");
    if !description.is_empty() {
        out.push(String::new());
        out.push("### Description (truncated)".to_string());
        out.push(truncate_chars(&description, DESCRIPTION_MAX_CHARS));
    }

    out.join("\n")
}

/// Render a statement payload; empty when it carries no `annualReports`
///
/// Only the first annual and first quarterly report are shown.
pub fn summarize_statement(payload: &Value, ticker: &str, kind: StatementKind) -> String {
    let Some(fields) = payload
        .as_object()
        .filter(|m| m.contains_key("annualReports"))
    else {
        return String::new();
    };

    let first_report = |key: &str| {
        fields
            .get(key)
            .and_then(Value::as_array)
            .and_then(|reports| reports.first())
    };

    let mut out = vec![
        format!(
            "## {} {} (Alpha Vantage)",
            ticker.to_uppercase(),
            kind.title()
        ),
        String::new(),
    ];

    for (label, key) in [
        ("Latest annual", "annualReports"),
        ("Latest quarterly", "quarterlyReports"),
    ] {
        if let Some(report) = first_report(key) {
            out.push(report_block(label, report, kind.key_fields()));
            out.push(String::new());
        }
    }

    out.push("### Notes".to_string());
    out.push(
        "- Showing only the latest annual + quarterly report to keep tool output compact."
            .to_string(),
    );

    out.join("\n").trim().to_string()
}

fn report_block(label: &str, report: &Value, key_fields: &[&str]) -> String {
    let rows: Vec<(&str, String)> = std::iter::once("fiscalDateEnding")
        .chain(key_fields.iter().copied())
        .map(|field| (field, json_text(report.get(field)).unwrap_or_default()))
        .collect();

    format!("### {label}\n\n{}", field_table(&rows))
}
