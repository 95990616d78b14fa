//! News and sentiment summaries

use serde_json::Value;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::api::{VendorFetch, VendorParams, format_datetime_for_api};
use crate::error::Result;
use crate::markdown::{escape_cell, json_text, truncate_chars};
use crate::tools::summarize_or_raw;

const FUNCTION: &str = "NEWS_SENTIMENT";
const FEED_LIMIT: &str = "50";

/// Rows kept in the table
const MAX_ROWS: usize = 25;
/// Rows repeated as summary bullets
const MAX_BULLETS: usize = 8;
const SUMMARY_MAX_CHARS: usize = 280;

const MISSING: &str = "n/a";

/// Fetches `NEWS_SENTIMENT` for one ticker and renders it as markdown
pub struct NewsSentimentTool {
    fetcher: Arc<dyn VendorFetch>,
}

impl NewsSentimentTool {
    /// Create a new news tool
    pub fn new(fetcher: Arc<dyn VendorFetch>) -> Self {
        Self { fetcher }
    }

    /// News between `start_date` and `end_date` (`YYYY-MM-DD` or `YYYY-MM-DD HH:MM`)
    ///
    /// Dates the vendor cannot accept fail before any request is made.
    #[instrument(skip(self))]
    pub async fn news(&self, ticker: &str, start_date: &str, end_date: &str) -> Result<String> {
        let params = VendorParams::from([
            ("tickers".to_string(), ticker.to_string()),
            ("time_from".to_string(), format_datetime_for_api(start_date)?),
            ("time_to".to_string(), format_datetime_for_api(end_date)?),
            ("sort".to_string(), "LATEST".to_string()),
            ("limit".to_string(), FEED_LIMIT.to_string()),
        ]);

        let raw = self.fetcher.fetch(FUNCTION, &params).await?;
        Ok(summarize_or_raw(FUNCTION, raw, |payload| {
            summarize_news_sentiment(payload, ticker, start_date, end_date)
        }))
    }
}

/// One feed entry after normalization
#[derive(Debug, Clone, PartialEq)]
struct NewsRow {
    published: String,
    title: String,
    source: String,
    sentiment: String,
    url: String,
    summary: String,
}

impl NewsRow {
    fn from_item(item: &Value, url: String, ticker: &str) -> Self {
        let text = |key: &str| {
            json_text(item.get(key))
                .map(|s| s.trim().to_string())
                .unwrap_or_default()
        };

        Self {
            published: text("time_published"),
            title: text("title"),
            source: text("source"),
            sentiment: sentiment_for(item, ticker),
            url,
            summary: truncate_chars(&text("summary"), SUMMARY_MAX_CHARS),
        }
    }
}

/// Ticker-specific sentiment when the item lists the ticker, else the overall one
fn sentiment_for(item: &Value, ticker: &str) -> String {
    let field = |value: &Value, key: &str| {
        json_text(value.get(key))
            .unwrap_or_else(|| MISSING.to_string())
    };

    let ticker_entry = item
        .get("ticker_sentiment")
        .and_then(Value::as_array)
        .and_then(|entries| {
            entries.iter().find(|entry| {
                json_text(entry.get("ticker"))
                    .is_some_and(|t| t.eq_ignore_ascii_case(ticker))
            })
        });

    match ticker_entry {
        Some(entry) => format!(
            "{} ({}), rel={}",
            field(entry, "ticker_sentiment_label"),
            field(entry, "ticker_sentiment_score"),
            field(entry, "relevance_score")
        ),
        None => format!(
            "{} ({})",
            field(item, "overall_sentiment_label"),
            field(item, "overall_sentiment_score")
        ),
    }
}

fn item_url(item: &Value) -> String {
    json_text(item.get("url"))
        .or_else(|| json_text(item.get("link")))
        .map(|u| u.trim().to_string())
        .unwrap_or_default()
}

/// Render a `NEWS_SENTIMENT` payload; empty when the feed is missing or empty
pub fn summarize_news_sentiment(
    payload: &Value,
    ticker: &str,
    start_date: &str,
    end_date: &str,
) -> String {
    let feed = match payload.get("feed").and_then(Value::as_array) {
        Some(feed) if !feed.is_empty() => feed,
        _ => return String::new(),
    };

    let mut seen = HashSet::new();
    let mut rows: Vec<NewsRow> = Vec::with_capacity(feed.len());
    for item in feed {
        let url = item_url(item);
        if !url.is_empty() && !seen.insert(url.clone()) {
            debug!(%url, "Skipping duplicate news item");
            continue;
        }
        rows.push(NewsRow::from_item(item, url, ticker));
    }

    // Stable, so equal timestamps keep feed order
    rows.sort_by(|a, b| b.published.cmp(&a.published));
    rows.truncate(MAX_ROWS);

    let mut out = vec![
        format!(
            "## {} News & Sentiment (Alpha Vantage) — {} to {}",
            ticker.to_uppercase(),
            start_date,
            end_date
        ),
        String::new(),
        "| Published | Title | Source | Sentiment | Link |".to_string(),
        "|---|---|---|---|---|".to_string(),
    ];

    for row in &rows {
        out.push(format!(
            "| {} | {} | {} | {} | {} |",
            escape_cell(&row.published),
            escape_cell(&row.title),
            escape_cell(&row.source),
            escape_cell(&row.sentiment),
            escape_cell(&row.url)
        ));
    }

    out.extend([
        String::new(),
        "### Notes".to_string(),
        "- Sentiment uses Alpha Vantage labels/scores; relevance shown when available.".to_string(),
        "- Summaries are truncated to keep context compact.".to_string(),
        String::new(),
        "### Top summaries (truncated)".to_string(),
    ]);

    for row in rows.iter().take(MAX_BULLETS) {
        out.push(format!(
            "- **{}** ({}, {}; {})",
            row.title, row.source, row.published, row.sentiment
        ));
        if !row.url.is_empty() {
            out.push(format!("  - Link: {}", row.url));
        }
        if !row.summary.is_empty() {
            out.push(format!("  - {}", row.summary));
        }
    }

    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockVendorFetch;
    use crate::error::DataError;
    use serde_json::json;

    fn item(url: &str, published: &str, title: &str) -> Value {
        json!({
            "title": title,
            "url": url,
            "time_published": published,
            "source": "Reuters",
            "summary": "Shares moved.",
            "overall_sentiment_score": 0.12,
            "overall_sentiment_label": "Neutral",
            "ticker_sentiment": [
                {"ticker": "MSFT", "relevance_score": "0.2", "ticker_sentiment_score": "0.05", "ticker_sentiment_label": "Neutral"},
                {"ticker": "aapl", "relevance_score": "0.9", "ticker_sentiment_score": "0.41", "ticker_sentiment_label": "Bullish"}
            ]
        })
    }

    fn table_rows(summary: &str) -> Vec<&str> {
        summary
            .lines()
            .skip_while(|l| !l.starts_with("|---"))
            .skip(1)
            .take_while(|l| l.starts_with('|'))
            .collect()
    }

    #[test]
    fn test_summary_layout() {
        let payload = json!({"feed": [item("https://a.example/1", "20240110T120000", "Apple | Vision\nPro")]});
        let summary = summarize_news_sentiment(&payload, "aapl", "2024-01-01", "2024-01-15");
        let lines: Vec<&str> = summary.lines().collect();

        assert_eq!(
            lines[0],
            "## AAPL News & Sentiment (Alpha Vantage) — 2024-01-01 to 2024-01-15"
        );
        assert_eq!(lines[2], "| Published | Title | Source | Sentiment | Link |");
        assert_eq!(
            lines[4],
            "| 20240110T120000 | Apple \\| Vision Pro | Reuters | Bullish (0.41), rel=0.9 | https://a.example/1 |"
        );
        assert!(summary.contains("### Notes"));
        assert!(summary.contains("### Top summaries (truncated)"));
        assert!(summary.contains("  - Link: https://a.example/1"));
        assert!(summary.contains("  - Shares moved."));
    }

    #[test]
    fn test_dedupes_by_url_first_wins() {
        let payload = json!({"feed": [
            item("https://a.example/1", "20240110T120000", "first"),
            item(" https://a.example/1 ", "20240111T120000", "second"),
            item("https://a.example/2", "20240109T120000", "third")
        ]});
        let summary = summarize_news_sentiment(&payload, "AAPL", "s", "e");
        let rows = table_rows(&summary);

        assert_eq!(rows.len(), 2);
        assert!(summary.contains("first"));
        assert!(!summary.contains("second"));
    }

    #[test]
    fn test_link_used_when_url_missing() {
        let mut a = item("", "20240110T120000", "one");
        a["url"] = Value::Null;
        a["link"] = json!("https://b.example/x");
        let mut b = a.clone();
        b["title"] = json!("two");

        let summary = summarize_news_sentiment(&json!({"feed": [a, b]}), "AAPL", "s", "e");
        assert_eq!(table_rows(&summary).len(), 1);
    }

    #[test]
    fn test_items_without_url_are_kept() {
        let mut a = item("", "20240110T120000", "one");
        a.as_object_mut().unwrap().remove("url");
        let b = a.clone();

        let summary = summarize_news_sentiment(&json!({"feed": [a, b]}), "AAPL", "s", "e");
        assert_eq!(table_rows(&summary).len(), 2);
        assert!(!summary.contains("Link:"));
    }

    #[test]
    fn test_sorted_descending_and_capped() {
        let feed: Vec<Value> = (0..30)
            .map(|i| {
                item(
                    &format!("https://a.example/{i}"),
                    &format!("202401{:02}T000000", i % 28 + 1),
                    &format!("story {i}"),
                )
            })
            .collect();
        let summary = summarize_news_sentiment(&json!({"feed": feed}), "AAPL", "s", "e");
        let rows = table_rows(&summary);

        assert_eq!(rows.len(), MAX_ROWS);
        let published: Vec<&str> = rows
            .iter()
            .map(|r| r.split(" | ").next().unwrap().trim_start_matches("| "))
            .collect();
        let mut sorted = published.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(published, sorted);

        let bullets = summary.lines().filter(|l| l.starts_with("- **")).count();
        assert_eq!(bullets, MAX_BULLETS);
    }

    #[test]
    fn test_overall_sentiment_fallback_and_missing_values() {
        let with_overall = json!({"title": "t", "overall_sentiment_label": "Bearish", "overall_sentiment_score": -0.3});
        assert_eq!(sentiment_for(&with_overall, "TSLA"), "Bearish (-0.3)");

        let bare = json!({"title": "t"});
        assert_eq!(sentiment_for(&bare, "TSLA"), "n/a (n/a)");

        let partial = json!({"ticker_sentiment": [{"ticker": "TSLA", "ticker_sentiment_label": "Bullish"}]});
        assert_eq!(sentiment_for(&partial, "tsla"), "Bullish (n/a), rel=n/a");
    }

    #[test]
    fn test_long_summary_truncated() {
        let mut a = item("https://a.example/1", "20240110T120000", "one");
        a["summary"] = json!("s".repeat(400));
        let summary = summarize_news_sentiment(&json!({"feed": [a]}), "AAPL", "s", "e");

        let expected = format!("  - {}...", "s".repeat(277));
        assert!(summary.lines().any(|l| l == expected));
    }

    #[test]
    fn test_empty_feed_yields_nothing() {
        assert_eq!(summarize_news_sentiment(&json!({"feed": []}), "AAPL", "s", "e"), "");
        assert_eq!(summarize_news_sentiment(&json!({"items": "0"}), "AAPL", "s", "e"), "");
        assert_eq!(summarize_news_sentiment(&json!([]), "AAPL", "s", "e"), "");
    }

    #[tokio::test]
    async fn test_news_request_parameters() {
        let mut mock = MockVendorFetch::new();
        mock.expect_fetch()
            .withf(|function, params| {
                function == "NEWS_SENTIMENT"
                    && params.get("tickers").map(String::as_str) == Some("AAPL")
                    && params.get("time_from").map(String::as_str) == Some("20240101T0000")
                    && params.get("time_to").map(String::as_str) == Some("20240115T1730")
                    && params.get("sort").map(String::as_str) == Some("LATEST")
                    && params.get("limit").map(String::as_str) == Some("50")
            })
            .times(1)
            .returning(|_, _| Ok(r#"{"feed": []}"#.to_string()));
        let tool = NewsSentimentTool::new(Arc::new(mock));

        let out = tool.news("AAPL", "2024-01-01", "2024-01-15 17:30").await.unwrap();
        assert_eq!(out, r#"{"feed": []}"#);
    }

    #[tokio::test]
    async fn test_invalid_date_fails_before_fetch() {
        let mut mock = MockVendorFetch::new();
        mock.expect_fetch().never();
        let tool = NewsSentimentTool::new(Arc::new(mock));

        let result = tool.news("AAPL", "Jan 1st", "2024-01-15").await;
        assert!(matches!(result, Err(DataError::InvalidDate(_))));
    }

    #[tokio::test]
    async fn test_news_summarized() {
        let body = json!({"items": "1", "feed": [item("https://a.example/1", "20240110T120000", "one")]}).to_string();
        let mut mock = MockVendorFetch::new();
        mock.expect_fetch().returning(move |_, _| Ok(body.clone()));
        let tool = NewsSentimentTool::new(Arc::new(mock));

        let out = tool.news("AAPL", "2024-01-01", "2024-01-15").await.unwrap();
        assert!(out.starts_with("## AAPL News & Sentiment"));
    }
}
