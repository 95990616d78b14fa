//! Insider transactions

use std::sync::Arc;
use tracing::instrument;

use crate::api::{VendorFetch, VendorParams};
use crate::error::Result;

/// Fetches `INSIDER_TRANSACTIONS`; the vendor text is returned unchanged
pub struct InsiderTransactionsTool {
    fetcher: Arc<dyn VendorFetch>,
}

impl InsiderTransactionsTool {
    pub fn new(fetcher: Arc<dyn VendorFetch>) -> Self {
        Self { fetcher }
    }

    #[instrument(skip(self))]
    pub async fn transactions(&self, symbol: &str) -> Result<String> {
        let params = VendorParams::from([("symbol".to_string(), symbol.to_string())]);
        self.fetcher.fetch("INSIDER_TRANSACTIONS", &params).await
    }
}
