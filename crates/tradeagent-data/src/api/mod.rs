//! API clients for market data providers

pub mod alpha_vantage;

pub use alpha_vantage::{AlphaVantageClient, VendorFetch, VendorParams, format_datetime_for_api};

#[cfg(test)]
pub use alpha_vantage::MockVendorFetch;
