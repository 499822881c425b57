//! Common types for the market-data entities

pub mod options;

pub use options::{
    EXCHANGE_OPTIONS, LISTING_STATUS_OPTIONS, MARKET_OPTIONS, QUARTER_OPTIONS,
    REPORT_TYPE_OPTIONS,
};
