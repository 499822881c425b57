pub mod aggregate;

pub use aggregate::{Stock, StockId, DESCRIPTOR};
