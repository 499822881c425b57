pub mod aggregate;

pub use aggregate::{ReportBalanceSheet, DESCRIPTOR};
