pub mod aggregate;

pub use aggregate::{ReportIncomeStatement, DESCRIPTOR};
