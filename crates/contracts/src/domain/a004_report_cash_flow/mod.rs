pub mod aggregate;

pub use aggregate::{ReportCashFlow, DESCRIPTOR};
