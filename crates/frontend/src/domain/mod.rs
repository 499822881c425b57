pub mod a001_stock;
pub mod a002_report_balance_sheet;
pub mod a003_report_income_statement;
pub mod a004_report_cash_flow;
pub mod a005_ranking_cash;
pub mod a006_ranking_multiple_factor;
pub mod common;
