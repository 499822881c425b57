//! Option lists shared by the market-data entities

use crate::shared::metadata::EnumOption;

pub const EXCHANGE_OPTIONS: &[EnumOption] = &[
    EnumOption::new("SH", "上交所"),
    EnumOption::new("SZ", "深交所"),
    EnumOption::new("BJ", "北交所"),
];

pub const MARKET_OPTIONS: &[EnumOption] = &[
    EnumOption::new("main", "主板"),
    EnumOption::new("gem", "创业板"),
    EnumOption::new("star", "科创板"),
    EnumOption::new("bse", "北交所"),
];

pub const LISTING_STATUS_OPTIONS: &[EnumOption] = &[
    EnumOption::new("L", "上市"),
    EnumOption::new("D", "退市"),
    EnumOption::new("P", "暂停上市"),
];

/// Quarter values are sent as numbers
pub const QUARTER_OPTIONS: &[EnumOption] = &[
    EnumOption::new("1", "一季度"),
    EnumOption::new("2", "二季度"),
    EnumOption::new("3", "三季度"),
    EnumOption::new("4", "四季度"),
];

pub const REPORT_TYPE_OPTIONS: &[EnumOption] = &[
    EnumOption::new("consolidated", "合并报表"),
    EnumOption::new("parent", "母公司报表"),
];

