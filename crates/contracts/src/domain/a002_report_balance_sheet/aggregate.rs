use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::{QUARTER_OPTIONS, REPORT_TYPE_OPTIONS};
use crate::shared::crud::CrudEntity;
use crate::shared::metadata::{EntityDescriptor, FieldMetadata};

/// Балансовый отчёт за период (资产负债表)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReportBalanceSheet {
    #[serde(default, deserialize_with = "crate::shared::crud::string_or_number")]
    pub id: String,

    pub stock_code: String,
    #[serde(default)]
    pub stock_name: Option<String>,
    pub year: i32,
    pub quarter: i32,
    #[serde(default)]
    pub report_date: Option<NaiveDate>,
    #[serde(default)]
    pub report_type: Option<String>,

    #[serde(default)]
    pub monetary_funds: Option<f64>,
    #[serde(default)]
    pub accounts_receivable: Option<f64>,
    #[serde(default)]
    pub inventory: Option<f64>,
    #[serde(default)]
    pub total_current_assets: Option<f64>,
    #[serde(default)]
    pub fixed_assets: Option<f64>,
    #[serde(default)]
    pub total_assets: Option<f64>,
    #[serde(default)]
    pub total_current_liabilities: Option<f64>,
    #[serde(default)]
    pub total_liabilities: Option<f64>,
    #[serde(default)]
    pub total_equity: Option<f64>,

    // Derived, supplied by the backend
    #[serde(default)]
    pub debt_to_asset_ratio: Option<f64>,
    #[serde(default)]
    pub current_ratio: Option<f64>,

    #[serde(default)]
    pub create_time: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

pub const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::id(),
    FieldMetadata::text("stock_code", "股票代码")
        .required()
        .max_length(10)
        .width(110),
    FieldMetadata::text("stock_name", "股票名称").create_only().width(120),
    FieldMetadata::integer("year", "年度")
        .required()
        .range(1990.0, 2100.0)
        .sortable()
        .width(80),
    FieldMetadata::enumeration("quarter", "季度", QUARTER_OPTIONS)
        .required()
        .width(80),
    FieldMetadata::date("report_date", "报告期").sortable(),
    FieldMetadata::enumeration("report_type", "报表类型", REPORT_TYPE_OPTIONS)
        .batch()
        .hidden(),
    FieldMetadata::money("monetary_funds", "货币资金"),
    FieldMetadata::money("accounts_receivable", "应收账款").hidden(),
    FieldMetadata::money("inventory", "存货").hidden(),
    FieldMetadata::money("total_current_assets", "流动资产合计").hidden(),
    FieldMetadata::money("fixed_assets", "固定资产").hidden(),
    FieldMetadata::money("total_assets", "资产总计"),
    FieldMetadata::money("total_current_liabilities", "流动负债合计").hidden(),
    FieldMetadata::money("total_liabilities", "负债合计"),
    FieldMetadata::money("total_equity", "所有者权益合计"),
    FieldMetadata::percent("debt_to_asset_ratio", "资产负债率").derived(),
    FieldMetadata::decimal("current_ratio", "流动比率").derived().hidden(),
    FieldMetadata::create_time(),
    FieldMetadata::updated_at(),
];

pub static DESCRIPTOR: EntityDescriptor = EntityDescriptor {
    index: "a002",
    collection: "report_balance_sheet",
    service_path: "/service/report/balance-sheet",
    element_name: "资产负债表",
    list_name: "资产负债表",
    row_key: "id",
    fields: FIELDS,
};

impl CrudEntity for ReportBalanceSheet {
    type Id = String;

    fn id(&self) -> String {
        self.id.clone()
    }

    fn descriptor() -> &'static EntityDescriptor {
        &DESCRIPTOR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_ratios_stay_out_of_forms() {
        let update: Vec<_> = DESCRIPTOR.update_fields().iter().map(|f| f.name).collect();
        assert!(update.contains(&"total_assets"));
        assert!(!update.contains(&"debt_to_asset_ratio"));
        assert!(!update.contains(&"current_ratio"));
        assert!(!update.contains(&"stock_name"));
    }
}
