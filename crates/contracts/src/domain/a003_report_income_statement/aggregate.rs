use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::{QUARTER_OPTIONS, REPORT_TYPE_OPTIONS};
use crate::shared::crud::CrudEntity;
use crate::shared::metadata::{EntityDescriptor, FieldMetadata};

/// Отчёт о прибылях и убытках (利润表)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReportIncomeStatement {
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
    pub total_revenue: Option<f64>,
    #[serde(default)]
    pub operating_cost: Option<f64>,
    #[serde(default)]
    pub selling_expense: Option<f64>,
    #[serde(default)]
    pub admin_expense: Option<f64>,
    #[serde(default)]
    pub financial_expense: Option<f64>,
    #[serde(default)]
    pub operating_profit: Option<f64>,
    #[serde(default)]
    pub total_profit: Option<f64>,
    #[serde(default)]
    pub net_profit: Option<f64>,
    #[serde(default)]
    pub net_profit_parent: Option<f64>,
    #[serde(default)]
    pub basic_eps: Option<f64>,

    #[serde(default)]
    pub gross_margin: Option<f64>,
    #[serde(default)]
    pub net_margin: Option<f64>,
    #[serde(default)]
    pub roe: Option<f64>,

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
    FieldMetadata::money("total_revenue", "营业总收入"),
    FieldMetadata::money("operating_cost", "营业成本").hidden(),
    FieldMetadata::money("selling_expense", "销售费用").hidden(),
    FieldMetadata::money("admin_expense", "管理费用").hidden(),
    FieldMetadata::money("financial_expense", "财务费用").hidden(),
    FieldMetadata::money("operating_profit", "营业利润"),
    FieldMetadata::money("total_profit", "利润总额").hidden(),
    FieldMetadata::money("net_profit", "净利润"),
    FieldMetadata::money("net_profit_parent", "归母净利润"),
    FieldMetadata::decimal("basic_eps", "基本每股收益").width(100),
    FieldMetadata::percent("gross_margin", "毛利率").derived(),
    FieldMetadata::percent("net_margin", "净利率").derived().hidden(),
    FieldMetadata::percent("roe", "ROE").derived(),
    FieldMetadata::create_time(),
    FieldMetadata::updated_at(),
];

pub static DESCRIPTOR: EntityDescriptor = EntityDescriptor {
    index: "a003",
    collection: "report_income_statement",
    service_path: "/service/report/income-statement",
    element_name: "利润表",
    list_name: "利润表",
    row_key: "id",
    fields: FIELDS,
};

impl CrudEntity for ReportIncomeStatement {
    type Id = String;

    fn id(&self) -> String {
        self.id.clone()
    }

    fn descriptor() -> &'static EntityDescriptor {
        &DESCRIPTOR
    }
}
