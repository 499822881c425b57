use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::{QUARTER_OPTIONS, REPORT_TYPE_OPTIONS};
use crate::shared::crud::CrudEntity;
use crate::shared::metadata::{EntityDescriptor, FieldMetadata};

/// Отчёт о движении денежных средств (现金流量表)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReportCashFlow {
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
    pub cash_received_from_sales: Option<f64>,
    #[serde(default)]
    pub net_cash_operating: Option<f64>,
    #[serde(default)]
    pub capital_expenditure: Option<f64>,
    #[serde(default)]
    pub net_cash_investing: Option<f64>,
    #[serde(default)]
    pub net_cash_financing: Option<f64>,
    #[serde(default)]
    pub net_increase_in_cash: Option<f64>,
    #[serde(default)]
    pub cash_end_balance: Option<f64>,

    #[serde(default)]
    pub free_cash_flow: Option<f64>,

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
    FieldMetadata::money("cash_received_from_sales", "销售商品收到的现金").hidden(),
    FieldMetadata::money("net_cash_operating", "经营活动现金流量净额"),
    FieldMetadata::money("capital_expenditure", "资本支出").hidden(),
    FieldMetadata::money("net_cash_investing", "投资活动现金流量净额"),
    FieldMetadata::money("net_cash_financing", "筹资活动现金流量净额"),
    FieldMetadata::money("net_increase_in_cash", "现金净增加额").hidden(),
    FieldMetadata::money("cash_end_balance", "期末现金余额"),
    FieldMetadata::money("free_cash_flow", "自由现金流").derived(),
    FieldMetadata::create_time(),
    FieldMetadata::updated_at(),
];

pub static DESCRIPTOR: EntityDescriptor = EntityDescriptor {
    index: "a004",
    collection: "report_cash_flow",
    service_path: "/service/report/cash-flow",
    element_name: "现金流量表",
    list_name: "现金流量表",
    row_key: "id",
    fields: FIELDS,
};

impl CrudEntity for ReportCashFlow {
    type Id = String;

    fn id(&self) -> String {
        self.id.clone()
    }

    fn descriptor() -> &'static EntityDescriptor {
        &DESCRIPTOR
    }
}
