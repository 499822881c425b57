use serde::{Deserialize, Serialize};

use crate::shared::crud::CrudEntity;
use crate::shared::metadata::{EntityDescriptor, FieldMetadata};

/// Строка рейтинга по денежному потоку (现金排行)
///
/// Все показатели рассчитываются на сервере и только отображаются.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RankingCash {
    #[serde(default, deserialize_with = "crate::shared::crud::string_or_number")]
    pub id: String,

    /// Период рейтинга, например "2023"
    pub period: String,
    #[serde(default)]
    pub rank: Option<i64>,
    pub stock_code: String,
    #[serde(default)]
    pub stock_name: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,

    #[serde(default)]
    pub net_cash_operating: Option<f64>,
    #[serde(default)]
    pub free_cash_flow: Option<f64>,
    #[serde(default)]
    pub cash_to_revenue: Option<f64>,
    #[serde(default)]
    pub cash_cagr: Option<f64>,
    #[serde(default)]
    pub score: Option<f64>,

    #[serde(default)]
    pub create_time: Option<String>,
}

pub const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::id(),
    FieldMetadata::text("period", "统计期").required().width(90),
    FieldMetadata::integer("rank", "排名").derived().sortable().width(70),
    FieldMetadata::text("stock_code", "股票代码").required().width(110),
    FieldMetadata::text("stock_name", "股票名称").width(120),
    FieldMetadata::text("industry", "所属行业"),
    FieldMetadata::money("net_cash_operating", "经营现金流").derived(),
    FieldMetadata::money("free_cash_flow", "自由现金流").derived(),
    FieldMetadata::percent("cash_to_revenue", "现金收入比").derived(),
    FieldMetadata::percent("cash_cagr", "现金流复合增长率").derived(),
    FieldMetadata::decimal("score", "综合得分").derived().sortable(),
    FieldMetadata::create_time(),
];

pub static DESCRIPTOR: EntityDescriptor = EntityDescriptor {
    index: "a005",
    collection: "ranking_cash",
    service_path: "/service/ranking/cash",
    element_name: "现金排行",
    list_name: "现金排行榜",
    row_key: "id",
    fields: FIELDS,
};

impl CrudEntity for RankingCash {
    type Id = String;

    fn id(&self) -> String {
        self.id.clone()
    }

    fn descriptor() -> &'static EntityDescriptor {
        &DESCRIPTOR
    }
}
