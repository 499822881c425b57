use serde::{Deserialize, Serialize};

use crate::shared::crud::CrudEntity;
use crate::shared::metadata::{EntityDescriptor, FieldMetadata};

/// Строка многофакторного рейтинга (多因子排行)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RankingMultipleFactor {
    #[serde(default, deserialize_with = "crate::shared::crud::string_or_number")]
    pub id: String,

    pub period: String,
    #[serde(default)]
    pub rank: Option<i64>,
    pub stock_code: String,
    #[serde(default)]
    pub stock_name: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,

    // Factors
    #[serde(default)]
    pub roe: Option<f64>,
    #[serde(default)]
    pub revenue_cagr: Option<f64>,
    #[serde(default)]
    pub profit_cagr: Option<f64>,
    #[serde(default)]
    pub gross_margin: Option<f64>,
    #[serde(default)]
    pub pe: Option<f64>,
    #[serde(default)]
    pub pb: Option<f64>,
    #[serde(default)]
    pub total_score: Option<f64>,

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
    FieldMetadata::percent("roe", "ROE").derived(),
    FieldMetadata::percent("revenue_cagr", "营收复合增长率").derived(),
    FieldMetadata::percent("profit_cagr", "利润复合增长率").derived(),
    FieldMetadata::percent("gross_margin", "毛利率").derived().hidden(),
    FieldMetadata::decimal("pe", "市盈率").derived().sortable().hidden(),
    FieldMetadata::decimal("pb", "市净率").derived().sortable().hidden(),
    FieldMetadata::decimal("total_score", "综合得分").derived().sortable(),
    FieldMetadata::create_time(),
];

pub static DESCRIPTOR: EntityDescriptor = EntityDescriptor {
    index: "a006",
    collection: "ranking_multiple_factor",
    service_path: "/service/ranking/multiple-factor",
    element_name: "多因子排行",
    list_name: "多因子排行榜",
    row_key: "id",
    fields: FIELDS,
};

impl CrudEntity for RankingMultipleFactor {
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
    fn factors_are_read_only() {
        let editable: Vec<_> = FIELDS.iter().filter(|f| f.is_editable()).map(|f| f.name).collect();
        assert_eq!(editable, vec!["period", "stock_code", "stock_name", "industry"]);
    }
}
