use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::common::{EXCHANGE_OPTIONS, LISTING_STATUS_OPTIONS, MARKET_OPTIONS};
use crate::shared::crud::{string_or_number, CrudEntity, EntityId};
use crate::shared::metadata::{EntityDescriptor, FieldMetadata};

// ============================================================================
// ID Type
// ============================================================================

/// Идентификатор записи акции (строка, назначается сервером)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
pub struct StockId(pub String);

impl<'de> Deserialize<'de> for StockId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        string_or_number(deserializer).map(Self)
    }
}

impl StockId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl EntityId for StockId {
    fn as_string(&self) -> String {
        self.0.clone()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        if s.trim().is_empty() {
            return Err("Empty stock id".to_string());
        }
        Ok(Self(s.to_string()))
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Карточка акции (справочник ценных бумаг)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Stock {
    #[serde(default)]
    pub id: StockId,

    pub stock_code: String,
    pub stock_name: String,
    #[serde(default)]
    pub exchange: Option<String>,
    #[serde(default)]
    pub market: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub area: Option<String>,
    #[serde(default)]
    pub list_date: Option<NaiveDate>,
    #[serde(default)]
    pub list_status: Option<String>,
    #[serde(default)]
    pub total_share: Option<f64>,
    #[serde(default)]
    pub remark: Option<String>,

    // Audit
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
        .sortable()
        .width(110)
        .placeholder("如 600000"),
    FieldMetadata::text("stock_name", "股票名称")
        .required()
        .max_length(32)
        .width(140),
    FieldMetadata::enumeration("exchange", "交易所", EXCHANGE_OPTIONS).width(90),
    FieldMetadata::enumeration("market", "板块", MARKET_OPTIONS).batch(),
    FieldMetadata::text("industry", "所属行业").max_length(32).batch(),
    FieldMetadata::text("area", "地域").max_length(16).hidden(),
    FieldMetadata::date("list_date", "上市日期").sortable(),
    FieldMetadata::enumeration("list_status", "上市状态", LISTING_STATUS_OPTIONS).batch(),
    FieldMetadata::decimal("total_share", "总股本(万股)")
        .range(0.0, 1.0e9)
        .hidden(),
    FieldMetadata::long_text("remark", "备注").max_length(500),
    FieldMetadata::create_time(),
    FieldMetadata::updated_at(),
];

pub static DESCRIPTOR: EntityDescriptor = EntityDescriptor {
    index: "a001",
    collection: "stock",
    service_path: "/service/stock",
    element_name: "股票",
    list_name: "股票列表",
    row_key: "stock_code",
    fields: FIELDS,
};

impl CrudEntity for Stock {
    type Id = StockId;

    fn id(&self) -> StockId {
        self.id.clone()
    }

    fn descriptor() -> &'static EntityDescriptor {
        &DESCRIPTOR
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_backend_record() {
        let stock: Stock = serde_json::from_value(json!({
            "id": "17",
            "stock_code": "600000",
            "stock_name": "浦发银行",
            "exchange": "SH",
            "list_date": "1999-11-10",
            "create_time": "2024-01-02 09:30:00"
        }))
        .unwrap();

        assert_eq!(stock.id, StockId::new("17"));
        assert_eq!(stock.list_date, NaiveDate::from_ymd_opt(1999, 11, 10));
        assert_eq!(stock.row_key(), "600000");
        assert_eq!(stock.field_value("exchange"), json!("SH"));
    }

    #[test]
    fn numeric_id_is_kept_as_text() {
        let stock: Stock = serde_json::from_value(json!({
            "id": 17,
            "stock_code": "600000",
            "stock_name": "浦发银行"
        }))
        .unwrap();
        assert_eq!(stock.id, StockId::new("17"));
        assert_eq!(stock.id().as_string(), "17");
    }

    #[test]
    fn row_key_falls_back_to_id() {
        let stock = Stock {
            id: StockId::new("5"),
            ..Stock::default()
        };
        assert_eq!(stock.row_key(), "5");
    }

    #[test]
    fn audit_fields_never_editable() {
        let create: Vec<_> = DESCRIPTOR.create_fields().iter().map(|f| f.name).collect();
        assert!(create.contains(&"stock_code"));
        assert!(!create.contains(&"id"));
        assert!(!create.contains(&"create_time"));
        assert!(!create.contains(&"updated_at"));
    }
}
