use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One sale transaction as returned by the API.
///
/// `id` is assigned by the server and is the only key used for lookup and
/// deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleRecord {
    pub id: u64,
    #[serde(rename = "nomeProduto")]
    pub product_name: String,
    #[serde(rename = "quantidadeVendida")]
    pub quantity_sold: u32,
    #[serde(rename = "dataVenda")]
    pub sale_date: NaiveDate,
    /// Monetary amount in BRL.
    #[serde(rename = "valorTotal")]
    pub total_value: Decimal,
}

/// Creation payload: a sale record without its server-assigned id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSale {
    #[serde(rename = "nomeProduto")]
    pub product_name: String,
    #[serde(rename = "quantidadeVendida")]
    pub quantity_sold: u32,
    #[serde(rename = "dataVenda")]
    pub sale_date: NaiveDate,
    #[serde(rename = "valorTotal")]
    pub total_value: Decimal,
}

/// Acknowledgement of a successful deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteConfirmation {
    pub id: u64,
    /// Raw payload, when the server sent one (it usually answers 204).
    pub payload: Option<serde_json::Value>,
}
