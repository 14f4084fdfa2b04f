//! Chart data for the dashboard: totals per product ("Vendas por Produto")
//! and value over time ("Evolução do Valor das Vendas").

use crate::models::SaleRecord;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductTotals {
    pub product_name: String,
    pub quantity: u64,
    pub value: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyValue {
    pub date: NaiveDate,
    pub value: Decimal,
}

/// Ordered by product name.
pub fn sales_by_product(records: &[SaleRecord]) -> Vec<ProductTotals> {
    let mut by_name: BTreeMap<&str, (u64, Decimal)> = BTreeMap::new();
    for r in records {
        let entry = by_name
            .entry(r.product_name.as_str())
            .or_insert((0, Decimal::ZERO));
        entry.0 += u64::from(r.quantity_sold);
        entry.1 += r.total_value;
    }

    by_name
        .into_iter()
        .map(|(name, (quantity, value))| ProductTotals {
            product_name: name.to_string(),
            quantity,
            value,
        })
        .collect()
}

/// Ascending by date.
pub fn value_by_date(records: &[SaleRecord]) -> Vec<DailyValue> {
    let mut by_date: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
    for r in records {
        *by_date.entry(r.sale_date).or_insert(Decimal::ZERO) += r.total_value;
    }

    by_date
        .into_iter()
        .map(|(date, value)| DailyValue { date, value })
        .collect()
}

/// Bar length for `value`, scaled so that `max` fills `width`.
pub fn bar_len(value: Decimal, max: Decimal, width: usize) -> usize {
    if max <= Decimal::ZERO || value <= Decimal::ZERO {
        return 0;
    }
    let scaled = value * Decimal::from(width) / max;
    scaled.round().to_usize().unwrap_or(0).min(width)
}

/// Render labelled horizontal bars, one line per row.
pub fn render_bars(rows: &[(String, Decimal, String)], width: usize) -> String {
    let max = rows
        .iter()
        .map(|(_, v, _)| *v)
        .max()
        .unwrap_or(Decimal::ZERO);
    let label_w = rows.iter().map(|(l, _, _)| l.chars().count()).max().unwrap_or(0);

    let mut out = String::new();
    for (label, value, caption) in rows {
        let len = bar_len(*value, max, width);
        out.push_str(&format!(
            "{:<label_w$} │{:<width$}│ {}\n",
            label,
            "█".repeat(len),
            caption,
            label_w = label_w,
            width = width
        ));
    }
    out
}
