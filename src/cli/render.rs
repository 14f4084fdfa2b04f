//! Terminal rendering of the dashboard: sales table, record details, charts.

use crate::config::Config;
use crate::core::report::{render_bars, sales_by_product, value_by_date};
use crate::models::{FilterCriteria, SaleRecord};
use crate::ui::messages::{field, header, info};
use crate::utils::date::format_br;
use crate::utils::format_currency;
use crate::utils::formatting::describe_filters;
use crate::utils::table::{Column, Table};

pub const MSG_EMPTY_LIST: &str = "Nenhuma venda encontrada para os filtros aplicados.";

pub fn sales_table(records: &[SaleRecord], cfg: &Config) -> String {
    let mut table = Table::new(vec![
        Column::right("ID da Venda"),
        Column::left("Nome do Produto"),
        Column::right("Quantidade"),
        Column::left("Data da Venda"),
        Column::right("Valor Total"),
    ]);

    for r in records {
        table.add_row(vec![
            r.id.to_string(),
            r.product_name.clone(),
            r.quantity_sold.to_string(),
            format_br(&r.sale_date),
            format_currency(r.total_value, &cfg.currency_symbol),
        ]);
    }

    table.render()
}

pub fn print_sales(records: &[SaleRecord], filters: &FilterCriteria, cfg: &Config) {
    header(format!("Relatório de Vendas ({})", describe_filters(filters)));

    if records.is_empty() {
        info(MSG_EMPTY_LIST);
        return;
    }

    print!("{}", sales_table(records, cfg));
    println!("\n{} venda(s)", records.len());
}

pub fn print_record(record: &SaleRecord, cfg: &Config) {
    header(format!("Detalhes da Venda ID: {}", record.id));
    field("Nome do Produto", &record.product_name);
    field("Quantidade Vendida", record.quantity_sold);
    field("Data da Venda", format_br(&record.sale_date));
    field(
        "Valor Total",
        format_currency(record.total_value, &cfg.currency_symbol),
    );
}

pub fn print_charts(records: &[SaleRecord], cfg: &Config) {
    if records.is_empty() {
        return;
    }

    header("Vendas por Produto");
    let rows: Vec<_> = sales_by_product(records)
        .into_iter()
        .map(|p| {
            let caption = format!(
                "{} un. | {}",
                p.quantity,
                format_currency(p.value, &cfg.currency_symbol)
            );
            (p.product_name, p.value, caption)
        })
        .collect();
    print!("{}", render_bars(&rows, cfg.chart_width));

    header("Evolução do Valor das Vendas");
    let rows: Vec<_> = value_by_date(records)
        .into_iter()
        .map(|d| {
            let caption = format_currency(d.value, &cfg.currency_symbol);
            (format_br(&d.date), d.value, caption)
        })
        .collect();
    print!("{}", render_bars(&rows, cfg.chart_width));
}
