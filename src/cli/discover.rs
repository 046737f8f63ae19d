use super::ui;
use crate::core::catalog::FundStore;
use crate::core::category::category;
use crate::core::fund::{FundRecord, FundType, Returns};
use anyhow::Result;
use comfy_table::{Attribute, Cell, Color};

/// Renders the catalog listing, one table row per record.
pub fn render(records: &[FundRecord], fund_type: Option<FundType>) -> String {
    let heading = match fund_type {
        Some(t) => category(t).title,
        None => "All funds",
    };

    if records.is_empty() {
        return format!(
            "{}\n\n{}",
            ui::style_text(heading, ui::StyleType::Title),
            ui::style_text("No funds found. Run `greenfolio seed` first.", ui::StyleType::Subtle)
        );
    }

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Name"),
        ui::header_cell("Type"),
        ui::header_cell("NAV"),
        ui::header_cell("Min. Investment"),
        ui::header_cell("1Y"),
        ui::header_cell("3Y"),
        ui::header_cell("Fixed Return"),
        ui::header_cell("Expense Ratio"),
        ui::header_cell("Launched"),
    ]);

    for record in records {
        let (cagr_1y, cagr_3y, fixed) = match record.returns() {
            Ok(Returns::Growth { cagr_1y, cagr_3y }) => (Some(cagr_1y), Some(cagr_3y), None),
            Ok(Returns::Fixed { rate }) => (None, None, Some(rate)),
            Err(_) => (record.cagr_1y, record.cagr_3y, record.fixed_return),
        };
        let config = category(record.fund_type);

        table.add_row(vec![
            Cell::new(&record.name).add_attribute(Attribute::Bold),
            Cell::new(config.label).fg(ui::accent_color(config.grid_accent)),
            ui::decimal_cell(record.nav),
            ui::decimal_cell(record.min_investment),
            cagr_1y.map_or_else(ui::na_cell, ui::rate_cell),
            cagr_3y.map_or_else(ui::na_cell, ui::rate_cell),
            fixed.map_or_else(ui::na_cell, ui::rate_cell),
            ui::format_optional_cell(Some(record.expense_ratio), |v| format!("{v}%")),
            Cell::new(record.launch_date.format("%d %b %Y")).fg(Color::DarkGrey),
        ]);
    }

    format!(
        "{}\n\n{}\n\n{} {}",
        ui::style_text(heading, ui::StyleType::Title),
        table,
        ui::style_text("Total:", ui::StyleType::Heading),
        records.len()
    )
}

pub async fn run(store: &(dyn FundStore + Send + Sync), fund_type: Option<FundType>) -> Result<()> {
    let records = store.list(fund_type).await?;
    println!("{}", render(&records, fund_type));
    Ok(())
}
