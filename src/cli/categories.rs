use super::ui;
use crate::core::category::{CategoryConfig, categories};
use comfy_table::{Attribute, Cell, Color};

/// Renders the "get started" grid: one row per category with its discover link.
pub fn render(categories: &[CategoryConfig]) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell(""),
        ui::header_cell("Category"),
        ui::header_cell("Browse"),
    ]);

    for category in categories {
        table.add_row(vec![
            ui::icon_cell(category.grid_icon, category.grid_accent),
            Cell::new(category.label).add_attribute(Attribute::Bold),
            Cell::new(category.link().to_string()).fg(Color::DarkGrey),
        ]);
    }

    format!(
        "{}\n{}\n\n{}",
        ui::style_text("Get started", ui::StyleType::Subtle),
        "Find the right fund across these categories",
        table
    )
}

pub fn run() {
    println!("{}", render(&categories()));
}
