use super::ui;
use crate::core::impact::ImpactMetrics;
use comfy_table::{Attribute, Cell, CellAlignment, Color};

pub fn render(metrics: &ImpactMetrics) -> String {
    let mut table = ui::new_styled_table();

    for row in metrics.rows() {
        table.add_row(vec![
            ui::icon_cell(row.icon, row.accent),
            Cell::new(&row.value)
                .add_attribute(Attribute::Bold)
                .set_alignment(CellAlignment::Right),
            Cell::new(row.label).fg(Color::DarkGrey),
        ]);
    }

    format!(
        "{}\n\n{}",
        ui::style_text("Impact Metrics", ui::StyleType::Heading),
        table
    )
}

pub fn run(metrics: &ImpactMetrics) {
    println!("{}", render(metrics));
}
