use super::ui;
use crate::core::carousel::CarouselLayout;
use crate::core::category::{CategoryConfig, categories};
use anyhow::{Result, bail};
use comfy_table::{Attribute, Cell, Color};

/// Where the carousel should be positioned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Position {
    /// Current scroll offset of the container.
    Scroll(f64),
    /// Indicator tapped: scroll to this card.
    Goto(usize),
}

pub struct ExploreView {
    pub active: Option<usize>,
    pub scroll_left: f64,
}

pub fn resolve(layout: &CarouselLayout, position: Position) -> Result<ExploreView> {
    match position {
        Position::Scroll(scroll_left) => Ok(ExploreView {
            active: layout.active_index(scroll_left),
            scroll_left,
        }),
        Position::Goto(index) => {
            if index >= layout.card_count {
                bail!(
                    "No card at index {} (carousel has {})",
                    index,
                    layout.card_count
                );
            }
            let scroll_left = layout.scroll_offset(index);
            Ok(ExploreView {
                active: layout.active_index(scroll_left),
                scroll_left,
            })
        }
    }
}

/// Page indicator strip: one dot per card, filled for the active one.
pub fn indicator_strip(count: usize, active: Option<usize>) -> String {
    (0..count)
        .map(|i| if Some(i) == active { "●" } else { "○" })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn render(categories: &[CategoryConfig], view: &ExploreView) -> String {
    let mut table = ui::new_styled_table();

    let mut icons = Vec::new();
    let mut titles = Vec::new();
    let mut descriptions = Vec::new();
    for (i, category) in categories.iter().enumerate() {
        let mut title = Cell::new(category.title).add_attribute(Attribute::Bold);
        if Some(i) == view.active {
            title = title.fg(Color::Blue).add_attribute(Attribute::Underlined);
        }
        icons.push(ui::icon_cell(category.carousel_icon, category.carousel_accent));
        titles.push(title);
        descriptions.push(Cell::new(category.description).fg(Color::DarkGrey));
    }
    table.add_row(icons);
    table.add_row(titles);
    table.add_row(descriptions);

    format!(
        "{}\n\n{}\n{}",
        ui::style_text("Explore investment ideas", ui::StyleType::Heading),
        table,
        indicator_strip(categories.len(), view.active)
    )
}

pub fn run(container_width: f64, position: Position) -> Result<()> {
    let categories = categories();
    let layout = CarouselLayout::new(container_width, categories.len());
    let view = resolve(&layout, position)?;

    println!("{}", render(&categories, &view));
    if let Some(active) = view.active {
        println!(
            "{}",
            ui::style_text(
                &format!(
                    "scroll {:.1} -> {} ({})",
                    view.scroll_left,
                    categories[active].title,
                    categories[active].link()
                ),
                ui::StyleType::Subtle
            )
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicator_strip() {
        assert_eq!(indicator_strip(3, Some(1)), "○ ● ○");
        assert_eq!(indicator_strip(3, Some(0)), "● ○ ○");
        assert_eq!(indicator_strip(0, None), "");
    }

    #[test]
    fn test_resolve_scroll_position() {
        let layout = CarouselLayout::new(320.0, 3);
        let view = resolve(&layout, Position::Scroll(240.0)).unwrap();
        assert_eq!(view.active, Some(1));

        let view = resolve(&layout, Position::Scroll(5_000.0)).unwrap();
        assert_eq!(view.active, Some(2));
    }

    #[test]
    fn test_resolve_goto_targets_card_offset() {
        let layout = CarouselLayout::new(320.0, 3);
        let view = resolve(&layout, Position::Goto(2)).unwrap();
        assert_eq!(view.scroll_left, 480.0);
        assert_eq!(view.active, Some(2));

        assert!(resolve(&layout, Position::Goto(3)).is_err());
    }

    #[test]
    fn test_render_shows_all_cards() {
        let categories = categories();
        let layout = CarouselLayout::new(320.0, categories.len());
        let view = resolve(&layout, Position::Scroll(0.0)).unwrap();
        let output = render(&categories, &view);

        assert!(output.contains("Explore investment ideas"));
        assert!(output.contains("Green Mutual Funds"));
        assert!(output.contains("Infrastructure trusts"));
        assert!(output.ends_with("● ○ ○"));
    }
}
