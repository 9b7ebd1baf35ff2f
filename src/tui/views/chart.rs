//! Bar chart view - one chart per selection region
//!
//! Houses keep the canonical color map; the selected bar gets the gold
//! treatment and the cursor bar an underlined label. The cursor is
//! transient and leaves no trace on the selection state.

use ratatui::{
    prelude::*,
    widgets::{Bar, BarChart, BarGroup, Block, Borders},
};

use crate::aggregate::display_label;
use crate::select::Region;
use crate::tui::app::App;

/// Gold used for the selected-bar treatment
const GOLD: Color = Color::Rgb(0xFF, 0xD7, 0x00);

/// Fill color for a bar. Houses use the canonical map, everything else
/// falls back to steel blue like the original charts.
pub fn bar_color(region: Region, key: &str) -> Color {
    if region != Region::Houses {
        return Color::Rgb(0x46, 0x82, 0xB4);
    }
    match key {
        "Gryffindor" => Color::Rgb(0x74, 0x00, 0x01),
        "Slytherin" => Color::Rgb(0x1A, 0x47, 0x2A),
        "Ravenclaw" => Color::Rgb(0x0E, 0x1A, 0x40),
        "Hufflepuff" => Color::Rgb(0xFF, 0xD8, 0x00),
        _ => Color::Rgb(0x46, 0x82, 0xB4),
    }
}

/// Draw the current region's bar chart
pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let region = app.model.region;
    let buckets = app.current_buckets();

    let block = Block::default()
        .title(format!(" {} ", region.title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if buckets.is_empty() {
        let inner = block.inner(area);
        frame.render_widget(block, area);
        let empty = ratatui::widgets::Paragraph::new("No records to chart")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(empty, inner);
        return;
    }

    let max = buckets.iter().map(|b| b.count).max().unwrap_or(0).max(1);
    let bar_width = bar_width_for(area.width, buckets.len());

    let bars: Vec<Bar> = buckets
        .iter()
        .enumerate()
        .map(|(index, bucket)| {
            let selected = app.styles.highlight(region, &bucket.key).is_some();
            let under_cursor = index == app.model.cursor;

            let mut label_style = Style::default().fg(Color::Gray);
            if selected {
                label_style = Style::default().fg(GOLD).bold();
            }
            if under_cursor {
                label_style = label_style.underlined();
            }

            let fill = if selected {
                Style::default().fg(GOLD)
            } else {
                Style::default().fg(bar_color(region, &bucket.key))
            };

            let label = truncate_label(display_label(&bucket.key), bar_width as usize);

            Bar::default()
                .value(bucket.count as u64)
                .label(Line::styled(label, label_style))
                .style(fill)
                .value_style(fill.reversed())
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1)
        .max(max as u64);

    frame.render_widget(chart, area);
}

fn bar_width_for(area_width: u16, bars: usize) -> u16 {
    if bars == 0 {
        return 1;
    }
    let usable = area_width.saturating_sub(2); // Borders
    (usable / bars as u16).saturating_sub(1).clamp(3, 14)
}

fn truncate_label(label: &str, max_len: usize) -> String {
    if label.chars().count() <= max_len {
        label.to_string()
    } else {
        let cut: String = label.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_house_colors_match_canon() {
        assert_eq!(
            bar_color(Region::Houses, "Gryffindor"),
            Color::Rgb(0x74, 0x00, 0x01)
        );
        assert_eq!(
            bar_color(Region::Houses, "Hufflepuff"),
            Color::Rgb(0xFF, 0xD8, 0x00)
        );
        // Non-house regions fall back to steel blue
        assert_eq!(
            bar_color(Region::Species, "Gryffindor"),
            Color::Rgb(0x46, 0x82, 0xB4)
        );
    }

    #[test]
    fn test_bar_width_bounds() {
        assert_eq!(bar_width_for(80, 4), 14);
        assert_eq!(bar_width_for(20, 12), 3);
        assert_eq!(bar_width_for(0, 0), 1);
    }

    #[test]
    fn test_truncate_label() {
        assert_eq!(truncate_label("Human", 8), "Human");
        assert_eq!(truncate_label("Muggle-born", 8), "Muggle-…");
    }
}
