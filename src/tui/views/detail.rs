//! Detail panel view - drill-down for the selected category

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::tui::app::App;
use crate::tui::views::chart::bar_color;

/// Draw the detail panel for the current region's selection
pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Detail ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let Some(content) = app.panel.content.as_ref() else {
        let empty = Paragraph::new("Select a bar to view details")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(empty, inner_area);
        return;
    };

    let header_color = bar_color(app.model.region, &content.header);
    let mut lines: Vec<Line> = vec![];

    lines.push(Line::from(Span::styled(
        content.header.clone(),
        Style::default().fg(header_color).bold(),
    )));

    if let Some(ref emblem) = content.emblem {
        lines.push(Line::from(Span::styled(
            format!("emblem: {}", emblem),
            Style::default().fg(Color::DarkGray),
        )));
    }

    lines.push(Line::from(vec![
        Span::styled("Total Characters: ", Style::default().fg(Color::Gray)),
        Span::styled(
            content.total.to_string(),
            Style::default().fg(Color::White).bold(),
        ),
    ]));
    lines.push(Line::from(""));

    for section in &content.sections {
        lines.push(Line::from(Span::styled(
            section.title.clone(),
            Style::default().fg(Color::Cyan).bold(),
        )));
        for row in section.lines() {
            lines.push(Line::from(Span::styled(
                row,
                Style::default().fg(Color::Gray),
            )));
        }
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "[j/k] Scroll  [c] Deselect  [d] Toggle panel",
        Style::default().fg(Color::DarkGray),
    )));

    let detail = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.model.detail_scroll as u16, 0));

    frame.render_widget(detail, inner_area);
}
