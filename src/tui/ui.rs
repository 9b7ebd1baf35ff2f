//! UI rendering for the TUI

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::select::Region;

use super::app::App;
use super::views::{chart, detail};

/// Main draw function - orchestrates all rendering
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Main layout: header, region bar, content, footer
    let main_layout = Layout::vertical([
        Constraint::Length(1), // Header
        Constraint::Length(1), // Region bar
        Constraint::Min(8),    // Content
        Constraint::Length(1), // Footer/status
    ])
    .split(area);

    draw_header(frame, app, main_layout[0]);
    draw_region_bar(frame, app, main_layout[1]);

    if app.model.detail_visible {
        let content_layout =
            Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
                .split(main_layout[2]);
        chart::draw(frame, app, content_layout[0]);
        detail::draw(frame, app, content_layout[1]);
    } else {
        chart::draw(frame, app, main_layout[2]);
    }

    draw_footer(frame, app, main_layout[3]);

    // Overlays
    if app.model.help_open {
        draw_help_overlay(frame, area);
    }

    if app.model.patronus_open {
        draw_patronus_modal(frame, app, area);
    }
}

fn draw_header(frame: &mut Frame, app: &App, area: Rect) {
    let refresh_indicator = if app.refresh_shown_at.is_some() {
        " [Reloaded]"
    } else {
        ""
    };

    let header_text = format!(
        " housecount │ {} │ [{} characters]{}",
        app.model.region.title(),
        app.records.len(),
        refresh_indicator
    );

    let header =
        Paragraph::new(header_text).style(Style::default().bg(Color::Blue).fg(Color::White).bold());

    frame.render_widget(header, area);
}

fn draw_region_bar(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![Span::raw(" Regions: ")];

    for (index, region) in [Region::Houses, Region::Species, Region::Blood]
        .iter()
        .enumerate()
    {
        let is_active = *region == app.model.region;
        let style = if is_active {
            Style::default().fg(Color::Black).bg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(
            format!("[{} {}]", index + 1, region.title()),
            style,
        ));
        spans.push(Span::raw(" "));

        // Committed selections stay visible per region
        if let Some(selected) = app.controller.selected(*region) {
            spans.push(Span::styled(
                format!("●{}", selected),
                Style::default().fg(Color::Yellow),
            ));
            spans.push(Span::raw(" "));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let text = if let Some((message, _)) = &app.status_message {
        Line::from(Span::styled(
            format!(" {}", message),
            Style::default().fg(Color::Yellow),
        ))
    } else {
        Line::from(Span::styled(
            " h/l move │ Enter select │ c clear │ Tab region │ d detail │ p patronus │ r reload │ ? help │ q quit",
            Style::default().fg(Color::DarkGray),
        ))
    };

    frame.render_widget(Paragraph::new(text), area);
}

fn draw_help_overlay(frame: &mut Frame, area: Rect) {
    let popup = centered_rect(60, 60, area);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from(Span::styled("Keys", Style::default().bold())),
        Line::from(""),
        Line::from("  h / ←        Move cursor left"),
        Line::from("  l / →        Move cursor right"),
        Line::from("  g / G        First / last bar"),
        Line::from("  Enter        Select bar (updates detail panel)"),
        Line::from("  c            Clear this region's selection"),
        Line::from("  Tab / 1-3    Switch chart region"),
        Line::from("  j / k        Scroll detail panel"),
        Line::from("  d            Toggle detail panel"),
        Line::from("  p            Patronus assigner"),
        Line::from("  r            Reload dataset"),
        Line::from("  ?            This help"),
        Line::from("  q            Quit"),
        Line::from(""),
        Line::from(Span::styled(
            "Selections are tracked per region; switching regions",
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            "never clears another region's selection.",
            Style::default().fg(Color::Gray),
        )),
    ];

    let help = Paragraph::new(lines).block(
        Block::default()
            .title(" Help ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow)),
    );
    frame.render_widget(help, popup);
}

fn draw_patronus_modal(frame: &mut Frame, app: &App, area: Rect) {
    let popup = centered_rect(50, 20, area);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from("Who are you?"),
        Line::from(""),
        Line::from(vec![
            Span::styled("> ", Style::default().fg(Color::Yellow)),
            Span::styled(
                app.model.patronus_input.clone(),
                Style::default().fg(Color::White),
            ),
            Span::styled("_", Style::default().fg(Color::Yellow).rapid_blink()),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "[Enter] Reveal  [Esc] Cancel",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let modal = Paragraph::new(lines).block(
        Block::default()
            .title(" Patronus ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow)),
    );
    frame.render_widget(modal, popup);
}

/// Centered popup rect as a percentage of the full area
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(area);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(vertical[1])[1]
}
