use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::model::Theme;

/// Render the help overlay.
/// Displayed as centered popup when show_help is true.
/// Lists all keybindings grouped by category.
pub fn render_help_overlay(frame: &mut Frame) {
    let area = frame.area();

    // Create centered popup area (60% width, 70% height)
    let popup_area = centered_rect(60, 70, area);

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let help_text = build_help_text();

    let paragraph = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help - Press any key to close ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Theme::ACTIVE_BORDER)),
        )
        .alignment(Alignment::Left)
        .style(Style::default().bg(Theme::BACKGROUND).fg(Theme::TEXT));

    frame.render_widget(paragraph, popup_area);
}

/// Build help text with keybindings grouped by category.
fn build_help_text() -> Vec<Line<'static>> {
    let section = |name: &'static str| {
        Line::from(Span::styled(
            name,
            Style::default()
                .fg(Theme::INFO)
                .add_modifier(Modifier::BOLD),
        ))
    };

    vec![
        Line::from(""),
        section("HOME MENU"),
        Line::from("  j / k       - Select tracker card"),
        Line::from("  Enter       - Open selected tracker"),
        Line::from("  1-4         - Open tracker directly"),
        Line::from(""),
        section("TRACKERS"),
        Line::from("  Esc         - Back to home menu (discards the screen)"),
        Line::from("  0-9         - Fitness: type steps"),
        Line::from("  Backspace   - Fitness: erase a digit"),
        Line::from("  + / -       - Hydration: add / remove a glass"),
        Line::from("  h/s/a/n     - Mood: happy / sad / angry / neutral"),
        Line::from(""),
        section("GENERAL"),
        Line::from("  ?           - Toggle help overlay"),
        Line::from("  q           - Quit application"),
        Line::from(""),
    ]
}

/// Create a centered rect using up certain percentage of the available rect.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(r);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}
