use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::AppState;
use crate::model::{Page, Theme};

/// Render header bar.
/// Shows: app title, current page indicator, wall clock, elapsed time.
pub fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let header_text = build_header_text(state);

    let header = Paragraph::new(header_text).style(
        Style::default()
            .fg(Theme::TEXT)
            .bg(Theme::HEADER_BG)
            .add_modifier(Modifier::BOLD),
    );

    frame.render_widget(header, area);
}

/// Pure function: build header text from state.
fn build_header_text(state: &AppState) -> Line<'static> {
    let page_indicator = match state.page {
        Page::Home => "[Home]",
        Page::Fitness => "[Fitness]",
        Page::Hydration => "[Hydration]",
        Page::MealPlanner => "[Meal Planner]",
        Page::MentalWellness => "[Mental Wellness]",
    };

    let clock = state.clock.format("%H:%M").to_string();
    let elapsed = format_elapsed(state.started_at.elapsed().as_secs());

    Line::from(vec![
        Span::styled(
            "Health & Wellness Tracker",
            Style::default().fg(Theme::PRIMARY),
        ),
        Span::styled(" ", Style::default()),
        Span::styled(page_indicator, Style::default().fg(Theme::INFO)),
        Span::styled(format!("  {}", clock), Style::default().fg(Theme::MUTED_TEXT)),
        Span::styled(
            format!("  up {}", elapsed),
            Style::default().fg(Theme::MUTED_TEXT),
        ),
    ])
}

fn format_elapsed(secs: u64) -> String {
    let mins = secs / 60;
    let hours = mins / 60;
    if hours > 0 {
        format!("{}h{}m", hours, mins % 60)
    } else if mins > 0 {
        format!("{}m{}s", mins, secs % 60)
    } else {
        format!("{}s", secs)
    }
}
