use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::model::{FitnessState, Theme, DAILY_STEP_GOAL};

/// Render the fitness tracker: steps field, validation message, progress
/// toward the daily goal.
pub fn render_fitness(frame: &mut Frame, area: Rect, state: &FitnessState) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(3), // Steps input
            Constraint::Length(1), // Validation message
            Constraint::Length(3), // Progress gauge
            Constraint::Min(0),
        ])
        .split(area);

    let title = Paragraph::new(Span::styled(
        "Fitness Tracker",
        Style::default()
            .fg(Theme::ACCENT_WARM)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(title, layout[0]);

    let input_border = if state.invalid {
        Theme::ERROR
    } else {
        Theme::PANEL_BORDER
    };
    let input = Paragraph::new(state.steps_input.as_str()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(input_border))
            .title(" Enter Steps "),
    );
    frame.render_widget(input, layout[1]);

    if state.invalid {
        let message = Paragraph::new(Span::styled(
            "Please enter a valid number",
            Style::default().fg(Theme::ERROR),
        ));
        frame.render_widget(message, layout[2]);
    }

    let fraction = state.progress_fraction();
    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Theme::PANEL_BORDER))
                .title(format!(" Daily Goal ({} steps) ", DAILY_STEP_GOAL)),
        )
        .gauge_style(Style::default().fg(Theme::PRIMARY))
        // Gauge requires a ratio in [0, 1]; the label keeps the true figure
        .ratio(fraction.min(1.0))
        .label(format!("{:.0}%", fraction * 100.0));
    frame.render_widget(gauge, layout[3]);
}
