use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::{MentalWellnessState, Mood, Theme};

/// Render the mental wellness tracker: current mood plus the selection row.
pub fn render_mental_wellness(frame: &mut Frame, area: Rect, state: &MentalWellnessState) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(1),
            Constraint::Length(1), // Current mood
            Constraint::Length(1),
            Constraint::Length(1), // Mood options
            Constraint::Min(0),
        ])
        .split(area);

    let title = Paragraph::new(Span::styled(
        "Mental Wellness",
        Style::default()
            .fg(Theme::ACCENT_PURPLE)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(title, layout[0]);

    let current = Paragraph::new(Line::from(vec![
        Span::raw("Current Mood: "),
        Span::styled(
            format!("{} {}", state.mood.symbol(), state.mood.label()),
            Style::default()
                .fg(Theme::mood_color(state.mood))
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    frame.render_widget(current, layout[2]);

    frame.render_widget(Paragraph::new(build_mood_options(state.mood)), layout[4]);
}

/// Pure function: one span group per selectable mood, current one bold.
fn build_mood_options(current: Mood) -> Line<'static> {
    let mut spans = Vec::new();

    for mood in Mood::ALL {
        let keycap = match mood {
            Mood::Happy => "[h]",
            Mood::Sad => "[s]",
            Mood::Angry => "[a]",
            Mood::Neutral => "[n]",
        };

        let style = if mood == current {
            Style::default()
                .fg(Theme::mood_color(mood))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Theme::MUTED_TEXT)
        };

        spans.push(Span::styled(keycap, Style::default().fg(Theme::INFO)));
        spans.push(Span::styled(
            format!(" {} {}   ", mood.symbol(), mood.label()),
            style,
        ));
    }

    Line::from(spans)
}
