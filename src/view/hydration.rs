use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::{HydrationState, Theme};

/// Render the hydration tracker: glass count plus counter hints.
pub fn render_hydration(frame: &mut Frame, area: Rect, state: &HydrationState) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(1),
            Constraint::Length(1), // Count
            Constraint::Length(1),
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(area);

    let title = Paragraph::new(Span::styled(
        "Hydration Tracker",
        Style::default()
            .fg(Theme::INFO)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(title, layout[0]);

    let count = Paragraph::new(Line::from(vec![
        Span::raw("Glasses of water: "),
        Span::styled(
            state.glasses.to_string(),
            Style::default()
                .fg(Theme::INFO)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    frame.render_widget(count, layout[2]);

    let hints = Paragraph::new(Line::from(vec![
        Span::styled("[+]", Style::default().fg(Theme::SUCCESS)),
        Span::raw(" Add Glass   "),
        Span::styled("[-]", Style::default().fg(Theme::ERROR)),
        Span::raw(" Remove Glass"),
    ]));
    frame.render_widget(hints, layout[4]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn buffer_string(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer.cell((x, y)).unwrap().symbol())
                    .collect::<String>()
            })
            .collect::<Vec<String>>()
            .join("\n")
    }

    #[test]
    fn render_hydration_does_not_panic() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();

        let state = HydrationState::new();

        terminal
            .draw(|frame| {
                render_hydration(frame, frame.area(), &state);
            })
            .unwrap();
    }

    #[test]
    fn shows_current_glass_count() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();

        let state = HydrationState::new().increment().increment().increment();
        terminal
            .draw(|frame| render_hydration(frame, frame.area(), &state))
            .unwrap();

        assert!(buffer_string(&terminal).contains("Glasses of water: 3"));
    }

    #[test]
    fn shows_counter_hints() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();

        let state = HydrationState::new();
        terminal
            .draw(|frame| render_hydration(frame, frame.area(), &state))
            .unwrap();

        let buffer_str = buffer_string(&terminal);
        assert!(buffer_str.contains("Add Glass"));
        assert!(buffer_str.contains("Remove Glass"));
    }
}
