use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::{MealPlannerState, Theme};

/// Render the meal planner: the fixed meal plan, one line per meal.
pub fn render_meal_planner(frame: &mut Frame, area: Rect, state: &MealPlannerState) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(1),
            Constraint::Min(3), // Meal list
        ])
        .split(area);

    let title = Paragraph::new(Span::styled(
        "Meal Planner",
        Style::default()
            .fg(Theme::SUCCESS)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(title, layout[0]);

    let lines: Vec<Line> = state
        .meals()
        .iter()
        .map(|meal| {
            Line::from(Span::styled(
                meal.clone(),
                Style::default().fg(Theme::TEXT),
            ))
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), layout[2]);
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
    fn render_meal_planner_does_not_panic() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();

        let state = MealPlannerState::new();

        terminal
            .draw(|frame| {
                render_meal_planner(frame, frame.area(), &state);
            })
            .unwrap();
    }

    #[test]
    fn shows_every_planned_meal() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();

        let state = MealPlannerState::new();
        terminal
            .draw(|frame| render_meal_planner(frame, frame.area(), &state))
            .unwrap();

        let buffer_str = buffer_string(&terminal);
        assert!(buffer_str.contains("Breakfast: Oats"));
        assert!(buffer_str.contains("Lunch: Salad"));
        assert!(buffer_str.contains("Dinner: Grilled Chicken"));
    }
}
