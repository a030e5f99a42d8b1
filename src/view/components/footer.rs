use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::AppState;
use crate::model::{Page, Theme};

/// Render footer status bar with keybinding hints.
/// Shows different keybindings based on current page.
pub fn render_footer(frame: &mut Frame, area: Rect, state: &AppState) {
    let footer_text = build_footer_text(state);

    let footer = Paragraph::new(footer_text).style(
        Style::default()
            .fg(Theme::TEXT)
            .bg(Theme::FOOTER_BG)
            .add_modifier(Modifier::DIM),
    );

    frame.render_widget(footer, area);
}

/// Pure function: build footer text based on current page.
fn build_footer_text(state: &AppState) -> Line<'static> {
    let mut spans = Vec::new();

    let mut hint = |keys: &'static str, action: &'static str| {
        spans.push(Span::styled(keys, Style::default().fg(Theme::INFO)));
        spans.push(Span::raw(format!(":{} ", action)));
    };

    match state.page {
        Page::Home => {
            hint("j/k", "select");
            hint("Enter", "open");
            hint("1-4", "trackers");
            hint("?", "help");
            hint("q", "quit");
        }
        Page::Fitness => {
            // No global keys here: every character is steps input
            hint("0-9", "enter steps");
            hint("Backspace", "erase");
            hint("Esc", "back");
        }
        Page::Hydration => {
            hint("+", "add glass");
            hint("-", "remove glass");
            hint("Esc", "back");
            hint("q", "quit");
        }
        Page::MealPlanner => {
            hint("Esc", "back");
            hint("?", "help");
            hint("q", "quit");
        }
        Page::MentalWellness => {
            hint("h/s/a/n", "set mood");
            hint("Esc", "back");
            hint("q", "quit");
        }
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn footer_string(page: Page) -> String {
        let state = AppState::with_page(page);
        build_footer_text(&state)
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect()
    }

    #[test]
    fn render_footer_does_not_panic() {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();

        let state = AppState::new();

        terminal
            .draw(|frame| {
                render_footer(frame, frame.area(), &state);
            })
            .unwrap();
    }

    #[test]
    fn home_footer_lists_menu_keys() {
        let text = footer_string(Page::Home);
        assert!(text.contains("j/k:select"));
        assert!(text.contains("Enter:open"));
        assert!(text.contains("1-4:trackers"));
        assert!(text.contains("q:quit"));
    }

    #[test]
    fn fitness_footer_omits_quit_key() {
        // 'q' would be field input on the fitness page
        let text = footer_string(Page::Fitness);
        assert!(text.contains("0-9:enter steps"));
        assert!(text.contains("Esc:back"));
        assert!(!text.contains("q:quit"));
    }

    #[test]
    fn hydration_footer_lists_counter_keys() {
        let text = footer_string(Page::Hydration);
        assert!(text.contains("+:add glass"));
        assert!(text.contains("-:remove glass"));
    }

    #[test]
    fn mental_wellness_footer_lists_mood_keys() {
        let text = footer_string(Page::MentalWellness);
        assert!(text.contains("h/s/a/n:set mood"));
    }
}
