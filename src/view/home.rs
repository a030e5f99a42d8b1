use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::AppState;
use crate::model::{Page, Theme};

/// Render the home menu: one card per tracker, in menu order, with the
/// cursor highlighting the selected card.
pub fn render_home(frame: &mut Frame, area: Rect, state: &AppState) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Min(0),
        ])
        .split(area);

    for (index, page) in Page::TRACKERS.iter().enumerate() {
        render_card(
            frame,
            layout[index],
            *page,
            index,
            state.selected_card == index,
        );
    }
}

fn render_card(frame: &mut Frame, area: Rect, page: Page, index: usize, selected: bool) {
    let border_style = if selected {
        Style::default().fg(Theme::ACTIVE_BORDER)
    } else {
        Style::default().fg(Theme::PANEL_BORDER)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Span::styled(
            format!(" {} ", page.title()),
            Style::default()
                .fg(Theme::tracker_color(page))
                .add_modifier(Modifier::BOLD),
        ));

    let body = vec![
        Line::from(Span::styled(
            page.description(),
            Style::default().fg(Theme::MUTED_TEXT),
        )),
        Line::from(Span::styled(
            format!("[{}] open", index + 1),
            Style::default().fg(Theme::INFO),
        )),
    ];

    frame.render_widget(Paragraph::new(body).block(block), area);
}
