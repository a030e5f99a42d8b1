use crate::app::{handle_key, AppState};
use crate::event::AppEvent;

/// Pure update function following Elm Architecture.
/// Takes current state and event, returns new state.
/// No I/O, no side effects - fully deterministic and unit testable.
pub fn update(mut state: AppState, event: AppEvent) -> AppState {
    match event {
        AppEvent::Key(key) => handle_key(state, key),

        AppEvent::Tick(now) => {
            // Only the header clock moves; tracker state is untouched
            state.clock = now;
            state
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Page;
    use chrono::{Local, TimeZone};
    use crossterm::event::KeyCode;

    #[test]
    fn key_event_delegates_to_navigation() {
        let state = AppState::new();
        let key = crossterm::event::KeyEvent::from(KeyCode::Char('q'));

        let new_state = update(state, AppEvent::Key(key));

        assert!(new_state.should_quit);
    }

    #[test]
    fn tick_refreshes_clock() {
        let state = AppState::new();
        let now = Local.with_ymd_and_hms(2024, 6, 1, 7, 30, 0).unwrap();

        let new_state = update(state, AppEvent::Tick(now));

        assert_eq!(new_state.clock, now);
    }

    #[test]
    fn tick_leaves_tracker_state_untouched() {
        let state = AppState::with_page(Page::Hydration);
        let before = state.tracker.clone();

        let new_state = update(state, AppEvent::Tick(Local::now()));

        assert_eq!(new_state.tracker, before);
        assert_eq!(new_state.page, Page::Hydration);
    }
}
