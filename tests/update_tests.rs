use chrono::{Local, TimeZone};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use wellness_tui::app::{update, AppState};
use wellness_tui::event::AppEvent;
use wellness_tui::model::Page;

fn key_event(code: KeyCode) -> AppEvent {
    AppEvent::Key(KeyEvent::new(code, KeyModifiers::empty()))
}

#[test]
fn key_events_delegate_to_navigation() {
    let state = update(AppState::new(), key_event(KeyCode::Char('2')));
    assert_eq!(state.page, Page::MealPlanner);
}

#[test]
fn quit_key_flows_through_update() {
    let state = update(AppState::new(), key_event(KeyCode::Char('q')));
    assert!(state.should_quit);
}

#[test]
fn tick_refreshes_the_clock_only() {
    let state = AppState::with_page(Page::Hydration);
    let before = state.tracker.clone();
    let now = Local.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();

    let state = update(state, AppEvent::Tick(now));

    assert_eq!(state.clock, now);
    assert_eq!(state.page, Page::Hydration);
    assert_eq!(state.tracker, before);
    assert!(!state.should_quit);
}

#[test]
fn tick_between_key_events_does_not_disturb_input() {
    let state = update(AppState::new(), key_event(KeyCode::Char('1')));
    let state = update(state, key_event(KeyCode::Char('5')));
    let state = update(state, AppEvent::Tick(Local::now()));
    let state = update(state, key_event(KeyCode::Char('0')));

    assert_eq!(state.fitness().unwrap().steps_input, "50");
}

#[test]
fn full_session_through_update_resets_revisited_tracker() {
    // Revisit behavior driven entirely through AppEvent
    let mut state = AppState::new();
    for event in [
        key_event(KeyCode::Char('4')), // hydration
        key_event(KeyCode::Char('+')),
        key_event(KeyCode::Char('+')),
        key_event(KeyCode::Esc), // home, state discarded
        key_event(KeyCode::Char('4')),
    ] {
        state = update(state, event);
    }

    assert_eq!(state.page, Page::Hydration);
    assert_eq!(state.hydration().unwrap().glasses, 0);
}
