use crossterm::event::{KeyCode, KeyEvent};

use crate::app::state::{AppState, TrackerState};
use crate::model::{Mood, Page};

/// Unconditionally switch to a page, building its tracker state from
/// scratch. Re-entering a page never resurrects earlier state.
pub fn go_to(mut state: AppState, page: Page) -> AppState {
    state.page = page;
    state.tracker = TrackerState::for_page(page);
    state
}

/// Return to the home menu, discarding whatever tracker state was alive.
/// The single exit action of every tracker page.
pub fn go_home(state: AppState) -> AppState {
    go_to(state, Page::Home)
}

/// Pure navigation state transition function.
/// Takes current state + keyboard event, returns new state.
/// No I/O, no side effects, fully unit testable.
pub fn handle_key(mut state: AppState, key: KeyEvent) -> AppState {
    // Help overlay has priority: any key dismisses it
    if state.show_help {
        state.show_help = false;
        return state;
    }

    // Global keys. The fitness page owns character input (every typed
    // character is a field edit), so these only apply elsewhere.
    if state.page != Page::Fitness {
        match key.code {
            KeyCode::Char('q') => {
                state.should_quit = true;
                return state;
            }
            KeyCode::Char('?') => {
                state.show_help = true;
                return state;
            }
            _ => {}
        }
    }

    match state.page {
        Page::Home => handle_home_key(state, key),
        Page::Fitness => handle_fitness_key(state, key),
        Page::Hydration => handle_hydration_key(state, key),
        Page::MealPlanner => handle_meal_planner_key(state, key),
        Page::MentalWellness => handle_mental_wellness_key(state, key),
    }
}

/// Home menu: move the card cursor, open the selected tracker, or jump to
/// one directly by number (menu order).
fn handle_home_key(mut state: AppState, key: KeyEvent) -> AppState {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            state.selected_card = (state.selected_card + 1).min(Page::TRACKERS.len() - 1);
            state
        }
        KeyCode::Char('k') | KeyCode::Up => {
            state.selected_card = state.selected_card.saturating_sub(1);
            state
        }
        KeyCode::Enter => {
            let page = Page::TRACKERS[state.selected_card];
            go_to(state, page)
        }
        KeyCode::Char(c @ '1'..='4') => {
            let index = (c as usize) - ('1' as usize);
            go_to(state, Page::TRACKERS[index])
        }
        _ => state,
    }
}

/// Fitness: typed characters and Backspace edit the steps field through the
/// digits-only rule; the candidate string is current contents plus/minus one
/// character, accepted or rejected as a whole.
fn handle_fitness_key(mut state: AppState, key: KeyEvent) -> AppState {
    if key.code == KeyCode::Esc {
        return go_home(state);
    }

    state.tracker = match state.tracker.take() {
        Some(TrackerState::Fitness(fitness)) => {
            let fitness = match key.code {
                KeyCode::Char(c) => {
                    let mut raw = fitness.steps_input.clone();
                    raw.push(c);
                    fitness.set_steps_input(&raw)
                }
                KeyCode::Backspace => {
                    let mut raw = fitness.steps_input.clone();
                    raw.pop();
                    fitness.set_steps_input(&raw)
                }
                _ => fitness,
            };
            Some(TrackerState::Fitness(fitness))
        }
        other => other,
    };
    state
}

fn handle_hydration_key(mut state: AppState, key: KeyEvent) -> AppState {
    if key.code == KeyCode::Esc {
        return go_home(state);
    }

    state.tracker = match state.tracker.take() {
        Some(TrackerState::Hydration(hydration)) => {
            let hydration = match key.code {
                KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Up => hydration.increment(),
                KeyCode::Char('-') | KeyCode::Down => hydration.decrement(),
                _ => hydration,
            };
            Some(TrackerState::Hydration(hydration))
        }
        other => other,
    };
    state
}

/// Meal planner is display-only; the only action is leaving it.
fn handle_meal_planner_key(state: AppState, key: KeyEvent) -> AppState {
    match key.code {
        KeyCode::Esc => go_home(state),
        _ => state,
    }
}

fn handle_mental_wellness_key(mut state: AppState, key: KeyEvent) -> AppState {
    if key.code == KeyCode::Esc {
        return go_home(state);
    }

    let mood = match key.code {
        KeyCode::Char('h') => Some(Mood::Happy),
        KeyCode::Char('s') => Some(Mood::Sad),
        KeyCode::Char('a') => Some(Mood::Angry),
        KeyCode::Char('n') => Some(Mood::Neutral),
        _ => None,
    };

    if let Some(mood) = mood {
        state.tracker = match state.tracker.take() {
            Some(TrackerState::MentalWellness(wellness)) => {
                Some(TrackerState::MentalWellness(wellness.set_mood(mood)))
            }
            other => other,
        };
    }
    state
}
