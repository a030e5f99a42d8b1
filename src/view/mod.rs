use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::state::{AppState, TrackerState};

pub mod components;
pub mod fitness;
pub mod home;
pub mod hydration;
pub mod meal_planner;
pub mod mental_wellness;

pub use fitness::render_fitness;
pub use home::render_home;
pub use hydration::render_hydration;
pub use meal_planner::render_meal_planner;
pub use mental_wellness::render_mental_wellness;

/// Main view dispatcher.
/// Header and footer frame every page; the body routes on the active
/// tracker state (the home menu has none). Help overlays on top if active.
pub fn render(state: &AppState, frame: &mut Frame) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(8),    // Page body
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    components::render_header(frame, layout[0], state);

    match &state.tracker {
        None => home::render_home(frame, layout[1], state),
        Some(TrackerState::Fitness(fitness)) => {
            fitness::render_fitness(frame, layout[1], fitness)
        }
        Some(TrackerState::Hydration(hydration)) => {
            hydration::render_hydration(frame, layout[1], hydration)
        }
        Some(TrackerState::MealPlanner(meals)) => {
            meal_planner::render_meal_planner(frame, layout[1], meals)
        }
        Some(TrackerState::MentalWellness(wellness)) => {
            mental_wellness::render_mental_wellness(frame, layout[1], wellness)
        }
    }

    components::render_footer(frame, layout[2], state);

    // Overlay help if active
    if state.show_help {
        components::render_help_overlay(frame);
    }
}
