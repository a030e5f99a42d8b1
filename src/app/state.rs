use std::time::Instant;

use chrono::{DateTime, Local};

use crate::model::{
    FitnessState, HydrationState, MealPlannerState, MentalWellnessState, Page,
};

/// Main application state.
/// Updated via pure `update(state, event) -> state` function; the view layer
/// only ever reads it.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Page currently on screen
    pub page: Page,

    /// State of the tracker currently on screen. `None` on the home menu.
    /// Rebuilt from scratch every time a tracker page is entered, so nothing
    /// survives leaving a page.
    pub tracker: Option<TrackerState>,

    /// Cursor position in the home menu
    pub selected_card: usize,

    /// Show help overlay
    pub show_help: bool,

    /// Signal to quit the application
    pub should_quit: bool,

    /// Application start time (for elapsed time display)
    pub started_at: Instant,

    /// Wall-clock time shown in the header, refreshed on Tick
    pub clock: DateTime<Local>,
}

/// State of the active tracker page. Exactly one is alive at a time and it
/// is dropped wholesale on navigation away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackerState {
    Fitness(FitnessState),
    Hydration(HydrationState),
    MealPlanner(MealPlannerState),
    MentalWellness(MentalWellnessState),
}

impl TrackerState {
    /// Fresh tracker state for a page. The home menu carries none.
    pub fn for_page(page: Page) -> Option<Self> {
        match page {
            Page::Home => None,
            Page::Fitness => Some(TrackerState::Fitness(FitnessState::new())),
            Page::Hydration => Some(TrackerState::Hydration(HydrationState::new())),
            Page::MealPlanner => Some(TrackerState::MealPlanner(MealPlannerState::new())),
            Page::MentalWellness => {
                Some(TrackerState::MentalWellness(MentalWellnessState::new()))
            }
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Create new default application state, positioned on the home menu.
    pub fn new() -> Self {
        Self {
            page: Page::Home,
            tracker: None,
            selected_card: 0,
            show_help: false,
            should_quit: false,
            started_at: Instant::now(),
            clock: Local::now(),
        }
    }

    /// Create new state already positioned on a page, with that page's
    /// tracker state freshly built.
    pub fn with_page(page: Page) -> Self {
        Self {
            page,
            tracker: TrackerState::for_page(page),
            ..Self::new()
        }
    }

    /// Active fitness state, if the fitness page is showing.
    pub fn fitness(&self) -> Option<&FitnessState> {
        match &self.tracker {
            Some(TrackerState::Fitness(state)) => Some(state),
            _ => None,
        }
    }

    /// Active hydration state, if the hydration page is showing.
    pub fn hydration(&self) -> Option<&HydrationState> {
        match &self.tracker {
            Some(TrackerState::Hydration(state)) => Some(state),
            _ => None,
        }
    }

    /// Active meal-planner state, if the meal-planner page is showing.
    pub fn meal_planner(&self) -> Option<&MealPlannerState> {
        match &self.tracker {
            Some(TrackerState::MealPlanner(state)) => Some(state),
            _ => None,
        }
    }

    /// Active mental-wellness state, if that page is showing.
    pub fn mental_wellness(&self) -> Option<&MentalWellnessState> {
        match &self.tracker {
            Some(TrackerState::MentalWellness(state)) => Some(state),
            _ => None,
        }
    }
}
