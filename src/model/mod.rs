pub mod fitness;
pub mod hydration;
pub mod meal_planner;
pub mod mental_wellness;
pub mod page;
pub mod theme;

pub use fitness::{FitnessState, DAILY_STEP_GOAL};
pub use hydration::HydrationState;
pub use meal_planner::MealPlannerState;
pub use mental_wellness::{MentalWellnessState, Mood};
pub use page::Page;
pub use theme::Theme;
