pub mod navigation;
pub mod state;
pub mod update;

pub use navigation::{go_home, go_to, handle_key};
pub use state::{AppState, TrackerState};
pub use update::update;
