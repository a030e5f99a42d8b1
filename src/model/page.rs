use std::fmt;

/// One of the five fixed application screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Fitness,
    Hydration,
    MealPlanner,
    MentalWellness,
}

impl Page {
    /// Tracker pages in home-menu order.
    pub const TRACKERS: [Page; 4] = [
        Page::Fitness,
        Page::MealPlanner,
        Page::MentalWellness,
        Page::Hydration,
    ];

    /// Screen title, also used as the menu card heading.
    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Fitness => "Fitness Tracker",
            Page::Hydration => "Hydration Tracker",
            Page::MealPlanner => "Meal Planner",
            Page::MentalWellness => "Mental Wellness",
        }
    }

    /// Menu card description shown on the home screen.
    pub fn description(&self) -> &'static str {
        match self {
            Page::Home => "",
            Page::Fitness => "Track your workouts and steps.",
            Page::Hydration => "Monitor your daily water intake.",
            Page::MealPlanner => "Plan your meals and track daily intake.",
            Page::MentalWellness => "Track your mood and meditate.",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
