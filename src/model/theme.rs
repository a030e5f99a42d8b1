use ratatui::style::Color;

use crate::model::{Mood, Page};

pub struct Theme;

impl Theme {
    // ── Base palette ────────────────────────────────────────────
    pub const BACKGROUND: Color = Color::Rgb(18, 18, 24);
    pub const TEXT: Color = Color::Rgb(225, 225, 235);
    pub const MUTED_TEXT: Color = Color::Rgb(100, 105, 120);

    // ── Accent colors ───────────────────────────────────────────
    pub const PRIMARY: Color = Color::Rgb(66, 165, 245); // signature blue
    pub const ACCENT_WARM: Color = Color::Rgb(230, 160, 60); // amber — fitness
    pub const ACCENT_PURPLE: Color = Color::Rgb(170, 130, 255); // soft purple — mood

    // ── Semantic colors ─────────────────────────────────────────
    pub const SUCCESS: Color = Color::Rgb(80, 210, 120);
    pub const ERROR: Color = Color::Rgb(230, 80, 80);
    pub const INFO: Color = Color::Rgb(80, 180, 220);

    // ── UI chrome ───────────────────────────────────────────────
    pub const HEADER_BG: Color = Color::Rgb(24, 24, 32);
    pub const FOOTER_BG: Color = Color::Rgb(24, 24, 32);
    pub const PANEL_BORDER: Color = Color::Rgb(50, 50, 65);
    pub const ACTIVE_BORDER: Color = Color::Rgb(66, 165, 245); // = PRIMARY

    /// Accent color for a tracker's menu card and screen title.
    pub fn tracker_color(page: Page) -> Color {
        match page {
            Page::Home => Self::PRIMARY,
            Page::Fitness => Self::ACCENT_WARM,
            Page::Hydration => Self::INFO,
            Page::MealPlanner => Self::SUCCESS,
            Page::MentalWellness => Self::ACCENT_PURPLE,
        }
    }

    /// Get color for a mood value.
    pub fn mood_color(mood: Mood) -> Color {
        match mood {
            Mood::Neutral => Self::MUTED_TEXT,
            Mood::Happy => Self::SUCCESS,
            Mood::Sad => Self::INFO,
            Mood::Angry => Self::ERROR,
        }
    }
}
