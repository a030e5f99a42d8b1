/// Daily step goal the progress bar is measured against.
pub const DAILY_STEP_GOAL: u32 = 10_000;

/// Steps-entry state for the fitness screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FitnessState {
    /// Current contents of the steps field. Always digits-only.
    pub steps_input: String,

    /// Set when the last input attempt was rejected; cleared by the next
    /// accepted one. Drives the validation message in the view.
    pub invalid: bool,
}

impl FitnessState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Candidate field contents. Digits-only input (including empty)
    /// replaces the field and clears the invalid flag; anything else leaves
    /// the field untouched and sets it.
    pub fn set_steps_input(mut self, raw: &str) -> Self {
        if raw.chars().all(|c| c.is_ascii_digit()) {
            self.steps_input = raw.to_string();
            self.invalid = false;
        } else {
            self.invalid = true;
        }
        self
    }

    /// Fraction of the daily goal reached. Empty or unparsable input counts
    /// as zero steps. Not clamped; display code decides whether to cap the
    /// bar at 100%.
    pub fn progress_fraction(&self) -> f64 {
        let steps: f64 = self.steps_input.parse().unwrap_or(0.0);
        steps / f64::from(DAILY_STEP_GOAL)
    }
}
