/// One of the four fixed mood values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mood {
    #[default]
    Neutral,
    Happy,
    Sad,
    Angry,
}

impl Mood {
    /// Moods offered for selection, in display order.
    pub const ALL: [Mood; 4] = [Mood::Happy, Mood::Sad, Mood::Angry, Mood::Neutral];

    pub fn symbol(&self) -> &'static str {
        match self {
            Mood::Neutral => "🙂",
            Mood::Happy => "😊",
            Mood::Sad => "😞",
            Mood::Angry => "😡",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Mood::Neutral => "Neutral",
            Mood::Happy => "Happy",
            Mood::Sad => "Sad",
            Mood::Angry => "Angry",
        }
    }
}

/// Mood selection for the mental-wellness screen. No history is retained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MentalWellnessState {
    pub mood: Mood,
}

impl MentalWellnessState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unconditional assignment; always succeeds.
    pub fn set_mood(mut self, mood: Mood) -> Self {
        self.mood = mood;
        self
    }
}
