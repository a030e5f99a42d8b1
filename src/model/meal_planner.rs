/// Planned meals for the meal-planner screen.
/// The list is fixed at construction; no mutating operation is exposed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealPlannerState {
    meals: Vec<String>,
}

impl MealPlannerState {
    pub fn new() -> Self {
        Self {
            meals: vec![
                "Breakfast: Oats".to_string(),
                "Lunch: Salad".to_string(),
                "Dinner: Grilled Chicken".to_string(),
            ],
        }
    }

    /// The planned meals, in display order.
    pub fn meals(&self) -> &[String] {
        &self.meals
    }
}

impl Default for MealPlannerState {
    fn default() -> Self {
        Self::new()
    }
}
