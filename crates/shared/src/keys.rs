//! Storage key names. These are fixed: data written by earlier versions of
//! the app lives under these exact keys.

pub const DINNERS: &str = "dinners";
pub const GENERATED_DINNERS: &str = "generatedDinners";
pub const SAVED_MEAL_PLANS: &str = "savedMealPlans";
pub const CUSTOM_BREAKFASTS: &str = "customBreakfasts";
pub const CUSTOM_LUNCHES: &str = "customLunches";
pub const CURRENT_MEAL_PLAN: &str = "currentMealPlan";

/// Key holding the full content of one saved meal plan.
pub fn meal_plan(id: &str) -> String {
    format!("mealPlan-{id}")
}
