use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use uuid::Uuid;

/// One day of a generated meal plan. Meal entries are plain name strings,
/// not pool items; a plan never references the pool by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanDay {
    pub id: String,
    pub day: String,
    pub breakfast: String,
    pub lunch: String,
    pub dinner: String,
}

impl PlanDay {
    pub fn new(day: String, breakfast: String, lunch: String, dinner: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            day,
            breakfast,
            lunch,
            dinner,
        }
    }
}

/// Index entry for a saved plan; the full `PlanDay` array is persisted
/// separately under a key derived from `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedPlanRef {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
}

/// Weekday labels for plan days. Label assignment is cyclic by day index
/// and independent of the calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[strum(ascii_case_insensitive)]
pub enum DayOfWeek {
    Monday = 0,
    Tuesday = 1,
    Wednesday = 2,
    Thursday = 3,
    Friday = 4,
    Saturday = 5,
    Sunday = 6,
}

impl DayOfWeek {
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    /// The label for the `index`-th plan day when the plan starts on `self`.
    pub fn cycled(self, index: usize) -> DayOfWeek {
        Self::ALL[(self as usize + index) % 7]
    }
}

impl Default for DayOfWeek {
    fn default() -> Self {
        DayOfWeek::Monday
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_labels_cycle_past_a_week() {
        assert_eq!(DayOfWeek::Monday.cycled(0), DayOfWeek::Monday);
        assert_eq!(DayOfWeek::Monday.cycled(6), DayOfWeek::Sunday);
        assert_eq!(DayOfWeek::Monday.cycled(7), DayOfWeek::Monday);
        assert_eq!(DayOfWeek::Saturday.cycled(2), DayOfWeek::Monday);
    }

    #[test]
    fn test_day_of_week_parses_case_insensitively() {
        assert_eq!("friday".parse::<DayOfWeek>().unwrap(), DayOfWeek::Friday);
        assert_eq!(DayOfWeek::Friday.to_string(), "Friday");
    }

    #[test]
    fn test_meal_type_round_trips_through_strings() {
        assert_eq!("dinner".parse::<MealType>().unwrap(), MealType::Dinner);
        assert_eq!(MealType::Breakfast.to_string(), "breakfast");
    }
}
