use dinnerwheel_shared::{
    DayOfWeek, Error, MealType, PersistentStore, PlanDay, Result, SavedPlanRef, keys,
};
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::defaults;

/// Summary of a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanOutcome {
    pub days: usize,
    /// Advisory: the caller had no dinners of their own, so the plan drew
    /// from built-in defaults only. Not a failure.
    pub dinner_pool_was_empty: bool,
}

/// Builds N-day meal plans and manages the saved-plan index.
///
/// Each day independently draws one breakfast, one lunch, and one dinner
/// from its category pool (user-custom entries merged ahead of built-in
/// defaults). Draws are with replacement across days; the same meal may
/// recur.
pub struct Planner<S: PersistentStore> {
    store: S,
    plan: Vec<PlanDay>,
    saved: Vec<SavedPlanRef>,
    custom_breakfasts: Vec<String>,
    custom_lunches: Vec<String>,
    first_day: DayOfWeek,
}

impl<S: PersistentStore> Planner<S> {
    pub fn load(store: S, first_day: DayOfWeek) -> Result<Self> {
        let saved = read_json(&store, keys::SAVED_MEAL_PLANS)?;
        let custom_breakfasts = read_json(&store, keys::CUSTOM_BREAKFASTS)?;
        let custom_lunches = read_json(&store, keys::CUSTOM_LUNCHES)?;
        let plan = read_json(&store, keys::CURRENT_MEAL_PLAN)?;

        Ok(Self {
            store,
            plan,
            saved,
            custom_breakfasts,
            custom_lunches,
            first_day,
        })
    }

    pub fn plan(&self) -> &[PlanDay] {
        &self.plan
    }

    pub fn saved_plans(&self) -> &[SavedPlanRef] {
        &self.saved
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Generate a fresh plan, replacing the current one. `days` is clamped
    /// to 1..=7. Day labels follow the weekday rotation from the configured
    /// first day, by index modulo 7.
    pub fn generate(
        &mut self,
        days: usize,
        dinner_names: &[String],
        rng: &mut impl Rng,
    ) -> Result<PlanOutcome> {
        let days = days.clamp(1, 7);
        let dinner_pool_was_empty = dinner_names.is_empty();
        if dinner_pool_was_empty {
            tracing::info!("no user dinners; plan draws from built-in options only");
        }

        let breakfasts = merge_unique(&self.custom_breakfasts, defaults::BREAKFASTS);
        let lunches = merge_unique(&self.custom_lunches, defaults::LUNCHES);
        let dinners = merge_unique(dinner_names, defaults::DINNERS);

        let mut plan = Vec::with_capacity(days);
        for index in 0..days {
            plan.push(PlanDay::new(
                self.first_day.cycled(index).to_string(),
                pick(&breakfasts, rng)?,
                pick(&lunches, rng)?,
                pick(&dinners, rng)?,
            ));
        }

        self.plan = plan;
        self.persist_current()?;

        tracing::info!(days, "generated meal plan");

        Ok(PlanOutcome {
            days,
            dinner_pool_was_empty,
        })
    }

    /// Redraw one day/category slot, leaving every other field of every
    /// day untouched. Draws from the same category pool rules as
    /// [`Planner::generate`].
    pub fn regenerate_slot(
        &mut self,
        index: usize,
        meal: MealType,
        dinner_names: &[String],
        rng: &mut impl Rng,
    ) -> Result<&PlanDay> {
        if index >= self.plan.len() {
            return Err(Error::NoSuchPlanDay(index));
        }

        let options = match meal {
            MealType::Breakfast => merge_unique(&self.custom_breakfasts, defaults::BREAKFASTS),
            MealType::Lunch => merge_unique(&self.custom_lunches, defaults::LUNCHES),
            MealType::Dinner => merge_unique(dinner_names, defaults::DINNERS),
        };
        let choice = pick(&options, rng)?;

        let day = &mut self.plan[index];
        match meal {
            MealType::Breakfast => day.breakfast = choice,
            MealType::Lunch => day.lunch = choice,
            MealType::Dinner => day.dinner = choice,
        }

        self.persist_current()?;

        Ok(&self.plan[index])
    }

    /// Save the current plan: one index entry plus the full day array
    /// under its own key. Plans are only ever saved explicitly.
    pub fn save_plan(&mut self, name: &str) -> Result<SavedPlanRef> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::EmptyName);
        }
        if self.plan.is_empty() {
            return Err(Error::EmptyPlan);
        }

        let reference = SavedPlanRef {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
        };

        let payload =
            serde_json::to_string(&self.plan).map_err(|err| Error::Storage(err.to_string()))?;
        self.store.set(&keys::meal_plan(&reference.id), &payload)?;

        self.saved.push(reference.clone());
        self.persist_index()?;

        tracing::info!(name = %reference.name, id = %reference.id, "saved meal plan");

        Ok(reference)
    }

    /// Replace the current plan (and day count) with a saved one.
    pub fn load_plan(&mut self, id: &str) -> Result<&[PlanDay]> {
        let raw = self
            .store
            .get(&keys::meal_plan(id))?
            .ok_or_else(|| Error::PlanNotFound(id.to_string()))?;
        let plan: Vec<PlanDay> =
            serde_json::from_str(&raw).map_err(|err| Error::Storage(err.to_string()))?;

        self.plan = plan;
        self.persist_current()?;

        Ok(&self.plan)
    }

    /// Delete a saved plan: both the index entry and the payload key.
    /// Deleting an unknown id is a no-op.
    pub fn delete_plan(&mut self, id: &str) -> Result<()> {
        self.saved.retain(|reference| reference.id != id);
        self.persist_index()?;
        self.store.remove(&keys::meal_plan(id))
    }

    fn persist_current(&mut self) -> Result<()> {
        let raw =
            serde_json::to_string(&self.plan).map_err(|err| Error::Storage(err.to_string()))?;
        self.store.set(keys::CURRENT_MEAL_PLAN, &raw)
    }

    fn persist_index(&mut self) -> Result<()> {
        let raw =
            serde_json::to_string(&self.saved).map_err(|err| Error::Storage(err.to_string()))?;
        self.store.set(keys::SAVED_MEAL_PLANS, &raw)
    }
}

/// Uniform pick with replacement from a category pool.
fn pick(options: &[String], rng: &mut impl Rng) -> Result<String> {
    options.choose(rng).cloned().ok_or(Error::EmptyPool)
}

/// Value-dedup union preserving first occurrence, user entries ahead of
/// defaults.
fn merge_unique(primary: &[String], fallback: &[&str]) -> Vec<String> {
    let mut merged: Vec<String> = Vec::with_capacity(primary.len() + fallback.len());
    for name in primary
        .iter()
        .map(String::as_str)
        .chain(fallback.iter().copied())
    {
        if !merged.iter().any(|existing| existing == name) {
            merged.push(name.to_string());
        }
    }
    merged
}

/// Read a JSON value from the store, treating missing or malformed content
/// as the type's default. Only store access itself can fail.
fn read_json<S: PersistentStore, T: DeserializeOwned + Default>(store: &S, key: &str) -> Result<T> {
    match store.get(key)? {
        None => Ok(T::default()),
        Some(raw) => Ok(serde_json::from_str(&raw).unwrap_or_else(|err| {
            tracing::warn!(key, %err, "ignoring malformed stored value");
            T::default()
        })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_unique_keeps_user_entries_first() {
        let custom = vec!["Granola".to_string(), "Oatmeal with Berries".to_string()];
        let merged = merge_unique(&custom, defaults::BREAKFASTS);

        assert_eq!(merged[0], "Granola");
        assert_eq!(merged[1], "Oatmeal with Berries");
        assert_eq!(
            merged.len(),
            defaults::BREAKFASTS.len() + 1,
            "duplicate default removed"
        );
    }
}
