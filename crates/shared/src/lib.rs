pub mod error;
pub mod item;
pub mod keys;
pub mod plan;
pub mod store;

pub use error::{Error, Result};
pub use item::Item;
pub use plan::{DayOfWeek, MealType, PlanDay, SavedPlanRef};
pub use store::{MemoryStore, PersistentStore};
