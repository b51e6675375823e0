pub mod defaults;
mod generate;

pub use generate::{PlanOutcome, Planner};
