use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("dinner name cannot be empty")]
    EmptyName,

    #[error("\"{0}\" is already in the list")]
    DuplicateName(String),

    #[error("the dinner pool is empty")]
    EmptyPool,

    #[error("no unique dinners left to draw")]
    PoolExhausted,

    #[error("cannot resolve a selection on a wheel with no slices")]
    EmptyWheel,

    #[error("there is no generated plan to save")]
    EmptyPlan,

    #[error("the current plan has no day {0}")]
    NoSuchPlanDay(usize),

    #[error("no saved meal plan with id {0}")]
    PlanNotFound(String),

    #[error("storage error: {0}")]
    Storage(String),
}
