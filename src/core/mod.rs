pub mod error;

pub use error::{PlannerError, Result};
