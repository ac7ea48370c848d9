//! Stamp plans
//!
//! A plan declares which tables carry creation and modification
//! timestamps, so the SQL for a whole schema can be produced in one go.

mod stamp_plan;


pub use stamp_plan::*;
