//! Trigger DDL
//!
//! Generates row-level `CREATE TRIGGER` and `DROP TRIGGER IF EXISTS`
//! statements.

mod builder;


pub use builder::*;
