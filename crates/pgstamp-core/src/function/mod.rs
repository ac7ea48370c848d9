//! Stored function DDL
//!
//! Generates `CREATE OR REPLACE FUNCTION` and `DROP FUNCTION IF EXISTS`
//! statements for the functions that timestamp triggers invoke.

mod builder;

#[cfg(test)]
mod tests;

pub use builder::*;
