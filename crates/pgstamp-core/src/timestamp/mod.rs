//! Timestamp triggers
//!
//! Pairs a stored function with a trigger of the same name so that a
//! timestamp column is filled in automatically:
//! - creation triggers set the column on INSERT and freeze it on UPDATE
//! - modification triggers set the column on every write

mod generator;


pub use generator::*;
