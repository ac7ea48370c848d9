//! pgstamp - SQL generation for timestamp-maintaining triggers
//!
//! This crate produces PostgreSQL DDL text that keeps "created" and
//! "modified" timestamp columns up to date:
//! - Stored functions wrapping a PL/pgSQL body
//! - Row-level `BEFORE` triggers invoking those functions
//! - Ready-made creation/modification timestamp triggers
//! - Declarative plans covering many tables at once
//!
//! Nothing here talks to a database. Identifiers are interpolated verbatim,
//! so callers are responsible for passing safe (or already quoted) names.
//!
//! ```
//! use pgstamp_core::create_timestamp_trigger_for_modification;
//!
//! let sql = create_timestamp_trigger_for_modification("users", Some("updated_at"));
//! assert!(sql.contains("CREATE OR REPLACE FUNCTION users_updated_at ()"));
//! assert!(sql.contains("NEW.updated_at := CURRENT_TIMESTAMP;"));
//! ```

pub mod error;
pub mod function;
pub mod plan;
pub mod timestamp;
pub mod trigger;

pub use error::{PgStampError, Result};
pub use function::*;
pub use plan::*;
pub use timestamp::*;
pub use trigger::*;
