//! Timestamp trigger generator

use indoc::formatdoc;

use crate::function::{FunctionSpec, drop_function_sql};
use crate::trigger::{TriggerSpec, drop_trigger_sql};

/// Column stamped by creation triggers when none is given
pub const DEFAULT_CREATION_COLUMN: &str = "created";

/// Column stamped by modification triggers when none is given
pub const DEFAULT_MODIFICATION_COLUMN: &str = "modified";

/// Which moment a timestamp column records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimestampKind {
    /// Set once on INSERT, carried forward unchanged on UPDATE
    Creation,
    /// Set on every INSERT and UPDATE
    Modification,
}

impl TimestampKind {
    /// Column name used when the caller doesn't supply one
    pub fn default_column(&self) -> &'static str {
        match self {
            TimestampKind::Creation => DEFAULT_CREATION_COLUMN,
            TimestampKind::Modification => DEFAULT_MODIFICATION_COLUMN,
        }
    }

    /// PL/pgSQL body that maintains `column`
    pub fn definition(&self, column: &str) -> String {
        let body = match self {
            TimestampKind::Creation => formatdoc! {"
                BEGIN
                  IF (TG_OP = 'UPDATE') THEN
                    NEW.{column} := OLD.{column};
                  ELSIF (TG_OP = 'INSERT') THEN
                    NEW.{column} := CURRENT_TIMESTAMP;
                  END IF;
                  RETURN NEW;
                END;
            "},
            TimestampKind::Modification => formatdoc! {"
                BEGIN
                  NEW.{column} := CURRENT_TIMESTAMP;
                  RETURN NEW;
                END;
            "},
        };
        format!("\n{}", body)
    }
}

impl std::fmt::Display for TimestampKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimestampKind::Creation => write!(f, "creation"),
            TimestampKind::Modification => write!(f, "modification"),
        }
    }
}

/// A timestamp trigger on one column of one table
///
/// # Examples
///
/// ```
/// use pgstamp_core::{TimestampKind, TimestampTrigger};
///
/// let stamp = TimestampTrigger::new("users", TimestampKind::Creation);
/// assert_eq!(stamp.column(), "created");
/// assert_eq!(stamp.name(), "users_created");
///
/// let stamp = stamp.with_column("inserted_at");
/// assert_eq!(stamp.name(), "users_inserted_at");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimestampTrigger {
    table: String,
    column: String,
    kind: TimestampKind,
}

impl TimestampTrigger {
    /// Create a trigger on the kind's default column
    pub fn new(table: impl Into<String>, kind: TimestampKind) -> Self {
        Self {
            table: table.into(),
            column: kind.default_column().to_string(),
            kind,
        }
    }

    /// Stamp a different column
    pub fn with_column(mut self, column: impl Into<String>) -> Self {
        self.column = column.into();
        self
    }

    /// Get the table name
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Get the stamped column
    pub fn column(&self) -> &str {
        &self.column
    }

    /// Get the timestamp kind
    pub fn kind(&self) -> TimestampKind {
        self.kind
    }

    /// Shared name of the function and the trigger
    pub fn name(&self) -> String {
        trigger_name(&self.table, &self.column)
    }

    /// Build the function and trigger creation SQL
    pub fn create_sql(&self) -> String {
        create_timestamp_trigger(&self.table, &self.column, &self.kind.definition(&self.column))
    }

    /// Build the trigger and function teardown SQL
    pub fn drop_sql(&self) -> String {
        drop_timestamp_trigger(&self.table, &self.column)
    }
}

/// Name shared by the function and trigger stamping `table.column`
pub fn trigger_name(table: &str, column: &str) -> String {
    format!("{}_{}", table, column)
}

/// Generate SQL creating a function running `definition` and a
/// `BEFORE INSERT OR UPDATE` trigger calling it, both named
/// `<table>_<column>`
pub fn create_timestamp_trigger(table: &str, column: &str, definition: &str) -> String {
    let name = trigger_name(table, column);
    tracing::debug!(table, column, name = %name, "generating timestamp trigger");

    let create_function = FunctionSpec::new(name.as_str(), definition).create_sql();
    let create_trigger = TriggerSpec::new(name.as_str(), table, name.as_str()).create_sql();
    [create_function, create_trigger].join("\n")
}

/// Generate SQL dropping the trigger and then the function created by
/// [`create_timestamp_trigger`]
pub fn drop_timestamp_trigger(table: &str, column: &str) -> String {
    let name = trigger_name(table, column);
    tracing::debug!(table, column, name = %name, "generating timestamp trigger teardown");

    [drop_trigger_sql(table, &name), drop_function_sql(&name)].join("\n")
}

/// Generate SQL stamping `column` (default `created`) on INSERT and
/// preserving it across UPDATEs
pub fn create_timestamp_trigger_for_creation(table: &str, column: Option<&str>) -> String {
    stamp(table, column, TimestampKind::Creation).create_sql()
}

/// Generate SQL removing a creation timestamp trigger
pub fn drop_timestamp_trigger_for_creation(table: &str, column: Option<&str>) -> String {
    stamp(table, column, TimestampKind::Creation).drop_sql()
}

/// Generate SQL stamping `column` (default `modified`) on every write
pub fn create_timestamp_trigger_for_modification(table: &str, column: Option<&str>) -> String {
    stamp(table, column, TimestampKind::Modification).create_sql()
}

/// Generate SQL removing a modification timestamp trigger
pub fn drop_timestamp_trigger_for_modification(table: &str, column: Option<&str>) -> String {
    stamp(table, column, TimestampKind::Modification).drop_sql()
}

fn stamp(table: &str, column: Option<&str>, kind: TimestampKind) -> TimestampTrigger {
    let trigger = TimestampTrigger::new(table, kind);
    match column {
        Some(column) => trigger.with_column(column),
        None => trigger,
    }
}
