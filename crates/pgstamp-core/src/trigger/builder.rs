//! Trigger DDL builder

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PgStampError;

/// Events a timestamp trigger fires on unless told otherwise
pub const DEFAULT_TRIGGER_EVENTS: [TriggerEvent; 2] = [TriggerEvent::Insert, TriggerEvent::Update];

/// When the trigger fires relative to the row operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerTiming {
    /// Fire before the row is written, so `NEW` can still be changed
    #[default]
    Before,
    /// Fire after the row is written
    After,
}

impl TriggerTiming {
    /// Convert to SQL keyword
    pub fn as_sql(&self) -> &'static str {
        match self {
            TriggerTiming::Before => "BEFORE",
            TriggerTiming::After => "AFTER",
        }
    }
}

/// The DML event that fires the trigger
///
/// # Examples
///
/// ```
/// use pgstamp_core::TriggerEvent;
///
/// let event: TriggerEvent = "update".parse().unwrap();
/// assert_eq!(event, TriggerEvent::Update);
/// assert_eq!(event.as_sql(), "UPDATE");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerEvent {
    /// Trigger fires on INSERT
    Insert,
    /// Trigger fires on UPDATE
    Update,
    /// Trigger fires on DELETE
    Delete,
    /// Trigger fires on TRUNCATE
    Truncate,
}

impl TriggerEvent {
    /// Convert to SQL keyword
    pub fn as_sql(&self) -> &'static str {
        match self {
            TriggerEvent::Insert => "INSERT",
            TriggerEvent::Update => "UPDATE",
            TriggerEvent::Delete => "DELETE",
            TriggerEvent::Truncate => "TRUNCATE",
        }
    }

    /// Join events into the `INSERT OR UPDATE` form, keeping their order
    pub fn join(events: &[TriggerEvent]) -> String {
        events
            .iter()
            .map(|e| e.as_sql())
            .collect::<Vec<_>>()
            .join(" OR ")
    }
}

impl FromStr for TriggerEvent {
    type Err = PgStampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "INSERT" => Ok(TriggerEvent::Insert),
            "UPDATE" => Ok(TriggerEvent::Update),
            "DELETE" => Ok(TriggerEvent::Delete),
            "TRUNCATE" => Ok(TriggerEvent::Truncate),
            _ => Err(PgStampError::UnknownEvent(s.to_string())),
        }
    }
}

impl std::fmt::Display for TriggerEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_sql())
    }
}

/// A row-level trigger that executes a stored function
///
/// # Examples
///
/// ```
/// use pgstamp_core::{TriggerEvent, TriggerSpec};
///
/// let spec = TriggerSpec::new("users_created", "users", "users_created")
///     .with_events(vec![TriggerEvent::Insert]);
///
/// let sql = spec.create_sql();
/// assert!(sql.contains("BEFORE INSERT ON users"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerSpec {
    name: String,
    table: String,
    function_name: String,
    timing: TriggerTiming,
    events: Vec<TriggerEvent>,
}

impl TriggerSpec {
    /// Create a `BEFORE INSERT OR UPDATE` trigger specification
    pub fn new(
        name: impl Into<String>,
        table: impl Into<String>,
        function_name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            table: table.into(),
            function_name: function_name.into(),
            timing: TriggerTiming::Before,
            events: DEFAULT_TRIGGER_EVENTS.to_vec(),
        }
    }

    /// Set the trigger timing
    pub fn with_timing(mut self, timing: TriggerTiming) -> Self {
        self.timing = timing;
        self
    }

    /// Replace the events that fire the trigger
    pub fn with_events(mut self, events: Vec<TriggerEvent>) -> Self {
        self.events = events;
        self
    }

    /// Get the trigger name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the table name
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Get the invoked function name
    pub fn function_name(&self) -> &str {
        &self.function_name
    }

    /// Get the trigger timing
    pub fn timing(&self) -> TriggerTiming {
        self.timing
    }

    /// Get the events
    pub fn events(&self) -> &[TriggerEvent] {
        &self.events
    }

    /// Build the `CREATE TRIGGER` statement
    pub fn create_sql(&self) -> String {
        format!(
            "CREATE TRIGGER {} {} {} ON {}\n    FOR EACH ROW EXECUTE PROCEDURE {}();",
            self.name,
            self.timing.as_sql(),
            TriggerEvent::join(&self.events),
            self.table,
            self.function_name
        )
    }

    /// Build the `DROP TRIGGER IF EXISTS` statement
    pub fn drop_sql(&self) -> String {
        drop_trigger_sql(&self.table, &self.name)
    }
}

/// Generate SQL creating a row-level `BEFORE` trigger
///
/// Events render in the given order joined by `OR`; pass
/// [`DEFAULT_TRIGGER_EVENTS`] for `INSERT OR UPDATE`. Identifiers are not
/// quoted or validated.
pub fn create_trigger_sql(
    table: &str,
    trigger_name: &str,
    function_name: &str,
    events: &[TriggerEvent],
) -> String {
    TriggerSpec::new(trigger_name, table, function_name)
        .with_events(events.to_vec())
        .create_sql()
}

/// Generate SQL dropping a trigger if it exists
pub fn drop_trigger_sql(table: &str, name: &str) -> String {
    format!("DROP TRIGGER IF EXISTS {} ON {};", name, table)
}
