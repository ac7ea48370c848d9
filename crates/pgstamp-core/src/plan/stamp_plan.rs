//! Stamp plan loading and rendering

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PgStampError, Result};
use crate::timestamp::{TimestampKind, TimestampTrigger};

/// Timestamp columns wanted on one table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableStamps {
    /// Table name, passed through verbatim
    pub name: String,
    /// Column stamped on creation, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    /// Column stamped on every modification, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified: Option<String>,
}

impl TableStamps {
    /// Create an entry with no stamped columns
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            created: None,
            modified: None,
        }
    }

    /// Stamp `column` on creation
    pub fn with_created(mut self, column: impl Into<String>) -> Self {
        self.created = Some(column.into());
        self
    }

    /// Stamp `column` on modification
    pub fn with_modified(mut self, column: impl Into<String>) -> Self {
        self.modified = Some(column.into());
        self
    }

    /// Triggers for this table, creation first
    pub fn triggers(&self) -> Vec<TimestampTrigger> {
        let created = self.created.as_ref().map(|column| {
            TimestampTrigger::new(self.name.as_str(), TimestampKind::Creation)
                .with_column(column.as_str())
        });
        let modified = self.modified.as_ref().map(|column| {
            TimestampTrigger::new(self.name.as_str(), TimestampKind::Modification)
                .with_column(column.as_str())
        });
        created.into_iter().chain(modified).collect()
    }
}

/// An ordered list of tables and their timestamp columns
///
/// # Examples
///
/// ```
/// use pgstamp_core::StampPlan;
///
/// let plan = StampPlan::from_toml_str(r#"
///     [[tables]]
///     name = "users"
///     created = "created_at"
///     modified = "updated_at"
/// "#).unwrap();
///
/// assert_eq!(plan.triggers().len(), 2);
/// assert!(plan.create_sql().contains("users_created_at"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StampPlan {
    #[serde(default)]
    pub tables: Vec<TableStamps>,
}

impl StampPlan {
    /// Create an empty plan
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a table entry
    pub fn with_table(mut self, table: TableStamps) -> Self {
        self.tables.push(table);
        self
    }

    /// Parse a plan from TOML text
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Parse a plan from JSON text
    pub fn from_json_str(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    /// Load a plan file, choosing the format from its extension
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        let plan = match extension.as_deref() {
            Some("toml") => Self::from_toml_str(&std::fs::read_to_string(path)?)?,
            Some("json") => Self::from_json_str(&std::fs::read_to_string(path)?)?,
            _ => return Err(PgStampError::UnsupportedFormat(path.to_path_buf())),
        };

        tracing::info!(path = %path.display(), tables = plan.tables.len(), "loaded stamp plan");
        Ok(plan)
    }

    /// Every trigger in the plan, in declaration order
    pub fn triggers(&self) -> Vec<TimestampTrigger> {
        self.tables
            .iter()
            .flat_map(|table| {
                let triggers = table.triggers();
                if triggers.is_empty() {
                    tracing::warn!(table = %table.name, "plan entry stamps no columns");
                }
                triggers
            })
            .collect()
    }

    /// SQL creating every trigger in the plan
    pub fn create_sql(&self) -> String {
        self.triggers()
            .iter()
            .map(TimestampTrigger::create_sql)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// SQL dropping every trigger in the plan, last created first
    pub fn drop_sql(&self) -> String {
        self.triggers()
            .iter()
            .rev()
            .map(TimestampTrigger::drop_sql)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
