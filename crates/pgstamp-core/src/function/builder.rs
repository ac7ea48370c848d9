//! Function DDL builder
//!
//! Renders the stored functions that back timestamp triggers.

use serde::{Deserialize, Serialize};

/// Return type used when none is given
pub const DEFAULT_RETURN_TYPE: &str = "trigger";

/// Procedural language a function body is written in
///
/// # Examples
///
/// ```
/// use pgstamp_core::FunctionLanguage;
///
/// assert_eq!(FunctionLanguage::default().as_sql(), "plpgsql");
/// assert_eq!(FunctionLanguage::Custom("plv8".into()).as_sql(), "plv8");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FunctionLanguage {
    /// PL/pgSQL, the only language trigger functions are usually written in
    #[default]
    PlPgSql,
    /// Plain SQL
    Sql,
    /// Any other installed language, by name
    Custom(String),
}

impl FunctionLanguage {
    /// Language name as it appears after `LANGUAGE`
    pub fn as_sql(&self) -> &str {
        match self {
            FunctionLanguage::PlPgSql => "plpgsql",
            FunctionLanguage::Sql => "sql",
            FunctionLanguage::Custom(name) => name,
        }
    }
}

/// A zero-argument stored function
///
/// # Examples
///
/// ```
/// use pgstamp_core::FunctionSpec;
///
/// let spec = FunctionSpec::new("users_modified", "BEGIN RETURN NEW; END;");
/// assert_eq!(spec.return_type(), "trigger");
///
/// let sql = spec.create_sql();
/// assert!(sql.starts_with("CREATE OR REPLACE FUNCTION users_modified ()"));
/// assert_eq!(spec.drop_sql(), "DROP FUNCTION IF EXISTS users_modified();");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionSpec {
    name: String,
    definition: String,
    return_type: String,
    language: FunctionLanguage,
}

impl FunctionSpec {
    /// Create a trigger-returning PL/pgSQL function
    pub fn new(name: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            definition: definition.into(),
            return_type: DEFAULT_RETURN_TYPE.to_string(),
            language: FunctionLanguage::default(),
        }
    }

    /// Set the return type
    pub fn with_return_type(mut self, return_type: impl Into<String>) -> Self {
        self.return_type = return_type.into();
        self
    }

    /// Set the body language
    pub fn with_language(mut self, language: FunctionLanguage) -> Self {
        self.language = language;
        self
    }

    /// Get the function name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the function body
    pub fn definition(&self) -> &str {
        &self.definition
    }

    /// Get the return type
    pub fn return_type(&self) -> &str {
        &self.return_type
    }

    /// Get the body language
    pub fn language(&self) -> &FunctionLanguage {
        &self.language
    }

    /// Build the `CREATE OR REPLACE FUNCTION` statement
    ///
    /// The definition always sits between plain `$$` quotes, so a body that
    /// itself contains `$$` ends the literal early.
    pub fn create_sql(&self) -> String {
        format!(
            "CREATE OR REPLACE FUNCTION {} ()\n    RETURNS {}\n    LANGUAGE '{}'\n    AS $${}$$;",
            self.name,
            self.return_type,
            self.language.as_sql(),
            self.definition
        )
    }

    /// Build the `DROP FUNCTION IF EXISTS` statement
    pub fn drop_sql(&self) -> String {
        drop_function_sql(&self.name)
    }
}

/// Generate SQL creating (or replacing) a PL/pgSQL function
///
/// `definition` is embedded verbatim between dollar quotes. `name` and
/// `returns` are not quoted or validated.
pub fn create_function_sql(name: &str, definition: &str, returns: &str) -> String {
    FunctionSpec::new(name, definition)
        .with_return_type(returns)
        .create_sql()
}

/// Generate SQL dropping a zero-argument function if it exists
pub fn drop_function_sql(name: &str) -> String {
    format!("DROP FUNCTION IF EXISTS {}();", name)
}
