//! Tests for function DDL

use super::*;

mod language_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_language_as_sql() {
        assert_eq!(FunctionLanguage::PlPgSql.as_sql(), "plpgsql");
        assert_eq!(FunctionLanguage::Sql.as_sql(), "sql");
        assert_eq!(FunctionLanguage::Custom("plpython3u".into()).as_sql(), "plpython3u");
    }

    #[test]
    fn test_default_language_is_plpgsql() {
        assert_eq!(FunctionLanguage::default(), FunctionLanguage::PlPgSql);
    }
}

mod function_spec_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_function_spec() {
        let spec = FunctionSpec::new("touch", "BEGIN RETURN NEW; END;");
        assert_eq!(spec.name(), "touch");
        assert_eq!(spec.definition(), "BEGIN RETURN NEW; END;");
        assert_eq!(spec.return_type(), DEFAULT_RETURN_TYPE);
        assert_eq!(spec.language(), &FunctionLanguage::PlPgSql);
    }

    #[test]
    fn test_create_sql_layout() {
        let sql =
            FunctionSpec::new("users_modified", "\nBEGIN\n  RETURN NEW;\nEND;\n").create_sql();
        assert_eq!(
            sql,
            "CREATE OR REPLACE FUNCTION users_modified ()\n    RETURNS trigger\n    LANGUAGE 'plpgsql'\n    AS $$\nBEGIN\n  RETURN NEW;\nEND;\n$$;"
        );
    }

    #[test]
    fn test_create_sql_with_language_and_return_type() {
        let sql = FunctionSpec::new("answer", "SELECT 42")
            .with_language(FunctionLanguage::Sql)
            .with_return_type("integer")
            .create_sql();
        assert!(sql.contains("RETURNS integer"));
        assert!(sql.contains("LANGUAGE 'sql'"));
    }

    #[test]
    fn test_body_containing_dollar_quotes_is_embedded_verbatim() {
        let sql = create_function_sql("f", "BEGIN PERFORM $$x$$; END;", "trigger");
        assert!(sql.ends_with("AS $$BEGIN PERFORM $$x$$; END;$$;"));
        assert!(!sql.contains("$func$"));
    }

    #[test]
    fn test_spec_json_round_trip() {
        let spec = FunctionSpec::new("answer", "SELECT 42")
            .with_language(FunctionLanguage::Custom("plv8".into()))
            .with_return_type("integer");

        let json = serde_json::to_string(&spec).unwrap();
        assert!(json.contains(r#""language":{"custom":"plv8"}"#));

        let restored: FunctionSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, spec);
        assert_eq!(restored.create_sql(), spec.create_sql());
    }

    #[test]
    fn test_spec_drop_sql_matches_free_function() {
        let spec = FunctionSpec::new("orders_created", "");
        assert_eq!(spec.drop_sql(), drop_function_sql("orders_created"));
    }
}

mod free_function_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_create_function_sql_is_replaceable() {
        let sql = create_function_sql("users_created", "BEGIN RETURN NEW; END;", "trigger");
        assert!(sql.starts_with("CREATE OR REPLACE FUNCTION users_created ()"));
        assert!(sql.contains("RETURNS trigger"));
        assert!(sql.contains("AS $$BEGIN RETURN NEW; END;$$;"));
    }

    #[test]
    fn test_create_function_sql_custom_return_type() {
        let sql = create_function_sql("now_utc", "BEGIN RETURN now(); END;", "timestamptz");
        assert!(sql.contains("RETURNS timestamptz"));
    }

    #[test]
    fn test_drop_function_sql() {
        assert_eq!(
            drop_function_sql("users_created"),
            "DROP FUNCTION IF EXISTS users_created();"
        );
    }

    #[test]
    fn test_schema_qualified_name_passes_through() {
        assert_eq!(
            drop_function_sql("audit.users_created"),
            "DROP FUNCTION IF EXISTS audit.users_created();"
        );
    }
}
