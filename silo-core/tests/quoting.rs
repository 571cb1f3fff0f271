#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use silo_core::{SqlWriter, TableRef, Value};
    use time::macros::{date, datetime, time};

    struct Writer;
    impl SqlWriter for Writer {}

    #[test]
    fn quote_identifier_cases() {
        let writer = Writer;
        let cases = [
            ("quote", r#""quote""#),
            (r#"qu"ote"#, r#""qu""ote""#),
            (r#"qu"""ote"#, r#""qu""""""ote""#),
            (r#"foo "bar" baz"#, r#""foo ""bar"" baz""#),
            (" quote ", r#"" quote ""#),
            ("", r#""""#),
        ];
        for (input, expected) in cases {
            assert_eq!(writer.quote_identifier(input), expected);
        }
    }

    #[test]
    fn quote_identifier_long_name() {
        // Native quoting helpers clip names around the identifier length
        // limit, ours must pass them through untouched.
        let name = "q".repeat(127);
        let quoted = Writer.quote_identifier(&name);
        assert_eq!(quoted, format!("\"{}\"", name));
        assert_eq!(quoted.len(), 129);
    }

    #[test]
    fn quote_identifier_doubles_every_quote() {
        for input in ["", "\"", "a\"b\"c", "\"\"\"", "plain"] {
            let quoted = Writer.quote_identifier(input);
            assert!(quoted.starts_with('"'));
            assert!(quoted.ends_with('"'));
            let inner = &quoted[1..quoted.len() - 1];
            assert_eq!(inner.matches('"').count(), input.matches('"').count() * 2);
        }
    }

    #[test]
    fn escape_string_doubles_single_quotes() {
        let writer = Writer;
        assert_eq!(writer.escape_string("quote'd"), "quote''d");
        assert_eq!(writer.escape_string("quote"), "quote");
        assert_eq!(writer.escape_string(""), "");
        assert_eq!(writer.escape_string("''"), "''''");
        // Nothing but single quotes is altered.
        assert_eq!(writer.escape_string("a\nb\tc\"d"), "a\nb\tc\"d");
    }

    #[test]
    fn string_literal_wraps_and_escapes() {
        let mut out = String::new();
        Writer.write_string_literal(&mut out, "it's");
        assert_eq!(out, "'it''s'");
    }

    #[test]
    fn table_ref_rendering() {
        let mut out = String::new();
        Writer.write_table_ref(&mut out, &TableRef::new("test", "te\"st"));
        assert_eq!(out, r#""test"."te""st""#);

        let mut out = String::new();
        Writer.write_table_ref(&mut out, &TableRef::parse("bare"));
        assert_eq!(out, r#""bare""#);
    }

    #[test]
    fn value_literals() {
        let writer = Writer;
        let cases = [
            (Value::Null, "NULL"),
            (Value::Varchar(None), "NULL"),
            (Value::Boolean(Some(true)), "true"),
            (Value::Boolean(Some(false)), "false"),
            (Value::Int16(Some(-3)), "-3"),
            (Value::Int32(Some(42)), "42"),
            (Value::Int64(Some(9_000_000_000)), "9000000000"),
            (Value::Float64(Some(1.5)), "1.5"),
            (Value::Float64(Some(f64::NAN)), "'NaN'"),
            (Value::Decimal(Some(Decimal::new(1234, 2)), 10, 2), "12.34"),
            (Value::Char(Some('\'')), "''''"),
            (Value::Varchar(Some("it's".into())), "'it''s'"),
            (Value::Date(Some(date!(2024 - 02 - 29))), "'2024-02-29'"),
            (Value::Time(Some(time!(13:45:07))), "'13:45:07'"),
            (
                Value::Timestamp(Some(datetime!(2024-02-29 13:45:07))),
                "'2024-02-29T13:45:07'",
            ),
        ];
        for (value, expected) in cases {
            let mut out = String::new();
            writer.write_value(&mut out, &value);
            assert_eq!(out, expected, "rendering {:?}", value);
        }
    }

    #[test]
    fn ansi_catalog_queries_escape_names() {
        let writer = Writer;
        let mut sql = String::new();
        writer.write_tables_query(&mut sql, "we'ird");
        assert_eq!(
            sql,
            "SELECT table_name FROM information_schema.tables \
             WHERE table_schema = 'we''ird' ORDER BY table_name"
        );

        let mut sql = String::new();
        writer.write_table_exists_query(&mut sql, &TableRef::new("public", "test"));
        assert_eq!(
            sql,
            "SELECT 1 FROM information_schema.tables WHERE table_schema = 'public' \
             AND table_name = 'test' LIMIT 1"
        );

        let mut sql = String::new();
        writer.write_set_search_path(&mut sql, r#""$user", public"#);
        assert_eq!(sql, r#"SET search_path TO "$user", public"#);
    }
}
