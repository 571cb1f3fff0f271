use crate::{TableRef, Value};
use std::fmt::Write;
use time::{Date, Time};

macro_rules! write_integer {
    ($out:ident, $value:expr) => {{
        let mut buffer = itoa::Buffer::new();
        $out.push_str(buffer.format($value));
    }};
}
macro_rules! write_float {
    ($this:ident, $out:ident, $value:expr) => {{
        if $value.is_finite() {
            let mut buffer = ryu::Buffer::new();
            $out.push_str(buffer.format($value));
        } else if $value.is_nan() {
            $this.write_string_literal($out, "NaN");
        } else if $value.is_sign_negative() {
            $this.write_string_literal($out, "-Infinity");
        } else {
            $this.write_string_literal($out, "Infinity");
        }
    }};
}

/// Dialect printer converting names, literals and catalog lookups into
/// concrete SQL text.
///
/// The default methods produce ANSI flavored SQL with `information_schema`
/// catalog lookups. Drivers override the parts where their backend diverges.
pub trait SqlWriter {
    /// Escape occurrences of `search` char with `replace` while copying into
    /// the buffer.
    fn write_escaped(&self, out: &mut String, value: &str, search: char, replace: &str) {
        let mut position = 0;
        for (i, c) in value.char_indices() {
            if c == search {
                out.push_str(&value[position..i]);
                out.push_str(replace);
                position = i + 1;
            }
        }
        out.push_str(&value[position..]);
    }

    /// Quote identifiers ("name") doubling inner quotes.
    ///
    /// Implemented here rather than delegating to a driver native helper:
    /// those are known to clip names around the identifier length limit.
    fn write_identifier_quoted(&self, out: &mut String, value: &str) {
        out.push('"');
        self.write_escaped(out, value, '"', r#""""#);
        out.push('"');
    }

    /// [`SqlWriter::write_identifier_quoted`] into a fresh string.
    fn quote_identifier(&self, value: &str) -> String {
        let mut out = String::with_capacity(value.len() + 2);
        self.write_identifier_quoted(&mut out, value);
        out
    }

    /// Double single quotes so `value` can sit between literal delimiters.
    /// Nothing else is altered.
    fn write_string_escaped(&self, out: &mut String, value: &str) {
        self.write_escaped(out, value, '\'', "''");
    }

    /// [`SqlWriter::write_string_escaped`] into a fresh string.
    fn escape_string(&self, value: &str) -> String {
        let mut out = String::with_capacity(value.len());
        self.write_string_escaped(&mut out, value);
        out
    }

    /// A complete `'...'` literal.
    fn write_string_literal(&self, out: &mut String, value: &str) {
        out.push('\'');
        self.write_string_escaped(out, value);
        out.push('\'');
    }

    /// Render a table reference, schema qualified when one is present.
    fn write_table_ref(&self, out: &mut String, value: &TableRef) {
        if !value.schema.is_empty() {
            self.write_identifier_quoted(out, &value.schema);
            out.push('.');
        }
        self.write_identifier_quoted(out, &value.name);
    }

    fn write_value(&self, out: &mut String, value: &Value) {
        match value {
            Value::Null
            | Value::Boolean(None, ..)
            | Value::Int16(None, ..)
            | Value::Int32(None, ..)
            | Value::Int64(None, ..)
            | Value::Float32(None, ..)
            | Value::Float64(None, ..)
            | Value::Decimal(None, ..)
            | Value::Char(None, ..)
            | Value::Varchar(None, ..)
            | Value::Blob(None, ..)
            | Value::Date(None, ..)
            | Value::Time(None, ..)
            | Value::Timestamp(None, ..)
            | Value::TimestampWithTimezone(None, ..) => self.write_value_none(out),
            Value::Boolean(Some(v), ..) => self.write_value_bool(out, *v),
            Value::Int16(Some(v), ..) => write_integer!(out, *v),
            Value::Int32(Some(v), ..) => write_integer!(out, *v),
            Value::Int64(Some(v), ..) => write_integer!(out, *v),
            Value::Float32(Some(v), ..) => write_float!(self, out, *v),
            Value::Float64(Some(v), ..) => write_float!(self, out, *v),
            Value::Decimal(Some(v), ..) => {
                let _ = write!(out, "{}", v);
            }
            Value::Char(Some(v), ..) => {
                out.push('\'');
                if *v == '\'' {
                    out.push_str("''");
                } else {
                    out.push(*v);
                }
                out.push('\'');
            }
            Value::Varchar(Some(v), ..) => self.write_string_literal(out, v),
            Value::Blob(Some(v), ..) => self.write_value_blob(out, v.as_ref()),
            Value::Date(Some(v), ..) => {
                out.push('\'');
                self.write_value_date(out, v);
                out.push('\'');
            }
            Value::Time(Some(v), ..) => {
                out.push('\'');
                self.write_value_time(out, v);
                out.push('\'');
            }
            Value::Timestamp(Some(v), ..) => {
                out.push('\'');
                self.write_value_date(out, &v.date());
                out.push('T');
                self.write_value_time(out, &v.time());
                out.push('\'');
            }
            Value::TimestampWithTimezone(Some(v), ..) => {
                out.push('\'');
                self.write_value_date(out, &v.date());
                out.push('T');
                self.write_value_time(out, &v.time());
                let offset = v.offset();
                let _ = write!(
                    out,
                    "{:+03}:{:02}",
                    offset.whole_hours(),
                    (offset.whole_minutes() % 60).abs()
                );
                out.push('\'');
            }
        };
    }

    fn write_value_none(&self, out: &mut String) {
        out.push_str("NULL")
    }

    fn write_value_bool(&self, out: &mut String, value: bool) {
        out.push_str(["false", "true"][value as usize])
    }

    fn write_value_blob(&self, out: &mut String, value: &[u8]) {
        out.push('\'');
        for b in value {
            let _ = write!(out, "\\x{:X}", b);
        }
        out.push('\'');
    }

    fn write_value_date(&self, out: &mut String, value: &Date) {
        let _ = write!(
            out,
            "{:04}-{:02}-{:02}",
            value.year(),
            value.month() as u8,
            value.day()
        );
    }

    fn write_value_time(&self, out: &mut String, value: &Time) {
        let _ = write!(
            out,
            "{:02}:{:02}:{:02}",
            value.hour(),
            value.minute(),
            value.second()
        );
        if value.nanosecond() != 0 {
            let mut subsecond = value.nanosecond();
            let mut width = 9;
            while width > 1 && subsecond % 10 == 0 {
                subsecond /= 10;
                width -= 1;
            }
            let _ = write!(out, ".{:0width$}", subsecond, width = width);
        }
    }

    /// List the tables of one namespace, a single text column in name order.
    fn write_tables_query(&self, out: &mut String, namespace: &str) {
        out.push_str("SELECT table_name FROM information_schema.tables WHERE table_schema = ");
        self.write_string_literal(out, namespace);
        out.push_str(" ORDER BY table_name");
    }

    /// Existence probe for one table in one namespace, any row means present.
    fn write_table_exists_query(&self, out: &mut String, table: &TableRef) {
        out.push_str("SELECT 1 FROM information_schema.tables WHERE table_schema = ");
        self.write_string_literal(out, &table.schema);
        out.push_str(" AND table_name = ");
        self.write_string_literal(out, &table.name);
        out.push_str(" LIMIT 1");
    }

    /// Columns of a resolved table projected as (name, type, default,
    /// nullable), in ordinal position order. The type column must carry the
    /// backend's full type string, the nullable column a boolean.
    fn write_columns_query(&self, out: &mut String, table: &TableRef) {
        out.push_str(
            "SELECT column_name, data_type, column_default, is_nullable = 'YES' \
             FROM information_schema.columns WHERE table_schema = ",
        );
        self.write_string_literal(out, &table.schema);
        out.push_str(" AND table_name = ");
        self.write_string_literal(out, &table.name);
        out.push_str(" ORDER BY ordinal_position");
    }

    /// Name of the database the session is connected to.
    fn write_current_database_query(&self, out: &mut String) {
        out.push_str("SELECT current_database()");
    }

    /// The raw path goes in verbatim, the server parses and expands it.
    fn write_set_search_path(&self, out: &mut String, raw: &str) {
        out.push_str("SET search_path TO ");
        out.push_str(raw);
    }
}
