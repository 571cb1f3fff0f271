use silo_core::{SqlWriter, TableRef};

/// Redshift keeps the 8.0 era pg_catalog layout and restricts the standard
/// information_schema views to leader node queries, so every catalog lookup
/// goes through pg_class, pg_namespace and pg_attribute directly. Default
/// expressions still live in pg_attrdef.adsrc there.
pub struct RedshiftSqlWriter {}

impl SqlWriter for RedshiftSqlWriter {
    fn write_tables_query(&self, out: &mut String, namespace: &str) {
        out.push_str(
            "SELECT c.relname FROM pg_catalog.pg_class c \
             JOIN pg_catalog.pg_namespace n ON n.oid = c.relnamespace \
             WHERE c.relkind = 'r' AND n.nspname = ",
        );
        self.write_string_literal(out, namespace);
        out.push_str(" ORDER BY c.relname");
    }

    fn write_table_exists_query(&self, out: &mut String, table: &TableRef) {
        out.push_str(
            "SELECT 1 FROM pg_catalog.pg_class c \
             JOIN pg_catalog.pg_namespace n ON n.oid = c.relnamespace \
             WHERE c.relkind = 'r' AND n.nspname = ",
        );
        self.write_string_literal(out, &table.schema);
        out.push_str(" AND c.relname = ");
        self.write_string_literal(out, &table.name);
        out.push_str(" LIMIT 1");
    }

    fn write_columns_query(&self, out: &mut String, table: &TableRef) {
        out.push_str(
            "SELECT a.attname, pg_catalog.format_type(a.atttypid, a.atttypmod), \
             d.adsrc, NOT a.attnotnull \
             FROM pg_catalog.pg_attribute a \
             JOIN pg_catalog.pg_class c ON c.oid = a.attrelid \
             JOIN pg_catalog.pg_namespace n ON n.oid = c.relnamespace \
             LEFT JOIN pg_catalog.pg_attrdef d \
             ON d.adrelid = a.attrelid AND d.adnum = a.attnum \
             WHERE a.attnum > 0 AND NOT a.attisdropped AND n.nspname = ",
        );
        self.write_string_literal(out, &table.schema);
        out.push_str(" AND c.relname = ");
        self.write_string_literal(out, &table.name);
        out.push_str(" ORDER BY a.attnum");
    }
}
