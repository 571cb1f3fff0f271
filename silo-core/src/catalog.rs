use crate::{
    AsValue, ColumnDef, Driver, ErrorContext, Executor, Result, RowLabeled, SearchPath, SqlWriter,
    TableRef, Value, stream::TryStreamExt,
};
use std::future::Future;

/// Search path aware access to the database catalog.
///
/// Name resolution follows the server's own rule: a qualified reference goes
/// straight to its namespace, a bare name takes the first namespace on the
/// path that has the table. Two namespaces on the path may well contain
/// different tables under the same name, in which case the earlier one wins,
/// exactly as it does server side.
///
/// Every operation issues its lookups through the driver's [`SqlWriter`],
/// one query at a time over the owned session. Failures of the underlying
/// queries surface unmodified, nothing is retried and no partial results are
/// synthesized.
pub trait Catalog: Executor {
    /// Session search path, owned by the connection.
    fn search_path(&self) -> &SearchPath;

    fn search_path_mut(&mut self) -> &mut SearchPath;

    /// Issue `SET search_path` and retain the raw string for exact read back.
    fn set_search_path(&mut self, raw: &str) -> impl Future<Output = Result<()>> + Send {
        async move {
            let mut sql = String::with_capacity(20 + raw.len());
            self.driver().sql_writer().write_set_search_path(&mut sql, raw);
            self.execute(sql).await?;
            self.search_path_mut().set(raw);
            Ok(())
        }
    }

    /// All tables visible through the search path, qualified, namespaces in
    /// path order and tables in catalog order within each namespace. The same
    /// table name showing up in two namespaces is reported twice.
    fn tables(&mut self) -> impl Future<Output = Result<Vec<TableRef>>> + Send {
        async move {
            let writer = self.driver().sql_writer();
            let namespaces = self.search_path().ordered_namespaces().to_vec();
            let mut tables = Vec::new();
            for namespace in namespaces {
                let mut sql = String::with_capacity(128);
                writer.write_tables_query(&mut sql, &namespace);
                let rows: Vec<RowLabeled> = self.fetch(sql).try_collect().await?;
                for row in rows {
                    let name = String::try_from_value(row_value(&row, 0)?)?;
                    tables.push(TableRef::new(namespace.clone(), name));
                }
            }
            Ok(tables)
        }
    }

    /// Existence of `table` checked in its own namespace only.
    fn exists_in(&mut self, table: &TableRef) -> impl Future<Output = Result<bool>> + Send {
        async move {
            let mut sql = String::with_capacity(128);
            self.driver()
                .sql_writer()
                .write_table_exists_query(&mut sql, table);
            let rows: Vec<RowLabeled> = self.fetch(sql).try_collect().await?;
            Ok(!rows.is_empty())
        }
    }

    /// Resolve a reference to a concrete table identity. Qualified references
    /// bypass the search path, bare names take the first namespace that has
    /// the table. `None` when nothing on the path matches.
    fn resolve_table(
        &mut self,
        reference: &str,
    ) -> impl Future<Output = Result<Option<TableRef>>> + Send {
        async move {
            let table = TableRef::parse(reference);
            if table.is_qualified() {
                return Ok(Some(table));
            }
            let namespaces = self.search_path().ordered_namespaces().to_vec();
            for namespace in namespaces {
                let candidate = TableRef::new(namespace, table.name.clone());
                if self.exists_in(&candidate).await? {
                    return Ok(Some(candidate));
                }
            }
            Ok(None)
        }
    }

    fn table_exists(&mut self, reference: &str) -> impl Future<Output = Result<bool>> + Send {
        async move {
            let table = TableRef::parse(reference);
            if table.is_qualified() {
                return self.exists_in(&table).await;
            }
            Ok(self.resolve_table(reference).await?.is_some())
        }
    }

    /// Columns of the resolved table in ordinal position order. A reference
    /// that resolves nowhere yields no columns rather than an error, matching
    /// the zero rows its catalog query would produce.
    fn columns(&mut self, reference: &str) -> impl Future<Output = Result<Vec<ColumnDef>>> + Send {
        async move {
            let Some(table) = self.resolve_table(reference).await? else {
                return Ok(Vec::new());
            };
            let mut sql = String::with_capacity(256);
            self.driver()
                .sql_writer()
                .write_columns_query(&mut sql, &table);
            let rows: Vec<RowLabeled> = self.fetch(sql).try_collect().await?;
            rows.iter().map(column_from_row).collect()
        }
    }

    /// Name of the connected database as the server reports it, no caching.
    fn current_database(&mut self) -> impl Future<Output = Result<String>> + Send {
        async move {
            let mut sql = String::with_capacity(32);
            self.driver()
                .sql_writer()
                .write_current_database_query(&mut sql);
            let rows: Vec<RowLabeled> = self.fetch(sql).try_collect().await?;
            let row = rows.first().context("The server did not report a database name")?;
            String::try_from_value(row_value(row, 0)?)
        }
    }
}

fn row_value(row: &RowLabeled, index: usize) -> Result<Value> {
    row.values()
        .get(index)
        .cloned()
        .with_context(|| format!("Catalog row is missing column {}", index))
}

fn column_from_row(row: &RowLabeled) -> Result<ColumnDef> {
    Ok(ColumnDef::new(
        String::try_from_value(row_value(row, 0)?)?,
        Option::<String>::try_from_value(row_value(row, 2)?)?.unwrap_or_default(),
        String::try_from_value(row_value(row, 1)?)?,
        bool::try_from_value(row_value(row, 3)?)?,
    ))
}
