use silo_core::{QueryResult, RowLabeled, RowNames, RowsAffected, Value};
use tokio_postgres::{SimpleQueryMessage, SimpleQueryRow};

/// Text protocol row into the dynamic row model. Every field arrives as text
/// or NULL over the simple query protocol.
pub(crate) fn row_labeled(row: &SimpleQueryRow) -> RowLabeled {
    let labels: RowNames = row
        .columns()
        .iter()
        .map(|column| column.name().to_string())
        .collect::<Vec<_>>()
        .into();
    let values = (0..row.len())
        .map(|i| match row.get(i) {
            Some(v) => Value::Varchar(Some(v.to_string())),
            None => Value::Null,
        })
        .collect::<Vec<_>>()
        .into_boxed_slice();
    RowLabeled::new(labels, values)
}

pub(crate) fn query_result(message: SimpleQueryMessage) -> Option<QueryResult> {
    match message {
        SimpleQueryMessage::Row(row) => Some(QueryResult::Row(row_labeled(&row))),
        SimpleQueryMessage::CommandComplete(count) => Some(QueryResult::Affected(RowsAffected {
            rows_affected: count,
        })),
        _ => None,
    }
}
