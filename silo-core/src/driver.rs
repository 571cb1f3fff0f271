use crate::{Connection, SqlWriter};

pub trait Driver: Send + Sync {
    type Connection: Connection;
    type SqlWriter: SqlWriter + Send + Sync;

    /// Url scheme the driver answers to.
    const NAME: &'static str;

    fn sql_writer(&self) -> Self::SqlWriter;
}
