use crate::{RedshiftConnection, RedshiftSqlWriter};
use silo_core::Driver;

pub struct RedshiftDriver {}

impl RedshiftDriver {
    pub const fn new() -> Self {
        Self {}
    }
}

impl Driver for RedshiftDriver {
    type Connection = RedshiftConnection;
    type SqlWriter = RedshiftSqlWriter;

    const NAME: &'static str = "redshift";

    fn sql_writer(&self) -> RedshiftSqlWriter {
        RedshiftSqlWriter {}
    }
}
