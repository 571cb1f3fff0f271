mod as_value;
mod catalog;
mod column_def;
mod connection;
mod driver;
mod executor;
mod query;
mod search_path;
mod sql_writer;
mod table_ref;
mod util;
mod value;

pub use ::anyhow::Context as ErrorContext;
pub use as_value::*;
pub use catalog::*;
pub use column_def::*;
pub use connection::*;
pub use driver::*;
pub use executor::*;
pub use query::*;
pub use search_path::*;
pub use sql_writer::*;
pub use table_ref::*;
pub use value::*;
pub mod stream {
    pub use ::futures::stream::*;
}

pub type Result<T> = anyhow::Result<T>;
pub type Error = anyhow::Error;
