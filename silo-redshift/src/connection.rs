use crate::{RedshiftDriver, util::query_result};
use async_stream::try_stream;
use openssl::ssl::{SslConnector, SslFiletype, SslMethod, SslVerifyMode};
use postgres_openssl::MakeTlsConnector;
use silo_core::{
    Catalog, Connection, Driver, Error, ErrorContext, Executor, QueryResult, Result, SearchPath,
    stream::Stream, truncate_long,
};
use std::{borrow::Cow, env, path::Path};
use tokio::spawn;
use tokio_postgres::NoTls;
use url::Url;
use urlencoding::decode;

pub struct RedshiftConnection {
    pub(crate) client: tokio_postgres::Client,
    search_path: SearchPath,
}

/// Remove `key` from the url query string and hand its value back.
fn take_url_param(url: &mut Url, key: &str) -> Option<String> {
    let mut pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| (k.into(), v.into()))
        .collect();
    let position = pairs.iter().position(|(k, _)| k == key)?;
    let (_, value) = pairs.remove(position);
    if pairs.is_empty() {
        url.set_query(None);
    } else {
        url.query_pairs_mut()
            .clear()
            .extend_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    }
    Some(value)
}

impl Executor for RedshiftConnection {
    type Driver = RedshiftDriver;

    fn driver(&self) -> &Self::Driver {
        &RedshiftDriver {}
    }

    fn run(&mut self, sql: String) -> impl Stream<Item = Result<QueryResult>> + Send {
        let client = &self.client;
        try_stream! {
            let messages = client.simple_query(&sql).await.map_err(|e| {
                let e = Error::new(e).context(format!(
                    "While running the query:\n{}",
                    truncate_long!(sql)
                ));
                log::error!("{:#}", e);
                e
            })?;
            for message in messages {
                if let Some(result) = query_result(message) {
                    yield result;
                }
            }
        }
    }
}

impl Connection for RedshiftConnection {
    async fn connect(url: Cow<'static, str>) -> Result<RedshiftConnection> {
        let context = || format!("While trying to connect to `{}`", url);
        let url = decode(&url).with_context(context)?;
        let prefix = format!("{}://", <Self::Driver as Driver>::NAME);
        if !url.starts_with(&prefix) {
            let error = Error::msg(format!(
                "Redshift connection url must start with `{}`",
                &prefix
            ))
            .context(context());
            log::error!("{:#}", error);
            return Err(error);
        }
        let mut url = Url::parse(&url).with_context(context)?;
        let search_path = take_url_param(&mut url, "search_path");
        let sslmode = take_url_param(&mut url, "sslmode")
            .or_else(|| env::var("PGSSLMODE").ok())
            .unwrap_or("disable".into());
        // Redshift speaks the postgres wire protocol, the transport only
        // understands that scheme.
        let connect_url = url.as_str().replacen(&prefix, "postgres://", 1);
        let client = if sslmode == "disable" {
            let (client, connection) = tokio_postgres::connect(&connect_url, NoTls)
                .await
                .with_context(context)?;
            spawn(async move {
                if let Err(e) = connection.await {
                    if !e.is_closed() {
                        log::error!("Redshift connection error: {:#}", e);
                    }
                }
            });
            client
        } else {
            let mut builder = SslConnector::builder(SslMethod::tls())?;
            if let Some(path) = take_url_param(&mut url, "sslrootcert")
                .or_else(|| env::var("PGSSLROOTCERT").ok())
            {
                let path = Path::new(&path);
                if path.exists() {
                    builder.set_ca_file(path)?;
                }
            }
            if let Some(path) =
                take_url_param(&mut url, "sslcert").or_else(|| env::var("PGSSLCERT").ok())
            {
                let path = Path::new(&path);
                if path.exists() {
                    builder.set_certificate_chain_file(path)?;
                }
            }
            if let Some(path) =
                take_url_param(&mut url, "sslkey").or_else(|| env::var("PGSSLKEY").ok())
            {
                let path = Path::new(&path);
                if path.exists() {
                    builder.set_private_key_file(path, SslFiletype::PEM)?;
                }
            }
            match &*sslmode {
                "require" => {
                    builder.set_verify(SslVerifyMode::NONE);
                }
                _ => {
                    builder.set_verify(SslVerifyMode::PEER);
                }
            }
            let connect_url = url.as_str().replacen(&prefix, "postgres://", 1);
            let connector = MakeTlsConnector::new(builder.build());
            let (client, connection) = tokio_postgres::connect(&connect_url, connector)
                .await
                .with_context(context)?;
            spawn(async move {
                if let Err(e) = connection.await {
                    if !e.is_closed() {
                        log::error!("Redshift connection error: {:#}", e);
                    }
                }
            });
            client
        };
        let mut connection = Self {
            client,
            search_path: SearchPath::default(),
        };
        if let Some(path) = search_path {
            connection.set_search_path(&path).await?;
        }
        Ok(connection)
    }

    async fn is_alive(&mut self) -> bool {
        !self.client.is_closed() && self.client.simple_query("SELECT 1").await.is_ok()
    }

    async fn disconnect(self) -> Result<()> {
        // Dropping the client closes the socket and ends the spawned task.
        Ok(())
    }
}

impl Catalog for RedshiftConnection {
    fn search_path(&self) -> &SearchPath {
        &self.search_path
    }

    fn search_path_mut(&mut self) -> &mut SearchPath {
        &mut self.search_path
    }
}
