use crate::{Executor, Result};
use std::{borrow::Cow, future::Future};

pub trait Connection: Executor {
    /// Establish a single connection to the given URL.
    fn connect(url: Cow<'static, str>) -> impl Future<Output = Result<Self>> + Send
    where
        Self: Sized;

    /// Liveness probe. False once the session is unusable.
    fn is_alive(&mut self) -> impl Future<Output = bool> + Send;

    /// Close the session.
    fn disconnect(self) -> impl Future<Output = Result<()>> + Send {
        async { Ok(()) }
    }
}
