//! Integration with [`tokio`][<https://docs.rs/tokio>] crate.
use std::{
    panic,
    pin::Pin,
    task::{Poll, ready},
};
use tokio::task::JoinHandle;

use crate::{
    Value,
    futures::{FromEntries, ResolveProperties, from_entries, resolve_properties},
};

/// Resolve a keyed collection of [`Value`]s, spawning each pending member as a runtime task.
///
/// Unlike [`resolve_properties`], pending members make progress as soon as they are spawned,
/// without the returned future being polled. The result and failure semantics are identical.
///
/// # Panics
///
/// Panics when called from outside a tokio runtime context, see [`tokio::spawn`].
pub fn spawn_properties<I, K, T, F, E>(props: I) -> ResolveProperties<K, T, Spawned<T, E>>
where
    I: IntoIterator<Item = (K, Value<T, F>)>,
    F: Future<Output = Result<T, E>> + Send + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    resolve_properties(props.into_iter().map(|(key, value)| {
        let value = match value {
            Value::Ready(value) => Value::Ready(value),
            Value::Pending(f) => Value::Pending(Spawned {
                handle: tokio::spawn(f),
            }),
        };
        (key, value)
    }))
}

/// Build an [`Entries`][crate::Entries] from key and pending computation pairs, spawning each
/// computation as a runtime task.
///
/// Unlike [`from_entries`], every computation makes progress as soon as it is spawned, without
/// the returned future being polled. The result and failure semantics are identical.
///
/// # Panics
///
/// Panics when called from outside a tokio runtime context, see [`tokio::spawn`].
pub fn spawn_entries<I, K, T, F, E>(entries: I) -> FromEntries<K, T, Spawned<T, E>>
where
    I: IntoIterator<Item = (K, F)>,
    F: Future<Output = Result<T, E>> + Send + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    from_entries(entries.into_iter().map(|(key, f)| {
        (
            key,
            Spawned {
                handle: tokio::spawn(f),
            },
        )
    }))
}

/// Pending computation running as a runtime task.
///
/// Dropping a [`Spawned`] detaches the task, it keeps running on the runtime.
#[derive(Debug)]
pub struct Spawned<T, E> {
    handle: JoinHandle<Result<T, E>>,
}

impl<T, E> Future for Spawned<T, E> {
    type Output = Result<T, E>;

    fn poll(
        mut self: Pin<&mut Self>,
        cx: &mut std::task::Context<'_>,
    ) -> Poll<Self::Output> {
        match ready!(Pin::new(&mut self.handle).poll(cx)) {
            Ok(output) => Poll::Ready(output),
            Err(err) if err.is_panic() => panic::resume_unwind(err.into_panic()),
            Err(err) => panic!("spawned computation cancelled: {err}"),
        }
    }
}
