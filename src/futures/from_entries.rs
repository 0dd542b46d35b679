use std::{pin::Pin, task::Poll};

use super::resolve::{ResolveProperties, resolve_properties};
use crate::{Entries, Value};

/// Build an [`Entries`] from a sequence of key and pending computation pairs.
///
/// Every value is driven concurrently, the returned future settles once all of them have settled,
/// with an empty sequence it settles on first poll with an empty mapping. The result is built in
/// input order, so a duplicate key deterministically resolves to the last entry in the sequence
/// regardless of which computation settles first.
///
/// The first value that fails completes the whole future with that error.
///
/// # Example
///
/// ```
/// # async fn app() {
/// use propjoin::futures::from_entries;
///
/// let entries = [
///     ("a", std::future::ready(Ok::<_, std::io::Error>(1))),
///     ("b", std::future::ready(Ok(2))),
/// ];
///
/// let result = from_entries(entries).await.unwrap();
/// assert_eq!(result.keys().collect::<Vec<_>>(), [&"a", &"b"]);
/// assert_eq!(result.get("b"), Some(&2));
/// # }
/// # assert!(matches!(
/// #     std::pin::pin!(app())
/// #         .poll(&mut std::task::Context::from_waker(std::task::Waker::noop())),
/// #     std::task::Poll::Ready(())
/// # ));
/// ```
pub fn from_entries<I, K, T, F, E>(entries: I) -> FromEntries<K, T, F>
where
    I: IntoIterator<Item = (K, F)>,
    F: Future<Output = Result<T, E>>,
{
    FromEntries {
        inner: resolve_properties(
            entries
                .into_iter()
                .map(|(key, f)| (key, Value::Pending(f))),
        ),
    }
}

/// Future returned by [`from_entries`].
#[derive(Debug)]
pub struct FromEntries<K, T, F> {
    inner: ResolveProperties<K, T, F>,
}

impl<K, T, F, E> Future for FromEntries<K, T, F>
where
    K: PartialEq,
    F: Future<Output = Result<T, E>>,
{
    type Output = Result<Entries<K, T>, E>;

    #[inline]
    fn poll(
        self: Pin<&mut Self>,
        cx: &mut std::task::Context<'_>,
    ) -> Poll<Self::Output> {
        // SAFETY: self is pinned
        // no `Drop`, nor manual `Unpin` implementation.
        unsafe { self.map_unchecked_mut(|me| &mut me.inner) }.poll(cx)
    }
}
