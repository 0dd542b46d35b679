use std::{pin::Pin, task::Poll};

use crate::{Entries, Value};

/// Resolve every member of a keyed collection of [`Value`]s.
///
/// `Ready` members are recorded synchronously at construction, `Pending` members are driven
/// concurrently. The returned future settles with an [`Entries`] built in input order once every
/// member has settled, with no members it settles on first poll with an empty mapping.
///
/// The first member that fails completes the whole future with that error, remaining members are
/// dropped without being awaited further, and no partial result is observable.
///
/// # Example
///
/// ```
/// # async fn app() {
/// use propjoin::{Value, futures::resolve_properties};
///
/// let props = [
///     ("id", Value::Ready(1)),
///     ("score", Value::Pending(std::future::ready(Ok::<_, std::io::Error>(2)))),
/// ];
///
/// let result = resolve_properties(props).await.unwrap();
/// assert_eq!(result.get("id"), Some(&1));
/// assert_eq!(result.get("score"), Some(&2));
/// # }
/// # assert!(matches!(
/// #     std::pin::pin!(app())
/// #         .poll(&mut std::task::Context::from_waker(std::task::Waker::noop())),
/// #     std::task::Poll::Ready(())
/// # ));
/// ```
pub fn resolve_properties<I, K, T, F, E>(props: I) -> ResolveProperties<K, T, F>
where
    I: IntoIterator<Item = (K, Value<T, F>)>,
    F: Future<Output = Result<T, E>>,
{
    let mut pending = 0;
    let slots = props
        .into_iter()
        .map(|(key, value)| {
            let slot = match value {
                Value::Ready(value) => Slot::Done(Some(value)),
                Value::Pending(f) => {
                    pending += 1;
                    Slot::Pending(f)
                }
            };
            (Some(key), slot)
        })
        .collect();
    ResolveProperties { slots, pending }
}

/// Future returned by [`resolve_properties`].
#[derive(Debug)]
pub struct ResolveProperties<K, T, F> {
    slots: Box<[(Option<K>, Slot<T, F>)]>,
    pending: usize,
}

#[derive(Debug)]
enum Slot<T, F> {
    Pending(F),
    Done(Option<T>),
}

impl<K, T, F, E> Future for ResolveProperties<K, T, F>
where
    K: PartialEq,
    F: Future<Output = Result<T, E>>,
{
    type Output = Result<Entries<K, T>, E>;

    fn poll(
        self: Pin<&mut Self>,
        cx: &mut std::task::Context<'_>,
    ) -> Poll<Self::Output> {
        // SAFETY: self is pinned
        // no `Drop`, nor manual `Unpin` implementation.
        let me = unsafe { self.get_unchecked_mut() };

        for (_, slot) in me.slots.iter_mut() {
            let Slot::Pending(f) = &mut *slot else {
                continue;
            };
            // SAFETY: slots live in a boxed slice that is never reallocated, and a settled
            // future is only ever replaced in place.
            let f = unsafe { Pin::new_unchecked(f) };
            match f.poll(cx) {
                Poll::Ready(Ok(value)) => {
                    *slot = Slot::Done(Some(value));
                    me.pending -= 1;
                }
                Poll::Ready(Err(err)) => return Poll::Ready(Err(err)),
                Poll::Pending => {}
            }
        }

        if me.pending > 0 {
            return Poll::Pending;
        }

        let entries = me
            .slots
            .iter_mut()
            .map(|(key, slot)| {
                let value = match slot {
                    Slot::Done(value) => value.take(),
                    Slot::Pending(_) => None,
                };
                (
                    key.take().expect("poll after complete"),
                    value.expect("poll after complete"),
                )
            })
            .collect();

        Poll::Ready(Ok(entries))
    }
}
