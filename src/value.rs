use std::{pin::Pin, task::Poll};

/// Represent either an eager value or a pending computation.
///
/// A `Ready` member already settled and can be read synchronously, a `Pending` member settles or
/// fails once its future completes. Collections of [`Value`]s are resolved with
/// [`resolve_properties`][crate::futures::resolve_properties].
///
/// Awaiting a [`Value`] directly is also supported, a `Ready` member settles on first poll.
///
/// # Example
///
/// ```
/// # async fn app() {
/// use propjoin::Value;
///
/// let values = [
///     Value::Ready(1),
///     Value::Pending(std::future::ready(Ok::<_, std::io::Error>(2))),
/// ];
///
/// let mut sum = 0;
/// for value in values {
///     sum += value.await.unwrap();
/// }
/// assert_eq!(sum, 3);
/// # }
/// # assert!(matches!(
/// #     std::pin::pin!(app())
/// #         .poll(&mut std::task::Context::from_waker(std::task::Waker::noop())),
/// #     std::task::Poll::Ready(())
/// # ));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Value<T, F> {
    /// An already settled value.
    Ready(T),
    /// A computation that settles later.
    Pending(F),
}

impl<T, F> Value<T, F> {
    /// Returns `true` if the value already settled.
    #[inline]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// Returns `true` if the value is a pending computation.
    #[inline]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending(_))
    }

    /// Returns the settled value, consuming self.
    #[inline]
    pub fn ready(self) -> Option<T> {
        match self {
            Self::Ready(value) => Some(value),
            Self::Pending(_) => None,
        }
    }

    /// Returns the pending computation, consuming self.
    #[inline]
    pub fn pending(self) -> Option<F> {
        match self {
            Self::Ready(_) => None,
            Self::Pending(f) => Some(f),
        }
    }

    /// Map the settled value, leaving a pending computation untouched.
    #[inline]
    pub fn map<M, U>(self, map: M) -> Value<U, F>
    where
        M: FnOnce(T) -> U,
    {
        match self {
            Self::Ready(value) => Value::Ready(map(value)),
            Self::Pending(f) => Value::Pending(f),
        }
    }
}

// ===== IntoFuture =====

impl<T, F, E> IntoFuture for Value<T, F>
where
    F: Future<Output = Result<T, E>>,
{
    type Output = Result<T, E>;

    type IntoFuture = ValueFuture<T, F>;

    #[inline]
    fn into_future(self) -> Self::IntoFuture {
        ValueFuture {
            repr: match self {
                Self::Ready(value) => Repr::Ready(Some(value)),
                Self::Pending(f) => Repr::Pending(f),
            },
        }
    }
}

/// Future returned by awaiting a [`Value`].
#[derive(Debug)]
pub struct ValueFuture<T, F> {
    repr: Repr<T, F>,
}

#[derive(Debug)]
enum Repr<T, F> {
    Ready(Option<T>),
    Pending(F),
}

impl<T, F, E> Future for ValueFuture<T, F>
where
    F: Future<Output = Result<T, E>>,
{
    type Output = Result<T, E>;

    #[inline]
    fn poll(
        self: Pin<&mut Self>,
        cx: &mut std::task::Context<'_>,
    ) -> Poll<Self::Output> {
        // SAFETY: self is pinned
        // no `Drop`, nor manual `Unpin` implementation.
        match unsafe { &mut self.get_unchecked_mut().repr } {
            Repr::Ready(value) => Poll::Ready(Ok(value.take().expect("poll after complete"))),
            // SAFETY: self is pinned
            // no `Drop`, nor manual `Unpin` implementation.
            Repr::Pending(f) => unsafe { Pin::new_unchecked(f) }.poll(cx),
        }
    }
}

// ===== Test =====
