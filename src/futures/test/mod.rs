use std::{
    pin::Pin,
    task::{Context, Poll, Waker},
};

mod test_from_entries;

fn poll_once<F: Future>(f: Pin<&mut F>) -> Poll<F::Output> {
    f.poll(&mut Context::from_waker(Waker::noop()))
}

/// Future that stays pending for `polls` polls before settling.
fn yield_then<T>(polls: usize, output: T) -> YieldThen<T> {
    YieldThen {
        polls,
        output: Some(output),
    }
}

struct YieldThen<T> {
    polls: usize,
    output: Option<T>,
}

impl<T: Unpin> Future for YieldThen<T> {
    type Output = T;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let me = self.get_mut();
        if me.polls == 0 {
            Poll::Ready(me.output.take().expect("poll after complete"))
        } else {
            me.polls -= 1;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }
}
