//! Future returned by the async builder operations

use crate::error::{JwtError, JwtResult};
use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};
use tokio::sync::oneshot;

/// Pending result of a spawned token operation
#[must_use = "futures do nothing unless awaited"]
pub struct AsyncJwtResult<T> {
    receiver: oneshot::Receiver<JwtResult<T>>,
}

impl<T> AsyncJwtResult<T> {
    pub(crate) fn new(receiver: oneshot::Receiver<JwtResult<T>>) -> Self {
        Self { receiver }
    }

    /// Already-resolved result, no task spawned
    pub(crate) fn ready(result: JwtResult<T>) -> Self {
        let (tx, rx) = oneshot::channel();
        let _ = tx.send(result);
        Self::new(rx)
    }
}

impl<T> Future for AsyncJwtResult<T> {
    type Output = JwtResult<T>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.receiver).poll(cx) {
            Poll::Ready(Ok(result)) => Poll::Ready(result),
            Poll::Ready(Err(_)) => Poll::Ready(Err(JwtError::internal("Channel closed"))),
            Poll::Pending => Poll::Pending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ready_resolves_immediately() {
        let result = AsyncJwtResult::ready(Ok(7)).await;
        assert_eq!(result, Ok(7));
    }

    #[tokio::test]
    async fn test_dropped_sender_is_internal_error() {
        let (tx, rx) = oneshot::channel::<JwtResult<u8>>();
        drop(tx);
        let result = AsyncJwtResult::new(rx).await;
        assert!(matches!(result, Err(JwtError::Internal(_))));
    }
}
