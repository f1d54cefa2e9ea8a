//! Async middleware.
//!
//! Wraps an [`Endpoint`] and answers blocked requests itself after the
//! configured delay, without calling the endpoint.

use async_trait::async_trait;

use crate::guard::{ReferrerGuard, RequestInfo, Verdict};

/// Minimal response model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub body: String,
}

impl Response {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Next handler in the pipeline
#[async_trait]
pub trait Endpoint: Send + Sync {
    async fn call(&self, request: &RequestInfo<'_>) -> Response;
}

/// Referrer blocking middleware
pub struct ReferrerBlock<E> {
    guard: ReferrerGuard,
    next: E,
}

impl<E: Endpoint> ReferrerBlock<E> {
    pub fn new(guard: ReferrerGuard, next: E) -> Self {
        Self { guard, next }
    }

    pub fn guard(&self) -> &ReferrerGuard {
        &self.guard
    }

    /// Handle a request: reject blocked referrers, otherwise call the endpoint.
    pub async fn handle(&self, request: &RequestInfo<'_>) -> Response {
        match self.guard.check(request) {
            Verdict::Pass => self.next.call(request).await,
            Verdict::Reject(rejection) => {
                if !rejection.delay.is_zero() {
                    tokio::time::sleep(rejection.delay).await;
                }
                Response::new(rejection.status, rejection.body)
            }
        }
    }
}

#[async_trait]
impl<E: Endpoint> Endpoint for ReferrerBlock<E> {
    async fn call(&self, request: &RequestInfo<'_>) -> Response {
        self.handle(request).await
    }
}
