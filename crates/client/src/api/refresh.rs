//! Session refresh coordination (single-flight)
//!
//! Concurrent 401s collapse into one `POST /auth/refresh-token` call whose
//! settlement every waiter observes. The guard is promise memoization: the
//! first caller installs a shared future, later callers clone the in-flight
//! handle, and the future clears the slot before it settles so a subsequent
//! 401 starts a brand-new refresh.

use std::sync::Arc;

use async_trait::async_trait;
use futures::future::{BoxFuture, FutureExt, Shared};
use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::errors::ApiError;
use crate::http::{HttpTransport, OutboundRequest};

/// Refresh endpoint, called with an empty body; the rotated session cookie
/// arrives via `Set-Cookie`.
pub(crate) const REFRESH_PATH: &str = "/auth/refresh-token";

type SharedRefresh = Shared<BoxFuture<'static, Result<(), ApiError>>>;

/// Seam for the client's refresh dependency.
///
/// Lets tests hand the client a mock coordinator, mirroring how the
/// coordinator itself is instantiated per client rather than as process-wide
/// state.
#[async_trait]
pub trait SessionRefresh: Send + Sync {
    /// Refresh the session, sharing any refresh already in flight.
    async fn refresh(&self) -> Result<(), ApiError>;
}

/// Single-flight guard over the refresh endpoint.
///
/// Invariant: at most one outbound refresh call exists per coordinator at any
/// instant. The check-then-install of the shared handle happens under one
/// lock acquisition and no await occurs while the lock is held.
pub struct RefreshCoordinator {
    transport: HttpTransport,
    in_flight: Arc<Mutex<Option<SharedRefresh>>>,
}

impl RefreshCoordinator {
    /// Create a coordinator using `transport` for the refresh call.
    ///
    /// The transport must share its cookie store with the requests being
    /// replayed, otherwise the rotated session cookie never reaches them.
    #[must_use]
    pub fn new(transport: HttpTransport) -> Self {
        Self { transport, in_flight: Arc::new(Mutex::new(None)) }
    }

    /// Whether a refresh call is currently in flight.
    #[must_use]
    pub fn is_refreshing(&self) -> bool {
        self.in_flight.lock().is_some()
    }

    fn attach(&self) -> SharedRefresh {
        let mut slot = self.in_flight.lock();
        if let Some(existing) = slot.as_ref() {
            debug!("refresh already in flight, sharing its outcome");
            return existing.clone();
        }

        let transport = self.transport.clone();
        let in_flight = Arc::clone(&self.in_flight);
        let fut = async move {
            let result = run_refresh(transport).await;
            // Clear before waiters resume so the next 401 starts fresh.
            in_flight.lock().take();
            result
        }
        .boxed()
        .shared();

        *slot = Some(fut.clone());
        fut
    }
}

#[async_trait]
impl SessionRefresh for RefreshCoordinator {
    async fn refresh(&self) -> Result<(), ApiError> {
        self.attach().await
    }
}

/// Execute the refresh call itself.
///
/// Every failure mode settles as `SessionExpired` so all waiters observe one
/// consistent outcome, whether the refresh token was rejected or the call
/// never reached the server.
async fn run_refresh(transport: HttpTransport) -> Result<(), ApiError> {
    let request = OutboundRequest::post(REFRESH_PATH);

    match transport.execute(&request).await {
        Ok(response) if response.status().is_success() => {
            info!("session refreshed");
            Ok(())
        }
        Ok(response) => {
            warn!(status = %response.status(), "session refresh rejected");
            Err(ApiError::session_expired())
        }
        Err(err) => {
            warn!(error = %err, "session refresh did not reach the server");
            Err(ApiError::session_expired())
        }
    }
}
