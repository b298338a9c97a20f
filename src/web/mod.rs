//! HTTP front end over the shared tracker.
//!
//! Every handler locks the tracker for its whole load, mutate and save cycle,
//! so the server never interleaves two writes.

mod error;
pub mod handlers;
mod routes;

use std::sync::{Arc, Mutex, MutexGuard};

use crate::core::errors::TrackerError;
use crate::core::Tracker;

pub use error::{ApiError, ServerError};
pub use routes::router;

#[derive(Clone)]
pub struct AppState {
    pub tracker: Arc<Mutex<Tracker>>,
}

impl AppState {
    pub fn new(tracker: Tracker) -> Self {
        Self {
            tracker: Arc::new(Mutex::new(tracker)),
        }
    }

    pub(crate) fn tracker(&self) -> Result<MutexGuard<'_, Tracker>, ApiError> {
        self.tracker
            .lock()
            .map_err(|_| ApiError::from(TrackerError::StorageError("tracker lock poisoned".into())))
    }
}

pub async fn run_server(tracker: Tracker) -> Result<(), ServerError> {
    tracker.ensure_default()?;
    let addr = tracker.config().web.bind_address();
    let app = router(AppState::new(tracker));

    let listener = tokio::net::TcpListener::bind(addr.as_str()).await?;
    tracing::info!(%addr, "server listening");
    println!("Server listening on http://{addr}");

    axum::serve(listener, app).await?;
    Ok(())
}
