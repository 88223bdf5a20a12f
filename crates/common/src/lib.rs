//! Testboard Common Library
//!
//! Dashboard session state, the incremental loader and the filter engine
//! shared by the testboard binaries.
//!
//! ```text
//!   PollTask ──tick──▶ Dashboard::poll ──GET information──▶ backend
//!                          │
//!                          ├─▶ DashboardState::insert  (most recent first)
//!                          ├─▶ Renderer::record_added
//!                          └─▶ FilterEngine::apply ──▶ Renderer::refreshed
//! ```

pub mod clock;
pub mod endpoint;
pub mod error;
pub mod fetch;
pub mod filter;
pub mod loader;
pub mod record;
pub mod render;
pub mod schedule;
pub mod state;
pub mod view;

// Re-export commonly used types
pub use clock::{Clock, ManualClock, TokioClock};
pub use endpoint::{CleanupAction, DashboardEndpoint};
pub use error::{DashboardError, Result};
pub use fetch::{Fetcher, HttpFetcher};
pub use filter::FilterEngine;
pub use loader::{Dashboard, PollOutcome};
pub use record::Record;
pub use render::{NullRenderer, Renderer};
pub use schedule::{PollTask, PollTaskHandle, DEFAULT_POLL_INTERVAL, MIN_POLL_INTERVAL};
pub use state::{DashboardState, Entry, SharedState};
pub use view::{RecordView, DEFAULT_VIDEO_ROOT};

/// Testboard version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
