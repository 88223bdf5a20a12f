//! Renderer seam
//!
//! The loader hands each new record to a [`Renderer`] and tells it when the
//! visible set has changed. Renderers only read; they never feed data back.

use crate::error::Result;
use crate::state::DashboardState;
use crate::view::RecordView;

pub trait Renderer: Send + Sync {
    /// A record became the topmost entry. `total` is the new record count.
    fn record_added(&self, view: &RecordView, total: usize) -> Result<()>;

    /// Visibility was recomputed after a poll or a query change
    fn refreshed(&self, state: &DashboardState);
}

/// Renderer that draws nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn record_added(&self, _view: &RecordView, _total: usize) -> Result<()> {
        Ok(())
    }

    fn refreshed(&self, _state: &DashboardState) {}
}
