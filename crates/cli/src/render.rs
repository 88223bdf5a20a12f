//! Terminal renderer for watch mode

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::debug;

use testboard_common::{DashboardState, RecordView, Renderer, Result};

use crate::output::{print_list, OutputFormat, RecordRow};

/// Redraws the visible list whenever records arrive or a redraw is requested
pub struct ConsoleRenderer {
    format: OutputFormat,
    dirty: AtomicBool,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            // first refresh always draws
            dirty: AtomicBool::new(true),
        }
    }

    /// Force the next refresh to draw, e.g. after the query changed
    pub fn request_redraw(&self) {
        self.dirty.store(true, Ordering::SeqCst);
    }
}

impl Renderer for ConsoleRenderer {
    fn record_added(&self, view: &RecordView, total: usize) -> Result<()> {
        debug!("New test {} ({} total)", view.test_name, total);
        self.dirty.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn refreshed(&self, state: &DashboardState) {
        if !self.dirty.swap(false, Ordering::SeqCst) {
            return;
        }

        let rows = visible_rows(state);
        if self.format != OutputFormat::Json {
            println!("Tests {} (showing {})", state.len(), rows.len());
        }
        print_list(&rows, self.format);
    }
}

/// Visible entries, keeping each entry's index in the full list
pub fn visible_rows(state: &DashboardState) -> Vec<RecordRow> {
    state
        .entries()
        .enumerate()
        .filter(|(_, entry)| entry.visible)
        .map(|(index, entry)| RecordRow {
            index,
            view: entry.view.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use testboard_common::{FilterEngine, Record};

    #[test]
    fn test_visible_rows_keep_full_index() {
        let mut state = DashboardState::default();
        for (time, browser) in [(1, "chrome"), (2, "firefox"), (3, "chrome")] {
            state.insert(Record {
                added_to_dashboard_time: time,
                browser: browser.into(),
                ..Default::default()
            });
        }
        FilterEngine::with_query("chrome").apply(&mut state);

        let indices: Vec<usize> = visible_rows(&state).iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![0, 2]);
    }

    #[test]
    fn test_redraw_only_when_dirty() {
        let renderer = ConsoleRenderer::new(OutputFormat::Plain);
        let state = DashboardState::default();

        renderer.refreshed(&state);
        assert!(!renderer.dirty.load(Ordering::SeqCst));

        renderer.request_redraw();
        assert!(renderer.dirty.load(Ordering::SeqCst));
        renderer.refreshed(&state);
        assert!(!renderer.dirty.load(Ordering::SeqCst));
    }
}
