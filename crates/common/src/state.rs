//! In-memory dashboard state
//!
//! The ordered record list is the single source of truth. Renderers project
//! it and the filter engine flips visibility on it; nothing reads back from
//! rendered output.

use std::collections::{HashSet, VecDeque};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::record::{Record, RecordKey};
use crate::view::{RecordView, DEFAULT_VIDEO_ROOT};

/// State shared between the poll task, the filter and the renderer
pub type SharedState = Arc<RwLock<DashboardState>>;

/// One stored record with its view model and filter visibility
#[derive(Debug, Clone)]
pub struct Entry {
    pub record: Arc<Record>,
    pub view: RecordView,
    pub visible: bool,
}

/// Records of the current session, most recent first
#[derive(Debug, Clone)]
pub struct DashboardState {
    entries: VecDeque<Entry>,
    keys: HashSet<RecordKey>,
    watermark: i64,
    video_root: String,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new(DEFAULT_VIDEO_ROOT)
    }
}

impl DashboardState {
    pub fn new(video_root: impl Into<String>) -> Self {
        Self {
            entries: VecDeque::new(),
            keys: HashSet::new(),
            watermark: 0,
            video_root: video_root.into(),
        }
    }

    pub fn shared(self) -> SharedState {
        Arc::new(RwLock::new(self))
    }

    /// Highest `addedToDashboardTime` stored so far, `0` when empty
    pub fn watermark(&self) -> i64 {
        self.watermark
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn visible_count(&self) -> usize {
        self.entries.iter().filter(|e| e.visible).count()
    }

    /// Store a record as the new topmost entry.
    ///
    /// Returns `None` if a record with the same identity is already stored.
    /// Records without a session id are always stored.
    pub fn insert(&mut self, record: Record) -> Option<&Entry> {
        if let Some(key) = record.key() {
            if !self.keys.insert(key) {
                return None;
            }
        }

        self.watermark = self.watermark.max(record.added_to_dashboard_time);
        let view = RecordView::new(&record, &self.video_root);
        self.entries.push_front(Entry {
            record: Arc::new(record),
            view,
            visible: true,
        });
        self.entries.front()
    }

    /// All entries, most recent first
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    /// Entries that pass the current filter, most recent first
    pub fn visible(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter().filter(|e| e.visible)
    }

    pub(crate) fn entries_mut(&mut self) -> impl Iterator<Item = &mut Entry> {
        self.entries.iter_mut()
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    pub fn find_by_session(&self, session_id: &str) -> Option<&Entry> {
        self.entries
            .iter()
            .find(|e| e.record.selenium_session_id == session_id)
    }

    /// Drop every record, as a page reload does
    pub fn clear(&mut self) {
        self.entries.clear();
        self.keys.clear();
        self.watermark = 0;
    }
}
