/// Bulk-edit session: edit every title at once as plain text.
use crate::error::Result;
use crate::persistence::KeyValueStore;
use crate::store::ItemStore;

#[derive(Debug, Clone)]
pub struct BulkEdit {
    original: String,
}

impl BulkEdit {
    /// Snapshot the current titles, one per line.
    pub fn begin<S: KeyValueStore>(store: &ItemStore<S>) -> Self {
        BulkEdit { original: store.export_text() }
    }

    /// Text the editing surface should be pre-populated with.
    pub fn original_text(&self) -> &str {
        &self.original
    }

    /// Exact comparison against the snapshot; whitespace changes count.
    pub fn has_unsaved_changes(&self, current: &str) -> bool {
        current != self.original
    }

    /// Reconcile the store against the edited text. Returns the new item count.
    pub fn save<S: KeyValueStore>(self, store: &mut ItemStore<S>, current: &str) -> Result<usize> {
        store.reconcile_from_text(current)
    }
}
