//! Global Application State
//!
//! Reactive state management using Leptos signals, backed by the entry repository.

use leptos::*;
use unlockfit::chart::EntryOrder;
use unlockfit::store::{EntryRepository, SubmitError};
use unlockfit::tracker::{Entry, EntryDraft};

use super::storage::LocalStorageBackend;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// The one reader and writer of persisted entries and the form draft
    pub repository: EntryRepository<LocalStorageBackend>,
    /// Entries as last loaded from storage, in submission order
    pub entries: RwSignal<Vec<Entry>>,
    /// Display order for the table and chart
    pub order: RwSignal<EntryOrder>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        repository: EntryRepository::new(LocalStorageBackend),
        entries: create_rw_signal(Vec::new()),
        order: create_rw_signal(EntryOrder::default()),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    state.reload();
    provide_context(state);
}

impl GlobalState {
    /// Re-read the entry list from storage
    ///
    /// An unreadable payload leaves the current list alone and shows an error.
    pub fn reload(&self) {
        match self.repository.load() {
            Ok(entries) => self.entries.set(entries),
            Err(e) => {
                web_sys::console::error_1(&format!("Failed to load entries: {}", e).into());
                self.show_error(&load_error_message(&e.to_string()));
            }
        }
    }

    /// Validate and store a draft, then refresh the entry list
    pub fn submit(&self, draft: &EntryDraft) -> Result<Entry, SubmitError> {
        let entry = self.repository.submit(draft)?;
        self.entries.update(|entries| entries.push(entry.clone()));
        Ok(entry)
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        }).forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        }).forget();
    }
}

fn load_error_message(detail: &str) -> String {
    format!("Saved entries could not be read ({})", detail)
}

/// Toast text for a recorded entry
pub fn submitted_message(entry: &Entry) -> String {
    format!("Saved {} ({})", entry.name, entry.category)
}
