//! Local Storage Backend
//!
//! `window.localStorage` behind the repository's key-value trait.

use unlockfit::store::{KeyValueBackend, StoreError, StoreResult};
use wasm_bindgen::JsValue;

/// Browser local storage
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageBackend;

impl LocalStorageBackend {
    fn storage() -> StoreResult<web_sys::Storage> {
        web_sys::window()
            .ok_or_else(|| StoreError::Backend("no window".to_string()))?
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| StoreError::Backend("local storage is disabled".to_string()))
    }
}

fn js_error(err: JsValue) -> StoreError {
    StoreError::Backend(format!("{:?}", err))
}

impl KeyValueBackend for LocalStorageBackend {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        Self::storage()?.get_item(key).map_err(js_error)
    }

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        // Fails when the quota is exceeded
        Self::storage()?.set_item(key, value).map_err(js_error)
    }

    fn remove_item(&self, key: &str) -> StoreResult<()> {
        Self::storage()?.remove_item(key).map_err(js_error)
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use unlockfit::store::{EntryRepository, DRAFT_KEY};
    use unlockfit::tracker::{DraftField, EntryDraft};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_draft_survives_in_local_storage() {
        let repo = EntryRepository::new(LocalStorageBackend);
        let draft = EntryDraft::default().with(DraftField::Name, "Ana");

        repo.save_draft(&draft).unwrap();
        assert!(LocalStorageBackend.get_item(DRAFT_KEY).unwrap().is_some());
        assert_eq!(repo.load_draft().unwrap(), draft);

        repo.clear_draft().unwrap();
        assert_eq!(LocalStorageBackend.get_item(DRAFT_KEY).unwrap(), None);
    }
}
