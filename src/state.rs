use crate::api::{ApiError, PropertyApi};
use crate::domain::{NewProperty, PropertyDraft};
use crate::errors::ServerError;
use crate::store::{CreateError, PropertyStore};
use std::sync::{Mutex, MutexGuard};

/// Everything a request handler needs: the API client and the shared store.
pub struct AppState {
    api: Box<dyn PropertyApi>,
    store: Mutex<PropertyStore>,
}

impl AppState {
    pub fn new(api: Box<dyn PropertyApi>) -> Self {
        Self {
            api,
            store: Mutex::new(PropertyStore::new()),
        }
    }

    /// Locks the store. The guard must not be held across API calls.
    pub fn store(&self) -> Result<MutexGuard<'_, PropertyStore>, ServerError> {
        self.store.lock().map_err(|_| ServerError::InternalError)
    }

    /// Fetches outside the lock and applies the outcome; the last response
    /// applied wins when loads overlap.
    pub fn reload(&self) -> Result<Result<usize, ApiError>, ServerError> {
        let result = self.api.list_properties();
        Ok(self.store()?.apply_load(result))
    }

    /// First request after startup triggers the initial load if nothing has run yet.
    pub fn ensure_loaded(&self) -> Result<(), ServerError> {
        let pristine = self.store()?.is_pristine();
        if pristine {
            let _ = self.reload()?;
        }
        Ok(())
    }

    /// Runs outside the store lock; the caller reloads on success.
    pub fn create(&self, draft: &PropertyDraft) -> Result<NewProperty, CreateError> {
        PropertyStore::create(self.api.as_ref(), draft)
    }
}
