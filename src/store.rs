// src/store.rs

use crate::api::{ApiError, PropertyApi};
use crate::domain::{derive_view, DraftError, NewProperty, Property, PropertyDraft, ViewFilter};
use std::error::Error;
use std::fmt;
use tracing::{error, info, warn};

/// Owns the fetched listing and the view derived from it.
///
/// The full list only changes through a successful load, and the view is
/// recomputed from `(properties, filter)` whenever either side changes, so the
/// two are never out of step.
#[derive(Debug, Default)]
pub struct PropertyStore {
    properties: Vec<Property>,
    filter: ViewFilter,
    view: Vec<Property>,
    load_error: Option<ApiError>,
    loaded: bool,
}

#[derive(Debug)]
pub enum CreateError {
    Invalid(DraftError),
    Api(ApiError),
}

impl fmt::Display for CreateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreateError::Invalid(e) => write!(f, "Invalid property: {e}"),
            CreateError::Api(e) => write!(f, "Failed to add property: {e}"),
        }
    }
}

impl Error for CreateError {}

impl PropertyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch and apply in one go. The server uses `apply_load` instead so the
    /// network call happens outside its lock.
    pub fn load(&mut self, api: &dyn PropertyApi) -> Result<usize, ApiError> {
        self.apply_load(api.list_properties())
    }

    /// Success swaps in the new list and its view and clears the error.
    /// Failure records the error and keeps whatever was there before.
    pub fn apply_load(&mut self, result: Result<Vec<Property>, ApiError>) -> Result<usize, ApiError> {
        match result {
            Ok(properties) => {
                let view = derive_view(&properties, &self.filter);
                self.properties = properties;
                self.view = view;
                self.load_error = None;
                self.loaded = true;
                info!(count = self.properties.len(), "property list loaded");
                Ok(self.properties.len())
            }
            Err(e) => {
                error!(error = %e, "failed to fetch properties");
                self.load_error = Some(e.clone());
                Err(e)
            }
        }
    }

    pub fn set_type_filter(&mut self, property_type: &str) {
        self.filter.type_filter = property_type.to_string();
        self.recompute();
    }

    pub fn set_search_term(&mut self, term: &str) {
        self.filter.search_term = term.to_string();
        self.recompute();
    }

    /// Sets both inputs with a single recomputation.
    pub fn set_filter(&mut self, filter: ViewFilter) {
        self.filter = filter;
        self.recompute();
    }

    pub fn filter(&self) -> &ViewFilter {
        &self.filter
    }

    pub fn filtered_view(&self) -> &[Property] {
        &self.view
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn load_error(&self) -> Option<&ApiError> {
        self.load_error.as_ref()
    }

    /// No load has completed yet, successfully or not.
    pub fn is_pristine(&self) -> bool {
        !self.loaded && self.load_error.is_none()
    }

    pub fn find(&self, id: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.id.as_str() == id)
    }

    /// Validates and submits a draft. Validation happens before any network
    /// traffic. The list is left alone; callers reload.
    ///
    /// Takes no store borrow so the server can call it without holding the lock.
    pub fn create(api: &dyn PropertyApi, draft: &PropertyDraft) -> Result<NewProperty, CreateError> {
        let property = draft.normalize().map_err(|e| {
            warn!(error = %e, "rejected property draft");
            CreateError::Invalid(e)
        })?;

        api.create_property(&property).map_err(|e| {
            error!(error = %e, name = %property.name, "failed to create property");
            CreateError::Api(e)
        })?;

        info!(name = %property.name, kind = %property.property_type, "property created");
        Ok(property)
    }

    fn recompute(&mut self) {
        self.view = derive_view(&self.properties, &self.filter);
    }
}
