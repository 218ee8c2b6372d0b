use crate::api::{ApiError, PropertyApi};
use crate::domain::{NewProperty, Property, PropertyId};
use crate::state::AppState;
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// In-memory stand-in for the remote property API.
///
/// A successful create appends the record to the served list, the way the
/// real service makes it visible on the next `GET /properties`.
pub struct FakeApi {
    list: Mutex<Result<Vec<Property>, ApiError>>,
    create_failure: Mutex<Option<ApiError>>,
    created: Mutex<Vec<NewProperty>>,
    list_calls: AtomicUsize,
}

impl FakeApi {
    pub fn with_properties(properties: Vec<Property>) -> Self {
        Self {
            list: Mutex::new(Ok(properties)),
            create_failure: Mutex::new(None),
            created: Mutex::new(Vec::new()),
            list_calls: AtomicUsize::new(0),
        }
    }

    pub fn set_properties(&self, properties: Vec<Property>) {
        *self.list.lock().unwrap() = Ok(properties);
    }

    pub fn fail_list(&self, err: ApiError) {
        *self.list.lock().unwrap() = Err(err);
    }

    pub fn fail_create(&self, err: ApiError) {
        *self.create_failure.lock().unwrap() = Some(err);
    }

    pub fn created(&self) -> Vec<NewProperty> {
        self.created.lock().unwrap().clone()
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }
}

impl PropertyApi for FakeApi {
    fn list_properties(&self) -> Result<Vec<Property>, ApiError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.list.lock().unwrap().clone()
    }

    fn create_property(&self, new: &NewProperty) -> Result<(), ApiError> {
        if let Some(err) = self.create_failure.lock().unwrap().clone() {
            return Err(err);
        }

        self.created.lock().unwrap().push(new.clone());

        if let Ok(list) = self.list.lock().unwrap().as_mut() {
            let id = format!("new-{}", list.len() + 1);
            list.push(Property {
                id: PropertyId::new(id),
                name: new.name.clone(),
                property_type: new.property_type.clone(),
                price: new.price.unwrap_or_default(),
                location: new.location.clone(),
                description: new.description.clone(),
                image: new.image.clone(),
                lat: new.lat,
                lng: new.lng,
            });
        }
        Ok(())
    }
}

impl PropertyApi for Arc<FakeApi> {
    fn list_properties(&self) -> Result<Vec<Property>, ApiError> {
        self.as_ref().list_properties()
    }

    fn create_property(&self, new: &NewProperty) -> Result<(), ApiError> {
        self.as_ref().create_property(new)
    }
}

pub fn property(id: &str, name: &str, kind: &str, location: &str) -> Property {
    Property {
        id: PropertyId::new(id),
        name: name.to_string(),
        property_type: kind.to_string(),
        price: 250000.0,
        location: location.to_string(),
        description: format!("{name} in {location}"),
        image: String::new(),
        lat: None,
        lng: None,
    }
}

/// The two-listing Denver fixture used throughout the router tests.
pub fn denver_listing() -> Vec<Property> {
    vec![
        property("1", "Lakeview Plot", "Plot", "Denver"),
        property("2", "Downtown Office", "Office", "Denver"),
    ]
}

/// App wired to a shared fake, already loaded once.
pub fn loaded_app(api: &Arc<FakeApi>) -> AppState {
    let app = AppState::new(Box::new(Arc::clone(api)));
    app.reload()
        .expect("store lock")
        .expect("initial load should succeed");
    app
}

pub fn get(uri: &str) -> Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_form(uri: &str, form: &str) -> Request {
    http::Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(form.as_bytes().to_vec()))
        .unwrap()
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}
