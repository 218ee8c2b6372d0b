use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, denver_listing, get, loaded_app, property, FakeApi};
use std::sync::Arc;

fn listing_with_map() -> Vec<crate::domain::Property> {
    let mut listing = denver_listing();
    listing[1].lat = Some(39.7392);
    listing[1].lng = Some(-104.9903);
    listing[1].price = 1250000.0;
    listing
}

#[test]
fn detail_shows_map_when_both_coordinates_exist() {
    let api = Arc::new(FakeApi::with_properties(listing_with_map()));
    let app = loaded_app(&api);

    let resp = handle(get("/properties/2"), &app).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Downtown Office"));
    assert!(body.contains("$1,250,000"));
    assert!(body.contains("Location on Map"));
    assert!(body.contains("https://www.google.com/maps?q=39.7392,-104.9903&amp;hl=en&amp;z=14&amp;output=embed"));
}

#[test]
fn detail_without_coordinates_has_no_map() {
    let api = Arc::new(FakeApi::with_properties(listing_with_map()));
    let app = loaded_app(&api);

    let body = body_string(handle(get("/properties/1"), &app).unwrap());
    assert!(body.contains("Lakeview Plot"));
    assert!(!body.contains("Location on Map"));
    assert!(body.contains("Image not available"));
}

#[test]
fn unknown_type_renders_with_fallback_badge() {
    let api = Arc::new(FakeApi::with_properties(vec![property("c1", "Old Keep", "Castle", "Moat")]));
    let app = loaded_app(&api);

    let body = body_string(handle(get("/properties/c1"), &app).unwrap());
    assert!(body.contains("Castle"));
    assert!(body.contains("bg-gray-100 text-gray-800 border-gray-200"));
}

#[test]
fn close_link_returns_to_filtered_dashboard() {
    let api = Arc::new(FakeApi::with_properties(denver_listing()));
    let app = loaded_app(&api);

    let list = body_string(handle(get("/?type=Office"), &app).unwrap());
    assert!(list.contains("href=\"/properties/2?type=Office\""));

    let body = body_string(handle(get("/properties/2?type=Office"), &app).unwrap());
    assert!(body.contains("href=\"/?type=Office\""));
}

#[test]
fn missing_property_is_not_found() {
    let api = Arc::new(FakeApi::with_properties(denver_listing()));
    let app = loaded_app(&api);

    assert!(matches!(handle(get("/properties/99"), &app), Err(ServerError::NotFound)));
    assert!(matches!(handle(get("/properties/"), &app), Err(ServerError::NotFound)));
}
