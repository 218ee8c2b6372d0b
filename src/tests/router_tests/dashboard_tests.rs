use crate::errors::ServerError;
use crate::router::handle;
use crate::state::AppState;
use crate::tests::utils::{body_string, denver_listing, get, loaded_app, FakeApi};
use std::sync::Arc;

#[test]
fn dashboard_lists_every_property() {
    let api = Arc::new(FakeApi::with_properties(denver_listing()));
    let app = loaded_app(&api);

    let resp = handle(get("/"), &app).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Lakeview Plot"));
    assert!(body.contains("Downtown Office"));
    assert!(body.contains("Showing <strong>2</strong> of <strong>2</strong> properties"));
    assert!(body.contains("$250,000"));
}

#[test]
fn type_query_filters_case_insensitively() {
    let api = Arc::new(FakeApi::with_properties(denver_listing()));
    let app = loaded_app(&api);

    let body = body_string(handle(get("/?type=office"), &app).unwrap());

    assert!(body.contains("Downtown Office"));
    assert!(!body.contains("Lakeview Plot"));
    assert!(body.contains("Showing <strong>1</strong> of <strong>2</strong> properties"));
}

#[test]
fn search_query_keeps_list_order() {
    let api = Arc::new(FakeApi::with_properties(denver_listing()));
    let app = loaded_app(&api);

    let body = body_string(handle(get("/?q=denver"), &app).unwrap());

    let plot = body.find("Lakeview Plot").expect("plot card");
    let office = body.find("Downtown Office").expect("office card");
    assert!(plot < office);
}

#[test]
fn conjunction_with_no_match_shows_empty_state() {
    let api = Arc::new(FakeApi::with_properties(denver_listing()));
    let app = loaded_app(&api);

    let body = body_string(handle(get("/?type=plot&q=office"), &app).unwrap());

    assert!(body.contains("No properties found"));
    assert!(body.contains("Showing <strong>0</strong> of <strong>2</strong> properties"));
}

#[test]
fn search_term_is_matched_as_typed() {
    let api = Arc::new(FakeApi::with_properties(denver_listing()));
    let app = loaded_app(&api);

    let body = body_string(handle(get("/?q=lake+"), &app).unwrap());

    assert!(!body.contains("Lakeview Plot"));
    assert!(body.contains("No properties found"));
    assert!(body.contains("Showing <strong>0</strong> of <strong>2</strong> properties"));
}

#[test]
fn type_dropdown_selects_option_regardless_of_case() {
    let api = Arc::new(FakeApi::with_properties(denver_listing()));
    let app = loaded_app(&api);

    let body = body_string(handle(get("/?type=office"), &app).unwrap());

    assert!(body.contains(r#"<option value="Office" selected>"#));
    assert!(!body.contains(r#"<option value="" selected>"#));
}

#[test]
fn filters_do_not_stick_between_requests() {
    let api = Arc::new(FakeApi::with_properties(denver_listing()));
    let app = loaded_app(&api);

    let _ = handle(get("/?type=office"), &app).unwrap();
    let body = body_string(handle(get("/"), &app).unwrap());

    assert!(body.contains("Lakeview Plot"));
    assert!(body.contains("Downtown Office"));
}

#[test]
fn add_flag_opens_the_form() {
    let api = Arc::new(FakeApi::with_properties(denver_listing()));
    let app = loaded_app(&api);

    let closed = body_string(handle(get("/"), &app).unwrap());
    assert!(!closed.contains("Add New Property"));
    assert!(closed.contains("href=\"/?add=1\""));

    let open = body_string(handle(get("/?add=1"), &app).unwrap());
    assert!(open.contains("Add New Property"));
    assert!(open.contains("Hide Form"));
    assert!(open.contains("action=\"/properties\""));
}

#[test]
fn first_request_triggers_the_initial_load() {
    let api = Arc::new(FakeApi::with_properties(denver_listing()));
    let app = AppState::new(Box::new(Arc::clone(&api)));
    assert_eq!(api.list_calls(), 0);

    let body = body_string(handle(get("/"), &app).unwrap());
    assert!(body.contains("Lakeview Plot"));

    let _ = handle(get("/"), &app).unwrap();
    assert_eq!(api.list_calls(), 1, "later requests reuse the loaded list");
}

#[test]
fn health_check_answers_ok() {
    let api = Arc::new(FakeApi::with_properties(vec![]));
    let app = loaded_app(&api);

    let resp = handle(get("/health"), &app).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(body_string(resp), "ok");
}

#[test]
fn unknown_route_is_not_found() {
    let api = Arc::new(FakeApi::with_properties(vec![]));
    let app = loaded_app(&api);

    let res = handle(get("/nope"), &app);
    assert!(matches!(res, Err(ServerError::NotFound)));
}
