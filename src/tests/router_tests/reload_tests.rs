use crate::api::ApiError;
use crate::router::handle;
use crate::state::AppState;
use crate::tests::utils::{body_string, denver_listing, get, loaded_app, post_form, property, FakeApi};
use std::sync::Arc;

#[test]
fn failed_first_load_shows_blocking_retry_view() {
    let api = Arc::new(FakeApi::with_properties(vec![]));
    api.fail_list(ApiError::Network("connection refused".into()));
    let app = AppState::new(Box::new(Arc::clone(&api)));

    let resp = handle(get("/"), &app).unwrap();
    assert_eq!(resp.status(), 503);

    let body = body_string(resp);
    assert!(body.contains("Failed to fetch properties"));
    assert!(body.contains("Try Again"));
    assert!(body.contains("action=\"/reload\""));
}

#[test]
fn error_view_persists_until_explicit_retry() {
    let api = Arc::new(FakeApi::with_properties(vec![]));
    api.fail_list(ApiError::Status(500, "down".into()));
    let app = AppState::new(Box::new(Arc::clone(&api)));
    let _ = handle(get("/"), &app).unwrap();

    api.set_properties(denver_listing());
    let resp = handle(get("/"), &app).unwrap();
    assert_eq!(resp.status(), 503, "no automatic retry");
    assert_eq!(api.list_calls(), 1);

    let resp = handle(post_form("/reload", ""), &app).unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(resp.headers().get("Location").unwrap().to_str().unwrap(), "/");

    let body = body_string(handle(get("/"), &app).unwrap());
    assert!(body.contains("Lakeview Plot"));
}

#[test]
fn failed_reload_hides_stale_data_but_keeps_it_for_recovery() {
    let api = Arc::new(FakeApi::with_properties(denver_listing()));
    let app = loaded_app(&api);

    api.fail_list(ApiError::Decode("expected value at line 1".into()));
    let _ = handle(post_form("/reload", ""), &app).unwrap();

    let resp = handle(get("/"), &app).unwrap();
    assert_eq!(resp.status(), 503);
    assert!(!body_string(resp).contains("Lakeview Plot"));

    {
        let store = app.store().unwrap();
        assert_eq!(store.properties().len(), 2);
        assert!(store.load_error().is_some());
    }

    api.set_properties(vec![property("7", "Mesa Shed", "Shed", "Golden")]);
    let _ = handle(post_form("/reload", ""), &app).unwrap();

    let body = body_string(handle(get("/"), &app).unwrap());
    assert!(body.contains("Mesa Shed"));
    assert!(!body.contains("Lakeview Plot"));
}

#[test]
fn detail_is_blocked_while_load_error_is_active() {
    let api = Arc::new(FakeApi::with_properties(denver_listing()));
    let app = loaded_app(&api);

    api.fail_list(ApiError::Network("connection reset".into()));
    let resp = handle(post_form("/reload", ""), &app).unwrap();
    assert_eq!(resp.status(), 303);

    let resp = handle(get("/properties/1"), &app).unwrap();
    assert_eq!(resp.status(), 503);
    let body = body_string(resp);
    assert!(body.contains("Failed to fetch properties"));
    assert!(!body.contains("Lakeview Plot"));

    api.set_properties(denver_listing());
    let _ = handle(post_form("/reload", ""), &app).unwrap();
    let resp = handle(get("/properties/1"), &app).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("Lakeview Plot"));
}
