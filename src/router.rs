use crate::domain::{PropertyDraft, ViewFilter};
use crate::errors::ServerError;
use crate::responses::{html_response, html_response_with_status, see_other, text_response, ResultResp};
use crate::state::AppState;
use crate::store::CreateError;
use crate::templates::components::{dashboard_href, FormVm};
use crate::templates::pages::{dashboard_page, detail_page, load_error_page, DashboardVm, Notice};
use astra::Request;
use std::collections::HashMap;
use std::io::Read;
use tracing::debug;

const MAX_FORM_BYTES: u64 = 64 * 1024;

pub fn handle(mut req: Request, app: &AppState) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    let query = parse_query(&req);

    debug!(%method, %path, "request");

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => dashboard(app, &query),
        ("GET", "/health") => text_response("ok"),
        ("POST", "/reload") => reload(app),
        ("POST", "/properties") => {
            let body = read_form_body(&mut req)?;
            create_property(app, &body)
        }
        ("GET", p) if p.starts_with("/properties/") => {
            property_detail(app, &p["/properties/".len()..], &query)
        }
        _ => Err(ServerError::NotFound),
    }
}

fn dashboard(app: &AppState, query: &HashMap<String, String>) -> ResultResp {
    app.ensure_loaded()?;

    let filter = filter_from_query(query);
    let form = flag(query, "add").then(FormVm::default);
    let notice = flag(query, "added").then_some(Notice::Added);

    render_dashboard(app, filter, form, notice, 200)
}

fn reload(app: &AppState) -> ResultResp {
    // A failure is recorded in the store and shown by the dashboard.
    let _ = app.reload()?;
    see_other("/")
}

fn create_property(app: &AppState, body: &str) -> ResultResp {
    let draft = PropertyDraft::from_form_body(body);

    match app.create(&draft) {
        Ok(_) => {
            let _ = app.reload()?;
            see_other("/?added=1")
        }
        Err(CreateError::Invalid(e)) => {
            let form = FormVm {
                draft,
                error: Some(format!("Please check the form: {e}")),
            };
            render_dashboard(app, ViewFilter::default(), Some(form), None, 400)
        }
        Err(err @ CreateError::Api(_)) => {
            let form = FormVm {
                draft,
                error: Some(err.to_string()),
            };
            render_dashboard(app, ViewFilter::default(), Some(form), None, 502)
        }
    }
}

fn property_detail(app: &AppState, raw_id: &str, query: &HashMap<String, String>) -> ResultResp {
    app.ensure_loaded()?;

    let id = decode_segment(raw_id).ok_or(ServerError::NotFound)?;
    let back = dashboard_href(&filter_from_query(query), false);

    let store = app.store()?;
    if let Some(err) = store.load_error() {
        return html_response_with_status(503, load_error_page(&err.to_string()));
    }

    let property = store.find(&id).ok_or(ServerError::NotFound)?;
    html_response(detail_page(property, &back))
}

fn render_dashboard(
    app: &AppState,
    filter: ViewFilter,
    form: Option<FormVm>,
    notice: Option<Notice>,
    status: u16,
) -> ResultResp {
    let mut store = app.store()?;

    if let Some(err) = store.load_error() {
        return html_response_with_status(503, load_error_page(&err.to_string()));
    }

    store.set_filter(filter);

    let vm = DashboardVm {
        properties: store.filtered_view(),
        total: store.properties().len(),
        filter: store.filter(),
        form,
        notice,
    };
    html_response_with_status(status, dashboard_page(&vm))
}

fn filter_from_query(query: &HashMap<String, String>) -> ViewFilter {
    ViewFilter::new(
        query.get("type").map(String::as_str).unwrap_or_default(),
        query.get("q").map(String::as_str).unwrap_or_default(),
    )
}

fn flag(query: &HashMap<String, String>, key: &str) -> bool {
    query.get(key).map(|v| v == "1").unwrap_or(false)
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| {
            url::form_urlencoded::parse(q.as_bytes())
                .into_owned()
                .collect()
        })
        .unwrap_or_default()
}

fn read_form_body(req: &mut Request) -> Result<String, ServerError> {
    let mut body = String::new();
    req.body_mut()
        .reader()
        .take(MAX_FORM_BYTES)
        .read_to_string(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("Unreadable form body: {e}")))?;
    Ok(body)
}

/// Undo the encoding applied by `property_href`.
fn decode_segment(raw: &str) -> Option<String> {
    url::form_urlencoded::parse(raw.as_bytes())
        .next()
        .map(|(id, _)| id.into_owned())
        .filter(|id| !id.is_empty())
}
