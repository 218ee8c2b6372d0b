use crate::domain::{PropertyId, ViewFilter};
use maud::{html, Markup};

pub mod add_form;
pub mod badge;
pub mod card;
pub mod filters;
pub mod image;

pub use add_form::{add_property_form, FormVm};
pub use badge::type_badge;
pub use card::property_card;
pub use filters::filter_bar;
pub use image::property_image;

pub fn button_link(label: &str, href: &str) -> Markup {
    html! {
        a href=(href) class="inline-flex items-center px-5 py-2.5 rounded-lg bg-indigo-600 text-white font-semibold shadow hover:bg-indigo-700" {
            (label)
        }
    }
}

/// `/` with the active filters, optionally with the add form open.
pub fn dashboard_href(filter: &ViewFilter, show_form: bool) -> String {
    let query = filter_query(filter, show_form);
    if query.is_empty() {
        "/".to_string()
    } else {
        format!("/?{query}")
    }
}

/// Detail link that remembers the filters so "close" can return to them.
pub fn property_href(id: &PropertyId, filter: &ViewFilter) -> String {
    let segment: String = url::form_urlencoded::byte_serialize(id.as_str().as_bytes()).collect();
    let query = filter_query(filter, false);
    if query.is_empty() {
        format!("/properties/{segment}")
    } else {
        format!("/properties/{segment}?{query}")
    }
}

fn filter_query(filter: &ViewFilter, show_form: bool) -> String {
    let mut query = url::form_urlencoded::Serializer::new(String::new());
    if !filter.search_term.is_empty() {
        query.append_pair("q", &filter.search_term);
    }
    if !filter.type_filter.is_empty() {
        query.append_pair("type", &filter.type_filter);
    }
    if show_form {
        query.append_pair("add", "1");
    }
    query.finish()
}
