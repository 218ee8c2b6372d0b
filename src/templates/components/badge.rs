use crate::domain::property_type::badge_class_for;
use maud::{html, Markup};

pub fn type_badge(label: &str) -> Markup {
    html! {
        span class={ "px-3 py-1.5 text-xs font-bold rounded-full border " (badge_class_for(label)) } {
            (label)
        }
    }
}
