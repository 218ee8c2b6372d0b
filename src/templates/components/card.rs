use crate::domain::format::format_price;
use crate::domain::{Property, ViewFilter};
use crate::templates::components::{property_href, property_image, type_badge};
use maud::{html, Markup};

pub fn property_card(property: &Property, filter: &ViewFilter) -> Markup {
    html! {
        article class="bg-white rounded-2xl shadow-md overflow-hidden border border-gray-100 hover:shadow-xl transition-shadow" {
            div class="relative" {
                (property_image(&property.image, &property.name, "h-48"))
                div class="absolute top-4 left-4" {
                    (type_badge(&property.property_type))
                }
            }
            div class="p-6" {
                h2 class="text-xl font-bold text-gray-900 mb-2" { (property.name) }
                p class="text-sm text-gray-600 mb-3" { (property.location) }
                p class="text-gray-700 text-sm mb-4 line-clamp-2" { (property.description) }
                div class="flex items-center justify-between pt-4 border-t border-gray-100" {
                    div {
                        span class="text-xs text-gray-500 uppercase tracking-wide" { "Price" }
                        p class="text-2xl font-bold text-indigo-600" { (format_price(property.price)) }
                    }
                    a href=(property_href(&property.id, filter))
                        class="px-4 py-2 rounded-lg bg-indigo-600 text-white text-sm font-semibold hover:bg-indigo-700"
                    {
                        "View Details"
                    }
                }
            }
        }
    }
}
