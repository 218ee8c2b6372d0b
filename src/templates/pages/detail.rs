use crate::domain::format::{format_price, map_embed_url};
use crate::domain::Property;
use crate::templates::components::{property_image, type_badge};
use crate::templates::desktop_layout;
use maud::{html, Markup};

/// One property in full. `back_href` returns to the dashboard as it was.
pub fn detail_page(property: &Property, back_href: &str) -> Markup {
    desktop_layout(
        &property.name,
        html! {
            main class="max-w-4xl mx-auto px-6 py-8" {
                div class="relative bg-white rounded-2xl shadow-xl overflow-hidden" {
                    a href=(back_href) aria-label="Close"
                        class="absolute top-4 right-4 z-10 w-10 h-10 flex items-center justify-center rounded-full bg-white/90 text-2xl text-gray-700 shadow"
                    {
                        "×"
                    }

                    (property_image(&property.image, &property.name, "h-80"))

                    div class="p-8" {
                        div class="flex items-start justify-between gap-4 mb-6" {
                            h2 class="text-3xl font-bold text-gray-900" { (property.name) }
                            (type_badge(&property.property_type))
                        }

                        div class="grid grid-cols-1 md:grid-cols-2 gap-6 mb-6" {
                            div class="p-4 rounded-xl bg-gray-50" {
                                p class="text-sm text-gray-500" { "Location" }
                                p class="text-lg font-semibold text-gray-900" { (property.location) }
                            }
                            div class="p-4 rounded-xl bg-gray-50" {
                                p class="text-sm text-gray-500" { "Price" }
                                p class="text-lg font-semibold text-indigo-600" { (format_price(property.price)) }
                            }
                        }

                        div class="mb-6" {
                            h3 class="text-lg font-semibold text-gray-900 mb-2" { "Description" }
                            p class="text-gray-700 leading-relaxed" { (property.description) }
                        }

                        @if let Some((lat, lng)) = property.coordinates() {
                            div {
                                h3 class="text-lg font-semibold text-gray-900 mb-2" { "Location on Map" }
                                div class="rounded-xl overflow-hidden border border-gray-200" {
                                    iframe
                                        title="Google Map"
                                        src=(map_embed_url(lat, lng))
                                        width="100%"
                                        height="400"
                                        style="border: 0;"
                                        allowfullscreen
                                        loading="lazy"
                                        referrerpolicy="no-referrer-when-downgrade"
                                    {}
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}
