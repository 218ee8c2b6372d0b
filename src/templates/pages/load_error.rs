use crate::templates::desktop_layout;
use maud::{html, Markup};

/// Blocking view shown while the last load failed. No listing data is shown.
pub fn load_error_page(detail: &str) -> Markup {
    desktop_layout(
        "Unavailable",
        html! {
            main class="max-w-xl mx-auto px-6 py-16" {
                div class="bg-white rounded-2xl shadow-xl p-8 text-center" {
                    h2 class="text-2xl font-bold text-gray-900 mb-4" { "Oops! Something went wrong" }
                    p class="text-gray-600 mb-2" {
                        "Failed to fetch properties. Please make sure the server is running."
                    }
                    p class="text-xs text-gray-400 mb-6" { (detail) }
                    form method="post" action="/reload" {
                        button type="submit" class="px-6 py-3 rounded-lg bg-indigo-600 text-white font-semibold" {
                            "Try Again"
                        }
                    }
                }
            }
        },
    )
}
