use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn error_page(status: u16, message: &str) -> Markup {
    desktop_layout(
        &format!("Error {status}"),
        html! {
            main class="max-w-xl mx-auto px-6 py-16 text-center" {
                h1 class="text-3xl font-bold text-gray-900 mb-4" { "Error " (status) }
                p class="text-lg text-gray-600 mb-6" { (message) }
                a href="/" class="text-indigo-600 font-medium" { "← Back to properties" }
            }
        },
    )
}
