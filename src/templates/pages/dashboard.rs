use crate::domain::{Property, ViewFilter};
use crate::templates::components::{
    add_property_form, button_link, dashboard_href, filter_bar, property_card, FormVm,
};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub enum Notice {
    Added,
}

pub struct DashboardVm<'a> {
    pub properties: &'a [Property],
    pub total: usize,
    pub filter: &'a ViewFilter,
    /// `Some` when the add form is open.
    pub form: Option<FormVm>,
    pub notice: Option<Notice>,
}

pub fn dashboard_page(vm: &DashboardVm) -> Markup {
    let show_form = vm.form.is_some();
    let toggle_label = if show_form { "Hide Form" } else { "Add Property" };

    desktop_layout(
        "Properties",
        html! {
            main class="max-w-7xl mx-auto px-6 py-8" {
                div class="flex items-center justify-between mb-6" {
                    p class="text-gray-600" { "Browse, search and add property listings" }
                    (button_link(toggle_label, &dashboard_href(vm.filter, !show_form)))
                }

                @if let Some(Notice::Added) = vm.notice {
                    div class="mb-6 p-4 rounded-lg bg-green-50 border border-green-200 text-green-800" role="status" {
                        "Property added successfully!"
                    }
                }

                (filter_bar(vm.filter, show_form))

                p class="text-gray-600 mb-6" id="results-count" {
                    "Showing " strong { (vm.properties.len()) } " of " strong { (vm.total) } " properties"
                }

                @if let Some(form) = &vm.form {
                    (add_property_form(form))
                }

                @if vm.properties.is_empty() {
                    div class="text-center py-16 bg-white rounded-2xl shadow-md" {
                        h3 class="text-xl font-semibold text-gray-900 mb-2" { "No properties found" }
                        @if vm.filter.is_active() {
                            p class="text-gray-600" { "Try adjusting your search or filter criteria" }
                        } @else {
                            p class="text-gray-600" { "Be the first to add a listing" }
                        }
                    }
                } @else {
                    div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8" {
                        @for property in vm.properties {
                            (property_card(property, vm.filter))
                        }
                    }
                }
            }
        },
    )
}
