use crate::domain::{PropertyType, ViewFilter};
use maud::{html, Markup};

pub fn filter_bar(filter: &ViewFilter, show_form: bool) -> Markup {
    html! {
        form method="get" action="/" class="bg-white rounded-2xl shadow-md p-6 mb-6 flex flex-col md:flex-row gap-4" {
            @if show_form {
                input type="hidden" name="add" value="1";
            }
            div class="flex-1" {
                label for="q" class="sr-only" { "Search" }
                input
                    type="text"
                    id="q"
                    name="q"
                    value=(filter.search_term)
                    placeholder="Search by name or location..."
                    class="w-full px-4 py-3 border border-gray-300 rounded-lg";
            }
            div class="md:w-64" {
                label for="type" class="sr-only" { "Property type" }
                select
                    id="type"
                    name="type"
                    onchange="this.form.submit()"
                    class="w-full px-4 py-3 border border-gray-300 rounded-lg bg-white"
                {
                    option value="" selected[filter.type_filter.is_empty()] { "All Types" }
                    @for kind in PropertyType::ALL {
                        option value=(kind.label()) selected[filter.type_filter.eq_ignore_ascii_case(kind.label())] { (kind.label()) }
                    }
                }
            }
            button type="submit" class="px-6 py-3 rounded-lg bg-gray-800 text-white font-semibold" { "Search" }
        }
    }
}
