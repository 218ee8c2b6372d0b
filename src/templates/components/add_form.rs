use crate::domain::property_type::{default_image_for, FALLBACK_IMAGE};
use crate::domain::{PropertyDraft, PropertyType};
use maud::{html, Markup};

const SWAP_IMAGE_ON_TYPE_CHANGE: &str = "var url=this.options[this.selectedIndex].dataset.image;\
this.form.elements['image'].value=url;\
document.getElementById('image-preview').src=url;";

/// What the add form shows: the values to pre-fill and an optional error banner.
#[derive(Debug, Clone, Default)]
pub struct FormVm {
    pub draft: PropertyDraft,
    pub error: Option<String>,
}

pub fn add_property_form(vm: &FormVm) -> Markup {
    let draft = &vm.draft;
    let preview = if draft.image.trim().is_empty() {
        default_image_for(&draft.property_type)
    } else {
        draft.image.as_str()
    };
    let unknown_type = PropertyType::from_label(&draft.property_type).is_none()
        && !draft.property_type.is_empty();

    html! {
        section id="add-property" class="bg-white rounded-2xl shadow-md p-8 mb-8" {
            div class="mb-6" {
                h2 class="text-2xl font-bold text-gray-900" { "Add New Property" }
                p class="text-gray-600" { "Fill in the details below to add a new property listing" }
            }

            @if let Some(err) = &vm.error {
                div class="mb-6 p-4 rounded-lg bg-red-50 border border-red-200 text-red-700" role="alert" {
                    (err)
                }
            }

            form method="post" action="/properties" class="space-y-8" {
                fieldset {
                    legend class="text-lg font-semibold text-gray-800 mb-4" { "Basic Information" }
                    div class="grid grid-cols-1 md:grid-cols-2 gap-6" {
                        div {
                            label for="name" class="block text-sm font-medium text-gray-700 mb-2" { "Property Name *" }
                            input id="name" name="name" placeholder="Enter property name"
                                value=(draft.name) required
                                class="w-full px-4 py-3 border border-gray-300 rounded-lg";
                        }
                        div {
                            label for="form-type" class="block text-sm font-medium text-gray-700 mb-2" { "Property Type *" }
                            select id="form-type" name="type" required
                                onchange=(SWAP_IMAGE_ON_TYPE_CHANGE)
                                class="w-full px-4 py-3 border border-gray-300 rounded-lg bg-white"
                            {
                                @if unknown_type {
                                    option value=(draft.property_type) data-image=(FALLBACK_IMAGE) selected { (draft.property_type) }
                                }
                                @for kind in PropertyType::ALL {
                                    option value=(kind.label())
                                        data-image=(kind.default_image())
                                        selected[draft.property_type == kind.label()]
                                    { (kind.label()) }
                                }
                            }
                        }
                    }

                    div class="mt-6" {
                        label for="image" class="block text-sm font-medium text-gray-700 mb-2" { "Property Image" }
                        div class="relative rounded-lg overflow-hidden mb-3" {
                            img id="image-preview" src=(preview) alt={ (draft.property_type) " preview" }
                                class="w-full h-48 object-cover"
                                onerror={ "this.src='" (FALLBACK_IMAGE) "';" };
                            p class="absolute bottom-3 left-3 text-white font-semibold drop-shadow" {
                                (draft.property_type) " Property"
                            }
                        }
                        input id="image" name="image" type="url" value=(draft.image)
                            placeholder="Leave empty to use the default photo for the type"
                            class="w-full px-4 py-3 border border-gray-300 rounded-lg";
                    }
                }

                fieldset {
                    legend class="text-lg font-semibold text-gray-800 mb-4" { "Pricing" }
                    label for="price" class="block text-sm font-medium text-gray-700 mb-2" { "Price (USD) *" }
                    div class="relative" {
                        span class="absolute left-4 top-3 text-gray-500" { "$" }
                        input id="price" name="price" type="number" placeholder="0.00"
                            value=(draft.price) required min="0" step="0.01"
                            class="w-full pl-8 pr-4 py-3 border border-gray-300 rounded-lg";
                    }
                }

                fieldset {
                    legend class="text-lg font-semibold text-gray-800 mb-4" { "Location" }
                    div class="grid grid-cols-1 md:grid-cols-3 gap-6" {
                        div class="md:col-span-3" {
                            label for="location" class="block text-sm font-medium text-gray-700 mb-2" { "Location *" }
                            input id="location" name="location" placeholder="Enter location"
                                value=(draft.location) required
                                class="w-full px-4 py-3 border border-gray-300 rounded-lg";
                        }
                        div {
                            label for="lat" class="block text-sm font-medium text-gray-700 mb-2" { "Latitude" }
                            input id="lat" name="lat" type="number" step="any" placeholder="e.g. 39.7392"
                                value=(draft.lat)
                                class="w-full px-4 py-3 border border-gray-300 rounded-lg";
                        }
                        div {
                            label for="lng" class="block text-sm font-medium text-gray-700 mb-2" { "Longitude" }
                            input id="lng" name="lng" type="number" step="any" placeholder="e.g. -104.9903"
                                value=(draft.lng)
                                class="w-full px-4 py-3 border border-gray-300 rounded-lg";
                        }
                    }
                }

                fieldset {
                    legend class="text-lg font-semibold text-gray-800 mb-4" { "Description" }
                    label for="description" class="sr-only" { "Description *" }
                    textarea id="description" name="description" rows="4" required
                        placeholder="Describe the property"
                        class="w-full px-4 py-3 border border-gray-300 rounded-lg"
                    { (draft.description) }
                }

                div class="flex justify-end" {
                    button type="submit" class="px-8 py-3 rounded-lg bg-indigo-600 text-white font-semibold shadow hover:bg-indigo-700" {
                        "Add Property"
                    }
                }
            }
        }
    }
}
