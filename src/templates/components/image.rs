use maud::{html, Markup};

/// Photo with an "Image not available" placeholder that takes over when the
/// URL is empty or fails to load.
pub fn property_image(src: &str, alt: &str, height_class: &str) -> Markup {
    let placeholder = html! {
        div class={ "w-full " (height_class) " bg-gray-200 flex-col items-center justify-center text-gray-500" }
            style=(if src.is_empty() { "display: flex;" } else { "display: none;" })
        {
            p class="text-sm font-medium" { "Image not available" }
        }
    };

    html! {
        @if !src.is_empty() {
            img
                src=(src)
                alt=(alt)
                class={ "w-full " (height_class) " object-cover" }
                onerror="this.style.display='none';this.nextElementSibling.style.display='flex';";
        }
        (placeholder)
    }
}
