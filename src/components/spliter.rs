use leptos::prelude::*;

/// Vertical bar separator between inline footer links.
#[component]
pub fn Spliter() -> impl IntoView {
    view! { <span class="px-1">"|"</span> }
}
