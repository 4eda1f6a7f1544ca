//! Click-triggered floating panel.
//!
//! The panel opens above its trigger (top-center, no arrow). While open, a
//! transparent full-viewport backdrop catches any click outside the panel
//! and closes it. Escape pressed on the trigger or inside the panel closes
//! it too.

#[cfg(test)]
#[path = "popup_test.rs"]
mod popup_test;

use leptos::prelude::*;

/// Whether a `KeyboardEvent.key` value should dismiss an open popup.
pub fn is_dismiss_key(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}

#[component]
pub fn Popup(#[prop(into)] trigger_label: String, children: ChildrenFn) -> impl IntoView {
    let open = RwSignal::new(false);

    view! {
        <span
            class="popup"
            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                if open.get_untracked() && is_dismiss_key(&ev.key()) {
                    open.set(false);
                }
            }
        >
            <button
                class="hover:underline"
                type="button"
                aria-haspopup="dialog"
                aria-expanded=move || open.get().to_string()
                on:click=move |_| open.update(|o| *o = !*o)
            >
                {trigger_label}
            </button>
            <Show when=move || open.get()>
                <div class="popup__backdrop" on:click=move |_| open.set(false)></div>
                <div class="popup__content popup__content--top-center" role="dialog">
                    {children()}
                </div>
            </Show>
        </span>
    }
}
