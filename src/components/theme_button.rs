//! Single icon button of the light/system/dark switch.

#[cfg(test)]
#[path = "theme_button_test.rs"]
mod theme_button_test;

use leptos::prelude::*;

use crate::state::theme::ThemeMode;

const BASE_CLASS: &str =
    "rounded-inherit inline-flex h-[32px] w-[32px] items-center justify-center border-0 t-primary";
const ACTIVE_CLASS: &str = "bg-w rounded-full shadow-xl shadow-light";

/// Accessible label and Remix icon class for `mode`.
pub fn theme_button_meta(mode: ThemeMode) -> (&'static str, &'static str) {
    match mode {
        ThemeMode::Light => ("Toggle light mode", "ri-sun-line"),
        ThemeMode::System => ("Toggle system mode", "ri-computer-line"),
        ThemeMode::Dark => ("Toggle dark mode", "ri-moon-line"),
    }
}

pub fn theme_button_class(active: bool) -> String {
    if active { format!("{BASE_CLASS} {ACTIVE_CLASS}") } else { BASE_CLASS.to_owned() }
}

/// Reports `mode` through `on_click`; highlighted while `current == mode`.
#[component]
pub fn ThemeButton(
    #[prop(into)] current: Signal<ThemeMode>,
    mode: ThemeMode,
    label: &'static str,
    icon: &'static str,
    on_click: Callback<ThemeMode>,
) -> impl IntoView {
    let active = move || current.get() == mode;

    view! {
        <button
            aria-label=label
            aria-pressed=move || active().to_string()
            type="button"
            class=move || theme_button_class(active())
            on:click=move |_| on_click.run(mode)
        >
            <i class=icon></i>
        </button>
    }
}
