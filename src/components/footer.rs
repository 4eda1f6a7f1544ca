//! Site footer: theme switch, visitor counters, feed links and attribution.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered once per page under the main content. On mount (browser only)
//! it restores the stored theme, probes `/cdnflag` once and records the
//! visit so the `#site_pv` / `#site_uv` placeholders get filled in.
//!
//! Reads `RwSignal<ClientConfig>`, `RwSignal<Translations>` and
//! `ColorSchemeBus` from context; each falls back to its default when no
//! provider is mounted.

#[cfg(test)]
#[path = "footer_test.rs"]
mod footer_test;

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::Link;

use crate::components::popup::Popup;
use crate::components::spliter::Spliter;
use crate::components::theme_button::{ThemeButton, theme_button_meta};
use crate::net::cdn::{ProbeGuard, fetch_cdn_flag};
use crate::net::count::{PAGE_VIEWS_ELEMENT_ID, UNIQUE_VISITORS_ELEMENT_ID, refresh_site_counts};
use crate::state::config::ClientConfig;
use crate::state::i18n::Translations;
use crate::state::theme::ThemeMode;
use crate::util::color_scheme_bus::ColorSchemeBus;
use crate::util::site::{FEEDS, SITE_NAME};
use crate::util::theme::{BrowserThemeHost, ThemeController};

const HOME_URL: &str = "https://blog.luntan888.com";
const TRAVEL_URL: &str = "https://travel.moe/go.html?travel=on";
const TRAVEL_TITLE: &str = "异次元之旅-跃迁-我们一起去萌站成员的星球旅行吧！";
const CLOUDFLARE_URL: &str = "https://www.cloudflare.com";

/// Whether a probe result should turn the CDN note on. Errors are logged.
fn cdn_flag_from_probe(result: Result<bool, String>) -> bool {
    match result {
        Ok(flag) => flag,
        Err(e) => {
            log::error!("Error fetching CDN flag: {e}");
            false
        }
    }
}

/// `cdn_flag` hands the CDN note flag to a parent; without it the footer
/// owns a fresh flag that only the `/cdnflag` request can raise.
#[component]
pub fn Footer(#[prop(optional)] cdn_flag: Option<RwSignal<bool>>) -> impl IntoView {
    let config = use_context::<RwSignal<ClientConfig>>();
    let i18n = use_context::<RwSignal<Translations>>().unwrap_or_else(|| RwSignal::new(Translations::default()));
    let bus = use_context::<ColorSchemeBus>().unwrap_or_default();

    let controller = ThemeController::new(BrowserThemeHost, bus);
    let mode = RwSignal::new(ThemeMode::System);
    let cdn_flag = cdn_flag.unwrap_or_else(|| RwSignal::new(false));
    let probe = Arc::new(ProbeGuard::new());

    let set_mode = {
        let controller = controller.clone();
        Callback::new(move |next: ThemeMode| {
            mode.set(next);
            if let Err(e) = controller.set_mode(next) {
                log::error!("theme switch failed: {e}");
            }
        })
    };

    // Nothing is tracked here, so this runs once after mount.
    Effect::new(move || {
        set_mode.run(controller.initial_mode());

        if probe.try_acquire() {
            leptos::task::spawn_local(async move {
                if cdn_flag_from_probe(fetch_cdn_flag().await) {
                    // The footer may already be gone; a disposed signal is fine.
                    let _ = cdn_flag.try_set(true);
                }
            });
        }

        leptos::task::spawn_local(refresh_site_counts());
    });

    let rss_enabled = move || config.is_some_and(|c| c.with(ClientConfig::rss_enabled));
    let t = move |key: &'static str| move || i18n.with(|tr| tr.t(key));

    view! {
        <footer>
            <br/>
            <br/>
            {FEEDS
                .iter()
                .map(|feed| view! { <Link rel="alternate" type_=feed.mime title=SITE_NAME href=feed.href/> })
                .collect_view()}
            <div class="flex flex-col mb-8 space-y-2 justify-center items-center h-16 t-primary ani-show">
                <div class="w-fit-content inline-flex rounded-full border border-zinc-200 p-[3px] dark:border-zinc-700">
                    {ThemeMode::ALL
                        .into_iter()
                        .map(|m| {
                            let (label, icon) = theme_button_meta(m);
                            view! { <ThemeButton current=mode mode=m label=label icon=icon on_click=set_mode/> }
                        })
                        .collect_view()}
                </div>
                <p class="text-sm text-neutral-500 font-normal text-center">
                    {t("count.site_pv")}
                    " "
                    <span id=PAGE_VIEWS_ELEMENT_ID></span>
                    " | "
                    {t("count.site_uv")}
                    " "
                    <span id=UNIQUE_VISITORS_ELEMENT_ID></span>
                </p>
                <p class="text-sm text-neutral-500 font-normal link-line text-center">
                    <span>
                        "© 2024 "
                        <a class="hover:underline" href=HOME_URL target="_blank">"Chisato22"</a>
                    </span>
                    <Show when=rss_enabled>
                        <Spliter/>
                        <Popup trigger_label="RSS">
                            <div class="border-card">
                                <p class="font-bold t-primary">{t("footer.rss")}</p>
                                <p>
                                    {FEEDS
                                        .iter()
                                        .enumerate()
                                        .map(|(i, feed)| {
                                            view! {
                                                {(i > 0).then(|| view! { " " <Spliter/> })}
                                                <a href=feed.href>{feed.label}</a>
                                            }
                                        })
                                        .collect_view()}
                                </p>
                            </div>
                        </Popup>
                    </Show>
                    <br/>
                    <a class="hover:underline" href=HOME_URL target="_blank">
                        <span class="icon-MOE"></span>
                        "萌ICP备20240729号"
                    </a>
                    " | "
                    <a class="hover:underline" href=TRAVEL_URL title=TRAVEL_TITLE target="_blank">
                        "异次元之旅"
                    </a>
                    <br/>
                    "Powered by "
                    <a class="hover:underline" href=HOME_URL target="_blank">"Rin"</a>
                    " & "
                    <a class="hover:underline" href=CLOUDFLARE_URL target="_blank">"Cloudflare"</a>
                    <Show when=move || cdn_flag.get()>
                        <br/>
                        <a class="hover:underline" href=HOME_URL target="_blank">"DogeCloud"</a>
                        " "
                        {t("cdn_from_china")}
                    </Show>
                </p>
            </div>
            <br/>
            <br/>
            <br/>
        </footer>
    }
}
