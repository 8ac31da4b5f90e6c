use leptos::prelude::*;
use leptos_router::components::*;

use crate::preferences::{Language, Theme};

use super::use_preferences;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="shadow">
            <div class="mx-auto px-4 sm:px-6 lg:px-8 py-4">
                <div class="flex flex-wrap items-center justify-between gap-4">
                    <A href="/" attr:class="text-2xl font-bold">
                        "Portfolio"
                    </A>
                    <nav class="flex gap-6 font-medium">
                        <A href="/" attr:class="hover:text-cyan transition-colors duration-200">
                            "About"
                        </A>
                        <A
                            href="/projects"
                            attr:class="hover:text-cyan transition-colors duration-200"
                        >
                            "Projects"
                        </A>
                    </nav>
                    <div class="flex items-center gap-3">
                        <LanguageSwitch />
                        <ThemeToggle />
                    </div>
                </div>
            </div>
        </header>
    }
}

#[component]
fn ThemeToggle() -> impl IntoView {
    let prefs = use_preferences();
    view! {
        <button
            class="px-3 py-1 rounded-md border border-muted/30"
            aria-label="Toggle colour theme"
            on:click=move |_| prefs.toggle_theme()
        >
            {move || match prefs.theme() {
                Theme::Light => "🌙",
                Theme::Dark => "☀️",
            }}
        </button>
    }
}

#[component]
fn LanguageSwitch() -> impl IntoView {
    let prefs = use_preferences();
    view! {
        <div class="flex rounded-md border border-muted/30 overflow-hidden text-sm">
            {Language::ALL
                .into_iter()
                .map(|lang| {
                    view! {
                        <button
                            class=move || {
                                if prefs.language() == lang {
                                    "px-2 py-1 bg-cyan/20 text-cyan"
                                } else {
                                    "px-2 py-1"
                                }
                            }
                            title=lang.label()
                            on:click=move |_| prefs.set_language(lang)
                        >
                            {lang.code().to_uppercase()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
