mod header;
mod homepage;
mod preferences;
mod projects;

use chrono::DateTime;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use header::Header;
use homepage::HomePage;
pub use preferences::{provide_preferences, use_preferences, Preferences};
use projects::ProjectsPage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let prefs = provide_preferences();

    view! {
        <Title formatter=|title| format!("Portfolio - {title}") />
        <Router>
            <div
                class=move || format!("{} flex flex-col min-h-screen", prefs.theme())
                lang=move || prefs.language().code()
            >
                <Header />
                <main class="flex flex-col flex-grow items-center mx-auto w-full max-w-7xl px-4">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/projects") view=ProjectsPage />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let updated = DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|dt| dt.format("%b %e, %Y").to_string())
        .unwrap_or_default();
    view! {
        <footer class="mt-12 py-6 border-t border-muted/30 text-sm text-muted text-center">
            <p>"Freelance software development & consulting"</p>
            <p>"Last updated " {updated}</p>
        </footer>
    }
}
