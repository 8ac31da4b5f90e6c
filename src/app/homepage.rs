use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::*;

use crate::projects::projects;
use crate::stats::calculate_project_stats;

const SERVICES: &[(&str, &str)] = &[
    (
        "Web Applications",
        "Single-page applications and customer portals, from the first prototype to production.",
    ),
    (
        "Backend & APIs",
        "Services, integrations and data pipelines that are tested, observable and easy to operate.",
    ),
    (
        "AI Prototypes",
        "Evaluating language models against your own data before anything ships.",
    ),
    (
        "Workshops",
        "Hands-on training for teams adopting TypeScript, testing or cloud tooling.",
    ),
];

#[component]
fn StatTile(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="p-4 rounded-lg border border-muted/30 text-center">
            <div class="text-3xl font-bold text-cyan">{value}</div>
            <div class="text-sm text-muted mt-1">{label}</div>
        </div>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let stats = calculate_project_stats(projects());
    let years = stats.year_range.end - stats.year_range.start;
    let company_count = stats.companies_worked_with.len();
    view! {
        <Title text="About Me" />
        <div class="max-w-6xl mx-auto page-content">
            <section class="text-center my-12 section-content">
                <h1 class="text-4xl font-bold mb-4">"Freelance Software Developer"</h1>
                <p class="text-lg text-muted max-w-2xl mx-auto">
                    "I help companies build web applications, backends and data products, and I teach teams how to keep them maintainable."
                </p>
                <A
                    href="/projects"
                    attr:class="inline-block mt-6 bg-cyan/20 hover:bg-cyan/30 text-cyan px-6 py-3 rounded-md font-medium transition-all duration-200 border border-cyan/30"
                >
                    "Browse projects"
                </A>
            </section>
            <section class="grid grid-cols-2 md:grid-cols-4 gap-4 section-content">
                <StatTile label="Projects" value=stats.total_projects.to_string() />
                <StatTile label="Technologies" value=stats.total_technologies.to_string() />
                <StatTile label="Companies" value=company_count.to_string() />
                <StatTile label="Years of experience" value=format!("{years}+") />
            </section>
            <section class="my-12 section-content">
                <h2 class="text-2xl font-bold mb-6">"Services"</h2>
                <div class="grid md:grid-cols-2 gap-6">
                    {SERVICES
                        .iter()
                        .map(|(title, body)| {
                            view! {
                                <div class="p-6 rounded-lg border border-muted/30">
                                    <h3 class="text-xl font-bold mb-2">{*title}</h3>
                                    <p>{*body}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
            <section class="my-12 section-content">
                <h2 class="text-2xl font-bold mb-6">"Clients"</h2>
                <ul class="flex flex-wrap gap-3">
                    {stats
                        .companies_worked_with
                        .into_iter()
                        .map(|c| {
                            view! { <li class="rounded-md px-3 py-1 bg-brightBlack/20">{c}</li> }
                        })
                        .collect_view()}
                </ul>
            </section>
        </div>
    }
}
