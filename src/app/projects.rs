use leptos::{ev::MouseEvent, prelude::*};
use leptos_meta::Title;

use crate::filter::{available_customers, available_tags, FilterState};
use crate::projects::{projects, Project};
use crate::stats::{calculate_project_stats, ProjectStats, TagCategory};

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let all = projects();
    let filter = RwSignal::new(FilterState::new());
    let filtered = Memo::new(move |_| filter.with(|f| f.apply(all)));
    let stats = Memo::new(move |_| filtered.with(|p| calculate_project_stats(p)));

    view! {
        <Title text="Projects" />
        <div class="w-full max-w-6xl mx-auto page-content">
            <h1 class="font-bold text-3xl text-center my-8">"Project History"</h1>
            <section class="mb-8 section-content">
                <h2 class="text-lg font-bold mb-2">"Technologies"</h2>
                <div class="flex flex-wrap gap-2">
                    {available_tags(all)
                        .into_iter()
                        .map(|tag| view! { <TagChip tag filter /> })
                        .collect_view()}
                </div>
                <h2 class="text-lg font-bold mt-6 mb-2">"Customers"</h2>
                <div class="flex flex-wrap gap-2">
                    {available_customers(all)
                        .into_iter()
                        .map(|customer| view! { <CustomerChip customer filter /> })
                        .collect_view()}
                </div>
                <Show when=move || filter.with(FilterState::is_active)>
                    <button
                        class="mt-4 px-4 py-2 bg-cyan/20 hover:bg-cyan/30 text-cyan rounded-md border border-cyan/30"
                        on:click=move |_| filter.update(FilterState::reset)
                    >
                        "Clear filters"
                    </button>
                </Show>
            </section>
            <StatsPanel stats />
            <section class="section-content">
                <p class="text-sm text-muted mb-4">
                    {move || format!("Showing {} of {} projects", filtered.with(Vec::len), all.len())}
                </p>
                <div class="grid md:grid-cols-2 gap-6">
                    {move || {
                        filtered
                            .get()
                            .into_iter()
                            .map(|project| view! { <ProjectCard project filter /> })
                            .collect_view()
                    }}
                </div>
            </section>
        </div>
    }
}

fn chip_class(selected: bool) -> &'static str {
    if selected {
        "rounded-md px-2 py-1 text-sm bg-cyan/30 text-cyan border border-cyan/50"
    } else {
        "rounded-md px-2 py-1 text-sm bg-brightBlack/20 border border-transparent hover:border-muted/50"
    }
}

#[component]
fn TagChip(tag: String, filter: RwSignal<FilterState>) -> impl IntoView {
    let is_selected = {
        let tag = tag.clone();
        move || filter.with(|f| f.is_tag_selected(&tag))
    };
    let on_click = {
        let tag = tag.clone();
        move |_: MouseEvent| filter.update(|f| f.toggle_tag(&tag))
    };
    view! {
        <button class=move || chip_class(is_selected()) on:click=on_click>
            {tag}
        </button>
    }
}

#[component]
fn CustomerChip(customer: String, filter: RwSignal<FilterState>) -> impl IntoView {
    let is_selected = {
        let customer = customer.clone();
        move || filter.with(|f| f.selected_customer == customer)
    };
    let on_click = {
        let customer = customer.clone();
        move |_: MouseEvent| filter.update(|f| f.select_customer(&customer))
    };
    view! {
        <button class=move || chip_class(is_selected()) on:click=on_click>
            {customer}
        </button>
    }
}

#[component]
fn StatsPanel(stats: Memo<ProjectStats>) -> impl IntoView {
    view! {
        <section class="mb-8 p-4 rounded-lg border border-muted/30 section-content">
            <h2 class="text-lg font-bold mb-4">"Top technologies"</h2>
            {move || {
                stats
                    .with(|s| {
                        let summary = format!(
                            "{} projects · {} technologies · {} frameworks · {}–{}",
                            s.total_projects,
                            s.total_technologies,
                            s.total_frameworks,
                            s.year_range.start,
                            s.year_range.end,
                        );
                        let bars = s
                            .top_technologies
                            .iter()
                            .map(|t| {
                                let bar_class = match t.category {
                                    TagCategory::Primary => "h-2 rounded bg-cyan",
                                    TagCategory::Secondary => "h-2 rounded bg-muted",
                                };
                                view! {
                                    <li class="mb-2">
                                        <div class="flex justify-between text-sm">
                                            <span>{t.name.clone()}</span>
                                            <span class="text-muted">
                                                {format!("{} ({}%)", t.count, t.percentage)}
                                            </span>
                                        </div>
                                        <div
                                            class=bar_class
                                            style=format!("width: {}%", t.percentage)
                                        ></div>
                                    </li>
                                }
                            })
                            .collect_view();
                        view! {
                            <p class="text-sm text-muted mb-4">{summary}</p>
                            <ul>{bars}</ul>
                        }
                    })
            }}
        </section>
    }
}

#[component]
fn ProjectCard(project: Project, filter: RwSignal<FilterState>) -> impl IntoView {
    let Project {
        customer,
        title,
        description,
        primary_tags,
        tags,
        comment,
    } = project;
    let customer_click = {
        let customer = customer.clone();
        move |_: MouseEvent| filter.update(|f| f.select_customer(&customer))
    };
    let tag_button = move |tag: String, primary: bool| {
        let class = if primary {
            "rounded px-2 py-1 text-xs bg-cyan/20 text-cyan"
        } else {
            "rounded px-2 py-1 text-xs bg-brightBlack/20"
        };
        let on_click = {
            let tag = tag.clone();
            move |_: MouseEvent| filter.update(|f| f.toggle_tag(&tag))
        };
        view! {
            <button class=class on:click=on_click>
                {tag}
            </button>
        }
    };
    view! {
        <article class="p-6 rounded-lg border border-muted/30 hover:bg-brightBlack/10 transition-colors duration-200">
            <button class="text-sm text-cyan font-medium" on:click=customer_click>
                {customer}
            </button>
            <h3 class="text-xl font-bold mt-1 mb-3">{title}</h3>
            {description
                .into_iter()
                .map(|para| view! { <p class="mb-2 leading-relaxed">{para}</p> })
                .collect_view()}
            {comment.map(|c| view! { <p class="text-sm italic text-muted mb-2">{c}</p> })}
            <div class="flex flex-wrap gap-1 mt-3">
                {primary_tags.into_iter().map(|t| tag_button(t, true)).collect_view()}
                {tags.into_iter().map(|t| tag_button(t, false)).collect_view()}
            </div>
        </article>
    }
}
