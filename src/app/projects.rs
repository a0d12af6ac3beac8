use leptos::{html, prelude::*};
use leptos_router::hooks::use_query_map;

use super::{
    motion::use_reveal,
    widgets::{Glyph, SectionHeading},
};
use crate::{
    content::{Icon, Project, PROJECTS, PROJECTS_TITLE},
    gallery::{Filter, ProjectFilter},
    reveal::{Motion, Stagger},
};

#[component]
pub fn Projects() -> impl IntoView {
    let root = NodeRef::<html::Div>::new();
    let revealed = use_reveal(root, "projects");
    let mut initial = ProjectFilter::new();
    // deep link: /?filter=security
    if let Some(filter) = use_query_map()
        .with_untracked(|q| q.get("filter"))
        .and_then(|id| Filter::from_id(&id))
    {
        initial.set_filter(filter);
    }
    let gallery = RwSignal::new(initial);

    let visible = move || gallery.with(|g| g.visible(PROJECTS).collect::<Vec<_>>());

    view! {
        <section id="projects" class="py-20 bg-gradient-to-b from-black to-midnight">
            <div class="container mx-auto px-6">
                <div node_ref=root class="max-w-7xl mx-auto">
                    <div class=move || format!("{} text-center mb-16", Motion::Up.classes(revealed.get()))>
                        <SectionHeading title=PROJECTS_TITLE />
                    </div>

                    <div
                        class=move || format!("{} flex flex-wrap justify-center gap-4 mb-12", Motion::Up.classes(revealed.get()))
                        style="transition-delay: 200ms"
                    >
                        {Filter::choices()
                            .map(|filter| view! { <FilterButton filter gallery /> })
                            .collect_view()}
                    </div>

                    <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                        <For
                            each=move || visible().into_iter().enumerate()
                            key=|(index, project)| (*index, project.id)
                            children=move |(index, project)| {
                                view! { <ProjectCard project index revealed /> }
                            }
                        />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn FilterButton(filter: Filter, gallery: RwSignal<ProjectFilter>) -> impl IntoView {
    let class = move || {
        if gallery.with(|g| g.is_active(filter)) {
            "flex items-center gap-2 px-6 py-3 rounded-lg font-tech transition-all duration-300 bg-cyber-blue text-black hover-glow-blue"
        } else {
            "flex items-center gap-2 px-6 py-3 rounded-lg font-tech transition-all duration-300 border border-cyber-blue/30 text-cyber-blue hover:border-cyber-blue hover:bg-cyber-blue/10"
        }
    };

    view! {
        <button
            class=class
            data-filter=filter.id()
            aria-pressed=move || gallery.with(|g| g.is_active(filter)).to_string()
            on:click=move |_| {
                log::debug!("project filter set to {}", filter.id());
                gallery.update(|g| g.set_filter(filter));
            }
        >
            <Glyph icon=filter.icon() />
            {filter.label()}
        </button>
    }
}

#[component]
fn ProjectCard(project: &'static Project, index: usize, revealed: Signal<bool>) -> impl IntoView {
    let status = project.status.accent();
    let hidden = project.hidden_tech_count();

    view! {
        <div
            class=move || {
                format!(
                    "{} group glassmorphism rounded-lg overflow-hidden border border-cyber-blue/20 hover:border-cyber-blue transition-all duration-500",
                    Motion::Up.classes(revealed.get()),
                )
            }
            style=Stagger::ITEMS.style(index)
        >
            <div class="relative h-48 overflow-hidden">
                <img
                    src=project.image
                    alt=project.title
                    loading="lazy"
                    class="w-full h-full object-cover transition-transform duration-500 group-hover:scale-110"
                />
                <div class="absolute inset-0 bg-gradient-to-t from-black via-black/40 to-transparent"></div>
                <span class=format!(
                    "absolute top-4 right-4 px-3 py-1 rounded-full text-xs font-tech border bg-black/70 {} {}",
                    status.text_class(),
                    status.border_class(),
                )>{project.status.label()}</span>
                <div class="absolute bottom-4 left-4 text-cyber-blue text-3xl">
                    <Glyph icon=project.icon />
                </div>
            </div>

            <div class="p-6">
                <h3 class="text-xl font-orbitron font-bold text-white mb-3 group-hover:text-cyber-blue transition-colors">
                    {project.title}
                </h3>
                <p class="text-gray-300 font-tech text-sm mb-4 leading-relaxed">{project.description}</p>

                <div class="flex flex-wrap gap-2 mb-4">
                    {project
                        .tech_preview()
                        .iter()
                        .map(|tech| {
                            view! {
                                <span class="px-2 py-1 text-xs font-tech rounded bg-cyber-blue/10 text-cyber-blue border border-cyber-blue/30">
                                    {*tech}
                                </span>
                            }
                        })
                        .collect_view()}
                    {(hidden > 0)
                        .then(|| {
                            view! {
                                <span class="px-2 py-1 text-xs font-tech rounded bg-gray-800 text-gray-400">
                                    {format!("+{hidden} more")}
                                </span>
                            }
                        })}
                </div>

                <ul class="space-y-1 mb-6">
                    {project
                        .feature_preview()
                        .iter()
                        .map(|feature| {
                            view! {
                                <li class="flex items-center gap-2 text-xs font-tech text-gray-400">
                                    <span class="w-1 h-1 rounded-full bg-cyber-green"></span>
                                    {*feature}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>

                <div class="flex gap-4">
                    <a
                        href=project.repository
                        target="_blank"
                        rel="noopener noreferrer"
                        class="flex items-center gap-2 text-sm font-tech text-cyber-blue hover:text-white transition-colors"
                    >
                        <Glyph icon=Icon::Github />
                        "Code"
                    </a>
                    <a
                        href=project.demo
                        target="_blank"
                        rel="noopener noreferrer"
                        class="flex items-center gap-2 text-sm font-tech text-cyber-magenta hover:text-white transition-colors"
                    >
                        <Glyph icon=Icon::ExternalLink />
                        "Demo"
                    </a>
                </div>
            </div>
        </div>
    }
}
