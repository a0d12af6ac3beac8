use leptos::{html, prelude::*};

use super::{
    motion::use_reveal,
    widgets::{Glyph, SectionHeading},
};
use crate::{
    content::{Icon, JOURNEY_TITLE, MILESTONES},
    reveal::{Motion, Stagger},
    timeline::{layout, TimelineEntry},
};

#[component]
pub fn Journey() -> impl IntoView {
    let root = NodeRef::<html::Div>::new();
    let revealed = use_reveal(root, "journey");

    view! {
        <section id="journey" class="py-20 bg-gradient-to-b from-midnight to-black">
            <div class="container mx-auto px-6">
                <div node_ref=root class="max-w-6xl mx-auto">
                    <div class=move || format!("{} text-center mb-16", Motion::Up.classes(revealed.get()))>
                        <SectionHeading title=JOURNEY_TITLE />
                    </div>

                    <div class="relative">
                        <div class="absolute left-4 md:left-1/2 md:-translate-x-px top-0 bottom-0 w-0.5 bg-gradient-to-b from-cyber-blue via-cyber-green to-cyber-magenta"></div>
                        <div class="space-y-12">
                            {layout(MILESTONES)
                                .map(|entry| view! { <MilestoneRow entry revealed /> })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn MilestoneRow(entry: TimelineEntry<'static>, revealed: Signal<bool>) -> impl IntoView {
    let TimelineEntry { index, side, milestone } = entry;
    let accent = milestone.accent;
    let row_delay = Stagger::TIMELINE.delay(index);
    let achievements = Stagger::ITEMS.offset(row_delay);

    view! {
        <div
            class=move || {
                format!(
                    "{} relative flex flex-col {} items-start md:items-center",
                    side.motion().classes(revealed.get()),
                    side.row_class(),
                )
            }
            style=Stagger::TIMELINE.style(index)
        >
            <div class=format!(
                "absolute left-4 md:left-1/2 -translate-x-1/2 w-4 h-4 rounded-full border-2 {} bg-black z-10",
                accent.border_class(),
            )></div>

            <div class=format!("w-full md:w-1/2 pl-12 md:pl-0 {}", side.card_class())>
                <div
                    class=format!(
                        "glassmorphism rounded-lg p-6 border {} transition-transform duration-300 hover:scale-[1.02]",
                        accent.border_class(),
                    )
                    style=accent.glow(20, 0.1)
                >
                    <div class="flex items-center gap-3 mb-4">
                        <div class=format!("p-2 rounded-lg bg-black/50 {}", accent.text_class())>
                            <Glyph icon=milestone.icon class="text-2xl" />
                        </div>
                        <div>
                            <span class=format!("font-orbitron font-bold text-lg {}", accent.text_class())>
                                {milestone.year}
                            </span>
                            <div class="flex items-center gap-1 text-xs text-gray-400 font-tech">
                                <Glyph icon=milestone.kind.icon() />
                                {milestone.kind.label()}
                            </div>
                        </div>
                    </div>

                    <h3 class="text-xl font-orbitron font-bold text-white mb-1">{milestone.title}</h3>
                    <div class="flex items-center gap-2 text-gray-400 font-tech text-sm mb-3">
                        <Glyph icon=Icon::Building />
                        {milestone.organization}
                    </div>
                    <p class="text-gray-300 font-tech text-sm mb-4 leading-relaxed">
                        {milestone.description}
                    </p>

                    <ul class="space-y-2">
                        {milestone
                            .achievements
                            .iter()
                            .enumerate()
                            .map(|(idx, achievement)| {
                                view! {
                                    <li
                                        class=move || {
                                            format!(
                                                "{} flex items-center gap-2 text-sm font-tech text-gray-300",
                                                Motion::Fade.classes(revealed.get()),
                                            )
                                        }
                                        style=achievements.style(idx)
                                    >
                                        <span class=format!("w-1.5 h-1.5 rounded-full {}", accent.bg_class())></span>
                                        {*achievement}
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
            </div>

            <div class="hidden md:block md:w-1/2"></div>
        </div>
    }
}
