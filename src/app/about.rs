use leptos::{html, prelude::*};

use super::{
    motion::use_reveal,
    widgets::{Glyph, SectionHeading},
};
use crate::{
    content::{Icon, Skill, ABOUT_TITLE, CERTIFICATIONS, SKILLS},
    reveal::{Motion, Stagger},
};

#[component]
pub fn About() -> impl IntoView {
    let root = NodeRef::<html::Div>::new();
    let revealed = use_reveal(root, "about");
    let staged = move |motion: Motion, extra: &'static str| {
        move || format!("{} {extra}", motion.classes(revealed.get()))
    };

    view! {
        <section id="about" class="py-20 bg-gradient-to-b from-black to-midnight">
            <div class="container mx-auto px-6">
                <div node_ref=root class="max-w-6xl mx-auto">
                    <div class=staged(Motion::Up, "text-center mb-16")>
                        <SectionHeading title=ABOUT_TITLE />
                    </div>

                    <div class="grid lg:grid-cols-2 gap-12 items-start">
                        <div class=staged(Motion::Up, "space-y-8") style="transition-delay: 200ms">
                            <Bio />
                            <Certifications revealed />
                        </div>
                        <div
                            class=staged(Motion::Up, "glassmorphism rounded-lg p-8")
                            style="transition-delay: 400ms"
                        >
                            <h3 class="text-2xl font-orbitron font-bold text-cyber-blue mb-8 flex items-center gap-3">
                                <Glyph icon=Icon::Code />
                                "Technical Skills"
                            </h3>
                            <div class="space-y-6">
                                {SKILLS
                                    .iter()
                                    .enumerate()
                                    .map(|(index, skill)| view! { <SkillBar skill index revealed /> })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Bio() -> impl IntoView {
    view! {
        <div class="glassmorphism rounded-lg p-8">
            <h3 class="text-2xl font-orbitron font-bold text-cyber-green mb-6 flex items-center gap-3">
                <Glyph icon=Icon::Zap />
                "My Journey"
            </h3>
            <div class="space-y-4 text-gray-300 font-tech leading-relaxed">
                <p>
                    "Started as a systems administrator, I quickly fell in love with the challenge of automating repetitive tasks and optimizing infrastructure. The cloud revolution opened up endless possibilities."
                </p>
                <p>
                    "Today, I architect scalable solutions on AWS, implement robust CI/CD pipelines, and ensure high availability while maintaining security best practices. Every deployment is a step toward digital excellence."
                </p>
                <p>
                    "When I'm not coding or deploying, you'll find me exploring the latest DevOps tools, contributing to open-source projects, or mentoring aspiring cloud engineers."
                </p>
            </div>
        </div>
    }
}

#[component]
fn Certifications(revealed: Signal<bool>) -> impl IntoView {
    view! {
        <div class="glassmorphism rounded-lg p-8">
            <h3 class="text-2xl font-orbitron font-bold text-cyber-magenta mb-6 flex items-center gap-3">
                <Glyph icon=Icon::Award />
                "Certifications"
            </h3>
            <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                {CERTIFICATIONS
                    .iter()
                    .enumerate()
                    .map(|(index, cert)| {
                        view! {
                            <div
                                class=move || {
                                    format!(
                                        "{} bg-black/50 rounded-lg p-4 border border-cyber-blue/30 hover:border-cyber-blue transition-colors",
                                        Motion::Scale.classes(revealed.get()),
                                    )
                                }
                                style=Stagger::ITEMS.style(index)
                            >
                                <div class="text-cyber-blue font-tech text-sm">{*cert}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn SkillBar(skill: &'static Skill, index: usize, revealed: Signal<bool>) -> impl IntoView {
    let accent = skill.accent;
    let level = skill.level;
    let fill = move || {
        let width = if revealed.get() { level } else { 0 };
        format!(
            "width: {width}%; transition-delay: {}ms; {}",
            Stagger::SKILL_BARS.delay(index).as_millis(),
            accent.bar_gradient(),
        )
    };

    view! {
        <div
            class=move || format!("{} space-y-2", Motion::Left.classes(revealed.get()))
            style=Stagger::ITEMS.style(index)
        >
            <div class="flex items-center justify-between">
                <div class="flex items-center gap-3">
                    <Glyph icon=skill.icon class=accent.text_class() />
                    <span class="font-tech text-white">{skill.name}</span>
                </div>
                <span class=format!("{} font-orbitron font-bold", accent.text_class())>
                    {format!("{level}%")}
                </span>
            </div>
            <div class="relative h-2 bg-gray-800 rounded-full overflow-hidden">
                <div class="skill-fill h-full rounded-full relative" style=fill>
                    <div class="absolute inset-0 bg-gradient-to-r from-transparent to-white opacity-20 animate-pulse"></div>
                </div>
            </div>
        </div>
    }
}
