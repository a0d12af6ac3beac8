use leptos::{html, prelude::*};

use super::{
    motion::use_reveal,
    widgets::{Glyph, SectionHeading},
};
use crate::{
    content::{Icon, Service, SERVICES, SERVICES_PITCH, SERVICES_TITLE},
    reveal::{Motion, Stagger},
};

#[component]
pub fn Services() -> impl IntoView {
    let root = NodeRef::<html::Div>::new();
    let revealed = use_reveal(root, "services");
    let staged = move |motion: Motion, extra: &'static str| {
        move || format!("{} {extra}", motion.classes(revealed.get()))
    };

    view! {
        <section id="services" class="py-20 bg-gradient-to-b from-midnight to-black">
            <div class="container mx-auto px-6">
                <div node_ref=root class="max-w-7xl mx-auto">
                    <div class=staged(Motion::Up, "text-center mb-16")>
                        <SectionHeading title=SERVICES_TITLE />
                    </div>

                    <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                        {SERVICES
                            .iter()
                            .enumerate()
                            .map(|(index, service)| view! { <ServiceCard service index revealed /> })
                            .collect_view()}
                    </div>

                    <div class=staged(Motion::Up, "text-center mt-16") style="transition-delay: 800ms">
                        <div class="glassmorphism rounded-lg p-8 max-w-2xl mx-auto">
                            <h3 class="text-2xl font-orbitron font-bold text-white mb-4">
                                "Ready to Transform Your Infrastructure?"
                            </h3>
                            <p class="text-gray-300 font-tech mb-6">
                                {SERVICES_PITCH}
                            </p>
                            <a
                                href="#contact"
                                class="inline-block px-8 py-3 bg-gradient-to-r from-cyber-blue to-cyber-magenta text-black font-orbitron font-bold rounded-lg hover-glow-blue transition-all duration-300"
                            >
                                "Start Your Project"
                            </a>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ServiceCard(service: &'static Service, index: usize, revealed: Signal<bool>) -> impl IntoView {
    let accent = service.accent;

    view! {
        <div
            class=move || {
                format!(
                    "{} group glassmorphism rounded-lg p-8 border border-gray-800 hover:border-white/40 transition-all duration-300 hover:-translate-y-2 flex flex-col",
                    Motion::Up.classes(revealed.get()),
                )
            }
            style=Stagger::ITEMS.style(index)
        >
            <div class=format!("text-4xl mb-6 {}", accent.text_class())>
                <Glyph icon=service.icon class="hover-spin" />
            </div>
            <h3 class="text-xl font-orbitron font-bold text-white mb-4">{service.title}</h3>
            <p class="text-gray-300 font-tech text-sm mb-6 leading-relaxed">{service.description}</p>

            <ul class="space-y-2 mb-8 flex-1">
                {service
                    .features
                    .iter()
                    .map(|feature| {
                        view! {
                            <li class="flex items-center gap-2 text-sm font-tech text-gray-400">
                                <span class=format!("w-1.5 h-1.5 rounded-full {}", accent.bg_class())></span>
                                {*feature}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>

            <div class="flex items-center justify-between pt-6 border-t border-gray-800">
                <span class=format!("font-orbitron font-bold {}", accent.text_class())>{service.price}</span>
                <a
                    href="#contact"
                    class=format!(
                        "flex items-center gap-2 px-4 py-2 rounded border text-sm font-tech transition-colors hover:bg-white/10 {} {}",
                        accent.border_class(),
                        accent.text_class(),
                    )
                >
                    <Glyph icon=Icon::Rocket />
                    "Get Started"
                </a>
            </div>
        </div>
    }
}
