use leptos::prelude::*;

use super::{timers::BrowserScheduler, widgets::Glyph};
use crate::{
    content::{FloatingIcon, Icon, HERO_ICONS, OWNER_INITIALS, OWNER_NAME},
    schedule::TaskSlot,
    typewriter::{play_typewriter, Typewriter},
};

#[component]
pub fn Hero() -> impl IntoView {
    let (title, set_title) = signal(String::new());
    let typing = TaskSlot::new();

    // client only; the server renders the empty frame
    Effect::new(move |_| {
        let task = play_typewriter(&BrowserScheduler, Typewriter::hero(), move |frame| {
            set_title.set(frame.to_string())
        });
        typing.replace(task);
    });

    view! {
        <section
            id="home"
            class="relative min-h-screen flex items-center justify-center overflow-hidden"
        >
            <div class="particles absolute inset-0 pointer-events-none"></div>
            <div class="absolute inset-0 bg-gradient-to-b from-midnight to-black opacity-50">
                <div class="absolute inset-0 hero-grid"></div>
            </div>

            <div class="relative z-10 text-center px-6">
                <div class="max-w-4xl mx-auto intro intro-up">
                    <div class="w-32 h-32 mx-auto mb-8 relative intro intro-spin" style="animation-delay: 200ms">
                        <div class="w-full h-full rounded-full border-4 border-cyber-blue animate-glow bg-gradient-to-r from-cyber-blue to-cyber-magenta flex items-center justify-center text-4xl font-bold">
                            {OWNER_INITIALS}
                        </div>
                        <div class="absolute inset-0 rounded-full border-4 border-cyber-magenta animate-pulse opacity-50"></div>
                    </div>

                    <h1
                        class="text-2xl md:text-3xl font-tech text-cyber-green mb-4 intro"
                        style="animation-delay: 500ms"
                    >
                        {format!("Hello, I'm {OWNER_NAME}")}
                    </h1>

                    <div class="mb-8">
                        <h2
                            class="glitch text-4xl md:text-6xl font-orbitron font-bold mb-4 min-h-[1.2em]"
                            data-text=move || title.get()
                        >
                            {move || title.get()}
                            <span class="terminal-cursor"></span>
                        </h2>
                    </div>

                    <p
                        class="text-lg md:text-xl text-gray-300 mb-12 max-w-2xl mx-auto font-tech leading-relaxed intro intro-up"
                        style="animation-delay: 800ms"
                    >
                        "Architecting scalable cloud infrastructure and automating deployment pipelines to accelerate digital transformation in the cyberpunk era."
                    </p>

                    <div
                        class="flex flex-col sm:flex-row gap-4 justify-center mb-16 intro intro-up"
                        style="animation-delay: 1000ms"
                    >
                        <a
                            href="#projects"
                            class="px-8 py-3 bg-transparent border-2 border-cyber-blue text-cyber-blue hover:bg-cyber-blue hover:text-black hover-glow-blue transition-all duration-300 font-orbitron font-bold"
                        >
                            "View Projects"
                        </a>
                        <button
                            type="button"
                            class="px-8 py-3 bg-transparent border-2 border-cyber-magenta text-cyber-magenta hover:bg-cyber-magenta hover:text-black hover-glow-magenta transition-all duration-300 font-orbitron font-bold flex items-center justify-center gap-2"
                        >
                            <Glyph icon=Icon::Download />
                            "Download Resume"
                        </button>
                    </div>

                    <div class="flex justify-center gap-6 mb-16 intro" style="animation-delay: 1200ms">
                        <a
                            href="https://github.com"
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label="GitHub"
                            class="text-cyber-blue hover:text-white transition-colors text-3xl hover-spin"
                        >
                            <Glyph icon=Icon::Github />
                        </a>
                        <a
                            href="https://linkedin.com"
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label="LinkedIn"
                            class="text-cyber-blue hover:text-white transition-colors text-3xl hover-spin-reverse"
                        >
                            <Glyph icon=Icon::Linkedin />
                        </a>
                    </div>
                </div>

                <FloatingIcons />
            </div>

            <a
                href="#about"
                aria-label="Scroll to about"
                class="absolute bottom-8 left-1/2 -translate-x-1/2 intro"
                style="animation-delay: 1500ms"
            >
                <div class="w-6 h-10 border-2 border-cyber-blue rounded-full flex justify-center animate-bob">
                    <div class="w-1 h-3 bg-cyber-blue rounded-full mt-2 animate-bob-inner"></div>
                </div>
            </a>
        </section>
    }
}

#[component]
fn FloatingIcons() -> impl IntoView {
    view! {
        <div class="absolute inset-0 pointer-events-none">
            {HERO_ICONS
                .iter()
                .enumerate()
                .map(|(index, floating)| {
                    let (left, top) = FloatingIcon::position(index);
                    view! {
                        <div
                            class=format!("absolute floating-icon {}", floating.accent.text_class())
                            style=format!(
                                "left: {left}%; top: {top}%; animation-delay: {}s",
                                floating.delay_secs,
                            )
                        >
                            <Glyph icon=floating.icon class="text-3xl animate-float" />
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
