use leptos::prelude::*;

use super::widgets::Glyph;
use crate::content::{
    quick_links, Icon, BRAND, EMAIL, FOOTER_SOCIAL_LINKS, LOCATION, PHONE_DISPLAY, PHONE_HREF,
};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="relative bg-black border-t border-cyber-blue/20 pt-16 pb-8">
            <div class="container mx-auto px-6">
                <div class="grid md:grid-cols-3 gap-12 mb-12">
                    <div class="space-y-4">
                        <a href="#home" class="flex items-center gap-2 text-2xl font-orbitron font-bold">
                            <Glyph icon=Icon::Terminal class="text-cyber-green" />
                            <span class="neon-blue">{BRAND}</span>
                        </a>
                        <p class="text-gray-400 font-tech text-sm leading-relaxed">
                            "Building the future of cloud infrastructure, one deployment at a time. Specializing in AWS, automation, and scalable DevOps solutions."
                        </p>
                        <div class="flex gap-4">
                            {FOOTER_SOCIAL_LINKS
                                .iter()
                                .map(|link| {
                                    let external = link.is_external();
                                    view! {
                                        <a
                                            href=link.href
                                            target=external.then_some("_blank")
                                            rel=external.then_some("noopener noreferrer")
                                            aria-label=link.label
                                            class=format!(
                                                "{} hover:text-white transition-colors text-xl",
                                                link.accent.text_class(),
                                            )
                                        >
                                            <Glyph icon=link.icon />
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div>
                        <h4 class="text-lg font-orbitron font-bold text-cyber-green mb-4">"Quick Links"</h4>
                        <ul class="space-y-2">
                            {quick_links()
                                .map(|link| {
                                    view! {
                                        <li>
                                            <a
                                                href=link.anchor
                                                class="text-gray-400 hover:text-cyber-blue transition-colors font-tech text-sm"
                                            >
                                                {link.label}
                                            </a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>

                    <div>
                        <h4 class="text-lg font-orbitron font-bold text-cyber-magenta mb-4">"Get In Touch"</h4>
                        <ul class="space-y-2 font-tech text-sm text-gray-400">
                            <li>
                                <a href=format!("mailto:{EMAIL}") class="hover:text-cyber-blue transition-colors">
                                    {EMAIL}
                                </a>
                            </li>
                            <li>
                                <a href=PHONE_HREF class="hover:text-cyber-blue transition-colors">
                                    {PHONE_DISPLAY}
                                </a>
                            </li>
                            <li>{LOCATION}</li>
                        </ul>
                    </div>
                </div>

                <div class="flex flex-col md:flex-row items-center justify-between gap-4 pt-8 border-t border-gray-800">
                    <p class="flex items-center gap-2 text-gray-500 font-tech text-sm">
                        {concat!("© ", env!("BUILD_YEAR"), " CyberDev Portfolio. Made with")}
                        <Glyph icon=Icon::Heart class="text-cyber-magenta animate-pulse" />
                        "and lots of ☕"
                    </p>
                    <a
                        href="#home"
                        class="px-4 py-2 border border-cyber-blue text-cyber-blue hover:bg-cyber-blue hover:text-black transition-all duration-300 font-tech text-sm rounded"
                    >
                        "Back to Top ↑"
                    </a>
                </div>
            </div>
        </footer>
    }
}
