use leptos::prelude::*;

use super::widgets::Glyph;
use crate::content::{Icon, BRAND, NAV_LINKS};

#[component]
pub fn Header() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    let links = move |mobile: bool| {
        NAV_LINKS
            .iter()
            .map(|link| {
                let class = if mobile {
                    "block py-3 px-2 border-b border-gray-800 text-gray-300 hover:text-cyber-blue transition-colors font-orbitron"
                } else {
                    "text-gray-300 hover:text-cyber-blue transition-colors font-orbitron text-sm tracking-wide"
                };
                view! {
                    <a href=link.anchor class=class on:click=move |_| set_menu_open.set(false)>
                        {link.label}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <header class="fixed top-0 inset-x-0 z-50 bg-black/70 backdrop-blur-md border-b border-cyber-blue/20">
            <div class="container mx-auto px-6 py-4 flex items-center justify-between">
                <a href="#home" class="flex items-center gap-2 text-xl font-orbitron font-bold">
                    <Glyph icon=Icon::Terminal class="text-cyber-green" />
                    <span class="neon-blue">{BRAND}</span>
                </a>
                <nav class="hidden md:flex items-center gap-8">{links(false)}</nav>
                <button
                    class="md:hidden text-cyber-blue text-2xl"
                    aria-label="Toggle navigation"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || {
                        let icon = if menu_open.get() { Icon::X } else { Icon::Menu };
                        view! { <Glyph icon /> }
                    }}
                </button>
            </div>
            <Show when=move || menu_open.get()>
                <nav class="md:hidden glassmorphism px-6 pb-4">{links(true)}</nav>
            </Show>
        </header>
    }
}
