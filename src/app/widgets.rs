use leptos::prelude::*;

use crate::content::{Icon, SectionTitle};

#[component]
pub fn Glyph(icon: Icon, #[prop(optional)] class: &'static str) -> impl IntoView {
    view! { <i class=format!("{} {class}", icon.class()) aria-hidden="true"></i> }
}

/// Two-tone section title with the gradient rule and blurb underneath.
#[component]
pub fn SectionHeading(title: SectionTitle) -> impl IntoView {
    view! {
        <h2 class="text-4xl md:text-5xl font-orbitron font-bold mb-4">
            <span class=title.lead_class>{title.lead}</span>
            " "
            <span class=title.tail_class>{title.tail}</span>
        </h2>
        <div class=format!("w-24 h-1 bg-gradient-to-r {} mx-auto mb-8", title.rule)></div>
        <p class="text-xl text-gray-300 font-tech max-w-3xl mx-auto">{title.blurb}</p>
    }
}
