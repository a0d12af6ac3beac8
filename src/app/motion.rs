use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

use crate::reveal::RevealTrigger;

/// Becomes `true` the first time `target` scrolls into view and stays `true`.
pub fn use_reveal(target: NodeRef<html::Div>, section: &'static str) -> Signal<bool> {
    let visible = use_element_visibility(target);
    let trigger = RwSignal::new(RevealTrigger::new());

    Effect::new(move |_| {
        let visible = visible.get();
        if !visible || trigger.with_untracked(RevealTrigger::is_triggered) {
            return;
        }
        let fired = trigger.try_update(|t| t.observe(visible)).unwrap_or(false);
        if fired {
            log::debug!("{section} section revealed");
        }
    });

    Signal::derive(move || trigger.with(RevealTrigger::is_triggered))
}
