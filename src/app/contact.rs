use leptos::{
    ev::{MouseEvent, SubmitEvent},
    html,
    prelude::*,
};

use super::{
    motion::use_reveal,
    timers::BrowserScheduler,
    widgets::{Glyph, SectionHeading},
};
use crate::{
    contact::{ContactForm, Field, MessageRelay, Notice, SimulatedRelay, SubmitState},
    content::{Icon, CONTACT_INFO, CONTACT_TITLE, SOCIAL_LINKS},
    reveal::Motion,
    schedule::TaskSlot,
    typewriter::{play_terminal, TerminalScript},
};

#[component]
pub fn Contact() -> impl IntoView {
    let root = NodeRef::<html::Div>::new();
    let revealed = use_reveal(root, "contact");
    let staged = move |motion: Motion, extra: &'static str| {
        move || format!("{} {extra}", motion.classes(revealed.get()))
    };

    view! {
        <section id="contact" class="py-20 bg-gradient-to-b from-black to-midnight">
            <div class="container mx-auto px-6">
                <div node_ref=root class="max-w-6xl mx-auto">
                    <div class=staged(Motion::Up, "text-center mb-16")>
                        <SectionHeading title=CONTACT_TITLE />
                    </div>

                    <div class="grid lg:grid-cols-2 gap-12">
                        <div class=staged(Motion::Left, "space-y-8") style="transition-delay: 200ms">
                            <Terminal revealed />
                            <ContactInfo />
                            <Socials />
                        </div>
                        <div class=staged(Motion::Right, "") style="transition-delay: 400ms">
                            <ContactFormPanel />
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Prints the contact script once the section has been revealed.
#[component]
fn Terminal(revealed: Signal<bool>) -> impl IntoView {
    let (output, set_output) = signal(String::new());
    let typing = TaskSlot::new();

    Effect::new(move |_| {
        if revealed.get() {
            typing.start_if_empty(|| {
                play_terminal(&BrowserScheduler, TerminalScript::contact(), move |frame| {
                    set_output.set(frame.to_string())
                })
            });
        }
    });

    view! {
        <div class="glassmorphism rounded-lg overflow-hidden border border-cyber-green/30">
            <div class="flex items-center gap-2 px-4 py-2 bg-black/70 border-b border-cyber-green/30">
                <span class="w-3 h-3 rounded-full bg-red-500"></span>
                <span class="w-3 h-3 rounded-full bg-yellow-500"></span>
                <span class="w-3 h-3 rounded-full bg-green-500"></span>
                <span class="ml-2 text-xs font-tech text-gray-400 flex items-center gap-1">
                    <Glyph icon=Icon::Terminal />
                    "contact.sh"
                </span>
            </div>
            <pre class="p-6 min-h-[8rem] font-tech text-sm text-cyber-green whitespace-pre-wrap">
                {move || output.get()}
                <span class="terminal-cursor"></span>
            </pre>
        </div>
    }
}

#[component]
fn ContactInfo() -> impl IntoView {
    view! {
        <div class="space-y-4">
            {CONTACT_INFO
                .iter()
                .map(|item| {
                    let accent = item.accent;
                    view! {
                        <a
                            href=item.href
                            class="flex items-center gap-4 glassmorphism rounded-lg p-4 border border-transparent hover:border-cyber-blue/40 transition-colors"
                        >
                            <div class=format!("p-3 rounded-lg bg-black/50 text-2xl {}", accent.text_class())>
                                <Glyph icon=item.icon />
                            </div>
                            <div>
                                <div class="text-xs font-tech text-gray-400 uppercase tracking-wider">
                                    {item.label}
                                </div>
                                <div class="font-tech text-white">{item.value}</div>
                            </div>
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn Socials() -> impl IntoView {
    view! {
        <div class="flex gap-4">
            {SOCIAL_LINKS
                .iter()
                .map(|link| {
                    let accent = link.accent;
                    view! {
                        <a
                            href=link.href
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label=link.label
                            class=format!(
                                "p-3 glassmorphism rounded-lg border text-2xl transition-transform duration-300 hover:-translate-y-1 {} {}",
                                accent.border_class(),
                                accent.text_class(),
                            )
                            style=accent.glow(10, 0.3)
                        >
                            <Glyph icon=link.icon />
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn ContactFormPanel() -> impl IntoView {
    let form = RwSignal::new(ContactForm::new());
    let notice = RwSignal::new(None::<Notice>);
    let delivery = TaskSlot::new();
    let busy = Signal::derive(move || form.with(ContactForm::is_busy));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(submitted) = form.try_update(ContactForm::submit) else {
            return;
        };
        let message = match submitted {
            Ok(message) => message,
            Err(err) => {
                log::debug!("contact submission rejected: {err}");
                return;
            }
        };
        notice.set(None);
        let task = SimulatedRelay::new(BrowserScheduler).deliver(
            message,
            Box::new(move |outcome| {
                delivery.release();
                if let Some(settled) = form.try_update(|f| f.settle(outcome)).flatten() {
                    _ = notice.try_set(Some(settled));
                }
            }),
        );
        delivery.replace(task);
    };

    let dismiss = move |_: MouseEvent| {
        form.update(ContactForm::retry);
        notice.set(None);
    };

    view! {
        <div class="glassmorphism rounded-lg p-8 border border-cyber-blue/30">
            <h3 class="text-2xl font-orbitron font-bold text-cyber-blue mb-6 flex items-center gap-3">
                <Glyph icon=Icon::MessageSquare />
                "Send a Message"
            </h3>

            <form class="space-y-6" on:submit=on_submit>
                <div class="grid sm:grid-cols-2 gap-6">
                    <FieldInput field=Field::Name form icon=Icon::User />
                    <FieldInput field=Field::Email form icon=Icon::Mail kind="email" />
                </div>
                <div class="grid sm:grid-cols-2 gap-6">
                    <FieldInput field=Field::Company form icon=Icon::Building />
                    <FieldInput field=Field::Subject form icon=Icon::Target />
                </div>
                <textarea
                    name=Field::Message.key()
                    placeholder=Field::Message.placeholder()
                    rows="6"
                    required=Field::Message.is_required()
                    class="w-full bg-black/50 border border-cyber-blue/30 rounded-lg px-4 py-3 text-white font-tech focus:border-cyber-blue focus:outline-none transition-colors resize-none"
                    prop:value=move || form.with(|f| f.value(Field::Message).to_string())
                    on:input=move |ev| {
                        form.update(|f| f.set_field(Field::Message, event_target_value(&ev)))
                    }
                ></textarea>

                <button
                    type="submit"
                    disabled=move || busy.get()
                    class="w-full flex items-center justify-center gap-3 px-8 py-4 bg-gradient-to-r from-cyber-blue to-cyber-magenta text-black font-orbitron font-bold rounded-lg hover-glow-blue transition-all duration-300 disabled:opacity-60 disabled:cursor-not-allowed"
                >
                    <Show
                        when=move || busy.get()
                        fallback=|| {
                            view! {
                                <Glyph icon=Icon::Send />
                                "Send Message"
                            }
                        }
                    >
                        <span class="w-5 h-5 border-2 border-black border-t-transparent rounded-full animate-spin"></span>
                        "Transmitting..."
                    </Show>
                </button>
            </form>

            {move || {
                notice
                    .get()
                    .map(|notice| {
                        let (tone, icon) = if notice.is_success() {
                            ("border-cyber-green text-cyber-green", Icon::Heart)
                        } else {
                            ("border-cyber-magenta text-cyber-magenta", Icon::X)
                        };
                        view! {
                            <div
                                role="status"
                                class=format!(
                                    "mt-6 flex items-start gap-3 rounded-lg border bg-black/70 p-4 font-tech text-sm {tone}",
                                )
                            >
                                <Glyph icon class="mt-0.5" />
                                <p class="flex-1">{notice.text()}</p>
                                <button
                                    type="button"
                                    aria-label="Dismiss"
                                    class="text-gray-400 hover:text-white"
                                    on:click=dismiss
                                >
                                    <Glyph icon=Icon::X />
                                </button>
                            </div>
                        }
                    })
            }}

            <Show when=move || form.with(|f| matches!(f.state(), SubmitState::Failed(_)))>
                <p class="mt-4 text-xs font-tech text-gray-400">
                    "Your draft has been kept. Dismiss the notice to send it again."
                </p>
            </Show>

            <p class="mt-6 text-xs font-tech text-gray-500 text-center">
                "Typical response time: within 24 hours"
            </p>
        </div>
    }
}

#[component]
fn FieldInput(
    field: Field,
    form: RwSignal<ContactForm>,
    icon: Icon,
    #[prop(default = "text")] kind: &'static str,
) -> impl IntoView {
    view! {
        <label class="relative block">
            <span class="sr-only">{field.placeholder()}</span>
            <Glyph icon class="absolute left-3 top-1/2 -translate-y-1/2 text-cyber-blue/60" />
            <input
                type=kind
                name=field.key()
                placeholder=field.placeholder()
                required=field.is_required()
                class="w-full bg-black/50 border border-cyber-blue/30 rounded-lg pl-10 pr-4 py-3 text-white font-tech focus:border-cyber-blue focus:outline-none transition-colors"
                prop:value=move || form.with(|f| f.value(field).to_string())
                on:input=move |ev| form.update(|f| f.set_field(field, event_target_value(&ev)))
            />
        </label>
    }
}
