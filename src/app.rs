mod about;
mod contact;
mod footer;
mod header;
mod hero;
mod journey;
mod motion;
mod projects;
mod services;
pub mod timers;
mod widgets;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use about::About;
use contact::Contact;
use footer::Footer;
use header::Header;
use hero::Hero;
use journey::Journey;
use projects::Projects;
use services::Services;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="preconnect" href="https://fonts.googleapis.com" />
                <link
                    rel="stylesheet"
                    href="https://fonts.googleapis.com/css2?family=Orbitron:wght@400;700;900&family=Share+Tech+Mono&display=swap"
                />
                <link
                    rel="stylesheet"
                    href="https://unpkg.com/lucide-static@0.460.0/font/lucide.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/cyberdev-portfolio.css" />
                <MetaTags />
            </head>
            <body class="bg-black text-white font-tech">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("CyberDev - {title}") />
        <Meta
            name="description"
            content="Alex Chen - AWS DevOps Engineer. Cloud architecture, CI/CD and infrastructure automation."
        />

        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=Portfolio />
            </Routes>
        </Router>
    }
}

/// The whole site: every section, mounted at once, in page order.
#[component]
fn Portfolio() -> impl IntoView {
    view! {
        <Title text="AWS DevOps Engineer" />
        <div class="min-h-screen bg-black text-white">
            <Header />
            <main>
                <Hero />
                <About />
                <Journey />
                <Projects />
                <Services />
                <Contact />
            </main>
            <Footer />
        </div>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Signal Lost" />
        <div class="min-h-screen flex flex-col items-center justify-center gap-6 text-center px-6">
            <h1 class="glitch text-5xl font-orbitron font-bold text-cyber-magenta" data-text="404">
                "404"
            </h1>
            <p class="text-gray-300">"This sector of the grid does not exist."</p>
            <a
                href="/"
                class="px-6 py-2 border-2 border-cyber-blue text-cyber-blue hover:bg-cyber-blue hover:text-black transition-all duration-300 font-orbitron font-bold"
            >
                "Return Home"
            </a>
        </div>
    }
}
