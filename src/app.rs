mod components;
mod contact;
mod footer;
mod hero;
mod nav;
mod resume;
mod reveal;
mod showcase;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::PROFILE;
use crate::theme::Theme;

use contact::ContactSection;
use footer::Footer;
use hero::{About, Hero};
use nav::{use_scroll_spy, Navbar};
use resume::{EducationSection, ExperienceSection, SkillsSection};
use showcase::{AchievementsSection, InterestsSection, ProjectsSection, PublicationsSection};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="scroll-smooth">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
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
        <Title formatter=|title| format!("{} - {title}", PROFILE.name) />
        <Meta name="description" content=PROFILE.role />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

/// The whole portfolio: one scrolling page of sections.
#[component]
fn HomePage() -> impl IntoView {
    let (theme, set_theme) = signal(Theme::default());
    let active = use_scroll_spy();

    view! {
        <Title text="Portfolio" />
        <div class=move || {
            format!("min-h-screen transition-colors duration-300 {}", theme.get().page_class())
        }>
            <Navbar theme set_theme active />
            <Hero theme />
            <About theme />
            <ExperienceSection theme />
            <AchievementsSection theme />
            <SkillsSection theme />
            <ProjectsSection theme />
            <EducationSection theme />
            <InterestsSection theme />
            <PublicationsSection theme />
            <ContactSection theme />
            <Footer theme />
        </div>
    }
}
