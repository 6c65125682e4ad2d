use leptos::prelude::*;

use super::components::{themed, FallbackImg, SectionHeading, SocialLinks};
use super::nav::scroll_to_section;
use super::reveal::RevealSection;
use crate::content::{ABOUT, PROFILE, SOCIALS};
use crate::scroll::SectionId;
use crate::theme::Theme;

#[component]
pub fn Hero(#[prop(into)] theme: Signal<Theme>) -> impl IntoView {
    let blob = move |position: &'static str, dark: &'static str, light: &'static str| {
        move || {
            format!(
                "absolute {position} rounded-full bg-gradient-to-r {} blur-3xl animate-drift",
                theme.get().pick(dark, light),
            )
        }
    };

    view! {
        <RevealSection
            id=SectionId::Home
            class="min-h-screen flex items-center pt-16 relative overflow-hidden".to_string()
        >
            <div class="absolute inset-0 overflow-hidden pointer-events-none animate-fade-in">
                <div class=blob(
                    "top-1/4 left-1/4 w-64 h-64",
                    "from-indigo-900/30 to-purple-900/30",
                    "from-indigo-200/50 to-purple-200/50",
                ) />
                <div class=blob(
                    "top-1/3 right-1/4 w-80 h-80",
                    "from-teal-900/30 to-cyan-900/30",
                    "from-teal-200/50 to-cyan-200/50",
                ) />
                <div class=blob(
                    "bottom-1/4 right-1/3 w-72 h-72",
                    "from-rose-900/30 to-pink-900/30",
                    "from-rose-200/50 to-pink-200/50",
                ) />
            </div>

            <div class="max-w-5xl mx-auto px-4 sm:px-6 lg:px-8 grid grid-cols-1 lg:grid-cols-2 gap-8 items-center relative z-10">
                <div class="lg:pr-8 animate-slide-right">
                    <h2 class=move || {
                        format!(
                            "text-lg {} font-semibold mb-2",
                            theme.get().pick("text-indigo-400", "text-indigo-600"),
                        )
                    }>"Hello, I'm"</h2>
                    <h1 class="text-3xl sm:text-4xl lg:text-5xl font-bold mb-4 bg-gradient-to-r from-indigo-600 via-purple-500 to-pink-500 bg-clip-text text-transparent">
                        {PROFILE.name}
                    </h1>
                    <p class=move || format!("text-lg sm:text-xl {} mb-6", theme.get().muted_text())>
                        "Founder and Lead of "
                        <span class="font-semibold bg-gradient-to-r from-purple-600 to-pink-500 bg-clip-text text-transparent">
                            {PROFILE.organization}
                        </span>
                        ", dedicated to mentoring and uplifting peers through tech leadership."
                    </p>
                    <div class="flex space-x-4 mb-6">
                        <SocialLinks links=&SOCIALS theme />
                    </div>
                    <button
                        on:click=move |_| scroll_to_section(SectionId::Contact)
                        class="px-8 py-3 bg-gradient-to-r from-indigo-600 via-purple-500 to-pink-500 text-white rounded-xl font-medium shadow-lg hover:shadow-xl hover:scale-105 active:scale-95 transition-all"
                    >
                        "Get In Touch"
                    </button>
                </div>
                <div class="flex justify-center animate-slide-left">
                    <div class="relative w-80 h-80 rounded-full overflow-hidden border-4 border-white shadow-2xl">
                        <FallbackImg
                            src=PROFILE.photo
                            alt="Profile"
                            class="w-full h-full object-cover"
                        />
                        <div class=move || {
                            format!(
                                "absolute inset-0 {} rounded-full",
                                theme.get().pick("bg-purple-900/20", "bg-blue-500/10"),
                            )
                        } />
                    </div>
                </div>
            </div>

            <button
                class="absolute bottom-8 left-1/2 transform -translate-x-1/2 cursor-pointer animate-bounce"
                aria-label="Scroll to about"
                on:click=move |_| scroll_to_section(SectionId::About)
            >
                <i class=move || {
                    format!(
                        "extra-chevron-down text-3xl {}",
                        theme.get().pick("text-purple-400", "text-purple-600"),
                    )
                } />
            </button>
        </RevealSection>
    }
}

#[component]
pub fn About(#[prop(into)] theme: Signal<Theme>) -> impl IntoView {
    let class = themed(
        theme,
        "py-20",
        "bg-gradient-to-b from-gray-800 via-gray-900 to-gray-800",
        "bg-gradient-to-b from-gray-50 via-white to-gray-50",
    );

    view! {
        <RevealSection id=SectionId::About class>
            <div class="max-w-4xl mx-auto px-6">
                <SectionHeading id=SectionId::About />
                <div class=themed(
                    theme,
                    "text-lg space-y-6 text-center",
                    "text-gray-300",
                    "text-gray-700",
                )>
                    {ABOUT.into_iter().map(|p| view! { <p>{p}</p> }).collect_view()}
                </div>
            </div>
        </RevealSection>
    }
}
