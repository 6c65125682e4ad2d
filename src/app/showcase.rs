use leptos::prelude::*;

use super::components::{themed, FallbackImg, SectionHeading};
use super::reveal::RevealSection;
use crate::content::{
    Achievement, Interest, Project, Publication, ACHIEVEMENTS, INTERESTS, PROJECTS, PUBLICATIONS,
};
use crate::scroll::SectionId;
use crate::theme::Theme;

const LINK_CLASSES: (&str, &str) = (
    "text-purple-400 hover:text-purple-300",
    "text-purple-600 hover:text-purple-700",
);

#[component]
pub fn AchievementsSection(#[prop(into)] theme: Signal<Theme>) -> impl IntoView {
    let class = themed(
        theme,
        "py-16",
        "bg-gradient-to-br from-gray-900 via-purple-900 to-gray-900",
        "bg-gradient-to-br from-indigo-50 via-purple-50 to-pink-50",
    );

    view! {
        <RevealSection id=SectionId::Achievements class>
            <div class="max-w-6xl mx-auto px-6">
                <SectionHeading
                    id=SectionId::Achievements
                    gradient="from-violet-600 via-purple-600 to-indigo-600"
                />
                <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                    {ACHIEVEMENTS
                        .iter()
                        .map(|achievement| view! { <AchievementCard achievement theme /> })
                        .collect_view()}
                </div>
            </div>
        </RevealSection>
    }
}

#[component]
fn AchievementCard(achievement: &'static Achievement, theme: Signal<Theme>) -> impl IntoView {
    let (dark_link, light_link) = LINK_CLASSES;

    view! {
        <div class=themed(
            theme,
            "bg-gradient-to-br rounded-xl p-6 shadow-lg hover:shadow-xl hover:-translate-y-1 transition-all duration-300",
            "from-gray-800 to-gray-900",
            "from-white to-gray-50",
        )>
            <div class="flex items-center gap-4 mb-4">
                <div class=themed(theme, "p-3 rounded-lg", "bg-purple-900", "bg-purple-100")>
                    <i class=format!("{} text-2xl", achievement.icon) />
                </div>
                <h3 class=move || {
                    format!("text-xl font-bold {}", theme.get().heading_text())
                }>{achievement.title}</h3>
            </div>
            <p class=move || format!("{} mb-4", theme.get().muted_text())>
                {achievement.description}
            </p>
            {achievement
                .link
                .map(|href| {
                    view! {
                        <a
                            href=href
                            target="_blank"
                            rel="noopener noreferrer"
                            class=themed(
                                theme,
                                "inline-flex items-center gap-2 transition-colors",
                                dark_link,
                                light_link,
                            )
                        >
                            "View Achievement"
                            <i class="extra-arrow-right" />
                        </a>
                    }
                })}
        </div>
    }
}

#[component]
pub fn ProjectsSection(#[prop(into)] theme: Signal<Theme>) -> impl IntoView {
    let class = themed(
        theme,
        "py-16",
        "bg-gradient-to-br from-gray-800 via-gray-900 to-gray-800",
        "bg-gradient-to-br from-gray-50 via-white to-gray-50",
    );

    view! {
        <RevealSection id=SectionId::Projects class>
            <div class="max-w-7xl mx-auto px-6">
                <SectionHeading
                    id=SectionId::Projects
                    gradient="from-violet-600 via-purple-600 to-indigo-600"
                />
                <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                    {PROJECTS
                        .iter()
                        .map(|project| view! { <ProjectCard project theme /> })
                        .collect_view()}
                </div>
            </div>
        </RevealSection>
    }
}

#[component]
fn ProjectCard(project: &'static Project, theme: Signal<Theme>) -> impl IntoView {
    let (dark_link, light_link) = LINK_CLASSES;

    view! {
        <div class=themed(
            theme,
            "rounded-xl overflow-hidden border shadow-lg group h-full flex flex-col hover:-translate-y-1 transition-transform",
            "bg-gray-700 border-gray-600",
            "bg-white border-gray-100",
        )>
            <div class="relative aspect-video overflow-hidden">
                <FallbackImg
                    src=project.image
                    alt=project.title
                    class="w-full h-full object-cover transform group-hover:scale-105 transition-transform duration-300"
                    lazy=true
                />
                <div class="absolute inset-0 bg-gradient-to-t from-black/50 to-transparent"></div>
            </div>
            <div class="p-6 flex-grow flex flex-col">
                <div class="mb-auto">
                    <h3 class=move || {
                        format!("text-xl font-bold mb-2 {}", theme.get().heading_text())
                    }>{project.title}</h3>
                    <p class=move || format!("{} mb-4", theme.get().muted_text())>
                        {project.description}
                    </p>
                </div>
                <div>
                    <div class="flex flex-wrap gap-2 mb-4">
                        {project
                            .tags
                            .iter()
                            .map(|tag| {
                                view! {
                                    <span class=themed(
                                        theme,
                                        "px-2 py-1 rounded-full text-xs",
                                        "bg-gray-600 text-purple-400",
                                        "bg-purple-100 text-purple-800",
                                    )>{*tag}</span>
                                }
                            })
                            .collect_view()}
                    </div>
                    <a
                        href=project.link
                        target="_blank"
                        rel="noopener noreferrer"
                        class=themed(theme, "inline-flex items-center text-sm", dark_link, light_link)
                    >
                        "View Project"
                        <i class="extra-external-link ml-1" />
                    </a>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn InterestsSection(#[prop(into)] theme: Signal<Theme>) -> impl IntoView {
    let class = themed(
        theme,
        "py-20",
        "bg-gradient-to-b from-gray-900 via-gray-800 to-gray-900",
        "bg-gradient-to-b from-white via-gray-50 to-gray-50",
    );

    view! {
        <RevealSection id=SectionId::Interests class>
            <div class="max-w-4xl mx-auto px-6">
                <SectionHeading id=SectionId::Interests />
                <div class="grid grid-cols-2 sm:grid-cols-3 md:grid-cols-4 gap-4">
                    {INTERESTS
                        .iter()
                        .map(|interest| view! { <InterestCard interest theme /> })
                        .collect_view()}
                </div>
            </div>
        </RevealSection>
    }
}

#[component]
fn InterestCard(interest: &'static Interest, theme: Signal<Theme>) -> impl IntoView {
    view! {
        <div class=themed(
            theme,
            "p-4 rounded-lg border shadow-sm text-center hover:scale-105 transition-transform",
            "bg-gray-700 border-gray-600",
            "bg-white border-gray-100",
        )>
            <div class=themed(
                theme,
                "p-3 rounded-full mb-2 mx-auto w-fit",
                "bg-gray-600 text-purple-400",
                "bg-purple-100 text-purple-600",
            )>
                <i class=interest.icon />
            </div>
            <span class=themed(theme, "font-medium", "text-white", "text-gray-800")>
                {interest.title}
            </span>
        </div>
    }
}

#[component]
pub fn PublicationsSection(#[prop(into)] theme: Signal<Theme>) -> impl IntoView {
    let class = themed(
        theme,
        "py-20",
        "bg-gradient-to-b from-gray-800 via-gray-900 to-gray-800",
        "bg-gradient-to-b from-gray-50 via-white to-gray-50",
    );

    view! {
        <RevealSection id=SectionId::Publications class>
            <div class="max-w-6xl mx-auto px-6">
                <SectionHeading id=SectionId::Publications gradient="from-purple-600 to-blue-500" />
                <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                    {PUBLICATIONS
                        .iter()
                        .map(|publication| view! { <PublicationCard publication theme /> })
                        .collect_view()}
                </div>
            </div>
        </RevealSection>
    }
}

#[component]
fn PublicationCard(publication: &'static Publication, theme: Signal<Theme>) -> impl IntoView {
    view! {
        <div class=themed(
            theme,
            "p-6 rounded-xl border shadow-lg relative overflow-hidden backdrop-blur-sm",
            "bg-gray-700/50 border-gray-600",
            "bg-white/50 border-gray-100",
        )>
            <div class="absolute inset-0 bg-gradient-to-r from-indigo-500 via-purple-500 to-pink-500 opacity-5"></div>
            <div class="relative z-10">
                <h3 class=move || {
                    format!("text-xl font-bold mb-2 {}", theme.get().heading_text())
                }>{publication.title}</h3>
                <p class=move || theme.get().muted_text()>{publication.description}</p>
            </div>
        </div>
    }
}
