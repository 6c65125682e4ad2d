use leptos::prelude::*;

use super::components::{themed, SectionHeading};
use super::reveal::RevealSection;
use crate::content::{Experience, Skill, EDUCATION, EXPERIENCE, SKILLS};
use crate::scroll::SectionId;
use crate::theme::Theme;

#[component]
pub fn ExperienceSection(#[prop(into)] theme: Signal<Theme>) -> impl IntoView {
    let class = themed(
        theme,
        "py-20",
        "bg-gradient-to-b from-gray-900 via-gray-800 to-gray-900",
        "bg-gradient-to-b from-white via-gray-50 to-white",
    );

    view! {
        <RevealSection id=SectionId::Experience class>
            <div class="max-w-6xl mx-auto px-6">
                <SectionHeading id=SectionId::Experience gradient="from-purple-600 to-blue-500" />
                <div class="grid grid-cols-1 lg:grid-cols-3 gap-8">
                    {EXPERIENCE
                        .iter()
                        .map(|entry| view! { <ExperienceCard entry theme /> })
                        .collect_view()}
                </div>
            </div>
        </RevealSection>
    }
}

#[component]
fn ExperienceCard(entry: &'static Experience, theme: Signal<Theme>) -> impl IntoView {
    view! {
        <div class=themed(
            theme,
            "p-6 rounded-xl border shadow-lg relative overflow-hidden group hover:-translate-y-1 transition-transform",
            "bg-gray-700 border-gray-600",
            "bg-white border-gray-100",
        )>
            <div class="absolute inset-0 bg-gradient-to-r from-purple-500 to-blue-500 opacity-0 group-hover:opacity-10 transition-opacity"></div>
            <div class="relative z-10">
                <div class="flex flex-col space-y-2 mb-4">
                    <h3 class=move || format!("text-xl font-bold {}", theme.get().heading_text())>
                        {entry.title}
                    </h3>
                    <p class="text-purple-500 font-medium">{entry.company}</p>
                    <span class=themed(
                        theme,
                        "px-3 py-1 rounded-full text-sm w-fit",
                        "bg-gray-600 text-gray-300",
                        "bg-gray-100 text-gray-500",
                    )>{entry.period}</span>
                </div>
                <ul class="space-y-3">
                    {entry
                        .highlights
                        .iter()
                        .map(|item| {
                            view! {
                                <li class="flex items-start space-x-3">
                                    <i class="extra-terminal text-purple-500 mt-1 flex-shrink-0" />
                                    <span class=themed(
                                        theme,
                                        "",
                                        "text-gray-300",
                                        "text-gray-700",
                                    )>{*item}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </div>
    }
}

#[component]
pub fn SkillsSection(#[prop(into)] theme: Signal<Theme>) -> impl IntoView {
    let class = themed(theme, "py-12", "bg-gray-900", "bg-white");

    view! {
        <RevealSection id=SectionId::Skills class>
            <div class="max-w-5xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading
                    id=SectionId::Skills
                    gradient="from-violet-600 via-purple-600 to-indigo-600"
                />
                <div class=themed(
                    theme,
                    "p-4 sm:p-6 rounded-xl shadow-lg",
                    "bg-gray-800",
                    "bg-white",
                )>
                    <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4">
                        {SKILLS
                            .into_iter()
                            .map(|skill| view! { <SkillBar skill theme /> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </RevealSection>
    }
}

#[component]
fn SkillBar(skill: Skill, theme: Signal<Theme>) -> impl IntoView {
    view! {
        <div class=themed(
            theme,
            "p-3 rounded-lg flex items-center justify-between space-x-3",
            "bg-gray-700/50",
            "bg-gray-100",
        )>
            <div class="flex items-center space-x-2 min-w-0">
                <div class=themed(theme, "p-2 rounded-full", "bg-purple-500/20", "bg-purple-100")>
                    <i class=themed(theme, "extra-code", "text-purple-400", "text-purple-600") />
                </div>
                <span class=themed(
                    theme,
                    "text-sm font-medium truncate",
                    "text-gray-300",
                    "text-gray-700",
                )>{skill.name}</span>
            </div>
            <div
                class="w-20 h-1.5 rounded-full bg-gray-200 overflow-hidden flex-shrink-0"
                role="progressbar"
                aria-valuenow=skill.level.to_string()
                aria-valuemin="0"
                aria-valuemax="100"
            >
                <div
                    class=themed(theme, "h-full rounded-full animate-grow", "bg-purple-500", "bg-purple-600")
                    style=skill.bar_style()
                />
            </div>
        </div>
    }
}

#[component]
pub fn EducationSection(#[prop(into)] theme: Signal<Theme>) -> impl IntoView {
    let class = themed(
        theme,
        "py-20",
        "bg-gradient-to-b from-gray-800 via-gray-900 to-gray-800",
        "bg-gradient-to-b from-gray-50 via-white to-gray-50",
    );
    let muted = themed(theme, "", "text-gray-300", "text-gray-600");

    view! {
        <RevealSection id=SectionId::Education class>
            <div class="max-w-4xl mx-auto px-6">
                <SectionHeading id=SectionId::Education />
                <div class=themed(
                    theme,
                    "p-6 rounded-xl border shadow-lg relative overflow-hidden backdrop-blur-sm",
                    "bg-gray-700/50 border-gray-600",
                    "bg-white/50 border-gray-100",
                )>
                    <div class="flex items-start justify-between mb-4">
                        <div>
                            <h3 class=move || {
                                format!("text-xl font-bold {}", theme.get().heading_text())
                            }>{EDUCATION.degree}</h3>
                            <p class="text-indigo-500 font-medium">{EDUCATION.school}</p>
                        </div>
                        <span class=themed(
                            theme,
                            "px-3 py-1 rounded-full text-sm",
                            "bg-gray-600 text-gray-300",
                            "bg-gray-100 text-gray-500",
                        )>{EDUCATION.period}</span>
                    </div>
                    <div class="flex items-center justify-between mb-4">
                        <span class=muted>{EDUCATION.grade}</span>
                    </div>
                    <ul class="space-y-3">
                        {EDUCATION
                            .highlights
                            .iter()
                            .map(|item| {
                                view! {
                                    <li class="flex items-start space-x-3">
                                        <i class=themed(
                                            theme,
                                            "extra-graduation mt-1 flex-shrink-0",
                                            "text-indigo-400",
                                            "text-indigo-600",
                                        ) />
                                        <span class=themed(
                                            theme,
                                            "",
                                            "text-gray-300",
                                            "text-gray-700",
                                        )>{*item}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
            </div>
        </RevealSection>
    }
}
