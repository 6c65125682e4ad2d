use chrono::{Datelike, Utc};
use leptos::prelude::*;

use super::components::{themed, SocialLinks};
use super::nav::scroll_to_section;
use crate::content::{PROFILE, SOCIALS};
use crate::scroll::QUICK_LINKS;
use crate::theme::Theme;

#[component]
pub fn Footer(#[prop(into)] theme: Signal<Theme>) -> impl IntoView {
    let year = Utc::now().year();

    view! {
        <footer class=themed(theme, "py-12", "bg-gray-800", "bg-gray-100")>
            <div class="max-w-7xl mx-auto px-6">
                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                    <div>
                        <h3 class="text-xl font-bold mb-4">{PROFILE.name}</h3>
                        <p class=move || theme.get().muted_text()>{PROFILE.role}</p>
                    </div>
                    <div>
                        <h4 class="text-lg font-semibold mb-4">"Quick Links"</h4>
                        <ul class="space-y-2">
                            {QUICK_LINKS
                                .into_iter()
                                .map(|id| {
                                    view! {
                                        <li class="hover:translate-x-1 transition-transform">
                                            <button
                                                on:click=move |_| scroll_to_section(id)
                                                class=themed(
                                                    theme,
                                                    "capitalize",
                                                    "text-gray-300 hover:text-white",
                                                    "text-gray-600 hover:text-gray-900",
                                                )
                                            >
                                                {id.as_str()}
                                            </button>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                    <div>
                        <h4 class="text-lg font-semibold mb-4">"Connect"</h4>
                        <div class="flex space-x-4">
                            <SocialLinks links=&SOCIALS theme />
                        </div>
                    </div>
                </div>
                <div class=themed(
                    theme,
                    "mt-8 pt-8 border-t text-center",
                    "border-gray-700 text-gray-400",
                    "border-gray-200 text-gray-500",
                )>
                    <p>{format!("© {year} {}. All rights reserved.", PROFILE.name)}</p>
                </div>
            </div>
        </footer>
    }
}
