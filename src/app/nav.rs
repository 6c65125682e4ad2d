use leptos::{either::Either, ev, prelude::*};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::content::PROFILE;
use crate::scroll::{active_section, scroll_target, SectionBounds, SectionId, NAV_SECTIONS};
use crate::theme::{Theme, DARK_CLASS};

/// Smooth-scroll so the section's top lands just under the navbar.
/// Does nothing if the section isn't in the document.
pub fn scroll_to_section(id: SectionId) {
    let Some(el) = document().get_element_by_id(id.as_str()) else {
        log::debug!("no element for section {id}");
        return;
    };
    let top = el.get_bounding_client_rect().top();
    let page_offset = window().page_y_offset().unwrap_or_default();

    let options = ScrollToOptions::new();
    options.set_top(scroll_target(top, page_offset));
    options.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
}

/// Snapshot every `<section>` with a known id, in document order.
fn measure_sections() -> Vec<SectionBounds> {
    let Ok(nodes) = document().query_selector_all("section") else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .filter_map(|el| {
            let id = el.id().parse::<SectionId>().ok()?;
            Some(SectionBounds::new(
                id,
                el.offset_top() as f64,
                el.client_height() as f64,
            ))
        })
        .collect()
}

/// Track which section the window is scrolled to.
///
/// One window listener for the component's lifetime; the comparison reads
/// the signal untracked, so nothing re-subscribes when the value changes.
pub fn use_scroll_spy() -> ReadSignal<Option<SectionId>> {
    let (active, set_active) = signal(Some(SectionId::Home));

    let handle = window_event_listener(ev::scroll, move |_| {
        let offset = window().scroll_y().unwrap_or_default();
        let next = active_section(offset, &measure_sections());
        if next != active.get_untracked() {
            set_active.set(next);
        }
    });
    on_cleanup(move || handle.remove());

    active
}

fn apply_theme_to_document(theme: Theme) {
    let Some(root) = document().document_element() else {
        return;
    };
    if let Err(e) = root
        .class_list()
        .toggle_with_force(DARK_CLASS, theme.is_dark())
    {
        log::warn!("couldn't toggle theme class: {e:?}");
    }
}

#[component]
pub fn Navbar(
    #[prop(into)] theme: Signal<Theme>,
    set_theme: WriteSignal<Theme>,
    #[prop(into)] active: Signal<Option<SectionId>>,
) -> impl IntoView {
    let toggle_theme = move |_: ev::MouseEvent| {
        let next = theme.get_untracked().toggled();
        set_theme.set(next);
        apply_theme_to_document(next);
    };

    view! {
        <nav class=move || {
            format!(
                "fixed w-full {} backdrop-blur-lg z-50 py-3 px-6 shadow-sm animate-slide-down",
                theme.get().pick("bg-gray-900/20", "bg-white/20"),
            )
        }>
            <div class="max-w-7xl mx-auto flex justify-between items-center">
                <h1 class="text-xl font-bold bg-gradient-to-r from-indigo-600 via-purple-500 to-pink-500 bg-clip-text text-transparent hover:scale-105 transition-transform">
                    {PROFILE.name}
                </h1>
                <div class="flex items-center space-x-6">
                    <div class="hidden md:flex space-x-4">
                        {NAV_SECTIONS
                            .into_iter()
                            .map(|id| view! { <NavButton id theme active /> })
                            .collect_view()}
                    </div>
                    <button
                        on:click=toggle_theme
                        class="p-2 rounded-full hover:scale-110 active:scale-90 transition-transform"
                        aria-label="Toggle dark mode"
                    >
                        {move || {
                            if theme.get().is_dark() {
                                Either::Left(
                                    view! { <i class="extra-sun text-yellow-300 animate-spin-in" /> },
                                )
                            } else {
                                Either::Right(
                                    view! { <i class="extra-moon text-indigo-600 animate-spin-in" /> },
                                )
                            }
                        }}
                    </button>
                </div>
            </div>
        </nav>
    }
}

#[component]
fn NavButton(
    id: SectionId,
    theme: Signal<Theme>,
    active: Signal<Option<SectionId>>,
) -> impl IntoView {
    let is_active = move || active.get() == Some(id);
    let class = move || {
        let theme = theme.get();
        let color = if is_active() {
            theme.pick("text-purple-400 font-medium", "text-purple-600 font-medium")
        } else {
            theme.pick(
                "text-gray-300 hover:text-white hover:bg-gray-500/20",
                "text-gray-600 hover:text-gray-900 hover:bg-gray-100/80",
            )
        };
        format!("relative px-3 py-1 rounded-md capitalize {color} transition-all duration-200")
    };

    view! {
        <button class=class on:click=move |_| scroll_to_section(id)>
            {id.as_str()}
            <Show when=is_active>
                <span class="absolute left-0 bottom-0 w-full h-0.5 bg-gradient-to-r from-purple-500 via-pink-500 to-blue-500" />
            </Show>
        </button>
    }
}
