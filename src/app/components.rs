use leptos::{html, prelude::*};

use crate::content::{section_title, SocialLink};
use crate::image::FallbackImage;
use crate::scroll::SectionId;
use crate::theme::Theme;

#[component]
pub fn SocialLinks(links: &'static [SocialLink], theme: Signal<Theme>) -> impl IntoView {
    let class = move || {
        format!(
            "p-3 rounded-full {} text-white hover:shadow-lg hover:scale-110 transition-all",
            theme
                .get()
                .pick("bg-gray-700 hover:bg-gray-600", "bg-gradient-to-r from-purple-600 to-blue-500"),
        )
    };
    links
        .iter()
        .map(|link| {
            view! {
                <a
                    href=link.href
                    class=class
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label=link.kind.label()
                >
                    <i class=link.kind.icon() />
                </a>
            }
        })
        .collect_view()
}

/// `<img>` that falls back to the local placeholder once if the remote load fails.
#[component]
pub fn FallbackImg(
    src: &'static str,
    alt: &'static str,
    #[prop(optional)] class: &'static str,
    #[prop(optional)] lazy: bool,
) -> impl IntoView {
    let image = RwSignal::new(FallbackImage::new(src));
    let img_ref = NodeRef::<html::Img>::new();

    // the error event can fire before hydration attaches on:error
    Effect::new(move |_| {
        if let Some(img) = img_ref.get() {
            image.maybe_update(|i| {
                let replaced = i.on_mount(img.complete(), img.natural_width());
                if replaced {
                    log::warn!("image {src} failed before mount, using fallback");
                }
                replaced
            });
        }
    });

    view! {
        <img
            node_ref=img_ref
            src=move || image.with(|img| img.src().to_string())
            alt=alt
            class=class
            loading=if lazy { "lazy" } else { "eager" }
            on:error=move |_| {
                image
                    .maybe_update(|img| {
                        let replaced = img.on_error();
                        if replaced {
                            log::warn!("image {src} failed to load, using fallback");
                        }
                        replaced
                    })
            }
        />
    }
}

#[component]
pub fn SectionHeading(
    id: SectionId,
    #[prop(default = "from-indigo-600 via-purple-500 to-pink-500")] gradient: &'static str,
) -> impl IntoView {
    view! {
        <h2 class=format!(
            "text-3xl font-bold text-center mb-12 bg-gradient-to-r {gradient} bg-clip-text text-transparent animate-rise",
        )>{section_title(id)}</h2>
    }
}

/// Class list with a theme-dependent tail, kept in sync with `theme`.
pub fn themed(
    theme: Signal<Theme>,
    base: &'static str,
    dark: &'static str,
    light: &'static str,
) -> Signal<String> {
    Signal::derive(move || format!("{base} {}", theme.get().pick(dark, light)))
}
