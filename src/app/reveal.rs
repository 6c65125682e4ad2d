use leptos::{html, prelude::*};

use crate::reveal::Reveal;
use crate::scroll::SectionId;

/// A page `<section>` that fades in the first time it scrolls into view.
///
/// Each section owns its observer. It is released once the section has been
/// revealed, and on unmount otherwise.
#[component]
pub fn RevealSection(
    id: SectionId,
    /// Classes for the section, recomputed when the theme changes.
    #[prop(into)]
    class: Signal<String>,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<html::Section>::new();
    let reveal = RwSignal::new(Reveal::default());

    #[cfg(feature = "hydrate")]
    {
        use crate::reveal::{REVEAL_MARGIN, REVEAL_THRESHOLD};
        use leptos_use::{
            use_intersection_observer_with_options, UseIntersectionObserverOptions,
            UseIntersectionObserverReturn,
        };

        let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
            node,
            move |entries, _| {
                let intersecting = entries.iter().any(|e| e.is_intersecting());
                reveal.maybe_update(|r| r.observe(intersecting));
            },
            UseIntersectionObserverOptions::default()
                .root_margin(REVEAL_MARGIN)
                .thresholds(vec![REVEAL_THRESHOLD]),
        );

        Effect::new(move |_| {
            if reveal.with(Reveal::is_shown) {
                log::debug!("revealed section {id}");
                stop();
            }
        });
    }

    view! {
        <section
            id=id.as_str()
            node_ref=node
            class=move || reveal.with(|r| r.class(&class.get()))
        >
            {children()}
        </section>
    }
}
