use leptos::{ev::SubmitEvent, html, prelude::*};

use super::components::{themed, SectionHeading, SocialLinks};
use super::reveal::RevealSection;
use crate::contact::{ContactFields, FormState};
use crate::content::{CONTACT_BLURB, CONTACT_INFO, CONTACT_SOCIALS};
use crate::scroll::SectionId;
use crate::theme::Theme;

const INPUT_BASE: &str = "w-full px-4 py-3 rounded-lg border focus:outline-none focus:ring-2 focus:ring-indigo-500";
const INPUT_DARK: &str = "bg-gray-700 border-gray-600 text-white";
const INPUT_LIGHT: &str = "bg-white border-gray-300";

#[cfg(feature = "hydrate")]
fn alert(message: &str) {
    if let Err(e) = window().alert_with_message(message) {
        log::error!("couldn't show alert: {e:?}");
    }
}

#[component]
pub fn ContactSection(#[prop(into)] theme: Signal<Theme>) -> impl IntoView {
    let class = themed(
        theme,
        "py-20",
        "bg-gradient-to-b from-gray-800 via-gray-900 to-gray-800",
        "bg-gradient-to-b from-gray-50 via-white to-gray-50",
    );

    view! {
        <RevealSection id=SectionId::Contact class>
            <div class="max-w-6xl mx-auto px-6">
                <SectionHeading id=SectionId::Contact />
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-12">
                    <div class="space-y-6 animate-slide-right">
                        <h3 class="text-2xl font-semibold">"Contact Information"</h3>
                        <p class=move || theme.get().muted_text()>{CONTACT_BLURB}</p>
                        <div class="space-y-4">
                            {CONTACT_INFO
                                .iter()
                                .map(|info| {
                                    view! {
                                        <div class="flex items-center space-x-3">
                                            <div class=themed(
                                                theme,
                                                "p-2 rounded-full",
                                                "bg-gray-600 text-purple-400",
                                                "bg-purple-100 text-purple-600",
                                            )>
                                                <i class=info.icon />
                                            </div>
                                            <span class=move || {
                                                theme.get().muted_text()
                                            }>{info.text}</span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <div class="flex space-x-4 pt-4">
                            <SocialLinks links=&CONTACT_SOCIALS theme />
                        </div>
                    </div>
                    <ContactForm theme />
                </div>
            </div>
        </RevealSection>
    }
}

/// Name, email and message, posted as JSON to the contact endpoint.
///
/// Overlapping submits are not blocked; each click starts its own request.
#[component]
fn ContactForm(theme: Signal<Theme>) -> impl IntoView {
    let form_ref = NodeRef::<html::Form>::new();
    let name_ref = NodeRef::<html::Input>::new();
    let email_ref = NodeRef::<html::Input>::new();
    let message_ref = NodeRef::<html::Textarea>::new();
    let (state, set_state) = signal(FormState::Idle);
    // effects only run in the browser, after hydration
    let (mounted, set_mounted) = signal(false);
    Effect::new(move |_| set_mounted.set(true));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let (Some(name), Some(email), Some(message)) = (
            name_ref.get_untracked(),
            email_ref.get_untracked(),
            message_ref.get_untracked(),
        ) else {
            log::error!("contact form inputs aren't mounted");
            return;
        };
        let fields = ContactFields::new(name.value(), email.value(), message.value());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::contact::{submit, HttpTransport};

            let outcome = submit(&HttpTransport::default(), &fields, |s| set_state.set(s)).await;
            alert(outcome.alert());
            if outcome.should_reset() {
                if let Some(form) = form_ref.get_untracked() {
                    form.reset();
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (fields, set_state, form_ref);
    };

    let input_class = themed(theme, INPUT_BASE, INPUT_DARK, INPUT_LIGHT);

    view! {
        <form
            node_ref=form_ref
            on:submit=on_submit
            class=themed(
                theme,
                "p-8 rounded-2xl shadow-lg backdrop-blur-sm animate-slide-left",
                "bg-gray-800/50",
                "bg-white/80",
            )
        >
            <div class="space-y-6">
                <input
                    node_ref=name_ref
                    type="text"
                    name="name"
                    placeholder="Your Name"
                    class=input_class
                    required
                />
                <input
                    node_ref=email_ref
                    type="email"
                    name="email"
                    placeholder="Your Email"
                    class=input_class
                    required
                />
                <textarea
                    node_ref=message_ref
                    name="message"
                    placeholder="Your Message"
                    rows="4"
                    class=input_class
                    required
                ></textarea>
                <button
                    type="submit"
                    disabled=move || state.get().button_disabled(mounted.get())
                    class="w-full px-8 py-3 bg-gradient-to-r from-indigo-600 via-purple-500 to-pink-500 text-white rounded-lg font-semibold flex items-center justify-center space-x-2 shadow-lg hover:scale-[1.02] active:scale-[0.98] transition-transform disabled:opacity-60 disabled:cursor-not-allowed"
                >
                    <span>{move || state.get().button_label()}</span>
                    <i class="extra-send" />
                </button>
            </div>
        </form>
    }
}
