use crate::components::Footer;
use crate::content::{BRAND, THANKS_LEAD, THANKS_TITLE};
use crate::links::chat_href;
use crate::LandingContext;
use dioxus::prelude::*;
use p2h::domain::constants::HOME_PATH;

/// Confirmation view shown after a successful registration.
#[component]
pub fn Thanks() -> Element {
    let context = use_context::<LandingContext>();
    let router = context.registration.router().clone();
    let chat = chat_href(&context.config.contact);

    rsx! {
        main { class: "thanks",
            div { class: "thanks-card",
                div { class: "logo" }
                h1 { "{THANKS_TITLE}" }
                p { class: "muted", "{THANKS_LEAD}" }
                div { class: "actions",
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| {
                            router.navigate(HOME_PATH);
                        },
                        "Back to {BRAND}"
                    }
                    a { class: "btn btn-ghost", href: "{chat}", target: "_blank", "Chat on WhatsApp" }
                }
            }
        }
        Footer {}
    }
}
