use crate::content::{BRAND, LEGAL, TAGLINE};
use crate::links::{chat_href, mailto_href};
use crate::LandingContext;
use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    let context = use_context::<LandingContext>();
    let email = context.config.contact.email.clone();
    let mailto = mailto_href(&email);
    let chat = chat_href(&context.config.contact);

    rsx! {
        footer { class: "site-footer",
            div { class: "container grid-3",
                div {
                    div { class: "footer-title", "{BRAND}" }
                    p { "{TAGLINE}" }
                }
                div {
                    div { class: "footer-title", "Contact" }
                    p {
                        "Email: "
                        a { href: "{mailto}", "{email}" }
                    }
                    p {
                        "WhatsApp: "
                        a { class: "underline", href: "{chat}", target: "_blank", "Chat on WhatsApp" }
                    }
                }
                div {
                    div { class: "footer-title", "Legal" }
                    p { "{LEGAL}" }
                }
            }
        }
    }
}
