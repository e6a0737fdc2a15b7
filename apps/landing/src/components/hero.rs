use super::RegistrationCard;
use crate::content::{HERO_BADGE, HERO_LEAD, HERO_TITLE, HERO_TITLE_ACCENT, HIGHLIGHTS, NEXT_COHORT};
use crate::links::chat_href;
use crate::LandingContext;
use dioxus::prelude::*;

#[component]
pub fn Hero() -> Element {
    let context = use_context::<LandingContext>();
    let chat = chat_href(&context.config.contact);

    rsx! {
        section { class: "hero",
            div { class: "container grid-2",
                div {
                    span { class: "badge", "{HERO_BADGE}" }
                    h1 {
                        "{HERO_TITLE}"
                        span { class: "accent", "{HERO_TITLE_ACCENT}" }
                    }
                    p { class: "muted lead", "{HERO_LEAD}" }
                    ul { class: "highlights",
                        for highlight in HIGHLIGHTS {
                            li { key: "{highlight}",
                                span { class: "dot" }
                                "{highlight}"
                            }
                        }
                    }
                    div { class: "actions",
                        a { class: "btn btn-primary", href: "#register", "Register Now" }
                        a { class: "btn btn-ghost", href: "#curriculum", "View Curriculum" }
                        a { class: "btn btn-ghost", href: "{chat}", target: "_blank", "Chat on WhatsApp" }
                    }
                    p { class: "fine",
                        "Next cohort starts: "
                        strong { "{NEXT_COHORT}" }
                        " • Early-bird ends soon"
                    }
                }
                RegistrationCard {}
            }
        }
    }
}
