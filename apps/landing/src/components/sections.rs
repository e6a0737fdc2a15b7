use crate::content::{CURRICULUM, FAQ, FEATURES, FEES, FEES_NOTE};
use dioxus::prelude::*;

#[component]
pub fn WhyUs() -> Element {
    rsx! {
        section { id: "why", class: "container section",
            h2 { "Why learners choose Prep2Hire" }
            div { class: "grid-3",
                for feature in FEATURES {
                    div { key: "{feature.title}", class: "tile",
                        div { class: "tile-icon" }
                        h3 { "{feature.title}" }
                        p { class: "muted", "{feature.description}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Curriculum() -> Element {
    rsx! {
        section { id: "curriculum", class: "container section",
            h2 { "30‑Day Curriculum Snapshot" }
            div { class: "grid-2",
                ul { class: "tile curriculum",
                    for (days, topics) in CURRICULUM {
                        li { key: "{days}",
                            span { class: "accent-text", "{days}: " }
                            "{topics}"
                        }
                    }
                }
                div { class: "tile fees",
                    h3 { "Fees & Offers" }
                    div { class: "grid-2 fee-grid",
                        for fee in FEES {
                            div { key: "{fee.label}", class: "fee",
                                div { class: "muted", "{fee.label}" }
                                div { class: "price", "{fee.price}" }
                                div { class: "fine", "{fee.note}" }
                            }
                        }
                    }
                    a { class: "btn btn-primary btn-small", href: "#register", "Grab your seat" }
                    p { class: "fine", "{FEES_NOTE}" }
                }
            }
        }
    }
}

#[component]
pub fn Faq() -> Element {
    rsx! {
        section { id: "faq", class: "container section",
            h2 { "FAQ" }
            div { class: "grid-2",
                for (question, answer) in FAQ {
                    details { key: "{question}", class: "tile faq",
                        summary { "{question}" }
                        p { class: "muted", "{answer}" }
                    }
                }
            }
        }
    }
}
