use crate::content::BRAND;
use dioxus::prelude::*;

#[component]
pub fn Header() -> Element {
    rsx! {
        header { class: "site-header",
            div { class: "container header-row",
                div { class: "brand",
                    div { class: "logo" }
                    span { "{BRAND}" }
                }
                nav { class: "nav",
                    a { href: "#curriculum", "Curriculum" }
                    a { href: "#why", "Why Us" }
                    a { href: "#faq", "FAQ" }
                    a { class: "btn btn-primary btn-small", href: "#register", "Register" }
                }
            }
        }
    }
}
