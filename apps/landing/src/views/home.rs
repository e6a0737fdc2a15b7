use crate::components::{Curriculum, Faq, Footer, Header, Hero, WhyUs};
use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        Header {}
        Hero {}
        WhyUs {}
        Curriculum {}
        Faq {}
        Footer {}
    }
}
