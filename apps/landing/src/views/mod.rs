//! Root component and the two routed views.

mod home;
mod thanks;

pub use home::Home;
pub use thanks::Thanks;

use crate::LandingContext;
use dioxus::prelude::*;
use p2h::domain::route::Route;
use p2h::registration::SessionSnapshot;
use std::time::Duration;

/// Mirrors the router and the registration session into signals and picks the view.
///
/// `Alt+Left` / `Alt+Right` step through the navigation history.
#[component]
pub fn App() -> Element {
    let context = use_context::<LandingContext>();
    let router = context.registration.router().clone();

    let mut route = use_signal(|| router.current());
    let mut session = use_signal(|| context.registration.snapshot());
    use_context_provider(|| session);

    use_future({
        let router = router.clone();
        move || {
            let mut changes = router.subscribe();
            async move {
                loop {
                    let current = *changes.borrow_and_update();
                    route.set(current);
                    if changes.changed().await.is_err() {
                        break;
                    }
                }
            }
        }
    });

    use_future({
        let registration = context.registration.clone();
        move || {
            let mut changes = registration.subscribe();
            async move {
                loop {
                    let snapshot = changes.borrow_and_update().clone();
                    session.set(snapshot);
                    if changes.changed().await.is_err() {
                        break;
                    }
                }
            }
        }
    });

    use_future({
        let registration = context.registration.clone();
        let settings = context.config.registration.clone();
        move || {
            let registration = registration.clone();
            let retry = Duration::from_millis(settings.probe_retry_ms);
            let probe_on_start = settings.probe_on_start;
            async move {
                if probe_on_start {
                    registration.probe_until_online(retry).await;
                }
            }
        }
    });

    let history_keys = move |evt: KeyboardEvent| {
        if !evt.modifiers().contains(Modifiers::ALT) {
            return;
        }
        match evt.key() {
            Key::ArrowLeft => {
                router.back();
            },
            Key::ArrowRight => {
                router.forward();
            },
            _ => {},
        }
    };

    rsx! {
        div { class: "page", tabindex: "0", onkeydown: history_keys,
            match route() {
                Route::Home => rsx! { Home {} },
                Route::Thanks => rsx! { Thanks {} },
            }
        }
    }
}

/// Latest registration session, provided by [`App`].
#[must_use]
pub fn use_session() -> Signal<SessionSnapshot> {
    use_context::<Signal<SessionSnapshot>>()
}
