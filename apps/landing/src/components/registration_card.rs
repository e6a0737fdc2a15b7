use crate::content::{BATCH_NOTE, CARD_LEAD, CARD_TITLE, CONSENT_LABEL, NO_SPAM};
use crate::views::use_session;
use crate::LandingContext;
use dioxus::prelude::*;
use p2h::domain::form::{Batch, Course, Experience, FieldUpdate};
use p2h::domain::outcome::{Connectivity, SubmissionOutcome, SubmissionPhase};

/// The lead form. Every edit goes through [`FieldUpdate`]; the rendered values
/// come back from the session signal.
#[component]
pub fn RegistrationCard() -> Element {
    let context = use_context::<LandingContext>();
    let session = use_session();
    let probing = context.config.registration.probe_on_start;

    let registration = context.registration.clone();
    let update = use_callback(move |update: FieldUpdate| registration.update(update));

    let registration = context.registration.clone();
    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let registration = registration.clone();
        spawn(async move {
            registration.submit().await;
        });
    };

    let snapshot = session();
    let form = snapshot.form.clone();
    let pending = snapshot.phase == SubmissionPhase::Pending;
    let can_submit = snapshot.can_submit();
    let experience = form.experience;
    let course = form.course;

    rsx! {
        div { id: "register", class: "card",
            div { class: "card-head",
                h2 { "{CARD_TITLE}" }
                ConnectivityBadge { connectivity: snapshot.connectivity, probing }
            }
            p { class: "muted small", "{CARD_LEAD}" }
            form { class: "form", onsubmit: submit,
                div { class: "grid-2",
                    label { class: "field",
                        span { "Full name" }
                        input {
                            name: "fullName",
                            placeholder: "Swastik Srivastava",
                            value: "{form.full_name}",
                            oninput: move |evt: FormEvent| update.call(FieldUpdate::FullName(evt.value())),
                        }
                    }
                    label { class: "field",
                        span { "Email" }
                        input {
                            name: "email",
                            r#type: "email",
                            placeholder: "you@example.com",
                            value: "{form.email}",
                            oninput: move |evt: FormEvent| update.call(FieldUpdate::Email(evt.value())),
                        }
                    }
                }
                div { class: "grid-2",
                    label { class: "field",
                        span { "Phone (WhatsApp preferred)" }
                        input {
                            name: "phone",
                            placeholder: "+91 98XXXXXX",
                            value: "{form.phone}",
                            oninput: move |evt: FormEvent| update.call(FieldUpdate::Phone(evt.value())),
                        }
                    }
                    label { class: "field",
                        span { "Experience" }
                        select {
                            name: "experience",
                            value: experience.label(),
                            onchange: move |evt: FormEvent| {
                                if let Some(choice) = Experience::from_label(&evt.value()) {
                                    update.call(FieldUpdate::Experience(choice));
                                }
                            },
                            for choice in Experience::ALL {
                                option {
                                    key: "{choice}",
                                    value: choice.label(),
                                    selected: choice == experience,
                                    "{choice}"
                                }
                            }
                        }
                    }
                }
                div { class: "grid-2",
                    label { class: "field",
                        span { "Course" }
                        select {
                            name: "course",
                            value: course.label(),
                            onchange: move |evt: FormEvent| {
                                if let Some(choice) = Course::from_label(&evt.value()) {
                                    update.call(FieldUpdate::Course(choice));
                                }
                            },
                            for choice in Course::ALL {
                                option {
                                    key: "{choice}",
                                    value: choice.label(),
                                    selected: choice == course,
                                    "{choice}"
                                }
                            }
                        }
                    }
                    label { class: "field",
                        span { "Preferred batch" }
                        select { name: "batch", disabled: true,
                            option { value: Batch::Weekend.label(), "{Batch::Weekend}" }
                        }
                        span { class: "fine", "{BATCH_NOTE}" }
                    }
                }
                label { class: "field",
                    span { "Your goals (optional)" }
                    textarea {
                        name: "goals",
                        rows: "3",
                        placeholder: "Tell us about your target role, timeline, or problem areas…",
                        value: "{form.goals}",
                        oninput: move |evt: FormEvent| update.call(FieldUpdate::Goals(evt.value())),
                    }
                }
                label { class: "consent",
                    input {
                        name: "consent",
                        r#type: "checkbox",
                        checked: form.consent,
                        onchange: move |evt: FormEvent| update.call(FieldUpdate::Consent(evt.checked())),
                    }
                    "{CONSENT_LABEL}"
                }
                if let Some(outcome) = snapshot.outcome.as_ref() {
                    StatusBanner { outcome: outcome.clone() }
                }
                button { class: "btn btn-primary btn-block", r#type: "submit", disabled: !can_submit,
                    if pending {
                        span { class: "spinner" }
                        "Submitting…"
                    } else {
                        "Register Now"
                    }
                }
                p { class: "fine", "{NO_SPAM}" }
            }
        }
    }
}

#[component]
fn StatusBanner(outcome: SubmissionOutcome) -> Element {
    let Some(message) = outcome.message() else {
        return rsx! {};
    };
    let tone = if outcome.is_success() { "status status-success" } else { "status status-error" };

    rsx! {
        div { class: "{tone}", role: "status", "{message}" }
    }
}

#[component]
fn ConnectivityBadge(connectivity: Connectivity, probing: bool) -> Element {
    let (tone, label) = match connectivity {
        Connectivity::Online => ("online", "Connected"),
        Connectivity::Offline => ("offline", "Offline"),
        Connectivity::Unknown if probing => ("unknown", "Checking…"),
        Connectivity::Unknown => return rsx! {},
    };

    rsx! {
        span { class: "connectivity {tone}",
            span { class: "dot" }
            "{label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use p2h::domain::outcome::FailureKind;

    #[test]
    fn banner_and_badge_render_headless() {
        let outcome = SubmissionOutcome::failure(FailureKind::ConnectivityDegraded, "offline");
        let mut dom = VirtualDom::new_with_props(StatusBanner, StatusBannerProps { outcome });
        dom.rebuild_in_place();

        for connectivity in [Connectivity::Online, Connectivity::Offline, Connectivity::Unknown] {
            let props = ConnectivityBadgeProps { connectivity, probing: true };
            let mut dom = VirtualDom::new_with_props(ConnectivityBadge, props);
            dom.rebuild_in_place();
        }
    }
}
