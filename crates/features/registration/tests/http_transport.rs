use httpmock::prelude::*;
use p2h_registration::domain::constants::SUCCESS_MESSAGE;
use p2h_registration::domain::form::FieldUpdate;
use p2h_registration::domain::outcome::{Connectivity, FailureKind, SubmissionOutcome};
use p2h_registration::domain::route::Route;
use p2h_registration::{
    AttributionCell, HttpTransport, LeadTransport, PageLocation, Registration, RegistrationError, Submission,
};
use std::time::Duration;

const USER_AGENT: &str = "p2h-test/0.1";

fn filled(transport: HttpTransport) -> Registration<HttpTransport> {
    let location = PageLocation::parse("https://prep2hire.com/?utm_source=google&utm_campaign=fall", "").unwrap();
    let attribution = AttributionCell::new().capture(&location).clone();
    let registration = Registration::builder(transport)
        .attribution(attribution)
        .client_id(USER_AGENT)
        .redirect_delay(Duration::ZERO)
        .build();
    registration.update(FieldUpdate::FullName("Jane Doe".to_owned()));
    registration.update(FieldUpdate::Email("jane@x.com".to_owned()));
    registration.update(FieldUpdate::Phone("+1-555-0100".to_owned()));
    registration
}

#[tokio::test]
async fn posts_form_encoded_lead() {
    let server = MockServer::start_async().await;
    let webhook = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/exec")
                .header("content-type", "application/x-www-form-urlencoded")
                .header("user-agent", USER_AGENT)
                .body_contains("fullName=Jane+Doe")
                .body_contains("email=jane%40x.com")
                .body_contains("course=Java+%2B+Spring+Boot")
                .body_contains("consent=true")
                .body_contains("utm_source=google")
                .body_contains("utm_campaign=fall")
                .body_contains("submittedAt=");
            then.status(200).header("content-type", "application/json").body(r#"{"ok":true}"#);
        })
        .await;

    let transport = HttpTransport::new(&server.url("/exec"), USER_AGENT).unwrap();
    let registration = filled(transport);

    let result = registration.submit().await;

    webhook.assert_async().await;
    assert_eq!(result, Submission::Finished(SubmissionOutcome::success(SUCCESS_MESSAGE)));
    assert_eq!(registration.router().current(), Route::Thanks);
}

#[tokio::test]
async fn server_error_is_a_rejection() {
    let server = MockServer::start_async().await;
    let webhook = server
        .mock_async(|when, then| {
            when.method(POST).path("/exec");
            then.status(500).body("Script error\n");
        })
        .await;

    let transport = HttpTransport::new(&server.url("/exec"), USER_AGENT).unwrap();
    let registration = filled(transport);

    let outcome = registration.submit().await.outcome().cloned().unwrap();

    webhook.assert_hits_async(1).await;
    assert_eq!(outcome.failure_kind(), Some(FailureKind::ServerRejection));
    assert_eq!(outcome.message(), Some("Failed to submit (status 500): Script error"));
    assert_eq!(registration.router().current(), Route::Home);
    assert_eq!(registration.snapshot().form.full_name, "Jane Doe");
}

#[tokio::test]
async fn ok_false_envelope_is_a_rejection() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/exec");
            then.status(200).body(r#"{"ok":false,"error":"duplicate"}"#);
        })
        .await;

    let transport = HttpTransport::new(&server.url("/exec"), USER_AGENT).unwrap();
    let result = filled(transport).submit().await;

    assert_eq!(
        result,
        Submission::Finished(SubmissionOutcome::failure(FailureKind::ServerRejection, "duplicate"))
    );
}

#[tokio::test]
async fn probe_treats_any_status_as_reachable() {
    let server = MockServer::start_async().await;
    let probe = server
        .mock_async(|when, then| {
            when.method(GET).path("/exec");
            then.status(405);
        })
        .await;

    let transport = HttpTransport::new(&server.url("/exec"), USER_AGENT).unwrap();
    let registration = filled(transport);

    assert_eq!(registration.probe().await, Connectivity::Online);
    probe.assert_async().await;
    assert!(registration.can_submit());
}

#[tokio::test]
async fn unreachable_endpoint_is_a_transport_error() {
    // Nothing listens on the discard port.
    let transport = HttpTransport::new("http://127.0.0.1:9/exec", USER_AGENT).unwrap();

    let err = transport.post_form("fullName=x".to_owned()).await.unwrap_err();
    assert!(matches!(err, RegistrationError::Transport { .. }));
    assert!(err.to_string().contains("Posting lead"));

    let registration = filled(transport);
    assert_eq!(registration.probe().await, Connectivity::Offline);
    let outcome = registration.submit().await.outcome().cloned().unwrap();
    assert_eq!(outcome.failure_kind(), Some(FailureKind::ConnectivityDegraded));
}

#[test]
fn relative_endpoint_is_rejected() {
    let err = HttpTransport::new("/exec", USER_AGENT).unwrap_err();
    assert!(matches!(err, RegistrationError::Endpoint { .. }));
}

#[test]
fn endpoint_is_kept_verbatim() {
    let transport = HttpTransport::new("https://script.google.com/macros/s/abc/exec", USER_AGENT).unwrap();
    assert_eq!(transport.endpoint().path(), "/macros/s/abc/exec");
}
