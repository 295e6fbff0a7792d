use super::*;
use crate::testing::{TEST_BASE_URL, scripted_client};
use futures::executor::block_on;
use serde_json::json;

// =============================================================
// Registration bodies
// =============================================================

#[test]
fn registration_fills_placeholder_names() {
    let registration = Registration::new("a@b.com", "secret1");
    let body = registration.request();
    assert_eq!(body.firstname, "User");
    assert_eq!(body.lastname, "User");
    assert_eq!(body.role, "USER");
    assert_eq!(body.plan, "FREE");
}

#[test]
fn registration_treats_blank_names_as_missing() {
    let registration = Registration {
        firstname: Some("   ".to_owned()),
        lastname: Some(" Lovelace ".to_owned()),
        ..Registration::new("a@b.com", "secret1")
    };
    let body = registration.request();
    assert_eq!(body.firstname, PLACEHOLDER_NAME);
    assert_eq!(body.lastname, "Lovelace");
}

// =============================================================
// HttpAuthGateway
// =============================================================

#[test]
fn login_posts_credentials_to_authenticate_endpoint() {
    let (api, _store, transport) = scripted_client();
    transport.reply(200, json!({ "token": "abc.def.ghi" }));
    let gateway = HttpAuthGateway::new(api);

    let resp = block_on(gateway.login("a@b.com", "secret")).unwrap();

    assert_eq!(resp.token, "abc.def.ghi");
    let sent = transport.sent();
    assert_eq!(sent.len(), 1);
    let (url, request) = &sent[0];
    assert_eq!(url, &format!("{TEST_BASE_URL}/auth/authenticate"));
    assert_eq!(request.method, crate::net::api::Method::Post);
    assert_eq!(request.body, Some(json!({ "email": "a@b.com", "password": "secret" })));
}

#[test]
fn register_posts_full_body_to_register_endpoint() {
    let (api, _store, transport) = scripted_client();
    transport.reply(200, json!({ "token": "new.user.token" }));
    let gateway = HttpAuthGateway::new(api);
    let registration = Registration {
        firstname: Some("Ada".to_owned()),
        ..Registration::new("ada@b.com", "secret1")
    };

    block_on(gateway.register(&registration)).unwrap();

    let (url, request) = &transport.sent()[0];
    assert!(url.ends_with("/auth/register"));
    assert_eq!(
        request.body,
        Some(json!({
            "email": "ada@b.com",
            "password": "secret1",
            "firstname": "Ada",
            "lastname": "User",
            "role": "USER",
            "plan": "FREE"
        }))
    );
}

#[test]
fn rejected_login_carries_backend_message() {
    let (api, _store, transport) = scripted_client();
    transport.reply(400, json!({ "status": 400, "message": "Invalid credentials" }));
    let gateway = HttpAuthGateway::new(api);

    let err = block_on(gateway.login("a@b.com", "wrong")).unwrap_err();

    assert_eq!(
        err,
        AuthError::Rejected {
            status: 400,
            message: Some("Invalid credentials".to_owned())
        }
    );
    assert_eq!(err.display_message(), "Invalid credentials");
}

#[test]
fn rejected_login_falls_back_to_error_field() {
    let (api, _store, transport) = scripted_client();
    transport.reply(409, json!({ "error": "Email already registered" }));
    let gateway = HttpAuthGateway::new(api);

    let err = block_on(gateway.register(&Registration::new("a@b.com", "secret1"))).unwrap_err();

    assert_eq!(err.message(), Some("Email already registered"));
}

#[test]
fn rejected_login_without_message_uses_generic_text() {
    let (api, _store, transport) = scripted_client();
    transport.reply(500, json!(null));
    let gateway = HttpAuthGateway::new(api);

    let err = block_on(gateway.login("a@b.com", "secret")).unwrap_err();

    assert_eq!(err.message(), None);
    assert_eq!(err.display_message(), "An error occurred");
}

#[test]
fn transport_failure_is_not_retried() {
    let (api, _store, transport) = scripted_client();
    transport.fail("connection refused");
    transport.reply(200, json!({ "token": "never.used.token" }));
    let gateway = HttpAuthGateway::new(api);

    let err = block_on(gateway.login("a@b.com", "secret")).unwrap_err();

    assert!(matches!(err, AuthError::Transport(_)));
    assert_eq!(transport.sent().len(), 1);
}

#[test]
fn success_without_token_is_invalid_response() {
    let (api, _store, transport) = scripted_client();
    transport.reply(200, json!({ "message": "ok" }));
    let gateway = HttpAuthGateway::new(api);

    let err = block_on(gateway.login("a@b.com", "secret")).unwrap_err();

    assert!(matches!(err, AuthError::InvalidResponse(_)));
}
