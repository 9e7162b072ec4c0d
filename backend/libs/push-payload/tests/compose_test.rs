//! Wire-format tests for the GCM and APNS composers
//!
//! Payloads are compared after parsing, so key order never matters.

use push_payload::{compose_apns, compose_gcm, NotificationOptions, PayloadError};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;
use std::thread;

fn parse(payload: &str) -> Value {
    serde_json::from_str(payload).expect("payload is valid JSON")
}

#[test]
fn test_gcm_empty_options_for_various_messages() {
    for message in ["", "hi", "héllo wörld", "line\nbreak", "quote \" inside"] {
        let payload = parse(&compose_gcm(message, &NotificationOptions::default()).unwrap());

        assert_eq!(payload["data"]["message"], json!(message));
        assert_eq!(payload["android"]["priority"], json!("high"));
    }
}

#[test]
fn test_gcm_sound_option_scenario() {
    let opts = NotificationOptions::new().with("sound", "loud");
    let payload = parse(&compose_gcm("Hello", &opts).unwrap());

    assert_eq!(
        payload,
        json!({"data": {"message": "Hello", "sound": "loud"}, "android": {"priority": "high"}})
    );
}

#[test]
fn test_gcm_wire_example() {
    let opts = NotificationOptions::new().with("custom", "x");
    let payload = parse(&compose_gcm("hi", &opts).unwrap());

    assert_eq!(
        payload,
        json!({"data": {"message": "hi", "custom": "x"}, "android": {"priority": "high"}})
    );
}

#[test]
fn test_apns_title_builds_structured_alert() {
    for message in ["", "hi", "Hello there"] {
        let opts = NotificationOptions::new().with("title", "T");
        let payload = parse(&compose_apns(message, &opts).unwrap());

        assert_eq!(payload["aps"]["alert"]["title"], json!("T"));
        assert_eq!(payload["aps"]["alert"]["body"], json!(message));
    }
}

#[test]
fn test_apns_wire_example_keeps_top_level_title() {
    let opts = NotificationOptions::new().with("title", "Hi");
    let payload = parse(&compose_apns("hi", &opts).unwrap());

    assert_eq!(
        payload,
        json!({"aps": {"alert": {"title": "Hi", "body": "hi"}, "sound": "default"}, "title": "Hi"})
    );
}

#[test]
fn test_apns_without_title_uses_plain_alert() {
    let cases = [
        NotificationOptions::new(),
        NotificationOptions::new().with("badge", 1),
        NotificationOptions::new().with("custom", json!({"k": "v"})).with("sound", "x"),
    ];

    for opts in &cases {
        let payload = parse(&compose_apns("plain", opts).unwrap());
        assert_eq!(payload["aps"]["alert"], json!("plain"));
    }
}

#[test]
fn test_apns_sound_default_and_override() {
    let payload = parse(&compose_apns("m", &NotificationOptions::new()).unwrap());
    assert_eq!(payload["aps"]["sound"], json!("default"));

    for sound in [json!("bell.caf"), json!(""), json!(0), json!(false)] {
        let opts = NotificationOptions::new().with("sound", sound.clone());
        let payload = parse(&compose_apns("m", &opts).unwrap());
        assert_eq!(payload["aps"]["sound"], sound);
    }
}

#[test]
fn test_apns_optional_fields_present_iff_supplied() {
    for key in ["category", "badge", "mutable-content"] {
        let absent = parse(&compose_apns("m", &NotificationOptions::new()).unwrap());
        assert!(absent["aps"].get(key).is_none(), "{key} should be omitted");

        let opts = NotificationOptions::new().with(key, 1);
        let present = parse(&compose_apns("m", &opts).unwrap());
        assert_eq!(present["aps"][key], json!(1));
        assert!(present.get(key).is_none(), "{key} should not be at top level");
    }
}

#[test]
fn test_apns_badge_scenario() {
    let opts = NotificationOptions::new().with("badge", 5);
    let payload = parse(&compose_apns("Hello", &opts).unwrap());

    assert_eq!(
        payload,
        json!({"aps": {"alert": "Hello", "sound": "default", "badge": 5}})
    );
}

#[test]
fn test_apns_custom_data_scenario() {
    let opts = NotificationOptions::new().with("custom", "data");
    let payload = parse(&compose_apns("Hello", &opts).unwrap());

    assert_eq!(payload["custom"], json!("data"));
    assert!(payload["aps"].get("custom").is_none());
}

#[test]
fn test_composition_is_deterministic() {
    let opts = NotificationOptions::new()
        .with("title", "T")
        .with("zeta", 1)
        .with("alpha", json!([1, 2, 3]))
        .with("badge", 9);

    assert_eq!(
        parse(&compose_gcm("m", &opts).unwrap()),
        parse(&compose_gcm("m", &opts).unwrap())
    );
    assert_eq!(
        compose_apns("m", &opts).unwrap(),
        compose_apns("m", &opts).unwrap()
    );
}

#[test]
fn test_options_deserialized_from_request_body() {
    let opts: NotificationOptions = serde_json::from_str(
        r#"{"title": "Sale", "badge": 3, "mutable-content": 1, "campaign": "spring"}"#,
    )
    .unwrap();
    let payload = parse(&compose_apns("50% off", &opts).unwrap());

    assert_eq!(
        payload,
        json!({
            "aps": {
                "alert": {"title": "Sale", "body": "50% off"},
                "sound": "default",
                "badge": 3,
                "mutable-content": 1
            },
            "title": "Sale",
            "campaign": "spring"
        })
    );
}

#[test]
fn test_unserializable_option_surfaces_error() {
    let mut bad = HashMap::new();
    bad.insert(vec![1u8], "value");

    let mut opts = NotificationOptions::new();
    let result = opts.insert_serialize("bad", &bad);

    assert!(matches!(result, Err(PayloadError::Serialization(_))));
}

#[test]
fn test_concurrent_composition() {
    let opts = Arc::new(NotificationOptions::new().with("title", "T").with("badge", 1));
    let expected = compose_apns("shared", &opts).unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let opts = Arc::clone(&opts);
            thread::spawn(move || compose_apns("shared", &opts).unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
