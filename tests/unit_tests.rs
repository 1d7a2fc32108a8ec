// Unit tests for the request parsing and response shaping helpers

use moving_gateway::core::{
    email_template::{render_feedback_html, subject, FEEDBACK_SUBJECT, REMINDER_SUBJECT},
    shaping::{extract_postal_code, is_short_input, metres_to_km, seconds_to_minutes, to_distance},
};
use moving_gateway::models::upstream::{AddressComponent, DistanceElement, TextValue};
use moving_gateway::models::{DistanceResponse, MapsQuery, MapsRequest};
use moving_gateway::GatewayError;

fn parse(body: serde_json::Value) -> Result<MapsQuery, GatewayError> {
    let req: MapsRequest = serde_json::from_value(body).unwrap();
    MapsQuery::try_from(req)
}

#[test]
fn test_parse_each_action() {
    assert_eq!(
        parse(serde_json::json!({"action": "autocomplete", "input": "Kungsg"})).unwrap(),
        MapsQuery::Autocomplete { input: "Kungsg".to_string() }
    );
    assert_eq!(
        parse(serde_json::json!({"action": "place-details", "place_id": "ChIJ"})).unwrap(),
        MapsQuery::PlaceDetails { place_id: "ChIJ".to_string() }
    );
    assert_eq!(
        parse(serde_json::json!({"action": "distance", "origins": "a", "destinations": "b"})).unwrap(),
        MapsQuery::Distance { origins: "a".to_string(), destinations: "b".to_string() }
    );
}

#[test]
fn test_parse_accepts_camel_case_place_id() {
    assert_eq!(
        parse(serde_json::json!({"action": "place-details", "placeId": "ChIJ"})).unwrap(),
        MapsQuery::PlaceDetails { place_id: "ChIJ".to_string() }
    );
}

#[test]
fn test_parse_missing_action_is_unknown() {
    let err = parse(serde_json::json!({"input": "Storgatan"})).unwrap_err();
    assert!(matches!(err, GatewayError::UnknownAction(ref a) if a.is_empty()));
}

#[test]
fn test_short_input_boundary() {
    assert!(is_short_input(""));
    assert!(is_short_input("a"));
    assert!(!is_short_input("ab"));
    // Multi-byte characters count once
    assert!(is_short_input("Ö"));
    assert!(!is_short_input("Öl"));
}

#[test]
fn test_postal_code_first_match_wins() {
    let components = vec![
        AddressComponent {
            long_name: "114 55".to_string(),
            types: vec!["postal_code".to_string()],
        },
        AddressComponent {
            long_name: "999 99".to_string(),
            types: vec!["postal_code".to_string(), "postal_code_prefix".to_string()],
        },
    ];
    assert_eq!(extract_postal_code(&components).as_deref(), Some("11455"));
}

#[test]
fn test_distance_values_are_rounded() {
    for (metres, km) in [(1_049.0, 1.0), (1_050.0, 1.1), (123_456.0, 123.5), (50.0, 0.1)] {
        assert_eq!(metres_to_km(metres), km, "{} m", metres);
    }
    for (seconds, minutes) in [(89.0, 1), (90.0, 2), (7_199.0, 120), (0.0, 0)] {
        assert_eq!(seconds_to_minutes(seconds), minutes, "{} s", seconds);
    }
}

#[test]
fn test_element_missing_duration_is_no_route() {
    let element = DistanceElement {
        status: "OK".to_string(),
        distance: Some(TextValue { text: "1 km".to_string(), value: 1000.0 }),
        duration: None,
    };
    assert!(matches!(to_distance(Some(&element)), DistanceResponse::NoRoute { .. }));
}

#[test]
fn test_subject_and_template() {
    assert_eq!(subject(true), REMINDER_SUBJECT);
    assert_eq!(subject(false), FEEDBACK_SUBJECT);

    let html = render_feedback_html("Erik & Lisa", "https://example.com/f/1");
    assert!(html.contains("Hi Erik &amp; Lisa!"));
    assert!(html.contains("https://example.com/f/1"));
}
