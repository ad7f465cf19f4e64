use super::*;

#[test]
fn stored_value_overrides_system_scheme() {
    assert!(resolve_preference(Some("true"), false));
    assert!(!resolve_preference(Some("false"), true));
}

#[test]
fn missing_or_garbled_value_follows_system() {
    assert!(resolve_preference(None, true));
    assert!(!resolve_preference(None, false));
    assert!(resolve_preference(Some("yes"), true));
}

#[test]
fn encoded_value_resolves_back() {
    for dark in [true, false] {
        assert_eq!(resolve_preference(Some(encode_preference(dark)), !dark), dark);
    }
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn read_preference_is_light_without_browser() {
    assert!(!read_preference());
}

#[test]
fn toggle_flips_value() {
    assert!(toggle(false));
    assert!(!toggle(true));
}
