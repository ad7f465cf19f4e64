use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
    assert!(config.assets_dir.ends_with("../public"));
}

#[test]
fn reads_port_and_assets_dir() {
    let config = ServerConfig::from_lookup(lookup(&[("PORT", " 8080 "), ("SITE_ASSETS_DIR", "/srv/site")])).unwrap();
    assert_eq!(config.port, 8080);
    assert_eq!(config.assets_dir, PathBuf::from("/srv/site"));
}

#[test]
fn blank_assets_dir_falls_back_to_default() {
    let config = ServerConfig::from_lookup(lookup(&[("SITE_ASSETS_DIR", "  ")])).unwrap();
    assert_eq!(config.assets_dir, default_assets_dir());
}

#[test]
fn rejects_malformed_port() {
    for raw in ["abc", "0", "70000", ""] {
        let err = ServerConfig::from_lookup(lookup(&[("PORT", raw)])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidPort(raw.to_owned()));
    }
}

#[test]
fn from_env_honors_process_port() {
    unsafe { std::env::set_var("PORT", "4123") };
    let config = ServerConfig::from_env().unwrap();
    unsafe { std::env::remove_var("PORT") };
    assert_eq!(config.port, 4123);
}
