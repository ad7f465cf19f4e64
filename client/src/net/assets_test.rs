use super::*;

#[test]
fn failure_message_names_url_and_status() {
    assert_eq!(fetch_failed_message("/data/countries.geojson", 404), "fetch /data/countries.geojson failed: 404");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn fetch_is_unavailable_on_server() {
    let result = futures::executor::block_on(fetch_text("/data/countries.geojson"));
    assert!(result.is_err());
}
