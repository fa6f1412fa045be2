use super::*;

#[test]
fn blank_base_url_uses_default() {
    assert_eq!(ApiConfig::from_base_url(None).base_url, DEFAULT_API_BASE_URL);
    assert_eq!(ApiConfig::from_base_url(Some("   ")).base_url, DEFAULT_API_BASE_URL);
}

#[test]
fn base_url_is_trimmed() {
    let cfg = ApiConfig::from_base_url(Some(" https://hr.example.com/api/ "));
    assert_eq!(cfg.base_url, "https://hr.example.com/api");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn resolve_off_browser_matches_default() {
    assert_eq!(ApiConfig::resolve(), ApiConfig::default());
}
