use super::*;

#[test]
fn base_with_trailing_slash_adds_segment_directly() {
    assert_eq!(
        view_source_url("https://example.com/", "https://example.com/docs/intro/"),
        "https://example.com/-/view-src/docs/intro/"
    );
}

#[test]
fn base_without_trailing_slash_gets_separator() {
    assert_eq!(
        view_source_url("https://example.com/pkg", "https://example.com/pkg/page/"),
        "https://example.com/pkg/-/view-src//page/"
    );
}

#[test]
fn root_page_maps_to_bare_segment() {
    assert_eq!(
        view_source_url("https://example.com/", "https://example.com/"),
        "https://example.com/-/view-src/"
    );
}

#[test]
fn href_outside_base_is_appended_whole() {
    assert_eq!(
        view_source_url("https://example.com/", "https://other.org/x"),
        "https://example.com/-/view-src/https://other.org/x"
    );
}

#[test]
fn only_configured_key_triggers() {
    let config = ThemeConfig::default();
    assert!(is_view_source_key(".", &config));
    assert!(!is_view_source_key(",", &config));
    assert!(!is_view_source_key("Period", &config));

    let custom = ThemeConfig { view_source_key: "s".to_owned(), ..ThemeConfig::default() };
    assert!(is_view_source_key("s", &custom));
    assert!(!is_view_source_key(".", &custom));
}
