use super::*;

#[test]
fn matches_endpoint_joins_and_redacts() {
    let cfg = ApiConfig::new("k3y").with_base_url("http://127.0.0.1:9/v1/");
    assert_eq!(cfg.matches_endpoint(), "http://127.0.0.1:9/v1/matches");
    assert!(!cfg.matches_endpoint().contains("k3y"));
    assert_eq!(
        cfg.redacted_matches_url(),
        "http://127.0.0.1:9/v1/matches?apikey=***"
    );
}

#[test]
fn default_base_url_is_cricketdata() {
    let cfg = ApiConfig::new("k");
    assert_eq!(
        cfg.matches_endpoint(),
        "https://api.cricketdata.org/v1/matches"
    );
    cfg.validate().unwrap();
}

#[test]
fn validate_rejects_empty_key_and_bad_scheme() {
    assert!(matches!(
        ApiConfig::new("  ").validate(),
        Err(CardError::Config(_))
    ));
    assert!(matches!(
        ApiConfig::new("k").with_base_url("ftp://x").validate(),
        Err(CardError::Config(_))
    ));
}

#[test]
fn asset_layout_under_root() {
    let a = AssetPaths::under("res");
    assert_eq!(a.font, Path::new("res").join("montserrat.ttf"));
    assert_eq!(
        a.background_live,
        Path::new("res").join("background_live.png")
    );
    assert_eq!(
        a.background_upcoming,
        Path::new("res").join("background_upcoming.png")
    );
    assert_eq!(a.logo_dir, Path::new("res").join("ipl_logos"));
    assert_eq!(AssetPaths::default(), AssetPaths::under("assets"));
}

#[test]
fn default_output_path() {
    let cfg = RunConfig::default();
    assert_eq!(cfg.output, PathBuf::from("output/ipl_match.png"));
}
