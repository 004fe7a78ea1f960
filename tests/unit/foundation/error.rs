use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(CardError::config("x").to_string().contains("config error:"));
    assert!(CardError::network("x").to_string().contains("network error:"));
    assert!(
        CardError::malformed("x")
            .to_string()
            .contains("malformed response:")
    );
    assert!(
        CardError::missing_score("x")
            .to_string()
            .contains("missing score:")
    );
    assert!(CardError::asset("x").to_string().contains("asset error:"));
    assert!(CardError::render("x").to_string().contains("render error:"));
    assert!(CardError::output("x").to_string().contains("output error:"));
}

#[test]
fn api_error_names_status_and_url() {
    let err = CardError::Api {
        status: 401,
        url: "https://example.test/matches?apikey=***".to_string(),
    };
    let s = err.to_string();
    assert!(s.contains("401"));
    assert!(s.contains("apikey=***"));
}

