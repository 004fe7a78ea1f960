use super::*;
use crate::api::model::ScoreEntry;

fn record(status: &str) -> MatchRecord {
    MatchRecord {
        teams: ["Mumbai Indians".into(), "Chennai Super Kings".into()],
        status: status.into(),
        series: "Indian Premier League 2024".into(),
        match_type: "T20".into(),
        date: "2024-04-20T14:00:00".into(),
        score: Vec::new(),
    }
}

fn score(r: f64, w: f64, o: f64) -> ScoreEntry {
    ScoreEntry {
        runs: Some(Numeric::new(r)),
        wickets: Some(Numeric::new(w)),
        overs: Some(Numeric::new(o)),
    }
}

fn no_assets() -> AssetPaths {
    AssetPaths::under(std::env::temp_dir().join("cricket_card_no_such_assets"))
}

fn at(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

#[test]
fn run_rate_rounds_and_guards_zero_overs() {
    assert_eq!(run_rate(150.0, 15.0), 10.0);
    assert_eq!(format!("{:.2}", run_rate(150.0, 15.0)), "10.00");
    assert_eq!(run_rate(100.0, 0.0), 0.0);
    assert_eq!(run_rate(100.0, 3.0), 33.33);
    assert_eq!(run_rate(20.0, 3.0), 6.67);
}

#[test]
fn upcoming_card_shows_start_date_verbatim() {
    let scene = SceneConfig::compose(&record("upcoming"), &no_assets(), at(9, 5)).unwrap();
    assert_eq!(scene.status, MatchStatus::Upcoming);
    assert_eq!(scene.background, Background::Upcoming);
    assert_eq!(
        scene.texts(),
        vec![
            "INDIAN PREMIER LEAGUE 2024",
            "Mumbai Indians",
            "VS",
            "Chennai Super Kings",
            "Starts: 2024-04-20T14:00:00",
            "Updated: 09:05",
        ]
    );
    assert!(!scene.has_overlay());
}

#[test]
fn unknown_status_renders_like_upcoming() {
    let scene = SceneConfig::compose(&record("postponed"), &no_assets(), at(0, 0)).unwrap();
    assert_eq!(scene.background, Background::Upcoming);
    assert!(scene.texts().contains(&"Starts: 2024-04-20T14:00:00"));
}

#[test]
fn live_card_shows_score_overs_and_run_rate() {
    let mut rec = record("Live");
    rec.score = vec![score(150.0, 3.0, 15.0), score(1.0, 0.0, 0.1)];
    let scene = SceneConfig::compose(&rec, &no_assets(), at(20, 41)).unwrap();
    assert_eq!(scene.background, Background::Live);

    let texts = scene.texts();
    assert_eq!(texts[4], "150/3");
    assert_eq!(texts[5], "Overs: 15");
    assert_eq!(texts[6], "Run Rate: 10.00");
    assert_eq!(texts[7], "Updated: 20:41");
}

#[test]
fn live_card_with_zero_overs() {
    let mut rec = record("live");
    rec.score = vec![score(0.0, 0.0, 0.0)];
    let scene = SceneConfig::compose(&rec, &no_assets(), at(1, 2)).unwrap();
    assert!(scene.texts().contains(&"Run Rate: 0.00"));
}

#[test]
fn live_card_keeps_wire_spelling_of_overs() {
    let mut rec = record("live");
    rec.score = vec![
        serde_json::from_str::<ScoreEntry>(r#"{"r": 87, "w": 2, "o": "10.3"}"#).unwrap(),
    ];
    let scene = SceneConfig::compose(&rec, &no_assets(), at(1, 2)).unwrap();
    let texts = scene.texts();
    assert!(texts.contains(&"87/2"));
    assert!(texts.contains(&"Overs: 10.3"));
    assert!(texts.contains(&"Run Rate: 8.45"));
}

#[test]
fn live_without_score_is_fatal() {
    let err = SceneConfig::compose(&record("live"), &no_assets(), at(0, 0)).unwrap_err();
    assert!(matches!(err, CardError::MissingScore(_)));

    let mut rec = record("live");
    rec.score = vec![ScoreEntry {
        runs: Some(Numeric::new(10.0)),
        ..Default::default()
    }];
    let err = SceneConfig::compose(&rec, &no_assets(), at(0, 0)).unwrap_err();
    assert!(err.to_string().contains("'w'"));
}

#[test]
fn finished_card_dims_then_draws_banner_and_footer() {
    let scene = SceneConfig::compose(&record("Completed"), &no_assets(), at(23, 59)).unwrap();
    assert_eq!(scene.status, MatchStatus::Finished);
    assert_eq!(scene.background, Background::Upcoming);

    let fill_idx = scene
        .ops
        .iter()
        .position(|op| matches!(op, DrawOp::Fill { .. }))
        .unwrap();
    assert_eq!(
        scene.ops[fill_idx],
        DrawOp::Fill {
            color: FINISHED_OVERLAY
        }
    );

    let texts_after: Vec<&str> = scene.ops[fill_idx..]
        .iter()
        .filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(
        texts_after,
        vec!["MATCH FINISHED", "Completed", "Updated: 23:59"]
    );
    assert!(!scene.texts().iter().any(|t| t.starts_with("Starts:")));
}

#[test]
fn logos_are_included_only_when_files_exist() {
    let root = std::env::temp_dir().join(format!(
        "cricket_card_scene_logos_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    let assets = AssetPaths::under(&root);
    std::fs::create_dir_all(&assets.logo_dir).unwrap();
    std::fs::write(assets.logo_dir.join("chennai_super_kings.png"), b"png").unwrap();

    let scene = SceneConfig::compose(&record("upcoming"), &assets, at(0, 0)).unwrap();
    let logos: Vec<_> = scene
        .ops
        .iter()
        .filter_map(|op| match op {
            DrawOp::Logo { team, at, .. } => Some((team.as_str(), *at)),
            _ => None,
        })
        .collect();
    assert_eq!(logos, vec![("Chennai Super Kings", Point::new(900.0, 250.0))]);

    std::fs::remove_dir_all(&root).ok();
}

#[test]
fn footer_is_hour_minute() {
    assert_eq!(footer_line(at(7, 3)), "Updated: 07:03");
}
