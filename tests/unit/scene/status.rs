use super::*;

#[test]
fn classification_partitions_statuses() {
    let cases = [
        ("live", MatchStatus::Live),
        ("Completed", MatchStatus::Finished),
        ("FINISHED", MatchStatus::Finished),
        ("upcoming", MatchStatus::Upcoming),
        ("postponed", MatchStatus::Upcoming),
        ("", MatchStatus::Upcoming),
        ("LiVe", MatchStatus::Live),
    ];
    for (raw, want) in cases {
        assert_eq!(MatchStatus::classify(raw), want, "status {raw:?}");
    }
}

#[test]
fn only_live_uses_live_background() {
    assert_eq!(MatchStatus::Live.background(), Background::Live);
    assert_eq!(MatchStatus::Finished.background(), Background::Upcoming);
    assert_eq!(MatchStatus::Upcoming.background(), Background::Upcoming);
}
