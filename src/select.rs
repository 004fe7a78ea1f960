use crate::api::model::{MatchRecord, MatchWire};
use crate::foundation::error::CardResult;

/// Match format the card covers, compared case-insensitively.
pub const TOURNAMENT_FORMAT: &str = "t20";
/// Series substring the card covers, compared case-insensitively.
pub const TOURNAMENT_SERIES: &str = "indian premier league";

/// Whether a feed entry belongs to the tournament the card shows.
///
/// Missing `match_type`/`series` count as empty strings and never match.
pub fn is_tournament_match(m: &MatchWire) -> bool {
    m.match_type_or_empty().eq_ignore_ascii_case(TOURNAMENT_FORMAT)
        && m
            .series_or_empty()
            .to_lowercase()
            .contains(TOURNAMENT_SERIES)
}

/// Pick the match to display.
///
/// The first live match in feed order wins. Otherwise the upcoming match with the smallest
/// `date` (lexical; ties keep feed order). `None` when neither exists.
///
/// Only the entries that can be chosen are validated: the winning live match, or every
/// upcoming candidate when no match is live. Other tournament entries are never inspected
/// beyond their status.
#[tracing::instrument(skip_all, fields(feed_len = list.len()))]
pub fn select_match(list: Vec<MatchWire>) -> CardResult<Option<MatchRecord>> {
    let mut upcoming = Vec::new();
    for m in list.into_iter().filter(is_tournament_match) {
        let status = m.status_or_empty();
        if status.eq_ignore_ascii_case("live") {
            return MatchRecord::try_from(m).map(Some);
        }
        if status.eq_ignore_ascii_case("upcoming") {
            upcoming.push(m);
        }
    }
    tracing::debug!(candidates = upcoming.len(), "no live match, ranking upcoming");

    let upcoming = upcoming
        .into_iter()
        .map(MatchRecord::try_from)
        .collect::<CardResult<Vec<_>>>()?;
    Ok(upcoming.into_iter().min_by(|a, b| a.date.cmp(&b.date)))
}

#[cfg(test)]
#[path = "../tests/unit/select.rs"]
mod tests;
