use serde::{Deserialize, Deserializer, de};

use crate::foundation::error::{CardError, CardResult};

/// Top-level body of `GET /matches`.
///
/// The service reports auth/quota failures in-band (`status: "failure"` plus `reason`) with an
/// HTTP 200, so `data` is optional here and checked in [`MatchListResponse::into_matches`].
#[derive(Clone, Debug, Default, Deserialize)]
pub struct MatchListResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub data: Option<Vec<MatchWire>>,
}

impl MatchListResponse {
    pub fn into_matches(self) -> CardResult<Vec<MatchWire>> {
        match self.data {
            Some(data) => Ok(data),
            None => Err(CardError::malformed(match self.reason {
                Some(reason) => format!("response has no 'data' array (reason: {reason})"),
                None => "response has no 'data' array".to_string(),
            })),
        }
    }
}

/// One match object exactly as the feed sends it.
///
/// Everything is optional: records outside the tournament filter are never validated, so odd
/// entries elsewhere in the feed cannot fail a run.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct MatchWire {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub match_type: Option<String>,
    #[serde(default)]
    pub series: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub teams: Option<Vec<String>>,
    #[serde(default)]
    pub score: Option<Vec<ScoreEntry>>,
}

impl MatchWire {
    pub fn match_type_or_empty(&self) -> &str {
        self.match_type.as_deref().unwrap_or("")
    }

    pub fn series_or_empty(&self) -> &str {
        self.series.as_deref().unwrap_or("")
    }

    pub fn status_or_empty(&self) -> &str {
        self.status.as_deref().unwrap_or("")
    }

    fn label(&self) -> String {
        self.id
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or("<unnamed match>")
            .to_string()
    }
}

/// Innings line inside `score`. Fields stay optional until a live card needs them.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ScoreEntry {
    #[serde(default, rename = "r")]
    pub runs: Option<Numeric>,
    #[serde(default, rename = "w")]
    pub wickets: Option<Numeric>,
    #[serde(default, rename = "o")]
    pub overs: Option<Numeric>,
}

/// A number that may arrive as a JSON number or a numeric string.
///
/// `text` keeps the wire spelling so cards print `15.3` rather than `15.300000000000001`.
#[derive(Clone, Debug, PartialEq)]
pub struct Numeric {
    pub value: f64,
    pub text: String,
}

impl Numeric {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            text: value.to_string(),
        }
    }
}

impl std::fmt::Display for Numeric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

impl<'de> Deserialize<'de> for Numeric {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Num(serde_json::Number),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Num(n) => {
                let value = n
                    .as_f64()
                    .ok_or_else(|| de::Error::custom(format!("number {n} is not representable")))?;
                Ok(Self {
                    value,
                    text: n.to_string(),
                })
            }
            Raw::Text(s) => {
                let trimmed = s.trim();
                let value = trimmed
                    .parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .ok_or_else(|| de::Error::custom(format!("not a number: {s:?}")))?;
                Ok(Self {
                    value,
                    text: trimmed.to_string(),
                })
            }
        }
    }
}

/// A validated match: exactly two teams plus the fields the card prints.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchRecord {
    pub teams: [String; 2],
    /// Raw status string; classify with [`crate::MatchStatus::classify`].
    pub status: String,
    pub series: String,
    pub match_type: String,
    /// Scheduled date, verbatim.
    pub date: String,
    pub score: Vec<ScoreEntry>,
}

impl TryFrom<MatchWire> for MatchRecord {
    type Error = CardError;

    fn try_from(wire: MatchWire) -> CardResult<Self> {
        let label = wire.label();
        let status = wire
            .status
            .ok_or_else(|| CardError::malformed(format!("match {label}: missing 'status'")))?;
        let date = wire
            .date
            .ok_or_else(|| CardError::malformed(format!("match {label}: missing 'date'")))?;
        let teams = wire
            .teams
            .ok_or_else(|| CardError::malformed(format!("match {label}: missing 'teams'")))?;
        let teams: [String; 2] = teams.try_into().map_err(|t: Vec<String>| {
            CardError::malformed(format!(
                "match {label}: expected exactly 2 teams, got {}",
                t.len()
            ))
        })?;

        Ok(Self {
            teams,
            status,
            series: wire.series.unwrap_or_default(),
            match_type: wire.match_type.unwrap_or_default(),
            date,
            score: wire.score.unwrap_or_default(),
        })
    }
}

/// Decode a `GET /matches` body.
pub fn parse_match_list(body: &[u8]) -> CardResult<Vec<MatchWire>> {
    let resp: MatchListResponse = serde_json::from_slice(body)
        .map_err(|e| CardError::malformed(format!("decode match list: {e}")))?;
    resp.into_matches()
}

#[cfg(test)]
#[path = "../../tests/unit/api/model.rs"]
mod tests;
