/// Display bucket for a raw feed status string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MatchStatus {
    /// `"live"`.
    Live,
    /// `"completed"` or `"finished"`.
    Finished,
    /// Everything else, including statuses the feed invents later (`"postponed"`, `"delayed"`).
    /// These render as a fixture with a start date.
    Upcoming,
}

impl MatchStatus {
    /// Classify case-insensitively.
    pub fn classify(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("live") {
            Self::Live
        } else if raw.eq_ignore_ascii_case("completed") || raw.eq_ignore_ascii_case("finished") {
            Self::Finished
        } else {
            Self::Upcoming
        }
    }

    /// Background template for this bucket. Only live matches get the live template.
    pub fn background(self) -> Background {
        match self {
            Self::Live => Background::Live,
            Self::Finished | Self::Upcoming => Background::Upcoming,
        }
    }
}

/// Which background template a card starts from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Background {
    Live,
    Upcoming,
}

#[cfg(test)]
#[path = "../../tests/unit/scene/status.rs"]
mod tests;
