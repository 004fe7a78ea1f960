use std::path::PathBuf;

use chrono::NaiveTime;

use crate::api::model::{MatchRecord, Numeric};
use crate::assets::find_logo;
use crate::foundation::config::AssetPaths;
use crate::foundation::core::{Point, Rgba8};
use crate::foundation::error::{CardError, CardResult};
use crate::scene::status::{Background, MatchStatus};

/// Headline size: team names, score, finished banner.
pub const FONT_BIG_PX: f32 = 80.0;
/// Everything else.
pub const FONT_MID_PX: f32 = 50.0;
/// Full-card dimming applied to finished matches.
pub const FINISHED_OVERLAY: Rgba8 = Rgba8::new(0, 0, 0, 180);

const SERIES_AT: Point = Point::new(200.0, 120.0);
const TEAM1_AT: Point = Point::new(200.0, 250.0);
const VS_AT: Point = Point::new(200.0, 350.0);
const TEAM2_AT: Point = Point::new(200.0, 450.0);
const TEAM1_LOGO_AT: Point = Point::new(50.0, 250.0);
const TEAM2_LOGO_AT: Point = Point::new(900.0, 250.0);
const STATUS_LINE_AT: Point = Point::new(200.0, 650.0);
const OVERS_AT: Point = Point::new(200.0, 750.0);
const RUN_RATE_AT: Point = Point::new(200.0, 820.0);
const BANNER_AT: Point = Point::new(300.0, 500.0);
const FOOTER_AT: Point = Point::new(200.0, 950.0);

/// One drawing step. Steps run in order, each on top of the previous ones.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// Single-line text anchored at its top-left corner.
    Text {
        text: String,
        at: Point,
        size_px: f32,
        color: Rgba8,
    },
    /// Team logo, resized to a square and pasted using its own alpha.
    Logo {
        team: String,
        path: PathBuf,
        at: Point,
    },
    /// Solid color over the whole canvas, composited source-over.
    Fill { color: Rgba8 },
}

impl DrawOp {
    fn text(text: impl Into<String>, at: Point, size_px: f32, color: Rgba8) -> Self {
        Self::Text {
            text: text.into(),
            at,
            size_px,
            color,
        }
    }
}

/// Score figures for a live card.
#[derive(Clone, Debug, PartialEq)]
pub struct LiveScore {
    pub runs: Numeric,
    pub wickets: Numeric,
    pub overs: Numeric,
    /// Runs per over, rounded to two decimals.
    pub run_rate: f64,
}

impl LiveScore {
    /// Read the first score entry of a live match.
    pub fn from_record(record: &MatchRecord) -> CardResult<Self> {
        let entry = record.score.first().ok_or_else(|| {
            CardError::missing_score(format!(
                "live match {} vs {} has no score entries",
                record.teams[0], record.teams[1]
            ))
        })?;
        let field = |v: &Option<Numeric>, name: &str| {
            v.clone().ok_or_else(|| {
                CardError::missing_score(format!("first score entry has no '{name}'"))
            })
        };
        let runs = field(&entry.runs, "r")?;
        let wickets = field(&entry.wickets, "w")?;
        let overs = field(&entry.overs, "o")?;
        let run_rate = run_rate(runs.value, overs.value);
        Ok(Self {
            runs,
            wickets,
            overs,
            run_rate,
        })
    }
}

/// `runs / overs` rounded to two decimals; `0` when no overs have been bowled.
pub fn run_rate(runs: f64, overs: f64) -> f64 {
    if overs > 0.0 {
        (runs / overs * 100.0).round() / 100.0
    } else {
        0.0
    }
}

/// Everything needed to paint one card.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub status: MatchStatus,
    pub background: Background,
    pub ops: Vec<DrawOp>,
}

impl SceneConfig {
    /// Lay out the card for `record`.
    ///
    /// Draw order: header and teams, logos, the status block, the finished overlay and banner,
    /// then the footer. Logos that do not exist on disk are left out.
    pub fn compose(
        record: &MatchRecord,
        assets: &AssetPaths,
        updated_at: NaiveTime,
    ) -> CardResult<Self> {
        let status = MatchStatus::classify(&record.status);
        let [team1, team2] = &record.teams;

        let mut ops = vec![
            DrawOp::text(
                record.series.to_uppercase(),
                SERIES_AT,
                FONT_MID_PX,
                Rgba8::ORANGE,
            ),
            DrawOp::text(team1.as_str(), TEAM1_AT, FONT_BIG_PX, Rgba8::WHITE),
            DrawOp::text("VS", VS_AT, FONT_MID_PX, Rgba8::GRAY),
            DrawOp::text(team2.as_str(), TEAM2_AT, FONT_BIG_PX, Rgba8::WHITE),
        ];

        for (team, at) in [(team1, TEAM1_LOGO_AT), (team2, TEAM2_LOGO_AT)] {
            if let Some(path) = find_logo(assets, team) {
                ops.push(DrawOp::Logo {
                    team: team.clone(),
                    path,
                    at,
                });
            }
        }

        match status {
            MatchStatus::Live => {
                let score = LiveScore::from_record(record)?;
                ops.push(DrawOp::text(
                    format!("{}/{}", score.runs, score.wickets),
                    STATUS_LINE_AT,
                    FONT_BIG_PX,
                    Rgba8::WHITE,
                ));
                ops.push(DrawOp::text(
                    format!("Overs: {}", score.overs),
                    OVERS_AT,
                    FONT_MID_PX,
                    Rgba8::WHITE,
                ));
                ops.push(DrawOp::text(
                    format!("Run Rate: {:.2}", score.run_rate),
                    RUN_RATE_AT,
                    FONT_MID_PX,
                    Rgba8::YELLOW,
                ));
            }
            MatchStatus::Upcoming => {
                ops.push(DrawOp::text(
                    format!("Starts: {}", record.date),
                    STATUS_LINE_AT,
                    FONT_MID_PX,
                    Rgba8::WHITE,
                ));
            }
            MatchStatus::Finished => {
                ops.push(DrawOp::Fill {
                    color: FINISHED_OVERLAY,
                });
                ops.push(DrawOp::text(
                    "MATCH FINISHED",
                    BANNER_AT,
                    FONT_BIG_PX,
                    Rgba8::YELLOW,
                ));
                ops.push(DrawOp::text(
                    record.status.as_str(),
                    STATUS_LINE_AT,
                    FONT_MID_PX,
                    Rgba8::WHITE,
                ));
            }
        }

        ops.push(DrawOp::text(
            footer_line(updated_at),
            FOOTER_AT,
            FONT_MID_PX,
            Rgba8::GRAY,
        ));

        Ok(Self {
            status,
            background: status.background(),
            ops,
        })
    }

    /// Text of every text op, in draw order.
    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn has_overlay(&self) -> bool {
        self.ops.iter().any(|op| matches!(op, DrawOp::Fill { .. }))
    }
}

/// `"Updated: HH:MM"`.
pub fn footer_line(updated_at: NaiveTime) -> String {
    format!("Updated: {}", updated_at.format("%H:%M"))
}

#[cfg(test)]
#[path = "../../tests/unit/scene/config.rs"]
mod tests;
