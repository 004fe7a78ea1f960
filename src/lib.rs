//! cricket-card renders the current Indian Premier League match into a PNG status card.
//!
//! # Pipeline overview
//!
//! 1. **Fetch**: [`MatchFeed::fetch_matches`] lists matches from the cricketdata.org API.
//! 2. **Select**: [`select_match`] keeps IPL T20 fixtures and picks the first live one, or
//!    the earliest upcoming one.
//! 3. **Compose**: [`SceneConfig::compose`] turns the match into an ordered list of
//!    [`DrawOp`]s over a background template.
//! 4. **Render**: [`CardRenderer`] rasterizes the scene on the CPU (`vello_cpu` + Parley).
//! 5. **Save**: [`write_png`] writes the card, replacing the previous one.
//!
//! [`run`] chains all five; a feed with nothing to show yields [`RunOutcome::NoMatch`] and
//! writes nothing.
#![forbid(unsafe_code)]

mod api;
mod assets;
mod foundation;
mod output;
mod pipeline;
mod render;
mod scene;
mod select;

pub use crate::api::client::{CricketApi, MatchFeed};
pub use crate::api::model::{
    MatchListResponse, MatchRecord, MatchWire, Numeric, ScoreEntry, parse_match_list,
};
pub use crate::assets::{
    LOGO_SIZE_PX, PreparedImage, decode_image, find_logo, load_background, load_font, load_logo,
    logo_path, normalize_team_name,
};
pub use crate::foundation::config::{
    ApiConfig, AssetPaths, DEFAULT_ASSETS_DIR, DEFAULT_BASE_URL, DEFAULT_OUTPUT_PATH, RunConfig,
};
pub use crate::foundation::core::{Point, Rgba8};
pub use crate::foundation::error::{CardError, CardResult};
pub use crate::output::write_png;
pub use crate::pipeline::{RunOutcome, run, run_at};
pub use crate::render::backend::FrameRGBA;
pub use crate::render::cpu::CardRenderer;
pub use crate::scene::config::{
    DrawOp, FINISHED_OVERLAY, FONT_BIG_PX, FONT_MID_PX, LiveScore, SceneConfig, footer_line,
    run_rate,
};
pub use crate::scene::status::{Background, MatchStatus};
pub use crate::select::{
    TOURNAMENT_FORMAT, TOURNAMENT_SERIES, is_tournament_match, select_match,
};
