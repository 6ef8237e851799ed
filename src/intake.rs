//! Boundary with the data-acquisition collaborator.
//!
//! The collaborator delivers one JSON document per match: both teams'
//! estimated attributes plus free-text colour (weather forecast, tactical
//! notes). Everything is parsed and domain-checked here, before the engine
//! runs; nothing in this module touches the network.

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::team_stats::{MatchParams, TeamStats};

// Applied when the payload carries only a textual forecast; the collaborator
// does not quantify weather yet.
const DEFAULT_WEATHER_FACTOR: f64 = 1.0;
const DEFAULT_REFEREE_STRICTNESS: f64 = 5.0;

/// The collaborator's payload. The first team is the home side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MatchPayload {
    pub team_a: TeamStats,
    pub team_b: TeamStats,
    #[serde(default)]
    pub weather_forecast: Option<String>,
    #[serde(default)]
    pub tactical_analysis: Option<String>,
}

pub fn parse_match_payload(raw: &str) -> Result<MatchPayload> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Err(anyhow!("empty match payload"));
    }
    let payload: MatchPayload =
        serde_json::from_str(trimmed).context("invalid match payload json")?;
    payload
        .team_a
        .validate()
        .context("invalid team statistics (teamA)")?;
    payload
        .team_b
        .validate()
        .context("invalid team statistics (teamB)")?;
    Ok(payload)
}

impl MatchPayload {
    pub fn into_params(self) -> MatchParams {
        MatchParams {
            home: self.team_a,
            away: self.team_b,
            weather_factor: DEFAULT_WEATHER_FACTOR,
            referee_strictness: DEFAULT_REFEREE_STRICTNESS,
        }
    }
}
