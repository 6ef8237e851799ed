use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

/// Strength indicators for one team, estimated upstream by the data
/// collaborator. All numeric fields are validated against these domains at
/// the intake boundary; the rate math assumes they hold.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TeamStats {
    pub name: String,
    /// 0..=100, 100 = winning every recent match.
    pub recent_form: f64,
    /// 0..=200, 100 = league-average attack.
    pub attack_strength: f64,
    /// 0..=200, 100 = league-average defense.
    pub defense_strength: f64,
    /// 0.0..=1.0, 1.0 = full squad available.
    pub injury_impact: f64,
    /// Display only, never consumed by the math.
    #[serde(default)]
    pub missing_key_players: Vec<String>,
    /// Display only, free-text descriptions of the last five results.
    #[serde(default)]
    pub last_5_matches: Vec<String>,
}

/// Immutable inputs for one simulated match.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MatchParams {
    pub home: TeamStats,
    pub away: TeamStats,
    /// Nominal 0.9 (bad) to 1.1 (good); 1.0 = neutral. Values at or below
    /// zero floor both lambdas and are accepted as degenerate.
    pub weather_factor: f64,
    /// 0..=10. Accepted for contract compatibility, not part of the rate
    /// formula.
    pub referee_strictness: f64,
}

impl TeamStats {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            bail!("team name is empty");
        }
        check_range("recentForm", self.recent_form, 0.0, 100.0)?;
        check_range("attackStrength", self.attack_strength, 0.0, 200.0)?;
        check_range("defenseStrength", self.defense_strength, 0.0, 200.0)?;
        check_range("injuryImpact", self.injury_impact, 0.0, 1.0)?;
        Ok(())
    }
}

impl MatchParams {
    pub fn validate(&self) -> Result<()> {
        self.home.validate()?;
        self.away.validate()?;
        if !self.weather_factor.is_finite() {
            bail!("weatherFactor is not finite: {}", self.weather_factor);
        }
        check_range("refereeStrictness", self.referee_strictness, 0.0, 10.0)?;
        Ok(())
    }
}

fn check_range(field: &str, value: f64, lo: f64, hi: f64) -> Result<()> {
    if !value.is_finite() || value < lo || value > hi {
        bail!("{field} out of range: {value} (expected {lo}..={hi})");
    }
    Ok(())
}
