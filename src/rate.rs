use crate::team_stats::TeamStats;

// League-average goals per game per team.
const BASE_GOALS_AVG: f64 = 1.35;
// Division floor: keeps near-zero defenses from blowing the ratio up.
const DEFENSE_FLOOR: f64 = 50.0;
// Rate floor: keeps the goal distribution from degenerating to all zeros.
const LAMBDA_FLOOR: f64 = 0.1;

/// Weighted expected-goals rate (lambda) for `attacker` against `defender`.
///
/// lambda = 1.35 * (attack / max(defense, 50)) * w_form * injury * weather,
/// floored at 0.1. There is no upper clamp: a strong attacker against a
/// floored defense can push lambda arbitrarily high.
///
/// Pure function; inputs are assumed to be within their documented domains
/// (enforced at the intake boundary, never here).
pub fn expected_goals(attacker: &TeamStats, defender: &TeamStats, weather_factor: f64) -> f64 {
    // Scales linearly from 0.8 (form 0) to 1.2 (form 100) around neutral 1.0.
    let w_form = 0.8 + (attacker.recent_form / 100.0) * 0.4;
    let w_strength = attacker.attack_strength / defender.defense_strength.max(DEFENSE_FLOOR);
    let w_missing = attacker.injury_impact;

    let lambda = BASE_GOALS_AVG * w_strength * w_form * w_missing * weather_factor;
    lambda.max(LAMBDA_FLOOR)
}
