use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

use matchcast::engine::{DEFAULT_TRIALS, Engine};
use matchcast::intake::parse_match_payload;

fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("tests/fixtures/match_payload.json"));

    let raw = fs::read_to_string(&path)
        .with_context(|| format!("read match payload {}", path.display()))?;
    let payload = parse_match_payload(&raw)?;

    let trials = std::env::var("SIM_TRIALS")
        .ok()
        .and_then(|val| val.parse::<u64>().ok())
        .unwrap_or(DEFAULT_TRIALS)
        .max(1);
    let workers = std::env::var("SIM_WORKERS")
        .ok()
        .and_then(|val| val.parse::<usize>().ok())
        .unwrap_or(1)
        .clamp(1, 64);
    let seed = std::env::var("SIM_SEED")
        .ok()
        .and_then(|val| val.parse::<u64>().ok());

    let mut engine = Engine::new(trials)?.with_workers(workers);
    if let Some(seed) = seed {
        engine = engine.with_seed(seed);
    }

    // This binary is intentionally simple: it loads one payload snapshot and
    // prints the engine output. No network, nothing written to disk.
    let home_name = payload.team_a.name.clone();
    let away_name = payload.team_b.name.clone();
    if let Some(forecast) = payload.weather_forecast.as_deref() {
        println!("Weather: {forecast}");
    }

    let params = payload.into_params();
    let report = engine.simulate(&params)?;

    println!("{home_name} vs {away_name} ({} trials)", report.total_simulations);
    println!("Home win: {:.1}%", report.home_win_prob);
    println!("Draw:     {:.1}%", report.draw_prob);
    println!("Away win: {:.1}%", report.away_win_prob);
    println!("Over 2.5: {:.1}%", report.over25_prob);
    println!("Variance: {:.2}", report.variance);
    println!("Most likely score: {}", report.most_likely_score);

    println!();
    println!("Top scorelines:");
    for row in &report.score_distribution {
        println!("  {:>5}  {:>6}  {:>5.1}%", row.score, row.count, row.prob);
    }

    println!();
    println!(
        "Commentary summary: {}",
        serde_json::to_string(&report.commentary_summary())?
    );

    Ok(())
}
