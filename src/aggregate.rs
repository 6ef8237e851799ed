use std::collections::HashMap;

use anyhow::{Result, bail};

use crate::report::{ScorelineFreq, SimulationReport};

/// How many scorelines the final distribution table keeps.
const DISTRIBUTION_LIMIT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Home,
    Draw,
    Away,
}

pub fn classify_outcome(home_goals: u32, away_goals: u32) -> Outcome {
    if home_goals > away_goals {
        Outcome::Home
    } else if home_goals < away_goals {
        Outcome::Away
    } else {
        Outcome::Draw
    }
}

/// Incremental tally over the trial stream; no per-trial history is kept.
///
/// Scoreline cells preserve first-seen order, so the count-descending sort in
/// `finalize` breaks ties the same way on every run with the same stream.
#[derive(Debug, Clone, Default)]
pub struct TrialTally {
    trials: u64,
    home_wins: u64,
    draws: u64,
    away_wins: u64,
    over25: u64,
    goals_sum: f64,
    goals_sq_sum: f64,
    cells: Vec<ScoreCell>,
    index: HashMap<(u32, u32), usize>,
}

#[derive(Debug, Clone)]
struct ScoreCell {
    home: u32,
    away: u32,
    count: u64,
}

impl TrialTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, home_goals: u32, away_goals: u32) {
        self.trials += 1;
        match classify_outcome(home_goals, away_goals) {
            Outcome::Home => self.home_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::Away => self.away_wins += 1,
        }

        let total = home_goals + away_goals;
        // "> 2.5" with integer goals.
        if total >= 3 {
            self.over25 += 1;
        }
        let t = total as f64;
        self.goals_sum += t;
        self.goals_sq_sum += t * t;

        let key = (home_goals, away_goals);
        match self.index.get(&key) {
            Some(&slot) => self.cells[slot].count += 1,
            None => {
                self.index.insert(key, self.cells.len());
                self.cells.push(ScoreCell {
                    home: home_goals,
                    away: away_goals,
                    count: 1,
                });
            }
        }
    }

    /// Fold `other` into `self`. Counts add; scorelines unseen on the left
    /// append after the left's, so merging partials in a fixed worker order
    /// keeps the tie-break order fixed as well.
    pub fn merge(&mut self, other: TrialTally) {
        self.trials += other.trials;
        self.home_wins += other.home_wins;
        self.draws += other.draws;
        self.away_wins += other.away_wins;
        self.over25 += other.over25;
        self.goals_sum += other.goals_sum;
        self.goals_sq_sum += other.goals_sq_sum;

        for cell in other.cells {
            let key = (cell.home, cell.away);
            match self.index.get(&key) {
                Some(&slot) => self.cells[slot].count += cell.count,
                None => {
                    self.index.insert(key, self.cells.len());
                    self.cells.push(cell);
                }
            }
        }
    }

    /// Reduce the tally into the final report. Rejects an empty tally; the
    /// engine guarantees a positive trial count by construction.
    pub fn finalize(self) -> Result<SimulationReport> {
        if self.trials == 0 {
            bail!("no trials recorded");
        }
        let n = self.trials as f64;

        let mean = self.goals_sum / n;
        let variance = (self.goals_sq_sum / n - mean * mean).max(0.0);

        let mut cells = self.cells;
        // Stable sort: ties keep first-seen order.
        cells.sort_by(|a, b| b.count.cmp(&a.count));

        let score_distribution: Vec<ScorelineFreq> = cells
            .iter()
            .take(DISTRIBUTION_LIMIT)
            .map(|cell| ScorelineFreq {
                score: format!("{}-{}", cell.home, cell.away),
                count: cell.count,
                prob: cell.count as f64 / n * 100.0,
            })
            .collect();

        let most_likely_score = score_distribution
            .first()
            .map(|row| row.score.clone())
            .unwrap_or_default();

        Ok(SimulationReport {
            home_win_prob: self.home_wins as f64 / n * 100.0,
            draw_prob: self.draws as f64 / n * 100.0,
            away_win_prob: self.away_wins as f64 / n * 100.0,
            over25_prob: self.over25 as f64 / n * 100.0,
            variance,
            most_likely_score,
            score_distribution,
            total_simulations: self.trials,
        })
    }
}
