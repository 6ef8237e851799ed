use serde::{Deserialize, Serialize};

/// One row of the ranked scoreline table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScorelineFreq {
    pub score: String,
    pub count: u64,
    pub prob: f64,
}

/// Aggregated output of one simulation run. Probabilities are percentages;
/// the three outcome probabilities sum to 100 up to float rounding because
/// every trial lands in exactly one class.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SimulationReport {
    pub home_win_prob: f64,
    pub draw_prob: f64,
    pub away_win_prob: f64,
    pub over25_prob: f64,
    /// Population variance of total goals across trials; volatility proxy.
    pub variance: f64,
    pub most_likely_score: String,
    /// Up to 10 entries, count-descending, first-seen order on ties.
    pub score_distribution: Vec<ScorelineFreq>,
    pub total_simulations: u64,
}

/// Exact payload handed to the commentary-generation collaborator.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CommentarySummary {
    pub prob: OutcomeProbs,
    pub variance: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OutcomeProbs {
    pub home: f64,
    pub draw: f64,
    pub away: f64,
}

impl SimulationReport {
    pub fn commentary_summary(&self) -> CommentarySummary {
        CommentarySummary {
            prob: OutcomeProbs {
                home: self.home_win_prob,
                draw: self.draw_prob,
                away: self.away_win_prob,
            },
            variance: self.variance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commentary_summary_serializes_to_expected_shape() {
        let report = SimulationReport {
            home_win_prob: 52.5,
            draw_prob: 25.0,
            away_win_prob: 22.5,
            over25_prob: 61.0,
            variance: 3.4,
            most_likely_score: "2-1".to_string(),
            score_distribution: Vec::new(),
            total_simulations: 10_000,
        };
        let json = serde_json::to_value(report.commentary_summary()).expect("serializable");
        assert_eq!(json["prob"]["home"], 52.5);
        assert_eq!(json["prob"]["draw"], 25.0);
        assert_eq!(json["prob"]["away"], 22.5);
        assert_eq!(json["variance"], 3.4);
    }

    #[test]
    fn report_fields_use_camel_case_keys() {
        let report = SimulationReport {
            home_win_prob: 40.0,
            draw_prob: 30.0,
            away_win_prob: 30.0,
            over25_prob: 50.0,
            variance: 2.0,
            most_likely_score: "1-1".to_string(),
            score_distribution: vec![ScorelineFreq {
                score: "1-1".to_string(),
                count: 1,
                prob: 100.0,
            }],
            total_simulations: 1,
        };
        let json = serde_json::to_value(&report).expect("serializable");
        assert!(json.get("homeWinProb").is_some());
        assert!(json.get("over25Prob").is_some());
        assert!(json.get("mostLikelyScore").is_some());
        assert!(json["scoreDistribution"][0].get("score").is_some());
    }
}
