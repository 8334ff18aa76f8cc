//! Aggregated survey statistics
//!
//! Turns the raw aggregation payload from the backend into the three
//! headline figures shown on the landing page. Percentages are plain
//! integer shares; a missing or zero submission total means the section
//! has nothing trustworthy to show and is reported as unavailable.

use chrono::{DateTime, Utc};

use crate::api::{CategoryCount, StatsResponse};

/// Category key counted as "aware" in the awareness distribution
const AWARENESS_KEY: &str = "sim";

/// Category key for the medically correct cause answer
const CORRECT_CAUSE_KEY: &str = "parto_prolongado";

/// Integer percentage of `count` over `total`, rounded to nearest.
///
/// A zero `total` yields 0 rather than a division error, so callers can
/// feed empty distributions straight through.
pub fn percentage_of(count: u64, total: u64) -> u8 {
    if total == 0 {
        return 0;
    }
    ((count as f64 / total as f64) * 100.0).round() as u8
}

/// Share of one named category within a distribution
fn category_share(distribution: &[CategoryCount], key: &str) -> u8 {
    let total: u64 = distribution.iter().map(|c| c.value).sum();
    let count = distribution
        .iter()
        .find(|c| c.name == key)
        .map(|c| c.value)
        .unwrap_or(0);
    percentage_of(count, total)
}

/// Headline figures derived from one stats payload
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatsSnapshot {
    /// Total questionnaire submissions received
    pub total_responses: u64,
    /// Share of respondents who had heard of fistula before
    pub awareness_pct: u8,
    /// Share of respondents who named prolonged labor as the main cause
    pub correct_cause_pct: u8,
    /// When this payload was fetched
    pub fetched_at: DateTime<Utc>,
}

impl StatsSnapshot {
    /// Derive a snapshot from the backend payload.
    ///
    /// Returns `None` when the payload carries no submission total (or a
    /// total of zero); the page then shows the unavailable notice instead
    /// of a grid of zeros.
    pub fn from_response(response: &StatsResponse, fetched_at: DateTime<Utc>) -> Option<Self> {
        let total = response.total_submissoes.unwrap_or(0);
        if total == 0 {
            return None;
        }
        Some(Self {
            total_responses: total,
            awareness_pct: category_share(&response.distribuicao_ja_ouviu_falar, AWARENESS_KEY),
            correct_cause_pct: category_share(&response.contagem_causas, CORRECT_CAUSE_KEY),
            fetched_at,
        })
    }
}

/// Lifecycle of the public statistics section
#[derive(Debug, Clone, Default, PartialEq)]
pub enum StatsState {
    /// Request in flight, show the loading notice
    #[default]
    Loading,
    /// Figures ready to display
    Ready(StatsSnapshot),
    /// Fetch failed or the payload was empty, show the error notice
    Unavailable,
}

impl StatsState {
    /// Classify a fetched payload
    pub fn from_response(response: &StatsResponse, fetched_at: DateTime<Utc>) -> Self {
        match StatsSnapshot::from_response(response, fetched_at) {
            Some(snapshot) => StatsState::Ready(snapshot),
            None => StatsState::Unavailable,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, StatsState::Loading)
    }

    pub fn snapshot(&self) -> Option<&StatsSnapshot> {
        match self {
            StatsState::Ready(snapshot) => Some(snapshot),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(name: &str, value: u64) -> CategoryCount {
        CategoryCount {
            name: name.to_string(),
            value,
        }
    }

    mod percentage {
        use super::*;

        #[test]
        fn rounds_to_nearest_integer() {
            assert_eq!(percentage_of(1, 3), 33);
            assert_eq!(percentage_of(2, 3), 67);
            assert_eq!(percentage_of(1, 2), 50);
            assert_eq!(percentage_of(499, 1000), 50);
        }

        #[test]
        fn zero_total_yields_zero() {
            assert_eq!(percentage_of(0, 0), 0);
            assert_eq!(percentage_of(7, 0), 0);
        }

        #[test]
        fn full_share_is_one_hundred() {
            assert_eq!(percentage_of(25, 25), 100);
        }

        #[test]
        fn zero_count_is_zero_even_with_responses() {
            assert_eq!(percentage_of(0, 40), 0);
        }
    }

    mod snapshot {
        use super::*;

        fn response(total: Option<u64>) -> StatsResponse {
            StatsResponse {
                total_submissoes: total,
                distribuicao_ja_ouviu_falar: vec![category("sim", 30), category("nao", 10)],
                distribuicao_tratavel: vec![],
                contagem_causas: vec![
                    category("parto_prolongado", 10),
                    category("castigo", 20),
                    category("nao_sei", 10),
                ],
            }
        }

        #[test]
        fn derives_shares_from_distributions() {
            let snapshot = StatsSnapshot::from_response(&response(Some(40)), Utc::now())
                .expect("non-empty payload should produce a snapshot");
            assert_eq!(snapshot.total_responses, 40);
            assert_eq!(snapshot.awareness_pct, 75);
            assert_eq!(snapshot.correct_cause_pct, 25);
        }

        #[test]
        fn missing_total_means_unavailable() {
            assert!(StatsSnapshot::from_response(&response(None), Utc::now()).is_none());
            assert_eq!(
                StatsState::from_response(&response(None), Utc::now()),
                StatsState::Unavailable
            );
        }

        #[test]
        fn zero_total_means_unavailable() {
            assert!(StatsSnapshot::from_response(&response(Some(0)), Utc::now()).is_none());
        }

        #[test]
        fn genuine_zero_share_still_renders() {
            // No respondent picked the correct cause: the section stays
            // visible with an honest 0%, only an empty payload hides it.
            let response = StatsResponse {
                total_submissoes: Some(12),
                distribuicao_ja_ouviu_falar: vec![category("nao", 12)],
                distribuicao_tratavel: vec![],
                contagem_causas: vec![category("castigo", 12)],
            };
            let state = StatsState::from_response(&response, Utc::now());
            let snapshot = state.snapshot().expect("should be ready");
            assert_eq!(snapshot.awareness_pct, 0);
            assert_eq!(snapshot.correct_cause_pct, 0);
        }

        #[test]
        fn shares_use_their_own_distribution_totals() {
            // Distribution sums need not match the submission total.
            let response = StatsResponse {
                total_submissoes: Some(100),
                distribuicao_ja_ouviu_falar: vec![category("sim", 1), category("nao", 2)],
                distribuicao_tratavel: vec![],
                contagem_causas: vec![],
            };
            let snapshot = StatsSnapshot::from_response(&response, Utc::now()).unwrap();
            assert_eq!(snapshot.awareness_pct, 33);
            assert_eq!(snapshot.correct_cause_pct, 0);
        }
    }
}
