//! Question selection heuristic
//!
//! The selector always works against the current leading subset: the
//! candidates holding the maximum score. At session start every score is
//! equal, so the leading subset is everyone and early questions split the
//! whole population; late in a game the same rule splits a tie among the
//! top contenders. One rule covers both.

use std::collections::BTreeMap;

use crate::dataset::Dataset;

/// Candidates currently holding the maximum score, in index order.
///
/// Empty input yields an empty subset. Scores are exact sums of quarter
/// steps, so `f64` equality is reliable here.
pub fn leading_subset(scores: &BTreeMap<usize, f64>) -> Vec<usize> {
    let max = scores.values().fold(f64::NEG_INFINITY, |a, &b| a.max(b));
    scores
        .iter()
        .filter(|(_, &score)| score == max)
        .map(|(&index, _)| index)
        .collect()
}

/// Picks the next feature to ask, or `None` when every feature has been
/// asked.
///
/// Among unasked features, prefers the one splitting the leading subset
/// closest to 50/50 (`|0.5 - yes_ratio|`, strictly smallest wins, ties
/// broken by column order). When no unasked feature remains for the
/// leading subset's table, falls back to the first unasked feature across
/// the whole dataset.
pub fn select(
    scores: &BTreeMap<usize, f64>,
    dataset: &Dataset,
    asked: &[String],
) -> Option<usize> {
    let leaders = leading_subset(scores);
    if leaders.is_empty() {
        return first_unasked(dataset, asked);
    }

    let mut best: Option<(usize, f64)> = None;
    for feature in 0..dataset.feature_count() {
        if is_asked(dataset, asked, feature) {
            continue;
        }
        let holders = leaders
            .iter()
            .filter(|&&candidate| dataset.value(candidate, feature) == 1)
            .count();
        let yes_ratio = holders as f64 / leaders.len() as f64;
        let split_quality = (0.5 - yes_ratio).abs();
        match best {
            Some((_, incumbent)) if split_quality >= incumbent => {}
            _ => best = Some((feature, split_quality)),
        }
    }

    match best {
        Some((feature, _)) => Some(feature),
        None => first_unasked(dataset, asked),
    }
}

fn first_unasked(dataset: &Dataset, asked: &[String]) -> Option<usize> {
    (0..dataset.feature_count()).find(|&feature| !is_asked(dataset, asked, feature))
}

fn is_asked(dataset: &Dataset, asked: &[String], feature: usize) -> bool {
    let name = dataset.feature_name(feature);
    asked.iter().any(|a| a == name)
}
