//! Mutation forge
//!
//! Synthesizes weighted proposals for future changes from a fixed template
//! table. Output is a pure function of the model and the options.

use tracing::debug;

use super::constants::{MUTATION_TEMPLATES, MutationTemplate, forge};
use super::random::SeededRandom;
use crate::model::{Axis, EvolutionModel, ForgeOptions, MutationCandidate};

/// Generate `options.count` candidates for `model`
///
/// Returns an empty list for a model without entries. Any novelty value is
/// accepted; above 0.45 every template is eligible.
pub fn generate_mutations(model: &EvolutionModel, options: ForgeOptions) -> Vec<MutationCandidate> {
    if model.is_empty() {
        return Vec::new();
    }

    let novelty = options.novelty;
    let mut random =
        SeededRandom::from_text(&format!("{}|{}", model.latest_date, format_novelty(novelty)));

    let underused = underused_axis(model);
    let weak_files = weak_files(model);
    let eligible: Vec<&MutationTemplate> = MUTATION_TEMPLATES
        .iter()
        .filter(|t| novelty > forge::NOVELTY_OPEN_THRESHOLD || t.axis == underused)
        .collect();

    debug!(
        novelty,
        count = options.count,
        underused = %underused,
        eligible = eligible.len(),
        "forging mutation candidates"
    );

    (1..=options.count)
        .map(|n| {
            let template = eligible[random.next_index(eligible.len())];
            let extra_file = if weak_files.is_empty() {
                forge::FALLBACK_FILE
            } else {
                weak_files[random.next_index(weak_files.len())]
            };
            let predicted_impact = js_round((forge::IMPACT_BASE + random.next_f64() * novelty) * 100.0)
                .max(forge::IMPACT_FLOOR);
            let disruption = js_round(
                (forge::DISRUPTION_BASE + random.next_f64() * forge::DISRUPTION_SPREAD)
                    * (forge::DISRUPTION_NOVELTY_OFFSET + novelty),
            )
            .max(forge::DISRUPTION_FLOOR);

            MutationCandidate {
                id: format!("mutation-{n}"),
                axis: template.axis,
                title: template.title.to_string(),
                rationale: template.rationale.to_string(),
                predicted_impact,
                disruption,
                files: dedup_files(template.files.iter().copied().chain([extra_file])),
            }
        })
        .collect()
}

/// Least represented axis; ties go to the earliest in [`Axis::ALL`]
pub fn underused_axis(model: &EvolutionModel) -> Axis {
    model
        .axis_balance
        .iter()
        .min_by_key(|c| c.count)
        .map(|c| c.axis)
        .unwrap_or(Axis::Governance)
}

/// Up to eight least-used paths, ascending by count
fn weak_files(model: &EvolutionModel) -> Vec<&str> {
    let mut ranked: Vec<(&str, usize)> = model
        .file_frequency
        .iter()
        .map(|(file, count)| (file.as_str(), *count))
        .collect();
    ranked.sort_by_key(|(_, count)| *count);
    ranked
        .into_iter()
        .take(forge::WEAK_FILE_POOL)
        .map(|(file, _)| file)
        .collect()
}

fn dedup_files<'a>(files: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut unique: Vec<String> = Vec::new();
    for file in files {
        if !unique.iter().any(|seen| seen == file) {
            unique.push(file.to_string());
        }
    }
    unique
}

/// Round half toward positive infinity
fn js_round(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Two-decimal rendering of the novelty used in the seed
///
/// Exact halfway values (odd multiples of 1/8) round away from zero so that
/// seeds match the ones the dashboard has always produced.
pub fn format_novelty(novelty: f64) -> String {
    if !novelty.is_finite() {
        return if novelty.is_nan() {
            "NaN".to_string()
        } else if novelty > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }

    let magnitude = novelty.abs();
    let eighths = magnitude * 8.0;
    let is_halfway = eighths.fract() == 0.0 && eighths < 1e15 && (eighths as u64) % 2 == 1;
    let sign = if novelty < 0.0 { "-" } else { "" };

    if is_halfway {
        let hundredths = (magnitude * 100.0).floor() as u64 + 1;
        format!("{sign}{}.{:02}", hundredths / 100, hundredths % 100)
    } else {
        format!("{sign}{magnitude:.2}")
    }
}
