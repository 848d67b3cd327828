use std::collections::HashSet;

use serde::{Deserialize, Serialize};

pub const BEST: &str = "Best";
pub const AUDIO_ONLY: &str = "Audio Only";

pub const STANDARD_LABELS: [&str; 6] = [BEST, "1080p", "720p", "480p", "360p", AUDIO_ONLY];

/// One entry of the quality selector, ordered best-first by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityOption {
    pub label: String,
    pub display: String,
}

impl QualityOption {
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        let display = if label == BEST {
            "Best Quality".to_string()
        } else {
            label.clone()
        };
        Self { label, display }
    }
}

pub fn standard_options() -> Vec<QualityOption> {
    STANDARD_LABELS.iter().map(|l| QualityOption::new(*l)).collect()
}

pub fn fallback_options() -> Vec<QualityOption> {
    vec![QualityOption::new(BEST)]
}

/// Keeps service order, dropping blanks and repeated labels.
pub fn options_from_labels<I, S>(labels: I) -> Vec<QualityOption>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    labels
        .into_iter()
        .filter_map(|l| {
            let label = l.as_ref().trim();
            if label.is_empty() || !seen.insert(label.to_string()) {
                return None;
            }
            Some(QualityOption::new(label))
        })
        .collect()
}

/// `["Best", <heights descending>, "Audio Only"]` from raw stream heights.
pub fn labels_from_heights(heights: &[u32]) -> Vec<String> {
    let mut unique: Vec<u32> = heights
        .iter()
        .copied()
        .filter(|h| *h > 0)
        .collect::<HashSet<_>>()
        .into_iter()
        .collect();
    unique.sort_unstable_by(|a, b| b.cmp(a));

    let mut labels = Vec::with_capacity(unique.len() + 2);
    labels.push(BEST.to_string());
    labels.extend(unique.into_iter().map(|h| format!("{}p", h)));
    labels.push(AUDIO_ONLY.to_string());
    labels
}

pub fn labels_of(options: &[QualityOption]) -> Vec<&str> {
    options.iter().map(|o| o.label.as_str()).collect()
}
