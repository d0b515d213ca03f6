//! Scoring predictions against ground truth encoded in read ids.
//!
//! Simulated reads carry their source in the id: `<label>|<seq id>|pos<n>`.
//! The label's position in the label list is its organism id, so the list
//! must be given in the same order the alignments were added to the graph.
//!
//! Reads predicted for several organisms are counted as ambiguous. They add
//! to an organism's ground-truth count and to the total read count, but
//! not to predicted counts or confusion counts.

use crate::classify::Prediction;
use crate::model::OrganismId;
use std::fmt;

/// Separator between the fields of a simulated read id.
pub const ID_SEPARATOR: char = '|';

/// Returns the organism a read id names as its source, if its label is known.
///
/// # Example
/// ```
/// use kmertag::evaluate::ground_truth;
///
/// let labels = ["host".to_string(), "contaminant".to_string()];
/// assert_eq!(ground_truth("contaminant|seq0|pos12", &labels), Some(1));
/// assert_eq!(ground_truth("other|seq0|pos12", &labels), None);
/// ```
pub fn ground_truth(read_id: &str, labels: &[String]) -> Option<OrganismId> {
    let label = read_id.split(ID_SEPARATOR).next()?;
    labels
        .iter()
        .position(|known| known == label)
        .and_then(|idx| OrganismId::try_from(idx).ok())
}

// =#========================================================================#=
// METRICS
// =#========================================================================#=
/// Confusion counts and derived scores for one organism.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrganismMetrics {
    pub organism: OrganismId,
    pub label: String,
    pub true_positives: usize,
    pub false_positives: usize,
    pub false_negatives: usize,
    /// `total_reads - (TP + FP + FN)`
    pub true_negatives: usize,
    /// Reads whose id names this organism, ambiguous ones included
    pub ground_truth: usize,
    /// Unambiguous reads predicted for this organism
    pub predicted: usize,
    /// All evaluated reads, ambiguous ones included
    pub total_reads: usize,
}

impl OrganismMetrics {
    /// `TP / (TP + FP)`, or 0 if nothing was predicted for this organism.
    pub fn precision(&self) -> f64 {
        ratio(self.true_positives, self.true_positives + self.false_positives)
    }

    /// `TP / (TP + FN)`, or 0 if no read stems from this organism.
    pub fn recall(&self) -> f64 {
        ratio(self.true_positives, self.true_positives + self.false_negatives)
    }

    /// Harmonic mean of precision and recall, or 0 if both are 0.
    pub fn f1(&self) -> f64 {
        let (precision, recall) = (self.precision(), self.recall());
        if precision + recall == 0.0 {
            0.0
        } else {
            2.0 * precision * recall / (precision + recall)
        }
    }

    /// `(TP + TN) / total_reads`, or 0 if there were no reads.
    pub fn accuracy(&self) -> f64 {
        ratio(self.true_positives + self.true_negatives, self.total_reads)
    }
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// Metrics for all organisms of a label list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EvaluationReport {
    /// One entry per label, in label order
    pub organisms: Vec<OrganismMetrics>,
    /// Reads predicted for more than one organism
    pub ambiguous: usize,
    /// Reads that entered the confusion counts
    pub scored: usize,
    /// All evaluated reads
    pub total: usize,
}

impl fmt::Display for EvaluationReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "Total reads: {}, scored reads: {}, ambiguous reads: {}",
            self.total, self.scored, self.ambiguous
        )?;
        for m in &self.organisms {
            writeln!(
                f,
                "{} ({}): TP={} FP={} FN={} TN={} ground truth={} predicted={} precision={:.4} recall={:.4} f1={:.4} accuracy={:.4}",
                m.label,
                m.organism,
                m.true_positives,
                m.false_positives,
                m.false_negatives,
                m.true_negatives,
                m.ground_truth,
                m.predicted,
                m.precision(),
                m.recall(),
                m.f1(),
                m.accuracy()
            )?;
        }
        Ok(())
    }
}

/// Scores predictions per organism.
///
/// # Arguments
/// * `predictions` - Classified reads whose ids encode their source
/// * `labels` - Organism labels in organism id order
///
/// # Example
/// ```
/// use kmertag::classify::Prediction;
/// use kmertag::evaluate::evaluate;
/// use kmertag::model::OrganismSet;
///
/// let labels = vec!["a".to_string(), "b".to_string()];
/// let predictions = vec![
///     Prediction { read_id: "a|s|pos0".into(), organisms: OrganismSet::from([0]) },
///     Prediction { read_id: "b|s|pos0".into(), organisms: OrganismSet::from([0]) },
///     Prediction { read_id: "b|s|pos4".into(), organisms: OrganismSet::from([0, 1]) },
/// ];
/// let report = evaluate(&predictions, &labels);
///
/// assert_eq!(report.ambiguous, 1);
/// assert_eq!(report.organisms[0].true_positives, 1);
/// assert_eq!(report.organisms[0].false_positives, 1);
/// assert_eq!(report.organisms[1].false_negatives, 1);
/// assert_eq!(report.organisms[0].true_negatives, 1);
/// assert_eq!(report.organisms[1].ground_truth, 2);
/// ```
pub fn evaluate(predictions: &[Prediction], labels: &[String]) -> EvaluationReport {
    let mut organisms: Vec<OrganismMetrics> = labels
        .iter()
        .enumerate()
        .map(|(idx, label)| OrganismMetrics {
            organism: idx as OrganismId,
            label: label.clone(),
            ..Default::default()
        })
        .collect();

    let total = predictions.len();
    let mut ambiguous = 0;
    let mut scored = 0;
    for prediction in predictions {
        let truth = ground_truth(&prediction.read_id, labels);
        if let Some(metrics) = truth.and_then(|id| organisms.get_mut(id as usize)) {
            metrics.ground_truth += 1;
        }

        if prediction.organisms.len() > 1 {
            ambiguous += 1;
            continue;
        }
        scored += 1;

        let predicted = prediction.organisms.first().copied();
        for metrics in organisms.iter_mut() {
            let id = Some(metrics.organism);
            if predicted == id {
                metrics.predicted += 1;
            }
            match (predicted == id, truth == id) {
                (true, true) => metrics.true_positives += 1,
                (true, false) => metrics.false_positives += 1,
                (false, true) => metrics.false_negatives += 1,
                (false, false) => {}
            }
        }
    }

    for metrics in organisms.iter_mut() {
        metrics.total_reads = total;
        metrics.true_negatives =
            total - (metrics.true_positives + metrics.false_positives + metrics.false_negatives);
    }

    log::info!("Evaluated {} reads ({} ambiguous)", total, ambiguous);
    EvaluationReport {
        organisms,
        ambiguous,
        scored,
        total,
    }
}
