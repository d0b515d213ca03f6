//! Organism identifiers and sets.

use std::collections::BTreeSet;

/// Identifier of an input organism (0-based, in order of input files).
pub type OrganismId = u32;

/// Ordered set of organism ids.
///
/// Ordered so that textual labels and iteration are reproducible.
pub type OrganismSet = BTreeSet<OrganismId>;

/// Joins organism ids with commas, e.g. `{0, 2}` becomes `"0,2"`.
///
/// # Example
/// ```
/// use kmertag::model::{OrganismSet, join_organisms};
///
/// let organisms = OrganismSet::from([2, 0]);
/// assert_eq!(join_organisms(&organisms), "0,2");
/// ```
pub fn join_organisms(organisms: &OrganismSet) -> String {
    organisms
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
