//! Relation configuration.

/// Knobs for the relation algebra.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RelationCfg {
    /// Minimum `ratio_containing` for `Rectangle::contains`. `1.0` means all
    /// of the receiver's area must be shared with the other rectangle.
    pub contain_threshold: f64,
}

impl Default for RelationCfg {
    fn default() -> Self {
        Self {
            contain_threshold: 1.0,
        }
    }
}
