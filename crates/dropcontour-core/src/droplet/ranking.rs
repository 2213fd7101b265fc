use serde::{Deserialize, Serialize};

use crate::ellipse::EllipseFit;

/// `(center_x, center_y, major_axis, minor_axis, angle)`.
pub type EllipseTuple = (f64, f64, f64, f64, f64);

/// Accepted fits ordered from largest to smallest.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EllipseSummary {
    pub count: usize,
    /// One tuple per fit in sorted order; a single all-zero tuple when there
    /// are no fits.
    pub properties: Vec<EllipseTuple>,
    pub sorted: Vec<EllipseFit>,
}

/// Rank fits by `major × minor`, descending. Equal keys keep their order.
pub fn ellipses_analysis(ellipses: &[EllipseFit]) -> EllipseSummary {
    if ellipses.is_empty() {
        return EllipseSummary {
            count: 0,
            properties: vec![(0.0, 0.0, 0.0, 0.0, 0.0)],
            sorted: Vec::new(),
        };
    }

    let mut sorted = ellipses.to_vec();
    sorted.sort_by(|a, b| b.ranking_key().total_cmp(&a.ranking_key()));

    EllipseSummary {
        count: sorted.len(),
        properties: sorted.iter().map(EllipseFit::as_tuple).collect(),
        sorted,
    }
}
