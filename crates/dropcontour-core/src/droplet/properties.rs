use ndarray::Array2;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::consts::{DEFAULT_RATIO_TOLERANCE, MIN_FIT_POINTS};
use crate::contour::{
    contour_child_finder, find_contours, ChainApproximation, Contour, ContourSet, RetrievalMode,
};
use crate::ellipse::{fit_ellipse_direct, plausibility, EllipseFit};

use super::split::{split_contour, SplitConfig};

/// Parameters of the contour decomposition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DropletPropertiesConfig {
    /// Fewer contour points than this are never fitted.
    pub min_fit_points: usize,
    /// Maximum deviation of the area or perimeter ratio from 1.0.
    pub ratio_tolerance: f64,
    pub split: SplitConfig,
}

impl Default for DropletPropertiesConfig {
    fn default() -> Self {
        Self {
            min_fit_points: MIN_FIT_POINTS,
            ratio_tolerance: DEFAULT_RATIO_TOLERANCE,
            split: SplitConfig::default(),
        }
    }
}

/// Outcome of [`measure_droplet_properties`].
#[derive(Clone, Debug, Default)]
pub struct DropletProperties {
    /// Every traced contour with its hierarchy; `None` when the mask has none.
    pub contours: Option<ContourSet>,
    /// Fits that passed the plausibility check, in discovery order.
    pub ellipses: Vec<EllipseFit>,
    /// Candidates that reached the fitting stage, accepted or not.
    pub fit_attempts: usize,
}

/// Fit ellipses to the droplets outlined in a binary boundary mask.
///
/// Contours with exactly one child are fitted directly. Contours with more
/// than one child are treated as several droplets merged together and split
/// first; every part is fitted. Contours without children are skipped.
pub fn measure_droplet_properties(mask: &Array2<bool>, config: &DropletPropertiesConfig) -> DropletProperties {
    let set = find_contours(mask, RetrievalMode::Tree, ChainApproximation::Simple);
    if set.is_empty() {
        debug!("No contours found");
        return DropletProperties::default();
    }

    let mut ellipses = Vec::new();
    let mut fit_attempts = 0usize;

    for (index, contour) in set.contours.iter().enumerate() {
        let (child_count, _) = contour_child_finder(index, &set.hierarchy);
        match child_count {
            0 => {}
            1 => {
                fit_attempts += 1;
                ellipses.extend(try_fit(contour, config));
            }
            _ => {
                let parts = split_contour(mask.dim(), contour, &config.split);
                trace!(index, child_count, parts = parts.len(), "Merged contour split");
                for part in &parts {
                    fit_attempts += 1;
                    ellipses.extend(try_fit(part, config));
                }
            }
        }
    }

    debug!(
        contours = set.len(),
        fit_attempts,
        accepted = ellipses.len(),
        "Droplet properties measured"
    );

    DropletProperties {
        contours: Some(set),
        ellipses,
        fit_attempts,
    }
}

/// Fit one candidate and keep it only if it agrees with the contour.
fn try_fit(contour: &Contour, config: &DropletPropertiesConfig) -> Option<EllipseFit> {
    if contour.len() < config.min_fit_points {
        trace!(points = contour.len(), "Too few points to fit");
        return None;
    }

    let ellipse = fit_ellipse_direct(&contour.to_f64())?;
    let Some(ratios) = plausibility(&ellipse, contour) else {
        trace!("Degenerate fit dropped");
        return None;
    };

    if ratios.is_acceptable(config.ratio_tolerance) {
        Some(ellipse)
    } else {
        trace!(
            area_ratio = ratios.area_ratio,
            perimeter_ratio = ratios.perimeter_ratio,
            "Implausible fit dropped"
        );
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_point_contour_is_not_fitted() {
        let square = Contour::from_xy(&[(0, 0), (10, 0), (10, 10), (0, 10)]);
        assert!(try_fit(&square, &DropletPropertiesConfig::default()).is_none());
    }

    #[test]
    fn test_empty_mask_has_no_contours() {
        let mask = Array2::from_elem((16, 16), false);
        let result = measure_droplet_properties(&mask, &DropletPropertiesConfig::default());
        assert!(result.contours.is_none());
        assert!(result.ellipses.is_empty());
        assert_eq!(result.fit_attempts, 0);
    }

    #[test]
    fn test_filled_blob_is_skipped() {
        let mask = Array2::from_shape_fn((20, 20), |(r, c)| (5..15).contains(&r) && (5..15).contains(&c));
        let result = measure_droplet_properties(&mask, &DropletPropertiesConfig::default());
        assert_eq!(result.contours.map(|s| s.len()), Some(1));
        assert_eq!(result.fit_attempts, 0);
    }
}
