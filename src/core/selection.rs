use ordered_float::OrderedFloat;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::decimal_to_f64;
use crate::error::ChartResult;

/// Sentinel returned by [`closest_data_set_index_or_sentinel`] when nothing matches.
pub const DATA_SET_INDEX_NOT_FOUND: isize = isize::MIN;
/// Sentinel returned by [`minimum_distance_or_sentinel`] when nothing matches.
pub const DISTANCE_NOT_FOUND: f64 = f64::MAX;

/// Which y-axis a data set is plotted against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisDependency {
    Left,
    Right,
}

/// One data point considered while resolving a touch selection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectionCandidate {
    pub data_set_index: usize,
    pub value: f64,
    pub axis: AxisDependency,
}

impl SelectionCandidate {
    #[must_use]
    pub const fn new(data_set_index: usize, value: f64, axis: AxisDependency) -> Self {
        Self {
            data_set_index,
            value,
            axis,
        }
    }

    pub fn from_decimal(
        data_set_index: usize,
        value: Decimal,
        axis: AxisDependency,
    ) -> ChartResult<Self> {
        Ok(Self::new(
            data_set_index,
            decimal_to_f64(value, "selection value")?,
            axis,
        ))
    }
}

/// Data set index of the candidate whose value is closest to `value`.
///
/// `axis` restricts the scan to one axis; `None` considers every candidate.
/// The first candidate with the strictly smallest distance wins.
#[must_use]
pub fn closest_data_set_index(
    candidates: &[SelectionCandidate],
    value: f64,
    axis: Option<AxisDependency>,
) -> Option<usize> {
    nearest(candidates, value, |candidate| {
        axis.is_none_or(|axis| candidate.axis == axis)
    })
    .map(|(candidate, _)| candidate.data_set_index)
}

/// Smallest `|candidate.value - value|` among candidates on `axis`.
#[must_use]
pub fn minimum_distance(
    candidates: &[SelectionCandidate],
    value: f64,
    axis: AxisDependency,
) -> Option<f64> {
    nearest(candidates, value, |candidate| candidate.axis == axis).map(|(_, distance)| distance)
}

/// [`closest_data_set_index`] with [`DATA_SET_INDEX_NOT_FOUND`] for no match.
#[must_use]
pub fn closest_data_set_index_or_sentinel(
    candidates: &[SelectionCandidate],
    value: f64,
    axis: Option<AxisDependency>,
) -> isize {
    closest_data_set_index(candidates, value, axis)
        .and_then(|index| isize::try_from(index).ok())
        .unwrap_or(DATA_SET_INDEX_NOT_FOUND)
}

/// [`minimum_distance`] with [`DISTANCE_NOT_FOUND`] for no match.
#[must_use]
pub fn minimum_distance_or_sentinel(
    candidates: &[SelectionCandidate],
    value: f64,
    axis: AxisDependency,
) -> f64 {
    minimum_distance(candidates, value, axis).unwrap_or(DISTANCE_NOT_FOUND)
}

fn nearest(
    candidates: &[SelectionCandidate],
    value: f64,
    mut accept: impl FnMut(&SelectionCandidate) -> bool,
) -> Option<(SelectionCandidate, f64)> {
    candidates
        .iter()
        .filter(|candidate| accept(candidate))
        .map(|candidate| (*candidate, (candidate.value - value).abs()))
        // NaN or unbounded distances never beat the "not found" bound.
        .filter(|(_, distance)| *distance < DISTANCE_NOT_FOUND)
        .min_by_key(|(_, distance)| OrderedFloat(*distance))
}
