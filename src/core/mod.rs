pub mod math;
pub mod numeric;
pub mod primitives;
pub mod selection;
pub mod types;

pub use math::{get_position, normalized_angle_from_angle};
pub use numeric::{decimals, next_up, round_to_next_significant};
pub use selection::{
    AxisDependency, DATA_SET_INDEX_NOT_FOUND, DISTANCE_NOT_FOUND, SelectionCandidate,
    closest_data_set_index, closest_data_set_index_or_sentinel, minimum_distance,
    minimum_distance_or_sentinel,
};
pub use types::{Point, Rect, Size};
