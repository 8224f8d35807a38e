//! Workspace regions used to bucket poses.
//!
//! Regions are rectangles in the (x, y) plane of the workspace. Only the y
//! extent takes part in classification; the x extent is kept so the regions
//! describe the full table area.

use nalgebra as na;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    /// One based, as used in report labels.
    pub index: usize,
    pub corners: [[f64; 2]; 4],
}

pub static REGIONS: [Region; 3] = [
    Region {
        index: 1,
        corners: [[0.0, 0.0], [0.0, 123.33], [-544.0, 0.0], [-544.0, 123.33]],
    },
    Region {
        index: 2,
        corners: [
            [0.0, 123.33],
            [0.0, 246.66],
            [-544.0, 123.33],
            [-544.0, 246.66],
        ],
    },
    Region {
        index: 3,
        corners: [
            [0.0, 246.66],
            [0.0, 370.0],
            [-544.0, 246.66],
            [-544.0, 370.0],
        ],
    },
];

impl Region {
    /// Minimum and maximum y over the corners.
    pub fn depth_bounds(&self) -> (f64, f64) {
        self.corners
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), corner| {
                (min.min(corner[1]), max.max(corner[1]))
            })
    }

    /// Inclusive on both ends, so neighbouring regions share their boundary.
    pub fn contains(&self, position: &na::Vector3<f64>) -> bool {
        let (min, max) = self.depth_bounds();
        position.y >= min && position.y <= max
    }
}

/// All regions containing `position`.
pub fn classify<'a>(
    position: &'a na::Vector3<f64>,
) -> impl Iterator<Item = &'static Region> + 'a {
    REGIONS.iter().filter(move |region| region.contains(position))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at_depth(y: f64) -> na::Vector3<f64> {
        na::Vector3::new(-300.0, y, 20.0)
    }

    fn indices(y: f64) -> Vec<usize> {
        classify(&at_depth(y)).map(|region| region.index).collect()
    }

    #[test]
    fn bounds_follow_corners() {
        assert_eq!(REGIONS[0].depth_bounds(), (0.0, 123.33));
        assert_eq!(REGIONS[1].depth_bounds(), (123.33, 246.66));
        assert_eq!(REGIONS[2].depth_bounds(), (246.66, 370.0));
    }

    #[test]
    fn interior_positions_belong_to_one_region() {
        assert_eq!(indices(50.0), vec![1]);
        assert_eq!(indices(200.0), vec![2]);
        assert_eq!(indices(300.0), vec![3]);
    }

    #[test]
    fn shared_boundaries_count_in_both_regions() {
        assert_eq!(indices(123.33), vec![1, 2]);
        assert_eq!(indices(246.66), vec![2, 3]);
    }

    #[test]
    fn outer_edges_are_inclusive() {
        assert_eq!(indices(0.0), vec![1]);
        assert_eq!(indices(370.0), vec![3]);
    }

    #[test]
    fn outside_positions_belong_to_no_region() {
        assert!(indices(-0.01).is_empty());
        assert!(indices(370.5).is_empty());
    }

    #[test]
    fn x_extent_is_ignored() {
        let far_off_table = na::Vector3::new(1000.0, 60.0, 0.0);
        assert!(REGIONS[0].contains(&far_off_table));
    }
}
