use nalgebra as na;
use std::collections::BTreeMap;

/// A 6-DoF pose read from a scene document.
#[derive(Debug, Clone, PartialEq)]
pub struct Pose {
    pub position: na::Vector3<f64>,
    pub orientation: na::Rotation3<f64>,
}

impl Pose {
    pub fn new(position: na::Vector3<f64>, orientation: na::Rotation3<f64>) -> Self {
        Self {
            position,
            orientation,
        }
    }

    pub fn from_matrix(matrix: &[[f64; 4]; 3]) -> Self {
        Self::new(matrix.to_position(), matrix.to_rotation())
    }
}

/// Poses of one scene document keyed by frame name.
pub type PoseSet = BTreeMap<String, Pose>;

/// Row-major 3x4 pose matrix as it appears in scene documents:
/// the left 3x3 block is the rotation, the last column the translation.
pub trait PoseMatrix {
    fn to_position(&self) -> na::Vector3<f64>;
    fn to_rotation(&self) -> na::Rotation3<f64>;
}

impl PoseMatrix for [[f64; 4]; 3] {
    fn to_position(&self) -> na::Vector3<f64> {
        na::Vector3::new(self[0][3], self[1][3], self[2][3])
    }

    /// The block is taken as is. Scene documents are trusted to hold an
    /// orthonormal matrix, anything else yields a meaningless rotation.
    fn to_rotation(&self) -> na::Rotation3<f64> {
        let m = self;
        na::Rotation3::from_matrix_unchecked(na::Matrix3::new(
            m[0][0], m[0][1], m[0][2], //
            m[1][0], m[1][1], m[1][2], //
            m[2][0], m[2][1], m[2][2],
        ))
    }
}
