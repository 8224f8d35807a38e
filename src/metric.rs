//! Reaching error between a desired and a reached pose.
//!
//! The error is the Euclidean distance between positions plus the sine of
//! the angle of the relative rotation `R_desired * R_reached^T`. The two
//! terms are summed unweighted even though their units differ.

use crate::data::Pose;
use nalgebra as na;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReachingError {
    pub position: f64,
    pub orientation: f64,
}

impl ReachingError {
    pub fn total(&self) -> f64 {
        self.position + self.orientation
    }
}

pub fn position_error(desired: &Pose, reached: &Pose) -> f64 {
    (desired.position - reached.position).norm()
}

pub fn orientation_error(desired: &Pose, reached: &Pose) -> f64 {
    let relative = desired.orientation * reached.orientation.transpose();
    rotation_vector(&relative).norm().sin()
}

pub fn reaching_error(desired: &Pose, reached: &Pose) -> ReachingError {
    ReachingError {
        position: position_error(desired, reached),
        orientation: orientation_error(desired, reached),
    }
}

/// Angle of a rotation in `[0, pi]`, the norm of its rotation vector.
///
/// The cosine is clamped so round-off on near identity or half turn
/// rotations can't produce NaN.
pub fn rotation_angle(rotation: &na::Rotation3<f64>) -> f64 {
    let cos = (rotation.matrix().trace() - 1.0) / 2.0;
    cos.max(-1.0).min(1.0).acos()
}

/// Axis-angle representation: unit axis scaled by the rotation angle.
///
/// Near a half turn the skew-symmetric part vanishes, so the axis is read
/// from `(R + I) / 2`, which tends to `axis * axis^T`.
pub fn rotation_vector(rotation: &na::Rotation3<f64>) -> na::Vector3<f64> {
    let angle = rotation_angle(rotation);
    let m = rotation.matrix();
    let skew = na::Vector3::new(
        m[(2, 1)] - m[(1, 2)],
        m[(0, 2)] - m[(2, 0)],
        m[(1, 0)] - m[(0, 1)],
    );
    if std::f64::consts::PI - angle > HALF_TURN_TOLERANCE {
        return match skew.try_normalize(f64::EPSILON) {
            Some(axis) => axis * angle,
            None => na::Vector3::zeros(),
        };
    }

    let outer = (m + na::Matrix3::identity()) * 0.5;
    let mut column = 0;
    for i in 1..3 {
        if outer[(i, i)] > outer[(column, column)] {
            column = i;
        }
    }
    let mut axis = outer.column(column).clone_owned().normalize();
    if axis.dot(&skew) < 0.0 {
        axis = -axis;
    }
    axis * angle
}

const HALF_TURN_TOLERANCE: f64 = 1e-6;
