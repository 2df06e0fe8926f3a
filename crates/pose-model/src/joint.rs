//! Joints and skeletons.
//!
//! Two skeleton shapes coexist in the pipeline:
//! - [`Skeleton`]: the detector's raw output, an ordered list of `(x, y)`
//!   pairs in whatever body model the detector uses (empty when nothing
//!   was detected).
//! - [`Skeleton13`]: the canonical DHP19 layout, indexed by [`SkeletonJoint`].

use std::fmt;
use std::str::FromStr;

use hpe_common::{HpeError, HpeResult};
use serde::{Deserialize, Serialize};

/// Number of joints in the canonical DHP19 skeleton.
pub const DHP19_JOINT_COUNT: usize = 13;

/// A 2-D joint location in image coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Joint {
    pub u: f32,
    pub v: f32,
}

impl Joint {
    pub fn new(u: f32, v: f32) -> Self {
        Self { u, v }
    }

    pub fn is_zero(&self) -> bool {
        self.u == 0.0 && self.v == 0.0
    }
}

impl From<(f64, f64)> for Joint {
    fn from((u, v): (f64, f64)) -> Self {
        Self {
            u: u as f32,
            v: v as f32,
        }
    }
}

impl From<Joint> for (f64, f64) {
    fn from(joint: Joint) -> Self {
        (joint.u as f64, joint.v as f64)
    }
}

/// Detector output in its native joint order.
pub type Skeleton = Vec<(f64, f64)>;

/// Canonical 13-joint skeleton, indexed by [`SkeletonJoint`].
pub type Skeleton13 = [Joint; DHP19_JOINT_COUNT];

/// Fixed 18-joint skeleton in COCO order.
pub type Skeleton18 = [Joint; 18];

/// The all-zero skeleton returned when no valid pose is available.
pub const NULL_POSE: Skeleton13 = [Joint { u: 0.0, v: 0.0 }; DHP19_JOINT_COUNT];

/// True when every joint is at the origin, i.e. the "no result" sentinel.
pub fn is_null_pose(skeleton: &Skeleton13) -> bool {
    skeleton.iter().all(Joint::is_zero)
}

/// Anatomical joints of the DHP19 skeleton. The discriminant is the
/// joint's index in a [`Skeleton13`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SkeletonJoint {
    #[serde(rename = "head")]
    Head = 0,
    #[serde(rename = "shoulderR")]
    ShoulderR = 1,
    #[serde(rename = "shoulderL")]
    ShoulderL = 2,
    #[serde(rename = "elbowR")]
    ElbowR = 3,
    #[serde(rename = "elbowL")]
    ElbowL = 4,
    #[serde(rename = "hipL")]
    HipL = 5,
    #[serde(rename = "hipR")]
    HipR = 6,
    #[serde(rename = "handR")]
    HandR = 7,
    #[serde(rename = "handL")]
    HandL = 8,
    #[serde(rename = "kneeR")]
    KneeR = 9,
    #[serde(rename = "kneeL")]
    KneeL = 10,
    #[serde(rename = "footR")]
    FootR = 11,
    #[serde(rename = "footL")]
    FootL = 12,
}

/// Canonical names in index order.
const JOINT_NAMES: [(&str, SkeletonJoint); DHP19_JOINT_COUNT] = [
    ("head", SkeletonJoint::Head),
    ("shoulderR", SkeletonJoint::ShoulderR),
    ("shoulderL", SkeletonJoint::ShoulderL),
    ("elbowR", SkeletonJoint::ElbowR),
    ("elbowL", SkeletonJoint::ElbowL),
    ("hipL", SkeletonJoint::HipL),
    ("hipR", SkeletonJoint::HipR),
    ("handR", SkeletonJoint::HandR),
    ("handL", SkeletonJoint::HandL),
    ("kneeR", SkeletonJoint::KneeR),
    ("kneeL", SkeletonJoint::KneeL),
    ("footR", SkeletonJoint::FootR),
    ("footL", SkeletonJoint::FootL),
];

impl SkeletonJoint {
    /// Every joint in skeleton order.
    pub const ALL: [SkeletonJoint; DHP19_JOINT_COUNT] = [
        Self::Head,
        Self::ShoulderR,
        Self::ShoulderL,
        Self::ElbowR,
        Self::ElbowL,
        Self::HipL,
        Self::HipR,
        Self::HandR,
        Self::HandL,
        Self::KneeR,
        Self::KneeL,
        Self::FootR,
        Self::FootL,
    ];

    /// Position of this joint in a [`Skeleton13`].
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Canonical name, e.g. `"shoulderR"`.
    pub fn name(self) -> &'static str {
        JOINT_NAMES[self.index()].0
    }

    /// Look up a joint by its canonical (case-sensitive) name.
    pub fn from_name(name: &str) -> HpeResult<Self> {
        JOINT_NAMES
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|&(_, joint)| joint)
            .ok_or_else(|| HpeError::unknown_joint(name))
    }
}

impl FromStr for SkeletonJoint {
    type Err = HpeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl fmt::Display for SkeletonJoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
