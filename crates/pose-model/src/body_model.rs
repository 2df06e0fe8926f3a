//! Source body models and their DHP19 index tables.
//!
//! Each table gives, for every [`SkeletonJoint`] in skeleton order, the index
//! of the matching joint in the detector's output. Neither OpenPose model
//! has a head, hands or feet, so those slots take the nose, wrists and
//! ankles respectively. A change to a model's joint order means replacing
//! its whole table.

use std::fmt;
use std::str::FromStr;

use hpe_common::{HpeError, HpeResult};
use serde::{Deserialize, Serialize};

use crate::joint::{SkeletonJoint, DHP19_JOINT_COUNT};

/// OpenPose COCO (18 keypoints) index for each DHP19 joint.
pub const COCO18_TO_DHP19: [usize; DHP19_JOINT_COUNT] = [
    0,  // head <- nose
    2,  // shoulderR
    5,  // shoulderL
    3,  // elbowR
    6,  // elbowL
    11, // hipL
    8,  // hipR
    4,  // handR <- right wrist
    7,  // handL <- left wrist
    9,  // kneeR
    12, // kneeL
    10, // footR <- right ankle
    13, // footL <- left ankle
];

/// OpenPose BODY_25 index for each DHP19 joint.
pub const BODY25_TO_DHP19: [usize; DHP19_JOINT_COUNT] = [
    0,  // head <- nose
    2,  // shoulderR
    5,  // shoulderL
    3,  // elbowR
    6,  // elbowL
    12, // hipL
    9,  // hipR
    4,  // handR <- right wrist
    7,  // handL <- left wrist
    10, // kneeR
    13, // kneeL
    11, // footR <- right ankle
    14, // footL <- left ankle
];

/// Joint convention of a pose detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyModel {
    /// OpenPose COCO model, 18 keypoints.
    #[default]
    Coco18,
    /// OpenPose BODY_25 model, 25 keypoints.
    Body25,
}

impl BodyModel {
    /// Number of joints a full detection carries.
    pub const fn joint_count(self) -> usize {
        match self {
            Self::Coco18 => 18,
            Self::Body25 => 25,
        }
    }

    /// DHP19 index table for this model.
    pub const fn table(self) -> &'static [usize; DHP19_JOINT_COUNT] {
        match self {
            Self::Coco18 => &COCO18_TO_DHP19,
            Self::Body25 => &BODY25_TO_DHP19,
        }
    }

    /// Index in this model's output that feeds `joint`.
    pub fn source_index(self, joint: SkeletonJoint) -> usize {
        self.table()[joint.index()]
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Coco18 => "coco18",
            Self::Body25 => "body25",
        }
    }
}

impl FromStr for BodyModel {
    type Err = HpeError;

    fn from_str(s: &str) -> HpeResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "coco" | "coco18" => Ok(Self::Coco18),
            "body25" | "body_25" => Ok(Self::Body25),
            _ => Err(HpeError::unknown_body_model(s)),
        }
    }
}

impl fmt::Display for BodyModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_fit_their_models() {
        for model in [BodyModel::Coco18, BodyModel::Body25] {
            let max = model.table().iter().copied().max().unwrap();
            assert!(max < model.joint_count(), "{model} table exceeds joint count");
        }
    }

    #[test]
    fn test_tables_have_no_duplicates() {
        for model in [BodyModel::Coco18, BodyModel::Body25] {
            let mut indices = model.table().to_vec();
            indices.sort_unstable();
            indices.dedup();
            assert_eq!(indices.len(), DHP19_JOINT_COUNT);
        }
    }

    #[test]
    fn test_substituted_joints() {
        let coco = BodyModel::Coco18;
        assert_eq!(coco.source_index(SkeletonJoint::Head), 0);
        assert_eq!(coco.source_index(SkeletonJoint::HandR), 4);
        assert_eq!(coco.source_index(SkeletonJoint::FootL), 13);

        let body25 = BodyModel::Body25;
        assert_eq!(body25.source_index(SkeletonJoint::HipL), 12);
        assert_eq!(body25.source_index(SkeletonJoint::FootL), 14);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("coco".parse::<BodyModel>().unwrap(), BodyModel::Coco18);
        assert_eq!("COCO18".parse::<BodyModel>().unwrap(), BodyModel::Coco18);
        assert_eq!("BODY_25".parse::<BodyModel>().unwrap(), BodyModel::Body25);
        assert!(matches!(
            "mpi".parse::<BodyModel>(),
            Err(HpeError::UnknownBodyModel { .. })
        ));
    }

    #[test]
    fn test_display_parses_back() {
        for model in [BodyModel::Coco18, BodyModel::Body25] {
            assert_eq!(model.to_string().parse::<BodyModel>().unwrap(), model);
        }
    }
}
