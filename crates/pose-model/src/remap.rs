//! Conversion of detector skeletons into the DHP19 layout.
//!
//! Every conversion is a gather: output joint `j` is the input pair at
//! `model.table()[j]`. Coordinates are copied as-is.

use hpe_common::{HpeError, HpeResult};

use crate::body_model::BodyModel;
use crate::joint::{Joint, Skeleton, Skeleton13, Skeleton18, SkeletonJoint, NULL_POSE};

/// Source pairs feeding each DHP19 joint, in skeleton order.
///
/// Fails with [`HpeError::IndexOutOfRange`] when `input` holds fewer joints
/// than the model defines; past that check every table index is in bounds.
fn gather(
    input: &[(f64, f64)],
    model: BodyModel,
) -> HpeResult<impl Iterator<Item = (f64, f64)> + '_> {
    let required = model.joint_count();
    if input.len() < required {
        return Err(HpeError::IndexOutOfRange {
            index: required - 1,
            len: input.len(),
        });
    }
    Ok(model.table().iter().map(move |&source| input[source]))
}

/// Gather the DHP19 joints out of a skeleton in `model` order.
///
/// Extra trailing joints are ignored.
pub fn remap_to_dhp19(input: &[(f64, f64)], model: BodyModel) -> HpeResult<Skeleton13> {
    let mut out = NULL_POSE;
    for (slot, pair) in out.iter_mut().zip(gather(input, model)?) {
        *slot = Joint::from(pair);
    }
    Ok(out)
}

/// Convert an 18-joint COCO detection, rejecting any other length.
pub fn try_coco18_to_dhp19(input: &[(f64, f64)]) -> HpeResult<Skeleton13> {
    let expected = BodyModel::Coco18.joint_count();
    if input.len() != expected {
        return Err(HpeError::malformed(expected, input.len()));
    }
    remap_to_dhp19(input, BodyModel::Coco18)
}

/// Convert an 18-joint COCO detection.
///
/// Input of any other length yields [`NULL_POSE`]; callers must read that as
/// "no pose", see [`is_null_pose`](crate::joint::is_null_pose). An empty
/// input (nothing detected) is silent, any other mismatch logs a warning.
pub fn coco18_to_dhp19(input: &[(f64, f64)]) -> Skeleton13 {
    match try_coco18_to_dhp19(input) {
        Ok(skeleton) => skeleton,
        Err(e) => {
            if !input.is_empty() {
                tracing::warn!("Converting 18 joint to 13 joint: {}", e);
            }
            NULL_POSE
        }
    }
}

/// Convert a fixed-size COCO skeleton.
pub fn skeleton18_to_dhp19(input: &Skeleton18) -> Skeleton13 {
    let mut out = NULL_POSE;
    for joint in SkeletonJoint::ALL {
        out[joint.index()] = input[BodyModel::Coco18.source_index(joint)];
    }
    out
}

/// Convert a BODY_25 detection into a 13-pair generic skeleton in DHP19
/// order. Reads only from `input`.
pub fn body25_to_dhp19(input: &[(f64, f64)]) -> HpeResult<Skeleton> {
    Ok(gather(input, BodyModel::Body25)?.collect())
}
