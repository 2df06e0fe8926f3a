//! Look up a DHP19 joint by name.

use hpe_pose_model::{BodyModel, SkeletonJoint};

pub fn run(name: &str) -> anyhow::Result<()> {
    let joint = SkeletonJoint::from_name(name)?;

    println!("Joint: {joint}");
    println!("  DHP19 index: {}", joint.index());
    for model in [BodyModel::Coco18, BodyModel::Body25] {
        println!("  {model} index: {}", model.source_index(joint));
    }

    Ok(())
}
