//! Convert detector skeletons to DHP19 SKLT records.

use std::path::PathBuf;

use hpe_common::HpeError;
use hpe_pose_model::{
    coco18_to_dhp19, is_null_pose, remap_to_dhp19, try_coco18_to_dhp19, BodyModel, Skeleton,
    SkeletonRecord,
};
use serde::Deserialize;

/// One line of detector output.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Detection {
    Stamped { ts: f64, joints: Skeleton },
    Bare(Skeleton),
}

impl Detection {
    fn into_parts(self) -> (f64, Skeleton) {
        match self {
            Self::Stamped { ts, joints } => (ts, joints),
            Self::Bare(joints) => (0.0, joints),
        }
    }
}

pub fn run(input: PathBuf, model: &str, strict: bool, json: bool) -> anyhow::Result<()> {
    let model: BodyModel = model.parse()?;
    let content = std::fs::read_to_string(&input)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", input.display()))?;

    tracing::debug!(%model, strict, "remapping {}", input.display());

    let mut seq = 0u64;
    let mut converted = 0usize;
    let mut skipped = 0usize;

    for (i, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let line_no = i + 1;
        let record_seq = seq;
        seq += 1;

        let detection: Detection = serde_json::from_str(trimmed)
            .map_err(|e| HpeError::parse(line_no, format!("invalid detection: {e}")))?;
        let (timestamp, joints) = detection.into_parts();

        if joints.is_empty() {
            tracing::debug!(line = line_no, "no detection");
            skipped += 1;
            continue;
        }

        let pose = match model {
            BodyModel::Coco18 if strict => try_coco18_to_dhp19(&joints)
                .map_err(|e| anyhow::anyhow!("Line {line_no}: {e}"))?,
            BodyModel::Coco18 => coco18_to_dhp19(&joints),
            BodyModel::Body25 => remap_to_dhp19(&joints, model)
                .map_err(|e| anyhow::anyhow!("Line {line_no}: {e}"))?,
        };

        if is_null_pose(&pose) {
            skipped += 1;
            continue;
        }

        let record = SkeletonRecord::new(record_seq, timestamp, pose);
        if json {
            println!("{}", serde_json::to_string(&record)?);
        } else {
            println!("{record}");
        }
        converted += 1;
    }

    tracing::info!(converted, skipped, "remap finished");
    Ok(())
}
