//! Timestamped skeleton records in the `SKLT` text form.
//!
//! One record per line:
//!
//! ```text
//! <seq> <timestamp> SKLT (<u0> <v0> <u1> <v1> ... <u12> <v12>)
//! ```
//!
//! Joints are in [`SkeletonJoint`](crate::joint::SkeletonJoint) order.
//! Blank lines and lines starting with `#` are skipped when parsing files.

use std::fmt;

use hpe_common::{HpeError, HpeResult};
use serde::{Deserialize, Serialize};

use crate::joint::{Joint, Skeleton13, DHP19_JOINT_COUNT, NULL_POSE};

/// Tag separating the header fields from the joint list.
pub const SKLT_TAG: &str = "SKLT";

/// A canonical skeleton with its position in the stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkeletonRecord {
    /// Sequence number assigned by the writer.
    pub seq: u64,
    /// Seconds since stream start.
    pub timestamp: f64,
    pub joints: Skeleton13,
}

impl SkeletonRecord {
    pub fn new(seq: u64, timestamp: f64, joints: Skeleton13) -> Self {
        Self {
            seq,
            timestamp,
            joints,
        }
    }
}

impl fmt::Display for SkeletonRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} (", self.seq, self.timestamp, SKLT_TAG)?;
        for (i, joint) in self.joints.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{} {}", joint.u, joint.v)?;
        }
        f.write_str(")")
    }
}

/// Parse a single record. `line_no` is only used in error messages.
pub fn parse_sklt_line(line: &str, line_no: usize) -> HpeResult<SkeletonRecord> {
    let (header, rest) = line
        .split_once(SKLT_TAG)
        .ok_or_else(|| HpeError::parse(line_no, format!("missing {SKLT_TAG} tag")))?;

    let mut fields = header.split_whitespace();
    let seq = fields
        .next()
        .ok_or_else(|| HpeError::parse(line_no, "missing sequence number"))?
        .parse::<u64>()
        .map_err(|e| HpeError::parse(line_no, format!("bad sequence number: {e}")))?;
    let timestamp = fields
        .next()
        .ok_or_else(|| HpeError::parse(line_no, "missing timestamp"))?
        .parse::<f64>()
        .map_err(|e| HpeError::parse(line_no, format!("bad timestamp: {e}")))?;
    if fields.next().is_some() {
        return Err(HpeError::parse(line_no, "unexpected field before tag"));
    }

    let body = rest
        .trim()
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .ok_or_else(|| HpeError::parse(line_no, "joint list must be enclosed in parentheses"))?;

    let values = body
        .split_whitespace()
        .map(|token| {
            token
                .parse::<f32>()
                .map_err(|e| HpeError::parse(line_no, format!("bad coordinate {token:?}: {e}")))
        })
        .collect::<HpeResult<Vec<f32>>>()?;

    if values.len() != DHP19_JOINT_COUNT * 2 {
        return Err(HpeError::parse(
            line_no,
            format!(
                "expected {} coordinates, got {}",
                DHP19_JOINT_COUNT * 2,
                values.len()
            ),
        ));
    }

    let mut joints = NULL_POSE;
    for (joint, pair) in joints.iter_mut().zip(values.chunks_exact(2)) {
        *joint = Joint::new(pair[0], pair[1]);
    }

    Ok(SkeletonRecord::new(seq, timestamp, joints))
}

/// Parse every record in `text`. Line numbers in errors are one-based.
pub fn parse_sklt(text: &str) -> HpeResult<Vec<SkeletonRecord>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| {
            let trimmed = line.trim();
            !trimmed.is_empty() && !trimmed.starts_with('#')
        })
        .map(|(i, line)| parse_sklt_line(line, i + 1))
        .collect()
}

/// Serialize records, one per line.
pub fn to_sklt(records: &[SkeletonRecord]) -> String {
    let mut output = String::new();
    for record in records {
        output.push_str(&record.to_string());
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample_line() -> String {
        let coords = (0..26).map(|i| i.to_string()).collect::<Vec<_>>().join(" ");
        format!("7 0.5 SKLT ({coords})")
    }

    #[test]
    fn test_parse_line() {
        let record = parse_sklt_line(&sample_line(), 1).unwrap();
        assert_eq!(record.seq, 7);
        assert!((record.timestamp - 0.5).abs() < 1e-9);
        assert_eq!(record.joints[0], Joint::new(0.0, 1.0));
        assert_eq!(record.joints[12], Joint::new(24.0, 25.0));
    }

    #[test]
    fn test_display_matches_parsed_line() {
        let record = parse_sklt_line(&sample_line(), 1).unwrap();
        assert_eq!(record.to_string(), sample_line());
    }

    #[test]
    fn test_fractional_coordinates_survive() {
        let mut joints = NULL_POSE;
        joints[3] = Joint::new(12.25, -4.5);
        let record = SkeletonRecord::new(1, 2.25, joints);
        let parsed = parse_sklt_line(&record.to_string(), 1).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_timestamp_is_not_rounded() {
        let record = SkeletonRecord::new(3, 1234.56789012, NULL_POSE);
        let line = record.to_string();
        assert!(line.starts_with("3 1234.56789012 SKLT ("));
        assert_eq!(parse_sklt_line(&line, 1).unwrap(), record);
    }

    #[test]
    fn test_parse_skips_blank_and_comment_lines() {
        let text = format!("# header\n\n{}\n{}\n", sample_line(), sample_line());
        let records = parse_sklt(&text).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(to_sklt(&records).lines().count(), 2);
    }

    #[test]
    fn test_missing_tag() {
        let err = parse_sklt_line("1 0.0 (1 2)", 4).unwrap_err();
        assert!(matches!(err, HpeError::Parse { line: 4, .. }));
    }

    #[test]
    fn test_wrong_coordinate_count() {
        let err = parse_sklt_line("1 0.0 SKLT (1 2 3 4)", 1).unwrap_err();
        assert!(err.to_string().contains("expected 26 coordinates, got 4"));
    }

    #[test]
    fn test_non_numeric_coordinate() {
        let line = sample_line().replace(" 5 ", " five ");
        assert!(matches!(
            parse_sklt_line(&line, 2),
            Err(HpeError::Parse { line: 2, .. })
        ));
    }

    #[test]
    fn test_error_line_numbers_are_one_based() {
        let text = format!("{}\n1 0.0 SKLT ()\n", sample_line());
        let err = parse_sklt(&text).unwrap_err();
        assert!(matches!(err, HpeError::Parse { line: 2, .. }));
    }

    fn finite_f64() -> impl Strategy<Value = f64> {
        any::<f64>().prop_filter("finite", |t| t.is_finite())
    }

    fn finite_f32() -> impl Strategy<Value = f32> {
        any::<f32>().prop_filter("finite", |v| v.is_finite())
    }

    proptest! {
        #[test]
        fn prop_written_records_parse_back_exactly(
            seq in any::<u64>(),
            timestamp in finite_f64(),
            coords in proptest::collection::vec(finite_f32(), DHP19_JOINT_COUNT * 2),
        ) {
            let mut joints = NULL_POSE;
            for (joint, pair) in joints.iter_mut().zip(coords.chunks_exact(2)) {
                *joint = Joint::new(pair[0], pair[1]);
            }
            let record = SkeletonRecord::new(seq, timestamp, joints);
            let parsed = parse_sklt_line(&record.to_string(), 1).unwrap();
            prop_assert_eq!(parsed, record);
        }
    }
}
