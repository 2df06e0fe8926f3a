use hpe_pose_model::event::{decode_events, encode_events, PixelEvent};
use hpe_pose_model::joint::{is_null_pose, SkeletonJoint};
use hpe_pose_model::remap::{body25_to_dhp19, coco18_to_dhp19, remap_to_dhp19};
use hpe_pose_model::sklt::{parse_sklt, to_sklt, SkeletonRecord};
use hpe_pose_model::BodyModel;

fn detection(len: usize, offset: f64) -> Vec<(f64, f64)> {
    (0..len)
        .map(|i| (offset + i as f64, offset + 100.0 + i as f64))
        .collect()
}

#[test]
fn detections_to_sklt_and_back() {
    let frames = vec![detection(18, 0.0), Vec::new(), detection(18, 50.0)];

    let records: Vec<SkeletonRecord> = frames
        .iter()
        .map(|frame| coco18_to_dhp19(frame))
        .enumerate()
        .filter(|(_, pose)| !is_null_pose(pose))
        .map(|(seq, pose)| SkeletonRecord::new(seq as u64, seq as f64 * 0.01, pose))
        .collect();

    assert_eq!(records.len(), 2);
    assert_eq!(records[1].seq, 2);

    let text = to_sklt(&records);
    let parsed = parse_sklt(&text).unwrap();
    assert_eq!(parsed, records);

    let knee = parsed[1].joints[SkeletonJoint::KneeL.index()];
    assert_eq!((knee.u, knee.v), (62.0, 162.0));
}

#[test]
fn joint_selected_by_name_reads_from_both_models() {
    let joint: SkeletonJoint = "hipL".parse().unwrap();

    let coco = remap_to_dhp19(&detection(18, 0.0), BodyModel::Coco18).unwrap();
    let body25 = remap_to_dhp19(&detection(25, 0.0), BodyModel::Body25).unwrap();

    assert_eq!(coco[joint.index()].u, 11.0);
    assert_eq!(body25[joint.index()].u, 12.0);
    assert_eq!(
        body25_to_dhp19(&detection(25, 0.0)).unwrap()[joint.index()],
        (12.0, 112.0)
    );
}

#[test]
fn event_stream_survives_wire_encoding() {
    let events: Vec<PixelEvent> = (0..256u32)
        .map(|i| PixelEvent::new(i % 2 == 0, (i * 4) as u16, (i * 2) as u16, i * 1000).unwrap())
        .collect();

    let bytes = encode_events(&events);
    assert_eq!(bytes.len(), events.len() * 8);

    let decoded = decode_events(&bytes).unwrap();
    assert_eq!(decoded, events);
    assert!(decoded.windows(2).all(|w| w[0].stamp() <= w[1].stamp()));
}
