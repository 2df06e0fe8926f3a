//! Summarize a packed event-camera recording.

use std::path::PathBuf;

use hpe_pose_model::decode_events;

pub fn run(path: PathBuf, limit: usize) -> anyhow::Result<()> {
    let bytes = std::fs::read(&path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", path.display()))?;
    let events = decode_events(&bytes)?;

    println!("Events: {}", path.display());
    println!("  Count: {}", events.len());

    if events.is_empty() {
        return Ok(());
    }

    let on = events.iter().filter(|e| e.polarity()).count();
    println!("  Polarity: {} on / {} off", on, events.len() - on);

    let first = events.first().map(|e| e.stamp()).unwrap_or_default();
    let last = events.last().map(|e| e.stamp()).unwrap_or_default();
    println!("  Stamps: {first} .. {last}");

    let regressions = events.windows(2).filter(|w| w[1].stamp() < w[0].stamp()).count();
    if regressions > 0 {
        tracing::warn!(regressions, "event stamps are not monotonic");
    }

    if limit > 0 {
        println!();
        for event in events.iter().take(limit) {
            println!("{}", serde_json::to_string(event)?);
        }
    }

    Ok(())
}
