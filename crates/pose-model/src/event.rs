//! Event-camera records.
//!
//! A [`PixelEvent`] travels between the camera driver and downstream
//! consumers as one little-endian 64-bit word. Field offsets are fixed here
//! instead of relying on compiler bit-field packing:
//!
//! | field    | bits    | width |
//! |----------|---------|-------|
//! | polarity | 0       | 1     |
//! | x        | 1..=10  | 10    |
//! | reserved | 11      | 1     |
//! | y        | 12..=20 | 9     |
//! | reserved | 21..=31 | 11    |
//! | stamp    | 32..=63 | 32    |

use hpe_common::{HpeError, HpeResult};
use serde::{Deserialize, Serialize};

/// Size of one encoded event in bytes.
pub const EVENT_RECORD_BYTES: usize = 8;

const POLARITY_SHIFT: u32 = 0;
const POLARITY_BITS: u32 = 1;
const X_SHIFT: u32 = 1;
const X_BITS: u32 = 10;
const Y_SHIFT: u32 = 12;
const Y_BITS: u32 = 9;
const STAMP_SHIFT: u32 = 32;
const STAMP_BITS: u32 = 32;

/// Largest encodable x coordinate.
pub const MAX_X: u16 = (1 << X_BITS) - 1;
/// Largest encodable y coordinate.
pub const MAX_Y: u16 = (1 << Y_BITS) - 1;

const fn mask(bits: u32) -> u64 {
    (1u64 << bits) - 1
}

/// A single brightness-change event reported by the sensor.
///
/// Fields are private so every instance satisfies `x <= MAX_X` and
/// `y <= MAX_Y`; deserialization goes through the same check as
/// [`PixelEvent::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "RawPixelEvent")]
pub struct PixelEvent {
    polarity: bool,
    x: u16,
    y: u16,
    stamp: u32,
}

/// Unchecked serde form of [`PixelEvent`].
#[derive(Deserialize)]
struct RawPixelEvent {
    polarity: bool,
    x: u16,
    y: u16,
    stamp: u32,
}

impl TryFrom<RawPixelEvent> for PixelEvent {
    type Error = HpeError;

    fn try_from(raw: RawPixelEvent) -> HpeResult<Self> {
        Self::new(raw.polarity, raw.x, raw.y, raw.stamp)
    }
}

impl PixelEvent {
    /// Create an event, rejecting coordinates that do not fit the wire layout.
    pub fn new(polarity: bool, x: u16, y: u16, stamp: u32) -> HpeResult<Self> {
        if x > MAX_X {
            return Err(HpeError::CoordinateOutOfRange {
                field: "x",
                value: x as u32,
                max: MAX_X as u32,
            });
        }
        if y > MAX_Y {
            return Err(HpeError::CoordinateOutOfRange {
                field: "y",
                value: y as u32,
                max: MAX_Y as u32,
            });
        }
        Ok(Self {
            polarity,
            x,
            y,
            stamp,
        })
    }

    /// `true` for an ON (brightness increase) event.
    pub fn polarity(&self) -> bool {
        self.polarity
    }

    pub fn x(&self) -> u16 {
        self.x
    }

    pub fn y(&self) -> u16 {
        self.y
    }

    /// Sensor clock ticks. Non-decreasing within one stream.
    pub fn stamp(&self) -> u32 {
        self.stamp
    }

    /// Pack into the 64-bit wire word. Reserved bits are written as zero.
    pub fn to_bits(&self) -> u64 {
        debug_assert!(self.x <= MAX_X, "x = {} exceeds {MAX_X}", self.x);
        debug_assert!(self.y <= MAX_Y, "y = {} exceeds {MAX_Y}", self.y);
        ((self.polarity as u64 & mask(POLARITY_BITS)) << POLARITY_SHIFT)
            | ((self.x as u64 & mask(X_BITS)) << X_SHIFT)
            | ((self.y as u64 & mask(Y_BITS)) << Y_SHIFT)
            | ((self.stamp as u64 & mask(STAMP_BITS)) << STAMP_SHIFT)
    }

    /// Unpack a 64-bit wire word. Reserved bits are ignored.
    pub fn from_bits(word: u64) -> Self {
        Self {
            polarity: (word >> POLARITY_SHIFT) & mask(POLARITY_BITS) == 1,
            x: ((word >> X_SHIFT) & mask(X_BITS)) as u16,
            y: ((word >> Y_SHIFT) & mask(Y_BITS)) as u16,
            stamp: ((word >> STAMP_SHIFT) & mask(STAMP_BITS)) as u32,
        }
    }

    pub fn to_le_bytes(&self) -> [u8; EVENT_RECORD_BYTES] {
        self.to_bits().to_le_bytes()
    }

    pub fn from_le_bytes(bytes: [u8; EVENT_RECORD_BYTES]) -> Self {
        Self::from_bits(u64::from_le_bytes(bytes))
    }
}

/// A 2-D optical-flow estimate attached to an event, in pixels per second.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointFlow {
    pub udot: f32,
    pub vdot: f32,
}

impl PointFlow {
    pub fn new(udot: f32, vdot: f32) -> Self {
        Self { udot, vdot }
    }

    /// Both components are finite.
    pub fn is_finite(&self) -> bool {
        self.udot.is_finite() && self.vdot.is_finite()
    }
}

/// Encode events into a contiguous buffer of wire records.
pub fn encode_events(events: &[PixelEvent]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(events.len() * EVENT_RECORD_BYTES);
    for event in events {
        buf.extend_from_slice(&event.to_le_bytes());
    }
    buf
}

/// Decode a buffer of wire records.
pub fn decode_events(bytes: &[u8]) -> HpeResult<Vec<PixelEvent>> {
    if bytes.len() % EVENT_RECORD_BYTES != 0 {
        return Err(HpeError::TruncatedRecord { len: bytes.len() });
    }
    let events: Vec<PixelEvent> = bytes
        .chunks_exact(EVENT_RECORD_BYTES)
        .map(|chunk| {
            let mut word = [0u8; EVENT_RECORD_BYTES];
            word.copy_from_slice(chunk);
            PixelEvent::from_le_bytes(word)
        })
        .collect();
    tracing::debug!(count = events.len(), "decoded event records");
    Ok(events)
}
