//! HPE Pose Model
//!
//! Defines the shared data contracts of the event-based pose pipeline:
//! - **Events:** Bit-packed camera events and optical-flow vectors
//! - **Joints:** Joint coordinates and the canonical 13-joint DHP19 skeleton
//! - **Body models:** Index tables for the OpenPose COCO and BODY_25 outputs
//! - **Remapping:** Conversion of detector skeletons into the DHP19 layout
//! - **SKLT records:** Line-oriented text form of timestamped skeletons
//!
//! Everything here is plain data and pure functions; values are owned by
//! the caller and safe to share across threads.

pub mod body_model;
pub mod event;
pub mod joint;
pub mod remap;
pub mod sklt;

pub use body_model::*;
pub use event::*;
pub use joint::*;
pub use remap::*;
pub use sklt::*;
