pub mod events;
pub mod joint;
pub mod remap;
