//! Drag interaction simulation
//!
//! All interaction logic lives here. This module must stay pure:
//! - No DOM or platform dependencies
//! - Delays are requested as effects, never awaited
//! - Seeded RNG only

pub mod collision;
pub mod controller;
pub mod rect;
pub mod state;

pub use collision::{DropGeometry, DropZone, classify_drop, within_evade_radius};
pub use controller::{DragController, Effect, FeedbackAnim, Timer};
pub use rect::Rect;
pub use state::{HeartPlacement, Phase, PointerId, PointerSample, PointerSession};
