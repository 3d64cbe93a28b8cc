pub mod camera;
pub mod interactable;
pub mod touch;

pub use camera::{Point, Size, ViewState};
pub use interactable::{BBox, LotSelection};
pub use touch::{ActivePointers, GestureSession};
