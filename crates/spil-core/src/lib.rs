pub mod dom;
pub mod surface;

pub use dom::{Canvas, ChangeEvent, Checkbox, Context2d, Document};
pub use surface::{Surface, SurfaceHandle};
