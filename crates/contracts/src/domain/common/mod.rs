pub mod refs;

pub use refs::{css_color, ImageRef};
