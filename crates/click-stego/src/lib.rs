pub mod canvas;
pub mod error;
pub mod lsb;
pub mod png;

pub use canvas::canvas_side;
pub use error::StegoError;
pub use lsb::{embed, extract, MARKER};
pub use png::{embed_png, extract_png};
