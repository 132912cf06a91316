pub mod labels;
pub mod media;

pub use labels::SlideLabel;
pub use media::{MediaRef, drive_embed_url};
