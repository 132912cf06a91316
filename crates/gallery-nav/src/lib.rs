//! Carousel state, the auto-advance slideshow driver, and gallery scanning

pub mod carousel;
pub mod error;
pub mod scan;
pub mod slideshow;

pub use carousel::{Carousel, DEFAULT_TICK_INTERVAL};
pub use error::CarouselError;
pub use scan::{EXTENSIONS, get_gallery_dir, is_supported_image, scan_dir};
pub use slideshow::{SlideState, Slideshow, SlideshowHandle};
