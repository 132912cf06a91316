mod carousel;

pub use carousel::CarouselView;
