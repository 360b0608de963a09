pub mod autoplay;
pub mod carousel;
pub mod paginator;

pub use autoplay::Autoplay;
pub use carousel::Carousel;
pub use paginator::{Breakpoints, Paginator};

/// Pixel width of a terminal that is `columns` cells wide
///
/// Breakpoints are expressed in pixels, so the terminal width is scaled by
/// an approximate cell width before it reaches the paginator.
pub fn viewport_width(columns: u16, cell_width_px: u32) -> u32 {
    u32::from(columns).saturating_mul(cell_width_px.max(1))
}
