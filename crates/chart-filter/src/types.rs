// File: crates/chart-filter/src/types.rs
// Summary: Surface size and margins; derives the plot width a draw pass may fill.

/// Default surface width in pixels.
pub const WIDTH: u32 = 1024;
/// Default surface height in pixels.
pub const HEIGHT: u32 = 640;

/// Screen margins, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(72, 24, 24, 56)
    }
}

/// Surface description for a draw pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
    pub insets: Insets,
}

impl RenderOptions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height, insets: Insets::new(0, 0, 0, 0) }
    }

    /// Pixel columns inside the insets; 0 when the margins eat the surface.
    pub const fn plot_width(&self) -> usize {
        self.width.saturating_sub(self.insets.hsum()) as usize
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { width: WIDTH, height: HEIGHT, insets: Insets::default() }
    }
}
