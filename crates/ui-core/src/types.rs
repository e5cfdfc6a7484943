// File: crates/ui-core/src/types.rs
// Summary: Plot surface layout (size and insets) used to derive scale pixel ranges.

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
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(72, 24, 24, 56)
    }
}

/// Chart surface dimensions; the plot area is the surface minus its insets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlotLayout {
    pub width: u32,
    pub height: u32,
    pub insets: Insets,
}

impl Default for PlotLayout {
    fn default() -> Self {
        Self { width: 1024, height: 640, insets: Insets::default() }
    }
}

impl PlotLayout {
    /// Left and right pixel edges of the plot area.
    pub fn x_range(&self) -> (f32, f32) {
        let left = self.insets.left.min(self.width);
        let right = self.width.saturating_sub(self.insets.right).max(left);
        (left as f32, right as f32)
    }

    /// Bottom and top pixel edges of the plot area (bottom first, values grow upwards).
    pub fn y_range(&self) -> (f32, f32) {
        let top = self.insets.top.min(self.height);
        let bottom = self.height.saturating_sub(self.insets.bottom).max(top);
        (bottom as f32, top as f32)
    }
}
