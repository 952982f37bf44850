/// A rectangle in screen pixels: top-left corner plus size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// Width and height of a screen, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Builds a rectangle from Win32-style edges (`RECT`).
    pub fn from_edges(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self::new(left, top, right - left, bottom - top)
    }

    /// Returns a `width` x `height` rectangle centered on a screen
    /// whose origin is `(0, 0)`.
    ///
    /// Offsets use integer division, so an odd leftover pixel goes to the
    /// right/bottom edge. A window larger than the screen gets a negative
    /// origin and overhangs both sides evenly.
    pub fn centered(screen: Size, width: i32, height: i32) -> Self {
        Self::new(
            (screen.width - width) / 2,
            (screen.height - height) / 2,
            width,
            height,
        )
    }
}

impl Size {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}
