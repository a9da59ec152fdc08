//! Axis-aligned rectangles for UI layout.
//!
//! Vector arithmetic comes from `glam`; these types only add the
//! position-plus-size shape the component layer passes around.

use glam::{IVec2, Vec2};

/// Float rectangle: top-left position and size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[must_use]
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[must_use]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Half-open containment: the right and bottom edges are outside.
    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        point.cmpge(self.pos).all() && point.cmplt(self.pos + self.size).all()
    }

    #[must_use]
    pub fn translated(&self, offset: Vec2) -> Self {
        Self {
            pos: self.pos + offset,
            size: self.size,
        }
    }
}

/// Integer rectangle, used for pixel-space layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IRect {
    pub pos: IVec2,
    pub size: IVec2,
}

impl IRect {
    #[must_use]
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            pos: IVec2::new(x, y),
            size: IVec2::new(w, h),
        }
    }

    #[must_use]
    pub fn contains(&self, point: IVec2) -> bool {
        point.cmpge(self.pos).all() && point.cmplt(self.pos + self.size).all()
    }

    #[must_use]
    pub fn as_rect(&self) -> Rect {
        Rect {
            pos: self.pos.as_vec2(),
            size: self.size.as_vec2(),
        }
    }
}

impl From<IRect> for Rect {
    fn from(r: IRect) -> Self {
        r.as_rect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_half_open() {
        let r = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert!(r.contains(Vec2::new(10.0, 10.0)));
        assert!(r.contains(Vec2::new(29.9, 29.9)));
        assert!(!r.contains(Vec2::new(30.0, 10.0)));
        assert!(!r.contains(Vec2::new(10.0, 30.0)));
    }

    #[test]
    fn center_and_translate() {
        let r = Rect::new(0.0, 0.0, 10.0, 20.0);
        assert_eq!(r.center(), Vec2::new(5.0, 10.0));
        assert_eq!(r.translated(Vec2::new(1.0, 2.0)).pos, Vec2::new(1.0, 2.0));
    }

    #[test]
    fn irect_converts_to_rect() {
        let r: Rect = IRect::new(1, 2, 3, 4).into();
        assert_eq!(r.pos, Vec2::new(1.0, 2.0));
        assert_eq!(r.size, Vec2::new(3.0, 4.0));
    }
}
