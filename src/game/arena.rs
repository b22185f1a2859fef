// Arena geometry: fixed play field dimensions and the rectangle type used for
// paddles and ball hit-boxes. All values are in arena units (1 unit = 1 pixel
// of the classic 400×300 window).

pub const ARENA_WIDTH: f32 = 400.0;
pub const ARENA_HEIGHT: f32 = 300.0;

/// Thickness of the paddles (and base unit for the center line)
pub const LINE_THICKNESS: f32 = 7.0;

/// Length of a paddle
pub const PADDLE_SIZE: f32 = 50.0;

/// Distance between a paddle and its side wall
pub const PADDLE_OFFSET: f32 = 20.0;

pub const BALL_RADIUS: f32 = 4.0;

/// Ring thickness used when drawing the ball (equal to the radius = filled)
pub const BALL_THICKNESS: f32 = 4.0;

/// Center line thickness (integer division of the line thickness, as drawn)
pub const CENTER_LINE_THICKNESS: f32 = 1.0;

/// Axis-aligned rectangle, top-left anchored
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Square of side `2 * radius` centered on (cx, cy)
    pub fn around(cx: f32, cy: f32, radius: f32) -> Self {
        Self::new(cx - radius, cy - radius, radius * 2.0, radius * 2.0)
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Strict overlap test: rectangles that only share an edge do not intersect
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

/// A point in arena coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let r = Rect::new(20.0, 125.0, LINE_THICKNESS, PADDLE_SIZE);
        assert_eq!(r.right(), 27.0);
        assert_eq!(r.bottom(), 175.0);
        assert_eq!(r.center_y(), 150.0);
    }

    #[test]
    fn test_touching_rects_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let touching = Rect::new(10.0, 0.0, 10.0, 10.0);
        let overlapping = Rect::new(9.5, 9.5, 10.0, 10.0);

        assert!(!a.intersects(&touching));
        assert!(a.intersects(&overlapping));
        assert!(overlapping.intersects(&a));
    }

    #[test]
    fn test_around_is_centered() {
        let r = Rect::around(200.0, 150.0, BALL_RADIUS);
        assert_eq!(r, Rect::new(196.0, 146.0, 8.0, 8.0));
    }
}
