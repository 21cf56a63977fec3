// Page-pixel geometry. One terminal cell covers CELL_W x CELL_H pixels.

pub(crate) const CELL_W: f32 = 8.0;
pub(crate) const CELL_H: f32 = 16.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct Vec2 {
    pub(crate) x: f32,
    pub(crate) y: f32,
}

impl Vec2 {
    pub(crate) const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub(crate) fn add(self, o: Vec2) -> Vec2 {
        Vec2::new(self.x + o.x, self.y + o.y)
    }

    pub(crate) fn scale(self, s: f32) -> Vec2 {
        Vec2::new(self.x * s, self.y * s)
    }

    /// Cell coordinates (may be negative or past the edge).
    pub(crate) fn to_cell(self) -> (i32, i32) {
        (
            (self.x / CELL_W).floor() as i32,
            (self.y / CELL_H).floor() as i32,
        )
    }

    pub(crate) fn from_cell(col: u16, row: u16) -> Vec2 {
        Vec2::new(
            col as f32 * CELL_W + CELL_W * 0.5,
            row as f32 * CELL_H + CELL_H * 0.5,
        )
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct Rect {
    pub(crate) x: f32,
    pub(crate) y: f32,
    pub(crate) w: f32,
    pub(crate) h: f32,
}

impl Rect {
    pub(crate) const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Rect of whole cells, given in cell units.
    pub(crate) fn cells(col: i32, row: i32, cols: i32, rows: i32) -> Self {
        Self::new(
            col as f32 * CELL_W,
            row as f32 * CELL_H,
            cols as f32 * CELL_W,
            rows as f32 * CELL_H,
        )
    }

    pub(crate) fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    pub(crate) fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x < self.x + self.w && p.y >= self.y && p.y < self.y + self.h
    }

    pub(crate) fn translate(&self, d: Vec2) -> Rect {
        Rect::new(self.x + d.x, self.y + d.y, self.w, self.h)
    }
}

/// Visible area in page pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Viewport {
    pub(crate) width: f32,
    pub(crate) height: f32,
}

impl Viewport {
    pub(crate) fn from_terminal(cols: u16, rows: u16) -> Self {
        Self {
            width: cols as f32 * CELL_W,
            height: rows as f32 * CELL_H,
        }
    }

    pub(crate) fn cols(&self) -> i32 {
        (self.width / CELL_W) as i32
    }

    pub(crate) fn rows(&self) -> i32 {
        (self.height / CELL_H) as i32
    }

    pub(crate) fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_round_trip_lands_inside_the_cell() {
        let p = Vec2::from_cell(10, 3);
        assert_eq!(p.to_cell(), (10, 3));
    }

    #[test]
    fn translated_rect_moves_hit_area() {
        let r = Rect::cells(2, 2, 4, 1);
        let moved = r.translate(Vec2::new(80.0, 0.0));
        assert!(r.contains(Vec2::from_cell(3, 2)));
        assert!(!moved.contains(Vec2::from_cell(3, 2)));
        assert!(moved.contains(Vec2::from_cell(13, 2)));
    }

    #[test]
    fn viewport_maps_terminal_size_to_pixels() {
        let vp = Viewport::from_terminal(96, 30);
        assert_eq!(vp.width, 768.0);
        assert_eq!(vp.height, 480.0);
        assert_eq!(vp.cols(), 96);
    }
}
