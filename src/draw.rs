//! Exact-integer drawing primitives over a [`Surface`].

use crate::channel::{ChannelIndex, Value};
use crate::surface::Surface;
use crate::vector::Vec2;

/// A stateless drawing operator bound to one [`Surface`].
///
/// Every operation mutates the surface synchronously in place through the
/// surface's point-level and channel-level contract; nothing is allocated
/// and no call can fail. Invalid or degenerate geometry — an out-of-bounds
/// point, a non-square circle box, a line directed upward — is silently
/// absorbed and the surface is left unchanged.
///
/// Coordinates outside the surface are clamped onto it rather than
/// rejected, except in [`point`](Drawer::point), the one primitive that
/// refuses out-of-bounds writes outright.
///
/// # Example
///
/// ```
/// use rasterink::{Drawer, PixelFormat, Raster, Surface, Vec2};
///
/// let mut raster = Raster::new(16, 16, PixelFormat::GRAY8)?;
/// let mut drawer = Drawer::new(&mut raster);
/// drawer.rectangle(Vec2::new(2, 2), Vec2::new(13, 13), 1, 0xFF, None);
/// assert_eq!(raster.get(Vec2::new(2, 2)), 0xFF);
/// assert_eq!(raster.get(Vec2::new(8, 8)), 0);
/// # Ok::<(), rasterink::RasterError>(())
/// ```
pub struct Drawer<'a, S: ?Sized> {
    surface: &'a mut S,
}

impl<'a, S: Surface + ?Sized> Drawer<'a, S> {
    /// Bind a drawer to a surface for the duration of the borrow.
    pub fn new(surface: &'a mut S) -> Self {
        Self { surface }
    }

    /// Write `value` at `pos` if it lies on the surface; no-op otherwise.
    pub fn point(&mut self, pos: Vec2, value: Value) {
        if self.surface.contains(pos) {
            self.surface.set(pos, value);
        }
    }

    /// Fill the straight single-row or single-column path between two
    /// clamped endpoints, inclusive.
    ///
    /// If clamping collapses an axis the unclamped endpoints did not share
    /// (a fully off-surface segment), the call is a no-op — this guards
    /// against a bogus single-row fill after wraparound.
    pub fn fill(&mut self, first: Vec2, last: Vec2, value: Value) {
        let start = self.surface.bind(first);
        let end = self.surface.bind(last);

        if (first.x != last.x && start.x == end.x) || (first.y != last.y && start.y == end.y) {
            return;
        }

        // Stepping the linear index by one is valid only because the
        // segment is confined to a single row or column.
        for i in self.surface.index(start)..=self.surface.index(end) {
            let pos = self.surface.coordinates(i);
            self.point(pos, value);
        }
    }

    /// Horizontal run at `y` from `x_left` to `x_right`, inclusive.
    ///
    /// No-op if `y` lies outside the surface; the x range is clamped.
    pub fn line_horizontal(&mut self, y: i64, x_left: i64, x_right: i64, value: Value) {
        if y < 0 || y >= self.surface.height() as i64 {
            return;
        }

        self.fill(Vec2::new(x_left, y), Vec2::new(x_right, y), value);
    }

    /// Vertical run at `x` from `y_top` to `y_bottom`, inclusive.
    ///
    /// No-op if `x` lies outside the surface; the y range is clamped.
    pub fn line_vertical(&mut self, x: i64, y_top: i64, y_bottom: i64, value: Value) {
        if x < 0 || x >= self.surface.width() as i64 {
            return;
        }

        for y in self.surface.bind_y(y_top)..=self.surface.bind_y(y_bottom) {
            self.point(Vec2::new(x, y), value);
        }
    }

    /// Directed line from `start` to `end`, thickened by `width` extra
    /// pixels in x (on the trailing edge opposite the slope direction) and
    /// `height` repeated rows below each computed row.
    ///
    /// Only top-to-bottom lines are supported: `end.y < start.y` is a no-op
    /// by contract, not an incidental limitation. Callers wanting an upward
    /// line must swap the endpoints first. `width` or `height` of 0 behave
    /// as 1.
    pub fn line(&mut self, start: Vec2, end: Vec2, value: Value, width: u32, height: u32) {
        let dx = end.x - start.x;
        let dy = end.y - start.y;

        if dy < 0 {
            return;
        }

        let y_start = self.surface.bind_y(start.y);
        let y_end = self.surface.bind_y(end.y);

        if y_start == y_end && start.y != end.y {
            return;
        }

        let (x_min, x_max) = if dx >= 0 {
            (start.x, end.x)
        } else {
            (end.x, start.x)
        };

        let extra = width.saturating_sub(1) as f64;
        let step = dx as f64 / (dy + 1) as f64;

        for y in y_start..=y_end {
            let x_start = if y == start.y {
                start.x
            } else {
                let interpolated = start.x as f64 + step * (y - start.y) as f64
                    - if dx < 0 { extra } else { 0.0 };
                (interpolated as i64).clamp(x_min, x_max)
            };
            let x_end = if y == end.y {
                end.x
            } else {
                let leading = x_start as f64 + step + if dx >= 0 { extra } else { 0.0 };
                (leading as i64).clamp(x_min, x_max)
            };

            let (x_left, x_right) = if dx >= 0 {
                (x_start, x_end)
            } else {
                (x_end, x_start)
            };

            for y_offset in 0..height.max(1) as i64 {
                self.line_horizontal(y + y_offset, x_left, x_right, value);
            }
        }
    }

    /// Fill every row between the clamped `start.y` and `end.y` with a
    /// horizontal span from `start.x` to `end.x`.
    ///
    /// The unconditionally rectangular fill used as the interior of filled
    /// shapes.
    pub fn solid(&mut self, start: Vec2, end: Vec2, value: Value) {
        let y_start = self.surface.bind_y(start.y);
        let y_end = self.surface.bind_y(end.y);

        if y_start == y_end && start.y != end.y {
            return;
        }

        for y in y_start..=y_end {
            self.line_horizontal(y, start.x, end.x, value);
        }
    }

    /// Stroked rectangle between two corners.
    ///
    /// Rows within `stroke_thickness` of the top or bottom edge are filled
    /// edge to edge; interior rows get only their leftmost and rightmost
    /// `stroke_thickness` pixels.
    ///
    /// `diagonals` draws both corner-to-corner diagonals inset by the
    /// diagonal thickness: `None` for no diagonals, `Some(0)` to reuse
    /// `stroke_thickness`, `Some(t)` for an explicit thickness.
    pub fn rectangle(
        &mut self,
        start: Vec2,
        end: Vec2,
        stroke_thickness: u32,
        stroke_value: Value,
        diagonals: Option<u32>,
    ) {
        let y_start = self.surface.bind_y(start.y);
        let y_end = self.surface.bind_y(end.y);

        if y_start == y_end && start.y != end.y {
            return;
        }

        let thickness = stroke_thickness as i64;

        for y in y_start..=y_end {
            let near_top = start.y <= y && y < start.y + thickness;
            let near_bottom = end.y < y + thickness && y <= end.y;

            if near_top || near_bottom {
                self.line_horizontal(y, start.x, end.x, stroke_value);
            } else {
                self.line_horizontal(y, start.x, start.x + thickness - 1, stroke_value);
                self.line_horizontal(y, end.x - thickness + 1, end.x, stroke_value);
            }
        }

        if let Some(diagonal_thickness) = diagonals {
            let thickness = if diagonal_thickness == 0 {
                stroke_thickness
            } else {
                diagonal_thickness
            };
            let offset = Vec2::splat(thickness as i64);

            self.line(start + offset, end - offset, stroke_value, thickness, 1);
            self.line(
                Vec2::new(end.x - offset.x, start.y + offset.y),
                Vec2::new(start.x + offset.x, end.y - offset.y),
                stroke_value,
                thickness,
                1,
            );
        }
    }

    /// [`rectangle`](Drawer::rectangle) with the interior (inset by
    /// `stroke_thickness` on all sides) filled with `fill_value` first.
    pub fn rectangle_filled(
        &mut self,
        start: Vec2,
        end: Vec2,
        stroke_thickness: u32,
        stroke_value: Value,
        fill_value: Value,
        diagonals: Option<u32>,
    ) {
        let inset = Vec2::splat(stroke_thickness as i64);
        self.solid(start + inset, end - inset, fill_value);
        self.rectangle(start, end, stroke_thickness, stroke_value, diagonals);
    }

    /// [`rectangle`](Drawer::rectangle) with `end = start + (side, side)`.
    pub fn square(
        &mut self,
        start: Vec2,
        side_length: u32,
        stroke_thickness: u32,
        stroke_value: Value,
        diagonals: Option<u32>,
    ) {
        self.rectangle(
            start,
            start + Vec2::splat(side_length as i64),
            stroke_thickness,
            stroke_value,
            diagonals,
        );
    }

    /// [`rectangle_filled`](Drawer::rectangle_filled) with
    /// `end = start + (side, side)`.
    pub fn square_filled(
        &mut self,
        start: Vec2,
        side_length: u32,
        stroke_thickness: u32,
        stroke_value: Value,
        fill_value: Value,
        diagonals: Option<u32>,
    ) {
        self.rectangle_filled(
            start,
            start + Vec2::splat(side_length as i64),
            stroke_thickness,
            stroke_value,
            fill_value,
            diagonals,
        );
    }

    /// Stroked circle inscribed in the bounding box `start..end`.
    ///
    /// No-op unless the box is square and non-degenerate. A thickness
    /// above 1 recurses on a box inset by one pixel per side, producing
    /// `stroke_thickness` concentric one-pixel rings. Each ring is drawn
    /// as per-row arc spans: the boundary offset is
    /// `x(y) = radius - sqrt(radius^2 - (center_y - y)^2)` and the span
    /// length is the forward difference of `x` between adjacent rows.
    pub fn circle(&mut self, start: Vec2, end: Vec2, stroke_thickness: u32, stroke_value: Value) {
        let dx = end.x - start.x;
        let dy = end.y - start.y;

        if dx != dy || dx <= 0 {
            return;
        }

        if stroke_thickness > 1 {
            let inset = Vec2::splat(1);
            self.circle(start + inset, end - inset, stroke_thickness - 1, stroke_value);
        }

        let center_y = start.y + dy / 2;
        let radius = dx / 2;

        let arc_x = |y: i64| -> i64 {
            let offset = center_y - y;
            let disc = (radius * radius - offset * offset).max(0) as f64;
            (radius as f64 - libm::sqrt(disc)) as i64
        };

        let y_start = self.surface.bind_y(start.y);
        let y_end = self.surface.bind_y(end.y);

        if y_start == y_end && start.y != end.y {
            return;
        }

        for y in y_start..=y_end {
            let x_offset = arc_x(y);
            let x_left = start.x + x_offset;
            let x_right = end.x - x_offset;

            // The adjacent row whose boundary offset bounds this row's arc:
            // the row below at the top cap, the row above through the upper
            // half and at the bottom cap, the row below in the lower half.
            let neighbor = if y == start.y {
                1
            } else if y == end.y || y < center_y {
                -1
            } else {
                1
            };
            let length = (arc_x(y + neighbor) - x_offset).abs();

            self.line_horizontal(y, x_left, x_left + length, stroke_value);
            self.line_horizontal(y, x_right - length, x_right, stroke_value);
        }
    }

    /// Stroked circle around `center` with the given radius.
    pub fn circle_at(&mut self, center: Vec2, radius: u32, stroke_thickness: u32, stroke_value: Value) {
        let offset = Vec2::splat(radius as i64);
        self.circle(center - offset, center + offset, stroke_thickness, stroke_value);
    }

    /// Filled circle inscribed in the bounding box `start..end`.
    ///
    /// The interior — the bounding box inset by `stroke_thickness` — is
    /// drawn as a fully thick circle down to its center, then the stroked
    /// ring goes on top.
    pub fn circle_filled(
        &mut self,
        start: Vec2,
        end: Vec2,
        stroke_thickness: u32,
        stroke_value: Value,
        fill_value: Value,
    ) {
        let inset = Vec2::splat(stroke_thickness as i64);
        self.circle(start + inset, end - inset, u32::MAX, fill_value);
        self.circle(start, end, stroke_thickness, stroke_value);
    }

    /// Filled circle around `center` with the given radius.
    pub fn circle_filled_at(
        &mut self,
        center: Vec2,
        radius: u32,
        stroke_thickness: u32,
        stroke_value: Value,
        fill_value: Value,
    ) {
        let offset = Vec2::splat(radius as i64);
        self.circle_filled(
            center - offset,
            center + offset,
            stroke_thickness,
            stroke_value,
            fill_value,
        );
    }

    /// Slice the surface into an evenly spaced grid of cells.
    ///
    /// Draws `row_count - 1` horizontal and `column_count - 1` vertical
    /// full-span separators at `height / row_count * i` and
    /// `width / column_count * i`, each `thickness` pixels thick
    /// (0 behaves as 1).
    pub fn slice(&mut self, row_count: u32, column_count: u32, thickness: u32, value: Value) {
        let width = self.surface.width() as i64;
        let height = self.surface.height() as i64;
        let thickness = thickness.max(1) as i64;

        let dy = height as f64 / row_count as f64;
        for i in 1..row_count {
            let y = (dy * i as f64) as i64;
            for t in 0..thickness {
                self.line_horizontal(y + t, 0, width - 1, value);
            }
        }

        let dx = width as f64 / column_count as f64;
        for i in 1..column_count {
            let x = (dx * i as f64) as i64;
            for t in 0..thickness {
                self.line_vertical(x + t, 0, height - 1, value);
            }
        }
    }

    /// Overwrite one channel of every pixel, in row-major order, leaving
    /// all other channels of every pixel unchanged.
    pub fn color_filter(&mut self, channel: ChannelIndex, value: Value) {
        let count = self.surface.width() as usize * self.surface.height() as usize;
        for i in 0..count {
            let pos = self.surface.coordinates(i);
            self.surface.set_channel(pos, channel, value);
        }
    }
}
