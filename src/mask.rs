//! Mask path for the Sailfish icon shape.
//!
//! The shape is a square of `side` pixels whose corners are either
//! quarter-circle arcs of radius `side / 2` around the center or plain right
//! angles. With every corner rounded this is a circle; with every corner
//! square it is the full square.

use std::f32::consts::{FRAC_PI_2, PI};
use tiny_skia::{FillRule, Mask, Path, PathBuilder, Transform};

/// Which corners of the icon are drawn as right angles.
///
/// A `false` corner (the default) is rounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CornerFlags {
    pub top_left: bool,
    pub top_right: bool,
    pub bottom_right: bool,
    pub bottom_left: bool,
}

impl CornerFlags {
    /// Every corner rounded.
    pub const fn rounded() -> Self {
        Self {
            top_left: false,
            top_right: false,
            bottom_right: false,
            bottom_left: false,
        }
    }

    /// Every corner a right angle, i.e. no clipping at all.
    pub const fn square() -> Self {
        Self {
            top_left: true,
            top_right: true,
            bottom_right: true,
            bottom_left: true,
        }
    }

    pub fn is_square(&self) -> bool {
        self.top_left && self.top_right && self.bottom_right && self.bottom_left
    }
}

/// Build the closed outline of the icon for a `side` x `side` target.
///
/// Corners are visited top-left, top-right, bottom-right, bottom-left and the
/// contour is closed after the last one. Returns `None` for a zero `side`.
pub fn build_mask(side: u32, flags: CornerFlags) -> Option<Path> {
    if side == 0 {
        return None;
    }

    let side = side as f32;
    let radius = side / 2.0;
    let mut pen = Pen::new(radius, radius, radius);

    if flags.top_left {
        pen.line_to(0.0, 0.0);
        pen.line_to(radius, 0.0);
    } else {
        pen.arc(PI, 1.5 * PI);
    }

    if flags.top_right {
        pen.line_to(side, 0.0);
        pen.line_to(side, radius);
    } else {
        pen.arc(-0.5 * PI, 0.0);
    }

    if flags.bottom_right {
        pen.line_to(side, side);
        pen.line_to(radius, side);
    } else {
        pen.arc(0.0, 0.5 * PI);
    }

    if flags.bottom_left {
        pen.line_to(0.0, side);
        pen.line_to(0.0, radius);
    } else {
        pen.arc(0.5 * PI, PI);
    }

    pen.finish()
}

/// Rasterize a mask path into an anti-aliased coverage stencil.
pub fn rasterize_mask(path: &Path, side: u32) -> Option<Mask> {
    let mut mask = Mask::new(side, side)?;
    mask.fill_path(path, FillRule::Winding, true, Transform::identity());
    Some(mask)
}

/// Path builder that keeps a single open contour and knows the arc center.
struct Pen {
    builder: PathBuilder,
    center_x: f32,
    center_y: f32,
    radius: f32,
    started: bool,
}

impl Pen {
    fn new(center_x: f32, center_y: f32, radius: f32) -> Self {
        Self {
            builder: PathBuilder::new(),
            center_x,
            center_y,
            radius,
            started: false,
        }
    }

    fn line_to(&mut self, x: f32, y: f32) {
        if self.started {
            self.builder.line_to(x, y);
        } else {
            self.builder.move_to(x, y);
            self.started = true;
        }
    }

    /// Append an arc around the center from `start` to `end` radians,
    /// joined to the current point by a straight line.
    fn arc(&mut self, start: f32, end: f32) {
        let (x, y) = self.point_at(start);
        self.line_to(x, y);

        let sweep = end - start;
        let segments = (sweep / FRAC_PI_2).ceil().max(1.0) as usize;
        let step = sweep / segments as f32;
        // Tangent length of a cubic approximating an arc of `step` radians.
        let handle = 4.0 / 3.0 * (step / 4.0).tan() * self.radius;

        let mut from = start;
        for _ in 0..segments {
            let to = from + step;
            let (x0, y0) = self.point_at(from);
            let (x3, y3) = self.point_at(to);
            self.builder.cubic_to(
                x0 - handle * from.sin(),
                y0 + handle * from.cos(),
                x3 + handle * to.sin(),
                y3 - handle * to.cos(),
                x3,
                y3,
            );
            from = to;
        }
    }

    fn point_at(&self, angle: f32) -> (f32, f32) {
        (
            self.center_x + self.radius * angle.cos(),
            self.center_y + self.radius * angle.sin(),
        )
    }

    fn finish(mut self) -> Option<Path> {
        self.builder.close();
        self.builder.finish()
    }
}
