//! On-screen decorations: crosshair, axis cross, corner axes and their
//! labels.
//!
//! Everything is emitted as colored line batches, each carrying the full
//! clip-space transform it should be drawn with, so any line renderer can
//! draw them without knowing about the camera.

use glam::{DMat4, DVec3};

use crate::camera::projection::{look_at, project_to_window, FAR_PLANE};
use crate::camera::{CameraState, FrameSetup};
use crate::options::{ColorOptions, DisplayOptions};

/// Half-extent of the corner axes view, as if viewed from this distance.
const CORNER_VIEW_DISTANCE: f64 = 1000.0;
/// NDC offset of the corner axes origin.
const CORNER_OFFSET: f64 = -0.8;
/// Length of each corner axis.
const CORNER_AXIS_LENGTH: f64 = 10.0;
/// Where along each corner axis the label is anchored.
const LABEL_ANCHOR: f64 = 12.0;
/// Half-size of a label glyph in pixels.
const GLYPH: f64 = 3.0;

/// One colored line segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    /// Start point in the batch's space.
    pub start: DVec3,
    /// End point in the batch's space.
    pub end: DVec3,
    /// RGB color.
    pub color: [f32; 3],
}

/// Depth comparison a batch is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepthTest {
    /// Normal depth testing against the scene.
    Less,
    /// Always drawn on top.
    Always,
}

/// Lines sharing one transform and line width.
#[derive(Debug, Clone, PartialEq)]
pub struct LineBatch {
    /// Debug name of the batch.
    pub label: &'static str,
    /// Transform from batch space to clip space.
    pub transform: DMat4,
    /// Line width in pixels.
    pub width: f32,
    /// Depth comparison.
    pub depth: DepthTest,
    /// The segments.
    pub lines: Vec<LineSegment>,
}

/// Decoration geometry for one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Decorations {
    /// Drawn before the scene (crosshair, axis cross).
    pub underlay: Vec<LineBatch>,
    /// Drawn after the scene (corner axes, labels).
    pub overlay: Vec<LineBatch>,
}

impl Decorations {
    /// Build the decorations enabled in `display`.
    #[must_use]
    pub fn build(
        frame: &FrameSetup,
        camera: &CameraState,
        display: &DisplayOptions,
        colors: &ColorOptions,
    ) -> Self {
        let mut out = Self::default();
        if display.show_crosshairs {
            out.underlay.push(crosshair(frame, camera.distance, colors.crosshair));
        }
        if display.show_axes {
            out.underlay.push(axis_cross(frame, camera.distance, colors.axes));
            let corner = corner_transform(frame);
            out.overlay.push(corner_axes(corner, colors.corner_axes));
            out.overlay.push(axis_labels(corner, frame.viewport, colors.label()));
        }
        out
    }

    /// All batches in draw order.
    pub fn batches(&self) -> impl Iterator<Item = &LineBatch> {
        self.underlay.iter().chain(self.overlay.iter())
    }
}

fn segment(start: DVec3, end: DVec3, color: [f32; 3]) -> LineSegment {
    LineSegment { start, end, color }
}

/// Four diagonals through the rotation center.
fn crosshair(frame: &FrameSetup, distance: f64, color: [f32; 3]) -> LineBatch {
    let vd = distance / 20.0;
    let mut lines = Vec::with_capacity(4);
    for xf in [-1.0, 1.0] {
        for yf in [-1.0, 1.0] {
            lines.push(segment(
                DVec3::new(-xf * vd, -yf * vd, -vd),
                DVec3::new(xf * vd, yf * vd, vd),
                color,
            ));
        }
    }
    LineBatch {
        label: "crosshair",
        transform: frame.rotation_view_projection(),
        width: 3.0,
        depth: DepthTest::Less,
        lines,
    }
}

/// Axis-aligned cross at the scene origin.
fn axis_cross(frame: &FrameSetup, distance: f64, color: [f32; 3]) -> LineBatch {
    let l = distance / 10.0;
    let lines = [DVec3::X, DVec3::Y, DVec3::Z]
        .into_iter()
        .map(|axis| segment(-axis * l, axis * l, color))
        .collect();
    LineBatch {
        label: "axis cross",
        transform: frame.model_view_projection(),
        width: 1.0,
        depth: DepthTest::Less,
        lines,
    }
}

/// Rotation-only view of a fixed-size axis triad in the lower-left corner.
fn corner_transform(frame: &FrameSetup) -> DMat4 {
    let a = frame.aspect;
    let half = CORNER_VIEW_DISTANCE / 10.0;
    let lens = DMat4::orthographic_rh_gl(
        -a * half,
        a * half,
        -(1.0 / a) * half,
        (1.0 / a) * half,
        -FAR_PLANE,
        FAR_PLANE,
    );
    DMat4::from_translation(DVec3::new(CORNER_OFFSET, CORNER_OFFSET, 0.0))
        * lens
        * look_at(CORNER_VIEW_DISTANCE)
        * frame.rotation
}

fn corner_axes(transform: DMat4, colors: [[f32; 3]; 3]) -> LineBatch {
    let lines = [DVec3::X, DVec3::Y, DVec3::Z]
        .into_iter()
        .zip(colors)
        .map(|(axis, color)| segment(DVec3::ZERO, axis * CORNER_AXIS_LENGTH, color))
        .collect();
    LineBatch {
        label: "corner axes",
        transform,
        width: 1.0,
        depth: DepthTest::Always,
        lines,
    }
}

/// "X", "Y" and "Z" glyphs at the projected tips of the corner axes, in
/// window pixels.
fn axis_labels(corner: DMat4, viewport: (u32, u32), color: [f32; 3]) -> LineBatch {
    let mut lines = Vec::with_capacity(7);
    let anchors = [DVec3::X, DVec3::Y, DVec3::Z].map(|axis| {
        project_to_window(corner, axis * LABEL_ANCHOR, viewport)
            .map(|p| DVec3::new(p.x.round(), p.y.round(), 0.0))
    });
    let g = GLYPH;
    let at = |p: DVec3, dx: f64, dy: f64| p + DVec3::new(dx, dy, 0.0);

    if let Some(p) = anchors[0] {
        lines.push(segment(at(p, -g, -g), at(p, g, g), color));
        lines.push(segment(at(p, -g, g), at(p, g, -g), color));
    }
    if let Some(p) = anchors[1] {
        lines.push(segment(at(p, -g, -g), at(p, g, g), color));
        lines.push(segment(at(p, -g, g), p, color));
    }
    if let Some(p) = anchors[2] {
        lines.push(segment(at(p, -g, -g), at(p, g, -g), color));
        lines.push(segment(at(p, -g, g), at(p, g, g), color));
        lines.push(segment(at(p, -g, -g), at(p, g, g), color));
    }

    let (w, h) = (f64::from(viewport.0.max(1)), f64::from(viewport.1.max(1)));
    LineBatch {
        label: "axis labels",
        transform: DMat4::from_translation(DVec3::new(-1.0, -1.0, 0.0))
            * DMat4::from_scale(DVec3::new(2.0 / w, 2.0 / h, 1.0)),
        width: 1.0,
        depth: DepthTest::Always,
        lines,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(display: DisplayOptions) -> Decorations {
        let camera = CameraState::default();
        let frame = FrameSetup::new(&camera, (800, 600));
        Decorations::build(&frame, &camera, &display, &ColorOptions::default())
    }

    #[test]
    fn nothing_enabled_draws_nothing() {
        let deco = build(DisplayOptions::default());
        assert_eq!(deco.batches().count(), 0);
    }

    #[test]
    fn crosshair_scales_with_distance() {
        let deco = build(DisplayOptions {
            show_crosshairs: true,
            ..DisplayOptions::default()
        });
        assert_eq!(deco.underlay.len(), 1);
        let lines = &deco.underlay[0].lines;
        assert_eq!(lines.len(), 4);
        // Default distance is 500, so each endpoint sits 25 units out.
        for line in lines {
            assert_eq!(line.start.abs(), DVec3::splat(25.0));
            assert_eq!(line.end, -line.start);
        }
    }

    #[test]
    fn axes_add_cross_corner_and_labels() {
        let deco = build(DisplayOptions {
            show_axes: true,
            ..DisplayOptions::default()
        });
        assert_eq!(deco.underlay.len(), 1);
        assert_eq!(deco.underlay[0].lines.len(), 3);
        assert_eq!(deco.overlay.len(), 2);
        assert_eq!(deco.overlay[0].lines.len(), 3);
        assert_eq!(deco.overlay[0].depth, DepthTest::Always);
        // X and Y glyphs take two strokes, Z takes three.
        assert_eq!(deco.overlay[1].lines.len(), 7);
    }

    #[test]
    fn corner_axes_sit_in_lower_left() {
        let frame = FrameSetup::new(&CameraState::default(), (800, 600));
        let origin = project_to_window(corner_transform(&frame), DVec3::ZERO, frame.viewport)
            .unwrap();
        assert!((origin.x - 80.0).abs() < 1e-6);
        assert!((origin.y - 60.0).abs() < 1e-6);
    }

    #[test]
    fn labels_use_inverse_background() {
        let colors = ColorOptions {
            background: [0.0, 0.0, 0.0],
            ..ColorOptions::default()
        };
        let camera = CameraState::default();
        let frame = FrameSetup::new(&camera, (800, 600));
        let display = DisplayOptions {
            show_axes: true,
            ..DisplayOptions::default()
        };
        let deco = Decorations::build(&frame, &camera, &display, &colors);
        assert!(deco.overlay[1].lines.iter().all(|l| l.color == [1.0; 3]));
    }
}
