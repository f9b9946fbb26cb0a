use super::sheet::StrokeCommand;
use crate::curve::CurveSegment;
use crate::interpolation::sampler::PathPoint;
use crate::utils::{color::Color, vector::Vec2};
use eframe::egui::{self, epaint::QuadraticBezierShape, Color32, Shape, Stroke};

fn pos(x: f64, y: f64) -> egui::Pos2 {
    egui::pos2(x as f32, y as f32)
}

/// Round-jointed variable-width polyline: one segment per pair, a disc at each
/// point so the joints do not notch.
fn polyline(points: &[PathPoint], color: Color32, width: impl Fn(&PathPoint) -> f64) -> Vec<Shape> {
    let mut shapes = Vec::with_capacity(points.len() * 2);
    for pair in points.windows(2) {
        let w = width(&pair[0]) as f32;
        shapes.push(Shape::line_segment(
            [pos(pair[0].x, pair[0].y), pos(pair[1].x, pair[1].y)],
            Stroke::new(w, color),
        ));
    }
    for p in points {
        shapes.push(Shape::circle_filled(pos(p.x, p.y), width(p) as f32 * 0.5, color));
    }
    shapes
}

/// Outline (halo) shapes and ink shapes for one stroke command, in sheet space.
pub fn stroke_shapes(cmd: &StrokeCommand) -> (Vec<Shape>, Vec<Shape>) {
    let outline = polyline(&cmd.points, cmd.outline_color.to_color32(), |p| {
        cmd.outline_width(p)
    });
    let ink = polyline(&cmd.points, cmd.color.to_color32(), |p| p.radius);
    (outline, ink)
}

/// Quadratic curve pieces for the curve tool, in sheet space.
pub fn curve_shapes(segments: &[CurveSegment], color: Color, width: f64) -> Vec<Shape> {
    let stroke = Stroke::new(width as f32, color.to_color32());
    let p = |v: Vec2| pos(v.x, v.y);
    segments
        .iter()
        .map(|seg| {
            QuadraticBezierShape::from_points_stroke(
                [p(seg.anchor), p(seg.control), p(seg.end)],
                false,
                Color32::TRANSPARENT,
                stroke,
            )
            .into()
        })
        .collect()
}

/// Filled square of side `size` centred on `center`, in sheet space.
pub fn marker(center: Vec2, size: f64, color: Color32) -> Shape {
    let rect = egui::Rect::from_center_size(
        pos(center.x, center.y),
        egui::vec2(size as f32, size as f32),
    );
    Shape::rect_filled(rect, 0.0, color)
}

/// Paint sheet-space shapes with the sheet's top-left at `origin`.
pub fn paint_layer(painter: &egui::Painter, shapes: &[Shape], origin: egui::Pos2) {
    let offset = origin.to_vec2();
    painter.extend(shapes.iter().cloned().map(|mut shape| {
        shape.translate(offset);
        shape
    }));
}
