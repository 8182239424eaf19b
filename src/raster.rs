//! Line and marker rasterization onto a [`Canvas`].
//!
//! All coordinates are integer pixels in pixel space (origin bottom-left).
//! Writes outside the canvas are dropped by [`Canvas::put`], so glyphs near
//! the border are simply cut off.

use glam::{DVec2, IVec2};

use crate::{
    bounds::ClipRect,
    camera::Camera,
    canvas::{Canvas, Rgba},
    clip::clip_segment,
    line_pattern::{LinePattern, PatternPhase},
    point::MarkerType,
    series::Series,
};

/// Integer Bresenham walk from `start` to `end`, both inclusive.
#[derive(Debug, Clone)]
pub struct BresenhamLine {
    cur: IVec2,
    end: IVec2,
    dx: i32,
    dy: i32,
    step: IVec2,
    err: i32,
    done: bool,
}

impl BresenhamLine {
    pub fn new(start: IVec2, end: IVec2) -> Self {
        let dx = (end.x - start.x).abs();
        let dy = -(end.y - start.y).abs();
        let step = IVec2::new(
            if start.x < end.x { 1 } else { -1 },
            if start.y < end.y { 1 } else { -1 },
        );
        Self {
            cur: start,
            end,
            dx,
            dy,
            step,
            err: dx + dy,
            done: false,
        }
    }
}

impl Iterator for BresenhamLine {
    type Item = IVec2;

    fn next(&mut self) -> Option<IVec2> {
        if self.done {
            return None;
        }
        let p = self.cur;
        if self.cur == self.end {
            self.done = true;
            return Some(p);
        }
        let e2 = 2 * self.err;
        if e2 >= self.dy {
            self.err += self.dy;
            self.cur.x += self.step.x;
        }
        if e2 <= self.dx {
            self.err += self.dx;
            self.cur.y += self.step.y;
        }
        Some(p)
    }
}

/// Draw a single-pixel-wide line.
pub fn draw_line_1px(canvas: &mut Canvas, a: IVec2, b: IVec2, color: Rgba) {
    for p in BresenhamLine::new(a, b) {
        canvas.put(p, color);
    }
}

/// Draw a solid line `thickness` pixels wide with round ends.
///
/// A pixel is set when its center lies in the quad swept by the segment, or
/// within `thickness / 2` of either endpoint.
pub fn draw_thick_line(canvas: &mut Canvas, a: IVec2, b: IVec2, thickness: u32, color: Rgba) {
    let thickness = thickness.min(max_stroke(canvas));
    if thickness <= 1 {
        draw_line_1px(canvas, a, b, color);
        return;
    }
    let half = thickness as f64 / 2.0;
    let (af, bf) = (a.as_dvec2(), b.as_dvec2());
    let dir = bf - af;
    let len = dir.length();
    let (along, across) = if len > 0.0 {
        let u = dir / len;
        (u, u.perp())
    } else {
        (DVec2::X, DVec2::Y)
    };

    let reach = (half.ceil() as i32).saturating_add(1);
    let lo = (a.min(b) - reach).max(IVec2::ZERO);
    let hi = (a.max(b) + reach).min(IVec2::new(
        canvas.width() as i32 - 1,
        canvas.height() as i32 - 1,
    ));

    for y in lo.y..=hi.y {
        for x in lo.x..=hi.x {
            let q = DVec2::new(x as f64, y as f64);
            let v = q - af;
            let s = v.dot(along);
            let d = v.dot(across);
            let in_quad = len > 0.0 && (0.0..=len).contains(&s) && d >= -half && d < half;
            let in_cap =
                v.length_squared() <= half * half || (q - bf).length_squared() <= half * half;
            if in_quad || in_cap {
                canvas.put(IVec2::new(x, y), color);
            }
        }
    }
}

/// The widest stroke that can still touch a new pixel: anything wider only
/// repaints the same canvas.
fn max_stroke(canvas: &Canvas) -> u32 {
    canvas.width().saturating_add(canvas.height()).clamp(1, i32::MAX as u32)
}

/// Stamp a `thickness`-pixel span centred on `p`, perpendicular to the major axis.
fn stamp_span(canvas: &mut Canvas, p: IVec2, x_major: bool, thickness: u32, color: Rgba) {
    let t = thickness.clamp(1, max_stroke(canvas)) as i32;
    let first = -(t / 2);
    for k in first..first + t {
        let q = if x_major {
            IVec2::new(p.x, p.y + k)
        } else {
            IVec2::new(p.x + k, p.y)
        };
        canvas.put(q, color);
    }
}

/// Draw `a -> b` through `pattern`, starting at `phase` and advancing it once
/// per pixel step. The end pixel is not stamped; the caller stamps it with
/// [`stamp_pattern_point`] when the polyline ends or breaks.
pub fn draw_patterned_line(
    canvas: &mut Canvas,
    a: IVec2,
    b: IVec2,
    thickness: u32,
    pattern: LinePattern,
    phase: &mut PatternPhase,
    color: Rgba,
) {
    let delta = (b - a).abs();
    let x_major = delta.x >= delta.y;
    for p in BresenhamLine::new(a, b) {
        if p == b {
            break;
        }
        if pattern.is_on(phase.0) {
            stamp_span(canvas, p, x_major, thickness, color);
        }
        phase.advance();
    }
}

/// Stamp a single pattern step at `p`, the closing pixel of a patterned run.
pub fn stamp_pattern_point(
    canvas: &mut Canvas,
    p: IVec2,
    from: IVec2,
    thickness: u32,
    pattern: LinePattern,
    phase: &mut PatternPhase,
    color: Rgba,
) {
    let delta = (p - from).abs();
    if pattern.is_on(phase.0) {
        stamp_span(canvas, p, delta.x >= delta.y, thickness, color);
    }
    phase.advance();
}

/// Draw one marker glyph centred on `center`.
pub fn draw_marker(canvas: &mut Canvas, center: IVec2, marker: MarkerType, color: Rgba) {
    let r = marker.radius();
    match marker {
        MarkerType::Cross => {
            for k in -r..=r {
                canvas.put(center + IVec2::new(k, 0), color);
                if k != 0 {
                    canvas.put(center + IVec2::new(0, k), color);
                }
            }
        }
        MarkerType::Circle => circle_outline(canvas, center, r, color),
        MarkerType::FilledCircle => {
            for dy in -r..=r {
                for dx in -r..=r {
                    if dx * dx + dy * dy <= r * r {
                        canvas.put(center + IVec2::new(dx, dy), color);
                    }
                }
            }
        }
        MarkerType::Triangle => {
            let [apex, left, right] = triangle(center, r);
            draw_line_1px(canvas, apex, left, color);
            draw_line_1px(canvas, left, right, color);
            draw_line_1px(canvas, right, apex, color);
        }
        MarkerType::FilledTriangle => {
            let [apex, left, right] = triangle(center, r);
            fill_triangle(canvas, apex, left, right, color);
            draw_line_1px(canvas, apex, left, color);
            draw_line_1px(canvas, left, right, color);
            draw_line_1px(canvas, right, apex, color);
        }
        MarkerType::Pixel => canvas.put(center, color),
    }
}

fn triangle(center: IVec2, r: i32) -> [IVec2; 3] {
    [
        center + IVec2::new(0, r),
        center + IVec2::new(-r, -r),
        center + IVec2::new(r, -r),
    ]
}

// Midpoint circle.
fn circle_outline(canvas: &mut Canvas, c: IVec2, r: i32, color: Rgba) {
    let (mut x, mut y, mut err) = (r, 0, 1 - r);
    while x >= y {
        for (dx, dy) in [
            (x, y),
            (y, x),
            (-y, x),
            (-x, y),
            (-x, -y),
            (-y, -x),
            (y, -x),
            (x, -y),
        ] {
            canvas.put(c + IVec2::new(dx, dy), color);
        }
        y += 1;
        if err < 0 {
            err += 2 * y + 1;
        } else {
            x -= 1;
            err += 2 * (y - x) + 1;
        }
    }
}

fn fill_triangle(canvas: &mut Canvas, a: IVec2, b: IVec2, c: IVec2, color: Rgba) {
    let edge = |p: IVec2, q: IVec2, r: IVec2| (q.x - p.x) * (r.y - p.y) - (q.y - p.y) * (r.x - p.x);
    let lo = a.min(b).min(c);
    let hi = a.max(b).max(c);
    for y in lo.y..=hi.y {
        for x in lo.x..=hi.x {
            let p = IVec2::new(x, y);
            let w = [edge(a, b, p), edge(b, c, p), edge(c, a, p)];
            if w.iter().all(|&v| v >= 0) || w.iter().all(|&v| v <= 0) {
                canvas.put(p, color);
            }
        }
    }
}

/// Rasterize one series onto `canvas` using `camera` for the space mapping.
///
/// Interpolated series are clipped segment by segment against the camera's
/// rectangle. Markers are drawn only for points strictly inside it.
pub fn draw_series(canvas: &mut Canvas, camera: &Camera, series: &Series) {
    let color = series.color.to_rgba8();
    let rect = camera.rect;
    if series.interpolate {
        match series.line_style.pattern() {
            None => draw_solid_polyline(canvas, camera, &rect, series, color),
            Some(pattern) => draw_patterned_polyline(canvas, camera, &rect, series, pattern, color),
        }
    } else {
        for &pos in &series.positions {
            let p = DVec2::from(pos);
            if p.is_finite() && rect.contains_strict(p) {
                draw_marker(canvas, camera.data_to_pixel_floor(p), series.marker, color);
            }
        }
    }
}

fn draw_solid_polyline(
    canvas: &mut Canvas,
    camera: &Camera,
    rect: &ClipRect,
    series: &Series,
    color: Rgba,
) {
    for pair in series.positions.windows(2) {
        let Some((a, b)) = clip_segment(pair[0].into(), pair[1].into(), rect) else {
            continue;
        };
        let (a, b) = (camera.data_to_pixel_floor(a), camera.data_to_pixel_floor(b));
        if series.thickness <= 1 {
            draw_line_1px(canvas, a, b, color);
        } else {
            draw_thick_line(canvas, a, b, series.thickness, color);
        }
    }
}

fn draw_patterned_polyline(
    canvas: &mut Canvas,
    camera: &Camera,
    rect: &ClipRect,
    series: &Series,
    pattern: LinePattern,
    color: Rgba,
) {
    let mut phase = PatternPhase::default();
    // Closing pixel of the previous segment and where that segment started.
    let mut pending: Option<(IVec2, IVec2)> = None;

    for pair in series.positions.windows(2) {
        let Some((a, b)) = clip_segment(pair[0].into(), pair[1].into(), rect) else {
            if let Some((end, from)) = pending.take() {
                stamp_pattern_point(canvas, end, from, series.thickness, pattern, &mut phase, color);
            }
            continue;
        };
        let (a, b) = (camera.data_to_pixel_floor(a), camera.data_to_pixel_floor(b));
        if let Some((end, from)) = pending.take()
            && end != a
        {
            stamp_pattern_point(canvas, end, from, series.thickness, pattern, &mut phase, color);
        }
        draw_patterned_line(canvas, a, b, series.thickness, pattern, &mut phase, color);
        pending = Some((b, a));
    }

    if let Some((end, from)) = pending {
        stamp_pattern_point(canvas, end, from, series.thickness, pattern, &mut phase, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, series::LineStyle};

    const INK: Rgba = Rgba::new(0, 0, 0, 255);

    fn blank(size: u32) -> Canvas {
        Canvas::new(size, size, Color::WHITE)
    }

    fn inked(c: &Canvas) -> usize {
        c.count_color(INK)
    }

    #[test]
    fn bresenham_hits_both_ends_in_every_octant() {
        let center = IVec2::new(10, 10);
        for end in [
            IVec2::new(17, 12),
            IVec2::new(12, 17),
            IVec2::new(8, 17),
            IVec2::new(3, 12),
            IVec2::new(3, 8),
            IVec2::new(8, 3),
            IVec2::new(12, 3),
            IVec2::new(17, 8),
        ] {
            let pts: Vec<IVec2> = BresenhamLine::new(center, end).collect();
            let d = (end - center).abs();
            assert_eq!(pts.first(), Some(&center));
            assert_eq!(pts.last(), Some(&end));
            assert_eq!(pts.len() as i32, d.x.max(d.y) + 1);
        }
        assert_eq!(BresenhamLine::new(center, center).count(), 1);
    }

    #[test]
    fn thin_horizontal_line() {
        let mut c = blank(20);
        draw_line_1px(&mut c, IVec2::new(2, 5), IVec2::new(12, 5), INK);
        assert_eq!(inked(&c), 11);
        assert_eq!(c.get(IVec2::new(7, 5)), Some(INK));
    }

    #[test]
    fn thick_line_covers_its_width() {
        let mut c = blank(40);
        draw_thick_line(&mut c, IVec2::new(10, 20), IVec2::new(30, 20), 3, INK);
        for y in 19..=21 {
            assert_eq!(c.get(IVec2::new(20, y)), Some(INK), "row {y}");
        }
        assert_ne!(c.get(IVec2::new(20, 22)), Some(INK));
        assert_ne!(c.get(IVec2::new(20, 18)), Some(INK));
    }

    #[test]
    fn thick_line_near_border_is_clamped() {
        let mut c = blank(10);
        draw_thick_line(&mut c, IVec2::new(-5, 0), IVec2::new(15, 9), 6, INK);
        assert!(inked(&c) > 0);
    }

    #[test]
    fn huge_thickness_is_clamped_to_canvas() {
        let mut c = blank(20);
        draw_thick_line(&mut c, IVec2::new(0, 10), IVec2::new(19, 10), u32::MAX, INK);
        assert_eq!(inked(&c), 20 * 20);

        let camera = Camera::new(ClipRect::new(0.0, 10.0, 0.0, 10.0), 20, 20, 0, 0);
        for style in [LineStyle::Solid, LineStyle::Dashed] {
            let s = Series::line(vec![[0.0, 5.0], [10.0, 5.0]], style)
                .with_color(Color::BLACK)
                .with_thickness(u32::MAX);
            let mut c = blank(20);
            draw_series(&mut c, &camera, &s);
            for y in 0..20 {
                assert_eq!(c.get(IVec2::new(0, y)), Some(INK), "{style:?} row {y}");
            }
        }
    }

    #[test]
    fn patterned_line_skips_end_and_carries_phase() {
        let mut c = blank(40);
        let mut phase = PatternPhase::default();
        draw_patterned_line(
            &mut c,
            IVec2::new(0, 5),
            IVec2::new(25, 5),
            1,
            LinePattern::DASHED,
            &mut phase,
            INK,
        );
        assert_eq!(phase, PatternPhase(25));
        // 0..10 on, 10..19 off, 19..25 on.
        assert_eq!(inked(&c), 10 + 6);
        assert_eq!(c.get(IVec2::new(25, 5)), Some(Rgba::new(255, 255, 255, 255)));
    }

    #[test]
    fn patterned_span_is_perpendicular() {
        let mut c = blank(40);
        let mut phase = PatternPhase::default();
        draw_patterned_line(
            &mut c,
            IVec2::new(10, 0),
            IVec2::new(10, 30),
            3,
            LinePattern::DOTTED,
            &mut phase,
            INK,
        );
        for x in 9..=11 {
            assert_eq!(c.get(IVec2::new(x, 0)), Some(INK));
        }
        assert_ne!(c.get(IVec2::new(10, 2)), Some(INK));
    }

    #[test]
    fn glyph_pixel_counts() {
        let cases = [
            (MarkerType::Cross, 9),
            (MarkerType::Circle, 16),
            (MarkerType::FilledCircle, 29),
            (MarkerType::Pixel, 1),
        ];
        for (marker, expected) in cases {
            let mut c = blank(20);
            draw_marker(&mut c, IVec2::new(10, 10), marker, INK);
            assert_eq!(inked(&c), expected, "{marker:?}");
        }
    }

    #[test]
    fn circle_outline_is_hollow() {
        let mut c = blank(20);
        draw_marker(&mut c, IVec2::new(10, 10), MarkerType::Circle, INK);
        assert_ne!(c.get(IVec2::new(10, 10)), Some(INK));
        assert_eq!(c.get(IVec2::new(13, 10)), Some(INK));
    }

    #[test]
    fn filled_triangle_contains_outline() {
        let mut outline = blank(20);
        let mut filled = blank(20);
        let p = IVec2::new(10, 10);
        draw_marker(&mut outline, p, MarkerType::Triangle, INK);
        draw_marker(&mut filled, p, MarkerType::FilledTriangle, INK);
        assert!(inked(&filled) > inked(&outline));
        for (a, b) in outline.pixels().iter().zip(filled.pixels()) {
            if *a == INK {
                assert_eq!(*b, INK);
            }
        }
        assert_eq!(filled.get(p), Some(INK));
        assert_eq!(outline.get(IVec2::new(10, 13)), Some(INK));
    }

    #[test]
    fn glyph_at_corner_does_not_panic() {
        let mut c = blank(4);
        for marker in [
            MarkerType::Cross,
            MarkerType::Circle,
            MarkerType::FilledCircle,
            MarkerType::Triangle,
            MarkerType::FilledTriangle,
            MarkerType::Pixel,
        ] {
            draw_marker(&mut c, IVec2::ZERO, marker, INK);
        }
        assert!(inked(&c) > 0);
    }

    #[test]
    fn markers_on_boundary_are_dropped() {
        let camera = Camera::new(ClipRect::new(0.0, 10.0, 0.0, 10.0), 100, 100, 0, 0);
        let s = Series::markers(vec![[0.0, 5.0], [10.0, 5.0], [5.0, 10.0]], MarkerType::Pixel)
            .with_color(Color::BLACK);
        let mut c = blank(100);
        draw_series(&mut c, &camera, &s);
        assert_eq!(inked(&c), 0);

        let s = Series::markers(vec![[5.0, 5.0]], MarkerType::Pixel).with_color(Color::BLACK);
        draw_series(&mut c, &camera, &s);
        assert_eq!(c.get(IVec2::new(50, 50)), Some(INK));
    }

    #[test]
    fn segments_outside_rect_are_not_drawn() {
        let camera = Camera::new(ClipRect::new(0.0, 10.0, 0.0, 10.0), 100, 100, 10, 10);
        let s = Series::line(vec![[-5.0, 20.0], [20.0, 20.0]], LineStyle::Solid)
            .with_color(Color::BLACK);
        let mut c = blank(100);
        draw_series(&mut c, &camera, &s);
        assert_eq!(inked(&c), 0);
    }

    #[test]
    fn clipped_line_stays_in_plot_area() {
        let camera = Camera::new(ClipRect::new(0.0, 10.0, 0.0, 10.0), 100, 100, 10, 10);
        let s = Series::line(vec![[-50.0, 5.0], [50.0, 5.0]], LineStyle::Solid)
            .with_color(Color::BLACK)
            .with_thickness(1);
        let mut c = blank(100);
        draw_series(&mut c, &camera, &s);
        // x spans pixels 10..=90 on row 50.
        assert_eq!(inked(&c), 81);
        assert_ne!(c.get(IVec2::new(9, 50)), Some(INK));
    }
}
