//! Title and axis labels, drawn into the padding around the plot area.

use std::convert::Infallible;

use embedded_graphics::{
    mono_font::{MonoTextStyle, ascii::FONT_6X10},
    pixelcolor::Rgb888,
    prelude::*,
    text::{Alignment, Baseline, Text, TextStyleBuilder},
};

use crate::{
    Color,
    canvas::{Canvas, Rgba},
    config::PlotConfig,
};

const GLYPH_HEIGHT: u32 = 10;

/// Which way a label reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Orientation {
    Horizontal,
    /// Rotated a quarter turn counter-clockwise, reading bottom to top.
    Vertical,
}

/// Adapts a [`Canvas`] to an `embedded-graphics` target. Text is laid out
/// around the origin and placed at `anchor` (image coordinates, y down).
struct LabelTarget<'a> {
    canvas: &'a mut Canvas,
    anchor: Point,
    orientation: Orientation,
}

impl LabelTarget<'_> {
    fn place(&self, p: Point) -> Point {
        match self.orientation {
            Orientation::Horizontal => self.anchor + p,
            Orientation::Vertical => self.anchor + Point::new(p.y, -p.x),
        }
    }
}

impl OriginDimensions for LabelTarget<'_> {
    fn size(&self) -> Size {
        Size::new(self.canvas.width(), self.canvas.height())
    }
}

impl DrawTarget for LabelTarget<'_> {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(p, color) in pixels {
            let q = self.place(p);
            self.canvas.put_image(
                q.x as i64,
                q.y as i64,
                Rgba::new(color.r(), color.g(), color.b(), 255),
            );
        }
        Ok(())
    }
}

fn draw_text(
    canvas: &mut Canvas,
    label: &str,
    anchor: Point,
    orientation: Orientation,
    color: Color,
) {
    if label.is_empty() {
        return;
    }
    let rgba = color.to_rgba8();
    let style = MonoTextStyle::new(&FONT_6X10, Rgb888::new(rgba.r, rgba.g, rgba.b));
    let layout = TextStyleBuilder::new()
        .alignment(Alignment::Center)
        .baseline(Baseline::Top)
        .build();
    let mut target = LabelTarget {
        canvas,
        anchor,
        orientation,
    };
    let Ok(_) = Text::with_text_style(label, Point::zero(), style, layout).draw(&mut target);
}

/// Offset that centres one line of text in a band `band` pixels deep.
fn centred(band: u32) -> i32 {
    (band.saturating_sub(GLYPH_HEIGHT) / 2) as i32
}

/// Draw the title above the plot area, the x label below it and the y label,
/// rotated, to its left. Empty strings are skipped.
pub(crate) fn draw_labels(canvas: &mut Canvas, config: &PlotConfig) {
    let (w, h) = (canvas.width() as i32, canvas.height() as i32);
    let color = config.axes.color;
    let pad_y = config.padding_y as i32;

    draw_text(
        canvas,
        &config.title,
        Point::new(w / 2, centred(config.padding_y)),
        Orientation::Horizontal,
        color,
    );
    draw_text(
        canvas,
        &config.x_label,
        Point::new(w / 2, h - pad_y + centred(config.padding_y)),
        Orientation::Horizontal,
        color,
    );
    draw_text(
        canvas,
        &config.y_label,
        Point::new(centred(config.padding_x), h / 2),
        Orientation::Vertical,
        color,
    );
}

#[cfg(test)]
mod tests {
    use std::ops::Range;

    use super::*;
    use crate::{AxesConfig, plot_session::render};

    fn shown() -> PlotConfig {
        PlotConfig {
            width: 200,
            height: 160,
            padding_x: 20,
            padding_y: 20,
            title: "Title".to_string(),
            axes: AxesConfig::shown(),
            ..Default::default()
        }
    }

    type Bbox = (u32, u32, u32, u32);

    /// Bounding box `(x0, y0, x1, y1)` of `color` inside the given image rect.
    fn ink_box(c: &Canvas, color: Rgba, x: Range<u32>, y: Range<u32>) -> Option<Bbox> {
        let mut bbox: Option<Bbox> = None;
        for row in y {
            for col in x.clone() {
                if c.pixel(col, row) != Some(color) {
                    continue;
                }
                bbox = Some(match bbox {
                    None => (col, row, col, row),
                    Some((x0, y0, x1, y1)) => {
                        (x0.min(col), y0.min(row), x1.max(col), y1.max(row))
                    }
                });
            }
        }
        bbox
    }

    #[test]
    fn labels_land_in_the_padding() {
        let config = shown();
        let canvas = render(&config).unwrap();
        let ink = config.axes.color.to_rgba8();

        // Row 19 holds the top of the y axis.
        let (x0, y0, x1, y1) = ink_box(&canvas, ink, 0..200, 0..19).unwrap();
        assert!(y0 >= 5 && y1 < 15, "title rows {y0}..={y1}");
        assert!(x0 < 100 && x1 > 100, "title columns {x0}..={x1}");

        let (_, y0, _, y1) = ink_box(&canvas, ink, 20..180, 140..160).unwrap();
        assert!(y0 >= 145 && y1 < 155, "x label rows {y0}..={y1}");

        // "Y axis" reads upwards, so it is taller than it is wide.
        let (x0, y0, x1, y1) = ink_box(&canvas, ink, 0..20, 20..140).unwrap();
        assert!(y1 - y0 > x1 - x0, "y label box {x0},{y0} {x1},{y1}");
        assert!(y0 < 80 && y1 > 80);
    }

    #[test]
    fn hidden_axes_draw_no_text() {
        let config = PlotConfig {
            axes: AxesConfig::default(),
            ..shown()
        };
        let canvas = render(&config).unwrap();
        assert_eq!(canvas.count_color(Color::WHITE), 200 * 160);
    }

    #[test]
    fn empty_labels_are_skipped() {
        let mut canvas = Canvas::new(60, 40, Color::WHITE);
        let config = PlotConfig {
            title: String::new(),
            x_label: String::new(),
            y_label: String::new(),
            ..shown()
        };
        draw_labels(&mut canvas, &config);
        assert_eq!(canvas.count_color(Color::WHITE), 60 * 40);
    }

    #[test]
    fn vertical_text_is_a_quarter_turn() {
        let mut upright = Canvas::new(40, 40, Color::WHITE);
        let mut turned = Canvas::new(40, 40, Color::WHITE);
        let anchor = Point::new(20, 20);
        draw_text(&mut upright, "L", anchor, Orientation::Horizontal, Color::BLACK);
        draw_text(&mut turned, "L", anchor, Orientation::Vertical, Color::BLACK);
        let black = Color::BLACK.to_rgba8();
        assert_eq!(upright.count_color(black), turned.count_color(black));
        for y in 0..40u32 {
            for x in 0..40u32 {
                if upright.pixel(x, y) == Some(black) {
                    // (dx, dy) from the anchor lands at (dy, -dx).
                    let (dx, dy) = (x as i32 - 20, y as i32 - 20);
                    let (tx, ty) = ((20 + dy) as u32, (20 - dx) as u32);
                    assert_eq!(turned.pixel(tx, ty), Some(black), "({x},{y})");
                }
            }
        }
    }
}
