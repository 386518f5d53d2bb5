//! Shared drawing helpers for the figure renderers.
//!
//! Sizes are given in typographic points and converted to pixels through the
//! configured DPI, so a figure keeps its proportions at any resolution.

use std::error::Error;
use std::ops::Range;

use plotters::coord::Shift;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

pub type Chart2d<'a, DB> = ChartContext<'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

pub const GRAY: RGBColor = RGBColor(128, 128, 128);
pub const ORANGE: RGBColor = RGBColor(255, 165, 0);
pub const PURPLE: RGBColor = RGBColor(128, 0, 128);
/// Matplotlib's "green"/"g" is darker than plotters' GREEN.
pub const DARK_GREEN: RGBColor = RGBColor(0, 128, 0);

/// Physical figure size in inches.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FigureSize {
    pub width_in: f64,
    pub height_in: f64,
}

impl FigureSize {
    pub const fn new(width_in: f64, height_in: f64) -> Self {
        Self {
            width_in,
            height_in,
        }
    }

    pub fn pixels(self, dpi: u32) -> (u32, u32) {
        let dpi = dpi as f64;
        (
            (self.width_in * dpi).round() as u32,
            (self.height_in * dpi).round() as u32,
        )
    }
}

/// Point-to-pixel conversion for fonts, strokes and markers.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub dpi: u32,
}

impl Theme {
    pub fn new(dpi: u32) -> Self {
        Self { dpi: dpi.max(1) }
    }

    #[inline]
    pub fn px_per_pt(&self) -> f64 {
        self.dpi as f64 / 72.0
    }

    pub fn px(&self, pt: f64) -> i32 {
        (pt * self.px_per_pt()).round() as i32
    }

    pub fn stroke(&self, pt: f64) -> u32 {
        (pt * self.px_per_pt()).round().max(1.0) as u32
    }

    pub fn font(&self, pt: f64) -> FontDesc<'static> {
        ("sans-serif", pt * self.px_per_pt()).into_font()
    }

    pub fn text(&self, pt: f64, color: &RGBColor) -> TextStyle<'static> {
        self.font(pt).color(color)
    }
}

/// Visible data window of a chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Window {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Window {
    pub const fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Fixed x extent, y fitted to the finite data values with `margin` of
    /// the span added on both sides.
    pub fn autoscale_y(x_min: f64, x_max: f64, points: &[(f64, f64)], margin: f64) -> Self {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for &(_, y) in points {
            if y.is_finite() {
                lo = lo.min(y);
                hi = hi.max(y);
            }
        }
        if !lo.is_finite() || !hi.is_finite() || (hi - lo).abs() < 1e-12 {
            lo = -1.0;
            hi = 1.0;
        }
        let pad = (hi - lo) * margin;
        Self::new(x_min, x_max, lo - pad, hi + pad)
    }

    pub fn x_range(&self) -> Range<f64> {
        self.x_min..self.x_max
    }

    pub fn y_range(&self) -> Range<f64> {
        self.y_min..self.y_max
    }

    #[inline]
    pub fn contains(&self, (x, y): (f64, f64)) -> bool {
        x >= self.x_min && x <= self.x_max && y >= self.y_min && y <= self.y_max
    }
}

/// Clip segment p→q to the window (Liang–Barsky). Returns the visible part
/// and whether q itself was cut off.
fn clip_segment(
    p: (f64, f64),
    q: (f64, f64),
    window: &Window,
) -> Option<((f64, f64), (f64, f64), bool)> {
    let dx = q.0 - p.0;
    let dy = q.1 - p.1;
    let mut t0 = 0.0f64;
    let mut t1 = 1.0f64;
    let edges = [
        (-dx, p.0 - window.x_min),
        (dx, window.x_max - p.0),
        (-dy, p.1 - window.y_min),
        (dy, window.y_max - p.1),
    ];
    for (pk, qk) in edges {
        if pk == 0.0 {
            if qk < 0.0 {
                return None;
            }
            continue;
        }
        let r = qk / pk;
        if pk < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }
    let a = if t0 > 0.0 {
        (p.0 + t0 * dx, p.1 + t0 * dy)
    } else {
        p
    };
    let b = if t1 < 1.0 {
        (p.0 + t1 * dx, p.1 + t1 * dy)
    } else {
        q
    };
    Some((a, b, t1 < 1.0))
}

/// Split a polyline into the runs that are visible inside `window`, cutting
/// exactly at the window edges.
pub fn clip_polyline(points: &[(f64, f64)], window: &Window) -> Vec<Vec<(f64, f64)>> {
    let mut runs = Vec::new();
    let mut current: Vec<(f64, f64)> = Vec::new();

    fn flush(runs: &mut Vec<Vec<(f64, f64)>>, current: &mut Vec<(f64, f64)>) {
        if current.len() >= 2 {
            runs.push(std::mem::take(current));
        } else {
            current.clear();
        }
    }

    for pair in points.windows(2) {
        match clip_segment(pair[0], pair[1], window) {
            Some((a, b, end_cut)) => {
                if current.last() != Some(&a) {
                    flush(&mut runs, &mut current);
                    current.push(a);
                }
                current.push(b);
                if end_cut {
                    flush(&mut runs, &mut current);
                }
            }
            None => flush(&mut runs, &mut current),
        }
    }
    flush(&mut runs, &mut current);
    runs
}

pub fn build_chart<'a, DB: DrawingBackend + 'a>(
    area: &'a DrawingArea<DB, Shift>,
    theme: &Theme,
    caption: &str,
    title_pt: f64,
    window: &Window,
) -> Result<Chart2d<'a, DB>, Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let chart = ChartBuilder::on(area)
        .caption(caption, theme.font(title_pt))
        .margin(theme.px(6.0))
        .x_label_area_size(theme.px(30.0))
        .y_label_area_size(theme.px(42.0))
        .build_cartesian_2d(window.x_range(), window.y_range())?;
    Ok(chart)
}

/// Tick label with at most three decimals; values that round to zero print
/// as "0" whatever their sign.
pub fn tick_label(v: &f64) -> String {
    if v.abs() < 5e-4 {
        return "0".to_string();
    }
    let text = format!("{v:.3}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Axes, tick labels and a light grid.
pub fn draw_mesh<'a, DB: DrawingBackend + 'a>(
    chart: &mut Chart2d<'a, DB>,
    theme: &Theme,
    x_desc: &str,
    y_desc: &str,
    desc_pt: f64,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    chart
        .configure_mesh()
        .x_desc(x_desc)
        .y_desc(y_desc)
        .axis_desc_style(theme.font(desc_pt))
        .label_style(theme.font(9.0))
        .x_label_formatter(&tick_label)
        .y_label_formatter(&tick_label)
        .bold_line_style(BLACK.mix(0.12))
        .light_line_style(WHITE)
        .draw()?;
    Ok(())
}

pub fn draw_legend<'a, DB: DrawingBackend + 'a>(
    chart: &mut Chart2d<'a, DB>,
    theme: &Theme,
    position: SeriesLabelPosition,
    font_pt: f64,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    chart
        .configure_series_labels()
        .position(position)
        .label_font(theme.font(font_pt))
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK.mix(0.3))
        .draw()?;
    Ok(())
}

/// Swatch of a legend entry registered apart from the element it names.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LegendKey {
    Line(ShapeStyle),
    Patch(ShapeStyle),
}

/// Register legend entries in the given order without drawing anything, so
/// the legend can list elements in a different order from their paint order.
pub fn add_legend_entries<'a, DB: DrawingBackend + 'a>(
    chart: &mut Chart2d<'a, DB>,
    entries: &[(String, LegendKey)],
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    for (label, key) in entries {
        let anno = chart.draw_series(std::iter::empty::<PathElement<(f64, f64)>>())?;
        anno.label(label.as_str());
        match *key {
            LegendKey::Line(style) => {
                anno.legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));
            }
            LegendKey::Patch(fill) => {
                anno.legend(move |(x, y)| Rectangle::new([(x, y - 6), (x + 20, y + 6)], fill));
            }
        }
    }
    Ok(())
}

/// Polyline restricted to the chart window, optionally with a legend entry.
pub fn draw_curve<'a, DB: DrawingBackend + 'a>(
    chart: &mut Chart2d<'a, DB>,
    window: &Window,
    points: &[(f64, f64)],
    style: ShapeStyle,
    label: Option<&str>,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let mut label = label;
    for run in clip_polyline(points, window) {
        let anno = chart.draw_series(LineSeries::new(run, style))?;
        if let Some(text) = label.take() {
            anno.label(text)
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));
        }
    }
    Ok(())
}

pub fn draw_vline<'a, DB: DrawingBackend + 'a>(
    chart: &mut Chart2d<'a, DB>,
    window: &Window,
    x: f64,
    style: ShapeStyle,
    label: Option<&str>,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let anno = chart.draw_series(std::iter::once(PathElement::new(
        vec![(x, window.y_min), (x, window.y_max)],
        style,
    )))?;
    if let Some(text) = label {
        anno.label(text)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));
    }
    Ok(())
}

pub fn draw_hline<'a, DB: DrawingBackend + 'a>(
    chart: &mut Chart2d<'a, DB>,
    window: &Window,
    y: f64,
    style: ShapeStyle,
    label: Option<&str>,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let anno = chart.draw_series(std::iter::once(PathElement::new(
        vec![(window.x_min, y), (window.x_max, y)],
        style,
    )))?;
    if let Some(text) = label {
        anno.label(text)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));
    }
    Ok(())
}

/// Full-height band between `x0` and `x1`.
pub fn shade_band<'a, DB: DrawingBackend + 'a>(
    chart: &mut Chart2d<'a, DB>,
    window: &Window,
    (x0, x1): (f64, f64),
    color: RGBColor,
    alpha: f64,
    label: Option<&str>,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let fill = color.mix(alpha).filled();
    let anno = chart.draw_series(std::iter::once(Rectangle::new(
        [(x0, window.y_min), (x1, window.y_max)],
        fill,
    )))?;
    if let Some(text) = label {
        anno.label(text)
            .legend(move |(x, y)| Rectangle::new([(x, y - 6), (x + 20, y + 6)], fill));
    }
    Ok(())
}

/// Vertical pixel offsets of `count` lines whose last line sits on the anchor.
pub fn stacked_line_offsets(count: usize, line_height_px: i32) -> Vec<i32> {
    (0..count)
        .map(|i| -((count - 1 - i) as i32) * line_height_px)
        .collect()
}

/// Text lines stacked upward from `at`, which is the bottom-left corner of
/// the block; an arrow leaving `at` never crosses the text.
pub fn draw_text_lines<'a, DB: DrawingBackend + 'a>(
    chart: &mut Chart2d<'a, DB>,
    at: (f64, f64),
    lines: &[&str],
    style: &TextStyle<'static>,
    line_height_px: i32,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let style = style.pos(Pos::new(HPos::Left, VPos::Bottom));
    let offsets = stacked_line_offsets(lines.len(), line_height_px);
    for (line, dy) in lines.iter().zip(offsets) {
        chart.draw_series(std::iter::once(
            EmptyElement::at(at) + Text::new(line.to_string(), (0, dy), style.clone()),
        ))?;
    }
    Ok(())
}

/// Text in a translucent box whose lower-left corner sits at `at`.
pub fn draw_boxed_text<'a, DB: DrawingBackend + 'a>(
    chart: &mut Chart2d<'a, DB>,
    theme: &Theme,
    at: (f64, f64),
    lines: &[&str],
    font_pt: f64,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let font_px = font_pt * theme.px_per_pt();
    let line_h = (font_px * 1.25).round() as i32;
    let pad = theme.px(3.0);
    let widest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let w = (widest as f64 * font_px * 0.58).round() as i32 + 2 * pad;
    let h = line_h * lines.len() as i32 + 2 * pad;

    chart.draw_series(std::iter::once(
        EmptyElement::at(at)
            + Rectangle::new([(0, -h), (w, 0)], WHITE.mix(0.8).filled())
            + Rectangle::new([(0, -h), (w, 0)], BLACK.mix(0.6)),
    ))?;
    let style = theme.text(font_pt, &BLACK);
    for (i, line) in lines.iter().enumerate() {
        let offset = (pad, -h + pad + i as i32 * line_h);
        chart.draw_series(std::iter::once(
            EmptyElement::at(at) + Text::new(line.to_string(), offset, style.clone()),
        ))?;
    }
    Ok(())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArrowHeads {
    End,
    Both,
}

/// Straight arrow from `from` to `to`; heads are sized in pixels so they keep
/// their shape on anisotropic axes.
pub fn draw_arrow<'a, DB: DrawingBackend + 'a>(
    chart: &mut Chart2d<'a, DB>,
    theme: &Theme,
    from: (f64, f64),
    to: (f64, f64),
    style: ShapeStyle,
    heads: ArrowHeads,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    chart.draw_series(std::iter::once(PathElement::new(vec![from, to], style)))?;

    let head_len = theme.px(7.0) as f64;
    let p_from = chart.backend_coord(&from);
    let p_to = chart.backend_coord(&to);
    let mut tips = vec![(to, p_from, p_to)];
    if heads == ArrowHeads::Both {
        tips.push((from, p_to, p_from));
    }
    for (tip, tail_px, tip_px) in tips {
        let dx = (tip_px.0 - tail_px.0) as f64;
        let dy = (tip_px.1 - tail_px.1) as f64;
        let len = (dx * dx + dy * dy).sqrt();
        if len < 1.0 {
            continue;
        }
        let (ux, uy) = (dx / len, dy / len);
        let barb = |side: f64| {
            (
                (-head_len * ux - side * 0.5 * head_len * uy).round() as i32,
                (-head_len * uy + side * 0.5 * head_len * ux).round() as i32,
            )
        };
        chart.draw_series(std::iter::once(
            EmptyElement::at(tip) + PathElement::new(vec![barb(1.0), (0, 0), barb(-1.0)], style),
        ))?;
    }
    Ok(())
}
