//! Figure 3: qualitative phase structure of the framework.
//!
//! Every position and label here is presentation only.

use std::error::Error;
use std::path::Path;

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::style::{
    ArrowHeads, DARK_GREEN, PURPLE, Window, build_chart, draw_arrow, draw_boxed_text, draw_curve,
    draw_legend, draw_mesh, shade_band,
};
use super::{Figure, RenderContext};
use crate::core::phase::PhaseRegion;
use crate::core::potential::scaled_potential_scan;

const WINDOW: Window = Window::new(-0.05, 1.05, -0.5, 4.5);

/// Height of the rescaled barrier peak.
pub const BARRIER_PEAK: f64 = 2.0;

const REGION_ALPHA: f64 = 0.3;
const HOLOGRAPHIC_MINIMUM_COLOR: RGBColor = DARK_GREEN;
const MARKER_PT: f64 = 15.0;

const CRITICAL_ANNOTATIONS: [((f64, f64), [&str; 2]); 3] = [
    ((0.05, 0.5), ["α = -1/2", "(Kaul-Majumdar)"]),
    ((0.85, 0.5), ["α = -3/2", "(Sen)"]),
    ((0.45, 2.5), ["α = -1", "(Critical)"]),
];

const RG_FLOW_LEFT: (f64, f64) = (0.3, 3.5);
const RG_FLOW_RIGHT: (f64, f64) = (0.7, 3.5);
const RG_FLOW_LABEL_AT: (f64, f64) = (0.5, 3.7);
const RG_FLOW_LABEL: &str = "RG Flow (c = 2π)";

fn region_color(region: PhaseRegion) -> RGBColor {
    match region {
        PhaseRegion::Lqg => RGBColor(0x34, 0x98, 0xdb),
        PhaseRegion::Transition => RGBColor(0xf3, 0x9c, 0x12),
        PhaseRegion::Holographic => RGBColor(0x2e, 0xcc, 0x71),
    }
}

pub(super) fn render(out_path: &Path, ctx: &RenderContext) -> Result<(), Box<dyn Error>> {
    let space = &ctx.space;
    let theme = &ctx.theme;
    let v_scaled = scaled_potential_scan(&space.points, BARRIER_PEAK);
    space.assert_scan_len_named(&v_scaled, "v_scaled");

    let root =
        BitMapBackend::new(out_path, ctx.pixels(Figure::PhaseStructure)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = build_chart(
        &root,
        theme,
        "Phase Structure of the Kaelion Framework",
        14.0,
        &WINDOW,
    )?;
    draw_mesh(
        &mut chart,
        theme,
        "λ (Information Accessibility)",
        "Energy / Scaled Potential",
        14.0,
    )?;

    // Bands span [0, 1] only; the window margin stays white.
    for region in PhaseRegion::ALL {
        shade_band(
            &mut chart,
            &WINDOW,
            region.bounds(),
            region_color(region),
            REGION_ALPHA,
            Some(region.phase_label()),
        )?;
    }

    draw_curve(
        &mut chart,
        &WINDOW,
        &space.zip_scan(&v_scaled),
        BLACK.stroke_width(theme.stroke(3.0)),
        Some("V(λ) (scaled)"),
    )?;

    let r = theme.px(MARKER_PT * 0.5);
    chart
        .draw_series(std::iter::once(Circle::new((0.0, 0.0), r, BLUE.filled())))?
        .label("λ=0: LQG minimum")
        .legend(|(x, y)| Circle::new((x + 10, y), 5, BLUE.filled()));
    chart
        .draw_series(std::iter::once(Circle::new(
            (1.0, 0.0),
            r,
            HOLOGRAPHIC_MINIMUM_COLOR.filled(),
        )))?
        .label("λ=1: Holographic minimum")
        .legend(|(x, y)| Circle::new((x + 10, y), 5, HOLOGRAPHIC_MINIMUM_COLOR.filled()));
    chart
        .draw_series(std::iter::once(TriangleMarker::new(
            (0.5, BARRIER_PEAK),
            r,
            RED.filled(),
        )))?
        .label("λ=0.5: Barrier maximum")
        .legend(|(x, y)| TriangleMarker::new((x + 10, y), 6, RED.filled()));

    for (at, lines) in CRITICAL_ANNOTATIONS {
        draw_boxed_text(&mut chart, theme, at, &lines, 11.0)?;
    }

    let flow_style = PURPLE.stroke_width(theme.stroke(2.0));
    draw_arrow(
        &mut chart,
        theme,
        RG_FLOW_RIGHT,
        RG_FLOW_LEFT,
        flow_style,
        ArrowHeads::Both,
    )?;
    let label_style = theme
        .text(11.0, &PURPLE)
        .pos(Pos::new(HPos::Center, VPos::Bottom));
    chart.draw_series(std::iter::once(Text::new(
        RG_FLOW_LABEL,
        RG_FLOW_LABEL_AT,
        label_style,
    )))?;

    draw_legend(&mut chart, theme, SeriesLabelPosition::UpperLeft, 9.0)?;
    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_is_fixed() {
        assert_eq!(WINDOW, Window::new(-0.05, 1.05, -0.5, 4.5));
        assert!(WINDOW.contains((0.5, BARRIER_PEAK)));
    }

    #[test]
    fn holographic_minimum_uses_dark_green() {
        assert_eq!(HOLOGRAPHIC_MINIMUM_COLOR, RGBColor(0, 128, 0));
        assert_ne!(HOLOGRAPHIC_MINIMUM_COLOR, GREEN);
    }

    #[test]
    fn annotations_sit_inside_the_window() {
        for (at, _) in CRITICAL_ANNOTATIONS {
            assert!(WINDOW.contains(at), "annotation {at:?} outside window");
        }
        assert!(WINDOW.contains(RG_FLOW_LEFT));
        assert!(WINDOW.contains(RG_FLOW_RIGHT));
        assert!(WINDOW.contains(RG_FLOW_LABEL_AT));
    }

    #[test]
    fn scaled_barrier_marker_lies_on_the_curve() {
        let peak = scaled_potential_scan(&[0.5], BARRIER_PEAK)[0];
        assert!((peak - BARRIER_PEAK).abs() < 1e-12);
    }
}
