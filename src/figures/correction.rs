//! Figure 2: regularized thermality correction with its resonances.

use std::error::Error;
use std::path::Path;

use plotters::prelude::*;

use super::style::{
    DARK_GREEN, LegendKey, Theme, Window, add_legend_entries, build_chart, draw_curve,
    draw_legend, draw_mesh, draw_vline, shade_band,
};
use super::{Figure, RenderContext};
use crate::core::phase::PhaseRegion;
use crate::core::potential::{
    CORRECTION_PLOT_EPSILON, LAMBDA_1, LAMBDA_2, thermality_correction_scan,
};

/// Values are clamped into [0, DISPLAY_CLIP] before plotting.
pub const DISPLAY_CLIP: f64 = 10.0;

/// Fixed view; the resonance peaks run off the top.
const WINDOW: Window = Window::new(0.0, 1.0, 0.0, 8.0);

const REGION_ALPHA: f64 = 0.1;
const CURVE_LABEL: &str = "f(λ) = (1-λ)[1 + 1/max(|V''|/2V₀, ε)]";

fn region_color(region: PhaseRegion) -> RGBColor {
    match region {
        PhaseRegion::Lqg => BLUE,
        PhaseRegion::Transition => YELLOW,
        PhaseRegion::Holographic => DARK_GREEN,
    }
}

fn curve_style(theme: &Theme) -> ShapeStyle {
    BLUE.stroke_width(theme.stroke(2.0))
}

fn resonance_style(theme: &Theme) -> ShapeStyle {
    RED.stroke_width(theme.stroke(2.0))
}

fn resonances() -> [(String, f64); 2] {
    [("λ₁", LAMBDA_1), ("λ₂", LAMBDA_2)]
        .map(|(name, lambda)| (format!("{name} = {lambda:.3} (resonance)"), lambda))
}

/// Curve and resonances first, then the regions painted beneath them.
fn legend_entries(theme: &Theme) -> Vec<(String, LegendKey)> {
    let mut entries = vec![(CURVE_LABEL.to_string(), LegendKey::Line(curve_style(theme)))];
    for (label, _) in resonances() {
        entries.push((label, LegendKey::Line(resonance_style(theme))));
    }
    for region in PhaseRegion::ALL {
        let fill = region_color(region).mix(REGION_ALPHA).filled();
        entries.push((region.stability_label().to_string(), LegendKey::Patch(fill)));
    }
    entries
}

/// f(λ, 0.01) clamped for display.
pub fn display_scan(lambdas: &[f64]) -> Vec<f64> {
    thermality_correction_scan(lambdas, CORRECTION_PLOT_EPSILON)
        .into_iter()
        .map(|f| f.clamp(0.0, DISPLAY_CLIP))
        .collect()
}

pub(super) fn render(out_path: &Path, ctx: &RenderContext) -> Result<(), Box<dyn Error>> {
    let space = &ctx.space;
    let theme = &ctx.theme;
    let f_scan = display_scan(&space.points);
    space.assert_scan_len_named(&f_scan, "f_scan");
    let points = space.zip_scan(&f_scan);

    let root = BitMapBackend::new(out_path, ctx.pixels(Figure::Correction)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = build_chart(
        &root,
        theme,
        "Thermality Correction Function with Resonances",
        14.0,
        &WINDOW,
    )?;
    draw_mesh(&mut chart, theme, "λ", "f(λ)", 14.0)?;

    for region in PhaseRegion::ALL {
        shade_band(
            &mut chart,
            &WINDOW,
            region.bounds(),
            region_color(region),
            REGION_ALPHA,
            None,
        )?;
    }

    draw_curve(&mut chart, &WINDOW, &points, curve_style(theme), None)?;
    for (_, lambda) in resonances() {
        draw_vline(&mut chart, &WINDOW, lambda, resonance_style(theme), None)?;
    }

    add_legend_entries(&mut chart, &legend_entries(theme))?;
    draw_legend(&mut chart, theme, SeriesLabelPosition::UpperRight, 10.0)?;
    root.present()?;
    Ok(())
}
