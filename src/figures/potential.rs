//! Figure 1: effective potential and its first two derivatives.

use std::error::Error;
use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

use super::style::{
    DARK_GREEN, GRAY, ORANGE, Theme, Window, build_chart, draw_curve, draw_hline, draw_legend,
    draw_mesh, draw_vline,
};
use super::{Figure, RenderContext};
use crate::core::potential::{
    BARRIER_HEIGHT, LAMBDA_1, LAMBDA_2, potential_double_prime_scan, potential_prime_scan,
    potential_scan,
};

const AUTOSCALE_MARGIN: f64 = 0.05;

pub(super) fn render(out_path: &Path, ctx: &RenderContext) -> Result<(), Box<dyn Error>> {
    let space = &ctx.space;
    let v_scan = potential_scan(&space.points);
    let vp_scan = potential_prime_scan(&space.points);
    let vpp_scan = potential_double_prime_scan(&space.points);

    space.assert_scan_len_named(&v_scan, "v_scan");
    space.assert_scan_len_named(&vp_scan, "vp_scan");
    space.assert_scan_len_named(&vpp_scan, "vpp_scan");

    let root = BitMapBackend::new(out_path, ctx.pixels(Figure::Potential)).into_drawing_area();
    root.fill(&WHITE)?;
    let panels = root.split_evenly((1, 3));

    draw_potential_panel(&panels[0], &ctx.theme, &space.zip_scan(&v_scan))?;
    draw_first_derivative_panel(&panels[1], &ctx.theme, &space.zip_scan(&vp_scan))?;
    draw_second_derivative_panel(&panels[2], &ctx.theme, &space.zip_scan(&vpp_scan))?;

    root.present()?;
    Ok(())
}

fn draw_potential_panel(
    area: &DrawingArea<BitMapBackend, Shift>,
    theme: &Theme,
    points: &[(f64, f64)],
) -> Result<(), Box<dyn Error>> {
    let window = Window::autoscale_y(0.0, 1.0, points, AUTOSCALE_MARGIN);
    let mut chart = build_chart(area, theme, "Effective Potential", 12.0, &window)?;
    draw_mesh(&mut chart, theme, "λ", "V(λ)", 12.0)?;

    let barrier_label = format!("Barrier = √3/16 ≈ {BARRIER_HEIGHT:.3}");
    draw_hline(
        &mut chart,
        &window,
        BARRIER_HEIGHT,
        RED.mix(0.5).stroke_width(theme.stroke(1.5)),
        Some(&barrier_label),
    )?;
    draw_vline(
        &mut chart,
        &window,
        0.5,
        GRAY.mix(0.5).stroke_width(theme.stroke(1.0)),
        None,
    )?;
    draw_curve(
        &mut chart,
        &window,
        points,
        BLUE.stroke_width(theme.stroke(2.0)),
        None,
    )?;

    draw_legend(&mut chart, theme, SeriesLabelPosition::UpperRight, 9.0)?;
    Ok(())
}

fn draw_first_derivative_panel(
    area: &DrawingArea<BitMapBackend, Shift>,
    theme: &Theme,
    points: &[(f64, f64)],
) -> Result<(), Box<dyn Error>> {
    let window = Window::autoscale_y(0.0, 1.0, points, AUTOSCALE_MARGIN);
    let mut chart = build_chart(area, theme, "First Derivative", 12.0, &window)?;
    draw_mesh(&mut chart, theme, "λ", "V'(λ)", 12.0)?;

    draw_hline(
        &mut chart,
        &window,
        0.0,
        BLACK.mix(0.3).stroke_width(theme.stroke(1.0)),
        None,
    )?;
    draw_vline(
        &mut chart,
        &window,
        0.5,
        GRAY.mix(0.5).stroke_width(theme.stroke(1.0)),
        None,
    )?;

    let marker = RED.mix(0.5).stroke_width(theme.stroke(1.5));
    let l1_label = format!("λ₁ = {LAMBDA_1:.3}");
    let l2_label = format!("λ₂ = {LAMBDA_2:.3}");
    draw_vline(&mut chart, &window, LAMBDA_1, marker, Some(&l1_label))?;
    draw_vline(&mut chart, &window, LAMBDA_2, marker, Some(&l2_label))?;

    draw_curve(
        &mut chart,
        &window,
        points,
        DARK_GREEN.stroke_width(theme.stroke(2.0)),
        None,
    )?;

    draw_legend(&mut chart, theme, SeriesLabelPosition::UpperRight, 9.0)?;
    Ok(())
}

fn draw_second_derivative_panel(
    area: &DrawingArea<BitMapBackend, Shift>,
    theme: &Theme,
    points: &[(f64, f64)],
) -> Result<(), Box<dyn Error>> {
    let window = Window::autoscale_y(0.0, 1.0, points, AUTOSCALE_MARGIN);
    let mut chart = build_chart(area, theme, "Second Derivative (Curvature)", 12.0, &window)?;
    draw_mesh(&mut chart, theme, "λ", "V''(λ)", 12.0)?;

    draw_hline(
        &mut chart,
        &window,
        0.0,
        BLACK.mix(0.3).stroke_width(theme.stroke(1.0)),
        None,
    )?;

    // One legend entry covers both inflection markers.
    let marker = ORANGE.mix(0.5).stroke_width(theme.stroke(1.5));
    draw_vline(&mut chart, &window, LAMBDA_1, marker, Some("Inflection points"))?;
    draw_vline(&mut chart, &window, LAMBDA_2, marker, None)?;

    draw_curve(
        &mut chart,
        &window,
        points,
        RED.stroke_width(theme.stroke(2.0)),
        None,
    )?;

    draw_legend(&mut chart, theme, SeriesLabelPosition::LowerMiddle, 9.0)?;
    Ok(())
}
