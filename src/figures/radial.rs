//! Figure 4: radial profile λ(r) across the horizon transition.
//!
//! The x window stops at r_h + 4w although samples run to r_h + 5w; the
//! framing is kept as is.

use std::error::Error;
use std::path::Path;

use plotters::prelude::*;

use super::style::{
    ArrowHeads, DARK_GREEN, GRAY, LegendKey, Theme, Window, add_legend_entries, build_chart,
    draw_arrow, draw_curve, draw_hline, draw_legend, draw_mesh, draw_text_lines, shade_band,
};
use super::{Figure, RenderContext};
use crate::core::radial::{RADIAL_SAMPLES, RadialProfile};

const BAND_ALPHA: f64 = 0.2;

/// Visible window for a profile.
pub fn window_for(profile: &RadialProfile) -> Window {
    Window::new(
        profile.r_h - 0.1,
        profile.r_h + 4.0 * profile.w,
        -0.05,
        1.1,
    )
}

fn midline_style(theme: &Theme) -> ShapeStyle {
    GRAY.mix(0.5).stroke_width(theme.stroke(1.0))
}

/// The λ = 0.5 guide is listed ahead of the band drawn beneath it.
fn legend_entries(profile: &RadialProfile, theme: &Theme) -> Vec<(String, LegendKey)> {
    vec![
        (
            "λ = 0.5 (transition)".to_string(),
            LegendKey::Line(midline_style(theme)),
        ),
        (
            format!("Transition region (w ≈ {:.2} ℓ_P)", profile.w),
            LegendKey::Patch(RED.mix(BAND_ALPHA).filled()),
        ),
    ]
}

struct Callout {
    lines: [&'static str; 2],
    text_at: (f64, f64),
    target: (f64, f64),
    color: RGBColor,
}

fn callouts(profile: &RadialProfile) -> [Callout; 2] {
    let (r_h, w) = (profile.r_h, profile.w);
    [
        Callout {
            lines: ["Horizon", "(Holographic)"],
            text_at: (r_h + 0.3, 0.85),
            target: (r_h, 1.0),
            color: DARK_GREEN,
        },
        Callout {
            lines: ["Asymptotic", "(LQG)"],
            text_at: (r_h + 2.5 * w, 0.25),
            target: (r_h + 3.0 * w, 0.05),
            color: BLUE,
        },
    ]
}

pub(super) fn render(out_path: &Path, ctx: &RenderContext) -> Result<(), Box<dyn Error>> {
    let profile = &ctx.radial;
    let theme = &ctx.theme;
    let samples = profile.samples(RADIAL_SAMPLES);
    let window = window_for(profile);

    let root =
        BitMapBackend::new(out_path, ctx.pixels(Figure::RadialProfile)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = build_chart(
        &root,
        theme,
        "Radial Profile: λ(r) = exp(-(r-r_h)/w)",
        14.0,
        &window,
    )?;
    draw_mesh(&mut chart, theme, "r - r_h (Planck units)", "λ(r)", 14.0)?;

    shade_band(
        &mut chart,
        &window,
        profile.transition_band(),
        RED,
        BAND_ALPHA,
        None,
    )?;

    let guide = theme.stroke(1.0);
    draw_hline(&mut chart, &window, 0.5, midline_style(theme), None)?;
    draw_hline(&mut chart, &window, 1.0, DARK_GREEN.mix(0.5).stroke_width(guide), None)?;
    draw_hline(&mut chart, &window, 0.0, BLUE.mix(0.5).stroke_width(guide), None)?;

    draw_curve(
        &mut chart,
        &window,
        &samples,
        BLUE.stroke_width(theme.stroke(2.5)),
        None,
    )?;

    let line_h = theme.px(11.0 * 1.25);
    for callout in callouts(profile) {
        draw_arrow(
            &mut chart,
            theme,
            callout.text_at,
            callout.target,
            callout.color.stroke_width(theme.stroke(1.0)),
            ArrowHeads::End,
        )?;
        draw_text_lines(
            &mut chart,
            callout.text_at,
            &callout.lines,
            &theme.text(11.0, &BLACK),
            line_h,
        )?;
    }

    add_legend_entries(&mut chart, &legend_entries(profile, theme))?;
    draw_legend(&mut chart, theme, SeriesLabelPosition::UpperRight, 10.0)?;
    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::radial::{HORIZON_RADIUS, TRANSITION_WIDTH};

    #[test]
    fn window_is_narrower_than_the_sampled_range() {
        let profile = RadialProfile::default();
        let window = window_for(&profile);
        let last_r = profile.samples(RADIAL_SAMPLES).last().unwrap().0;
        assert!((window.x_min - (HORIZON_RADIUS - 0.1)).abs() < 1e-12);
        assert!((window.x_max - (HORIZON_RADIUS + 4.0 * TRANSITION_WIDTH)).abs() < 1e-12);
        assert_eq!((window.y_min, window.y_max), (-0.05, 1.1));
        assert!(last_r > window.x_max);
    }

    #[test]
    fn legend_lists_midline_before_band() {
        let labels: Vec<String> = legend_entries(&RadialProfile::default(), &Theme::new(150))
            .into_iter()
            .map(|(label, _)| label)
            .collect();
        assert_eq!(
            labels,
            vec![
                "λ = 0.5 (transition)".to_string(),
                "Transition region (w ≈ 0.54 ℓ_P)".to_string(),
            ]
        );
    }

    #[test]
    fn callouts_point_into_the_window() {
        let profile = RadialProfile::default();
        let window = window_for(&profile);
        for c in callouts(&profile) {
            assert!(window.contains(c.text_at));
            assert!(window.contains(c.target));
        }
    }

    #[test]
    fn callout_arrows_leave_away_from_their_text() {
        // Text grows right and up from `text_at`, so every target must lie
        // left of it or below it.
        for c in callouts(&RadialProfile::default()) {
            assert!(
                c.target.0 < c.text_at.0 || c.target.1 < c.text_at.1,
                "{:?} arrow runs into its label",
                c.lines
            );
        }
    }
}
