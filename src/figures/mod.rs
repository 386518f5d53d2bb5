//! figures — The four Kaelion figures and the run that writes them.

pub mod correction;
pub mod phases;
pub mod potential;
pub mod radial;
pub mod style;

use std::error::Error;
use std::fs::create_dir_all;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::RenderConfig;
use crate::core::lambda_space::LambdaSpace;
use crate::core::radial::RadialProfile;
use crate::error::{FigureError, Result};
use style::{FigureSize, Theme};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Figure {
    /// V, V', V'' side by side.
    Potential,
    /// f(λ, ε) with resonances and stability regions.
    Correction,
    /// Qualitative phase diagram.
    PhaseStructure,
    /// λ(r) outside the horizon.
    RadialProfile,
}

impl Figure {
    pub const ALL: [Figure; 4] = [
        Figure::Potential,
        Figure::Correction,
        Figure::PhaseStructure,
        Figure::RadialProfile,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            Figure::Potential => "fig_paper2_potential.png",
            Figure::Correction => "fig_paper2_f_lambda.png",
            Figure::PhaseStructure => "fig_paper2_phases.png",
            Figure::RadialProfile => "fig_paper2_radial.png",
        }
    }

    /// Short description printed in the confirmation banner.
    pub fn summary(self) -> &'static str {
        match self {
            Figure::Potential => "V, V', V''",
            Figure::Correction => "f(λ) with resonances",
            Figure::PhaseStructure => "phase structure",
            Figure::RadialProfile => "radial profile λ(r)",
        }
    }

    pub fn size(self) -> FigureSize {
        match self {
            Figure::Potential => FigureSize::new(14.0, 4.0),
            Figure::Correction => FigureSize::new(10.0, 6.0),
            Figure::PhaseStructure => FigureSize::new(12.0, 6.0),
            Figure::RadialProfile => FigureSize::new(10.0, 6.0),
        }
    }

    fn draw(self, out_path: &Path, ctx: &RenderContext) -> std::result::Result<(), Box<dyn Error>> {
        match self {
            Figure::Potential => potential::render(out_path, ctx),
            Figure::Correction => correction::render(out_path, ctx),
            Figure::PhaseStructure => phases::render(out_path, ctx),
            Figure::RadialProfile => radial::render(out_path, ctx),
        }
    }
}

/// Read-only inputs shared by every renderer.
#[derive(Clone, Debug)]
pub struct RenderContext {
    pub space: LambdaSpace,
    pub radial: RadialProfile,
    pub theme: Theme,
}

impl RenderContext {
    pub fn new(dpi: u32) -> Self {
        Self {
            space: LambdaSpace::standard(),
            radial: RadialProfile::default(),
            theme: Theme::new(dpi),
        }
    }

    pub fn pixels(&self, figure: Figure) -> (u32, u32) {
        figure.size().pixels(self.theme.dpi)
    }
}

/// Render one figure into `out_dir`, returning the written path.
pub fn render_figure(figure: Figure, out_dir: &Path, ctx: &RenderContext) -> Result<PathBuf> {
    let path = out_dir.join(figure.file_name());
    let (w, h) = ctx.pixels(figure);
    debug!(?figure, width = w, height = h, "rendering");
    figure
        .draw(&path, ctx)
        .map_err(|err| FigureError::render(&path, err))?;
    info!("wrote {}", path.display());
    Ok(path)
}

/// Render all four figures. The first failure aborts the run.
pub fn render_all(config: &RenderConfig) -> Result<Vec<PathBuf>> {
    let out_dir = config.output.dir.as_path();
    create_dir_all(out_dir).map_err(|err| FigureError::create_dir(out_dir, err))?;
    let ctx = RenderContext::new(config.output.dpi);
    Figure::ALL
        .iter()
        .map(|&figure| render_figure(figure, out_dir, &ctx))
        .collect()
}

/// Fixed confirmation printed after a successful run.
pub fn confirmation_banner() -> String {
    let mut banner = String::from("✓ Figures generated:");
    for figure in Figure::ALL {
        banner.push_str(&format!("\n  - {} ({})", figure.file_name(), figure.summary()));
    }
    banner
}
