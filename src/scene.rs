//! Whole-plot descriptions.
//!
//! A [`Scene`] names a style, a set of curves and a set of annotated points,
//! with functions referenced by [catalog](crate::catalog) name. With the
//! `config` feature a scene loads from YAML:
//!
//! ```yaml
//! width: 750
//! height: 250
//! scale: 40
//! style:
//!   background: white
//! curves:
//!   - { function: sin, start: -20, end: 20, color: green }
//!   - { function: square, start: -20, end: 20, color: "#E85454", mode: points }
//! points:
//!   - { function: sin, x: 1.5708 }
//! ```

use crate::annotate::Annotation;
use crate::axes::{AxisReport, AxisSpec};
use crate::catalog::{self, NamedFn};
use crate::color::Rgba;
use crate::curve::{CurveReport, PlotSpec, RenderMode};
use crate::error::Result;
use crate::plotter::Plotter;
use crate::sample::Stepping;
use crate::style::PlotStyle;
use crate::surface::DrawingSurface;

#[cfg(feature = "config")]
use crate::error::Error;
#[cfg(feature = "config")]
use std::path::Path;

/// Where the axes go relative to the curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "lowercase"))]
pub enum AxesLayer {
    /// Drawn first; curves cover them.
    #[default]
    Below,
    /// Drawn after the curves.
    Above,
    /// Not drawn.
    Hidden,
}

/// One curve in a scene.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config", serde(deny_unknown_fields))]
pub struct CurveEntry {
    /// Catalog name.
    pub function: String,
    /// First sampled x.
    pub start: f64,
    /// Last sampled x.
    pub end: f64,
    /// Curve color (style default if unset).
    #[cfg_attr(feature = "config", serde(default))]
    pub color: Option<Rgba>,
    /// Per-curve scale (scene scale if unset).
    #[cfg_attr(feature = "config", serde(default))]
    pub scale: Option<f64>,
    /// Sampling detail (style default if unset).
    #[cfg_attr(feature = "config", serde(default))]
    pub detail: Option<u32>,
    /// Line width (style default if unset).
    #[cfg_attr(feature = "config", serde(default))]
    pub width: Option<u32>,
    /// Render mode (scene mode if unset).
    #[cfg_attr(feature = "config", serde(default))]
    pub mode: Option<RenderMode>,
}

impl CurveEntry {
    /// A curve with every optional field unset.
    #[must_use]
    pub fn new(function: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            function: function.into(),
            start,
            end,
            color: None,
            scale: None,
            detail: None,
            width: None,
            mode: None,
        }
    }

    /// Set color.
    #[must_use]
    pub fn color(mut self, color: Rgba) -> Self {
        self.color = Some(color);
        self
    }

    /// Set scale.
    #[must_use]
    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = Some(scale);
        self
    }

    /// Set line width.
    #[must_use]
    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }
}

/// One annotated point in a scene.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config", serde(deny_unknown_fields))]
pub struct PointEntry {
    /// Catalog name.
    pub function: String,
    /// Cartesian x.
    pub x: f64,
    /// Marker color (black if unset).
    #[cfg_attr(feature = "config", serde(default))]
    pub color: Option<Rgba>,
    /// Per-point scale (scene scale if unset).
    #[cfg_attr(feature = "config", serde(default))]
    pub scale: Option<f64>,
}

impl PointEntry {
    /// A black point on `function` at `x`.
    #[must_use]
    pub fn new(function: impl Into<String>, x: f64) -> Self {
        Self {
            function: function.into(),
            x,
            color: None,
            scale: None,
        }
    }

    /// Set color.
    #[must_use]
    pub fn color(mut self, color: Rgba) -> Self {
        self.color = Some(color);
        self
    }
}

/// Everything needed to draw one plot.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config", serde(default, deny_unknown_fields))]
pub struct Scene {
    /// Preferred surface width.
    pub width: u32,
    /// Preferred surface height.
    pub height: u32,
    /// Pixels per Cartesian unit, also the tick spacing.
    pub scale: f64,
    /// Visual style.
    pub style: PlotStyle,
    /// Default render mode for curves.
    pub mode: RenderMode,
    /// Sample stepping for every curve.
    pub stepping: Stepping,
    /// Axis layering.
    pub axes: AxesLayer,
    /// Curves in draw order.
    pub curves: Vec<CurveEntry>,
    /// Annotated points in draw order.
    pub points: Vec<PointEntry>,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            width: 750,
            height: 250,
            scale: 40.0,
            style: PlotStyle::plain(),
            mode: RenderMode::Points,
            stepping: Stepping::Indexed,
            axes: AxesLayer::Below,
            curves: Vec::new(),
            points: Vec::new(),
        }
    }
}

/// Counts from a scene render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SceneReport {
    /// Axis ticks, if axes were drawn.
    pub axes: Option<AxisReport>,
    /// One report per curve, in scene order.
    pub curves: Vec<CurveReport>,
    /// Points actually annotated.
    pub points: usize,
}

impl Scene {
    /// The 750x250 dot-plot demo: six catalog curves over black axes.
    #[must_use]
    pub fn demo_plain() -> Self {
        let green = Rgba::rgb(0, 128, 0);
        Self {
            curves: vec![
                CurveEntry::new("sin", -20.0, 20.0).color(green),
                CurveEntry::new("cos", -20.0, 20.0).color(Rgba::BLUE),
                CurveEntry::new("square", -20.0, 20.0).color(Rgba::RED),
                CurveEntry::new("quadratic", -2.0, 3.0).color(Rgba::rgb(128, 0, 128)),
                CurveEntry::new("x_sin_x", -15.0, 15.0).color(Rgba::rgb(165, 42, 42)),
                CurveEntry::new("x_over_tan_x", -30.0, 30.0)
                    .color(Rgba::rgb(0, 255, 255))
                    .scale(20.0),
            ],
            ..Self::default()
        }
    }

    /// The 1440x900 polyline demo with axes on top and three labeled points.
    #[must_use]
    pub fn demo() -> Self {
        let green = Rgba::rgb(0, 128, 0);
        Self {
            width: 1440,
            height: 900,
            scale: 80.0,
            style: PlotStyle::pretty(),
            mode: RenderMode::Segments,
            axes: AxesLayer::Above,
            curves: vec![
                CurveEntry::new("sin", -20.0, 20.0).color(green),
                CurveEntry::new("cos", -20.0, 20.0)
                    .color(Rgba::rgb(0x4C, 0xC7, 0xBB))
                    .width(2),
                CurveEntry::new("square", -20.0, 20.0).color(Rgba::rgb(0xE8, 0x54, 0x54)),
                CurveEntry::new("quadratic", -2.0, 3.0).color(Rgba::rgb(0x96, 0x45, 0xCC)),
                CurveEntry::new("x_sin_x", -20.0, 20.0).color(Rgba::rgb(0xED, 0xD1, 0x72)),
            ],
            points: vec![
                PointEntry::new("sin", 7.0).color(Rgba::rgb(128, 0, 0)),
                PointEntry::new("square", 2.0).color(Rgba::BLUE),
                PointEntry::new("sin", std::f64::consts::FRAC_PI_2),
            ],
            ..Self::default()
        }
    }

    /// Draw the scene onto `surface` in one pass.
    ///
    /// Every function name and parameter is checked before the first draw
    /// call.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnknownFunction`] for a name missing from the
    /// catalog, or [`crate::Error::InvalidParameter`] for an invalid curve,
    /// point or scale.
    pub fn render<S: DrawingSurface + ?Sized>(&self, surface: &mut S) -> Result<SceneReport> {
        let axes = AxisSpec::from_style(self.scale, &self.style);
        if self.axes != AxesLayer::Hidden {
            axes.validate()?;
        }
        let curves = self
            .curves
            .iter()
            .map(|entry| self.curve_job(entry))
            .collect::<Result<Vec<_>>>()?;
        let points = self
            .points
            .iter()
            .map(|entry| self.point_job(entry))
            .collect::<Result<Vec<_>>>()?;

        let mut report = SceneReport::default();
        let mut plot = Plotter::new(surface);
        if let Some(background) = self.style.background {
            plot.background(background);
        }
        if self.axes == AxesLayer::Below {
            report.axes = Some(plot.axes(&axes)?);
        }
        for (f, spec) in &curves {
            report.curves.push(plot.curve(f, spec)?);
        }
        if self.axes == AxesLayer::Above {
            report.axes = Some(plot.axes(&axes)?);
        }
        for (f, annotation) in &points {
            if plot.point(f, annotation)?.is_some() {
                report.points += 1;
            }
        }

        log::debug!(
            target: "fnplot",
            "scene rendered: {} curves, {} of {} points",
            report.curves.len(),
            report.points,
            self.points.len()
        );
        Ok(report)
    }

    fn curve_job(&self, entry: &CurveEntry) -> Result<(NamedFn, PlotSpec)> {
        let f = catalog::resolve(&entry.function)?;
        let mode = entry.mode.unwrap_or(self.mode);
        let mut spec = PlotSpec::from_style(
            entry.start,
            entry.end,
            entry.scale.unwrap_or(self.scale),
            &self.style,
        )
        .mode(mode)
        .stepping(self.stepping);
        if mode == RenderMode::Points {
            spec = spec.detail(1);
        }
        if let Some(detail) = entry.detail {
            spec = spec.detail(detail);
        }
        if let Some(color) = entry.color {
            spec = spec.color(color);
        }
        if let Some(width) = entry.width {
            spec = spec.line_width(width);
        }
        spec.validate()?;
        Ok((f, spec))
    }

    fn point_job(&self, entry: &PointEntry) -> Result<(NamedFn, Annotation)> {
        let f = catalog::resolve(&entry.function)?;
        let annotation = Annotation::from_style(entry.x, entry.scale.unwrap_or(self.scale), &self.style)
            .color(entry.color.unwrap_or(Rgba::BLACK));
        annotation.validate()?;
        Ok((f, annotation))
    }
}

#[cfg(feature = "config")]
impl Scene {
    /// Load a scene from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, or
    /// [`Error::ConfigParse`] if it is not a valid scene.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse a scene from YAML.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigParse`] with the offending line on failure.
    pub fn parse(yaml: &str) -> Result<Self> {
        serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map_or(0, |l| l.line());
            Error::ConfigParse {
                line,
                message: e.to_string(),
            }
        })
    }

    /// Serialize to YAML.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigParse`] if serialization fails.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml_ng::to_string(self).map_err(|e| Error::ConfigParse {
            line: 0,
            message: e.to_string(),
        })
    }
}
