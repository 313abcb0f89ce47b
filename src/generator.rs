use std::path::{Path, PathBuf};

use crate::{
    foundation::{
        core::{DigitString, RenderOpts},
        error::{CounterError, CounterResult},
    },
    render::{
        animated::{AnimatedCompositor, AnimatedCounter},
        static_svg::StaticCompositor,
    },
    theme::registry::{ThemeKind, ThemeRegistry},
};

/// Files produced by [`CounterGenerator::generate`].
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum CounterOutput {
    /// SVG written for a still-image theme.
    Static {
        /// SVG document path.
        vector: PathBuf,
    },
    /// GIF plus SVG wrapper written for an animated theme.
    Animated(AnimatedCounter),
}

impl CounterOutput {
    /// Every file written, raster first.
    pub fn paths(&self) -> Vec<&Path> {
        match self {
            Self::Static { vector } => vec![vector.as_path()],
            Self::Animated(out) => vec![out.raster.as_path(), out.vector.as_path()],
        }
    }
}

/// One counter to render: digits, theme, destination and options.
#[derive(Clone, Debug, PartialEq)]
pub struct CounterRequest {
    /// Validated digits, left to right.
    pub digits: DigitString,
    /// Registry name of the theme.
    pub theme: String,
    /// Directory receiving the output files; created if missing.
    pub output_dir: PathBuf,
    /// Output stem; `counter_<digits>` when `None`.
    pub filename: Option<String>,
    /// Render options.
    pub opts: RenderOpts,
}

impl CounterRequest {
    /// Request with no explicit filename and default options.
    pub fn new(
        digits: DigitString,
        theme: impl Into<String>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            digits,
            theme: theme.into(),
            output_dir: output_dir.into(),
            filename: None,
            opts: RenderOpts::default(),
        }
    }

    /// Set the output stem.
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// Replace the render options.
    pub fn with_opts(mut self, opts: RenderOpts) -> Self {
        self.opts = opts;
        self
    }
}

/// Theme registry plus both compositors, all reading from one themes root.
#[derive(Clone, Debug)]
pub struct CounterGenerator {
    registry: ThemeRegistry,
    still: StaticCompositor,
    animated: AnimatedCompositor,
}

impl CounterGenerator {
    /// Scan `themes_root` and prepare both compositors over it.
    pub fn new(themes_root: impl Into<PathBuf>) -> CounterResult<Self> {
        let root = themes_root.into();
        let registry = ThemeRegistry::open(&root)?;
        tracing::debug!(root = %root.display(), themes = registry.len(), "opened theme registry");
        Ok(Self {
            still: StaticCompositor::new(&root),
            animated: AnimatedCompositor::new(&root),
            registry,
        })
    }

    /// Registry the generator dispatches on.
    pub fn registry(&self) -> &ThemeRegistry {
        &self.registry
    }

    /// Render a prepared [`CounterRequest`].
    pub fn run(&self, req: &CounterRequest) -> CounterResult<CounterOutput> {
        self.generate_with(
            req.digits.as_str(),
            &req.theme,
            &req.output_dir,
            req.filename.as_deref(),
            &req.opts,
        )
    }

    /// Render with default [`RenderOpts`].
    pub fn generate(
        &self,
        digits: &str,
        theme: &str,
        output_dir: impl AsRef<Path>,
        filename: Option<&str>,
    ) -> CounterResult<CounterOutput> {
        self.generate_with(digits, theme, output_dir, filename, &RenderOpts::default())
    }

    /// Render `digits` with whichever compositor `theme`'s kind calls for.
    pub fn generate_with(
        &self,
        digits: &str,
        theme: &str,
        output_dir: impl AsRef<Path>,
        filename: Option<&str>,
        opts: &RenderOpts,
    ) -> CounterResult<CounterOutput> {
        let entry = self
            .registry
            .get(theme)
            .ok_or_else(|| CounterError::unknown_theme(theme))?;

        match entry.kind {
            ThemeKind::AnimatedImage => self
                .animated
                .render(digits, theme, output_dir, filename, opts.speed)
                .map(CounterOutput::Animated),
            ThemeKind::StaticImage => self
                .still
                .render(digits, theme, output_dir, filename)
                .map(|vector| CounterOutput::Static { vector }),
        }
    }
}
