use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use glint_core::{load_scene, Scene};
use glint_math::Color;
use glint_renderer::{render_with, RenderConfig};

/// Render a JSON scene file to a PNG image
#[derive(Parser, Debug)]
#[command(name = "glint", version)]
struct Args {
    /// Scene description (JSON)
    scene: PathBuf,

    /// Output image path
    #[arg(short, long, default_value = "render.png")]
    output: PathBuf,

    /// Number of worker threads (defaults to the available cores)
    #[arg(short = 'j', long)]
    workers: Option<usize>,

    /// Override the scene's image width
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    width: Option<u32>,

    /// Override the scene's image height
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    height: Option<u32>,

    /// Override the scene's maximum recursion depth
    #[arg(long)]
    max_depth: Option<u32>,

    /// Override the background color as three components in [0, 1]
    #[arg(long, num_args = 3, value_names = ["R", "G", "B"])]
    background: Option<Vec<f64>>,
}

impl Args {
    fn render_config(&self) -> RenderConfig {
        let config = RenderConfig::default();
        match self.workers {
            Some(workers) => config.with_workers(workers),
            None => config,
        }
    }

    /// Apply command line overrides on top of the loaded scene.
    fn apply_overrides(&self, mut scene: Scene) -> Scene {
        if let Some(width) = self.width {
            scene.width = width;
        }
        if let Some(height) = self.height {
            scene.height = height;
        }
        if let Some(depth) = self.max_depth {
            scene.max_recursion_depth = depth;
        }
        if let Some([r, g, b]) = self.background.as_deref() {
            scene.background = Color::new(*r, *g, *b);
        }
        scene
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Args::parse();

    let scene = load_scene(&args.scene)
        .with_context(|| format!("Failed to load scene {}", args.scene.display()))?;
    let scene = args.apply_overrides(scene);

    let start = Instant::now();
    let image = render_with(&scene, &args.render_config()).context("Render failed")?;
    log::info!("Total render time {:.2?}", start.elapsed());

    image
        .save_png(&args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    log::info!("Saved {}", args.output.display());

    Ok(())
}
