use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::{debug, info};
use physics_diagram::figures;
use physics_diagram::kinematics::{MotionPreset, Timeline};
use physics_diagram::render::Figure;
use physics_diagram::style::{Theme, ThemePreset};

#[derive(Parser)]
#[command(name = "physics-diagram")]
#[command(about = "Render physics free-body diagrams and sample classroom motions")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the figures in the gallery
    List,
    /// Render one gallery figure
    Render {
        /// Figure name, see `list`
        name: String,

        /// Output file path (default: <name>.svg or <name>.png)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        style: StyleArgs,

        /// Rasterize to PNG instead of writing SVG
        #[arg(long)]
        png: bool,

        /// PNG width in pixels (default: the SVG size)
        #[arg(long)]
        width: Option<u32>,
    },
    /// Render every gallery figure to a directory
    RenderAll {
        /// Output directory, created if missing
        #[arg(long, default_value = "figures")]
        out_dir: PathBuf,

        #[command(flatten)]
        style: StyleArgs,
    },
    /// Print sampled motion quantities as JSON
    Motion {
        /// Motion name (uniform, push-coast, free-fall, elastic-collision, work-energy, ...)
        kind: MotionPreset,

        /// End time in seconds (default: the motion's own span)
        #[arg(long)]
        t_end: Option<f64>,

        /// Samples per second
        #[arg(long, default_value = "30")]
        fps: f64,
    },
}

#[derive(clap::Args)]
struct StyleArgs {
    /// Theme TOML file; overrides --preset
    #[arg(long)]
    theme: Option<PathBuf>,

    /// Built-in theme (classic, stem-light)
    #[arg(long, default_value = "classic")]
    preset: ThemePreset,
}

impl StyleArgs {
    fn theme(&self) -> Result<Theme> {
        match &self.theme {
            Some(path) => Theme::load(path)
                .with_context(|| format!("failed to load theme from {}", path.display())),
            None => Ok(Theme::preset(self.preset)),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    debug!("Starting physics-diagram v{}", physics_diagram::VERSION);

    match cli.command {
        Commands::List => {
            list_figures();
            Ok(())
        }
        Commands::Render {
            name,
            output,
            style,
            png,
            width,
        } => {
            let theme = style.theme()?;
            let extension = if png { "png" } else { "svg" };
            let output = output.unwrap_or_else(|| PathBuf::from(format!("{}.{}", name, extension)));
            let figure = figures::build(&name, &theme)?;
            if png {
                write_png(&figure, &output, width)?;
            } else {
                figure
                    .write_svg(&output)
                    .with_context(|| format!("failed to write {}", output.display()))?;
            }
            Ok(())
        }
        Commands::RenderAll { out_dir, style } => render_all(&out_dir, &style.theme()?),
        Commands::Motion { kind, t_end, fps } => {
            let timeline = Timeline::new(t_end.unwrap_or_else(|| kind.default_duration()), fps)?;
            let samples = kind.sample(&timeline)?;
            info!("Sampled '{}' at {} instants", kind, samples.len());
            println!("{}", serde_json::to_string_pretty(&samples)?);
            Ok(())
        }
    }
}

fn list_figures() {
    let entries = figures::catalog();
    let width = entries.iter().map(|entry| entry.name.len()).max().unwrap_or(0);
    for entry in entries {
        println!("{:<width$}  {}", entry.name, entry.description, width = width);
    }
}

fn render_all(out_dir: &Path, theme: &Theme) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    for entry in figures::catalog() {
        let path = out_dir.join(format!("{}.svg", entry.name));
        let figure = entry
            .build(theme)
            .with_context(|| format!("failed to build figure '{}'", entry.name))?;
        figure
            .write_svg(&path)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }
    info!("Rendered {} figures to {}", figures::catalog().len(), out_dir.display());
    Ok(())
}

#[cfg(feature = "png")]
fn write_png(figure: &Figure, path: &Path, width: Option<u32>) -> Result<()> {
    let bytes = physics_diagram::render::render_png(figure, width)?;
    fs::write(path, bytes).with_context(|| format!("failed to write {}", path.display()))?;
    info!("Wrote {}", path.display());
    Ok(())
}

#[cfg(not(feature = "png"))]
fn write_png(_figure: &Figure, _path: &Path, _width: Option<u32>) -> Result<()> {
    anyhow::bail!("PNG output needs the `png` feature (cargo build --features png)")
}
