//! # textwave CLI
//!
//! Samples a wave definition or previews it animating a piece of text.
//!
//! ```bash
//! # Print value, direction and crossings for 4 seconds of a wave
//! textwave --config wave.yaml sample --duration 4 --step 0.25
//!
//! # Preview a pulse animating some text
//! textwave --trough-wait 0.5 preview "hello world" --style flash
//! ```

use anyhow::{Context, ensure};
use clap::{Args, Parser, Subcommand};
use crossterm::{
    queue,
    style::{Attribute, Color as TermColor, Print, ResetColor, SetAttribute, SetForegroundColor},
};
use itertools::Itertools;
use std::{
    io::{self, Write},
    path::PathBuf,
};
use textwave::{
    PulseExtrema, WaitMode, WaveConfig, WaveOverrides,
    animations::{AnimationStyle, CharAnimationResult, OffsetProvider, TextLayout, get_animation, render_frame},
    wave::{CurveDefinition, Easing},
};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use unicode_width::UnicodeWidthChar;

/// Periodic waveforms for per-character text animation
#[derive(Parser, Debug)]
#[command(name = "textwave")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Wave definition to start from, in YAML
    #[arg(short, long, value_name = "FILE", global = true, env = "TEXTWAVE_CONFIG")]
    config: Option<PathBuf>,

    #[command(flatten)]
    overrides: OverrideArgs,

    #[command(subcommand)]
    command: Commands,
}

/// Values layered on top of the wave definition.
#[derive(Args, Debug, Default)]
struct OverrideArgs {
    /// Time spent going from trough to crest
    #[arg(long, global = true)]
    up_period: Option<f32>,

    /// Time spent going from crest to trough
    #[arg(long, global = true)]
    down_period: Option<f32>,

    /// Time dilation factor
    #[arg(long, global = true)]
    velocity: Option<f32>,

    #[arg(long, global = true, allow_negative_numbers = true)]
    amplitude: Option<f32>,

    /// Easing used while rising
    #[arg(long, global = true)]
    upward_curve: Option<Easing>,

    /// Easing used while falling
    #[arg(long, global = true)]
    downward_curve: Option<Easing>,

    /// Time held at the crest
    #[arg(long, global = true)]
    crest_wait: Option<f32>,

    /// Time held at the trough
    #[arg(long, global = true)]
    trough_wait: Option<f32>,

    /// How much an element's offset shifts its phase
    #[arg(long, global = true, allow_negative_numbers = true)]
    uniformity: Option<f32>,
}

impl From<OverrideArgs> for WaveOverrides {
    fn from(args: OverrideArgs) -> Self {
        Self {
            up_period: args.up_period,
            down_period: args.down_period,
            velocity: args.velocity,
            amplitude: args.amplitude,
            upward_curve: args.upward_curve.map(CurveDefinition::Easing),
            downward_curve: args.downward_curve.map(CurveDefinition::Easing),
            crest_wait: args.crest_wait,
            trough_wait: args.trough_wait,
            uniformity: args.uniformity,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the wave's value, direction and crossings over time
    Sample {
        /// How long to sample for, in seconds
        #[arg(long, default_value_t = 4.0)]
        duration: f32,

        /// Time between samples
        #[arg(long, default_value_t = 0.1)]
        step: f32,

        /// Offset of the sampled element
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        offset: f32,

        /// Use waits as configured instead of stretching them by the velocity
        #[arg(long)]
        scaled_waits: bool,

        /// Where crossings are reported when the wave holds at an extremum
        #[arg(long, default_value_t = PulseExtrema::Early)]
        extrema: PulseExtrema,
    },

    /// Print frames of some text being animated
    Preview {
        /// Text to animate
        text: String,

        #[arg(long, default_value_t = AnimationStyle::Wave)]
        style: AnimationStyle,

        /// What spreads the wave across characters
        #[arg(long, default_value_t = OffsetProvider::Index)]
        offsets: OffsetProvider,

        /// Number of frames to print
        #[arg(long, default_value_t = 8)]
        frames: usize,

        /// Frames per second
        #[arg(long, default_value_t = 4.0)]
        fps: f32,
    },
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();

    if let Err(e) = run() {
        eprintln!("Error: {e:?}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let wave = load_wave(cli.config, cli.overrides.into())?;
    match cli.command {
        Commands::Sample { duration, step, offset, scaled_waits, extrema } => {
            let wait = if scaled_waits { WaitMode::Scaled } else { WaitMode::Realtime };
            sample(&wave, duration, step, offset, wait, extrema)
        }
        Commands::Preview { text, style, offsets, frames, fps } => preview(wave, &text, style, offsets, frames, fps),
    }
}

fn load_wave(path: Option<PathBuf>, overrides: WaveOverrides) -> anyhow::Result<WaveConfig> {
    let wave = match path {
        Some(path) => {
            WaveConfig::from_path(&path).with_context(|| format!("loading wave definition from {}", path.display()))?
        }
        None => WaveConfig::default(),
    };
    if overrides.is_empty() {
        return Ok(wave);
    }
    wave.with_overrides(&overrides).context("applying command line overrides")
}

fn sample(
    wave: &WaveConfig,
    duration: f32,
    step: f32,
    offset: f32,
    wait: WaitMode,
    extrema: PulseExtrema,
) -> anyhow::Result<()> {
    ensure!(step > 0.0, "step must be positive (got {step})");
    ensure!(duration >= 0.0, "duration can't be negative (got {duration})");

    let steps = (duration / step).floor() as usize;
    debug!("sampling {} wave {steps} times, interval {}", wave.shape(), wave.interval(wait));
    println!("{}", ["time", "value", "direction", "crossing"].iter().join("\t"));
    let mut previous = -step;
    for index in 0..=steps {
        let time = index as f32 * step;
        let sample = wave.evaluate_with(time, offset, wait);
        let crossing = wave.passed_extrema_with(time, time - previous, offset, wait, extrema);
        let row = [
            format!("{time:.3}"),
            format!("{:.4}", sample.value),
            sample.direction.to_string(),
            crossing.to_string(),
        ];
        println!("{}", row.iter().join("\t"));
        previous = time;
    }
    Ok(())
}

fn preview(
    wave: WaveConfig,
    text: &str,
    style: AnimationStyle,
    offsets: OffsetProvider,
    frames: usize,
    fps: f32,
) -> anyhow::Result<()> {
    ensure!(fps > 0.0, "fps must be positive (got {fps})");

    // rows a character can move above or below its own
    let lift = wave.amplitude().abs().ceil() as usize;
    let band = lift * 2 + 1;
    let layout = TextLayout::new(text);
    let width = layout.positions().iter().map(|p| p.column + p.ch.width().unwrap_or(1)).max().unwrap_or(0);
    let height = layout.total_rows() * band;
    let animation = get_animation(style, wave, offsets);
    let delta_time = 1.0 / fps;

    let mut stdout = io::stdout().lock();
    let mut previous = -delta_time;
    for frame in 0..frames {
        let time = frame as f32 * delta_time;
        let mut grid: Vec<Vec<Option<(char, CharAnimationResult)>>> = vec![vec![None; width]; height];
        // frames share their edges so crossings aren't reported twice
        for (position, result) in render_frame(animation.as_ref(), &layout, time, time - previous) {
            let base = (position.row_index * band + lift) as f32;
            let row = (base + result.offset_y).round().clamp(0.0, (height.max(1) - 1) as f32) as usize;
            if let Some(cell) = grid.get_mut(row).and_then(|cells| cells.get_mut(position.column)) {
                *cell = Some((position.ch, result));
            }
        }

        queue!(stdout, Print(format!("frame {frame} t={time:.2}\n")))?;
        for cells in &grid {
            draw_row(&mut stdout, cells)?;
        }
        stdout.flush().context("writing frame")?;
        previous = time;
    }
    Ok(())
}

fn draw_row<W: Write>(out: &mut W, cells: &[Option<(char, CharAnimationResult)>]) -> io::Result<()> {
    let mut column = 0;
    while column < cells.len() {
        match &cells[column] {
            Some((ch, result)) => {
                let fade = |channel: u8| (channel as f32 * result.opacity) as u8;
                let color =
                    TermColor::Rgb { r: fade(result.color.r), g: fade(result.color.g), b: fade(result.color.b) };
                if result.scale > 1.1 {
                    queue!(out, SetAttribute(Attribute::Bold))?;
                }
                queue!(out, SetForegroundColor(color), Print(ch), ResetColor, SetAttribute(Attribute::Reset))?;
                column += ch.width().unwrap_or(1).max(1);
            }
            None => {
                queue!(out, Print(' '))?;
                column += 1;
            }
        }
    }
    queue!(out, Print('\n'))
}
