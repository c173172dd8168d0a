use std::{
    fs::File,
    io::{BufReader, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "vectorgrid", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the layout of a scene and write its points as JSON.
    Layout(LayoutArgs),
    /// Step a scene's animation with a fixed clock and write the final frame as JSON.
    Simulate(SimulateArgs),
    /// List the registered animations with their default props and controls.
    Animations(AnimationsArgs),
}

#[derive(Parser, Debug)]
struct LayoutArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Number of frames to step.
    #[arg(long, default_value_t = 60)]
    frames: u32,

    /// Fixed frame rate of the simulated clock.
    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    /// Pointer position in canvas pixels, as `X,Y`.
    #[arg(long, value_parser = parse_pair)]
    mouse: Option<(f64, f64)>,

    /// Trigger a pulse at normalized `X,Y` before the first frame.
    #[arg(long, value_parser = parse_pair)]
    pulse: Option<(f64, f64)>,

    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct AnimationsArgs {
    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct SimulationReport<'a> {
    animation: vectorgrid::AnimationKind,
    frames: u64,
    time: f64,
    vectors: &'a [vectorgrid::AnimatedVectorItem],
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct AnimationEntry {
    id: &'static str,
    default_props: serde_json::Value,
    controls: &'static [vectorgrid::Control],
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Layout(args) => cmd_layout(args),
        Command::Simulate(args) => cmd_simulate(args),
        Command::Animations(args) => cmd_animations(args),
    }
}

fn parse_pair(s: &str) -> Result<(f64, f64), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{s}'"))?;
    let x: f64 = x.trim().parse().map_err(|e| format!("bad X in '{s}': {e}"))?;
    let y: f64 = y.trim().parse().map_err(|e| format!("bad Y in '{s}': {e}"))?;
    if !(x.is_finite() && y.is_finite()) {
        return Err(format!("coordinates must be finite: '{s}'"));
    }
    Ok((x, y))
}

fn read_scene_json(path: &Path) -> anyhow::Result<vectorgrid::SceneConfig> {
    let f = File::open(path).with_context(|| format!("open scene '{}'", path.display()))?;
    let r = BufReader::new(f);
    let scene: vectorgrid::SceneConfig =
        serde_json::from_reader(r).with_context(|| "parse scene JSON")?;
    scene.validate()?;
    Ok(scene)
}

fn write_json<T: serde::Serialize>(out: Option<&Path>, value: &T) -> anyhow::Result<()> {
    let text = serde_json::to_string_pretty(value).context("serialize output JSON")?;
    match out {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(path, text).with_context(|| format!("write '{}'", path.display()))?;
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}

fn cmd_layout(args: LayoutArgs) -> anyhow::Result<()> {
    let scene = read_scene_json(&args.in_path)?;
    let layout = vectorgrid::generate_layout(&scene.layout);
    write_json(args.out.as_deref(), &layout)
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    if !(args.fps.is_finite() && args.fps > 0.0) {
        anyhow::bail!("--fps must be > 0");
    }
    let scene = read_scene_json(&args.in_path)?;
    let mut animator = vectorgrid::Animator::from_scene(&scene)?;
    animator.set_mouse(args.mouse.map(|(x, y)| vectorgrid::Point::new(x, y)));
    if let Some((x, y)) = args.pulse {
        animator.trigger_pulse(x, y);
    }

    let dt = 1.0 / args.fps;
    for _ in 0..args.frames {
        animator.step(dt);
    }

    let report = SimulationReport {
        animation: animator.animation(),
        frames: animator.frame_count(),
        time: animator.time(),
        vectors: animator.vectors(),
    };
    write_json(args.out.as_deref(), &report)
}

fn cmd_animations(args: AnimationsArgs) -> anyhow::Result<()> {
    let entries: Vec<AnimationEntry> = vectorgrid::AnimationKind::ALL
        .into_iter()
        .map(|kind| AnimationEntry {
            id: kind.id(),
            default_props: kind.default_props(),
            controls: kind.controls(),
        })
        .collect();
    write_json(args.out.as_deref(), &entries)
}
