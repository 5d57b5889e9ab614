use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "shimmer", version)]
struct Cli {
    /// Log engine events to stderr (repeat for more detail).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single shimmer frame as a PNG.
    Frame(FrameArgs),
    /// Render one or more sweeps as a numbered PNG sequence.
    Sweep(SweepArgs),
}

#[derive(Args, Debug)]
struct SceneArgs {
    /// Block content JSON. Defaults to generated list rows.
    #[arg(long)]
    content: Option<PathBuf>,

    /// Shimmer options JSON.
    #[arg(long)]
    options: Option<PathBuf>,

    /// View width in pixels.
    #[arg(long, default_value_t = 360)]
    width: u32,

    /// View height in pixels.
    #[arg(long, default_value_t = 240)]
    height: u32,

    /// Row height for generated list rows.
    #[arg(long, default_value_t = 60)]
    row_height: u32,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Time since the sweep started, in milliseconds.
    #[arg(long, default_value_t = 0)]
    time_ms: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct SweepArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Frames per second of the sequence.
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Number of frames. Defaults to one full period.
    #[arg(long)]
    frames: Option<u32>,

    /// Output directory for `frame_00000.png`, ...
    #[arg(long)]
    out_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Sweep(args) => cmd_sweep(args),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_scene(
    args: &SceneArgs,
) -> anyhow::Result<(shimmer::ShimmerView, shimmer::BlockContent)> {
    let options = match &args.options {
        Some(path) => shimmer::ShimmerOptions::from_path(path)
            .with_context(|| format!("load options '{}'", path.display()))?,
        None => shimmer::ShimmerOptions::default(),
    };
    let content = match &args.content {
        Some(path) => shimmer::BlockContent::from_path(path)
            .with_context(|| format!("load content '{}'", path.display()))?,
        None => shimmer::BlockContent::list_rows(
            args.width,
            args.height,
            args.row_height,
            shimmer::Rgba8::opaque(0xEE, 0xEE, 0xEE),
        ),
    };

    let mut view = shimmer::ShimmerView::new(options).context("create shimmer view")?;
    view.on_layout(args.width, args.height)
        .context("lay out shimmer view")?;
    view.start();
    Ok((view, content))
}

fn write_png(path: &Path, frame: &shimmer::FrameRGBA) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(
        path,
        &frame.to_straight_rgba8(),
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let (mut view, content) = load_scene(&args.scene)?;

    view.on_frame(Duration::ZERO);
    view.on_frame(Duration::from_millis(args.time_ms));
    let frame = view.draw(&content);
    write_png(&args.out, &frame)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_sweep(args: SweepArgs) -> anyhow::Result<()> {
    if args.fps == 0 {
        anyhow::bail!("fps must be > 0");
    }
    let (mut view, content) = load_scene(&args.scene)?;

    let period_ms = u64::from(view.options().duration_ms);
    let frames = args
        .frames
        .map(u64::from)
        .unwrap_or_else(|| (period_ms * u64::from(args.fps)).div_ceil(1000).max(1));

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    for i in 0..frames {
        let now = Duration::from_secs(i) / args.fps;
        view.on_frame(now);
        let frame = view.draw(&content);
        write_png(&args.out_dir.join(format!("frame_{i:05}.png")), &frame)?;
    }

    eprintln!("wrote {frames} frames to {}", args.out_dir.display());
    Ok(())
}
