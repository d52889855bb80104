//! Replays a recorded input trace through a headless viewport and logs the
//! camera status after every event that moved it.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use glview::camera::FrameSetup;
use glview::options::Options;
use glview::replay::{read_trace, replay};
use glview::viewport::Viewport;
use glview::ViewError;

/// Replay a JSON-lines input trace through a viewport.
#[derive(Debug, Parser)]
#[command(name = "glview", version, about)]
struct Args {
    /// Trace file, one input event per line.
    trace: PathBuf,
    /// Options preset (TOML).
    #[arg(long)]
    options: Option<PathBuf>,
    /// Surface width in pixels.
    #[arg(long, default_value_t = 800)]
    width: u32,
    /// Surface height in pixels.
    #[arg(long, default_value_t = 600)]
    height: u32,
    /// Print the frame matrices after the replay.
    #[arg(long)]
    matrices: bool,
}

fn run(args: &Args) -> Result<(), ViewError> {
    let options = match &args.options {
        Some(path) => Options::load(path)?,
        None => Options::default(),
    };
    let events = read_trace(BufReader::new(File::open(&args.trace)?))?;
    log::info!("replaying {} events from {}", events.len(), args.trace.display());

    let mut viewport = Viewport::new(&options, |_: &FrameSetup| {});
    viewport.resize(args.width, args.height);
    log::info!("{}", viewport.status());

    let changed = replay(&mut viewport, &events, |index, vp| {
        log::info!("#{index}: {}", vp.status());
    });
    log::info!("{changed} of {} events moved the camera", events.len());

    if args.matrices {
        let frame = viewport.render_frame();
        log::info!("projection: {}", frame.setup.projection);
        log::info!("model: {}", frame.setup.model);
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
