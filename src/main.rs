//! Hand Remote — turns hand-skeleton landmark streams into pointer intents.
//!
//! The recognition core lives in `engine`; this shell replays a recorded
//! landmark trace through it and prints the resulting intents as
//! s-expression events, standing in for the live capture and injection
//! collaborators.

mod engine;
mod gesture;
mod hand;
mod intent;
mod screen;
mod smoothing;
mod trace;

use std::path::PathBuf;

use clap::Parser;
use tracing::{debug, info};

use engine::{Engine, EngineConfig};
use intent::{format_event, Intent, IntentSink};
use screen::ScreenMap;

#[derive(Parser, Debug)]
#[command(name = "hand-remote", about = "Hand-gesture pointer control engine")]
struct Cli {
    /// Landmark trace to replay (one hand per line: timestamp + 21 x/y pairs)
    trace: Option<PathBuf>,

    /// Screen width in pixels (stands in for the OS display query)
    #[arg(long, default_value_t = 1920)]
    screen_width: u32,

    /// Screen height in pixels
    #[arg(long, default_value_t = 1080)]
    screen_height: u32,

    /// Print engine status after every tick
    #[arg(long)]
    status: bool,

    /// Show version and exit
    #[arg(long)]
    version: bool,
}

/// Sink that renders each applied intent as an s-expression event line,
/// the way an injection collaborator would receive it.
struct PrintSink {
    scroll_step: i32,
}

impl IntentSink for PrintSink {
    fn apply(&mut self, intent: Intent) {
        debug!("applying {}", intent.as_str());
        let line = match intent {
            Intent::MoveCursor { x, y } => format_event(
                "pointer-move",
                &[("x", &x.to_string()), ("y", &y.to_string())],
            ),
            Intent::ClickLeft => format_event("click", &[("button", ":left")]),
            Intent::ClickRight => format_event("click", &[("button", ":right")]),
            Intent::ScrollUp => {
                format_event("scroll", &[("delta", &self.scroll_step.to_string())])
            }
            Intent::ScrollDown => {
                format_event("scroll", &[("delta", &(-self.scroll_step).to_string())])
            }
        };
        println!("{}", line);
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.version {
        println!("hand-remote {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hand_remote=info".into()),
        )
        .init();

    let Some(path) = cli.trace else {
        anyhow::bail!("no trace file given (see --help)");
    };

    let ticks = trace::load(&path)?;
    info!("replaying {} ticks from {}", ticks.len(), path.display());

    let config = EngineConfig::default();
    let mut sink = PrintSink {
        scroll_step: config.scroll_step,
    };
    let mut engine = Engine::new(
        config,
        ScreenMap::new(cli.screen_width, cli.screen_height),
    );

    for tick in &ticks {
        for intent in engine.update(&tick.hands, tick.timestamp_s) {
            sink.apply(intent);
        }
        if cli.status {
            println!("{}", engine.status_sexp());
        }
    }

    Ok(())
}
