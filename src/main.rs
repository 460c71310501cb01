use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use antsim::prelude::*;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "antsim=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let config = args.to_config()?;
    let mut rng = if let Some(seed) = args.seed {
        fastrand::Rng::with_seed(seed)
    } else {
        fastrand::Rng::new()
    };

    // Build the colony and hand it to the engine
    let colony = Colony::generate(&config, &mut rng)?;
    let mut engine = SimulationEngine::new(config, colony);

    let mut renderer: Box<dyn Renderer> = if args.render_every > 0 {
        let pause = (args.fps > 0).then(|| Duration::from_secs(1) / args.fps);
        Box::new(TerminalRenderer::new(args.render_every, pause))
    } else {
        Box::new(NullRenderer)
    };

    let stop = Arc::new(AtomicBool::new(false));
    watch_ctrl_c(stop.clone())?;
    let stats = engine.run(args.ticks, renderer.as_mut(), &stop)?;

    if !args.quiet {
        engine.print_summary(&stats);
    }

    Ok(())
}

/// Raise `stop` on Ctrl+C so the run ends after the current tick
fn watch_ctrl_c(stop: Arc<AtomicBool>) -> std::io::Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_io()
        .build()?;
    std::thread::spawn(move || {
        runtime.block_on(async {
            tokio::signal::ctrl_c().await.ok();
            tracing::info!("Ctrl+C received, stopping after this tick");
            stop.store(true, Ordering::SeqCst);
        });
    });
    Ok(())
}
