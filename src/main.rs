use std::sync::Arc;

use place_client::command::{Command, Flow};
use place_client::config::ClientConfig;
use place_client::consts::FRAME_INTERVAL;
use place_client::http::HttpPlaceService;
use place_client::sinks::Sinks;
use place_client::InteractionController;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::MissedTickBehavior;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = ClientConfig::from_env()?;
    let service = HttpPlaceService::new(&config.service)?;
    let sinks = Sinks::tracing(config.canvas_width, config.canvas_height);
    let (mut controller, mut completions) = InteractionController::new(Arc::new(service), sinks);

    tracing::info!(base_url = %config.service.base_url, "place client starting");
    controller.initialize(config.session);

    let mut frames = tokio::time::interval(FRAME_INTERVAL);
    frames.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            _ = frames.tick() => controller.tick(),
            Some(completion) = completions.recv() => controller.apply(completion),
            line = lines.next_line() => {
                let Some(line) = line? else {
                    tracing::info!("stdin closed");
                    break;
                };
                if line.trim().is_empty() {
                    continue;
                }
                match line.parse::<Command>() {
                    Ok(command) => {
                        if command.execute(&mut controller) == Flow::Quit {
                            break;
                        }
                    }
                    Err(e) => tracing::warn!(error = %e, input = %line, "bad command"),
                }
            }
        }
    }

    tracing::info!("place client stopped");
    Ok(())
}
