// simulation_main.rs
use live_traffic::communication::messages::SimulationMessage;
use live_traffic::control_system::selection::SelectionController;
use live_traffic::flow_analyzer::collect_light_stats;
use live_traffic::global_variables::TICK_INTERVAL_SECS;
use live_traffic::monitoring::dashboard::render_sidebar;
use live_traffic::monitoring::history::{log_light_stats, log_simulation_message};
use live_traffic::simulation_engine::light::{LightId, TrafficLight};
use live_traffic::simulation_engine::lights::create_lights;
use live_traffic::simulation_engine::simulation::TickDriver;
use rand::Rng;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::mpsc;

// How many ticks pass between simulated marker clicks.
const DEMO_CLICK_SECS: u64 = 5;

#[tokio::main]
async fn main() {
    env_logger::init();

    let lights = match create_lights() {
        Ok(lights) => lights,
        Err(e) => {
            eprintln!("Invalid traffic light seed: {}", e);
            return;
        }
    };
    let ids: Vec<LightId> = lights.iter().map(|light| light.id).collect();

    let registry = Arc::new(Mutex::new(lights));
    let selection = SelectionController::new();
    let (event_tx, mut event_rx) = mpsc::channel::<SimulationMessage>(64);

    let driver = TickDriver::start(
        Arc::clone(&registry),
        event_tx.clone(),
        Duration::from_secs(TICK_INTERVAL_SECS),
    );

    // Demo click source: picks a random marker every few seconds, standing
    // in for click events from the map widget.
    let click_selection = selection.clone();
    let click_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(Duration::from_secs(DEMO_CLICK_SECS));
        ticker.tick().await;
        loop {
            ticker.tick().await;
            let id = {
                let mut rng = rand::rng();
                ids[rng.random_range(0..ids.len())]
            };
            click_selection.select(id);
            if click_tx
                .send(SimulationMessage::LightSelected { light_id: id })
                .await
                .is_err()
            {
                break;
            }
        }
    });

    println!("Starting live traffic map. Press Ctrl-C to stop.");

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                println!("Shutting down...");
                break;
            }
            message = event_rx.recv() => {
                let Some(message) = message else { break };
                log_simulation_message(&message);
                match message {
                    SimulationMessage::SimulationTick(tick) => {
                        let snapshot: Vec<TrafficLight> = registry.lock().unwrap().clone();
                        let stats = collect_light_stats(tick, &snapshot);
                        log_light_stats(&stats);
                        println!("{}", render_sidebar(&snapshot, selection.current()));
                    }
                    SimulationMessage::LightChanged { light_id, phase, remaining } => {
                        log::info!(
                            "Light {:?} switched to {:?} for {}s",
                            light_id, phase, remaining
                        );
                    }
                    SimulationMessage::LightSelected { light_id } => {
                        log::info!("Selected light {:?}", light_id);
                    }
                }
            }
        }
    }

    // The tick driver is scoped to this view of the registry: stop it
    // before leaving so the timer cannot keep firing.
    driver.stop().await;
}
