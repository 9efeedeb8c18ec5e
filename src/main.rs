#[macro_use(new_key_type)]
extern crate slotmap;

mod entity;
mod extension;
mod helpers;
mod primitives;
mod registry;
mod sim;

use cgmath::{Vector2, Zero};
use log::{debug, error, info, trace, warn};
use std::{
    collections::{HashMap, HashSet},
    error::Error,
    fmt,
    ops::{Add, Neg, Sub},
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};

use entity::*;
use extension::*;
use helpers::*;
use primitives::*;
use registry::*;
use sim::*;

/// How often the simulation reports how it's doing
const REPORT_INTERVAL: u64 = 10 * Ticks::FREQUENCY_HZ as u64;

fn run(conf: &MasterConfig) -> Result<(), Box<dyn Error>> {
    let registry = load_types(&conf.entity_types_path, &real_filesystem())?;
    let mut sim = Simulation::new(registry, conf.extension_strategy);
    for _ in 0..conf.bot_count {
        sim.spawn_bot()?;
    }
    info!("spawned {} bots", conf.bot_count);

    let quit = Arc::new(AtomicBool::new(false));
    let quit_handler = quit.clone();
    ctrlc::set_handler(move || {
        info!("Ctrl+C received, stopping");
        quit_handler.store(true, Ordering::SeqCst);
    })
    .or_log_warn("setting Ctrl+C handler");

    let mut metronome = Metronome::new(conf.tick_seconds, 0.0);
    while !quit.load(Ordering::SeqCst) {
        sim.tick();
        if sim.tick_count() % REPORT_INTERVAL == 0 {
            info!(
                "tick {} ({:.0}s in): {} entities, {} own all of their extension state",
                sim.tick_count(),
                metronome.elapsed_secs(),
                sim.entity_count(),
                sim.detached_count()
            );
        }
        if let Some(max_time) = conf.max_game_time {
            let simulated = Ticks::ONE.to_secs() as f64 * sim.tick_count() as f64;
            if simulated >= max_time {
                info!("reached max game time of {}s", max_time);
                break;
            }
        }
        metronome.sleep();
    }
    shut_down(&mut sim);
    Ok(())
}

/// Reports the fleet by type, then despawns everything. Returns the number of entities of each type.
fn shut_down(sim: &mut Simulation) -> HashMap<String, usize> {
    let mut fleet: HashMap<String, usize> = HashMap::new();
    for (key, entity) in sim.entities() {
        match entity.data(sim.registry()) {
            Ok(data) => *fleet.entry(data.label.clone()).or_insert(0) += 1,
            Err(e) => warn!("{:?} has no type data: {}", key, e),
        }
    }
    for (label, count) in &fleet {
        info!("{} x {} at shutdown", count, label);
    }
    let keys: Vec<EntityKey> = sim.entities().map(|(key, _)| key).collect();
    for key in keys {
        sim.despawn(key).or_log_error(&format!("despawning {:?}", key));
    }
    fleet
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let conf = match build_config() {
        Ok(conf) => conf,
        Err(e) => {
            error!("configuration error: {}", e);
            std::process::exit(1);
        }
    };
    if conf.happy_exit {
        return;
    }
    debug!("{:#?}", conf);
    info!("starting flotilla-server");
    if let Err(e) = run(&conf) {
        error!("{}", e);
        std::process::exit(1);
    }
    info!("done");
}
