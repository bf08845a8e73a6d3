use std::io::{self, BufRead};
use std::sync::Arc;
use std::thread;

use crossbeam_channel::unbounded;

use crate::utilities::config::Config;
use crate::utilities::debug;

pub mod agents;
pub mod doors;
pub mod elevator;
pub mod operator;

use elevator::Elevator;

/// Starts the simulation and blocks until it is over: either every agent
/// has finished its rides, or a line was read from stdin.
pub fn run(config: Config) -> io::Result<()> {
    let elevator = Arc::new(Elevator::new(config.elevator.clone()));

    // INITIALIZE CHANNELS
    let (stop_tx, stop_rx) = unbounded::<()>();

    // INITIALIZE THREAD FOR THE OPERATOR
    let operator_handle = {
        let elevator = Arc::clone(&elevator);
        let stop_rx = stop_rx.clone();
        thread::Builder::new().name("operator".to_string()).spawn(move || operator::main(
            elevator,
            stop_rx,
        ))?
    };

    // INITIALIZE THREADS FOR AGENTS
    let mut agent_handles = Vec::new();
    for agent in config.agents {
        let elevator = Arc::clone(&elevator);
        let driver_settings = config.driver.clone();
        let stop_rx = stop_rx.clone();
        let handle = thread::Builder::new().name(agent.name.clone()).spawn(move || agents::main(
            elevator,
            agent,
            driver_settings,
            stop_rx,
        ))?;
        agent_handles.push(handle);
    }

    // INITIALIZE STATUS DISPLAY
    let status_handle = {
        let elevator = Arc::clone(&elevator);
        let interval = config.driver.status_interval();
        thread::Builder::new().name("status".to_string()).spawn(move || debug::main(
            elevator,
            interval,
            stop_rx,
        ))?
    };

    match config.driver.rides_per_agent {
        Some(_) => {
            for handle in agent_handles {
                if handle.join().is_err() {
                    tracing::error!("agent thread panicked");
                }
            }
        }
        None => {
            let mut line = String::new();
            io::stdin().lock().read_line(&mut line)?;
        }
    }

    tracing::info!("stopping simulation");
    // disconnecting the channel stops every listener
    drop(stop_tx);
    for handle in [operator_handle, status_handle] {
        if handle.join().is_err() {
            tracing::error!("driver thread panicked");
        }
    }
    Ok(())
}
