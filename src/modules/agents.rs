/// ----- AGENTS MODULE -----
/// One thread per agent. Each picks a random pickup and destination,
/// rides the car and idles for a while before the next ride.

use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::{select, Receiver};
use rand::Rng;

use crate::utilities::agent::Agent;
use crate::utilities::config::DriverConfig;
use crate::utilities::floor::Floor;

use super::elevator::Elevator;

pub fn random_floor<R: Rng>(rng: &mut R) -> Floor {
    Floor::ALL[rng.gen_range(0..Floor::ALL.len())]
}

pub fn main(elevator: Arc<Elevator>, agent: Agent, driver_settings: DriverConfig, stop_rx: Receiver<()>) {
    let mut rng = rand::thread_rng();
    let mut rides: u32 = 0;

    loop {
        let from = random_floor(&mut rng);
        let to = random_floor(&mut rng);
        tracing::info!(agent = %agent.name, from = %from, to = %to, "calling the elevator");
        match agent.ride(&elevator, from, to) {
            Ok(()) => rides += 1,
            Err(err) => tracing::warn!(agent = %agent.name, error = %err, "ride rejected"),
        }

        if driver_settings.rides_per_agent.is_some_and(|limit| rides >= limit) {
            tracing::info!(agent = %agent.name, rides, "done riding");
            return;
        }

        let idle = Duration::from_millis(rng.gen_range(driver_settings.min_idle_ms..=driver_settings.max_idle_ms));
        select! {
            recv(stop_rx) -> _ => return,
            default(idle) => {},
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn random_floors_cover_the_building() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = [false; 4];
        for _ in 0..200 {
            seen[random_floor(&mut rng).index()] = true;
        }
        assert!(seen.iter().all(|hit| *hit));
    }
}
