/// ----- OPERATOR MODULE -----
/// This module drives the car. It takes pending calls first come first
/// served and turns them into button presses.

use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::{select, Receiver};

use crate::utilities::call::Call;

use super::doors::DoorOutcome;
use super::elevator::Elevator;

const POLL_PERIOD: Duration = Duration::from_millis(50);

/// Serves one call. Riders still inside after a door event get their
/// destination queued again, since the car will not retry on its own.
pub fn serve(elevator: &Elevator, call: Call) -> Option<DoorOutcome> {
    tracing::debug!(call = %call.as_string(), "serving call");
    match call {
        Call::Hall(floor) => {
            elevator.press_floor_button(floor);
            None
        }
        Call::Cab(floor) => {
            elevator.press_floor_button(floor);
            let outcome = elevator.press_elevator_button(floor);
            for destination in elevator.rider_destinations() {
                elevator.queue_call(Call::Cab(destination));
            }
            Some(outcome)
        }
    }
}

pub fn main(elevator: Arc<Elevator>, stop_rx: Receiver<()>) {
    loop {
        select! {
            recv(stop_rx) -> _ => {
                tracing::debug!("operator stopping");
                return;
            },
            default => {
                if let Some(call) = elevator.wait_for_call(POLL_PERIOD) {
                    serve(&elevator, call);
                }
            },
        }
    }
}
