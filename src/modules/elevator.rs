/// ----- ELEVATOR MODULE -----
/// This module owns the car. All of its state sits behind one lock that
/// every operation holds for its full duration, travel and door dwell
/// included. Agents waiting for the car park on a condition variable,
/// which releases the lock until the car has arrived and admitted them.

use std::collections::VecDeque;
use std::thread;
use std::time::Duration;

use crossbeam_channel::Sender;
use parking_lot::{Condvar, Mutex};

use crate::utilities::agent::Agent;
use crate::utilities::call::Call;
use crate::utilities::config::ElevatorConfig;
use crate::utilities::elevator_event::ElevatorEvent;
use crate::utilities::elevator_status::ElevatorStatus;
use crate::utilities::error::ElevatorError;
use crate::utilities::floor::Floor;

use super::doors::{self, DoorDecision, DoorOutcome};

#[derive(Debug)]
struct ElevatorState {
    current_floor: Floor,
    occupants: Vec<Agent>,
    floor_buttons: Vec<bool>,
    elevator_buttons: Vec<bool>,
    waiting: Vec<(Agent, Floor)>,
    destinations: Vec<(Agent, Floor)>,
    calls: VecDeque<Call>,
}

impl ElevatorState {
    fn new() -> Self {
        ElevatorState {
            current_floor: Floor::Ground,
            occupants: Vec::new(),
            floor_buttons: vec![false; Floor::num_floors()],
            elevator_buttons: vec![false; Floor::num_floors()],
            waiting: Vec::new(),
            destinations: Vec::new(),
            calls: VecDeque::new(),
        }
    }

    fn is_inside(&self, agent: &Agent) -> bool {
        self.occupants.contains(agent)
    }

    fn is_waiting(&self, agent: &Agent) -> bool {
        self.waiting.iter().any(|(waiter, _)| waiter == agent)
    }

    fn destination_of(&self, agent: &Agent) -> Option<Floor> {
        self.destinations
            .iter()
            .find(|(rider, _)| rider == agent)
            .map(|(_, floor)| *floor)
    }

    fn take_destination(&mut self, agent: &Agent) -> Option<Floor> {
        let index = self.destinations.iter().position(|(rider, _)| rider == agent)?;
        Some(self.destinations.remove(index).1)
    }

    fn is_wanted(&self, floor: Floor) -> bool {
        self.destinations.iter().any(|(_, destination)| *destination == floor)
    }

    /// Returns false if the call was already pending.
    fn queue_call(&mut self, call: Call) -> bool {
        if self.calls.contains(&call) {
            return false;
        }
        self.calls.push_back(call);
        true
    }

    fn snapshot(&self) -> ElevatorStatus {
        ElevatorStatus {
            current_floor: self.current_floor,
            occupants: self.occupants.clone(),
            waiting: self.waiting.clone(),
            destinations: self.destinations.clone(),
            floor_buttons: self.floor_buttons.clone(),
            elevator_buttons: self.elevator_buttons.clone(),
            calls: self.calls.iter().copied().collect(),
        }
    }
}

pub struct Elevator {
    state: Mutex<ElevatorState>,
    changed: Condvar,
    settings: ElevatorConfig,
    events: Option<Sender<ElevatorEvent>>,
}

impl Elevator {
    pub fn new(settings: ElevatorConfig) -> Self {
        Elevator {
            state: Mutex::new(ElevatorState::new()),
            changed: Condvar::new(),
            settings,
            events: None,
        }
    }

    /// Like `new`, but every state transition is also sent to `events`.
    pub fn with_events(settings: ElevatorConfig, events: Sender<ElevatorEvent>) -> Self {
        Elevator {
            events: Some(events),
            ..Elevator::new(settings)
        }
    }

    pub fn settings(&self) -> &ElevatorConfig {
        &self.settings
    }

    /// Registers a ride from `current_floor` to `destination_floor` and
    /// blocks until `agent` is inside the car.
    pub fn request_floor(&self, current_floor: Floor, destination_floor: Floor, agent: &Agent) -> Result<(), ElevatorError> {
        let mut state = self.state.lock();
        if state.is_inside(agent) {
            return Err(ElevatorError::AlreadyInside { agent: agent.name.clone() });
        }
        if state.is_waiting(agent) {
            return Err(ElevatorError::AlreadyWaiting { agent: agent.name.clone() });
        }

        state.floor_buttons[current_floor.index()] = false;
        state.elevator_buttons[destination_floor.index()] = true;
        state.destinations.push((agent.clone(), destination_floor));

        if state.current_floor == current_floor {
            return self.enter_locked(&mut state, agent);
        }

        tracing::info!(agent = %agent.name, floor = %current_floor, "waiting for the elevator");
        self.emit(ElevatorEvent::Waiting { agent: agent.clone(), floor: current_floor });
        state.waiting.push((agent.clone(), current_floor));
        self.queue_call_locked(&mut state, Call::Hall(current_floor));

        // admission happens on arrival, under the same lock
        while state.is_waiting(agent) {
            self.changed.wait(&mut state);
        }
        Ok(())
    }

    pub fn enter(&self, agent: &Agent) -> Result<(), ElevatorError> {
        let mut state = self.state.lock();
        self.enter_locked(&mut state, agent)
    }

    pub fn exit(&self, agent: &Agent) -> Result<(), ElevatorError> {
        let mut state = self.state.lock();
        let position = state.occupants.iter().position(|occupant| occupant == agent);
        match position {
            Some(index) => {
                self.exit_locked(&mut state, index);
                Ok(())
            }
            None => Err(ElevatorError::NotInside { agent: agent.name.clone() }),
        }
    }

    pub fn move_to_floor(&self, floor: Floor) {
        let mut state = self.state.lock();
        self.move_to_floor_locked(&mut state, floor);
    }

    /// Opens the door for `claimant`. With `None` the occupant with the
    /// lowest clearance is let out.
    pub fn open_door(&self, claimant: Option<&Agent>) -> DoorOutcome {
        let mut state = self.state.lock();
        self.open_door_locked(&mut state, claimant)
    }

    /// Hall call. Moves the car to `floor` unless it is already there.
    pub fn press_floor_button(&self, floor: Floor) {
        let mut state = self.state.lock();
        state.floor_buttons[floor.index()] = false;
        if state.current_floor != floor {
            self.move_to_floor_locked(&mut state, floor);
        } else {
            tracing::info!(floor = %floor, "elevator is already on the requested floor");
            self.emit(ElevatorEvent::AlreadyAtFloor { floor });
            if self.admit_waiting(&mut state) > 0 {
                self.changed.notify_all();
            }
        }
    }

    /// Cab call. Opens the door without a claimant.
    pub fn press_elevator_button(&self, floor: Floor) -> DoorOutcome {
        let mut state = self.state.lock();
        state.elevator_buttons[floor.index()] = false;
        self.open_door_locked(&mut state, None)
    }

    pub fn status(&self) -> ElevatorStatus {
        self.state.lock().snapshot()
    }

    pub fn current_floor(&self) -> Floor {
        self.state.lock().current_floor
    }

    pub fn queue_call(&self, call: Call) -> bool {
        let mut state = self.state.lock();
        self.queue_call_locked(&mut state, call)
    }

    pub fn next_call(&self) -> Option<Call> {
        self.state.lock().calls.pop_front()
    }

    /// Waits up to `timeout` for a call to become pending and takes it.
    pub fn wait_for_call(&self, timeout: Duration) -> Option<Call> {
        let mut state = self.state.lock();
        if state.calls.is_empty() {
            self.changed.wait_for(&mut state, timeout);
        }
        state.calls.pop_front()
    }

    /// Destinations of everyone inside, in boarding order.
    pub fn rider_destinations(&self) -> Vec<Floor> {
        let state = self.state.lock();
        let destinations = state
            .occupants
            .iter()
            .filter_map(|occupant| state.destination_of(occupant))
            .collect();
        destinations
    }

    /// Blocks until `agent` is neither waiting for nor riding the car.
    pub fn wait_until_exited(&self, agent: &Agent) {
        let mut state = self.state.lock();
        while state.is_inside(agent) || state.is_waiting(agent) {
            self.changed.wait(&mut state);
        }
    }

    fn emit(&self, event: ElevatorEvent) {
        if let Some(events) = &self.events {
            // observers may have gone away
            let _ = events.send(event);
        }
    }

    fn queue_call_locked(&self, state: &mut ElevatorState, call: Call) -> bool {
        let queued = state.queue_call(call);
        if queued {
            tracing::debug!(call = %call.as_string(), "call queued");
            self.changed.notify_all();
        }
        queued
    }

    fn enter_locked(&self, state: &mut ElevatorState, agent: &Agent) -> Result<(), ElevatorError> {
        if state.is_inside(agent) {
            return Err(ElevatorError::AlreadyInside { agent: agent.name.clone() });
        }
        state.occupants.push(agent.clone());
        let floor = state.current_floor;
        state.floor_buttons[floor.index()] = true;
        tracing::info!(agent = %agent.name, floor = %floor, "entered the elevator");
        self.emit(ElevatorEvent::Entered { agent: agent.clone(), floor });
        if let Some(destination) = state.destination_of(agent) {
            self.queue_call_locked(state, Call::Cab(destination));
        }
        Ok(())
    }

    fn exit_locked(&self, state: &mut ElevatorState, index: usize) {
        let agent = state.occupants.remove(index);
        let floor = state.current_floor;
        if state.occupants.is_empty() {
            state.elevator_buttons[floor.index()] = false;
        }
        if let Some(destination) = state.take_destination(&agent) {
            if !state.is_wanted(destination) {
                state.elevator_buttons[destination.index()] = false;
            }
        }
        tracing::info!(agent = %agent.name, floor = %floor, "exited the elevator");
        self.emit(ElevatorEvent::Exited { agent, floor });
        self.changed.notify_all();
    }

    fn move_to_floor_locked(&self, state: &mut ElevatorState, floor: Floor) {
        while let Some(next) = state.current_floor.next_toward(floor) {
            thread::sleep(self.settings.travel_time());
            state.current_floor = next;
            tracing::info!(floor = %next, "elevator is moving");
            self.emit(ElevatorEvent::Moving { floor: next });
        }

        tracing::info!(floor = %floor, "elevator arrived");
        state.floor_buttons[floor.index()] = true;
        state.elevator_buttons[floor.index()] = false;
        self.emit(ElevatorEvent::Arrived { floor });
        self.admit_waiting(state);
        self.changed.notify_all();
    }

    /// Moves everyone waiting on the current floor into the car.
    fn admit_waiting(&self, state: &mut ElevatorState) -> usize {
        let floor = state.current_floor;
        let mut admitted = 0;
        while let Some(index) = state.waiting.iter().position(|(_, at)| *at == floor) {
            let (agent, _) = state.waiting.remove(index);
            // someone may have let the agent in directly while it waited
            if self.enter_locked(state, &agent).is_ok() {
                admitted += 1;
            }
        }
        admitted
    }

    fn open_door_locked(&self, state: &mut ElevatorState, claimant: Option<&Agent>) -> DoorOutcome {
        let floor = state.current_floor;
        let evict = match doors::arbitrate(&state.occupants, claimant) {
            DoorDecision::Open { evict } => evict,
            DoorDecision::Deny(agent) => {
                tracing::info!(
                    agent = %agent.name,
                    security_level = %agent.security_level,
                    floor = %floor,
                    "door does not open"
                );
                self.emit(ElevatorEvent::DoorDenied { floor, agent: agent.clone() });
                return DoorOutcome::Denied { claimant: agent.clone() };
            }
        };

        match claimant {
            Some(agent) => tracing::info!(
                agent = %agent.name,
                security_level = %agent.security_level,
                floor = %floor,
                "door opens"
            ),
            None => tracing::info!(floor = %floor, "door opens"),
        }
        self.emit(ElevatorEvent::DoorOpened { floor, claimant: claimant.cloned() });

        thread::sleep(self.settings.door_open_time());
        tracing::info!(floor = %floor, "door closes");
        self.emit(ElevatorEvent::DoorClosed { floor });
        thread::sleep(self.settings.door_close_time());

        let exited = evict.map(|index| {
            let agent = state.occupants[index].clone();
            self.exit_locked(state, index);
            agent
        });
        DoorOutcome::Opened { exited }
    }
}
