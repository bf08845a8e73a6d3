use std::fmt;

use crate::modules::elevator::Elevator;

use super::error::ElevatorError;
use super::floor::Floor;
use super::security_level::SecurityLevel;

/// A person with a clearance. Agents never change after creation and are
/// only lent to the elevator for the duration of a call.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Agent {
    pub name: String,
    pub security_level: SecurityLevel,
}

impl Agent {
    pub fn new(name: impl Into<String>, security_level: SecurityLevel) -> Self {
        Agent {
            name: name.into(),
            security_level,
        }
    }

    /// Blocks until the car has picked this agent up at `current_floor`.
    pub fn call_elevator(&self, elevator: &Elevator, current_floor: Floor, destination_floor: Floor) -> Result<(), ElevatorError> {
        elevator.request_floor(current_floor, destination_floor, self)
    }

    pub fn enter_elevator(&self, elevator: &Elevator) -> Result<(), ElevatorError> {
        elevator.enter(self)
    }

    pub fn exit_elevator(&self, elevator: &Elevator) -> Result<(), ElevatorError> {
        elevator.exit(self)
    }

    /// Calls the car and stays blocked until this agent has been let out.
    pub fn ride(&self, elevator: &Elevator, current_floor: Floor, destination_floor: Floor) -> Result<(), ElevatorError> {
        self.call_elevator(elevator, current_floor, destination_floor)?;
        elevator.wait_until_exited(self);
        Ok(())
    }
}

impl fmt::Display for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.security_level)
    }
}
