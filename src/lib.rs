//! A single elevator car shared by agents with security clearances.
//!
//! The car lives in [`modules::elevator::Elevator`]. Agents request rides
//! through it and block until served; the door only lets out the occupant
//! with the lowest clearance.

pub mod modules;
pub mod utilities;

pub use modules::doors::DoorOutcome;
pub use modules::elevator::Elevator;
pub use utilities::agent::Agent;
pub use utilities::call::Call;
pub use utilities::config::{Config, DriverConfig, ElevatorConfig};
pub use utilities::elevator_event::ElevatorEvent;
pub use utilities::elevator_status::ElevatorStatus;
pub use utilities::error::{ConfigError, ElevatorError};
pub use utilities::floor::Floor;
pub use utilities::security_level::SecurityLevel;
