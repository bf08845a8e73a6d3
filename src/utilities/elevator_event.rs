use super::agent::Agent;
use super::floor::Floor;

/// Everything the car does, in the order it happened under the lock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElevatorEvent {
    Waiting { agent: Agent, floor: Floor },
    Entered { agent: Agent, floor: Floor },
    Exited { agent: Agent, floor: Floor },
    Moving { floor: Floor },
    Arrived { floor: Floor },
    AlreadyAtFloor { floor: Floor },
    DoorOpened { floor: Floor, claimant: Option<Agent> },
    DoorDenied { floor: Floor, agent: Agent },
    DoorClosed { floor: Floor },
}
