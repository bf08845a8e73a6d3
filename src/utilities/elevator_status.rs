use super::agent::Agent;
use super::call::Call;
use super::floor::Floor;

/// A consistent copy of the car's state, taken under the elevator lock.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ElevatorStatus {
    pub current_floor: Floor,
    pub occupants: Vec<Agent>,
    pub waiting: Vec<(Agent, Floor)>,
    /// Where every committed rider, waiting or inside, wants to go.
    pub destinations: Vec<(Agent, Floor)>,
    pub floor_buttons: Vec<bool>,
    pub elevator_buttons: Vec<bool>,
    pub calls: Vec<Call>,
}

impl ElevatorStatus {
    pub fn floor_button(&self, floor: Floor) -> bool {
        self.floor_buttons[floor.index()]
    }

    pub fn elevator_button(&self, floor: Floor) -> bool {
        self.elevator_buttons[floor.index()]
    }

    pub fn is_inside(&self, agent: &Agent) -> bool {
        self.occupants.contains(agent)
    }

    pub fn is_wanted(&self, floor: Floor) -> bool {
        self.destinations.iter().any(|(_, destination)| *destination == floor)
    }
}
