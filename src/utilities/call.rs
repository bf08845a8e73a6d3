use super::floor::Floor;

/// A pending stop for the car.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    /// Someone is waiting on this floor.
    Hall(Floor),
    /// A rider wants to get off on this floor.
    Cab(Floor),
}

impl Call {
    pub fn floor(self) -> Floor {
        match self {
            Call::Hall(floor) | Call::Cab(floor) => floor,
        }
    }

    pub fn as_string(self) -> String {
        match self {
            Call::Hall(floor) => format!("hall {}", floor),
            Call::Cab(floor) => format!("cab {}", floor),
        }
    }
}
