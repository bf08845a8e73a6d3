use std::fmt;

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Floor {
    Ground = 0,
    Secret = 1,
    Experimental = 2,
    TopSecret = 3,
}

impl Floor {
    pub const ALL: [Floor; 4] = [Floor::Ground, Floor::Secret, Floor::Experimental, Floor::TopSecret];

    pub fn num_floors() -> usize {
        Floor::ALL.len()
    }

    pub fn iter() -> impl Iterator<Item = Floor> {
        Floor::ALL.iter().copied()
    }

    /// Position of this floor in button tables.
    pub fn index(self) -> usize {
        match self {
            Floor::Ground => 0,
            Floor::Secret => 1,
            Floor::Experimental => 2,
            Floor::TopSecret => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Floor::Ground),
            1 => Some(Floor::Secret),
            2 => Some(Floor::Experimental),
            3 => Some(Floor::TopSecret),
            _ => None,
        }
    }

    pub fn above(self) -> Option<Self> {
        Floor::from_index(self.index() + 1)
    }

    pub fn below(self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Floor::from_index)
    }

    /// The neighbouring floor one step closer to `target`, or `None` when
    /// already there.
    pub fn next_toward(self, target: Floor) -> Option<Self> {
        if target > self {
            self.above()
        } else if target < self {
            self.below()
        } else {
            None
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Floor::Ground => "Ground",
            Floor::Secret => "Secret",
            Floor::Experimental => "Experimental",
            Floor::TopSecret => "TopSecret",
        }
    }
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
