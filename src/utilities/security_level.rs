use std::fmt;

/// Clearance of an agent. Lower value means lower clearance, and the
/// lowest clearance inside the car wins the door.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SecurityLevel {
    Confidential,
    Secret,
    TopSecret,
}

impl SecurityLevel {
    pub fn iter() -> impl Iterator<Item = SecurityLevel> {
        [SecurityLevel::Confidential, SecurityLevel::Secret, SecurityLevel::TopSecret].iter().copied()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SecurityLevel::Confidential => "Confidential",
            SecurityLevel::Secret => "Secret",
            SecurityLevel::TopSecret => "TopSecret",
        }
    }
}

impl fmt::Display for SecurityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_are_ordered_lowest_first() {
        let levels: Vec<SecurityLevel> = SecurityLevel::iter().collect();
        let mut sorted = levels.clone();
        sorted.sort();
        assert_eq!(levels, sorted);
        assert!(SecurityLevel::Confidential < SecurityLevel::TopSecret);
    }
}
