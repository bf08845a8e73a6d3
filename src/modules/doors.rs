/// ----- DOORS MODULE -----
/// This module decides who is let out when the door opens. Only the
/// occupant with the lowest clearance may leave; ties go to whoever
/// boarded first.

use crate::utilities::agent::Agent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DoorOutcome {
    /// The door opened. `exited` is the occupant that was let out, if any.
    Opened { exited: Option<Agent> },
    /// The claimant lost the priority contest. Nothing changed.
    Denied { claimant: Agent },
}

impl DoorOutcome {
    pub fn is_opened(&self) -> bool {
        matches!(self, DoorOutcome::Opened { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoorDecision<'a> {
    /// Open, evicting the occupant at this position if there is one.
    Open { evict: Option<usize> },
    Deny(&'a Agent),
}

/// Position of the occupant with the lowest clearance. The comparison is
/// strict, so the earliest of several equal occupants is kept.
pub fn priority_winner(occupants: &[Agent]) -> Option<usize> {
    let mut winner: Option<usize> = None;
    for (index, agent) in occupants.iter().enumerate() {
        winner = match winner {
            Some(best) if occupants[best].security_level <= agent.security_level => Some(best),
            _ => Some(index),
        };
    }
    winner
}

/// Runs the priority contest for one door event. Without a claimant the
/// winner is let out unconditionally.
pub fn arbitrate<'a>(occupants: &[Agent], claimant: Option<&'a Agent>) -> DoorDecision<'a> {
    let Some(winner) = priority_winner(occupants) else {
        return DoorDecision::Open { evict: None };
    };
    match claimant {
        None => DoorDecision::Open { evict: Some(winner) },
        Some(agent) if occupants[winner] == *agent => DoorDecision::Open { evict: Some(winner) },
        Some(agent) => DoorDecision::Deny(agent),
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::utilities::security_level::SecurityLevel;

    fn agents(levels: &[SecurityLevel]) -> Vec<Agent> {
        levels
            .iter()
            .enumerate()
            .map(|(i, level)| Agent::new(format!("Agent{}", i), *level))
            .collect()
    }

    #[test]
    fn lowest_clearance_wins() {
        let occupants = agents(&[SecurityLevel::Secret, SecurityLevel::TopSecret, SecurityLevel::Confidential]);
        assert_eq!(priority_winner(&occupants), Some(2));
        assert_eq!(arbitrate(&occupants, Some(&occupants[2])), DoorDecision::Open { evict: Some(2) });
        assert_eq!(arbitrate(&occupants, Some(&occupants[0])), DoorDecision::Deny(&occupants[0]));
        assert_eq!(arbitrate(&occupants, Some(&occupants[1])), DoorDecision::Deny(&occupants[1]));
    }

    #[test]
    fn tie_goes_to_first_boarded() {
        let occupants = agents(&[SecurityLevel::TopSecret, SecurityLevel::Secret, SecurityLevel::Secret]);
        for _ in 0..10 {
            assert_eq!(priority_winner(&occupants), Some(1));
        }
        assert_eq!(arbitrate(&occupants, Some(&occupants[2])), DoorDecision::Deny(&occupants[2]));
    }

    #[test]
    fn empty_car_lets_anyone_use_the_door() {
        let outsider = Agent::new("Outsider", SecurityLevel::TopSecret);
        assert_eq!(arbitrate(&[], Some(&outsider)), DoorDecision::Open { evict: None });
        assert_eq!(arbitrate(&[], None), DoorDecision::Open { evict: None });
    }

    #[test]
    fn outsider_is_denied_when_car_is_occupied() {
        let occupants = agents(&[SecurityLevel::TopSecret]);
        let outsider = Agent::new("Outsider", SecurityLevel::Confidential);
        assert_eq!(arbitrate(&occupants, Some(&outsider)), DoorDecision::Deny(&outsider));
    }

    #[test]
    fn no_claimant_evicts_the_winner() {
        let occupants = agents(&[SecurityLevel::TopSecret, SecurityLevel::Confidential]);
        assert_eq!(arbitrate(&occupants, None), DoorDecision::Open { evict: Some(1) });
    }

    fn level() -> impl Strategy<Value = SecurityLevel> {
        prop_oneof![
            Just(SecurityLevel::Confidential),
            Just(SecurityLevel::Secret),
            Just(SecurityLevel::TopSecret),
        ]
    }

    proptest! {
        #[test]
        fn winner_is_first_of_the_minimum(levels in prop::collection::vec(level(), 1..8)) {
            let occupants = agents(&levels);
            let winner = priority_winner(&occupants).unwrap();
            let minimum = levels.iter().min().copied().unwrap();
            prop_assert_eq!(levels[winner], minimum);
            prop_assert!(levels[..winner].iter().all(|level| *level > minimum));
        }

        #[test]
        fn exactly_one_occupant_may_open(levels in prop::collection::vec(level(), 1..8)) {
            let occupants = agents(&levels);
            let opened = occupants
                .iter()
                .filter(|agent| matches!(arbitrate(&occupants, Some(*agent)), DoorDecision::Open { .. }))
                .count();
            prop_assert_eq!(opened, 1);
        }
    }
}
