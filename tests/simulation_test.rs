//! Whole rides with the operator running, plus state invariants under
//! random operation sequences.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossbeam_channel::unbounded;
use proptest::prelude::*;
use secure_elevator::modules::operator;
use secure_elevator::{Agent, Elevator, ElevatorConfig, ElevatorStatus, Floor, SecurityLevel};

fn assert_invariants(status: &ElevatorStatus) {
    for floor in Floor::iter() {
        if !status.is_wanted(floor) {
            assert!(!status.elevator_button(floor), "button {} lit with nobody going there", floor);
        }
    }
    for (i, occupant) in status.occupants.iter().enumerate() {
        assert!(!status.occupants[i + 1..].contains(occupant), "{} is inside twice", occupant);
    }
}

#[test]
fn every_ride_completes_with_the_operator_running() {
    let elevator = Arc::new(Elevator::new(ElevatorConfig::instant()));
    let (stop_tx, stop_rx) = unbounded::<()>();
    let operator_handle = {
        let elevator = Arc::clone(&elevator);
        thread::spawn(move || operator::main(elevator, stop_rx))
    };

    let rides = [
        (Agent::new("Agent1", SecurityLevel::Confidential), Floor::TopSecret, Floor::Ground),
        (Agent::new("Agent2", SecurityLevel::Secret), Floor::Experimental, Floor::Secret),
        (Agent::new("Agent3", SecurityLevel::TopSecret), Floor::Ground, Floor::TopSecret),
        (Agent::new("Agent4", SecurityLevel::Secret), Floor::Secret, Floor::Secret),
    ];

    let (done_tx, done_rx) = unbounded();
    for (agent, from, to) in rides.iter().cloned() {
        let elevator = Arc::clone(&elevator);
        let done_tx = done_tx.clone();
        thread::spawn(move || {
            for _ in 0..3 {
                agent.ride(&elevator, from, to).unwrap();
            }
            done_tx.send(agent.name).unwrap();
        });
    }

    for _ in 0..rides.len() {
        done_rx.recv_timeout(Duration::from_secs(20)).unwrap();
    }

    let status = elevator.status();
    assert!(status.occupants.is_empty());
    assert!(status.waiting.is_empty());
    assert!(status.destinations.is_empty());
    assert_invariants(&status);

    drop(stop_tx);
    operator_handle.join().unwrap();
}

#[test]
fn riders_get_out_with_real_latency() {
    let settings = ElevatorConfig {
        travel_time_ms: 2,
        door_open_ms: 1,
        door_close_ms: 1,
    };
    let elevator = Arc::new(Elevator::new(settings));
    let (stop_tx, stop_rx) = unbounded::<()>();
    let operator_handle = {
        let elevator = Arc::clone(&elevator);
        thread::spawn(move || operator::main(elevator, stop_rx))
    };

    let agent = Agent::new("Agent1", SecurityLevel::TopSecret);
    agent.ride(&elevator, Floor::TopSecret, Floor::Ground).unwrap();
    assert_eq!(elevator.current_floor(), Floor::Ground);
    assert!(elevator.status().occupants.is_empty());

    drop(stop_tx);
    operator_handle.join().unwrap();
}

#[derive(Debug, Clone)]
enum Op {
    Board(usize, Floor),
    Exit(usize),
    PressFloor(Floor),
    PressCab(Floor),
    OpenDoor(usize),
    Move(Floor),
}

fn floor() -> impl Strategy<Value = Floor> {
    (0..Floor::num_floors()).prop_map(|i| Floor::ALL[i])
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..4usize, floor()).prop_map(|(agent, to)| Op::Board(agent, to)),
        (0..4usize).prop_map(Op::Exit),
        floor().prop_map(Op::PressFloor),
        floor().prop_map(Op::PressCab),
        (0..4usize).prop_map(Op::OpenDoor),
        floor().prop_map(Op::Move),
    ]
}

proptest! {
    #[test]
    fn buttons_follow_riders(ops in prop::collection::vec(op(), 1..40)) {
        let elevator = Elevator::new(ElevatorConfig::instant());
        let agents: Vec<Agent> = SecurityLevel::iter()
            .chain(std::iter::once(SecurityLevel::Secret))
            .enumerate()
            .map(|(i, level)| Agent::new(format!("Agent{}", i), level))
            .collect();

        for op in ops {
            let before = elevator.status();
            match op {
                Op::Board(i, to) => {
                    // boarding on the car's floor never blocks
                    let result = elevator.request_floor(before.current_floor, to, &agents[i]);
                    prop_assert_eq!(result.is_ok(), !before.is_inside(&agents[i]));
                }
                Op::Exit(i) => {
                    let result = elevator.exit(&agents[i]);
                    prop_assert_eq!(result.is_ok(), before.is_inside(&agents[i]));
                    if result.is_err() {
                        prop_assert_eq!(elevator.status(), before.clone());
                    }
                }
                Op::PressFloor(target) => {
                    elevator.press_floor_button(target);
                    prop_assert_eq!(elevator.current_floor(), target);
                }
                Op::PressCab(target) => {
                    elevator.press_elevator_button(target);
                }
                Op::OpenDoor(i) => {
                    elevator.open_door(Some(&agents[i]));
                }
                Op::Move(target) => {
                    elevator.move_to_floor(target);
                }
            }
            let after = elevator.status();
            assert_invariants(&after);
            prop_assert!(after.occupants.len() <= before.occupants.len() + 1);
        }
    }
}
