pub mod agent;
pub mod call;
pub mod config;
pub mod debug;
pub mod elevator_event;
pub mod elevator_status;
pub mod error;
pub mod floor;
pub mod security_level;
