//! External service interactions
//!
//! - Waitlist signup (simulated) and the background runner that drives it

pub mod waitlist;

pub use waitlist::{SimulatedWaitlist, WaitlistRunner, WaitlistService};
