//! # kata-core
//!
//! The exercise library. Each module is one exercise family, independent
//! of the others:
//!
//! * [`greeting`] - fixed and personalized greeting text.
//! * [`geometry`] - rectangle area and circle properties.
//! * [`health`] - body mass index.
//! * [`scoreboard`] - a running score owned by the caller.
//! * [`factorial`] - iterative factorial.
//! * [`stats`] - summary statistics over a number sequence.
//! * [`profile`] - fixed-key profile records.
//! * [`password`] - multi-criteria password validation.

pub mod factorial;
pub mod geometry;
pub mod greeting;
pub mod health;
pub mod password;
pub mod profile;
pub mod scoreboard;
pub mod stats;
