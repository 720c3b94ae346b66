//! Sailing route planner.
//!
//! Answers: "given these scheduled sailings, what is the cheapest or the
//! fastest way to get cargo from one port to another?"

pub mod cache;
pub mod dataset;
pub mod domain;
pub mod exchange;
pub mod planner;
