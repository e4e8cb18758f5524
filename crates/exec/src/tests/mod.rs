//! Unit tests for the group executor.

mod pooling;
mod simulator;
