// ABOUTME: Ring module - assembles agents and resources into cyclic adjacency.
// ABOUTME: Provides Ring construction and the RingHandle for shutdown and join.

mod ring;

pub use ring::{Ring, RingHandle};

#[cfg(test)]
mod ring_test;
