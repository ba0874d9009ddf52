//! # Powheap
//!
//! A d-ary max-heap over integers whose branching factor is a power of two,
//! chosen when the heap is built.

#![warn(missing_debug_implementations)]

/// Module containing the heap errors
pub mod error;
/// Module containing the heap implementation
pub mod heap;
