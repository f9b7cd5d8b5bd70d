//! Implementation of the simplification rules.
//!
//! Each module handles one kind of node. The rules receive the node's children already
//! simplified, and return the simplified node, reporting every rewrite they apply to the given
//! [`StepCollector`](crate::symbolic::step_collector::StepCollector).

pub mod add;
pub mod function;
pub mod multiply;
pub mod power;
