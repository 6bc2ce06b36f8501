//! Flowstep Core Types and Definitions
//!
//! This crate provides the read-only flow tree that the step-over engine walks.
//! It includes:
//!
//! - **Identifiers**: Interned tag names ([`identifier::Id`])
//! - **Positions**: Source positions and ranges with containment tests ([`position`] module)
//! - **Nodes**: The tag + range base shared by every tree node ([`node::FlowNode`])
//! - **Flows**: Mediators and the flows that nest inside them ([`flow`] module)
//! - **Artifacts**: Root documents: APIs, proxies, sequences and templates ([`artifact`] module)
//! - **Breakpoints**: Positions the debugger arms ([`breakpoint::Breakpoint`])

pub mod artifact;
pub mod breakpoint;
pub mod flow;
pub mod identifier;
pub mod node;
pub mod position;
