//! Civitas: civic-issue lifecycle client core.
//!
//! This crate implements the client-observable core of a multi-role
//! civic-issue-reporting system: citizens report issues, government
//! officials triage them into work orders for field workers, and admins
//! manage the department directory. All durable state lives behind a
//! remote REST API; this crate owns the validation rules, the lifecycle
//! state machine, and a typed gateway that surfaces server decisions
//! without reinterpreting them.
//!
//! # Architecture
//!
//! Each feature module follows hexagonal architecture:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for the remote API
//! - **Adapters**: Concrete implementations of ports (HTTP, in-memory)
//!
//! # Modules
//!
//! - [`issue`]: Issue aggregate, submission validation, and engagement
//! - [`assignment`]: Issue-to-task workflow and lifecycle transitions
//! - [`directory`]: Department, official, and worker administration
//! - [`gateway`]: Shared HTTP plumbing, auth, and the error taxonomy

pub mod assignment;
pub mod directory;
pub mod gateway;
pub mod issue;
