// Composition root for Lambda handlers built on this crate.
//
// Responsibilities
// - Read settings from the environment.
// - Install the tracing subscriber.
// - Load the shared AWS configuration and build the service adapters.

pub mod aws;
pub mod config;
pub mod telemetry;
