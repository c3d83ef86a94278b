//! RFP multi-agent analysis service.
//!
//! The server side exposes `POST /api/agent` (see `agents`); the `workflow`
//! module is the client-side orchestrator that fans the six analysis roles
//! out against that endpoint.

pub mod agents;
pub mod config;
pub mod errors;
pub mod llm_client;
pub mod routes;
pub mod state;
pub mod workflow;
