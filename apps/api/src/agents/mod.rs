//! The per-role analysis pipeline behind `POST /api/agent`.

pub mod extract;
pub mod fallback;
pub mod handlers;
pub mod models;
pub mod prompts;
pub mod roles;
