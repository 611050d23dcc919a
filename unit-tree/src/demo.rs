//! Bundled demo hierarchy and sessions
//!
//! The dashboards have no backend; these JSON documents stand in for it.

use std::fs;
use std::path::Path;

use crate::error::TreeResult;
use crate::permissions::{Session, SessionRole};
use crate::unit::{validate_forest, Unit};

const DEMO_UNITS: &str = include_str!("../data/demo_units.json");
const DEMO_SESSIONS: &str = include_str!("../data/demo_sessions.json");

/// Parse and validate a forest from JSON
pub fn parse_forest(json: &str) -> TreeResult<Vec<Unit>> {
    let forest: Vec<Unit> = serde_json::from_str(json)?;
    validate_forest(&forest)?;
    Ok(forest)
}

pub fn parse_sessions(json: &str) -> TreeResult<Vec<Session>> {
    Ok(serde_json::from_str(json)?)
}

pub fn load_forest(path: &Path) -> TreeResult<Vec<Unit>> {
    parse_forest(&fs::read_to_string(path)?)
}

pub fn load_sessions(path: &Path) -> TreeResult<Vec<Session>> {
    parse_sessions(&fs::read_to_string(path)?)
}

pub fn demo_forest() -> TreeResult<Vec<Unit>> {
    parse_forest(DEMO_UNITS)
}

/// One admin, one teacher and one student session
pub fn demo_sessions() -> TreeResult<Vec<Session>> {
    parse_sessions(DEMO_SESSIONS)
}

/// First demo session with the given role
pub fn demo_session(role: SessionRole) -> TreeResult<Option<Session>> {
    Ok(demo_sessions()?.into_iter().find(|s| s.role == role))
}
