//! Validation and normalization of record payloads
//!
//! Gatekeeper before any store mutation: create and update run through the
//! same rules. Coordinate ranges and the status value set are deliberately
//! not checked; the boundary has always accepted them as-is.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::record::STATUS_HEALTHY;
use crate::{Error, Result};

/// Raw boundary payload for create and update. Every field is optional so
/// that missing-field errors come from validation, not deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TreeInput {
    pub species: Option<String>,
    pub latitude: Option<Coordinate>,
    pub longitude: Option<Coordinate>,
    pub planted_date: Option<String>,
    pub planter_name: Option<String>,
    pub notes: Option<String>,
    pub status: Option<String>,
}

/// The admin form submits coordinates as strings; API clients send numbers
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Coordinate {
    Number(f64),
    Text(String),
}

/// A payload that passed validation, ready for the store
#[derive(Debug, Clone, PartialEq)]
pub struct ValidTree {
    pub species: String,
    pub latitude: f64,
    pub longitude: f64,
    pub planted_date: NaiveDate,
    pub planter_name: Option<String>,
    pub notes: Option<String>,
    pub status: String,
}

/// Validate a boundary payload and normalize it for persistence
pub fn validate(input: TreeInput) -> Result<ValidTree> {
    let species = required_text("species", input.species)?;
    let latitude = required_coordinate("latitude", input.latitude)?;
    let longitude = required_coordinate("longitude", input.longitude)?;
    let planted_date = required_date("planted_date", input.planted_date)?;

    Ok(ValidTree {
        species,
        latitude,
        longitude,
        planted_date,
        planter_name: optional_text(input.planter_name),
        notes: optional_text(input.notes),
        status: optional_text(input.status).unwrap_or_else(|| STATUS_HEALTHY.to_string()),
    })
}

fn missing(field: &str) -> Error {
    Error::Validation(format!("missing required field: {field}"))
}

fn required_text(field: &str, value: Option<String>) -> Result<String> {
    match value {
        Some(s) if !s.is_empty() => Ok(s),
        _ => Err(missing(field)),
    }
}

fn required_coordinate(field: &str, value: Option<Coordinate>) -> Result<f64> {
    match value {
        Some(Coordinate::Number(n)) => Ok(n),
        Some(Coordinate::Text(s)) => {
            if s.is_empty() {
                return Err(missing(field));
            }
            s.trim()
                .parse::<f64>()
                .map_err(|_| Error::Validation(format!("{field} must be a number")))
        }
        None => Err(missing(field)),
    }
}

fn required_date(field: &str, value: Option<String>) -> Result<NaiveDate> {
    let raw = required_text(field, value)?;
    NaiveDate::parse_from_str(&raw, "%Y-%m-%d").map_err(|_| {
        Error::Validation(format!("{field} must be an ISO 8601 date (YYYY-MM-DD)"))
    })
}

/// Empty strings from the form collapse to absent
fn optional_text(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}
