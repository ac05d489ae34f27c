//! JSON test vector loader shared by sanitizer tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::fs;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct VectorFile {
    pub description: String,
    pub cases: Vec<SanitizeCase>,
}

#[derive(Debug, Deserialize)]
pub struct SanitizeCase {
    pub input: String,
    /// `None` means the sanitizer must reject.
    #[serde(default)]
    pub expect: Option<String>,
    /// Expected deny-listed scheme for rejections, if any.
    #[serde(default)]
    pub scheme: Option<String>,
}

pub fn load(name: &str) -> VectorFile {
    let s = fs::read_to_string(format!("tests/vectors/{name}")).unwrap();
    serde_json::from_str(&s).unwrap()
}
