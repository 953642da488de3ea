// ABOUTME: Session credentials file for the login command.
// ABOUTME: Two-line records, a remark followed by the cookie, consumed in file order.

use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub remark: String,
    pub cookie: String,
}

/// Parse `{remark}\n{cookie}` records. A trailing unpaired line is ignored.
pub fn parse_credentials(content: &str) -> Vec<Credential> {
    let lines: Vec<&str> = content.lines().collect();
    lines
        .chunks_exact(2)
        .map(|pair| Credential {
            remark: pair[0].trim().to_string(),
            cookie: pair[1].trim().to_string(),
        })
        .collect()
}

pub fn load_credentials(path: &Path) -> Result<Vec<Credential>> {
    let content = std::fs::read_to_string(path)?;
    Ok(parse_credentials(&content))
}
