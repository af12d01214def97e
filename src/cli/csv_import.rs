//! Firefox `logins.csv` parsing.
//!
//! Firefox exports one header row followed by one row per login with
//! exactly nine columns:
//!
//! `url, username, password, httpRealm, formActionOrigin, guid,
//!  timeCreated, timeLastUsed, timePasswordChanged`
//!
//! Rows with any other column count are rejected, never padded or cut.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::errors::{FfPwdError, Result};
use crate::vault::Login;

/// Read every login from the CSV file at `path`.
pub fn read_logins_csv(path: &Path) -> Result<Vec<Login>> {
    if !path.exists() {
        return Err(FfPwdError::CommandFailed(format!(
            "import file not found: {}",
            path.display()
        )));
    }

    let file = File::open(path)?;
    parse_logins(BufReader::new(file))
}

/// Parse logins from CSV text.  The first row is a header and is skipped.
pub fn parse_logins<R: Read>(reader: R) -> Result<Vec<Login>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        // Column counts are checked per row so the error names the line.
        .flexible(true)
        .from_reader(reader);

    if rdr.headers()?.is_empty() {
        return Err(FfPwdError::CsvError(
            "import file is empty, expected a header row".into(),
        ));
    }

    let mut logins = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let line = record.position().map_or(0, |p| p.line());
        logins.push(Login::from_row(record.iter(), line)?);
    }

    Ok(logins)
}
