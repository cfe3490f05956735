use super::Sheet;
use sha2::{Digest, Sha256};

/// Hex SHA-256 of a sheet's canonical content.
///
/// Canonical form is the header and every row, cells joined by tabs and each
/// line terminated by a newline. The sheet name is included as the first line.
pub fn sheet_digest(sheet: &Sheet) -> String {
    let mut hasher = Sha256::new();
    hasher.update(sheet.name.as_bytes());
    hasher.update(b"\n");
    for line in sheet.lines() {
        hasher.update(line.join("\t").as_bytes());
        hasher.update(b"\n");
    }
    hex::encode(hasher.finalize())
}
