//! Profile identifiers and the folder-name encoding used inside
//! `.streamDeckProfile` archives.
//!
//! Newer Stream Deck releases no longer name a profile's directory after its
//! UUID. The directory name is a 27 character string derived from the UUID;
//! Elgato has not documented the scheme, so [`folder_name`] reproduces it from
//! UUID/directory pairs taken out of exported profiles.

use tracing::trace;
use uuid::Uuid;

use crate::error::{GenError, Result};

/// Length of the encoded part of a folder name, before the suffix.
const ENCODED_LEN: usize = 26;

/// Every folder name ends in this character.
const FOLDER_SUFFIX: char = 'Z';

/// Generates a fresh random profile identifier (UUID v4).
pub fn new_profile_id() -> Uuid {
    Uuid::new_v4()
}

/// Identifier written into every action's `ActionID`.
///
/// Exported profiles carry the nil UUID here, and the app accepts it.
pub const fn action_id() -> Uuid {
    Uuid::nil()
}

/// Derives the archive directory name for a profile.
pub fn folder_name(id: &Uuid) -> String {
    // 32 hex digits + 3 of padding = 7 groups of 20 bits
    let mut hex = id.simple().to_string();
    hex.push_str("000");

    let mut encoded = String::with_capacity(28);
    for chunk in hex.as_bytes().chunks(5) {
        let group = chunk
            .iter()
            .fold(0u32, |acc, &b| (acc << 4) | hex_value(b));
        encoded.push_str(&base32_group(group));
    }
    encoded.truncate(ENCODED_LEN);

    // The app's alphabet skips U; the order of these two replacements matters.
    let mut name = encoded
        .to_uppercase()
        .replace('V', "W")
        .replace('U', "V");
    name.push(FOLDER_SUFFIX);

    trace!(%id, folder = %name, "Encoded profile folder name");
    name
}

/// Parses a textual UUID and derives its folder name.
pub fn folder_name_str(id: &str) -> Result<String> {
    let uuid = Uuid::parse_str(id.trim()).map_err(|e| GenError::InvalidProfileId {
        value: id.to_string(),
        reason: e.to_string(),
    })?;
    Ok(folder_name(&uuid))
}

/// Encodes a 20-bit group as four lowercase base-32 digits (`0-9a-v`).
fn base32_group(group: u32) -> String {
    (0..4)
        .rev()
        .map(|i| {
            let digit = (group >> (i * 5)) & 0x1f;
            char::from_digit(digit, 32).unwrap_or('0')
        })
        .collect()
}

const fn hex_value(b: u8) -> u32 {
    match b {
        b'0'..=b'9' => (b - b'0') as u32,
        b'a'..=b'f' => (b - b'a' + 10) as u32,
        b'A'..=b'F' => (b - b'A' + 10) as u32,
        _ => 0,
    }
}
