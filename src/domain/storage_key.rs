//! Mapping between list names and storage keys
//!
//! A list named `Groceries` is stored under `Groceries.json`. Characters that
//! are unsafe in a file name are escaped as `%XX` (one escape per UTF-8 byte),
//! as is `%` itself and a leading `.`. Decoding only accepts the canonical
//! encoding of some name, so names and keys are in one-to-one correspondence.

/// Suffix carried by every list record key
pub const RECORD_SUFFIX: &str = ".json";

fn needs_escape(c: char, first: bool) -> bool {
    matches!(c, '%' | '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|')
        || c.is_control()
        || (first && c == '.')
}

/// Encode a list name into its record key
pub fn key_for_name(name: &str) -> String {
    let mut key = String::with_capacity(name.len() + RECORD_SUFFIX.len());

    for (i, c) in name.chars().enumerate() {
        if needs_escape(c, i == 0) {
            let mut buf = [0u8; 4];
            for byte in c.encode_utf8(&mut buf).bytes() {
                key.push_str(&format!("%{:02X}", byte));
            }
        } else {
            key.push(c);
        }
    }

    key.push_str(RECORD_SUFFIX);
    key
}

/// Decode a record key back into a list name.
///
/// Returns `None` for keys without the record suffix, malformed escapes,
/// empty names, and keys that are not the canonical encoding of their name.
pub fn name_for_key(key: &str) -> Option<String> {
    let stem = key.strip_suffix(RECORD_SUFFIX)?;
    if stem.is_empty() {
        return None;
    }

    let mut bytes = Vec::with_capacity(stem.len());
    let raw = stem.as_bytes();
    let mut i = 0;
    while i < raw.len() {
        if raw[i] == b'%' {
            let hex = stem.get(i + 1..i + 3)?;
            if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
                return None;
            }
            bytes.push(u8::from_str_radix(hex, 16).ok()?);
            i += 3;
        } else {
            bytes.push(raw[i]);
            i += 1;
        }
    }

    let name = String::from_utf8(bytes).ok()?;

    if key_for_name(&name) == key {
        Some(name)
    } else {
        None
    }
}
