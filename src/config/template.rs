//! The committed `.env.example` template.

use crate::error::Result;

/// Text of `.env.example`: every key the copilot reads, with placeholders.
pub const ENV_TEMPLATE: &str = include_str!("../../.env.example");

/// Keys declared in [`ENV_TEMPLATE`], in file order.
///
/// Commented-out alternatives are not included.
pub fn template_keys() -> Result<Vec<String>> {
    let mut keys = Vec::new();
    for item in dotenvy::from_read_iter(ENV_TEMPLATE.as_bytes()) {
        let (key, _value) = item?;
        keys.push(key);
    }
    Ok(keys)
}
