//! Dot-notation path lookup into JSON documents.
//!
//! Keys may contain `:` and `-` (YANG module-qualified names such as
//! `ietf-restconf:errors`); only `.` separates segments.

use serde_json::Value;

/// Path mapper for extracting values from JSON using dot-notation paths
pub struct PathMapper;

impl PathMapper {
    /// Get value from JSON using dot-notation path (supports array indexing)
    ///
    /// Examples:
    /// - "ietf-restconf:errors.error"
    /// - "ietf-restconf:errors.error[0].error-tag"
    /// - "ietf-yang-patch:yang-patch-status.errors.error.0"
    pub fn get_path<'a>(obj: &'a Value, path: &str) -> Option<&'a Value> {
        if path.is_empty() {
            return None;
        }

        // Remove leading "$." if present (JSONPath style)
        let normalized = path.trim().trim_start_matches("$.");
        let mut current = obj;

        for part in normalized.split('.') {
            if part.is_empty() {
                return None;
            }

            // Check if part contains array index, e.g., "error[0]"
            if let Some(bracket_pos) = part.find('[') {
                let key = &part[..bracket_pos];
                let idx_str = part[bracket_pos + 1..].trim_end_matches(']');

                if !key.is_empty() {
                    current = current.as_object()?.get(key)?;
                }

                let idx = idx_str.parse::<usize>().ok()?;
                current = current.as_array()?.get(idx)?;
            } else {
                match current {
                    Value::Object(map) => {
                        current = map.get(part)?;
                    }
                    Value::Array(arr) => {
                        current = arr.get(part.parse::<usize>().ok()?)?;
                    }
                    _ => return None,
                }
            }
        }

        Some(current)
    }

    /// Get string value from path (converts non-strings to their JSON text)
    pub fn get_string(obj: &Value, path: &str) -> Option<String> {
        Self::get_path(obj, path).and_then(|v| match v {
            Value::String(s) => Some(s.clone()),
            Value::Null => None,
            other => serde_json::to_string(other).ok(),
        })
    }
}
