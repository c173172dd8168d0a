//! Tolerant readers for JSON property bags.
//!
//! Animation props and pattern params arrive as free-form JSON objects. They are
//! read exactly once, when the typed props struct is built; every accessor falls
//! back to the supplied default when a key is missing, has the wrong type, or is
//! not finite. Unknown keys are ignored.

use serde_json::Value;

#[derive(Clone, Copy, Debug)]
pub struct ParamBag<'a> {
    obj: Option<&'a serde_json::Map<String, Value>>,
}

impl<'a> ParamBag<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self {
            obj: value.as_object(),
        }
    }

    pub fn empty() -> Self {
        Self { obj: None }
    }

    fn raw(&self, key: &str) -> Option<&'a Value> {
        self.obj.and_then(|o| o.get(key))
    }

    /// Numeric read: numbers and numeric strings are accepted.
    pub fn f64_or(&self, key: &str, default: f64) -> f64 {
        let parsed = match self.raw(key) {
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        match parsed {
            Some(v) if v.is_finite() => v,
            _ => default,
        }
    }

    /// Like [`ParamBag::f64_or`], then clamped to `[min, max]`.
    pub fn f64_in(&self, key: &str, default: f64, min: f64, max: f64) -> f64 {
        self.f64_or(key, default).clamp(min, max)
    }

    /// Non-negative integer read; fractional values are rounded.
    pub fn u32_or(&self, key: &str, default: u32) -> u32 {
        let v = self.f64_or(key, f64::from(default));
        if v <= 0.0 {
            0
        } else if v >= f64::from(u32::MAX) {
            u32::MAX
        } else {
            v.round() as u32
        }
    }

    pub fn u64_or(&self, key: &str, default: u64) -> u64 {
        match self.raw(key) {
            Some(Value::Number(n)) => n
                .as_u64()
                .or_else(|| n.as_f64().filter(|f| f.is_finite() && *f >= 0.0).map(|f| f as u64))
                .unwrap_or(default),
            Some(Value::String(s)) => s.trim().parse::<u64>().unwrap_or(default),
            _ => default,
        }
    }

    pub fn bool_or(&self, key: &str, default: bool) -> bool {
        match self.raw(key) {
            Some(Value::Bool(b)) => *b,
            Some(Value::String(s)) => match s.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" | "on" => true,
                "false" | "0" | "no" | "off" => false,
                _ => default,
            },
            Some(Value::Number(n)) => n.as_f64().map(|f| f != 0.0).unwrap_or(default),
            _ => default,
        }
    }

    /// Lower-cased, trimmed string value, if present.
    pub fn str_lower(&self, key: &str) -> Option<String> {
        self.raw(key)
            .and_then(Value::as_str)
            .map(|s| s.trim().to_ascii_lowercase())
            .filter(|s| !s.is_empty())
    }
}

/// Normalize an identifier so that `logSpiral`, `log_spiral` and `log-spiral` compare equal.
pub fn canonical_id(id: &str) -> String {
    id.trim()
        .chars()
        .filter(|c| *c != '_' && *c != '-' && !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/params.rs"]
mod tests;
