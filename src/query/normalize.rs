//! Sub-state result normalization policy.
//!
//! The shape of a sub-state query result depends only on how many lookup
//! keys the caller supplied, never on the value's own shape. The tri-way
//! rule is kept as an explicit enum so it stays auditable on its own.

use serde_json::Value;

/// Normalization policy keyed on lookup-argument count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupArity {
    /// No keys: return the field's full value.
    Full,
    /// One key: return the value at that key within the field's value.
    Single,
    /// More than one key: return the field's full value. Callers pass
    /// multiple keys only to probe existence; no filtering is applied.
    Probe,
}

impl LookupArity {
    pub fn of(args: &[String]) -> Self {
        match args.len() {
            0 => LookupArity::Full,
            1 => LookupArity::Single,
            _ => LookupArity::Probe,
        }
    }
}

/// Apply the arity policy to a raw sub-state result.
///
/// Returns `None` whenever the requested field is absent (or null) in the
/// result, regardless of arity.
pub fn normalize_sub_state(result: Option<&Value>, field: &str, args: &[String]) -> Option<Value> {
    let value = match result?.get(field) {
        Some(Value::Null) | None => return None,
        Some(value) => value,
    };

    match LookupArity::of(args) {
        LookupArity::Full | LookupArity::Probe => Some(value.clone()),
        LookupArity::Single => value.get(&args[0]).cloned(),
    }
}
