//! Predicates for primitive field shapes.

/// True when the string holds something other than whitespace.
pub fn is_non_empty(value: &str) -> bool {
    !value.trim().is_empty()
}

pub fn is_non_zero(value: i64) -> bool {
    value != 0
}

pub fn is_negative(value: i64) -> bool {
    value < 0
}

/// Exact, case-sensitive membership in `set`.
pub fn is_one_of(value: &str, set: &[&str]) -> bool {
    set.contains(&value)
}
