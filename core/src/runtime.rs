/*
 * Copyright (c) 2026 Mohamad Al-Zawahreh (dba Sovereign Systems).
 *
 * This file is part of the LSL Core runtime kernel.
 *
 * LICENSE: DUAL-LICENSED (AGPLv3 or COMMERCIAL).
 *
 * 1. OPEN SOURCE: You may use this file under the terms of the GNU Affero
 * General Public License v3.0. If you link to this code, your ENTIRE
 * application must be open-sourced under AGPLv3.
 *
 * 2. COMMERCIAL: For proprietary use, you must obtain a Commercial License
 * from Sovereign Systems.
 *
 * PATENT NOTICE: Protected by US Patent App #63/935,467.
 * NO IMPLIED LICENSE to rights of Mohamad Al-Zawahreh or Sovereign Systems.
 */

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RuntimeError {
    #[error("{0}: expected {1} arguments, got {2}")]
    ArityMismatch(&'static str, usize, usize),
    #[error("Type mismatch: expected {0}, got {1:?}")]
    TypeMismatch(String, Value),
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

/// A builtin callable exposed to the script binding layer.
pub type NativeFn = fn(Vec<Value>) -> Result<Value, RuntimeError>;

/// A 3-component vector as scripts see it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Vec3 { x, y, z }
    }

    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

/// A rotation quaternion. `s` is the scalar component.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Quat {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub s: f64,
}

impl Quat {
    pub fn new(x: f64, y: f64, z: f64, s: f64) -> Self {
        Quat { x, y, z, s }
    }

    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z + self.s * self.s).sqrt()
    }
}

/// A dynamically-typed script value.
///
/// Script lists are heterogeneous; every engine operation pattern-matches
/// over this enum explicitly rather than going through a trait object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Integer(i32),
    Float(f64),
    Str(String),
    Vector(Vec3),
    Rotation(Quat),
    List(List),
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "Integer",
            Value::Float(_) => "Float",
            Value::Str(_) => "String",
            Value::Vector(_) => "Vector",
            Value::Rotation(_) => "Rotation",
            Value::List(_) => "List",
        }
    }

    /// Coerce to a real number, the way list statistics select their input:
    /// integers and floats directly, strings through a trimmed standard
    /// decimal/exponential parse. Everything else is non-numeric.
    pub fn coerce_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            Value::Str(s) => parse_numeric_literal(s),
            _ => None,
        }
    }

    /// Symmetric cross-type equality used by sublist search. Numeric strings
    /// compare equal to the number they denote, integers compare equal to
    /// floats of the same value, and lists compare element-wise.
    pub fn loose_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Integer(a), Value::Float(b)) | (Value::Float(b), Value::Integer(a)) => {
                *a as f64 == *b
            }
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Str(s), n @ (Value::Integer(_) | Value::Float(_)))
            | (n @ (Value::Integer(_) | Value::Float(_)), Value::Str(s)) => {
                match (parse_numeric_literal(s), n.coerce_f64()) {
                    (Some(a), Some(b)) => a == b,
                    _ => false,
                }
            }
            (Value::Vector(a), Value::Vector(b)) => a == b,
            (Value::Rotation(a), Value::Rotation(b)) => a == b,
            (Value::List(a), Value::List(b)) => {
                a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| x.loose_eq(y))
            }
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    /// The script-visible textual form: floats carry six fractional digits,
    /// vectors and rotations are angle-bracketed, lists concatenate their
    /// elements with no separator.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{:.6}", x),
            Value::Str(s) => write!(f, "{}", s),
            Value::Vector(v) => write!(f, "<{:.6}, {:.6}, {:.6}>", v.x, v.y, v.z),
            Value::Rotation(r) => write!(f, "<{:.6}, {:.6}, {:.6}, {:.6}>", r.x, r.y, r.z, r.s),
            Value::List(l) => write!(f, "{}", l.join("")),
        }
    }
}

// =============================================================================
// List — ordered heterogeneous sequence with copy-on-write sharing
// =============================================================================
//
// Conceptually pure: every operation returns a NEW list and leaves the
// receiver intact, so scripts that chain operations always see independent
// snapshots. Structural sharing via Arc keeps the common clone cheap.

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct List {
    data: Arc<Vec<Value>>,
}

impl PartialEq for List {
    fn eq(&self, other: &Self) -> bool {
        // Fast path: same backing storage
        if Arc::ptr_eq(&self.data, &other.data) {
            return true;
        }
        self.data == other.data
    }
}

impl List {
    /// Create an empty list.
    pub fn new() -> Self {
        Self {
            data: Arc::new(Vec::new()),
        }
    }

    /// Create a list from existing values.
    pub fn from_vec(v: Vec<Value>) -> Self {
        Self { data: Arc::new(v) }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get element at index. Returns None if out of bounds.
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.data.get(index)
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.data.iter()
    }

    /// Convert to a Vec (snapshot).
    pub fn to_vec(&self) -> Vec<Value> {
        (*self.data).clone()
    }

    /// Return a NEW list with the element appended.
    pub fn conj(&self, value: Value) -> Self {
        let mut new_data = (*self.data).clone();
        new_data.push(value);
        Self::from_vec(new_data)
    }

    /// Return a NEW list with elements from another list appended.
    pub fn concat(&self, other: &List) -> Self {
        let mut new_data = (*self.data).clone();
        new_data.extend(other.iter().cloned());
        Self::from_vec(new_data)
    }

    /// Join the textual forms of all elements with a separator.
    pub fn join(&self, separator: &str) -> String {
        self.data
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(separator)
    }
}

impl fmt::Display for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.join(""))
    }
}

impl FromIterator<Value> for List {
    fn from_iter<T: IntoIterator<Item = Value>>(iter: T) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

/// Trimmed decimal/exponential literal parse. The word spellings the std
/// float parser also takes ("inf", "infinity", "NaN") are not numeric here.
fn parse_numeric_literal(s: &str) -> Option<f64> {
    let t = s.trim();
    let body = t
        .strip_prefix('+')
        .or_else(|| t.strip_prefix('-'))
        .unwrap_or(t);
    if !body.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return None;
    }
    t.parse::<f64>().ok()
}

// =============================================================================
// Script-style numeric prefix parsing
// =============================================================================
//
// Scripts convert strings to numbers by consuming the longest valid numeric
// prefix; trailing garbage is ignored rather than an error. "12abc" is 12.

/// Parse the leading integer of a string (optional sign, optional 0x hex).
/// No usable prefix yields 0.
pub fn parse_int_prefix(s: &str) -> i32 {
    let t = s.trim_start();
    let (neg, rest) = match t.strip_prefix('-') {
        Some(r) => (true, r),
        None => (false, t.strip_prefix('+').unwrap_or(t)),
    };
    let (radix, digits) = match rest.strip_prefix("0x").or_else(|| rest.strip_prefix("0X")) {
        Some(hex) => (16, hex),
        None => (10, rest),
    };
    let end = digits
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(digits.len());
    if end == 0 {
        return 0;
    }
    // Saturate on overflow the way 32-bit script integers do
    let magnitude = i64::from_str_radix(&digits[..end], radix).unwrap_or(i64::MAX);
    let signed = if neg { -magnitude } else { magnitude };
    signed.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

/// Parse the leading real number of a string (sign, decimal point, exponent).
/// No usable prefix yields 0.0.
pub fn parse_float_prefix(s: &str) -> f64 {
    let t = s.trim_start();
    let bytes = t.as_bytes();
    let mut end = 0usize;
    let mut seen_digit = false;
    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        seen_digit = true;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
            seen_digit = true;
        }
    }
    if seen_digit && end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp = end + 1;
        if exp < bytes.len() && (bytes[exp] == b'+' || bytes[exp] == b'-') {
            exp += 1;
        }
        let mut exp_digits = false;
        while exp < bytes.len() && bytes[exp].is_ascii_digit() {
            exp += 1;
            exp_digits = true;
        }
        if exp_digits {
            end = exp;
        }
    }
    if !seen_digit {
        return 0.0;
    }
    t[..end].parse::<f64>().unwrap_or(0.0)
}
