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

//! Ordered-list engine.
//!
//! Range indices throughout this module are INCLUSIVE on both ends, may be
//! negative (counted from the end), and degrade silently when out of range.
//! Scripts rely on clamping and empty results, never on errors.

use crate::runtime::{List, Value};
use rand::seq::SliceRandom;
use std::cmp::Ordering;

// Statistics operation codes, as scripts pass them.
pub const LIST_STAT_RANGE: i32 = 0;
pub const LIST_STAT_MIN: i32 = 1;
pub const LIST_STAT_MAX: i32 = 2;
pub const LIST_STAT_MEAN: i32 = 3;
pub const LIST_STAT_MEDIAN: i32 = 4;
pub const LIST_STAT_STD_DEV: i32 = 5;
pub const LIST_STAT_SUM: i32 = 6;
pub const LIST_STAT_SQR_SUM: i32 = 7;
pub const LIST_STAT_NUM_COUNT: i32 = 8;
pub const LIST_STAT_GEOMETRIC_MEAN: i32 = 9;
pub const LIST_STAT_HARMONIC_MEAN: i32 = 100;

impl List {
    /// Return the inclusive sub-range `[start, end]` as a new list.
    ///
    /// Negative indices count from the end. An inverted range (`end < start`
    /// after normalization) selects the wrap-around union: the prefix up to
    /// `end` followed by the tail from `start`.
    pub fn get_sublist(&self, start: i32, end: i32) -> List {
        let len = self.len() as i32;
        let mut start = start;
        let mut end = end;
        if start < 0 {
            start += len;
        }
        if end < 0 {
            end += len;
        }

        if start <= end {
            if start >= len {
                return List::new();
            }
            if end >= len {
                end = len - 1;
            }
            if start < 0 {
                start = 0;
            }
            if end < start {
                return List::new();
            }
            List::from_vec(self.as_slice()[start as usize..=end as usize].to_vec())
        } else {
            // Segmented case: 0..=end plus start..end-of-list
            let prefix = if end < 0 {
                // A still-negative end means no prefix; if start is also
                // still negative the whole list survives.
                if start < 0 {
                    return self.clone();
                }
                List::new()
            } else {
                self.get_sublist(0, end)
            };
            if start >= len {
                return prefix;
            }
            prefix.concat(&self.get_sublist(start, len - 1))
        }
    }

    /// Strided selection over the inclusive range `[start, end]`.
    ///
    /// The scan always walks the whole list at `stride` intervals; members
    /// are selected only when they fall inside the range. A negative stride
    /// reverses the scan direction, and an inverted range selects from both
    /// the leading and trailing segments (two-pass case).
    pub fn strided(&self, start: i32, end: i32, stride: i32) -> List {
        let len = self.len() as i32;
        if len == 0 {
            return List::new();
        }
        let mut start = start;
        let mut end = end;
        if start < 0 {
            start += len;
        }
        if end < 0 {
            end += len;
        }
        if start > len - 1 {
            start = len - 1;
        }
        if end > len - 1 {
            end = len - 1;
        }
        let stride = if stride == 0 { 1 } else { stride };

        let mut result = Vec::new();
        if start != end {
            let (lo, hi, lo2, hi2, twopass) = if start <= end {
                (start, end, 0, 0, false)
            } else {
                (0, end, start, len, true)
            };
            if stride > 0 {
                let mut i = 0;
                while i < len {
                    if i >= lo && i <= hi {
                        result.push(self.as_slice()[i as usize].clone());
                    }
                    if twopass && i >= lo2 && i <= hi2 {
                        result.push(self.as_slice()[i as usize].clone());
                    }
                    i += stride;
                }
            } else {
                let mut i = len - 1;
                while i >= 0 {
                    if i >= lo && i <= hi {
                        result.push(self.as_slice()[i as usize].clone());
                    }
                    if twopass && i >= lo2 && i <= hi2 {
                        result.push(self.as_slice()[i as usize].clone());
                    }
                    i += stride;
                }
            }
        } else if start >= 0 && start < len && start % stride == 0 {
            result.push(self.as_slice()[start as usize].clone());
        }
        List::from_vec(result)
    }

    /// Return a NEW list with `src` spliced in before `index`.
    ///
    /// A negative index is normalized and then clamped to the front; an
    /// index at or past the end appends.
    pub fn insert(&self, src: &List, index: i32) -> List {
        let mut index = index;
        if index < 0 {
            index += self.len() as i32;
            if index < 0 {
                index = 0;
            }
        }

        if index != 0 {
            let prefix = self.get_sublist(0, index - 1);
            if (index as usize) < self.len() {
                prefix.concat(src).concat(&self.get_sublist(index, -1))
            } else {
                prefix.concat(src)
            }
        } else if !self.is_empty() {
            src.concat(&self.get_sublist(0, -1))
        } else {
            src.clone()
        }
    }

    /// Replace the inclusive range `[start, end]` with `src`.
    ///
    /// When `start > end` the removed region is inverted: only the fragment
    /// strictly between `end` and `start` survives, with `src` appended
    /// (delete-outside semantics).
    pub fn replace(&self, src: &List, start: i32, end: i32) -> List {
        let len = self.len() as i32;
        let mut start = start;
        let mut end = end;
        // Both indices can still be negative after this.
        if start < 0 {
            start += len;
        }
        if end < 0 {
            end += len;
        }

        if start <= end {
            if start > 0 {
                let prefix = self.get_sublist(0, start - 1);
                if end + 1 < len {
                    prefix.concat(src).concat(&self.get_sublist(end + 1, -1))
                } else {
                    prefix.concat(src)
                }
            } else {
                // No surviving prefix; the replacement leads.
                if end + 1 < len {
                    src.concat(&self.get_sublist(end + 1, -1))
                } else {
                    src.clone()
                }
            }
        } else {
            self.get_sublist(end + 1, start - 1).concat(src)
        }
    }

    /// First index where `test` occurs as a contiguous sub-sequence, under
    /// the symmetric loose equality. -1 when either list is empty or no
    /// window matches.
    pub fn index_of(&self, test: &List) -> i32 {
        if self.is_empty() || test.is_empty() || test.len() > self.len() {
            return -1;
        }
        let src = self.as_slice();
        let pat = test.as_slice();
        for i in 0..=(src.len() - pat.len()) {
            if src[i..i + pat.len()]
                .iter()
                .zip(pat.iter())
                .all(|(a, b)| a.loose_eq(b) || b.loose_eq(a))
            {
                return i as i32;
            }
        }
        -1
    }

    /// Sort records of `stride` elements by their first field.
    ///
    /// Keys of different types never reorder relative to each other: each
    /// type's records sort stably among the positions that type already
    /// occupies (the feathered ordering scripts expect from mixed lists).
    /// A length that is not a multiple of the stride returns the list as is.
    pub fn sort(&self, stride: i32, ascending: bool) -> List {
        let stride = if stride <= 0 { 1 } else { stride } as usize;
        if self.is_empty() {
            return List::new();
        }
        if self.len() % stride != 0 {
            return self.clone();
        }

        let records: Vec<&[Value]> = self.as_slice().chunks(stride).collect();

        // Key-type classes in order of first appearance
        let mut classes: Vec<std::mem::Discriminant<Value>> = Vec::new();
        for rec in &records {
            let d = std::mem::discriminant(&rec[0]);
            if !classes.contains(&d) {
                classes.push(d);
            }
        }

        let mut placed: Vec<Option<&[Value]>> = vec![None; records.len()];
        for class in classes {
            let slots: Vec<usize> = (0..records.len())
                .filter(|&i| std::mem::discriminant(&records[i][0]) == class)
                .collect();
            let mut members: Vec<&[Value]> = slots.iter().map(|&i| records[i]).collect();
            // Stable within a class; the per-type comparators are total
            members.sort_by(|a, b| {
                let ord = compare_sort_keys(&a[0], &b[0]);
                if ascending {
                    ord
                } else {
                    ord.reverse()
                }
            });
            for (slot, rec) in slots.into_iter().zip(members) {
                placed[slot] = Some(rec);
            }
        }

        placed
            .into_iter()
            .flatten()
            .flat_map(|rec| rec.iter().cloned())
            .collect()
    }

    /// Shuffle whole records of `stride` elements, preserving each record's
    /// internal order. A length that is not a multiple of the stride, or a
    /// stride covering the whole list, returns the list unchanged.
    pub fn randomize(&self, stride: i32) -> List {
        let stride = if stride <= 0 { 1 } else { stride } as usize;
        if self.len() == stride || self.len() % stride != 0 {
            return self.clone();
        }
        let mut chunks: Vec<&[Value]> = self.as_slice().chunks(stride).collect();
        chunks.shuffle(&mut rand::thread_rng());
        chunks.into_iter().flatten().cloned().collect()
    }

    /// Descriptive statistic over the numeric elements of the list.
    ///
    /// Non-numeric elements are silently excluded. Unknown operation codes
    /// and empty numeric input yield 0.0.
    pub fn statistics(&self, operation: i32) -> f64 {
        let nums: Vec<f64> = self.iter().filter_map(|v| v.coerce_f64()).collect();
        let n = nums.len() as f64;
        if nums.is_empty() {
            return 0.0;
        }
        let sum: f64 = nums.iter().sum();
        match operation {
            LIST_STAT_RANGE => max_of(&nums) - min_of(&nums),
            LIST_STAT_MIN => min_of(&nums),
            LIST_STAT_MAX => max_of(&nums),
            LIST_STAT_MEAN => sum / n,
            LIST_STAT_MEDIAN => {
                let mut sorted = nums.clone();
                sorted.sort_by(f64::total_cmp);
                let mid = sorted.len() / 2;
                if sorted.len() % 2 == 1 {
                    sorted[mid]
                } else {
                    (sorted[mid - 1] + sorted[mid]) / 2.0
                }
            }
            LIST_STAT_STD_DEV => {
                // Population form
                let mean = sum / n;
                let var = nums.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>() / n;
                var.sqrt()
            }
            LIST_STAT_SUM => sum,
            LIST_STAT_SQR_SUM => nums.iter().map(|x| x * x).sum(),
            LIST_STAT_NUM_COUNT => n,
            LIST_STAT_GEOMETRIC_MEAN => {
                let product: f64 = nums.iter().product();
                let gm = product.powf(1.0 / n);
                if gm.is_finite() {
                    gm
                } else {
                    0.0
                }
            }
            LIST_STAT_HARMONIC_MEAN => {
                let recip: f64 = nums.iter().map(|x| 1.0 / x).sum();
                let hm = n / recip;
                if hm.is_finite() {
                    hm
                } else {
                    0.0
                }
            }
            _ => 0.0,
        }
    }

    /// Comma-separated textual form, `", "` between elements.
    pub fn to_csv(&self) -> String {
        self.join(", ")
    }

    /// Split a comma-separated string into a list of string entries.
    ///
    /// Commas inside `<...>` brackets (vectors, rotations) do not split;
    /// each entry is trimmed.
    pub fn from_csv(src: &str) -> List {
        let mut result = Vec::new();
        let mut depth = 0u32;
        let mut current = String::new();
        for c in src.chars() {
            match c {
                '<' => {
                    depth += 1;
                    current.push(c);
                }
                '>' => {
                    depth = depth.saturating_sub(1);
                    current.push(c);
                }
                ',' if depth == 0 => {
                    result.push(Value::Str(current.trim().to_string()));
                    current.clear();
                }
                _ => current.push(c),
            }
        }
        result.push(Value::Str(current.trim().to_string()));
        List::from_vec(result)
    }
}

/// Ordering for same-type sort keys. Vectors and rotations order by
/// magnitude; list keys have no defined order and stay put.
fn compare_sort_keys(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Integer(x), Value::Integer(y)) => x.cmp(y),
        (Value::Float(x), Value::Float(y)) => x.total_cmp(y),
        (Value::Str(x), Value::Str(y)) => x.cmp(y),
        (Value::Vector(x), Value::Vector(y)) => x.magnitude().total_cmp(&y.magnitude()),
        (Value::Rotation(x), Value::Rotation(y)) => x.magnitude().total_cmp(&y.magnitude()),
        _ => Ordering::Equal,
    }
}

fn min_of(nums: &[f64]) -> f64 {
    nums.iter().cloned().fold(f64::INFINITY, f64::min)
}

fn max_of(nums: &[f64]) -> f64 {
    nums.iter().cloned().fold(f64::NEG_INFINITY, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ints(v: &[i32]) -> List {
        List::from_vec(v.iter().map(|i| Value::Integer(*i)).collect())
    }

    // --- get_sublist ---

    #[test]
    fn test_sublist_basic() {
        let l = ints(&[10, 20, 30, 40, 50]);
        assert_eq!(l.get_sublist(1, 3), ints(&[20, 30, 40]));
        assert_eq!(l.get_sublist(0, 4), l);
    }

    #[test]
    fn test_sublist_single_element() {
        let l = ints(&[10, 20, 30]);
        for i in 0..3 {
            assert_eq!(l.get_sublist(i, i), ints(&[10 + 10 * i]));
        }
        assert_eq!(l.get_sublist(-1, -1), ints(&[30]));
    }

    #[test]
    fn test_sublist_negative_indices() {
        let l = ints(&[1, 2, 3, 4]);
        assert_eq!(l.get_sublist(-2, -1), ints(&[3, 4]));
        assert_eq!(l.get_sublist(1, -2), ints(&[2, 3]));
    }

    #[test]
    fn test_sublist_out_of_range() {
        let l = ints(&[1, 2, 3]);
        assert_eq!(l.get_sublist(5, 9), List::new());
        assert_eq!(l.get_sublist(1, 99), ints(&[2, 3]));
        assert_eq!(List::new().get_sublist(0, 0), List::new());
        assert_eq!(List::new().get_sublist(-1, -1), List::new());
    }

    #[test]
    fn test_sublist_inverted_wraps() {
        let l = ints(&[1, 2, 3, 4, 5]);
        // Prefix [0..=1] plus tail [3..]
        assert_eq!(l.get_sublist(3, 1), ints(&[1, 2, 4, 5]));
        // Inverted range with both indices still negative keeps the whole list
        assert_eq!(l.get_sublist(-7, -9), l);
    }

    // --- strided ---

    #[test]
    fn test_strided_identity() {
        let l = ints(&[1, 2, 3, 4, 5]);
        assert_eq!(l.strided(0, 4, 1), l);
    }

    #[test]
    fn test_strided_every_other() {
        let l = ints(&[1, 2, 3, 4, 5, 6]);
        assert_eq!(l.strided(0, 5, 2), ints(&[1, 3, 5]));
        // Zero stride behaves as one
        assert_eq!(l.strided(0, 5, 0), l);
    }

    #[test]
    fn test_strided_negative_reverses() {
        let l = ints(&[1, 2, 3, 4, 5, 6]);
        assert_eq!(l.strided(0, 5, -2), ints(&[6, 4, 2]));
    }

    #[test]
    fn test_strided_twopass() {
        let l = ints(&[1, 2, 3, 4, 5, 6]);
        // start > end: both the prefix [0..=1] and the tail [4..] qualify
        assert_eq!(l.strided(4, 1, 2), ints(&[1, 5]));
    }

    #[test]
    fn test_strided_single_index() {
        let l = ints(&[1, 2, 3, 4]);
        assert_eq!(l.strided(2, 2, 2), ints(&[3]));
        assert_eq!(l.strided(3, 3, 2), List::new()); // 3 % 2 != 0
        assert_eq!(List::new().strided(0, 0, 1), List::new());
    }

    // --- insert ---

    #[test]
    fn test_insert_middle() {
        let dest = ints(&[1, 4]);
        let src = ints(&[2, 3]);
        assert_eq!(dest.insert(&src, 1), ints(&[1, 2, 3, 4]));
    }

    #[test]
    fn test_insert_front_and_back() {
        let dest = ints(&[2, 3]);
        assert_eq!(dest.insert(&ints(&[1]), 0), ints(&[1, 2, 3]));
        assert_eq!(dest.insert(&ints(&[4]), 2), ints(&[2, 3, 4]));
        assert_eq!(dest.insert(&ints(&[4]), 99), ints(&[2, 3, 4]));
    }

    #[test]
    fn test_insert_negative_index() {
        let dest = ints(&[1, 2, 4]);
        assert_eq!(dest.insert(&ints(&[3]), -1), ints(&[1, 2, 3, 4]));
        // Clamped to the front when still negative
        assert_eq!(dest.insert(&ints(&[0]), -99), ints(&[0, 1, 2, 4]));
    }

    #[test]
    fn test_insert_into_empty() {
        assert_eq!(List::new().insert(&ints(&[1]), 0), ints(&[1]));
    }

    // --- replace ---

    #[test]
    fn test_replace_single() {
        let dest = ints(&[1, 2, 3]);
        let src = ints(&[9, 9]);
        let out = dest.replace(&src, 1, 1);
        assert_eq!(out, ints(&[1, 9, 9, 3]));
        assert_eq!(out.len(), dest.len() - 1 + src.len());
    }

    #[test]
    fn test_replace_range_and_edges() {
        let dest = ints(&[1, 2, 3, 4, 5]);
        assert_eq!(dest.replace(&ints(&[0]), 0, 1), ints(&[0, 3, 4, 5]));
        assert_eq!(dest.replace(&ints(&[0]), 3, 4), ints(&[1, 2, 3, 0]));
        assert_eq!(dest.replace(&ints(&[0]), 0, 4), ints(&[0]));
        assert_eq!(dest.replace(&List::new(), 1, 3), ints(&[1, 5]));
    }

    #[test]
    fn test_replace_inverted_keeps_between() {
        let dest = ints(&[1, 2, 3, 4, 5]);
        // start=3 > end=1: only dest[2..=2] survives, src appended
        assert_eq!(dest.replace(&ints(&[9]), 3, 1), ints(&[3, 9]));
    }

    #[test]
    fn test_replace_negative_indices() {
        let dest = ints(&[1, 2, 3, 4]);
        assert_eq!(dest.replace(&ints(&[9]), -2, -1), ints(&[1, 2, 9]));
    }

    // --- index_of ---

    #[test]
    fn test_index_of() {
        let src = ints(&[1, 2, 3, 4]);
        assert_eq!(src.index_of(&ints(&[2, 3])), 1);
        assert_eq!(src.index_of(&ints(&[1])), 0);
        assert_eq!(src.index_of(&ints(&[4, 5])), -1);
        assert_eq!(src.index_of(&List::new()), -1);
        assert_eq!(List::new().index_of(&ints(&[1])), -1);
    }

    #[test]
    fn test_index_of_cross_type() {
        let src = List::from_vec(vec![
            Value::Str("a".to_string()),
            Value::Str("2".to_string()),
            Value::Float(3.0),
        ]);
        let test = List::from_vec(vec![Value::Integer(2), Value::Integer(3)]);
        assert_eq!(src.index_of(&test), 1);
    }

    // --- sort ---

    #[test]
    fn test_sort_ascending_descending() {
        let l = ints(&[3, 1, 2]);
        assert_eq!(l.sort(1, true), ints(&[1, 2, 3]));
        assert_eq!(l.sort(1, false), ints(&[3, 2, 1]));
    }

    #[test]
    fn test_sort_strided_records() {
        let l = List::from_vec(vec![
            Value::Integer(2),
            Value::Str("b".to_string()),
            Value::Integer(1),
            Value::Str("a".to_string()),
        ]);
        let sorted = l.sort(2, true);
        assert_eq!(
            sorted,
            List::from_vec(vec![
                Value::Integer(1),
                Value::Str("a".to_string()),
                Value::Integer(2),
                Value::Str("b".to_string()),
            ])
        );
    }

    #[test]
    fn test_sort_uneven_stride_is_noop() {
        let l = ints(&[3, 1, 2]);
        assert_eq!(l.sort(2, true), l);
    }

    #[test]
    fn test_sort_mixed_types_feathered() {
        // Cross-type keys never reorder relative to each other; each type
        // sorts within itself.
        let l = List::from_vec(vec![
            Value::Integer(3),
            Value::Str("b".to_string()),
            Value::Integer(1),
            Value::Str("a".to_string()),
        ]);
        let sorted = l.sort(1, true);
        assert_eq!(
            sorted,
            List::from_vec(vec![
                Value::Integer(1),
                Value::Str("a".to_string()),
                Value::Integer(3),
                Value::Str("b".to_string()),
            ])
        );
    }

    // --- randomize ---

    #[test]
    fn test_randomize_permutes_whole_chunks() {
        let l = ints(&[1, 2, 3, 4, 5, 6]);
        let shuffled = l.randomize(2);
        assert_eq!(shuffled.len(), 6);

        // Every original chunk must appear intact
        let chunks: Vec<&[Value]> = l.as_slice().chunks(2).collect();
        let out: Vec<&[Value]> = shuffled.as_slice().chunks(2).collect();
        for chunk in &chunks {
            assert!(out.contains(chunk));
        }
        // Original untouched
        assert_eq!(l, ints(&[1, 2, 3, 4, 5, 6]));
    }

    #[test]
    fn test_randomize_noop_cases() {
        let l = ints(&[1, 2, 3, 4, 5]);
        assert_eq!(l.randomize(2), l); // 5 % 2 != 0
        assert_eq!(l.randomize(5), l); // stride == length
    }

    // --- statistics ---

    #[test]
    fn test_statistics_basics() {
        let l = ints(&[1, 2, 3]);
        assert_eq!(l.statistics(LIST_STAT_MEAN), 2.0);
        assert_eq!(l.statistics(LIST_STAT_SUM), 6.0);
        assert_eq!(l.statistics(LIST_STAT_MIN), 1.0);
        assert_eq!(l.statistics(LIST_STAT_MAX), 3.0);
        assert_eq!(l.statistics(LIST_STAT_RANGE), 2.0);
        assert_eq!(l.statistics(LIST_STAT_SQR_SUM), 14.0);
        assert_eq!(l.statistics(LIST_STAT_NUM_COUNT), 3.0);
    }

    #[test]
    fn test_statistics_median() {
        assert_eq!(ints(&[1, 2, 3, 4]).statistics(LIST_STAT_MEDIAN), 2.5);
        assert_eq!(ints(&[3, 1, 2]).statistics(LIST_STAT_MEDIAN), 2.0);
    }

    #[test]
    fn test_statistics_std_dev_population() {
        // Population std dev of [2, 4, 4, 4, 5, 5, 7, 9] is exactly 2
        let l = ints(&[2, 4, 4, 4, 5, 5, 7, 9]);
        assert!((l.statistics(LIST_STAT_STD_DEV) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_statistics_means() {
        let l = ints(&[1, 2, 4]);
        assert!((l.statistics(LIST_STAT_GEOMETRIC_MEAN) - 2.0).abs() < 1e-12);
        let h = ints(&[1, 2, 4]).statistics(LIST_STAT_HARMONIC_MEAN);
        assert!((h - 3.0 / 1.75).abs() < 1e-12);
    }

    #[test]
    fn test_statistics_excludes_non_numeric() {
        let l = List::from_vec(vec![
            Value::Integer(1),
            Value::Str("oops".to_string()),
            Value::Str("3".to_string()),
            Value::Vector(crate::runtime::Vec3::new(9.0, 9.0, 9.0)),
        ]);
        assert_eq!(l.statistics(LIST_STAT_NUM_COUNT), 2.0);
        assert_eq!(l.statistics(LIST_STAT_SUM), 4.0);
    }

    #[test]
    fn test_statistics_degenerate() {
        assert_eq!(ints(&[1, 2, 3]).statistics(77), 0.0); // unknown op
        assert_eq!(List::new().statistics(LIST_STAT_SUM), 0.0);
        let strings = List::from_vec(vec![Value::Str("a".to_string())]);
        assert_eq!(strings.statistics(LIST_STAT_MEAN), 0.0);
    }

    // --- csv ---

    #[test]
    fn test_csv_round() {
        let l = List::from_vec(vec![
            Value::Integer(1),
            Value::Str("two".to_string()),
            Value::Vector(crate::runtime::Vec3::new(1.0, 2.0, 3.0)),
        ]);
        let csv = l.to_csv();
        assert_eq!(csv, "1, two, <1.000000, 2.000000, 3.000000>");

        let back = List::from_csv(&csv);
        assert_eq!(
            back,
            List::from_vec(vec![
                Value::Str("1".to_string()),
                Value::Str("two".to_string()),
                Value::Str("<1.000000, 2.000000, 3.000000>".to_string()),
            ])
        );
    }

    #[test]
    fn test_csv_empty_entries() {
        assert_eq!(
            List::from_csv("a,,b"),
            List::from_vec(vec![
                Value::Str("a".to_string()),
                Value::Str(String::new()),
                Value::Str("b".to_string()),
            ])
        );
        assert_eq!(
            List::from_csv(""),
            List::from_vec(vec![Value::Str(String::new())])
        );
    }
}
