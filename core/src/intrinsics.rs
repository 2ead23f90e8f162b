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

//! Script-facing builtin dispatch.
//!
//! Each builtin validates arity and argument types once, at this boundary,
//! then hands off to the engines. The engines themselves never error; the
//! only failures a caller can see here are malformed calls.

use crate::base64;
use crate::json;
use crate::list;
use crate::runtime::{parse_float_prefix, parse_int_prefix, List, NativeFn, RuntimeError, Value};
use crate::tokenize;

pub struct BuiltinRegistry;

impl BuiltinRegistry {
    /// Look up a builtin by its script name (or short alias).
    pub fn resolve(name: &str) -> Option<NativeFn> {
        Some(match name {
            "llGetListLength" | "list.length" => builtin_get_list_length,
            "llList2List" | "list.sublist" => builtin_list_to_list,
            "llList2ListStrided" | "list.strided" => builtin_list_to_list_strided,
            "llListInsertList" | "list.insert" => builtin_list_insert_list,
            "llListReplaceList" | "list.replace" => builtin_list_replace_list,
            "llListFindList" | "list.find" => builtin_list_find_list,
            "llListSort" | "list.sort" => builtin_list_sort,
            "llListRandomize" | "list.randomize" => builtin_list_randomize,
            "llListStatistics" | "list.statistics" => builtin_list_statistics,
            "llList2String" => builtin_list_to_string,
            "llList2Integer" => builtin_list_to_integer,
            "llList2Float" => builtin_list_to_float,
            "llDumpList2String" | "list.dump" => builtin_dump_list_to_string,
            "llList2CSV" => builtin_list_to_csv,
            "llCSV2List" => builtin_csv_to_list,
            "llParseString2List" | "string.parse" => builtin_parse_string_to_list,
            "llParseStringKeepNulls" => builtin_parse_string_keep_nulls,
            "llJsonGetValue" | "json.get" => builtin_json_get_value,
            "llJsonSetValue" | "json.set" => builtin_json_set_value,
            "llJsonValueType" | "json.type" => builtin_json_value_type,
            "llJson2List" => builtin_json_to_list,
            "llList2Json" => builtin_list_to_json,
            "llIntegerToBase64" | "base64.encode" => builtin_integer_to_base64,
            "llBase64ToInteger" | "base64.decode" => builtin_base64_to_integer,
            _ => return None,
        })
    }
}

// ====== Argument extraction ======

fn check_arity(name: &'static str, args: &[Value], want: usize) -> Result<(), RuntimeError> {
    if args.len() != want {
        return Err(RuntimeError::ArityMismatch(name, want, args.len()));
    }
    Ok(())
}

fn take_list(v: Value) -> Result<List, RuntimeError> {
    match v {
        Value::List(l) => Ok(l),
        other => Err(RuntimeError::TypeMismatch("List".to_string(), other)),
    }
}

fn take_str(v: Value) -> Result<String, RuntimeError> {
    match v {
        Value::Str(s) => Ok(s),
        other => Err(RuntimeError::TypeMismatch("String".to_string(), other)),
    }
}

fn take_int(v: &Value) -> Result<i32, RuntimeError> {
    match v {
        Value::Integer(i) => Ok(*i),
        Value::Float(f) => Ok(*f as i32),
        other => Err(RuntimeError::TypeMismatch(
            "Integer".to_string(),
            other.clone(),
        )),
    }
}

/// Delimiter lists arrive as script lists; every entry participates in its
/// textual form.
fn delimiter_strings(v: Value) -> Result<Vec<String>, RuntimeError> {
    Ok(take_list(v)?.iter().map(|v| v.to_string()).collect())
}

/// Normalize a possibly-negative element index. None when out of range.
fn element_at(l: &List, index: i32) -> Option<&Value> {
    let len = l.len() as i32;
    let index = if index < 0 { index + len } else { index };
    if index < 0 || index >= len {
        return None;
    }
    l.get(index as usize)
}

// ====== List engine ======

pub fn builtin_get_list_length(args: Vec<Value>) -> Result<Value, RuntimeError> {
    check_arity("llGetListLength", &args, 1)?;
    let mut args = args.into_iter();
    let l = take_list(args.next().unwrap_or(Value::List(List::new())))?;
    Ok(Value::Integer(l.len() as i32))
}

pub fn builtin_list_to_list(args: Vec<Value>) -> Result<Value, RuntimeError> {
    check_arity("llList2List", &args, 3)?;
    let start = take_int(&args[1])?;
    let end = take_int(&args[2])?;
    let mut args = args.into_iter();
    let l = take_list(args.next().unwrap_or(Value::List(List::new())))?;
    Ok(Value::List(l.get_sublist(start, end)))
}

pub fn builtin_list_to_list_strided(args: Vec<Value>) -> Result<Value, RuntimeError> {
    check_arity("llList2ListStrided", &args, 4)?;
    let start = take_int(&args[1])?;
    let end = take_int(&args[2])?;
    let stride = take_int(&args[3])?;
    let mut args = args.into_iter();
    let l = take_list(args.next().unwrap_or(Value::List(List::new())))?;
    Ok(Value::List(l.strided(start, end, stride)))
}

pub fn builtin_list_insert_list(args: Vec<Value>) -> Result<Value, RuntimeError> {
    check_arity("llListInsertList", &args, 3)?;
    let index = take_int(&args[2])?;
    let mut args = args.into_iter();
    let dest = take_list(args.next().unwrap_or(Value::List(List::new())))?;
    let src = take_list(args.next().unwrap_or(Value::List(List::new())))?;
    Ok(Value::List(dest.insert(&src, index)))
}

pub fn builtin_list_replace_list(args: Vec<Value>) -> Result<Value, RuntimeError> {
    check_arity("llListReplaceList", &args, 4)?;
    let start = take_int(&args[2])?;
    let end = take_int(&args[3])?;
    let mut args = args.into_iter();
    let dest = take_list(args.next().unwrap_or(Value::List(List::new())))?;
    let src = take_list(args.next().unwrap_or(Value::List(List::new())))?;
    Ok(Value::List(dest.replace(&src, start, end)))
}

pub fn builtin_list_find_list(args: Vec<Value>) -> Result<Value, RuntimeError> {
    check_arity("llListFindList", &args, 2)?;
    let mut args = args.into_iter();
    let src = take_list(args.next().unwrap_or(Value::List(List::new())))?;
    let test = take_list(args.next().unwrap_or(Value::List(List::new())))?;
    Ok(Value::Integer(src.index_of(&test)))
}

pub fn builtin_list_sort(args: Vec<Value>) -> Result<Value, RuntimeError> {
    check_arity("llListSort", &args, 3)?;
    let stride = take_int(&args[1])?;
    let ascending = take_int(&args[2])? != 0;
    let mut args = args.into_iter();
    let l = take_list(args.next().unwrap_or(Value::List(List::new())))?;
    Ok(Value::List(l.sort(stride, ascending)))
}

pub fn builtin_list_randomize(args: Vec<Value>) -> Result<Value, RuntimeError> {
    check_arity("llListRandomize", &args, 2)?;
    let stride = take_int(&args[1])?;
    let mut args = args.into_iter();
    let l = take_list(args.next().unwrap_or(Value::List(List::new())))?;
    Ok(Value::List(l.randomize(stride)))
}

pub fn builtin_list_statistics(args: Vec<Value>) -> Result<Value, RuntimeError> {
    check_arity("llListStatistics", &args, 2)?;
    let operation = take_int(&args[0])?;
    let mut args = args.into_iter();
    args.next();
    let l = take_list(args.next().unwrap_or(Value::List(List::new())))?;
    Ok(Value::Float(l.statistics(operation)))
}

// ====== Element accessors ======

pub fn builtin_list_to_string(args: Vec<Value>) -> Result<Value, RuntimeError> {
    check_arity("llList2String", &args, 2)?;
    let index = take_int(&args[1])?;
    let mut args = args.into_iter();
    let l = take_list(args.next().unwrap_or(Value::List(List::new())))?;
    let s = element_at(&l, index)
        .map(|v| v.to_string())
        .unwrap_or_default();
    Ok(Value::Str(s))
}

pub fn builtin_list_to_integer(args: Vec<Value>) -> Result<Value, RuntimeError> {
    check_arity("llList2Integer", &args, 2)?;
    let index = take_int(&args[1])?;
    let mut args = args.into_iter();
    let l = take_list(args.next().unwrap_or(Value::List(List::new())))?;
    let n = match element_at(&l, index) {
        Some(Value::Integer(i)) => *i,
        Some(Value::Float(f)) => *f as i32,
        Some(Value::Str(s)) => parse_int_prefix(s),
        _ => 0,
    };
    Ok(Value::Integer(n))
}

pub fn builtin_list_to_float(args: Vec<Value>) -> Result<Value, RuntimeError> {
    check_arity("llList2Float", &args, 2)?;
    let index = take_int(&args[1])?;
    let mut args = args.into_iter();
    let l = take_list(args.next().unwrap_or(Value::List(List::new())))?;
    let x = match element_at(&l, index) {
        Some(Value::Integer(i)) => *i as f64,
        Some(Value::Float(f)) => *f,
        Some(Value::Str(s)) => parse_float_prefix(s),
        _ => 0.0,
    };
    Ok(Value::Float(x))
}

// ====== String joining and splitting ======

pub fn builtin_dump_list_to_string(args: Vec<Value>) -> Result<Value, RuntimeError> {
    check_arity("llDumpList2String", &args, 2)?;
    let mut args = args.into_iter();
    let l = take_list(args.next().unwrap_or(Value::List(List::new())))?;
    let sep = take_str(args.next().unwrap_or(Value::Str(String::new())))?;
    Ok(Value::Str(l.join(&sep)))
}

pub fn builtin_list_to_csv(args: Vec<Value>) -> Result<Value, RuntimeError> {
    check_arity("llList2CSV", &args, 1)?;
    let mut args = args.into_iter();
    let l = take_list(args.next().unwrap_or(Value::List(List::new())))?;
    Ok(Value::Str(l.to_csv()))
}

pub fn builtin_csv_to_list(args: Vec<Value>) -> Result<Value, RuntimeError> {
    check_arity("llCSV2List", &args, 1)?;
    let mut args = args.into_iter();
    let src = take_str(args.next().unwrap_or(Value::Str(String::new())))?;
    Ok(Value::List(List::from_csv(&src)))
}

pub fn builtin_parse_string_to_list(args: Vec<Value>) -> Result<Value, RuntimeError> {
    check_arity("llParseString2List", &args, 3)?;
    parse_string_builtin(args, false)
}

pub fn builtin_parse_string_keep_nulls(args: Vec<Value>) -> Result<Value, RuntimeError> {
    check_arity("llParseStringKeepNulls", &args, 3)?;
    parse_string_builtin(args, true)
}

fn parse_string_builtin(args: Vec<Value>, keep_nulls: bool) -> Result<Value, RuntimeError> {
    let mut args = args.into_iter();
    let src = take_str(args.next().unwrap_or(Value::Str(String::new())))?;
    let separators = delimiter_strings(args.next().unwrap_or(Value::List(List::new())))?;
    let spacers = delimiter_strings(args.next().unwrap_or(Value::List(List::new())))?;
    let tokens = tokenize::parse_string(&src, &separators, &spacers, keep_nulls);
    Ok(Value::List(tokens.into_iter().map(Value::Str).collect()))
}

// ====== Structured values ======

pub fn builtin_json_get_value(args: Vec<Value>) -> Result<Value, RuntimeError> {
    check_arity("llJsonGetValue", &args, 2)?;
    let mut args = args.into_iter();
    let src = take_str(args.next().unwrap_or(Value::Str(String::new())))?;
    let path = take_list(args.next().unwrap_or(Value::List(List::new())))?;
    Ok(Value::Str(json::get_value(&src, path.as_slice())))
}

pub fn builtin_json_set_value(args: Vec<Value>) -> Result<Value, RuntimeError> {
    check_arity("llJsonSetValue", &args, 3)?;
    let mut args = args.into_iter();
    let src = take_str(args.next().unwrap_or(Value::Str(String::new())))?;
    let path = take_list(args.next().unwrap_or(Value::List(List::new())))?;
    let value = take_str(args.next().unwrap_or(Value::Str(String::new())))?;
    Ok(Value::Str(json::set_value(&src, path.as_slice(), &value)))
}

pub fn builtin_json_value_type(args: Vec<Value>) -> Result<Value, RuntimeError> {
    check_arity("llJsonValueType", &args, 2)?;
    let mut args = args.into_iter();
    let src = take_str(args.next().unwrap_or(Value::Str(String::new())))?;
    let path = take_list(args.next().unwrap_or(Value::List(List::new())))?;
    Ok(Value::Str(json::value_type(&src, path.as_slice())))
}

pub fn builtin_json_to_list(args: Vec<Value>) -> Result<Value, RuntimeError> {
    check_arity("llJson2List", &args, 1)?;
    let mut args = args.into_iter();
    let src = take_str(args.next().unwrap_or(Value::Str(String::new())))?;
    Ok(Value::List(json::json_to_list(&src)))
}

pub fn builtin_list_to_json(args: Vec<Value>) -> Result<Value, RuntimeError> {
    check_arity("llList2Json", &args, 2)?;
    let mut args = args.into_iter();
    let kind = take_str(args.next().unwrap_or(Value::Str(String::new())))?;
    let values = take_list(args.next().unwrap_or(Value::List(List::new())))?;
    Ok(Value::Str(json::list_to_json(&kind, &values)))
}

// ====== Base64 integer codec ======

pub fn builtin_integer_to_base64(args: Vec<Value>) -> Result<Value, RuntimeError> {
    check_arity("llIntegerToBase64", &args, 1)?;
    let n = take_int(&args[0])?;
    Ok(Value::Str(base64::integer_to_base64(n)))
}

pub fn builtin_base64_to_integer(args: Vec<Value>) -> Result<Value, RuntimeError> {
    check_arity("llBase64ToInteger", &args, 1)?;
    let mut args = args.into_iter();
    let src = take_str(args.next().unwrap_or(Value::Str(String::new())))?;
    Ok(Value::Integer(base64::base64_to_integer(&src)))
}

// Statistics codes re-exported where the binding layer registers script
// constants alongside the builtins.
pub use list::{
    LIST_STAT_GEOMETRIC_MEAN, LIST_STAT_HARMONIC_MEAN, LIST_STAT_MAX, LIST_STAT_MEAN,
    LIST_STAT_MEDIAN, LIST_STAT_MIN, LIST_STAT_NUM_COUNT, LIST_STAT_RANGE, LIST_STAT_SQR_SUM,
    LIST_STAT_STD_DEV, LIST_STAT_SUM,
};
