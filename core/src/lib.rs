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

//! LSL Core — the list, string, structured-value and codec kernel behind
//! the script binding layer.
//!
//! Everything here follows the scripting contract: operations degrade
//! silently to sentinel results (empty list, -1, 0.0, the invalid marker)
//! instead of erroring. The only fallible surface is builtin dispatch in
//! [`intrinsics`], which rejects malformed calls before they reach an
//! engine.

pub mod base64;
pub mod intrinsics;
pub mod json;
pub mod list;
pub mod runtime;
pub mod tokenize;

pub use intrinsics::BuiltinRegistry;
pub use runtime::{List, NativeFn, Quat, RuntimeError, Value, Vec3};
