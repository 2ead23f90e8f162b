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

//! 32-bit integer base64 codec.
//!
//! Not RFC 4648 stream coding: a 32-bit word is packed big-endian into six
//! base64 digits (the last holding only the low two bits in its high
//! positions) and padded to a fixed 8-character string. Decoding accumulates
//! digit by digit and stops at the first character outside the alphabet,
//! keeping whatever bits have landed so far.

use lazy_static::lazy_static;

const I2C: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

lazy_static! {
    // Digit value plus one; zero marks a byte outside the alphabet.
    static ref C2I: [i32; 256] = {
        let mut table = [0i32; 256];
        for (i, &c) in I2C.iter().enumerate() {
            table[c as usize] = i as i32 + 1;
        }
        table
    };
}

/// Encode a 32-bit integer as the fixed 8-character base64 form.
pub fn integer_to_base64(number: i32) -> String {
    let n = number as u32;
    let digits = [
        (n >> 26) & 63,
        (n >> 20) & 63,
        (n >> 14) & 63,
        (n >> 8) & 63,
        (n >> 2) & 63,
        (n << 4) & 63,
    ];
    let mut out = String::with_capacity(8);
    for d in digits {
        out.push(I2C[d as usize] as char);
    }
    out.push_str("==");
    out
}

/// Decode up to six base64 characters back into a 32-bit integer.
///
/// Inputs longer than 8 characters yield 0. A character outside the
/// alphabet ends the scan; partial inputs keep the bits accumulated so far.
pub fn base64_to_integer(src: &str) -> i32 {
    let bytes = src.as_bytes();
    if bytes.len() > 8 {
        return 0;
    }

    let mut number: u32 = 0;
    const SHIFTS: [u32; 5] = [26, 20, 14, 8, 2];
    for (i, shift) in SHIFTS.into_iter().enumerate() {
        let Some(&c) = bytes.get(i) else {
            return number as i32;
        };
        let digit = C2I[c as usize];
        if digit <= 0 {
            return number as i32;
        }
        number |= ((digit - 1) as u32) << shift;
    }

    // Sixth character contributes only its top two bits
    if let Some(&c) = bytes.get(5) {
        let digit = C2I[c as usize];
        if digit > 0 {
            number |= ((digit - 1) as u32) >> 4;
        }
    }
    number as i32
}
