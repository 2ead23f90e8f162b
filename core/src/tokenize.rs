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

//! Delimited-string tokenizer.
//!
//! Two independent delimiter sets drive the scan: separators are consumed,
//! spacers are re-emitted as standalone tokens. At every cursor position the
//! earliest-occurring still-viable delimiter wins; a delimiter that is empty
//! or no longer occurs ahead of the cursor is dead for the rest of the scan.

/// Split `src` and keep empty tokens.
pub fn parse_string_keep_nulls(src: &str, separators: &[String], spacers: &[String]) -> Vec<String> {
    parse_string(src, separators, spacers, true)
}

/// Split `src` and discard empty tokens.
pub fn parse_string_drop_nulls(src: &str, separators: &[String], spacers: &[String]) -> Vec<String> {
    parse_string(src, separators, spacers, false)
}

pub fn parse_string(
    src: &str,
    separators: &[String],
    spacers: &[String],
    keep_nulls: bool,
) -> Vec<String> {
    let srclen = src.len();
    let seplen = separators.len();
    let mlen = seplen + spacers.len();

    let mut active = vec![true; mlen];
    let mut tokens: Vec<String> = Vec::new();
    let mut beginning = 0usize;

    while beginning < srclen {
        // (delimiter index, byte offset) of the closest match so far
        let mut best: Option<(usize, usize)> = None;

        for (j, sep) in separators.iter().enumerate() {
            if sep.is_empty() {
                active[j] = false;
            }
            if !active[j] {
                continue;
            }
            match src[beginning..].find(sep.as_str()) {
                None => active[j] = false,
                Some(rel) => {
                    let off = beginning + rel;
                    if best.map_or(true, |(_, b)| off < b) {
                        best = Some((j, off));
                        if off == beginning {
                            break;
                        }
                    }
                }
            }
        }

        // Spacers only compete while the best match sits past the cursor;
        // the off < b test below means a separator wins any tie.
        if best.map_or(true, |(_, b)| b != beginning) {
            for (k, spc) in spacers.iter().enumerate() {
                let j = seplen + k;
                if spc.is_empty() {
                    active[j] = false;
                }
                if !active[j] {
                    continue;
                }
                match src[beginning..].find(spc.as_str()) {
                    None => active[j] = false,
                    Some(rel) => {
                        let off = beginning + rel;
                        if best.map_or(true, |(_, b)| off < b) {
                            best = Some((j, off));
                        }
                    }
                }
            }
        }

        match best {
            None => {
                // No marker ahead; the remainder is the last token
                if keep_nulls || srclen - beginning > 0 {
                    tokens.push(src[beginning..].to_string());
                }
                return tokens;
            }
            Some((j, off)) => {
                if keep_nulls || off - beginning > 0 {
                    tokens.push(src[beginning..off].to_string());
                }
                let delim = if j < seplen {
                    &separators[j]
                } else {
                    &spacers[j - seplen]
                };
                beginning = off + delim.len();
                if j >= seplen {
                    // Spacers are themselves emitted
                    tokens.push(delim.clone());
                }
            }
        }
    }

    // If the string ends exactly on a delimiter there is an implied empty
    // tail entry; empty input is that tail on its own.
    if beginning == srclen && keep_nulls {
        tokens.push(String::new());
    }
    tokens
}
