// Dweve Rulebench - Rule Ordering Benchmark Dashboard
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Contractual display formats.
//!
//! These match what the dashboard has always shown, down to the exponent
//! notation, so snapshots stay comparable across releases.

// Enough fraction digits to print any finite f64 exactly.
const EXACT_DIGITS: usize = 1074;

/// Fixed notation with two fraction digits: `12.345` -> `"12.35"`.
///
/// Exact ties round away from zero: `2.125` -> `"2.13"`.
pub fn format_fixed2(value: f64) -> String {
    format_fixed(value, 2)
}

/// Fixed notation with four fraction digits: `0.001` -> `"0.0010"`.
pub fn format_fixed4(value: f64) -> String {
    format_fixed(value, 4)
}

/// Scientific notation, mantissa rounded to two fraction digits, signed
/// unpadded exponent: `0.0000321` -> `"3.21e-5"`, `1500.0` -> `"1.50e+3"`.
pub fn format_exponential2(value: f64) -> String {
    format_exponential(value, 2)
}

fn format_fixed(value: f64, fraction: usize) -> String {
    if !value.is_finite() {
        return non_finite(value);
    }
    let (int_part, frac_part) = exact_decimal(value.abs());
    let mut digits: Vec<u8> = int_part.bytes().chain(frac_part.bytes().take(fraction)).collect();
    if frac_part.as_bytes()[fraction] >= b'5' {
        round_up(&mut digits);
    }
    let split = digits.len() - fraction;
    let mut out = String::with_capacity(digits.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    out.push_str(ascii(&digits[..split]));
    if fraction > 0 {
        out.push('.');
        out.push_str(ascii(&digits[split..]));
    }
    out
}

fn format_exponential(value: f64, fraction: usize) -> String {
    if !value.is_finite() {
        return non_finite(value);
    }
    let sign = if value < 0.0 { "-" } else { "" };
    let (int_part, frac_part) = exact_decimal(value.abs());
    let all: Vec<u8> = int_part.bytes().chain(frac_part.bytes()).collect();
    let Some(first) = all.iter().position(|&d| d != b'0') else {
        return format!("{}{}e+0", sign, format_fixed(0.0, fraction));
    };

    let mut exponent = int_part.len() as i64 - 1 - first as i64;
    let mut mantissa: Vec<u8> = all[first..first + fraction + 1].to_vec();
    if all[first + fraction + 1] >= b'5' && round_up(&mut mantissa) {
        // 9.99 -> 10.0: keep the significant digit count
        mantissa.pop();
        exponent += 1;
    }

    let exp_sign = if exponent < 0 { '-' } else { '+' };
    if fraction == 0 {
        return format!("{}{}e{}{}", sign, ascii(&mantissa), exp_sign, exponent.abs());
    }
    format!(
        "{}{}.{}e{}{}",
        sign,
        ascii(&mantissa[..1]),
        ascii(&mantissa[1..]),
        exp_sign,
        exponent.abs()
    )
}

// Integer and fraction digits of the exact binary value.
fn exact_decimal(value: f64) -> (String, String) {
    let text = format!("{:.*}", EXACT_DIGITS, value);
    match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part.to_string(), frac_part.to_string()),
        None => (text, "0".repeat(EXACT_DIGITS)),
    }
}

// Add one unit in the last place. Returns true when a new leading digit was
// needed.
fn round_up(digits: &mut Vec<u8>) -> bool {
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return false;
        }
    }
    digits.insert(0, b'1');
    true
}

fn ascii(digits: &[u8]) -> &str {
    std::str::from_utf8(digits).unwrap_or_default()
}

fn non_finite(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value > 0.0 {
        "Infinity".to_string()
    } else {
        "-Infinity".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed2() {
        assert_eq!(format_fixed2(12.345), "12.35");
        assert_eq!(format_fixed2(10.0), "10.00");
        assert_eq!(format_fixed2(0.0), "0.00");
    }

    #[test]
    fn test_fixed4() {
        assert_eq!(format_fixed4(0.001), "0.0010");
        assert_eq!(format_fixed4(0.0005), "0.0005");
        assert_eq!(format_fixed4(1.23456), "1.2346");
    }

    #[test]
    fn test_exponential2_negative_exponent() {
        assert_eq!(format_exponential2(0.0000321), "3.21e-5");
        assert_eq!(format_exponential2(0.002), "2.00e-3");
        assert_eq!(format_exponential2(0.0018), "1.80e-3");
    }

    #[test]
    fn test_exponential2_non_negative_exponent() {
        assert_eq!(format_exponential2(1500.0), "1.50e+3");
        assert_eq!(format_exponential2(1.0), "1.00e+0");
        assert_eq!(format_exponential2(0.0), "0.00e+0");
    }

    #[test]
    fn test_exponential2_rounds_mantissa() {
        assert_eq!(format_exponential2(9.999), "1.00e+1");
        assert_eq!(format_exponential2(0.0009996), "1.00e-3");
    }

    #[test]
    fn test_exact_ties_round_away_from_zero() {
        assert_eq!(format_fixed2(2.125), "2.13");
        assert_eq!(format_fixed2(0.375), "0.38");
        assert_eq!(format_fixed4(0.03125), "0.0313");
        assert_eq!(format_exponential2(1.125), "1.13e+0");
    }

    #[test]
    fn test_near_ties_follow_the_binary_value() {
        // 1.005 is stored as 1.00499999999999989...
        assert_eq!(format_fixed2(1.005), "1.00");
        assert_eq!(format_fixed2(9.995), "9.99");
        assert_eq!(format_exponential2(0.0001125), "1.12e-4");
    }

    #[test]
    fn test_fixed_carry() {
        assert_eq!(format_fixed2(9.999), "10.00");
        assert_eq!(format_fixed4(0.99995), "1.0000");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_fixed2(f64::NAN), "NaN");
        assert_eq!(format_exponential2(f64::INFINITY), "Infinity");
    }
}
