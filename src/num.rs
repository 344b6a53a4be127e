// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

//! Numeric literal parsing: base detection (`0b`/`0o`/`0x`/leading-zero
//! octal) layered over fixed-width, range-checked conversion, with
//! failures classified as syntax or range errors.

use std::fmt;
use std::num::IntErrorKind;

use crate::error::{Error, NumKind};

/// A failed numeric conversion.
///
/// Alongside the [Error], this carries a best-effort value so that a
/// caller ignoring the failure still sees a deterministic result: the
/// crossed bound of the target type on a range error, zero on a syntax
/// error.
#[derive(Clone, Debug, PartialEq)]
pub struct NumError<T> {
    value: T,
    error: Error,
}

impl<T: Copy> NumError<T> {
    /// The best-effort value of the failed conversion.
    pub fn value(&self) -> T {
        self.value
    }
}

impl<T> NumError<T> {
    /// The classification of the failure.
    pub fn num_kind(&self) -> NumKind {
        match self.error {
            Error::InvalidNumber { num_kind, .. } => num_kind,
            // NumError is only ever built around InvalidNumber.
            _ => unreachable!(),
        }
    }

    /// Discard the value, keeping the error.
    pub fn into_error(self) -> Error {
        self.error
    }

    /// Split into the best-effort value and the error.
    pub fn into_parts(self) -> (T, Error) {
        (self.value, self.error)
    }
}

impl<T> fmt::Display for NumError<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl<T: fmt::Debug> std::error::Error for NumError<T> {}

impl<T> From<NumError<T>> for Error {
    fn from(e: NumError<T>) -> Self {
        e.error
    }
}

/// Numeric types a command-line token can be converted into.
///
/// Implemented for the full signed/unsigned integer matrix
/// (`i8`..`i64`, `isize`, `u8`..`u64`, `usize`) and for `f32`/`f64`.
pub trait Number: Copy + Sized {
    /// The type name used in error messages.
    const NAME: &'static str;

    /// Convert a raw token, classifying any failure and supplying the
    /// best-effort value described by [NumError].
    fn convert(token: &str) -> Result<Self, (Self, NumKind)>;
}

/// Detect an integer base prefix, returning the radix and the digits
/// that remain once the prefix is stripped.
///
/// `0b`/`0o`/`0x` (the letter case-insensitive) select base 2/8/16; a
/// plain leading zero selects base 8; anything else is base 10.
fn radix_of(token: &str) -> (u32, &str) {
    let bytes = token.as_bytes();

    if bytes.len() > 2 && bytes[0] == b'0' {
        match bytes[1].to_ascii_lowercase() {
            b'b' => return (2, &token[2..]),
            b'o' => return (8, &token[2..]),
            b'x' => return (16, &token[2..]),
            _ => (),
        }
    }

    if bytes.len() > 1 && bytes[0] == b'0' {
        return (8, &token[1..]);
    }

    (10, token)
}

/// Determine if a token spells out an infinite float value explicitly
/// (as opposed to overflowing into one).
fn is_inf_literal(token: &str) -> bool {
    let t = token.trim_start_matches(|c| c == '+' || c == '-');

    t.eq_ignore_ascii_case("inf") || t.eq_ignore_ascii_case("infinity")
}

macro_rules! impl_number_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Number for $ty {
                const NAME: &'static str = stringify!($ty);

                fn convert(token: &str) -> Result<Self, (Self, NumKind)> {
                    let (radix, digits) = radix_of(token);

                    <$ty>::from_str_radix(digits, radix).map_err(|e| match e.kind() {
                        IntErrorKind::PosOverflow => (<$ty>::MAX, NumKind::Range),
                        IntErrorKind::NegOverflow => (<$ty>::MIN, NumKind::Range),
                        _ => (0, NumKind::Syntax),
                    })
                }
            }
        )*
    };
}

macro_rules! impl_number_float {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Number for $ty {
                const NAME: &'static str = stringify!($ty);

                fn convert(token: &str) -> Result<Self, (Self, NumKind)> {
                    match token.parse::<$ty>() {
                        // An overflowed literal parses to an infinity;
                        // only a literal infinity may produce one.
                        Ok(v) if v.is_infinite() && !is_inf_literal(token) => {
                            Err((v, NumKind::Range))
                        }
                        Ok(v) => Ok(v),
                        Err(_) => Err((0.0, NumKind::Syntax)),
                    }
                }
            }
        )*
    };
}

impl_number_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_number_float!(f32, f64);

/// Convert a string token into a numeric value.
///
/// Integer tokens may carry a base prefix (`0b101`, `0o17`, `0x1F`) or a
/// plain leading zero denoting octal (`017`); everything else is decimal.
/// Floats accept whatever [`str::parse`] accepts.
///
/// On failure the returned [NumError] classifies the problem as one of
/// syntax or range, names the `name` and the original (unstripped) token
/// in its message, and carries the best-effort value: the crossed bound
/// of `T` on a range error, zero otherwise.
///
/// # Examples
///
/// ```rust
/// use argex::{num, Kind};
///
/// let value: i64 = num::parse("-n", "0x1F").unwrap();
/// assert_eq!(value, 31);
///
/// let err = num::parse::<i64>("-n", "9223372036854775808").unwrap_err();
/// assert_eq!(err.value(), i64::MAX);
/// assert!(err.clone().into_error().is(Kind::Range));
/// ```
pub fn parse<T: Number>(name: &str, token: &str) -> Result<T, NumError<T>> {
    T::convert(token).map_err(|(value, num_kind)| NumError {
        value,
        error: Error::InvalidNumber {
            type_name: T::NAME,
            num_kind,
            name: name.to_string(),
            token: token.to_string(),
        },
    })
}
