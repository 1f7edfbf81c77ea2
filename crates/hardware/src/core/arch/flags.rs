//! Comparison Flags Register.
//!
//! The flags register is one byte of which three bits are meaningful:
//!
//! | Bit | Mask    | Name    | Set when                 |
//! |-----|---------|---------|--------------------------|
//! | 0   | `0b001` | Equal   | `R[a] == R[b]`           |
//! | 1   | `0b010` | Greater | `R[a] > R[b]`            |
//! | 2   | `0b100` | Less    | `R[a] < R[b]`            |
//!
//! `CMP` clears the register and then sets exactly one bit. The value is kept
//! until the next `CMP`; no other instruction writes it.

use std::cmp::Ordering;

use crate::common::constants::{FLAG_EQUAL, FLAG_GREATER, FLAG_LESS};

/// The flags register.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Flags(u8);

impl Flags {
    /// Flags after reset: no bit set.
    pub const CLEAR: Self = Self(0);

    /// Flags recording the outcome of comparing `a` against `b`.
    pub fn compare(a: u8, b: u8) -> Self {
        match a.cmp(&b) {
            Ordering::Equal => Self(FLAG_EQUAL),
            Ordering::Greater => Self(FLAG_GREATER),
            Ordering::Less => Self(FLAG_LESS),
        }
    }

    /// Raw register value.
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Equal bit.
    #[inline]
    pub const fn equal(self) -> bool {
        self.0 & FLAG_EQUAL != 0
    }

    /// Greater bit: the first compared value was larger.
    #[inline]
    pub const fn greater(self) -> bool {
        self.0 & FLAG_GREATER != 0
    }

    /// Less bit: the first compared value was smaller.
    #[inline]
    pub const fn less(self) -> bool {
        self.0 & FLAG_LESS != 0
    }

    /// `true` when the last comparison found the operands different.
    ///
    /// Always `false` before the first `CMP`.
    #[inline]
    pub const fn not_equal(self) -> bool {
        self.greater() || self.less()
    }
}
