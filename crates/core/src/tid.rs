// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Timestamp identifiers (TIDs) for record keys.
//!
//! A TID packs a microsecond wall-clock timestamp and a 10-bit random clock
//! id into one integer, rendered as 13 symbols of a sortable base32 alphabet.
//!
//! Layout (64 bits, big-endian in the rendered string):
//!
//! ```text
//! 0 | 53 bits: microseconds since Unix epoch | 10 bits: clock id
//! ```
//!
//! The alphabet is ordered by byte value, so comparing two TID strings
//! lexically compares their timestamps first and their clock ids second.

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;

use crate::error::{Error, Result};

/// Sortable base32 alphabet: ascending byte order matches ascending value.
const ALPHABET: &[u8; 32] = b"234567abcdefghijklmnopqrstuvwxyz";

/// Rendered length of every TID.
pub const TID_LEN: usize = 13;

const CLOCK_ID_BITS: u32 = 10;
const CLOCK_ID_MASK: u64 = (1 << CLOCK_ID_BITS) - 1;
const TIMESTAMP_MASK: u64 = (1 << 53) - 1;

/// Packed value of the last TID handed out by [`Tid::now`].
static LAST_ISSUED: AtomicU64 = AtomicU64::new(0);

/// Trait for getting the current wall clock time at microsecond resolution.
///
/// This allows injecting a mock clock for testing.
pub trait ClockSource: Send + Sync {
    /// Returns the current time in microseconds since Unix epoch.
    fn now_micros(&self) -> u64;
}

/// System clock implementation using `std::time::SystemTime`.
#[derive(Debug, Default)]
pub struct SystemClock;

impl ClockSource for SystemClock {
    fn now_micros(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_micros() as u64)
            .unwrap_or(0)
    }
}

impl<C: ClockSource> ClockSource for &C {
    fn now_micros(&self) -> u64 {
        (*self).now_micros()
    }
}

/// A time-ordered record key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tid(u64);

impl Tid {
    /// Generates a TID from the system clock and a random clock id.
    ///
    /// Successive calls in one process are strictly increasing, even within
    /// a single microsecond.
    pub fn now() -> Self {
        Self::now_with(&SystemClock).after(&LAST_ISSUED)
    }

    /// Returns `max(self, last + 1)` and records it in `last`.
    pub(crate) fn after(self, last: &AtomicU64) -> Self {
        let mut prev = last.load(AtomicOrdering::Relaxed);
        loop {
            let next = self.0.max(prev.saturating_add(1));
            match last.compare_exchange_weak(
                prev,
                next,
                AtomicOrdering::SeqCst,
                AtomicOrdering::Relaxed,
            ) {
                Ok(_) => return Tid(next),
                Err(seen) => prev = seen,
            }
        }
    }

    /// Generates a TID from the given clock and a random clock id.
    pub fn now_with<C: ClockSource>(clock: &C) -> Self {
        let clock_id = rand::thread_rng().gen_range(0..=CLOCK_ID_MASK);
        Self::from_parts(clock.now_micros(), clock_id as u16)
    }

    /// Builds a TID from explicit components.
    ///
    /// The timestamp is truncated to 53 bits and the clock id to 10 bits.
    pub fn from_parts(timestamp_micros: u64, clock_id: u16) -> Self {
        let ts = timestamp_micros & TIMESTAMP_MASK;
        Tid((ts << CLOCK_ID_BITS) | (u64::from(clock_id) & CLOCK_ID_MASK))
    }

    /// Parses a TID from its string representation.
    pub fn parse(s: &str) -> Result<Self> {
        s.parse()
    }

    /// Microseconds since Unix epoch encoded in this TID.
    pub fn timestamp_micros(&self) -> u64 {
        self.0 >> CLOCK_ID_BITS
    }

    /// The random disambiguator in the low 10 bits.
    pub fn clock_id(&self) -> u16 {
        (self.0 & CLOCK_ID_MASK) as u16
    }

    /// The packed integer value.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

/// Generates a fresh record key string.
pub fn generate() -> String {
    Tid::now().to_string()
}

fn symbol_value(b: u8) -> Option<u64> {
    ALPHABET.iter().position(|&c| c == b).map(|p| p as u64)
}

impl fmt::Display for Tid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = [0u8; TID_LEN];
        let mut n = self.0;
        for slot in buf.iter_mut().rev() {
            *slot = ALPHABET[(n & 31) as usize];
            n >>= 5;
        }
        for b in buf {
            fmt::Write::write_char(f, char::from(b))?;
        }
        Ok(())
    }
}

impl FromStr for Tid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.len() != TID_LEN {
            return Err(Error::InvalidTid(s.to_string()));
        }

        let mut n: u64 = 0;
        for (i, b) in s.bytes().enumerate() {
            let v = symbol_value(b).ok_or_else(|| Error::InvalidTid(s.to_string()))?;
            // 13 symbols carry 65 bits; the leading bit must stay clear
            if i == 0 && v & 0x10 != 0 {
                return Err(Error::InvalidTid(s.to_string()));
            }
            n = (n << 5) | v;
        }

        Ok(Tid(n))
    }
}

#[cfg(test)]
#[path = "tid_tests.rs"]
mod tests;
