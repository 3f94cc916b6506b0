// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! DIS timestamps.
//!
//! The header timestamp counts DIS time units since the top of the current
//! hour, where one hour is `2^31 - 1` units. The count occupies bits 1..31;
//! bit 0 is set when the clock is synchronized to an absolute reference.
//!
//! Some deployments put other clocks in the same field. [`TimestampMode`]
//! selects which one is stamped on outgoing PDUs. Every clock is read in UTC.

use std::fmt;

use chrono::{DateTime, Datelike, TimeZone, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// DIS time units in one hour.
pub const UNITS_PER_HOUR: u32 = i32::MAX as u32;

const ABSOLUTE_BIT: u32 = 0x0000_0001;

/// Which clock convention is written into the timestamp field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimestampMode {
    /// DIS time units since the hour, absolute bit set.
    #[default]
    Absolute,
    /// DIS time units since the hour, absolute bit clear.
    Relative,
    /// Hundredths of a second since the start of the year.
    Nps,
    /// Whole seconds since 1970-01-01, truncated to 32 bits.
    Unix,
}

/// Raw value of the header timestamp field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisTimestamp(u32);

impl DisTimestamp {
    /// Wrap a raw field value.
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Absolute timestamp for `units` DIS time units past the hour.
    ///
    /// Only the low 31 bits of `units` are representable.
    pub const fn absolute(units: u32) -> Self {
        Self((units << 1) | ABSOLUTE_BIT)
    }

    /// Relative timestamp for `units` DIS time units past the hour.
    pub const fn relative(units: u32) -> Self {
        Self((units << 1) & !ABSOLUTE_BIT)
    }

    /// The raw field value.
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Whether bit 0 marks this as absolute time.
    pub const fn is_absolute(self) -> bool {
        self.0 & ABSOLUTE_BIT != 0
    }

    /// DIS time units past the hour.
    pub const fn time_units(self) -> u32 {
        self.0 >> 1
    }

    /// Timestamp for `time` under the given convention.
    pub fn from_time(mode: TimestampMode, time: DateTime<Utc>) -> Self {
        match mode {
            TimestampMode::Absolute => Self::absolute(units_since_hour(time)),
            TimestampMode::Relative => Self::relative(units_since_hour(time)),
            TimestampMode::Nps => Self(hundredths_since_year(time)),
            TimestampMode::Unix => Self(time.timestamp() as u32),
        }
    }

    /// Timestamp for the current instant.
    pub fn now(mode: TimestampMode) -> Self {
        Self::from_time(mode, Utc::now())
    }
}

impl From<u32> for DisTimestamp {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl From<DisTimestamp> for u32 {
    fn from(timestamp: DisTimestamp) -> Self {
        timestamp.0
    }
}

impl fmt::Display for DisTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.is_absolute() {
            "absolute"
        } else {
            "relative"
        };
        write!(f, "{} ({kind}, {} units)", self.0, self.time_units())
    }
}

/// DIS time units elapsed since the top of the hour of `time`.
fn units_since_hour(time: DateTime<Utc>) -> u32 {
    let millis = u64::from(time.minute()) * 60_000
        + u64::from(time.second()) * 1_000
        + u64::from(time.timestamp_subsec_millis().min(999));
    let units = (millis as f64 / 3_600_000.0 * f64::from(UNITS_PER_HOUR)).round();
    (units as u32).min(UNITS_PER_HOUR)
}

/// Hundredths of a second elapsed since January 1st 00:00 of `time`'s year.
fn hundredths_since_year(time: DateTime<Utc>) -> u32 {
    let start = Utc
        .with_ymd_and_hms(time.year(), 1, 1, 0, 0, 0)
        .single()
        .unwrap_or(time);
    let millis = (time - start).num_milliseconds().max(0);
    (millis / 10) as u32
}
