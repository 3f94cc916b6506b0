// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Fixed-size sub-records shared across PDUs.
//!
//! Field names follow IEEE 1278.1 and are written in wire order. Every
//! record's `SIZE` is its encoded length in bytes.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Describer, Record};
use crate::core::Result;
use crate::stream::{Reader, Writer};

/// Site, application and entity triplet identifying a simulated entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct EntityId {
    /// Simulation site
    pub site: u16,
    /// Application within the site
    pub application: u16,
    /// Entity within the application
    pub entity: u16,
}

impl EntityId {
    /// Encoded size in bytes.
    pub const SIZE: usize = 6;

    pub fn new(site: u16, application: u16, entity: u16) -> Self {
        Self {
            site,
            application,
            entity,
        }
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.site, self.application, self.entity)
    }
}

impl Record for EntityId {
    fn marshalled_size(&self) -> usize {
        Self::SIZE
    }

    fn write(&self, writer: &mut Writer) -> Result<()> {
        writer.write_u16(self.site)?;
        writer.write_u16(self.application)?;
        writer.write_u16(self.entity)
    }

    fn read(&mut self, reader: &mut Reader) -> Result<()> {
        self.site = reader.read_u16()?;
        self.application = reader.read_u16()?;
        self.entity = reader.read_u16()?;
        Ok(())
    }

    fn describe(&self, out: &mut Describer<'_>) -> fmt::Result {
        out.field("site", self.site)?;
        out.field("application", self.application)?;
        out.field("entity", self.entity)
    }
}

/// Identifies a discrete event such as a collision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct EventId {
    /// Simulation site
    pub site: u16,
    /// Application within the site
    pub application: u16,
    /// Monotonic event counter of the issuing application
    pub event_number: u16,
}

impl EventId {
    /// Encoded size in bytes.
    pub const SIZE: usize = 6;

    pub fn new(site: u16, application: u16, event_number: u16) -> Self {
        Self {
            site,
            application,
            event_number,
        }
    }
}

impl Record for EventId {
    fn marshalled_size(&self) -> usize {
        Self::SIZE
    }

    fn write(&self, writer: &mut Writer) -> Result<()> {
        writer.write_u16(self.site)?;
        writer.write_u16(self.application)?;
        writer.write_u16(self.event_number)
    }

    fn read(&mut self, reader: &mut Reader) -> Result<()> {
        self.site = reader.read_u16()?;
        self.application = reader.read_u16()?;
        self.event_number = reader.read_u16()?;
        Ok(())
    }

    fn describe(&self, out: &mut Describer<'_>) -> fmt::Result {
        out.field("site", self.site)?;
        out.field("application", self.application)?;
        out.field("event_number", self.event_number)
    }
}

/// Seven-level entity classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct EntityType {
    /// Platform, munition, life form and so on
    pub kind: u8,
    /// Land, air, surface, subsurface or space
    pub domain: u8,
    /// Country code
    pub country: u16,
    pub category: u8,
    pub subcategory: u8,
    pub specific: u8,
    pub extra: u8,
}

impl EntityType {
    /// Encoded size in bytes.
    pub const SIZE: usize = 8;
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}.{}.{}.{}",
            self.kind,
            self.domain,
            self.country,
            self.category,
            self.subcategory,
            self.specific,
            self.extra
        )
    }
}

impl Record for EntityType {
    fn marshalled_size(&self) -> usize {
        Self::SIZE
    }

    fn write(&self, writer: &mut Writer) -> Result<()> {
        writer.write_u8(self.kind)?;
        writer.write_u8(self.domain)?;
        writer.write_u16(self.country)?;
        writer.write_u8(self.category)?;
        writer.write_u8(self.subcategory)?;
        writer.write_u8(self.specific)?;
        writer.write_u8(self.extra)
    }

    fn read(&mut self, reader: &mut Reader) -> Result<()> {
        self.kind = reader.read_u8()?;
        self.domain = reader.read_u8()?;
        self.country = reader.read_u16()?;
        self.category = reader.read_u8()?;
        self.subcategory = reader.read_u8()?;
        self.specific = reader.read_u8()?;
        self.extra = reader.read_u8()?;
        Ok(())
    }

    fn describe(&self, out: &mut Describer<'_>) -> fmt::Result {
        out.field("value", self)
    }
}

/// Three single-precision components.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector3Float {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3Float {
    /// Encoded size in bytes.
    pub const SIZE: usize = 12;

    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl Record for Vector3Float {
    fn marshalled_size(&self) -> usize {
        Self::SIZE
    }

    fn write(&self, writer: &mut Writer) -> Result<()> {
        writer.write_f32(self.x)?;
        writer.write_f32(self.y)?;
        writer.write_f32(self.z)
    }

    fn read(&mut self, reader: &mut Reader) -> Result<()> {
        self.x = reader.read_f32()?;
        self.y = reader.read_f32()?;
        self.z = reader.read_f32()?;
        Ok(())
    }

    fn describe(&self, out: &mut Describer<'_>) -> fmt::Result {
        out.field("value", format_args!("({}, {}, {})", self.x, self.y, self.z))
    }
}

/// Three double-precision components, used for world coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector3Double {
    /// Geocentric components in metres
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3Double {
    /// Encoded size in bytes.
    pub const SIZE: usize = 24;

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl Record for Vector3Double {
    fn marshalled_size(&self) -> usize {
        Self::SIZE
    }

    fn write(&self, writer: &mut Writer) -> Result<()> {
        writer.write_f64(self.x)?;
        writer.write_f64(self.y)?;
        writer.write_f64(self.z)
    }

    fn read(&mut self, reader: &mut Reader) -> Result<()> {
        self.x = reader.read_f64()?;
        self.y = reader.read_f64()?;
        self.z = reader.read_f64()?;
        Ok(())
    }

    fn describe(&self, out: &mut Describer<'_>) -> fmt::Result {
        out.field("value", format_args!("({}, {}, {})", self.x, self.y, self.z))
    }
}

/// Orientation as psi, theta, phi in radians.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EulerAngles {
    /// Rotation about the z axis
    pub psi: f32,
    /// Rotation about the rotated y axis
    pub theta: f32,
    /// Rotation about the twice rotated x axis
    pub phi: f32,
}

impl EulerAngles {
    /// Encoded size in bytes.
    pub const SIZE: usize = 12;

    pub fn new(psi: f32, theta: f32, phi: f32) -> Self {
        Self { psi, theta, phi }
    }
}

impl Record for EulerAngles {
    fn marshalled_size(&self) -> usize {
        Self::SIZE
    }

    fn write(&self, writer: &mut Writer) -> Result<()> {
        writer.write_f32(self.psi)?;
        writer.write_f32(self.theta)?;
        writer.write_f32(self.phi)
    }

    fn read(&mut self, reader: &mut Reader) -> Result<()> {
        self.psi = reader.read_f32()?;
        self.theta = reader.read_f32()?;
        self.phi = reader.read_f32()?;
        Ok(())
    }

    fn describe(&self, out: &mut Describer<'_>) -> fmt::Result {
        out.field("psi", self.psi)?;
        out.field("theta", self.theta)?;
        out.field("phi", self.phi)
    }
}

/// Hours since 1970 plus DIS time units past the hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ClockTime {
    pub hour: i32,
    /// Same units as the header timestamp, without the absolute bit
    pub time_past_hour: u32,
}

impl ClockTime {
    /// Encoded size in bytes.
    pub const SIZE: usize = 8;

    pub fn new(hour: i32, time_past_hour: u32) -> Self {
        Self {
            hour,
            time_past_hour,
        }
    }
}

impl Record for ClockTime {
    fn marshalled_size(&self) -> usize {
        Self::SIZE
    }

    fn write(&self, writer: &mut Writer) -> Result<()> {
        writer.write_i32(self.hour)?;
        writer.write_u32(self.time_past_hour)
    }

    fn read(&mut self, reader: &mut Reader) -> Result<()> {
        self.hour = reader.read_i32()?;
        self.time_past_hour = reader.read_u32()?;
        Ok(())
    }

    fn describe(&self, out: &mut Describer<'_>) -> fmt::Result {
        out.field("hour", self.hour)?;
        out.field("time_past_hour", self.time_past_hour)
    }
}

/// Dead reckoning algorithm and its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DeadReckoningParameters {
    /// Dead reckoning algorithm code (1 static, 2 FPW and so on)
    pub algorithm: u8,
    /// Algorithm-specific bytes, opaque to the codec
    pub other_parameters: [u8; 15],
    pub linear_acceleration: Vector3Float,
    pub angular_velocity: Vector3Float,
}

impl DeadReckoningParameters {
    /// Encoded size in bytes.
    pub const SIZE: usize = 40;
}

impl Record for DeadReckoningParameters {
    fn marshalled_size(&self) -> usize {
        Self::SIZE
    }

    fn write(&self, writer: &mut Writer) -> Result<()> {
        writer.write_u8(self.algorithm)?;
        writer.write_bytes(&self.other_parameters)?;
        self.linear_acceleration.write(writer)?;
        self.angular_velocity.write(writer)
    }

    fn read(&mut self, reader: &mut Reader) -> Result<()> {
        self.algorithm = reader.read_u8()?;
        self.other_parameters = reader.read_array()?;
        self.linear_acceleration.read(reader)?;
        self.angular_velocity.read(reader)
    }

    fn describe(&self, out: &mut Describer<'_>) -> fmt::Result {
        out.field("algorithm", self.algorithm)?;
        out.field("other_parameters", hex::encode(self.other_parameters))?;
        out.record("linear_acceleration", &self.linear_acceleration)?;
        out.record("angular_velocity", &self.angular_velocity)
    }
}

/// Character set and eleven characters painted on an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct EntityMarking {
    pub character_set: u8,
    /// Zero-padded characters
    pub characters: [u8; 11],
}

impl EntityMarking {
    /// Encoded size in bytes.
    pub const SIZE: usize = 12;

    /// ASCII character set.
    pub const ASCII: u8 = 1;

    /// Build an ASCII marking, truncating to eleven bytes and zero-filling.
    pub fn from_text(text: &str) -> Self {
        let mut characters = [0u8; 11];
        for (slot, byte) in characters.iter_mut().zip(text.bytes()) {
            *slot = byte;
        }
        Self {
            character_set: Self::ASCII,
            characters,
        }
    }

    /// The marking up to the first NUL, lossily decoded.
    pub fn text(&self) -> String {
        let end = self
            .characters
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(self.characters.len());
        String::from_utf8_lossy(&self.characters[..end]).into_owned()
    }
}

impl Record for EntityMarking {
    fn marshalled_size(&self) -> usize {
        Self::SIZE
    }

    fn write(&self, writer: &mut Writer) -> Result<()> {
        writer.write_u8(self.character_set)?;
        writer.write_bytes(&self.characters)
    }

    fn read(&mut self, reader: &mut Reader) -> Result<()> {
        self.character_set = reader.read_u8()?;
        self.characters = reader.read_array()?;
        Ok(())
    }

    fn describe(&self, out: &mut Describer<'_>) -> fmt::Result {
        out.field("character_set", self.character_set)?;
        out.field("text", self.text())
    }
}
