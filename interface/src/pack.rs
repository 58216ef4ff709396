//! Schema-driven packing of fixed-layout records.
//!
//! A [`Schema`] is an ordered list of named fields with fixed wire widths. Types implementing
//! [`Record`] describe themselves with a schema and convert to and from a flat list of
//! [`Value`]s; [`Record::pack`] and [`Record::unpack`] are the only routines that touch bytes, so
//! field order and widths live in exactly one place for both directions.
//!
//! All integers are little-endian. There is no padding and no length prefix.

use alloc::vec::Vec;

use crate::{
    error::LandError,
    state::{
        U64_SIZE,
        U8_SIZE,
    },
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WireType {
    U8,
    U64,
}

impl WireType {
    /// The number of bytes a value of this type occupies on the wire.
    #[inline(always)]
    pub const fn width(&self) -> usize {
        match self {
            WireType::U8 => U8_SIZE,
            WireType::U64 => U64_SIZE,
        }
    }

    /// Reads a value from `src`, which must be exactly [`WireType::width`] bytes.
    fn read(&self, src: &[u8]) -> Result<Value, LandError> {
        let value = match self {
            WireType::U8 => Value::U8(u8::from_le_bytes(le_array(src)?)),
            WireType::U64 => Value::U64(u64::from_le_bytes(le_array(src)?)),
        };
        Ok(value)
    }
}

#[inline(always)]
fn le_array<const N: usize>(src: &[u8]) -> Result<[u8; N], LandError> {
    src.try_into().or(Err(LandError::LengthMismatch))
}

/// A single decoded field value, tagged with its wire type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Value {
    U8(u8),
    U64(u64),
}

macro_rules! impl_value_getter {
    ($fn_name:ident, $variant:ident, $ty:ty) => {
        /// Returns the inner value, or [`LandError::SchemaMismatch`] if this is a different
        /// variant.
        #[inline(always)]
        pub fn $fn_name(&self) -> Result<$ty, LandError> {
            match self {
                Value::$variant(v) => Ok(*v),
                _ => Err(LandError::SchemaMismatch),
            }
        }
    };
}

impl Value {
    pub const fn wire_type(&self) -> WireType {
        match self {
            Value::U8(_) => WireType::U8,
            Value::U64(_) => WireType::U64,
        }
    }

    impl_value_getter!(as_u8, U8, u8);
    impl_value_getter!(as_u64, U64, u64);

    fn write_into(&self, dst: &mut Vec<u8>) {
        match self {
            Value::U8(v) => dst.extend_from_slice(&v.to_le_bytes()),
            Value::U64(v) => dst.extend_from_slice(&v.to_le_bytes()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub wire_type: WireType,
}

impl Field {
    pub const fn new(name: &'static str, wire_type: WireType) -> Self {
        Self { name, wire_type }
    }
}

/// An ordered, fixed-width record layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Schema {
    pub name: &'static str,
    pub fields: &'static [Field],
}

impl Schema {
    pub const fn new(name: &'static str, fields: &'static [Field]) -> Self {
        Self { name, fields }
    }

    /// The total packed length in bytes: the sum of every field's width.
    pub const fn len(&self) -> usize {
        let mut len = 0;
        let mut i = 0;
        while i < self.fields.len() {
            len += self.fields[i].wire_type.width();
            i += 1;
        }
        len
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Writes `values` in field order.
    ///
    /// `values` must line up with [`Schema::fields`] one-to-one; a [`Record`] implementation
    /// that violates this is a bug, caught by the debug assertions below.
    pub fn encode(&self, values: &[Value]) -> Vec<u8> {
        debug_assert_eq!(
            values.len(),
            self.fields.len(),
            "{} expects {} values",
            self.name,
            self.fields.len()
        );

        let mut dst = Vec::with_capacity(self.len());
        for (field, value) in self.fields.iter().zip(values) {
            debug_assert_eq!(
                field.wire_type,
                value.wire_type(),
                "{}.{} has the wrong wire type",
                self.name,
                field.name
            );
            value.write_into(&mut dst);
        }
        dst
    }

    /// Reads one [`Value`] per field.
    ///
    /// The length is checked before any field is read; a buffer that is too short or too long is
    /// rejected with [`LandError::LengthMismatch`] and never padded or truncated.
    pub fn decode(&self, bytes: &[u8]) -> Result<Vec<Value>, LandError> {
        if bytes.len() != self.len() {
            return Err(LandError::LengthMismatch);
        }

        let mut offset = 0;
        self.fields
            .iter()
            .map(|field| {
                let end = offset + field.wire_type.width();
                let value = field.wire_type.read(&bytes[offset..end]);
                offset = end;
                value
            })
            .collect()
    }
}

/// A fixed-layout record described by a [`Schema`].
pub trait Record: Sized {
    const SCHEMA: Schema;

    /// One value per schema field, in schema order.
    fn to_values(&self) -> Vec<Value>;

    /// Builds `Self` from values decoded with [`Record::SCHEMA`]. This is where semantic checks
    /// (enum tags, etc.) happen.
    fn from_values(values: &[Value]) -> Result<Self, LandError>;

    /// Packs `self` into exactly `Self::SCHEMA.len()` bytes.
    fn pack(&self) -> Vec<u8> {
        Self::SCHEMA.encode(&self.to_values())
    }

    fn unpack(bytes: &[u8]) -> Result<Self, LandError> {
        Self::from_values(&Self::SCHEMA.decode(bytes)?)
    }
}
