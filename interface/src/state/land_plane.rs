use alloc::{
    vec,
    vec::Vec,
};

use static_assertions::const_assert_eq;

use crate::{
    error::LandError,
    pack::{
        Field,
        Record,
        Schema,
        Value,
        WireType,
    },
    state::{
        U64_SIZE,
        U8_SIZE,
    },
};

/// The size in bytes of a land plane account's data. Callers use this to size the account and to
/// compute its rent-exempt balance.
pub const LAND_PLANE_ACC_DATA_LEN: usize = <LandPlane as Record>::SCHEMA.len();

const_assert_eq!(LAND_PLANE_ACC_DATA_LEN, U8_SIZE + U64_SIZE * 3);
const_assert_eq!(LAND_PLANE_ACC_DATA_LEN, 25);

#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "client", derive(strum_macros::Display))]
#[cfg_attr(test, derive(strum_macros::FromRepr, strum_macros::EnumIter))]
pub enum LandPlaneVersion {
    #[default]
    Uninitialized,
    PlaneV1,
}

impl TryFrom<u8> for LandPlaneVersion {
    type Error = LandError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Uninitialized),
            1 => Ok(Self::PlaneV1),
            _ => Err(LandError::UnknownVersionTag),
        }
    }
}

/// The land program's record of minting progress across a plane of land plots.
///
/// Only the program itself advances these counters. Client code decodes the account to display
/// it, and constructs values directly only for tests and resets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct LandPlane {
    pub version: LandPlaneVersion,
    /// The x coordinate of the most recently minted plot.
    pub last_minted_x: u64,
    /// The y coordinate of the most recently minted plot.
    pub last_minted_y: u64,
    /// The nesting depth of this plane. Opaque to the client.
    pub depth: u64,
}

/// A partial set of [`LandPlane`] fields. `None` keeps the existing value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LandPlaneOverrides {
    pub version: Option<LandPlaneVersion>,
    pub last_minted_x: Option<u64>,
    pub last_minted_y: Option<u64>,
    pub depth: Option<u64>,
}

impl LandPlane {
    pub const fn new(
        version: LandPlaneVersion,
        last_minted_x: u64,
        last_minted_y: u64,
        depth: u64,
    ) -> Self {
        Self {
            version,
            last_minted_x,
            last_minted_y,
            depth,
        }
    }

    /// Returns a copy of `self` with every `Some` field in `overrides` applied.
    pub fn with_overrides(&self, overrides: LandPlaneOverrides) -> Self {
        Self {
            version: overrides.version.unwrap_or(self.version),
            last_minted_x: overrides.last_minted_x.unwrap_or(self.last_minted_x),
            last_minted_y: overrides.last_minted_y.unwrap_or(self.last_minted_y),
            depth: overrides.depth.unwrap_or(self.depth),
        }
    }

    /// Returns a copy of `self` marked as uninitialized, keeping the counters. This is what a
    /// client shows once the account it was tracking no longer exists.
    pub fn reset(&self) -> Self {
        self.with_overrides(LandPlaneOverrides {
            version: Some(LandPlaneVersion::Uninitialized),
            ..Default::default()
        })
    }

    #[inline(always)]
    pub fn is_initialized(&self) -> bool {
        self.version != LandPlaneVersion::Uninitialized
    }
}

impl Record for LandPlane {
    const SCHEMA: Schema = Schema::new(
        "LandPlane",
        &[
            Field::new("version", WireType::U8),
            Field::new("last_minted_x", WireType::U64),
            Field::new("last_minted_y", WireType::U64),
            Field::new("depth", WireType::U64),
        ],
    );

    fn to_values(&self) -> Vec<Value> {
        vec![
            Value::U8(self.version as u8),
            Value::U64(self.last_minted_x),
            Value::U64(self.last_minted_y),
            Value::U64(self.depth),
        ]
    }

    fn from_values(values: &[Value]) -> Result<Self, LandError> {
        let [version, last_minted_x, last_minted_y, depth] = values else {
            return Err(LandError::SchemaMismatch);
        };
        Ok(Self {
            version: LandPlaneVersion::try_from(version.as_u8()?)?,
            last_minted_x: last_minted_x.as_u64()?,
            last_minted_y: last_minted_y.as_u64()?,
            depth: depth.as_u64()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_version_from_u8_exhaustive() {
        for variant in LandPlaneVersion::iter() {
            let variant_u8 = variant as u8;
            assert_eq!(
                LandPlaneVersion::from_repr(variant_u8).unwrap(),
                LandPlaneVersion::try_from(variant_u8).unwrap(),
            );
        }
        for tag in (LandPlaneVersion::iter().count() as u8)..=u8::MAX {
            assert_eq!(
                LandPlaneVersion::try_from(tag),
                Err(LandError::UnknownVersionTag)
            );
        }
    }

    #[test]
    fn default_is_uninitialized_and_zeroed() {
        let plane = LandPlane::default();
        assert!(!plane.is_initialized());
        assert_eq!(plane.pack(), [0u8; LAND_PLANE_ACC_DATA_LEN]);
    }

    #[test]
    fn overrides_apply_only_some_fields() {
        let plane = LandPlane::new(LandPlaneVersion::PlaneV1, 4, 9, 2);
        let updated = plane.with_overrides(LandPlaneOverrides {
            last_minted_y: Some(10),
            ..Default::default()
        });
        assert_eq!(updated, LandPlane::new(LandPlaneVersion::PlaneV1, 4, 10, 2));
        // The source record is untouched.
        assert_eq!(plane.last_minted_y, 9);
    }

    #[test]
    fn reset_keeps_counters() {
        let plane = LandPlane::new(LandPlaneVersion::PlaneV1, 4, 9, 2);
        let reset = plane.reset();
        assert!(!reset.is_initialized());
        assert_eq!(
            (reset.last_minted_x, reset.last_minted_y, reset.depth),
            (4, 9, 2)
        );
    }
}
