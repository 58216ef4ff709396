use alloc::{
    vec,
    vec::Vec,
};

use static_assertions::const_assert_eq;

use crate::{
    address::Address,
    error::LandError,
    instructions::{
        accounts::{
            order_accounts,
            AccountSpec,
        },
        InstructionDescriptor,
        InstructionTag,
    },
    pack::{
        Field,
        Record,
        Schema,
        Value,
        WireType,
    },
    program,
    sysvar,
};

pub const LAND_PLANE: AccountSpec =
    AccountSpec::writable("land_plane", "The new land plane account.");
pub const RENT_SYSVAR: AccountSpec =
    AccountSpec::fixed("rent_sysvar", sysvar::RENT_ID, "The rent sysvar.");

/// Accounts in declaration order.
pub const ACCOUNTS: [AccountSpec; 2] = [LAND_PLANE, RENT_SYSVAR];

/// Required inputs for [`initialize_plane`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InitializePlaneParams {
    pub land_plane: Address,
}

/// The instruction payload: a lone tag byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InitializePlaneArgs {
    instruction: InstructionTag,
}

impl Default for InitializePlaneArgs {
    fn default() -> Self {
        Self {
            instruction: InstructionTag::InitializePlane,
        }
    }
}

impl Record for InitializePlaneArgs {
    const SCHEMA: Schema = Schema::new(
        "InitializePlaneArgs",
        &[Field::new("instruction", WireType::U8)],
    );

    fn to_values(&self) -> Vec<Value> {
        vec![Value::U8(self.instruction as u8)]
    }

    fn from_values(values: &[Value]) -> Result<Self, LandError> {
        let [instruction] = values else {
            return Err(LandError::SchemaMismatch);
        };
        match InstructionTag::try_from(instruction.as_u8()?)? {
            InstructionTag::InitializePlane => Ok(Self::default()),
        }
    }
}

const_assert_eq!(<InitializePlaneArgs as Record>::SCHEMA.len(), 1);

/// Builds the instruction that initializes a freshly allocated land plane account.
///
/// The account must already exist with [`LAND_PLANE_ACC_DATA_LEN`] bytes of space and be owned
/// by the land program; allocating it is the caller's job.
///
/// ### Accounts
///  0. `[WRITE]` Land plane account
///  1. `[READ]` Rent sysvar
///
/// [`LAND_PLANE_ACC_DATA_LEN`]: crate::state::land_plane::LAND_PLANE_ACC_DATA_LEN
pub fn initialize_plane(params: &InitializePlaneParams) -> InstructionDescriptor {
    InstructionDescriptor {
        program_id: program::ID,
        accounts: order_accounts(&ACCOUNTS, [params.land_plane, sysvar::RENT_ID]),
        data: InitializePlaneArgs::default().pack(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instructions::accounts::AccountReference;

    #[test]
    fn payload_is_a_single_zero_byte() {
        assert_eq!(InitializePlaneArgs::default().pack(), [0u8]);
        assert_eq!(
            InitializePlaneArgs::unpack(&[0]),
            Ok(InitializePlaneArgs::default())
        );
    }

    #[test]
    fn payload_rejects_other_tags() {
        assert_eq!(
            InitializePlaneArgs::unpack(&[1]),
            Err(LandError::InvalidInstructionTag)
        );
        assert_eq!(
            InitializePlaneArgs::unpack(&[]),
            Err(LandError::LengthMismatch)
        );
    }

    #[test]
    fn accounts_are_plane_then_rent() {
        let plane = Address::new_from_array([1; 32]);
        let ix = initialize_plane(&InitializePlaneParams { land_plane: plane });
        assert_eq!(ix.program_id, program::ID);
        assert_eq!(
            ix.accounts,
            [
                AccountReference::new(plane, false),
                AccountReference::new_readonly(sysvar::RENT_ID, false),
            ]
        );
    }
}
