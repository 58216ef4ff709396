use alloc::vec::Vec;

use crate::{
    address::Address,
    error::LandError,
    instructions::{
        accounts::{
            ordered_specs,
            resolve_accounts,
            AccountReference,
            AccountSpec,
        },
        initialize_plane::InitializePlaneArgs,
    },
    pack::Record,
    program,
};

pub mod accounts;
pub mod initialize_plane;
pub mod mint_next;

/// Payload discriminants. Only instructions that carry a payload have a tag.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(test, derive(strum_macros::FromRepr, strum_macros::EnumIter))]
pub enum InstructionTag {
    InitializePlane,
}

impl TryFrom<u8> for InstructionTag {
    type Error = LandError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::InitializePlane),
            _ => Err(LandError::InvalidInstructionTag),
        }
    }
}

/// A program id, its ordered accounts, and the encoded payload: everything a signer needs to wrap
/// an instruction in a transaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InstructionDescriptor {
    pub program_id: Address,
    pub accounts: Vec<AccountReference>,
    /// Empty when the instruction carries no payload.
    pub data: Vec<u8>,
}

impl InstructionDescriptor {
    pub fn signers(&self) -> impl Iterator<Item = &Address> {
        self.accounts
            .iter()
            .filter(|account| account.is_signer)
            .map(|account| &account.address)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "client", derive(strum_macros::Display))]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
pub enum LandInstruction {
    InitializePlane,
    MintNext,
}

impl LandInstruction {
    /// The instruction's accounts in declaration order.
    pub fn account_specs(&self) -> &'static [AccountSpec] {
        match self {
            Self::InitializePlane => &initialize_plane::ACCOUNTS,
            Self::MintNext => &mint_next::ACCOUNTS,
        }
    }

    pub fn payload(&self) -> Vec<u8> {
        match self {
            Self::InitializePlane => InitializePlaneArgs::default().pack(),
            Self::MintNext => Vec::new(),
        }
    }

    /// Builds the instruction from addresses gathered by account name at runtime.
    ///
    /// Produces the same descriptor as the typed builders. Fails with
    /// [`LandError::IncompleteParameters`] if `lookup` is missing a required account.
    pub fn build_from_lookup(
        &self,
        lookup: impl Fn(&str) -> Option<Address>,
    ) -> Result<InstructionDescriptor, LandError> {
        Ok(InstructionDescriptor {
            program_id: program::ID,
            accounts: resolve_accounts(self.account_specs(), lookup)?,
            data: self.payload(),
        })
    }

    /// Classifies a descriptor as one of the land program's instructions and checks that its
    /// accounts sit in the expected positions with the expected flags.
    pub fn identify(descriptor: &InstructionDescriptor) -> Result<Self, LandError> {
        if descriptor.program_id != program::ID {
            return Err(LandError::IncorrectProgramId);
        }

        let instruction = if descriptor.data.is_empty() {
            Self::MintNext
        } else {
            InitializePlaneArgs::unpack(&descriptor.data)
                .or(Err(LandError::InvalidInstructionTag))?;
            Self::InitializePlane
        };

        instruction.check_account_layout(&descriptor.accounts)?;
        Ok(instruction)
    }

    fn check_account_layout(&self, accounts: &[AccountReference]) -> Result<(), LandError> {
        let expected = ordered_specs(self.account_specs());
        let layout_matches = expected.len() == accounts.len()
            && expected
                .iter()
                .zip(accounts)
                .all(|(spec, account)| spec.matches(account));

        if layout_matches {
            Ok(())
        } else {
            Err(LandError::AccountLayoutMismatch)
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;
    use crate::instructions::{
        initialize_plane::{
            initialize_plane,
            InitializePlaneParams,
        },
        mint_next::{
            mint_next,
            MintNextParams,
        },
    };

    const fn addr(b: u8) -> Address {
        Address::new_from_array([b; 32])
    }

    fn lookup_all(name: &str) -> Option<Address> {
        match name {
            "land_plane" => Some(addr(1)),
            "owner" => Some(addr(2)),
            "land_asset" => Some(addr(3)),
            "nft_token_account" => Some(addr(4)),
            "nft_mint" => Some(addr(5)),
            _ => None,
        }
    }

    #[test]
    fn test_instruction_tag_from_u8_exhaustive() {
        for variant in InstructionTag::iter() {
            let variant_u8 = variant as u8;
            assert_eq!(
                InstructionTag::from_repr(variant_u8).unwrap(),
                InstructionTag::try_from(variant_u8).unwrap(),
            );
            assert_eq!(InstructionTag::try_from(variant_u8).unwrap(), variant);
        }
        assert_eq!(
            InstructionTag::try_from(InstructionTag::iter().count() as u8),
            Err(LandError::InvalidInstructionTag)
        );
    }

    #[test]
    fn lookup_builder_matches_typed_builders() {
        assert_eq!(
            LandInstruction::InitializePlane.build_from_lookup(lookup_all),
            Ok(initialize_plane(&InitializePlaneParams {
                land_plane: addr(1)
            }))
        );
        assert_eq!(
            LandInstruction::MintNext.build_from_lookup(lookup_all),
            Ok(mint_next(&MintNextParams {
                owner: addr(2),
                land_asset: addr(3),
                land_plane: addr(1),
                nft_token_account: addr(4),
                nft_mint: addr(5),
            }))
        );
    }

    #[test]
    fn lookup_builder_reports_missing_accounts() {
        assert_eq!(
            LandInstruction::InitializePlane.build_from_lookup(|_| None),
            Err(LandError::IncompleteParameters)
        );
        assert_eq!(
            LandInstruction::MintNext.build_from_lookup(|name| {
                (name != "land_asset").then(|| lookup_all(name)).flatten()
            }),
            Err(LandError::IncompleteParameters)
        );
    }

    #[test]
    fn identify_round_trips_every_instruction() {
        for instruction in LandInstruction::iter() {
            let descriptor = instruction.build_from_lookup(lookup_all).unwrap();
            assert_eq!(LandInstruction::identify(&descriptor), Ok(instruction));
        }
    }

    #[test]
    fn identify_rejects_foreign_program() {
        let mut descriptor = LandInstruction::MintNext
            .build_from_lookup(lookup_all)
            .unwrap();
        descriptor.program_id = addr(42);
        assert_eq!(
            LandInstruction::identify(&descriptor),
            Err(LandError::IncorrectProgramId)
        );
    }

    #[test]
    fn identify_rejects_unknown_payload() {
        let mut descriptor = LandInstruction::InitializePlane
            .build_from_lookup(lookup_all)
            .unwrap();
        descriptor.data = [7].into();
        assert_eq!(
            LandInstruction::identify(&descriptor),
            Err(LandError::InvalidInstructionTag)
        );
        descriptor.data = [0, 0].into();
        assert_eq!(
            LandInstruction::identify(&descriptor),
            Err(LandError::InvalidInstructionTag)
        );
    }

    #[test]
    fn identify_rejects_reordered_or_wrong_accounts() {
        let mut descriptor = LandInstruction::MintNext
            .build_from_lookup(lookup_all)
            .unwrap();
        descriptor.accounts.swap(0, 1);
        assert_eq!(
            LandInstruction::identify(&descriptor),
            Err(LandError::AccountLayoutMismatch)
        );

        let mut descriptor = LandInstruction::InitializePlane
            .build_from_lookup(lookup_all)
            .unwrap();
        descriptor.accounts[1].address = addr(9);
        assert_eq!(
            LandInstruction::identify(&descriptor),
            Err(LandError::AccountLayoutMismatch)
        );

        descriptor.accounts.pop();
        assert_eq!(
            LandInstruction::identify(&descriptor),
            Err(LandError::AccountLayoutMismatch)
        );
    }

    #[test]
    fn signers_lists_only_signing_accounts() {
        let descriptor = LandInstruction::MintNext
            .build_from_lookup(lookup_all)
            .unwrap();
        assert_eq!(descriptor.signers().collect::<Vec<_>>(), [&addr(2)]);
        let descriptor = LandInstruction::InitializePlane
            .build_from_lookup(lookup_all)
            .unwrap();
        assert_eq!(descriptor.signers().count(), 0);
    }
}
