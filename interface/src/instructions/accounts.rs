//! Account declarations and the positional ordering the land program expects.
//!
//! The program reads accounts by index, never by name, so every instruction lists its accounts
//! in one canonical order:
//!
//! ```text
//!   [ writable signers | read-only signers | writable non-signers | read-only non-signers ]
//! ```
//!
//! Inside each bucket, accounts keep the order they're declared in. [`order_accounts`] is the
//! only place this ordering is applied.

use alloc::vec::Vec;

use crate::{
    address::Address,
    error::LandError,
};

/// A positional entry in an instruction: an address plus its signer and write flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AccountReference {
    pub address: Address,
    pub is_signer: bool,
    pub is_writable: bool,
}

impl AccountReference {
    /// A writable account reference.
    pub const fn new(address: Address, is_signer: bool) -> Self {
        Self {
            address,
            is_signer,
            is_writable: true,
        }
    }

    pub const fn new_readonly(address: Address, is_signer: bool) -> Self {
        Self {
            address,
            is_signer,
            is_writable: false,
        }
    }
}

/// The declaration of a single instruction account.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccountSpec {
    pub name: &'static str,
    pub is_signer: bool,
    pub is_writable: bool,
    /// Set for well-known accounts (sysvars, programs) the caller never supplies.
    pub fixed_address: Option<Address>,
    pub desc: &'static str,
}

impl AccountSpec {
    const fn new(name: &'static str, is_signer: bool, is_writable: bool, desc: &'static str) -> Self {
        Self {
            name,
            is_signer,
            is_writable,
            fixed_address: None,
            desc,
        }
    }

    pub const fn writable_signer(name: &'static str, desc: &'static str) -> Self {
        Self::new(name, true, true, desc)
    }

    pub const fn readonly_signer(name: &'static str, desc: &'static str) -> Self {
        Self::new(name, true, false, desc)
    }

    pub const fn writable(name: &'static str, desc: &'static str) -> Self {
        Self::new(name, false, true, desc)
    }

    pub const fn readonly(name: &'static str, desc: &'static str) -> Self {
        Self::new(name, false, false, desc)
    }

    /// A read-only, non-signer account whose address is always `address`.
    pub const fn fixed(name: &'static str, address: Address, desc: &'static str) -> Self {
        Self {
            fixed_address: Some(address),
            ..Self::new(name, false, false, desc)
        }
    }

    /// The account's position class. Lower buckets come first.
    #[inline(always)]
    pub const fn bucket(&self) -> u8 {
        match (self.is_signer, self.is_writable) {
            (true, true) => 0,
            (true, false) => 1,
            (false, true) => 2,
            (false, false) => 3,
        }
    }

    #[inline(always)]
    pub const fn reference(&self, address: Address) -> AccountReference {
        AccountReference {
            address,
            is_signer: self.is_signer,
            is_writable: self.is_writable,
        }
    }

    /// Whether `account` has the flags (and, for fixed accounts, the address) this spec requires.
    pub fn matches(&self, account: &AccountReference) -> bool {
        account.is_signer == self.is_signer
            && account.is_writable == self.is_writable
            && self
                .fixed_address
                .map_or(true, |fixed| fixed == account.address)
    }
}

/// Returns `specs` in the canonical on-chain order.
pub fn ordered_specs(specs: &[AccountSpec]) -> Vec<&AccountSpec> {
    let mut ordered: Vec<&AccountSpec> = specs.iter().collect();
    // `sort_by_key` is stable, which keeps declaration order within a bucket.
    ordered.sort_by_key(|spec| spec.bucket());
    ordered
}

/// Pairs each spec with the address at the same declaration index and returns the references in
/// the canonical on-chain order.
///
/// The const length ties `addresses` to `specs`, so a missing address is a compile error rather
/// than a runtime one.
pub fn order_accounts<const N: usize>(
    specs: &[AccountSpec; N],
    addresses: [Address; N],
) -> Vec<AccountReference> {
    let mut pairs: Vec<(&AccountSpec, Address)> = specs.iter().zip(addresses).collect();
    pairs.sort_by_key(|(spec, _)| spec.bucket());
    pairs
        .into_iter()
        .map(|(spec, address)| spec.reference(address))
        .collect()
}

/// Resolves every spec's address by name, then orders them like [`order_accounts`].
///
/// Fixed accounts never consult `lookup`. Any other account that `lookup` can't provide fails
/// with [`LandError::IncompleteParameters`].
pub fn resolve_accounts(
    specs: &[AccountSpec],
    lookup: impl Fn(&str) -> Option<Address>,
) -> Result<Vec<AccountReference>, LandError> {
    ordered_specs(specs)
        .into_iter()
        .map(|spec| {
            spec.fixed_address
                .or_else(|| lookup(spec.name))
                .map(|address| spec.reference(address))
                .ok_or(LandError::IncompleteParameters)
        })
        .collect()
}
