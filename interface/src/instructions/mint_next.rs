use alloc::vec::Vec;

use crate::{
    address::Address,
    instructions::{
        accounts::{
            order_accounts,
            AccountSpec,
        },
        InstructionDescriptor,
    },
    program,
};

pub const OWNER: AccountSpec = AccountSpec::readonly_signer(
    "owner",
    "Owner of the NFT token account; signs to bind the next plot to the NFT.",
);
pub const LAND_ASSET: AccountSpec = AccountSpec::writable(
    "land_asset",
    "PDA of the next plot: ['solsspace-land', land_plane, x, y].",
);
pub const LAND_PLANE: AccountSpec = AccountSpec::writable(
    "land_plane",
    "The land plane the next plot is minted from.",
);
pub const NFT_TOKEN_ACCOUNT: AccountSpec = AccountSpec::readonly(
    "nft_token_account",
    "The owner's associated token account holding the NFT.",
);
pub const NFT_MINT: AccountSpec = AccountSpec::readonly(
    "nft_mint",
    "The NFT's mint account.",
);

/// Accounts in declaration order.
pub const ACCOUNTS: [AccountSpec; 5] = [OWNER, LAND_ASSET, LAND_PLANE, NFT_TOKEN_ACCOUNT, NFT_MINT];

/// Required inputs for [`mint_next`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MintNextParams {
    pub owner: Address,
    pub land_asset: Address,
    pub land_plane: Address,
    pub nft_token_account: Address,
    pub nft_mint: Address,
}

/// Builds the instruction that mints the next plot of `land_plane` to the holder of an NFT.
///
/// Carries no payload; the program identifies the instruction from its accounts alone.
///
/// ### Accounts
///  0. `[SIGNER]` NFT token account owner
///  1. `[WRITE]` Land asset account
///  2. `[WRITE]` Land plane account
///  3. `[READ]` NFT associated token account
///  4. `[READ]` NFT mint
pub fn mint_next(params: &MintNextParams) -> InstructionDescriptor {
    let MintNextParams {
        owner,
        land_asset,
        land_plane,
        nft_token_account,
        nft_mint,
    } = *params;

    InstructionDescriptor {
        program_id: program::ID,
        accounts: order_accounts(
            &ACCOUNTS,
            [owner, land_asset, land_plane, nft_token_account, nft_mint],
        ),
        data: Vec::new(),
    }
}
