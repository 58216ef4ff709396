use std::str::FromStr;

use land_interface::{
    instructions::{
        accounts::AccountReference,
        initialize_plane::{
            initialize_plane,
            InitializePlaneParams,
        },
        mint_next::{
            mint_next,
            MintNextParams,
        },
        LandInstruction,
    },
    program,
    sysvar,
    Address,
};

fn address(s: &str) -> Address {
    Address::from_str(s).expect("valid base58 address")
}

#[test]
fn initialize_plane_descriptor() {
    let plane = address("4Nd1mBQtrMJVYVfKf2PJy9NZUZdTAsp7D4xWLs4gDB4T");
    let ix = initialize_plane(&InitializePlaneParams { land_plane: plane });

    assert_eq!(ix.program_id, program::ID);
    assert_eq!(
        ix.accounts,
        vec![
            AccountReference {
                address: plane,
                is_signer: false,
                is_writable: true,
            },
            AccountReference {
                address: sysvar::RENT_ID,
                is_signer: false,
                is_writable: false,
            },
        ]
    );
    assert_eq!(ix.data, vec![0x00]);
}

#[test]
fn mint_next_descriptor() {
    let [owner, asset, plane, token, mint] =
        [1u8, 2, 3, 4, 5].map(|b| Address::new_from_array([b; 32]));
    let ix = mint_next(&MintNextParams {
        owner,
        land_asset: asset,
        land_plane: plane,
        nft_token_account: token,
        nft_mint: mint,
    });

    let flags: Vec<(Address, bool, bool)> = ix
        .accounts
        .iter()
        .map(|a| (a.address, a.is_signer, a.is_writable))
        .collect();
    assert_eq!(
        flags,
        vec![
            (owner, true, false),
            (asset, false, true),
            (plane, false, true),
            (token, false, false),
            (mint, false, false),
        ]
    );
    assert!(ix.data.is_empty());
    assert_eq!(LandInstruction::identify(&ix), Ok(LandInstruction::MintNext));
}

#[test]
fn builders_are_deterministic() {
    let params = InitializePlaneParams {
        land_plane: Address::new_from_array([8; 32]),
    };
    assert_eq!(initialize_plane(&params), initialize_plane(&params));
}

#[test]
fn builders_are_usable_across_threads() {
    let handles: Vec<_> = (0u8..8)
        .map(|i| {
            std::thread::spawn(move || {
                initialize_plane(&InitializePlaneParams {
                    land_plane: Address::new_from_array([i; 32]),
                })
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let ix = handle.join().unwrap();
        assert_eq!(ix.accounts[0].address, Address::new_from_array([i as u8; 32]));
    }
}
