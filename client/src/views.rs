//! Serializable views of land program instructions and state, used for `--output json`.

use land_interface::{
    instructions::{
        accounts::ordered_specs,
        InstructionDescriptor,
        LandInstruction,
    },
    program,
    state::land_plane::{
        LandPlane,
        LAND_PLANE_ACC_DATA_LEN,
    },
    sysvar,
};
use serde::Serialize;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct AccountView {
    pub name: &'static str,
    pub address: String,
    pub is_signer: bool,
    pub is_writable: bool,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct InstructionView {
    pub instruction: String,
    pub program_id: String,
    pub accounts: Vec<AccountView>,
    /// Hex-encoded payload; empty when the instruction has none.
    pub data: String,
}

impl InstructionView {
    pub fn new(instruction: LandInstruction, descriptor: &InstructionDescriptor) -> Self {
        let accounts = ordered_specs(instruction.account_specs())
            .into_iter()
            .zip(&descriptor.accounts)
            .map(|(spec, account)| AccountView {
                name: spec.name,
                address: account.address.to_string(),
                is_signer: account.is_signer,
                is_writable: account.is_writable,
            })
            .collect();

        Self {
            instruction: instruction.to_string(),
            program_id: descriptor.program_id.to_string(),
            accounts,
            data: hex::encode(&descriptor.data),
        }
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct LandPlaneView {
    pub version: String,
    pub is_initialized: bool,
    pub last_minted_x: u64,
    pub last_minted_y: u64,
    pub depth: u64,
}

impl From<&LandPlane> for LandPlaneView {
    fn from(plane: &LandPlane) -> Self {
        Self {
            version: plane.version.to_string(),
            is_initialized: plane.is_initialized(),
            last_minted_x: plane.last_minted_x,
            last_minted_y: plane.last_minted_y,
            depth: plane.depth,
        }
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ConstantsView {
    pub program_id: String,
    pub rent_sysvar: String,
    pub land_plane_acc_data_len: usize,
}

impl Default for ConstantsView {
    fn default() -> Self {
        Self {
            program_id: program::ID.to_string(),
            rent_sysvar: sysvar::RENT_ID.to_string(),
            land_plane_acc_data_len: LAND_PLANE_ACC_DATA_LEN,
        }
    }
}
