//! Turning account data as it's usually shown (base64 from RPC, hex from explorers and dumps)
//! into bytes and typed land program state.

use std::path::Path;

use anyhow::Context;
use base64::{
    engine::general_purpose::STANDARD,
    Engine as _,
};
use land_interface::{
    error::LandError,
    pack::Record,
    state::land_plane::{
        LandPlane,
        LAND_PLANE_ACC_DATA_LEN,
    },
};

#[derive(clap::ValueEnum, strum_macros::Display, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum Encoding {
    Hex,
    Base64,
}

/// Decodes account data text. Surrounding whitespace is ignored, as is a `0x` prefix on hex.
pub fn decode_account_data(text: &str, encoding: Encoding) -> anyhow::Result<Vec<u8>> {
    let text = text.trim();
    match encoding {
        Encoding::Hex => {
            hex::decode(text.strip_prefix("0x").unwrap_or(text)).context("Invalid hex account data")
        }
        Encoding::Base64 => STANDARD
            .decode(text)
            .context("Invalid base64 account data"),
    }
}

pub fn read_account_data_file(path: &Path, encoding: Encoding) -> anyhow::Result<Vec<u8>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Couldn't read account data from {}", path.display()))?;
    decode_account_data(&text, encoding)
}

pub fn decode_land_plane(bytes: &[u8]) -> anyhow::Result<LandPlane> {
    LandPlane::unpack(bytes).map_err(|e| {
        let context = match e {
            LandError::LengthMismatch => format!(
                "Couldn't decode {} bytes as a land plane ({LAND_PLANE_ACC_DATA_LEN} expected)",
                bytes.len()
            ),
            _ => "Couldn't decode land plane account data".to_string(),
        };
        anyhow::Error::new(e).context(context)
    })
}
