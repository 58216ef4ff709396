use std::fmt::{
    self,
    Display,
    Formatter,
};

use colored::Colorize;
use land_interface::instructions::{
    accounts::{
        ordered_specs,
        AccountReference,
    },
    InstructionDescriptor,
    LandInstruction,
};

use crate::logs::LogColor;

pub struct PrettyInstruction<'a> {
    pub instruction: LandInstruction,
    pub descriptor: &'a InstructionDescriptor,
}

impl Display for PrettyInstruction<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}::{}",
            "land_program".color(LogColor::Debug),
            self.instruction.to_string().color(LogColor::Highlight)
        )?;
        writeln!(
            f,
            "  {} {}",
            "program".color(LogColor::FadedGray),
            self.descriptor.program_id
        )?;

        let specs = ordered_specs(self.instruction.account_specs());
        for (i, (spec, account)) in specs.iter().zip(&self.descriptor.accounts).enumerate() {
            writeln!(
                f,
                "  {i}. {} {} {}",
                format!("{:<17}", access_label(account)).color(LogColor::Info),
                account.address,
                spec.name.color(LogColor::Gray)
            )?;
        }

        let data = match self.descriptor.data.is_empty() {
            true => "<none>".color(LogColor::FadedGray).to_string(),
            false => hex::encode(&self.descriptor.data),
        };
        write!(f, "  {} {}", "data".color(LogColor::FadedGray), data)
    }
}

/// The `[SIGNER]`/`[WRITE]`/`[READ]` labels used in instruction doc comments.
pub fn access_label(account: &AccountReference) -> &'static str {
    match (account.is_signer, account.is_writable) {
        (true, true) => "[SIGNER, WRITE]",
        (true, false) => "[SIGNER]",
        (false, true) => "[WRITE]",
        (false, false) => "[READ]",
    }
}

#[cfg(test)]
mod tests {
    use land_interface::{
        instructions::mint_next::{
            mint_next,
            MintNextParams,
        },
        Address,
    };

    use super::*;

    #[test]
    fn lists_accounts_in_order_with_names() {
        colored::control::set_override(false);

        let [owner, land_asset, land_plane, nft_token_account, nft_mint] =
            [1u8, 2, 3, 4, 5].map(|b| Address::new_from_array([b; 32]));
        let descriptor = mint_next(&MintNextParams {
            owner,
            land_asset,
            land_plane,
            nft_token_account,
            nft_mint,
        });
        let rendered = PrettyInstruction {
            instruction: LandInstruction::MintNext,
            descriptor: &descriptor,
        }
        .to_string();

        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "land_program::MintNext");
        assert!(lines[2].starts_with("  0. [SIGNER]"));
        assert!(lines[2].ends_with(&format!("{owner} owner")));
        assert!(lines[3].ends_with("land_asset"));
        assert!(lines[4].ends_with("land_plane"));
        assert!(lines[5].starts_with("  3. [READ]"));
        assert!(lines[6].ends_with("nft_mint"));
        assert_eq!(lines[7], "  data <none>");
    }

    #[test]
    fn access_labels() {
        let address = Address::default();
        assert_eq!(
            access_label(&AccountReference::new(address, true)),
            "[SIGNER, WRITE]"
        );
        assert_eq!(
            access_label(&AccountReference::new_readonly(address, false)),
            "[READ]"
        );
    }
}
