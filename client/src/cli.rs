//! Command-line interface: builds land program instructions and decodes land plane accounts
//! without touching the network.

use std::{
    io::Write,
    path::PathBuf,
};

use anyhow::Context;
use clap::{
    ArgGroup,
    Args,
    Parser,
    Subcommand,
    ValueEnum,
};
use land_interface::{
    instructions::{
        initialize_plane::{
            initialize_plane,
            InitializePlaneParams,
        },
        mint_next::{
            mint_next,
            MintNextParams,
        },
        InstructionDescriptor,
        LandInstruction,
    },
    Address,
};
use serde::Serialize;

use crate::{
    account_data::{
        decode_account_data,
        decode_land_plane,
        read_account_data_file,
        Encoding,
    },
    logs::{
        log_info,
        log_success,
        log_warning,
    },
    pretty::{
        instruction::PrettyInstruction,
        land_plane::PrettyLandPlane,
    },
    views::{
        ConstantsView,
        InstructionView,
        LandPlaneView,
    },
};

#[derive(Parser, Debug)]
#[command(name = "land-cli", version, about = "Offline tooling for the land registry program")]
pub struct Cli {
    /// How results are written to stdout.
    #[arg(long, value_enum, default_value_t = OutputFormat::Pretty, global = true)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Pretty,
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build the instruction that initializes an allocated land plane account.
    InitializePlane {
        #[arg(long)]
        land_plane: Address,
    },
    /// Build the instruction that mints the next plot of a land plane.
    MintNext {
        /// Owner of the NFT token account. Signs the transaction.
        #[arg(long)]
        owner: Address,
        /// Address of the next plot's land asset account.
        #[arg(long)]
        land_asset: Address,
        #[arg(long)]
        land_plane: Address,
        /// The owner's associated token account for the NFT.
        #[arg(long)]
        nft_token_account: Address,
        #[arg(long)]
        nft_mint: Address,
    },
    /// Decode raw land plane account data.
    DecodePlane(DecodePlaneArgs),
    /// Print the program id, rent sysvar and land plane account size.
    Constants,
}

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("source").required(true).args(["data", "file"])))]
pub struct DecodePlaneArgs {
    /// Account data as text.
    #[arg(long)]
    pub data: Option<String>,
    /// A file containing account data as text.
    #[arg(long)]
    pub file: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = Encoding::Base64)]
    pub encoding: Encoding,
}

/// Runs `cli`, writing results to `out`. Status messages go to stderr through [`crate::logs`].
pub fn run(cli: &Cli, out: &mut impl Write) -> anyhow::Result<()> {
    match &cli.command {
        Command::InitializePlane { land_plane } => write_instruction(
            cli.output,
            out,
            LandInstruction::InitializePlane,
            &initialize_plane(&InitializePlaneParams {
                land_plane: *land_plane,
            }),
        ),
        Command::MintNext {
            owner,
            land_asset,
            land_plane,
            nft_token_account,
            nft_mint,
        } => write_instruction(
            cli.output,
            out,
            LandInstruction::MintNext,
            &mint_next(&MintNextParams {
                owner: *owner,
                land_asset: *land_asset,
                land_plane: *land_plane,
                nft_token_account: *nft_token_account,
                nft_mint: *nft_mint,
            }),
        ),
        Command::DecodePlane(args) => {
            let bytes = match (&args.data, &args.file) {
                (Some(data), _) => decode_account_data(data, args.encoding)?,
                (None, Some(path)) => read_account_data_file(path, args.encoding)?,
                (None, None) => anyhow::bail!("Either --data or --file is required"),
            };
            let plane = decode_land_plane(&bytes)?;
            match plane.is_initialized() {
                true => log_success("decode-plane", format!("Decoded {} bytes", bytes.len())),
                false => log_warning("decode-plane", "Land plane account is uninitialized"),
            }
            match cli.output {
                OutputFormat::Pretty => {
                    writeln!(out, "{}", PrettyLandPlane(&plane)).context("Couldn't write land plane")
                }
                OutputFormat::Json => write_json(out, &LandPlaneView::from(&plane)),
            }
        }
        Command::Constants => {
            let constants = ConstantsView::default();
            match cli.output {
                OutputFormat::Pretty => writeln!(
                    out,
                    "program_id              {}\nrent_sysvar             {}\nland_plane_acc_data_len {}",
                    constants.program_id, constants.rent_sysvar, constants.land_plane_acc_data_len
                )
                .context("Couldn't write constants"),
                OutputFormat::Json => write_json(out, &constants),
            }
        }
    }
}

fn write_instruction(
    output: OutputFormat,
    out: &mut impl Write,
    instruction: LandInstruction,
    descriptor: &InstructionDescriptor,
) -> anyhow::Result<()> {
    log_info(
        instruction,
        format!(
            "{} accounts, {} signer(s), {} data byte(s)",
            descriptor.accounts.len(),
            descriptor.signers().count(),
            descriptor.data.len()
        ),
    );
    match output {
        OutputFormat::Pretty => writeln!(
            out,
            "{}",
            PrettyInstruction {
                instruction,
                descriptor,
            }
        )
        .context("Couldn't write instruction"),
        OutputFormat::Json => write_json(out, &InstructionView::new(instruction, descriptor)),
    }
}

fn write_json(out: &mut impl Write, value: &impl Serialize) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).context("Couldn't serialize output")?;
    writeln!(out).context("Couldn't write output")
}
