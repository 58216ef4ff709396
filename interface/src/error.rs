use core::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u8)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
pub enum LandError {
    LengthMismatch,
    UnknownVersionTag,
    IncompleteParameters,
    SchemaMismatch,
    InvalidAddress,
    InvalidInstructionTag,
    IncorrectProgramId,
    AccountLayoutMismatch,
}

impl From<LandError> for &'static str {
    fn from(value: LandError) -> Self {
        match value {
            LandError::LengthMismatch => "Byte length doesn't match the record layout",
            LandError::UnknownVersionTag => "Unknown land plane version tag",
            LandError::IncompleteParameters => "A required instruction account wasn't provided",
            LandError::SchemaMismatch => "Field values don't match the record schema",
            LandError::InvalidAddress => "Invalid base58 address",
            LandError::InvalidInstructionTag => "Invalid instruction tag",
            LandError::IncorrectProgramId => "Instruction doesn't target the land program",
            LandError::AccountLayoutMismatch => "Instruction accounts don't match the layout",
        }
    }
}

impl fmt::Display for LandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).into())
    }
}

impl core::error::Error for LandError {}

pub type LandResult<T = ()> = Result<T, LandError>;
