//! Account layouts and instruction builders for the land registry program.
//!
//! Everything in this crate is pure: encoding, decoding, and instruction construction never touch
//! the network, never sign, and never derive addresses.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod address;
pub mod error;
pub mod instructions;
pub mod pack;
pub mod state;

pub use address::Address;

pub mod program {
    use crate::Address;

    /// `73SDVkNXf4UBhttg1N6sQa3EVyge9hN7ESSwU7pzDb5T`
    #[rustfmt::skip]
    pub const ID: Address = Address::new_from_array([
        89, 197, 203, 91, 174, 246, 104, 138, 35, 171, 96, 62, 121, 182, 45, 50,
        30, 68, 126, 156, 78, 29, 43, 181, 16, 254, 170, 9, 150, 145, 39, 154,
    ]);
}

pub mod sysvar {
    use crate::Address;

    /// `SysvarRent111111111111111111111111111111111`
    #[rustfmt::skip]
    pub const RENT_ID: Address = Address::new_from_array([
        6, 167, 213, 23, 25, 44, 92, 81, 33, 140, 201, 76, 61, 74, 241, 127,
        88, 218, 238, 8, 155, 161, 253, 68, 227, 219, 217, 138, 0, 0, 0, 0,
    ]);
}
