pub mod land_plane;

pub const U8_SIZE: usize = core::mem::size_of::<u8>();
pub const U64_SIZE: usize = core::mem::size_of::<u64>();
