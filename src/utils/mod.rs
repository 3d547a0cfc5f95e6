// Utils compartidos

pub mod constants;
pub mod storage;
pub mod format;
pub mod download;

pub use constants::*;
pub use storage::*;
pub use format::*;
