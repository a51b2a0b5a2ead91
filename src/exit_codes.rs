//! Process exit codes used by the `mdhtml` binary
//!
//! - 0: the destination file was written
//! - 1: bad usage, missing source, configuration error or any processing failure

pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;

pub mod exit {
    use super::{FAILURE, SUCCESS};

    pub fn success() -> ! {
        std::process::exit(SUCCESS)
    }

    pub fn failure() -> ! {
        std::process::exit(FAILURE)
    }
}
