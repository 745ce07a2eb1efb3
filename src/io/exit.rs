use crate::error::Error;
use std::process::exit;

/// Every formula line was reported.
pub fn success() -> ! {
    exit(0)
}

/// Nothing was reported because the input could not be read.
pub fn input_error(error: &Error) -> ! {
    println!("% failed to read input: {}", error);
    exit(1)
}
