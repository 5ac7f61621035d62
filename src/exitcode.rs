//! Standard exit codes (BSD sysexits.h compatible)

/// Successful termination
pub const OK: i32 = 0;

/// Command line usage error
pub const USAGE: i32 = 64;

/// Data format error (bad order line, unknown menu item)
pub const DATAERR: i32 = 65;

/// Configuration error
pub const CONFIG: i32 = 78;
