//! Application constants and configuration

pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Intrinsic size hint for fetched avatar images, logical px. The rendered
/// size is always overridden by the card breakpoint.
pub const AVATAR_INTRINSIC: u32 = 500;

/// Concurrent avatar fetches during prefetch
pub const AVATAR_FETCH_CONCURRENCY: usize = 4;

/// Cache subdirectory for fetched avatar images
pub const AVATAR_CACHE_DIR: &str = "avatars";
