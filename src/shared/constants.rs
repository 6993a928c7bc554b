/// Durable storage key for the persisted auth session snapshot.
pub const AUTH_SESSION_KEY: &str = "auth-session";

/// Durable storage key for the assignment dashboard snapshot.
pub const ASSIGNMENT_STORAGE_KEY: &str = "assignment-storage";

/// Plain token key, readable before the session store is hydrated.
pub const TOKEN_KEY: &str = "token";

/// Plain language key, readable before authentication.
pub const LANG_KEY: &str = "lang";

/// Session value for winter-term offers (compared case-insensitively).
pub const WINTER_SESSION: &str = "hiver";

/// Widths at or above this render the desktop layout variant.
pub const PHONE_MAX_WIDTH: u32 = 480;

/// Narrower threshold used by the compact navigation shell.
pub const COMPACT_NAV_MAX_WIDTH: u32 = 430;
