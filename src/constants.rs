//! Application-wide constants and configuration values
//!
//! Upstream endpoints, default client identity and other values shared between
//! the library and the CLI live here.

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of idle connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 10;

/// Official Diveharder API base URL
pub const OFFICIAL_DIVEHARDER_URL: &str = "https://api.diveharder.com";

/// Official community Helldivers 2 API base URL
pub const OFFICIAL_COMMUNITY_URL: &str = "https://api.helldivers2.dev";

/// Default client identity sent in `User-Agent` and `X-Super-Client`
pub fn default_user_agent() -> String {
    format!("DiveHarderAPIWrapper/{}", env!("CARGO_PKG_VERSION"))
}

/// Request header names the community API uses to identify clients
pub mod headers {
    pub const SUPER_CLIENT: &str = "X-Super-Client";
    pub const SUPER_CONTACT: &str = "X-Super-Contact";
}

/// Community API endpoint segments (under `/api/v1`)
pub mod community {
    pub const API_PREFIX: [&str; 2] = ["api", "v1"];
    pub const DISPATCHES: &str = "dispatches";
    pub const WAR: &str = "war";
    pub const STEAM: &str = "steam";
    pub const PLANETS: &str = "planets";
    pub const PLANET_EVENTS: &str = "planet-events";
    pub const CAMPAIGNS: &str = "campaigns";
    pub const ASSIGNMENTS: &str = "assignments";
}

/// Diveharder API endpoint names
pub mod diveharder {
    pub const STATUS: &str = "status";
    pub const WAR_INFO: &str = "war_info";
    pub const PLANET_STATS: &str = "planet_stats";
    pub const UPDATES: &str = "updates";
    pub const ALL: &str = "all";
}

/// Environment variable names
pub mod env_vars {
    /// Override for the community API base URL
    pub const COMMUNITY_URL: &str = "DIVEHARDER_COMMUNITY_URL";

    /// Override for the Diveharder API base URL
    pub const DIVEHARDER_URL: &str = "DIVEHARDER_URL";

    /// Override for the client identity
    pub const USER_AGENT: &str = "DIVEHARDER_USER_AGENT";

    /// Override for the contact sent in `X-Super-Contact`
    pub const USER_CONTACT: &str = "DIVEHARDER_USER_CONTACT";

    /// Override for the log file path
    pub const LOG_FILE: &str = "DIVEHARDER_LOG_FILE";

    /// Override for the HTTP timeout in seconds
    pub const HTTP_TIMEOUT: &str = "DIVEHARDER_HTTP_TIMEOUT";
}

/// Formats accepted for update dates
pub mod date_formats {
    /// Format used by update lookups, e.g. `05-Apr-2024 14:30`
    pub const UPDATE_LOOKUP: &str = "%d-%b-%Y %H:%M";
}

/// Name of the log file written by the CLI
pub const LOG_FILE_NAME: &str = "diveharder.log";
