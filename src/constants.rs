/// Default KnuVerse Cloud server
pub const DEFAULT_SERVER: &str = "https://cloud.knuverse.com";
/// Default API base path appended to the server
pub const DEFAULT_BASE_URI: &str = "/api/v1/";
/// API base path used by Knufactor deployments
pub const KNUFACTOR_BASE_URI: &str = "/knufactor/api/v1/";
/// Minutes a bearer token is considered fresh after it was obtained
pub const TOKEN_LIFETIME_MINUTES: i64 = 10;
/// User agent string used in HTTP requests to identify this client
pub const USER_AGENT: &str = concat!("knuverse-client/", env!("CARGO_PKG_VERSION"));
/// Value of the `user_agent` field sent when starting a verification
pub const SDK_USER_AGENT: &str = concat!("knuverse-sdk-rust-v", env!("CARGO_PKG_VERSION"));
/// Response header carrying the number of clients
pub const CLIENT_COUNT_HEADER: &str = "x-client-count";
/// Response header carrying the number of verifications
pub const VERIFICATION_COUNT_HEADER: &str = "x-verification-count";
/// Textual form of report start and end dates
pub const REPORT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
