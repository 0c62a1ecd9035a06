// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://tsec.gov.in/knowPRUrban.se";
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
pub const TOKEN_TIMEOUT_SECS: u64 = 10;
pub const POST_TIMEOUT_SECS: u64 = 15;

// Struts form
pub const TOKEN_FIELD: &str = "org.apache.struts.taglib.html.TOKEN";
pub const REPORT_MODE: &str = "getULBWMDetails";
pub const REPORT_CATEGORY: &str = "WM";
pub const REPORT_TYPE_ALL: &str = "A";
pub const RESULTS_TABLE_ID: &str = "GridView1";

// Jurisdiction defaults (Vikarabad district, Tandur municipality)
pub const DISTRICT_ID: &str = "24";
pub const ULB_ID: &str = "1";
pub const YEAR: &str = "2026";
pub const ELECTION_ID: &str = "190";
pub const TOTAL_WARDS: u32 = 36;

// Concurrency
pub const WORKERS: usize = 4;
pub const MAX_WORKERS: usize = 10; // portal starts refusing above this
pub const JITTER_MS: u64 = 250; // extra 0..250 ms before each token fetch

// Retry
pub const MAX_ATTEMPTS: u32 = 3;
pub const BACKOFF_BASE: u32 = 2;
pub const BACKOFF_UNIT_MS: u64 = 1_000;

// Presentation cache
pub const CACHE_TTL_SECS: u64 = 60;

// Logging
pub const LOG_FILE: &str = ".store/debug.log";
pub const LOG_ENV_VAR: &str = "WARD_RESULTS_LOG";

// Party labels
pub const PARTY_ALIASES: &[(&str, &str)] = &[("IND", "Independent")];
