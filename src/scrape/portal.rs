// src/scrape/portal.rs
use crate::{
    config::{FetchPolicy, JurisdictionConfig},
    core::net,
    error::FetchError,
    model::WardResult,
    specs::ward_result,
};

/// Where ward HTML comes from. One call is one attempt: it owns a fresh
/// session, its own token and the single POST that token is good for.
pub trait WardSource: Sync {
    fn fetch_ward(&self, jurisdiction: &JurisdictionConfig, ward: u32) -> Result<String, FetchError>;
}

/// The real portal over HTTPS.
pub struct LivePortal {
    policy: FetchPolicy,
}

impl LivePortal {
    pub fn new(policy: FetchPolicy) -> Self {
        Self { policy }
    }
}

impl Default for LivePortal {
    fn default() -> Self {
        Self::new(FetchPolicy::default())
    }
}

impl WardSource for LivePortal {
    fn fetch_ward(&self, jurisdiction: &JurisdictionConfig, ward: u32) -> Result<String, FetchError> {
        let (session, token) = net::open_session(jurisdiction, &self.policy)?;
        net::fetch_ward_html(&session, &token, jurisdiction, ward)
    }
}

/// One attempt, no retry: fetch then parse.
pub fn fetch_and_parse<S: WardSource + ?Sized>(
    source: &S,
    jurisdiction: &JurisdictionConfig,
    ward: u32,
) -> Result<WardResult, FetchError> {
    let html_doc = source.fetch_ward(jurisdiction, ward)?;
    let t = std::time::Instant::now();
    let parsed = ward_result::parse(&html_doc);
    logd!(
        "Parse: ward {} → {} ({} candidates) in {:?}",
        ward, parsed.status, parsed.candidates.len(), t.elapsed()
    );
    Ok(WardResult::from_parsed(ward, parsed))
}
