// src/core/net.rs
//
// HTTPS against the election portal (blocking reqwest).
//
// Trust exception: the portal serves a certificate chain that does not
// validate, so certificate checks are OFF for this client only. Nothing else
// in the crate builds an HTTP client.

use std::time::Duration;

use reqwest::blocking::{Client, Response};

use crate::config::consts::*;
use crate::config::{FetchPolicy, JurisdictionConfig};
use crate::error::FetchError;
use crate::specs::token;

/// One cookie jar + one token. Never shared between wards or attempts.
pub struct Session {
    client: Client,
    post_timeout: Duration,
}

fn build_client(policy: &FetchPolicy) -> Result<Client, FetchError> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .cookie_store(true)
        .danger_accept_invalid_certs(true)
        .timeout(policy.token_timeout)
        .build()?;
    Ok(client)
}

fn check_status(resp: Response) -> Result<Response, FetchError> {
    let status = resp.status();
    if !status.is_success() {
        return Err(FetchError::Status { status, url: resp.url().to_string() });
    }
    Ok(resp)
}

/// GET the landing page and pull the Struts token out of it.
pub fn open_session(
    jurisdiction: &JurisdictionConfig,
    policy: &FetchPolicy,
) -> Result<(Session, String), FetchError> {
    let client = build_client(policy)?;
    let resp = check_status(client.get(&jurisdiction.base_url).send()?)?;
    let body = resp.text()?;

    let tok = token::extract_token(&body).ok_or(FetchError::TokenNotFound)?;
    logd!("Net: token ok ({} chars)", tok.len());

    Ok((Session { client, post_timeout: policy.post_timeout }, tok))
}

/// Fixed-key Struts form for the "all candidates" ward report.
pub fn ward_form<'a>(
    token: &'a str,
    jurisdiction: &'a JurisdictionConfig,
    ward: &'a str,
) -> [(&'static str, &'a str); 9] {
    [
        (TOKEN_FIELD, token),
        ("mode", REPORT_MODE),
        (field!("knowYour"), REPORT_CATEGORY),
        (field!("year"), jurisdiction.year.as_str()),
        (field!("electionFor"), jurisdiction.election_id.as_str()),
        (field!("district_id"), jurisdiction.district_id.as_str()),
        (field!("ulb_id"), jurisdiction.ulb_id.as_str()),
        (field!("ward_id"), ward),
        (field!("typeOfReport"), REPORT_TYPE_ALL),
    ]
}

/// POST the report request for one ward and return the raw HTML.
pub fn fetch_ward_html(
    session: &Session,
    token: &str,
    jurisdiction: &JurisdictionConfig,
    ward: u32,
) -> Result<String, FetchError> {
    let ward_id = ward.to_string();
    let form = ward_form(token, jurisdiction, &ward_id);

    let resp = session
        .client
        .post(&jurisdiction.base_url)
        .timeout(session.post_timeout)
        .form(&form)
        .send()?;
    let body = check_status(resp)?.text()?;
    logd!("Net: ward {} → {} bytes", ward, body.len());
    Ok(body)
}
