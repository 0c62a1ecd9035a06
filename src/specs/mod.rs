// src/specs/mod.rs
//! # Page specs
//!
//! Pure HTML readers for the two portal pages we touch. Each spec encodes
//! *where the ground truth lives in the HTML* and nothing else.
//!
//! ## What lives here
//! - `token`: the hidden Struts token on the landing page.
//! - `ward_result`: the `GridView1` results table returned by the ward POST.
//!
//! ## What does **not** live here
//! - Networking (`core::net`), retries and pooling (`scrape`), caching
//!   (`store`), or anything the GUI/CLI decide about presentation.
//!
//! ## Conventions
//! - Specs take `&str` and never fail. The portal is an untrusted, loosely
//!   structured input: an unexpected shape yields an empty/partial result.
//! - Everything is testable offline against captured or synthetic fixtures.
pub mod token;
pub mod ward_result;
