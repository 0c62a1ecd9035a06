// src/specs/ward_result.rs
//! Ward report spec: `table#GridView1` on the POST response.
//!
//! Layout as served during counting:
//! ```text
//! <tr><th>Sl No</th><th>Candidate Name</th><th>Party</th><th>Votes</th><th>Status</th></tr>
//! <tr><td colspan=5>WARD Name : 33 , Reserved for : UR(G), Total Voters … : 1879</td></tr>
//! <tr><td>1</td><td>NAME</td><td>PARTY</td><td>512</td><td>Elected</td></tr>
//! ```
//! Before counting starts the page is an empty shell with no such table.
//! Parsing is total: unexpected shapes degrade to fewer rows, never an error.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::config::consts::RESULTS_TABLE_ID;
use crate::core::html::{cells, find_by_id, selector, text_of};
use crate::core::sanitize::parse_votes;
use crate::model::{CandidateRecord, ParsedWard, Summary};

static TR: LazyLock<Option<Selector>> = LazyLock::new(|| selector("tr"));
static TD: LazyLock<Option<Selector>> = LazyLock::new(|| selector("td"));
static TD_SPAN: LazyLock<Option<Selector>> = LazyLock::new(|| selector("td[colspan]"));

/// Raw HTML → summary, candidates, winner, status.
pub fn parse(html_doc: &str) -> ParsedWard {
    let doc = Html::parse_document(html_doc);

    let Some(table) = find_by_id(&doc, "table", RESULTS_TABLE_ID) else {
        logd!("Parse: no #{} table ({} bytes)", RESULTS_TABLE_ID, html_doc.len());
        return ParsedWard::pending();
    };
    let (Some(tr), Some(td), Some(td_span)) = (TR.as_ref(), TD.as_ref(), TD_SPAN.as_ref()) else {
        return ParsedWard::pending();
    };

    let mut summary = Summary::new();
    let mut summary_lines: Vec<String> = Vec::new();
    let mut candidates = Vec::new();

    // Row 0 is the <th> header
    for row in table.select(tr).skip(1) {
        if row.select(td_span).next().is_some() {
            let line = text_of(row);
            summary.extend(parse_summary_text(&line));
            summary_lines.push(line);
            continue;
        }
        if let Some(c) = candidate_from_row(row, td) {
            candidates.push(c);
        }
    }

    ParsedWard::from_rows(summary, candidates).with_summary_text(summary_lines.join("\n"))
}

fn candidate_from_row(row: ElementRef<'_>, td: &Selector) -> Option<CandidateRecord> {
    let tds = cells(row, td);
    if tds.len() < 4 {
        return None;
    }
    let text = |i: usize| tds.get(i).map(|c| text_of(*c)).unwrap_or_default();

    Some(CandidateRecord {
        serial: text(0),
        name: text(1),
        party: text(2),
        votes: parse_votes(&text(3)),
        status_text: text(4),
    })
}

/// `"WARD Name : 33 , Reserved for : UR(G)"` → {"WARD Name": "33", "Reserved for": "UR(G)"}.
/// Segments without a colon are dropped; later duplicates overwrite earlier ones.
pub fn parse_summary_text(text: &str) -> Summary {
    let mut out = Summary::new();
    for part in text.split(',') {
        if let Some((k, v)) = part.split_once(':') {
            out.insert(k.trim().to_string(), v.trim().to_string());
        }
    }
    out
}
