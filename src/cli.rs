// src/cli.rs
use std::{
    env,
    error::Error,
    io::{self, BufRead, Write},
};

use crate::{
    config::{FetchPolicy, JurisdictionConfig},
    core::sanitize::fit,
    model::{WardResult, WardStatus},
    progress::StderrProgress,
    scrape::{self, LivePortal, WardSource},
    tally,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    Interactive,
    Ward(u32),
    All,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Params {
    pub mode: Mode,
    pub jurisdiction: JurisdictionConfig,
    pub policy: FetchPolicy,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            mode: Mode::Interactive,
            jurisdiction: JurisdictionConfig::default(),
            policy: FetchPolicy::default(),
        }
    }
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let params = parse_cli(env::args().skip(1))?;
    let portal = LivePortal::new(params.policy.clone());
    logf!("CLI: start mode={:?} ulb={}", params.mode, params.jurisdiction.ulb_id);

    match params.mode {
        Mode::Interactive => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            run_interactive(&portal, &params.jurisdiction, stdin.lock(), stdout.lock())?;
        }
        Mode::Ward(ward) => {
            eprintln!("[i] Fetching ULB {}, ward {}…", params.jurisdiction.ulb_id, ward);
            match scrape::fetch_and_parse(&portal, &params.jurisdiction, ward) {
                Ok(r) => print!("{}", render_ward(&r)),
                Err(e) => {
                    loge!("CLI: ward {ward}: {e}");
                    return Err(e.into());
                }
            }
        }
        Mode::All => {
            let mut prog = StderrProgress;
            let results = scrape::fetch_all(&portal, &params.jurisdiction, &params.policy, Some(&mut prog));
            print!("{}", render_board(&results));
        }
    }
    Ok(())
}

pub fn parse_cli<I>(args: I) -> Result<Params, Box<dyn Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut params = Params::default();
    let mut args = args.into_iter();

    let value = |flag: &str, args: &mut I::IntoIter| -> Result<String, Box<dyn Error>> {
        args.next().ok_or_else(|| format!("Missing value for {flag}").into())
    };

    while let Some(a) = args.next() {
        let j = &mut params.jurisdiction;
        match a.as_str() {
            "--all" | "-a" => params.mode = Mode::All,
            "-w" | "--ward" => {
                let v: u32 = value(&a, &mut args)?.parse()?;
                if v == 0 { return Err("Ward numbers start at 1".into()); }
                params.mode = Mode::Ward(v); }
            "--district" => j.district_id = value(&a, &mut args)?,
            "--ulb" => j.ulb_id = value(&a, &mut args)?,
            "--year" => j.year = value(&a, &mut args)?,
            "--election" => j.election_id = value(&a, &mut args)?,
            "--wards" => j.total_wards = value(&a, &mut args)?.parse()?,
            "--url" => j.base_url = value(&a, &mut args)?,
            "--workers" => params.policy.workers = value(&a, &mut args)?.parse()?,
            "--attempts" => {
                let v: u32 = value(&a, &mut args)?.parse()?;
                if v == 0 { return Err("--attempts must be at least 1".into()); }
                params.policy.max_attempts = v; }
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(params)
}

/* ---------------- Interactive loop ---------------- */

fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> io::Result<Option<String>> {
    write!(out, "{label}")?;
    out.flush()?;
    let mut line = s!();
    if input.read_line(&mut line)? == 0 {
        return Ok(None); // EOF
    }
    let line = line.trim();
    if line.eq_ignore_ascii_case("exit") {
        return Ok(None);
    }
    Ok(Some(s!(line)))
}

/// Prompt for ULB and ward until `exit` or EOF. Single attempt per query.
pub fn run_interactive<S, R, W>(
    source: &S,
    base: &JurisdictionConfig,
    mut input: R,
    mut out: W,
) -> io::Result<()>
where
    S: WardSource + ?Sized,
    R: BufRead,
    W: Write,
{
    writeln!(out, "--- Municipal Election Results Terminal ---")?;
    writeln!(out, "District: {}, Year: {}, Election: {}", base.district_id, base.year, base.election_id)?;
    writeln!(out, "Type 'exit' to quit.\n")?;

    loop {
        let Some(ulb) = prompt(&mut input, &mut out, "Enter ULB ID (e.g., 1): ")? else { break };
        let Some(ward) = prompt(&mut input, &mut out, "Enter Ward Number (e.g., 33): ")? else { break };

        if ulb.is_empty() || ward.is_empty() {
            writeln!(out, "Both IDs are required.")?;
            continue;
        }
        let Ok(ward_no) = ward.parse::<u32>() else {
            writeln!(out, "[!] Ward must be a number, got {ward:?}.")?;
            continue;
        };

        let j = base.clone().with_ulb(ulb.as_str());
        writeln!(out, "\n[i] Fetching data for ULB: {ulb}, Ward: {ward_no}...")?;
        match scrape::fetch_and_parse(source, &j, ward_no) {
            Ok(r) => write!(out, "{}", render_ward(&r))?,
            Err(e) => {
                loge!("CLI: ULB {ulb} ward {ward_no}: {e}");
                writeln!(out, "\n[!] Connection Error: {e}")?;
            }
        }
        writeln!(out, "\n{}\n", "-".repeat(30))?;
    }

    writeln!(out, "Exiting.")?;
    Ok(())
}

/* ---------------- Rendering ---------------- */

const HEADERS: [&str; 5] = ["S.No", "Candidate Name", "Party", "Votes", "Status"];

fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut cur = s!();
    for word in text.split_whitespace() {
        if !cur.is_empty() && cur.chars().count() + 1 + word.chars().count() > width {
            lines.push(std::mem::take(&mut cur));
        }
        if !cur.is_empty() { cur.push(' '); }
        cur.push_str(word);
    }
    if !cur.is_empty() { lines.push(cur); }
    lines
}

fn grid_rule(widths: &[usize], left: char, mid: char, right: char) -> String {
    let mut s = s!(left);
    for (i, w) in widths.iter().enumerate() {
        s.push_str(&"═".repeat(w + 2));
        s.push(if i + 1 == widths.len() { right } else { mid });
    }
    s.push('\n');
    s
}

fn grid_row(widths: &[usize], cells: &[String]) -> String {
    let mut s = s!("║");
    for (w, c) in widths.iter().zip(cells) {
        s.push(' ');
        s.push_str(&fit(c, *w));
        s.push_str(" ║");
    }
    s.push('\n');
    s
}

/// Summary block + candidate grid for one ward.
pub fn render_ward(r: &WardResult) -> String {
    let mut out = s!();

    // portal wording and order; the parsed map is only a fallback
    let text = if r.summary_text().is_empty() {
        r.summary()
            .iter()
            .map(|(k, v)| format!("{k} : {v}"))
            .collect::<Vec<_>>()
            .join(", ")
    } else {
        s!(r.summary_text())
    };
    if !text.is_empty() {
        out.push_str(&format!("\n{}\n", "=".repeat(60)));
        for line in text.lines().flat_map(|l| wrap(l, 80)) {
            out.push_str(&line);
            out.push('\n');
        }
        out.push_str(&format!("{}\n\n", "=".repeat(60)));
    }

    if r.candidates().is_empty() {
        if text.is_empty() {
            // Same page for "counting not started" and a bad ULB/ward pair
            out.push_str("[!] No results table yet. Counting may not have started, or the ULB/Ward IDs are wrong.\n");
        } else {
            out.push_str("[!] No candidate data found for this selection.\n");
        }
        return out;
    }

    let rows: Vec<Vec<String>> = r.candidates()
        .iter()
        .map(|c| vec![c.serial.clone(), c.name.clone(), c.party.clone(), c.votes.to_string(), c.status_text.clone()])
        .collect();

    let mut widths: Vec<usize> = HEADERS.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count()).min(40);
        }
    }

    out.push_str(&grid_rule(&widths, '╔', '╦', '╗'));
    out.push_str(&grid_row(&widths, &HEADERS.map(String::from)));
    out.push_str(&grid_rule(&widths, '╠', '╬', '╣'));
    for row in &rows {
        out.push_str(&grid_row(&widths, row));
    }
    out.push_str(&grid_rule(&widths, '╚', '╩', '╝'));

    out.push_str(&format!("Votes in table: {}\n", r.total_votes()));
    if let Some(w) = r.winner() {
        out.push_str(&format!("Winner: {} ({})\n", w.name, tally::party_label(&w.party)));
    }
    out
}

/// One line per ward, then counts and party wins.
pub fn render_board(results: &[WardResult]) -> String {
    let mut out = s!();
    for r in results {
        let detail = match (r.status(), r.winner()) {
            (WardStatus::Declared, Some(w)) => format!("{} ({})", w.name, tally::party_label(&w.party)),
            (WardStatus::ConnectionError, _) => r.error().map(|e| format!("error: {e}")).unwrap_or_default(),
            _ => s!("counting in progress"),
        };
        out.push_str(&format!("Ward {:>3}  {}  {}\n", r.ward_number(), fit(r.status().label(), 9), detail));
    }

    let c = tally::counts(results);
    out.push_str(&format!(
        "\nDeclared: {}  Pending: {}  Errors: {}\n",
        c.declared, c.pending, c.failed
    ));

    let wins = tally::party_wins(results);
    if !wins.is_empty() {
        out.push_str("\nWins by party:\n");
        for (party, n) in wins {
            out.push_str(&format!("  {}  {}\n", fit(&party, 24), n));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use crate::model::ParsedWard;
    use crate::specs::ward_result;

    fn args(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_flags() {
        let p = parse_cli(args(&["--all", "--ulb", "7", "--wards", "20", "--workers", "6"])).unwrap();
        assert_eq!(p.mode, Mode::All);
        assert_eq!(p.jurisdiction.ulb_id, "7");
        assert_eq!(p.jurisdiction.total_wards, 20);
        assert_eq!(p.policy.workers, 6);

        let p = parse_cli(args(&["--ward", "33"])).unwrap();
        assert_eq!(p.mode, Mode::Ward(33));

        assert_eq!(parse_cli(Vec::new()).unwrap(), Params::default());
    }

    #[test]
    fn rejects_bad_flags() {
        assert!(parse_cli(args(&["--bogus"])).is_err());
        assert!(parse_cli(args(&["--ward"])).is_err());
        assert!(parse_cli(args(&["--ward", "0"])).is_err());
        assert!(parse_cli(args(&["--wards", "many"])).is_err());
        assert!(parse_cli(args(&["--attempts", "0"])).is_err());
    }

    const PAGE: &str = r#"<table id="GridView1">
        <tr><th>Sl No</th><th>Candidate Name</th><th>Party</th><th>Votes</th><th>Status</th></tr>
        <tr><td colspan="5">WARD Name : 33 , Reserved for : UR(G)</td></tr>
        <tr><td>1</td><td>K. RAMESH</td><td>IND</td><td>612</td><td>Elected</td></tr>
        <tr><td>2</td><td>P. SRINIVAS</td><td>BRS</td><td>540</td><td>Lost</td></tr>
    </table>"#;

    #[test]
    fn renders_ward_grid() {
        let r = WardResult::from_parsed(33, ward_result::parse(PAGE));
        let text = render_ward(&r);
        assert!(text.contains("Reserved for : UR(G)"));
        assert!(text.contains("K. RAMESH"));
        assert!(text.contains("612"));
        assert!(text.contains("Winner: K. RAMESH (Independent)"));

        let empty = render_ward(&WardResult::from_parsed(1, ParsedWard::pending()));
        assert!(empty.contains("No results table"));
    }

    #[test]
    fn summary_prints_in_portal_order() {
        let page = r#"<table id="GridView1">
            <tr><th>h</th></tr>
            <tr><td colspan="5">WARD Name : 33 , Reserved for : UR(G), Total Voters : 1879</td></tr>
            <tr><td>1</td><td>A</td><td>INC</td><td>10</td><td>Elected</td></tr>
        </table>"#;
        let text = render_ward(&WardResult::from_parsed(33, ward_result::parse(page)));

        assert!(text.contains("WARD Name : 33 , Reserved for : UR(G), Total Voters : 1879"));
        let at = |needle: &str| text.find(needle).unwrap_or(usize::MAX);
        assert!(at("WARD Name") < at("Reserved for"));
        assert!(at("Reserved for") < at("Total Voters"));
        assert!(text.contains("Votes in table: 10"));
    }

    #[test]
    fn renders_board_counts() {
        let rs = vec![
            WardResult::from_parsed(1, ward_result::parse(PAGE)),
            WardResult::from_parsed(2, ParsedWard::pending()),
            WardResult::connection_error(3, "token not found on landing page"),
        ];
        let text = render_board(&rs);
        assert!(text.contains("Declared: 1  Pending: 1  Errors: 1"));
        assert!(text.contains("error: token not found"));
        assert!(text.contains("Independent"));
    }

    struct Canned;
    impl WardSource for Canned {
        fn fetch_ward(&self, j: &JurisdictionConfig, ward: u32) -> Result<String, FetchError> {
            if j.ulb_id == "9" { return Err(FetchError::TokenNotFound); }
            assert_eq!(ward, 33);
            Ok(s!(PAGE))
        }
    }

    #[test]
    fn interactive_loop_until_exit() {
        let input = "1\n33\n\n5\n9\n33\n1\nx\nEXIT\n";
        let mut out = Vec::new();
        run_interactive(&Canned, &JurisdictionConfig::default(), input.as_bytes(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("K. RAMESH"));
        assert!(text.contains("Both IDs are required."));
        assert!(text.contains("Connection Error: token not found"));
        assert!(text.contains("Ward must be a number"));
        assert!(text.ends_with("Exiting.\n"));
    }

    #[test]
    fn interactive_loop_stops_at_eof() {
        let mut out = Vec::new();
        run_interactive(&Canned, &JurisdictionConfig::default(), "1\n".as_bytes(), &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().ends_with("Exiting.\n"));
    }
}
