// src/scrape/retry.rs
use std::thread;

use crate::{
    config::{FetchPolicy, JurisdictionConfig},
    model::WardResult,
};

use super::portal::{fetch_and_parse, WardSource};

/// Fetch one ward with bounded retries. Never fails: after the last attempt
/// the ward comes back as a ConnectionError record.
pub fn fetch_ward_with_retry<S: WardSource + ?Sized>(
    source: &S,
    jurisdiction: &JurisdictionConfig,
    ward: u32,
    policy: &FetchPolicy,
) -> WardResult {
    let attempts = policy.attempts();
    let mut last_err = s!();

    for attempt in 1..=attempts {
        // spread out concurrent token fetches
        thread::sleep(policy.jitter_for(ward, attempt));

        match fetch_and_parse(source, jurisdiction, ward) {
            Ok(result) => {
                if attempt > 1 {
                    logf!("Ward {ward}: ok on attempt {attempt}/{attempts}");
                }
                return result;
            }
            Err(e) => {
                logw!("Ward {ward}: attempt {attempt}/{attempts} failed [{}]: {e}", e.kind());
                last_err = e.to_string();
                if attempt < attempts {
                    thread::sleep(policy.backoff_delay(attempt));
                }
            }
        }
    }

    loge!("Ward {ward}: giving up after {attempts} attempt(s): {last_err}");
    WardResult::connection_error(ward, last_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use crate::model::WardStatus;
    use std::sync::atomic::{AtomicU32, Ordering};

    /// Fails `fail_first` times, then serves a declared page.
    struct Flaky {
        calls: AtomicU32,
        fail_first: u32,
    }

    impl WardSource for Flaky {
        fn fetch_ward(&self, _j: &JurisdictionConfig, _ward: u32) -> Result<String, FetchError> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            if n < self.fail_first {
                return Err(FetchError::TokenNotFound);
            }
            Ok(s!(r#"<table id="GridView1"><tr><th>h</th></tr>
                <tr><td>1</td><td>A</td><td>P</td><td>9</td><td>Elected</td></tr></table>"#))
        }
    }

    #[test]
    fn recovers_after_transient_failures() {
        let src = Flaky { calls: AtomicU32::new(0), fail_first: 2 };
        let r = fetch_ward_with_retry(&src, &JurisdictionConfig::default(), 5, &FetchPolicy::immediate());
        assert_eq!(src.calls.load(Ordering::SeqCst), 3);
        assert_eq!(r.status(), WardStatus::Declared);
        assert_eq!(r.ward_number(), 5);
        assert!(r.error().is_none());
    }

    #[test]
    fn always_failing_source_is_called_max_attempts_times() {
        let src = Flaky { calls: AtomicU32::new(0), fail_first: u32::MAX };
        let policy = FetchPolicy { max_attempts: 4, ..FetchPolicy::immediate() };
        let r = fetch_ward_with_retry(&src, &JurisdictionConfig::default(), 9, &policy);

        assert_eq!(src.calls.load(Ordering::SeqCst), 4);
        assert_eq!(r.status(), WardStatus::ConnectionError);
        assert!(r.candidates().is_empty());
        assert!(r.winner().is_none());
        assert!(r.error().unwrap_or_default().contains("token"));
    }
}
