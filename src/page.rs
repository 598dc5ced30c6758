// src/page.rs
//! Allow-pattern and job-id parsing for LinkedIn job-posting URLs.

use regex::Regex;
use std::sync::OnceLock;

// Matches URLs like: http[s]://[sub.]linkedin.com/jobs/view/[...]
const JOB_URL_PATTERN: &str = r"^https?://(?:[^./?#]+\.)?linkedin\.com/jobs/view/";

static JOB_URL_REGEX: OnceLock<Regex> = OnceLock::new();

fn job_url_regex() -> &'static Regex {
    JOB_URL_REGEX.get_or_init(|| Regex::new(JOB_URL_PATTERN).expect("Invalid job URL pattern"))
}

/// Check whether a URL points at a LinkedIn job posting. Extraction must not
/// be attempted for URLs this rejects.
pub fn is_job_posting_url(url: &str) -> bool {
    job_url_regex().is_match(url)
}

/// Parse the job id out of a posting URL. The id is the 6th `/`-delimited
/// segment (`https:`, ``, host, `jobs`, `view`, id). Returns `None` when the
/// allow-pattern does not match or the segment is empty.
pub fn job_id_from_url(url: &str) -> Option<String> {
    if !is_job_posting_url(url) {
        return None;
    }

    url.split('/')
        .nth(5)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
}
