//! DNS record lookups over DNS-over-HTTPS
//!
//! Sync `ureq` against Cloudflare's JSON DoH endpoint. No resolver state,
//! no caching, no retries. One GET per record type; a failed lookup is
//! reported to the caller and never aborts the other record types.

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

const DOH_ENDPOINT: &str = "https://cloudflare-dns.com/dns-query";

/// Record types the diagnostic queries, in report order.
pub const RECORD_TYPES: &[&str] = &["A", "AAAA", "CNAME", "MX", "TXT", "NS"];

#[derive(Debug, Error)]
pub enum DnsError {
    #[error("DoH request failed: {0}")]
    Transport(#[from] ureq::Error),
    #[error("DoH endpoint returned HTTP {0}")]
    Http(u16),
    #[error("malformed DoH response: {0}")]
    WireFormat(#[from] serde_json::Error),
    #[error("lookup failed with rcode {0}")]
    Rcode(u32),
}

/// One resource record from a DoH answer section.
#[derive(Debug, Clone)]
pub struct Record {
    pub name: String,
    pub rtype: u16,
    pub ttl: u32,
    pub data: String,
}

impl Record {
    /// Display name for the numeric record type.
    pub fn type_name(&self) -> &'static str {
        match self.rtype {
            1 => "A",
            2 => "NS",
            5 => "CNAME",
            15 => "MX",
            16 => "TXT",
            28 => "AAAA",
            _ => "?",
        }
    }
}

/// DoH JSON wire format (the subset the diagnostic reads).
#[derive(Deserialize, Debug)]
struct DohResponse {
    #[serde(rename = "Status")]
    status: u32,
    #[serde(rename = "Answer", default)]
    answer: Vec<DohAnswer>,
}

#[derive(Deserialize, Debug)]
struct DohAnswer {
    name: String,
    #[serde(rename = "type")]
    rtype: u16,
    #[serde(rename = "TTL")]
    ttl: u32,
    data: String,
}

/// rcode 3 is NXDOMAIN: an empty record set, not an error.
const RCODE_NOERROR: u32 = 0;
const RCODE_NXDOMAIN: u32 = 3;

pub struct Resolver {
    agent: ureq::Agent,
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Resolver {
    pub fn new() -> Self {
        // Sync HTTP via ureq (no tokio needed)
        let agent = ureq::config::Config::builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }

    /// Query one record type for a domain.
    pub fn lookup(&self, domain: &str, record_type: &str) -> Result<Vec<Record>, DnsError> {
        debug!("DoH lookup {} {}", domain, record_type);

        let response = self
            .agent
            .get(DOH_ENDPOINT)
            .query("name", domain)
            .query("type", record_type)
            .header("Accept", "application/dns-json")
            .call()?;

        let status = response.status().as_u16();
        if status != 200 {
            return Err(DnsError::Http(status));
        }

        let text = response.into_body().read_to_string()?;
        parse_response(&text)
    }
}

/// Decode a DoH JSON body into records.
fn parse_response(text: &str) -> Result<Vec<Record>, DnsError> {
    let parsed: DohResponse = serde_json::from_str(text)?;

    match parsed.status {
        RCODE_NOERROR => {}
        RCODE_NXDOMAIN => return Ok(Vec::new()),
        rcode => return Err(DnsError::Rcode(rcode)),
    }

    Ok(parsed
        .answer
        .into_iter()
        .map(|a| Record {
            name: a.name,
            rtype: a.rtype,
            ttl: a.ttl,
            data: a.data,
        })
        .collect())
}
