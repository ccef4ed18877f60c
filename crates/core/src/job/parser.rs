//! Parser for job folder names.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::types::{JobInfo, JobParseError};

// Trailing PO group: (PO-98765) or [PO-98765] at the end of the name.
static PO_SUFFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[(\[]([^)\]]*)[)\]]\s*$").unwrap());

// Leading digit run of the first segment.
static JOB_NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d+)").unwrap());

// `<SKU> x <Qty>` sub-segment, `x` case-insensitive and whitespace-delimited.
static SKU_QTY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+?)\s+[xX]\s+(\S+)\s*$").unwrap());

/// Parse a job folder name into its structured fields.
///
/// The grammar is deliberately lenient: only the leading job number is
/// required. Missing customer, company or SKU segments become empty
/// strings and a non-numeric quantity becomes 0, so a sloppily named
/// folder still yields something the operator can correct by hand.
pub fn parse(folder_name: &str) -> Result<JobInfo, JobParseError> {
    let raw = folder_name.to_string();
    let mut rest = folder_name.trim();

    let mut po_number = String::new();
    if let Some(m) = PO_SUFFIX_RE.captures(rest) {
        po_number = m[1].trim().to_string();
        rest = rest[..m.get(0).unwrap().start()].trim_end_matches(['_', '-', ' ']);
    }

    // At most 4 top-level segments: job#, customer, company, remainder.
    let mut parts = rest.splitn(4, '_');

    let first = parts.next().unwrap_or_default();
    let job_number = JOB_NUMBER_RE
        .captures(first)
        .map(|c| c[1].to_string())
        .ok_or_else(|| JobParseError::MissingJobNumber(raw.clone()))?;

    let customer = parts.next().unwrap_or_default().trim_matches(['_', '-', ' ']).to_string();
    let company = parts.next().unwrap_or_default().trim_matches(['_', '-', ' ']).to_string();

    let remainder = parts.next().unwrap_or_default();
    let (sku, quantity) = match SKU_QTY_RE.captures(remainder) {
        Some(c) => {
            let qty = c[2].parse::<u32>().unwrap_or(0);
            (c[1].trim().to_string(), qty)
        }
        None => (remainder.trim().to_string(), 0),
    };

    let info = JobInfo { job_number, customer, company, sku, quantity, po_number, raw };
    debug!(
        job = %info.job_number,
        customer = %info.customer,
        sku = %info.sku,
        "parsed job folder name"
    );
    Ok(info)
}

/// Compose a well-formed job folder name from parts.
///
/// Inverse convenience of [`parse`]; spaces inside customer and company
/// names are removed so the underscore grammar stays unambiguous.
pub fn suggest_folder_name(
    job_number: &str,
    customer: &str,
    company: &str,
    sku: &str,
    quantity: u32,
    po_number: &str,
) -> String {
    let mut parts = vec![job_number.to_string()];

    if !customer.is_empty() {
        parts.push(customer.replace(' ', ""));
    }
    if !company.is_empty() {
        parts.push(company.replace(' ', ""));
    }
    if !sku.is_empty() {
        if quantity > 0 {
            parts.push(format!("{sku} x {quantity}"));
        } else {
            parts.push(sku.to_string());
        }
    }

    let mut name = parts.join("_");
    if !po_number.is_empty() {
        name.push_str(&format!("_({po_number})"));
    }
    name
}
