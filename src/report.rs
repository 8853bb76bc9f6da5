use std::io::BufRead;

use regex::Regex;

use crate::error::Error;
use crate::types::{OpenPort, RecordSet};

/// Every Nmap report opens with this banner, whatever the version.
const NMAP_HEADER: &str = "Starting Nmap ";

/// Parse an Nmap report into at most `max` open-port records.
///
/// Recognized grammar, per host block:
/// - `Nmap scan report for <address>` — address is a numeric IPv4/IPv6
///   token; hostname report lines do not match and are skipped
/// - three fixed lines (host status, rDNS, port-table header); a blank third
///   line means every port on the host is closed
/// - `<port>/<proto>   open ...` lines until a blank line ends the block
///
/// Anything else is discarded. Once `max` records are collected the rest of
/// the stream is still drained so an upstream `nmap` never blocks on a full
/// pipe, but nothing more is appended. Returns `HeaderNotFound` if the first
/// line lacks the banner.
pub fn parse<R: BufRead>(input: R, max: usize) -> Result<RecordSet, Error> {
    let host_re = Regex::new(r"^Nmap scan report for ([0-9:.]+)")?;
    let port_re = Regex::new(r"^([0-9]+/[tcpud]+)[ \t]+open")?;

    let mut lines = input.lines();
    let mut records = RecordSet::with_capacity(max);

    let first = match lines.next() {
        Some(line) => line?,
        None => return Err(Error::HeaderNotFound),
    };
    if !first.starts_with(NMAP_HEADER) {
        return Err(Error::HeaderNotFound);
    }

    'blocks: while let Some(line) = lines.next() {
        let line = line?;
        if records.is_full() {
            // Drain only; the cap is already reached.
            continue;
        }

        let Some(caps) = host_re.captures(&line) else {
            continue;
        };
        let host = caps[1].to_string();

        // Skip the fixed host header. The third line doubles as the
        // all-ports-closed marker when it is blank.
        let mut skipped = String::new();
        for _ in 0..3 {
            match lines.next() {
                Some(l) => skipped = l?,
                None => break 'blocks,
            }
        }
        if skipped.is_empty() {
            continue;
        }

        for line in lines.by_ref() {
            let line = line?;
            if line.is_empty() {
                break;
            }
            if let Some(port) = port_re.captures(&line) {
                records.push(OpenPort::new(&host, &port[1]));
            }
        }
    }

    Ok(records)
}
