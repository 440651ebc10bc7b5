//! Hosts-file output.
//!
//! The generated file looks like:
//!
//! ```text
//! # Last updated (UTC): 2026-10-16 04:00:00
//! # Generated by blocklist-updater 0.1.0
//! # Total unique domains: 2
//! 0.0.0.0	ads.net
//! 0.0.0.0	example.com
//! ```

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::fmt::Write as _;
use std::fs;
use std::io::Write;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::aggregator::DomainSet;
use crate::error::UpdaterError;

/// Mode of the written hosts file (rw-rw-r--)
pub const OUTPUT_MODE: u32 = 0o664;

/// Address every domain is pointed at
pub const SINK_ADDRESS: &str = "0.0.0.0";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Tool identifier written into the header
pub fn generator_id() -> String {
    format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

/// Render the hosts file for `domains`.
///
/// Domains are written in the order given; callers pass them sorted.
pub fn render_hosts(domains: &[&str], generated_at: DateTime<Utc>) -> String {
    // "0.0.0.0\t" plus an average-length domain and newline
    let mut out = String::with_capacity(128 + domains.len() * 32);

    let _ = writeln!(out, "# Last updated (UTC): {}", generated_at.format(TIMESTAMP_FORMAT));
    let _ = writeln!(out, "# Generated by {}", generator_id());
    let _ = writeln!(out, "# Total unique domains: {}", domains.len());

    for domain in domains {
        out.push_str(SINK_ADDRESS);
        out.push('\t');
        out.push_str(domain);
        out.push('\n');
    }

    out
}

/// Write the sorted set to `path` as a hosts file stamped with the current time.
///
/// The file is written to a temporary sibling and renamed into place, with
/// its mode set to [`OUTPUT_MODE`] regardless of umask. If any step fails, a
/// file left over from a previous run is removed so it cannot pass for this
/// run's output, and the error is returned.
pub fn write_hosts_file(set: &DomainSet, path: &Path) -> Result<()> {
    let content = render_hosts(&set.sorted(), Utc::now());
    replace_output(path, content.as_bytes(), write_atomically)
}

/// Run `write` for `path`, removing whatever sits at `path` if it fails.
fn replace_output<W>(path: &Path, content: &[u8], write: W) -> Result<()>
where
    W: FnOnce(&Path, &[u8]) -> Result<()>,
{
    match write(path, content) {
        Ok(()) => {
            debug!("Wrote {} bytes to {:?}", content.len(), path);
            Ok(())
        }
        Err(e) => {
            if path.is_file() {
                if let Err(remove_err) = fs::remove_file(path) {
                    warn!("Could not remove stale output {:?}: {}", path, remove_err);
                }
            }
            Err(e).with_context(|| format!("Failed to write hosts file {:?}", path))
        }
    }
}

fn write_atomically(path: &Path, content: &[u8]) -> Result<()> {
    // Create temporary file in the same directory for atomic rename
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let mut temp_file = NamedTempFile::new_in(parent_dir)
        .map_err(|e| UpdaterError::Write(format!("temporary file in {:?}: {}", parent_dir, e)))?;

    temp_file.write_all(content)?;
    temp_file.as_file().sync_all()?;
    temp_file
        .as_file()
        .set_permissions(fs::Permissions::from_mode(OUTPUT_MODE))?;

    temp_file
        .persist(path)
        .map_err(|e| UpdaterError::Write(e.error.to_string()))?;

    Ok(())
}
