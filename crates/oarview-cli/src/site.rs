//! Site selection: explicit `--site` validation and hostname-based
//! auto-detection for runs on a cluster frontend.

use crate::display::print_warning;
use crate::{CliError, Result};
use log::debug;

/// The enumerated cluster sites this tool knows about.
pub const SITES: [&str; 11] = [
    "grenoble",
    "lille",
    "luxembourg",
    "louvain",
    "lyon",
    "nancy",
    "nantes",
    "rennes",
    "sophia",
    "strasbourg",
    "toulouse",
];

/// Resolve the site to query: an explicit flag wins, otherwise derive from
/// the local hostname. Either path must land on a known site.
pub fn resolve_site(flag: Option<&str>) -> Result<String> {
    if let Some(name) = flag {
        let name = name.to_lowercase();
        if SITES.contains(&name.as_str()) {
            return Ok(name);
        }
        return Err(CliError::InvalidSite(name));
    }

    let host = hostname::get()?.to_string_lossy().to_string();
    debug!("No --site given, deriving from hostname {}", host);

    let site =
        site_from_hostname(&host).ok_or_else(|| CliError::InvalidSite(host.clone()))?;
    print_warning(&format!("site auto-detected from hostname: {}", site));
    Ok(site)
}

/// Derive a site name from a frontend hostname.
///
/// Frontends are named with a single-character prefix before the site name
/// ("fgrenoble.grenoble.grid5000.fr" belongs to "grenoble"). That prefix is
/// a naming convention of the deployment, not something the API guarantees,
/// so the derived name is still checked against the site list.
pub fn site_from_hostname(host: &str) -> Option<String> {
    let first = host.split('.').next()?;
    let mut chars = first.chars();
    chars.next()?;
    let derived = chars.as_str().to_lowercase();

    if SITES.contains(&derived.as_str()) {
        Some(derived)
    } else {
        None
    }
}
