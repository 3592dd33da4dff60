use crate::core::batch::{Batch, Block};

/*-------------------------------------------------------------------------------------------------
  Plain Text Lists
-------------------------------------------------------------------------------------------------*/

pub const CLOUDFLARE_NAME: &str = "Cloudflare Inc";
pub const CLOUDFLARE_URL: &str = "https://www.cloudflare.com/";

pub const TOR_NAME: &str = "Tor Project";
pub const TOR_URL: &str = "https://www.torproject.org/";

/// Cloudflare `ips-v4` / `ips-v6` lists (one CIDR per line).
pub fn cloudflare(body: &str) -> Batch {
    batch(body, CLOUDFLARE_NAME, CLOUDFLARE_URL)
}

/// Tor exit node list (single addresses or `first-last` ranges).
pub fn tor(body: &str) -> Batch {
    batch(body, TOR_NAME, TOR_URL)
}

/// Build a [Batch] from a list with one entry per line.
///
/// `#` starts a comment and blank lines are skipped. An entry is a CIDR (`10.0.0.0/8`), an
/// inclusive range (`10.0.0.1-10.0.0.9`) or a single address. Entries are not validated here;
/// invalid ones fail the refresh that applies the batch.
pub fn batch(body: &str, name: &str, url: &str) -> Batch {
    let mut batch = Batch::new(name, url);
    batch.extend(body.lines().filter_map(parse_line));
    batch
}

fn parse_line(line: &str) -> Option<Block> {
    let entry = line.split('#').next().unwrap_or_default().trim();

    if entry.is_empty() {
        None
    } else if entry.contains('/') {
        Some(Block::Cidr(entry.to_string()))
    } else if let Some((left, right)) = entry.split_once('-') {
        Some(Block::Range(left.trim().to_string(), right.trim().to_string()))
    } else {
        Some(Block::Range(entry.to_string(), entry.to_string()))
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
