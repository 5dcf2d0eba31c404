//! Award catalog
//!
//! An ordered, immutable list of award tiers. Thresholds are unique and the
//! list is always sorted ascending by threshold, whatever order the entries
//! were supplied in.

use serde::Deserialize;

/// Stable award key, assigned at catalog construction (position in threshold order)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AwardId(pub u32);

/// A single award tier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Award {
    pub id: AwardId,
    pub name: String,
    /// Emoji shown next to the name
    pub symbol: String,
    /// Depth at which this award unlocks
    pub threshold: u64,
}

/// Catalog entry as written in config (no id yet)
#[derive(Debug, Clone, Deserialize)]
pub struct AwardEntry {
    pub name: String,
    pub symbol: String,
    pub threshold: u64,
}

/// Built-in depth tiers
const DEPTH_TIERS: [(&str, &str, u64); 7] = [
    ("Topsoil", "🌱", 10),
    ("Bedrock", "🪨", 50),
    ("Cavern", "🦇", 100),
    ("Aquifer", "💧", 200),
    ("Magma Pocket", "🌋", 350),
    ("Mantle", "🔥", 600),
    ("Core", "💎", 1000),
];

/// Ordered award tiers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AwardCatalog {
    awards: Vec<Award>,
}

impl AwardCatalog {
    /// Build a catalog from entries in any order.
    ///
    /// Entries are stable-sorted by threshold. If two entries share a
    /// threshold, the first one supplied wins and the rest are dropped.
    pub fn new<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = AwardEntry>,
    {
        let mut entries: Vec<AwardEntry> = entries.into_iter().collect();
        entries.sort_by_key(|e| e.threshold);

        let mut awards: Vec<Award> = Vec::with_capacity(entries.len());
        for entry in entries {
            if awards.last().is_some_and(|a| a.threshold == entry.threshold) {
                log::warn!(
                    "Dropping award '{}': threshold {} already taken",
                    entry.name,
                    entry.threshold
                );
                continue;
            }
            awards.push(Award {
                id: AwardId(awards.len() as u32),
                name: entry.name,
                symbol: entry.symbol,
                threshold: entry.threshold,
            });
        }

        Self { awards }
    }

    /// The built-in depth tiers (10, 50, 100, 200, 350, 600, 1000)
    pub fn depth_tiers() -> Self {
        Self::new(DEPTH_TIERS.iter().map(|&(name, symbol, threshold)| AwardEntry {
            name: name.to_string(),
            symbol: symbol.to_string(),
            threshold,
        }))
    }

    /// Parse a JSON array of entries
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let entries: Vec<AwardEntry> = serde_json::from_str(json)?;
        Ok(Self::new(entries))
    }

    /// All awards, ascending by threshold
    pub fn all(&self) -> &[Award] {
        &self.awards
    }

    pub fn len(&self) -> usize {
        self.awards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.awards.is_empty()
    }

    pub fn get(&self, id: AwardId) -> Option<&Award> {
        self.awards.get(id.0 as usize)
    }

    /// Award whose threshold is exactly `depth`
    pub fn at_threshold(&self, depth: u64) -> Option<&Award> {
        self.awards
            .binary_search_by_key(&depth, |a| a.threshold)
            .ok()
            .map(|i| &self.awards[i])
    }

    /// Highest threshold in the catalog
    pub fn max_threshold(&self) -> Option<u64> {
        self.awards.last().map(|a| a.threshold)
    }
}

impl Default for AwardCatalog {
    fn default() -> Self {
        Self::depth_tiers()
    }
}
