use ahash::AHashMap;
use regex::Regex;
use std::sync::LazyLock;

static PREFIXED_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([a-zA-Z]+)_(\d+)$").expect("prefixed id pattern is valid")
});

/// Issues `<prefix>_<n>` identifiers, tracking the highest number handed out per prefix.
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    counters: AHashMap<String, u64>,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next id for `prefix` and records it as issued.
    pub fn allocate(&mut self, prefix: &str) -> String {
        let counter = self.counters.entry(prefix.to_string()).or_insert(0);
        *counter += 1;
        format!("{}_{}", prefix, counter)
    }

    /// Raises counters so no later `allocate` can return any of `existing_ids`.
    ///
    /// Ids not shaped like `prefix_<number>` are ignored. Counters are never lowered.
    pub fn reseed<'a, I>(&mut self, existing_ids: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        for id in existing_ids {
            let Some(caps) = PREFIXED_ID.captures(id) else {
                continue;
            };
            let Ok(number) = caps[2].parse::<u64>() else {
                continue;
            };
            let counter = self.counters.entry(caps[1].to_string()).or_insert(0);
            *counter = (*counter).max(number);
        }
    }

    /// The highest number issued or seen for `prefix`, if any.
    pub fn current(&self, prefix: &str) -> Option<u64> {
        self.counters.get(prefix).copied()
    }
}
