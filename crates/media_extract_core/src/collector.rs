/// Ordered URL entries typed by the user. Always holds at least one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkCollector {
    entries: Vec<String>,
}

impl Default for LinkCollector {
    fn default() -> Self {
        Self {
            entries: vec![String::new()],
        }
    }
}

impl LinkCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: a collector keeps at least one row.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn add(&mut self) {
        self.entries.push(String::new());
    }

    /// Replace the entry at `position`. Returns `false` when out of range.
    pub fn update(&mut self, position: usize, value: impl Into<String>) -> bool {
        match self.entries.get_mut(position) {
            Some(entry) => {
                *entry = value.into();
                true
            }
            None => false,
        }
    }

    /// Remove the entry at `position`, unless it is the last remaining row.
    pub fn remove(&mut self, position: usize) -> bool {
        if !self.can_remove() || position >= self.entries.len() {
            return false;
        }
        self.entries.remove(position);
        true
    }

    pub fn can_remove(&self) -> bool {
        self.entries.len() > 1
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.entries.push(String::new());
    }

    /// Entries with non-whitespace content, in order and as typed.
    pub fn valid_links(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|entry| !entry.trim().is_empty())
            .cloned()
            .collect()
    }

    pub fn has_valid_link(&self) -> bool {
        self.entries.iter().any(|entry| !entry.trim().is_empty())
    }
}
