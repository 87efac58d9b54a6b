use std::collections::VecDeque;

const CAPACITY: usize = 100;

/// Previously sent messages, browsable from the input line.
#[derive(Debug, Clone, Default)]
pub struct SentHistory {
    entries: VecDeque<String>,
    cursor: Option<usize>,
}

impl SentHistory {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: VecDeque::new(),
            cursor: None,
        }
    }

    /// Records a sent message. Repeats of the latest entry are collapsed.
    pub fn record(&mut self, text: &str) {
        self.cursor = None;

        let text = text.trim();
        if text.is_empty() || self.entries.back().is_some_and(|last| last == text) {
            return;
        }

        if self.entries.len() == CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(text.to_string());
    }

    /// Steps towards older entries, stopping at the oldest.
    pub fn older(&mut self) -> Option<&str> {
        let last = self.entries.len().checked_sub(1)?;
        let index = self.cursor.map_or(last, |i| i.saturating_sub(1));
        self.cursor = Some(index);
        self.entries.get(index).map(String::as_str)
    }

    /// Steps towards newer entries; `None` once past the newest.
    pub fn newer(&mut self) -> Option<&str> {
        let index = self.cursor? + 1;
        if index >= self.entries.len() {
            self.cursor = None;
            return None;
        }
        self.cursor = Some(index);
        self.entries.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_blank_and_repeated_entries() {
        let mut history = SentHistory::new();
        history.record("  ");
        history.record("apple");
        history.record(" apple ");
        history.record("banana");

        assert_eq!(history.len(), 2);
    }

    #[test]
    fn walks_back_and_forth() {
        let mut history = SentHistory::new();
        for text in ["menu", "2", "rice"] {
            history.record(text);
        }

        assert_eq!(history.older(), Some("rice"));
        assert_eq!(history.older(), Some("2"));
        assert_eq!(history.older(), Some("menu"));
        assert_eq!(history.older(), Some("menu"));

        assert_eq!(history.newer(), Some("2"));
        assert_eq!(history.newer(), Some("rice"));
        assert_eq!(history.newer(), None);
        assert_eq!(history.newer(), None);
    }

    #[test]
    fn empty_history_yields_nothing() {
        let mut history = SentHistory::new();
        assert!(history.is_empty());
        assert_eq!(history.older(), None);
        assert_eq!(history.newer(), None);
    }

    #[test]
    fn drops_oldest_beyond_capacity() {
        let mut history = SentHistory::new();
        for i in 0..(CAPACITY + 20) {
            history.record(&format!("question {i}"));
        }
        assert_eq!(history.len(), CAPACITY);

        let mut oldest = None;
        for _ in 0..CAPACITY {
            oldest = history.older().map(str::to_string);
        }
        assert_eq!(oldest.as_deref(), Some("question 20"));
    }
}
