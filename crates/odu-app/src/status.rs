use std::sync::atomic::{AtomicUsize, Ordering};

/// Running totals for an interactive reading session
#[derive(Debug, Default)]
pub struct ReaderStatus {
    lines_read: AtomicUsize,
    words_seen: AtomicUsize,
    words_glossed: AtomicUsize,
}

impl ReaderStatus {
    pub fn record_line(&self, words: usize, glossed: usize) {
        self.lines_read.fetch_add(1, Ordering::Relaxed);
        self.words_seen.fetch_add(words, Ordering::Relaxed);
        self.words_glossed.fetch_add(glossed, Ordering::Relaxed);
    }

    pub fn lines_read(&self) -> usize {
        self.lines_read.load(Ordering::Relaxed)
    }

    pub fn words_seen(&self) -> usize {
        self.words_seen.load(Ordering::Relaxed)
    }

    pub fn words_glossed(&self) -> usize {
        self.words_glossed.load(Ordering::Relaxed)
    }

    pub fn summary(&self) -> String {
        let seen = self.words_seen();
        let glossed = self.words_glossed();
        let percent = if seen == 0 {
            0.0
        } else {
            glossed as f64 * 100.0 / seen as f64
        };
        format!(
            "{} lines, {} words, {} glossed ({:.0}%)",
            self.lines_read(),
            seen,
            glossed,
            percent
        )
    }
}
