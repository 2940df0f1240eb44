//! Aggregate figures over a collection of notes.

use serde::Serialize;

use crate::domain::Note;

/// Summary statistics for a non-empty collection of notes.
///
/// Averages use integer division. Extremes (oldest/newest by creation time,
/// longest/shortest by content length) resolve ties to the earliest note in
/// collection order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Statistics {
    pub count: usize,
    pub total_chars: usize,
    pub total_words: usize,
    pub avg_chars: usize,
    pub avg_words: usize,
    pub oldest: Note,
    pub newest: Note,
    pub longest: Note,
    pub shortest: Note,
    /// Size of the backing file in bytes, if it exists.
    pub file_size: Option<u64>,
}

impl Statistics {
    /// Computes statistics over `notes`. Returns `None` for an empty slice.
    pub fn compute(notes: &[Note], file_size: Option<u64>) -> Option<Self> {
        let first = notes.first()?;

        let mut total_chars = 0;
        let mut total_words = 0;
        let (mut oldest, mut newest) = (first, first);
        let (mut longest, mut shortest) = (first, first);

        for note in notes {
            let len = note.char_count();
            total_chars += len;
            total_words += note.word_count();

            if note.created() < oldest.created() {
                oldest = note;
            }
            if note.created() > newest.created() {
                newest = note;
            }
            if len > longest.char_count() {
                longest = note;
            }
            if len < shortest.char_count() {
                shortest = note;
            }
        }

        let count = notes.len();
        Some(Self {
            count,
            total_chars,
            total_words,
            avg_chars: total_chars / count,
            avg_words: total_words / count,
            oldest: oldest.clone(),
            newest: newest.clone(),
            longest: longest.clone(),
            shortest: shortest.clone(),
            file_size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};
    use pretty_assertions::assert_eq;

    fn day(d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, d)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    fn note(title: &str, content: &str, created: u32) -> Note {
        Note::with_timestamps(title, content, day(created), day(created))
    }

    #[test]
    fn empty_slice_has_no_statistics() {
        assert!(Statistics::compute(&[], None).is_none());
    }

    #[test]
    fn single_note_is_every_extreme() {
        let only = note("Only", "three little words", 5);
        let stats = Statistics::compute(std::slice::from_ref(&only), Some(42)).unwrap();

        assert_eq!(stats.count, 1);
        assert_eq!(stats.total_chars, 18);
        assert_eq!(stats.total_words, 3);
        assert_eq!(stats.avg_chars, 18);
        assert_eq!(stats.avg_words, 3);
        assert_eq!(stats.oldest, only);
        assert_eq!(stats.newest, only);
        assert_eq!(stats.longest, only);
        assert_eq!(stats.shortest, only);
        assert_eq!(stats.file_size, Some(42));
    }

    #[test]
    fn averages_truncate() {
        let notes = vec![note("A", "ab", 1), note("B", "abcd efg", 2), note("C", "a", 3)];
        let stats = Statistics::compute(&notes, None).unwrap();
        assert_eq!(stats.total_chars, 11);
        assert_eq!(stats.avg_chars, 3);
        assert_eq!(stats.total_words, 4);
        assert_eq!(stats.avg_words, 1);
    }

    #[test]
    fn extremes_pick_first_on_ties() {
        let notes = vec![
            note("First", "same", 2),
            note("Second", "same", 2),
            note("Third", "same", 2),
        ];
        let stats = Statistics::compute(&notes, None).unwrap();
        assert_eq!(stats.oldest.title(), "First");
        assert_eq!(stats.newest.title(), "First");
        assert_eq!(stats.longest.title(), "First");
        assert_eq!(stats.shortest.title(), "First");
    }

    #[test]
    fn extremes_follow_dates_and_lengths() {
        let notes = vec![
            note("Middle", "medium text", 10),
            note("Early", "a much longer body of text", 1),
            note("Late", "tiny", 20),
        ];
        let stats = Statistics::compute(&notes, None).unwrap();
        assert_eq!(stats.oldest.title(), "Early");
        assert_eq!(stats.newest.title(), "Late");
        assert_eq!(stats.longest.title(), "Early");
        assert_eq!(stats.shortest.title(), "Late");
    }
}
