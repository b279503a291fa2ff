//! Sentence timing estimation
//!
//! Estimates where each sentence of a chunk's source text starts within
//! the chunk's audio, for caption/transcript highlighting. This is a
//! words-per-second heuristic: the backend provides no per-sentence
//! timing, so these values are estimates only and must never be treated
//! as an authoritative timing source.

/// Assumed speaking rate for offset estimation
///
/// Heuristic. Roughly conversational TTS pace; when the chunk's real
/// duration is known the estimated offsets are rescaled to fit it, so
/// the constant only matters for chunks without a measured duration.
pub const WORDS_PER_SECOND: f64 = 2.5;

/// Estimated start offset for one sentence of a chunk's text
#[derive(Debug, Clone, PartialEq)]
pub struct SentenceTiming {
    /// Estimated start, in seconds from the beginning of the chunk
    pub start_secs: f64,

    /// The sentence text
    pub text: String,
}

/// Estimate sentence start offsets within a chunk
///
/// Splits `text` into sentences at `.`, `!` and `?` boundaries and
/// assigns each a start offset proportional to the cumulative word count
/// at [`WORDS_PER_SECOND`]. When `chunk_duration_secs` is known, offsets
/// are rescaled so the estimated total matches the measured duration.
pub fn sentence_timings(text: &str, chunk_duration_secs: Option<f64>) -> Vec<SentenceTiming> {
    let sentences = split_sentences(text);
    if sentences.is_empty() {
        return Vec::new();
    }

    let total_words: usize = sentences.iter().map(|s| word_count(s)).sum();
    let estimated_total = total_words as f64 / WORDS_PER_SECOND;

    let scale = match chunk_duration_secs {
        Some(duration) if duration > 0.0 && estimated_total > 0.0 => duration / estimated_total,
        _ => 1.0,
    };

    let mut timings = Vec::with_capacity(sentences.len());
    let mut words_before = 0usize;
    for sentence in sentences {
        let start = words_before as f64 / WORDS_PER_SECOND * scale;
        words_before += word_count(&sentence);
        timings.push(SentenceTiming {
            start_secs: start,
            text: sentence,
        });
    }

    timings
}

/// Index of the sentence active at `offset_secs`, if any
///
/// Returns the last sentence whose estimated start is at or before the
/// offset. `None` only for an empty timing list or negative offset.
pub fn sentence_index_at(timings: &[SentenceTiming], offset_secs: f64) -> Option<usize> {
    if offset_secs < 0.0 {
        return None;
    }
    match timings
        .iter()
        .position(|t| t.start_secs > offset_secs)
    {
        Some(0) => None,
        Some(pos) => Some(pos - 1),
        None if timings.is_empty() => None,
        None => Some(timings.len() - 1),
    }
}

fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();

    for ch in text.chars() {
        current.push(ch);
        if matches!(ch, '.' | '!' | '?') {
            let trimmed = current.trim();
            if !trimmed.is_empty() {
                sentences.push(trimmed.to_string());
            }
            current.clear();
        }
    }

    let trailing = current.trim();
    if !trailing.is_empty() {
        sentences.push(trailing.to_string());
    }

    sentences
}

fn word_count(sentence: &str) -> usize {
    sentence.split_whitespace().count()
}
