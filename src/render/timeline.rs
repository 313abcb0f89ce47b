use crate::foundation::error::{CounterError, CounterResult};

/// Shared frame timeline for a strip of animations with differing lengths.
///
/// The timeline is as long as the longest animation; shorter ones cycle, so output frame `f`
/// shows frame `f % count` of each digit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameTimeline {
    counts: Vec<usize>,
    len: usize,
}

impl FrameTimeline {
    /// Build from per-digit frame counts, in strip order.
    pub fn new(counts: Vec<usize>) -> CounterResult<Self> {
        if counts.contains(&0) {
            return Err(CounterError::invalid_parameter(
                "every digit animation needs at least one frame",
            ));
        }
        let Some(len) = counts.iter().copied().max() else {
            return Err(CounterError::invalid_parameter(
                "frame timeline needs at least one digit",
            ));
        };
        Ok(Self { counts, len })
    }

    /// Number of output frames.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`: construction rejects empty strips.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Source frame of digit `digit` shown at output frame `frame`.
    pub fn source_frame(&self, frame: usize, digit: usize) -> usize {
        frame % self.counts[digit]
    }

    /// Source frames of every digit at output frame `frame`, left to right.
    pub fn sources(&self, frame: usize) -> impl Iterator<Item = usize> + '_ {
        (0..self.counts.len()).map(move |digit| self.source_frame(frame, digit))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/timeline.rs"]
mod tests;
