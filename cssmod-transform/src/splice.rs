use cssmod_sfc::SourceRange;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpliceEdit {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpliceError {
    #[error("edit {start}..{end} is outside the source (len {len})")]
    OutOfBounds { start: usize, end: usize, len: usize },

    #[error("edit {start}..{end} does not fall on a character boundary")]
    NotCharBoundary { start: usize, end: usize },

    #[error("edits {first:?} and {second:?} overlap")]
    Overlap {
        first: (usize, usize),
        second: (usize, usize),
    },
}

/// Offset-addressed replacements against an immutable source.
///
/// Edits may be registered in any order; offsets always refer to the
/// original text. Registering the same range twice keeps the last text.
#[derive(Debug, Clone, Default)]
pub struct SpliceBuffer {
    edits: Vec<SpliceEdit>,
}

impl SpliceBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, range: SourceRange, text: impl Into<String>) {
        let text = text.into();
        tracing::trace!(start = range.start, end = range.end, text = %text, "splice");
        if let Some(existing) = self
            .edits
            .iter_mut()
            .find(|e| e.start == range.start && e.end == range.end)
        {
            existing.text = text;
            return;
        }
        self.edits.push(SpliceEdit {
            start: range.start,
            end: range.end,
            text,
        });
    }

    pub fn remove(&mut self, range: SourceRange) {
        self.update(range, "");
    }

    pub fn edits(&self) -> &[SpliceEdit] {
        &self.edits
    }

    pub fn len(&self) -> usize {
        self.edits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    pub fn into_edits(self) -> Vec<SpliceEdit> {
        self.edits
    }

    /// Produce the rewritten text. Fails if any edit is out of bounds or
    /// overlaps another; zero-width inserts may touch a neighbour.
    pub fn apply(&self, source: &str) -> Result<String, SpliceError> {
        let mut edits: Vec<&SpliceEdit> = self.edits.iter().collect();
        edits.sort_by_key(|e| (e.start, e.end));

        let mut out = String::with_capacity(source.len());
        let mut cursor = 0usize;
        let mut prev: Option<&SpliceEdit> = None;
        for edit in edits {
            if edit.start > edit.end || edit.end > source.len() {
                return Err(SpliceError::OutOfBounds {
                    start: edit.start,
                    end: edit.end,
                    len: source.len(),
                });
            }
            if !source.is_char_boundary(edit.start) || !source.is_char_boundary(edit.end) {
                return Err(SpliceError::NotCharBoundary {
                    start: edit.start,
                    end: edit.end,
                });
            }
            if let Some(p) = prev {
                if edit.start < p.end {
                    return Err(SpliceError::Overlap {
                        first: (p.start, p.end),
                        second: (edit.start, edit.end),
                    });
                }
            }
            out.push_str(&source[cursor..edit.start]);
            out.push_str(&edit.text);
            cursor = edit.end;
            prev = Some(edit);
        }
        out.push_str(&source[cursor..]);
        Ok(out)
    }
}
