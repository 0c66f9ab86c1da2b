/// Accumulator threaded through a `fold` over a section's lines.
///
/// Holds the finished records plus the one currently being filled. A record
/// only reaches the output when the next delimiter line starts a new one, or
/// when `finish` flushes it at the end of the section.
#[derive(Debug)]
pub(crate) struct RecordFold<T> {
    finished: Vec<T>,
    current: Option<T>,
}

impl<T> Default for RecordFold<T> {
    fn default() -> Self {
        Self {
            finished: Vec::new(),
            current: None,
        }
    }
}

impl<T: Default> RecordFold<T> {
    /// Flushes the open record, if any, and opens `record`.
    pub(crate) fn start(mut self, record: T) -> Self {
        if let Some(previous) = self.current.replace(record) {
            self.finished.push(previous);
        }
        self
    }

    /// Applies `f` to the open record, opening an empty one first when needed.
    pub(crate) fn update(mut self, f: impl FnOnce(&mut T)) -> Self {
        f(self.current.get_or_insert_with(T::default));
        self
    }

    pub(crate) fn finish(mut self) -> Vec<T> {
        self.finished.extend(self.current.take());
        self.finished
    }
}
