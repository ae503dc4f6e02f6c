/// Endless reader over preloaded data. Wraps around to the first element after the last one.
#[derive(Clone, Debug)]
pub struct CircularReader<T: Clone> {
    buffer: Vec<T>,
    index: usize,
}

impl<T: Clone> CircularReader<T> {
    /// Creates a new CircularReader with preloaded data. Fails if `data` is empty.
    pub fn new(data: Vec<T>) -> Result<Self, String> {
        if data.is_empty() {
            return Err("Buffer cannot be empty".to_string());
        }
        Ok(Self {
            buffer: data,
            index: 0,
        })
    }

    /// Reads the next element, moving the index forward cyclically.
    pub fn next_element(&mut self) -> T {
        let elem = self.buffer[self.index].clone();
        self.index = (self.index + 1) % self.buffer.len();
        elem
    }

    /// Peeks at the current element without advancing the index.
    pub fn peek(&self) -> &T {
        &self.buffer[self.index]
    }

    /// Resets the reader back to the start.
    pub fn reset(&mut self) {
        self.index = 0;
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

impl<T: Clone> TryFrom<Vec<T>> for CircularReader<T> {
    type Error = String;
    fn try_from(value: Vec<T>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
