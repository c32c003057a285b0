/// Largest row or column count a header may declare.
pub const MAX_DIMENSION: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub rows: usize,
    pub cols: usize,
}

impl Dimensions {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// The `0 0` header that ends a field stream.
    pub fn is_terminator(&self) -> bool {
        self.rows == 0 && self.cols == 0
    }

    pub fn area(&self) -> usize {
        self.rows * self.cols
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }
}

/// One field as read from the input: its declared extent plus the raw body lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub dimensions: Dimensions,
    pub lines: Vec<String>,
}

impl Field {
    pub fn new(dimensions: Dimensions, lines: Vec<String>) -> Self {
        Self { dimensions, lines }
    }
}
