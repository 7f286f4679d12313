/// Resource limits applied when loading puzzles
///
/// Solving itself is bounded by the prime table; these limits cap how much
/// input the parser and validator will accept.
#[derive(Debug, Clone)]
pub struct ResourceLimits {
    /// Maximum puzzle file size in bytes
    pub max_file_size_bytes: usize,

    /// Maximum number of expressions in one puzzle, combined expression included
    pub max_expressions: usize,

    /// Maximum number of letters in one expression
    pub max_letters: usize,
}

impl Default for ResourceLimits {
    fn default() -> Self {
        Self {
            max_file_size_bytes: 5 * 1024 * 1024, // 5 MB
            max_expressions: 256,
            max_letters: 256,
        }
    }
}

impl ResourceLimits {
    pub fn new() -> Self {
        Self::default()
    }
}
