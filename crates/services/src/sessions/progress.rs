/// Aggregated view of quiz progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizProgress {
    pub total: usize,
    pub current: usize,
    pub answered: usize,
    pub remaining: usize,
    pub score: u32,
    pub is_complete: bool,
}

impl QuizProgress {
    /// One-based number of the question on screen, capped at `total`.
    #[must_use]
    pub fn question_number(&self) -> usize {
        (self.current + 1).min(self.total)
    }
}
