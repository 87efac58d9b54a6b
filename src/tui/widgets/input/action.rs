#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Continue,
    HistoryPrev,
    HistoryNext,
    Clear,
}
