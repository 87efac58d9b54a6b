/// Vertical scroll position of the transcript pane.
///
/// While `following`, the pane stays pinned to the newest line as content
/// grows. Scrolling up releases the pin; scrolling back to the bottom or
/// calling [`ScrollState::follow_latest`] restores it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollState {
    offset: usize,
    content_height: usize,
    viewport_height: usize,
    following: bool,
}

impl ScrollState {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            offset: 0,
            content_height: 0,
            viewport_height: 0,
            following: true,
        }
    }

    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    #[must_use]
    pub const fn is_following(&self) -> bool {
        self.following
    }

    #[must_use]
    pub const fn at_bottom(&self) -> bool {
        self.offset >= self.max_offset()
    }

    /// Records the latest measurements and re-clamps the offset.
    pub fn update(&mut self, content_height: usize, viewport_height: usize) {
        self.content_height = content_height;
        self.viewport_height = viewport_height;
        if self.following {
            self.offset = self.max_offset();
        } else {
            self.offset = self.offset.min(self.max_offset());
        }
    }

    pub const fn follow_latest(&mut self) {
        self.following = true;
        self.offset = self.max_offset();
    }

    pub const fn jump_to_top(&mut self) {
        self.offset = 0;
        self.following = self.max_offset() == 0;
    }

    pub const fn scroll_up(&mut self, lines: usize) {
        self.offset = self.offset.saturating_sub(lines);
        self.following = self.max_offset() == 0;
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.offset = (self.offset + lines).min(self.max_offset());
        self.following = self.at_bottom();
    }

    const fn max_offset(&self) -> usize {
        self.content_height.saturating_sub(self.viewport_height)
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_following() {
        let state = ScrollState::new();
        assert_eq!(state.offset(), 0);
        assert!(state.is_following());
    }

    #[test]
    fn following_tracks_growth() {
        let mut state = ScrollState::new();
        state.update(5, 10);
        assert_eq!(state.offset(), 0);

        state.update(25, 10);
        assert_eq!(state.offset(), 15);
        assert!(state.at_bottom());
    }

    #[test]
    fn scrolling_up_releases_pin() {
        let mut state = ScrollState::new();
        state.update(30, 10);

        state.scroll_up(5);
        assert_eq!(state.offset(), 15);
        assert!(!state.is_following());

        state.update(40, 10);
        assert_eq!(state.offset(), 15, "manual position survives new content");
    }

    #[test]
    fn scrolling_back_down_repins() {
        let mut state = ScrollState::new();
        state.update(30, 10);
        state.scroll_up(3);
        state.scroll_down(100);

        assert!(state.is_following());
        assert_eq!(state.offset(), 20);
    }

    #[test]
    fn follow_latest_after_manual_scroll() {
        let mut state = ScrollState::new();
        state.update(30, 10);
        state.jump_to_top();
        assert_eq!(state.offset(), 0);
        assert!(!state.is_following());

        state.follow_latest();
        assert!(state.is_following());
        assert_eq!(state.offset(), 20);
    }

    #[test]
    fn short_content_is_always_at_bottom() {
        let mut state = ScrollState::new();
        state.update(4, 10);
        state.scroll_up(2);
        assert!(state.is_following());
        assert!(state.at_bottom());
    }
}
