//! Page visibility across navigation.
//!
//! A `pagehide` that keeps the page in the back/forward cache only freezes
//! it; the mounted card must survive so it works again after `pageshow`.
//! Only a `pagehide` that discards the page tears the card down.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageState {
    Active,
    /// Stored in the back/forward cache.
    Frozen,
    Unmounted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageAction {
    /// Nothing to do.
    Keep,
    /// Page went into the back/forward cache; keep everything mounted.
    Freeze,
    /// Page came back from the back/forward cache.
    Resume,
    /// Page is going away; release every callback and listener.
    Unmount,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageLifecycle {
    state: PageState,
}

impl Default for PageLifecycle {
    fn default() -> Self {
        Self::new()
    }
}

impl PageLifecycle {
    pub fn new() -> Self {
        Self {
            state: PageState::Active,
        }
    }

    pub fn state(&self) -> PageState {
        self.state
    }

    /// `pagehide`; `persisted` is true when the page enters the cache.
    pub fn hide(&mut self, persisted: bool) -> PageAction {
        match (self.state, persisted) {
            (PageState::Unmounted, _) => PageAction::Keep,
            (_, true) => {
                self.state = PageState::Frozen;
                PageAction::Freeze
            }
            (_, false) => {
                self.state = PageState::Unmounted;
                PageAction::Unmount
            }
        }
    }

    /// `pageshow`; `persisted` is true when restored from the cache.
    pub fn show(&mut self, persisted: bool) -> PageAction {
        match self.state {
            PageState::Frozen if persisted => {
                self.state = PageState::Active;
                PageAction::Resume
            }
            _ => PageAction::Keep,
        }
    }
}
