// src/app/state.rs

use crate::{
    config::{COINCAP, DF},
    domain::{Asset, FetchFailure},
};

/// Everything that can change the view.
#[derive(Debug, Clone)]
pub enum Action {
    FetchStarted,
    FetchSucceeded {
        assets: Vec<Asset>,
        timestamp: Option<i64>,
    },
    FetchFailed(FetchFailure),
    RevealNextPage,
}

/// State of the asset list: the fetched collection and how much of it is shown.
///
/// The visible window is stored as a length, so `visible()` is always a
/// prefix of `all()` of length `min(page * page_size, all.len())`.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    all: Vec<Asset>,
    visible_len: usize,
    page: usize,
    page_size: usize,
    loading: bool,
    error: Option<FetchFailure>,
    timestamp: Option<i64>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::with_page_size(COINCAP.paging.page_size)
    }
}

impl ViewState {
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            all: Vec::new(),
            visible_len: 0,
            page: 1,
            page_size: page_size.max(1),
            loading: false,
            error: None,
            timestamp: None,
        }
    }

    pub fn all(&self) -> &[Asset] {
        &self.all
    }

    pub fn visible(&self) -> &[Asset] {
        &self.all[..self.visible_len]
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&FetchFailure> {
        self.error.as_ref()
    }

    /// Message for the user, if the fetch failed.
    pub fn error_message(&self) -> Option<&'static str> {
        self.error.as_ref().map(FetchFailure::user_message)
    }

    /// Server time of the snapshot, when the upstream sent one.
    pub fn timestamp(&self) -> Option<i64> {
        self.timestamp
    }

    /// Whether the "Load More" trigger should be offered.
    pub fn has_more(&self) -> bool {
        self.visible_len < self.all.len()
    }

    /// Reducer. Returns `true` if the state changed.
    pub fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::FetchStarted => {
                if self.loading {
                    log::warn!("Fetch already in flight; ignoring second start");
                    return false;
                }
                self.loading = true;
                self.error = None;
                true
            }
            Action::FetchSucceeded { assets, timestamp } => {
                if !self.loading {
                    log::warn!(
                        "Dropping {} assets from a fetch that was never started",
                        assets.len()
                    );
                    return false;
                }
                self.page = 1;
                self.visible_len = assets.len().min(self.page_size);
                self.all = assets;
                self.timestamp = timestamp;
                self.loading = false;
                self.error = None;
                true
            }
            Action::FetchFailed(failure) => {
                if !self.loading {
                    log::warn!(
                        "Dropping failure from a fetch that was never started: {}",
                        failure
                    );
                    return false;
                }
                self.all.clear();
                self.visible_len = 0;
                self.page = 1;
                self.timestamp = None;
                self.loading = false;
                self.error = Some(failure);
                true
            }
            Action::RevealNextPage => self.reveal_next_page(),
        }
    }

    // Appends exactly all[page*size .. page*size + size], clipped to the end.
    fn reveal_next_page(&mut self) -> bool {
        if !self.has_more() {
            return false;
        }
        let start = self.page * self.page_size;
        let end = (start + self.page_size).min(self.all.len());
        self.visible_len = end;
        self.page += 1;
        true
    }
}

/// Called after every dispatch that changed the state.
type Listener = Box<dyn FnMut(&ViewState)>;

/// Owns the [`ViewState`] and notifies listeners when it changes.
#[derive(Default)]
pub struct Store {
    state: ViewState,
    listeners: Vec<Listener>,
}

impl Store {
    pub fn new(state: ViewState) -> Self {
        Self {
            state,
            listeners: Vec::new(),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&ViewState) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn dispatch(&mut self, action: Action) -> bool {
        if DF.log_actions {
            log::info!("dispatch {:?}", ActionName(&action));
        }
        let changed = self.state.apply(action);
        if changed {
            for listener in &mut self.listeners {
                listener(&self.state);
            }
        }
        changed
    }
}

// Keeps action logs to one line; the payload may hold thousands of assets.
struct ActionName<'a>(&'a Action);

impl std::fmt::Debug for ActionName<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Action::FetchStarted => write!(f, "FetchStarted"),
            Action::FetchSucceeded { assets, .. } => {
                write!(f, "FetchSucceeded({} assets)", assets.len())
            }
            Action::FetchFailed(failure) => write!(f, "FetchFailed({})", failure),
            Action::RevealNextPage => write!(f, "RevealNextPage"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::Cell, rc::Rc};

    fn assets(n: usize) -> Vec<Asset> {
        (0..n)
            .map(|i| Asset {
                id: format!("coin-{}", i),
                rank: (i + 1).to_string(),
                name: format!("Coin {}", i),
                symbol: format!("C{}", i),
                price_usd: "1.0".into(),
                market_cap_usd: "100".into(),
                change_percent_24_hr: "0".into(),
            })
            .collect()
    }

    fn loaded(n: usize) -> ViewState {
        let mut state = ViewState::default();
        state.apply(Action::FetchStarted);
        state.apply(Action::FetchSucceeded {
            assets: assets(n),
            timestamp: None,
        });
        state
    }

    #[test]
    fn fresh_state_is_empty_on_page_one() {
        let state = ViewState::default();
        assert!(state.all().is_empty());
        assert!(state.visible().is_empty());
        assert_eq!(state.page(), 1);
        assert_eq!(state.page_size(), 50);
        assert!(!state.is_loading());
        assert!(state.error().is_none());
        assert!(!state.has_more());
    }

    #[test]
    fn fetch_start_sets_loading() {
        let mut state = ViewState::default();
        assert!(state.apply(Action::FetchStarted));
        assert!(state.is_loading());
        assert!(!state.apply(Action::FetchStarted));
    }

    #[test]
    fn first_page_is_min_of_len_and_page_size() {
        for n in [0, 1, 49, 50, 51, 100, 237] {
            let state = loaded(n);
            assert_eq!(state.all().len(), n);
            assert_eq!(state.visible().len(), n.min(50), "n = {}", n);
            assert!(!state.is_loading());
        }
    }

    #[test]
    fn reveal_appends_the_next_window_exactly() {
        let mut state = loaded(120);
        let page = state.page();
        let before = state.visible().len();
        assert!(state.apply(Action::RevealNextPage));

        let appended = &state.visible()[before..];
        assert_eq!(appended, &state.all()[page * 50..page * 50 + 50]);
        assert_eq!(state.page(), 2);
    }

    #[test]
    fn repeated_reveal_converges_and_never_overshoots() {
        let mut state = loaded(237);
        let mut reveals = 0;
        while state.has_more() {
            assert!(state.apply(Action::RevealNextPage));
            assert!(state.visible().len() <= state.all().len());
            assert_eq!(
                state.visible().len(),
                (state.page() * 50).min(state.all().len())
            );
            reveals += 1;
        }
        assert_eq!(reveals, 4);
        assert_eq!(state.visible(), state.all());
        assert_eq!(state.page(), 5);
    }

    #[test]
    fn reveal_without_more_rows_is_a_no_op() {
        let mut state = loaded(30);
        let snapshot = state.clone();
        assert!(!state.apply(Action::RevealNextPage));
        assert_eq!(state, snapshot);

        let mut empty = ViewState::default();
        assert!(!empty.apply(Action::RevealNextPage));
        assert_eq!(empty.page(), 1);
    }

    #[test]
    fn failure_leaves_collections_empty() {
        let mut state = ViewState::default();
        state.apply(Action::FetchStarted);
        state.apply(Action::FetchFailed(FetchFailure::Network("refused".into())));

        assert!(!state.is_loading());
        assert_eq!(state.error_message(), Some("Failed to fetch cryptocurrency data."));
        assert!(state.all().is_empty());
        assert!(state.visible().is_empty());
    }

    #[test]
    fn results_without_a_started_fetch_are_ignored() {
        let mut state = ViewState::default();
        assert!(!state.apply(Action::FetchSucceeded {
            assets: assets(3),
            timestamp: None
        }));
        assert!(state.all().is_empty());
        assert!(!state.apply(Action::FetchFailed(FetchFailure::Status(500))));
        assert!(state.error().is_none());
    }

    #[test]
    fn custom_page_size_windows_the_same_way() {
        let mut state = ViewState::with_page_size(3);
        state.apply(Action::FetchStarted);
        state.apply(Action::FetchSucceeded {
            assets: assets(7),
            timestamp: Some(42),
        });
        assert_eq!(state.visible().len(), 3);
        state.apply(Action::RevealNextPage);
        state.apply(Action::RevealNextPage);
        assert_eq!(state.visible().len(), 7);
        assert_eq!(state.visible()[6].id, "coin-6");
        assert_eq!(state.timestamp(), Some(42));
    }

    #[test]
    fn listeners_fire_only_on_change() {
        let calls = Rc::new(Cell::new(0));
        let mut store = Store::default();
        let counter = calls.clone();
        store.subscribe(move |_| counter.set(counter.get() + 1));

        store.dispatch(Action::FetchStarted);
        store.dispatch(Action::FetchStarted);
        store.dispatch(Action::FetchSucceeded {
            assets: assets(10),
            timestamp: None,
        });
        store.dispatch(Action::RevealNextPage);

        assert_eq!(calls.get(), 2);
        assert_eq!(store.state().visible().len(), 10);
    }

    #[test]
    fn action_log_names_stay_one_line() {
        let succeeded = Action::FetchSucceeded {
            assets: assets(100),
            timestamp: None,
        };
        assert_eq!(
            format!("{:?}", ActionName(&succeeded)),
            "FetchSucceeded(100 assets)"
        );
        let failed = Action::FetchFailed(FetchFailure::Status(503));
        assert_eq!(
            format!("{:?}", ActionName(&failed)),
            "FetchFailed(unexpected HTTP status 503)"
        );
    }
}
