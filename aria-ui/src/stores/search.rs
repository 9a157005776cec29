//! Search page state: form fields, results, in-flight request tracking

use crate::display_types::SearchResult;

/// What kind of catalog entry a search targets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum QueryType {
    #[default]
    Track,
    Album,
    Playlist,
    Artist,
}

impl QueryType {
    pub fn label(&self) -> &'static str {
        match self {
            QueryType::Track => "Track",
            QueryType::Album => "Album",
            QueryType::Playlist => "Playlist",
            QueryType::Artist => "Artist",
        }
    }

    /// Wire value sent in the search form body.
    pub fn value(&self) -> &'static str {
        match self {
            QueryType::Track => "track",
            QueryType::Album => "album",
            QueryType::Playlist => "playlist",
            QueryType::Artist => "artist",
        }
    }

    pub fn from_value(value: &str) -> Option<QueryType> {
        QueryType::all().iter().copied().find(|q| q.value() == value)
    }

    pub fn all() -> &'static [QueryType] {
        &[
            QueryType::Track,
            QueryType::Album,
            QueryType::Playlist,
            QueryType::Artist,
        ]
    }
}

/// Token identifying one search submission. Only the latest token may apply
/// its outcome, so out-of-order responses never clobber newer results.
pub type RequestToken = u64;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchState {
    pub module: String,
    pub query_type: QueryType,
    pub query: String,
    /// Results of the latest settled search, in response order.
    pub results: Vec<SearchResult>,
    /// The results container stays hidden until a first search succeeds.
    pub has_searched: bool,
    loading: bool,
    seq: RequestToken,
}

impl SearchState {
    /// Start a submission: shows the overlay and returns the token the
    /// completion must present.
    pub fn begin(&mut self) -> RequestToken {
        self.seq += 1;
        self.loading = true;
        self.seq
    }

    /// Apply a successful response. Returns false (and changes nothing) when
    /// a newer submission has superseded this token.
    pub fn apply_results(&mut self, token: RequestToken, results: Vec<SearchResult>) -> bool {
        if !self.settle(token) {
            return false;
        }
        self.results = results;
        self.has_searched = true;
        true
    }

    /// Acknowledge a failed response. Returns false when stale; the caller
    /// only surfaces the error for a current token.
    pub fn apply_error(&mut self, token: RequestToken) -> bool {
        self.settle(token)
    }

    fn settle(&mut self, token: RequestToken) -> bool {
        if token != self.seq {
            return false;
        }
        self.loading = false;
        true
    }

    /// Whether the blocking overlay is visible.
    pub fn loading(&self) -> bool {
        self.loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(name: &str) -> SearchResult {
        SearchResult {
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn overlay_shows_and_hides_once_per_submission() {
        let mut state = SearchState::default();
        assert!(!state.loading());

        let token = state.begin();
        assert!(state.loading());

        assert!(state.apply_results(token, vec![result("a")]));
        assert!(!state.loading());
        assert!(state.has_searched);
    }

    #[test]
    fn overlay_hides_on_failure_too() {
        let mut state = SearchState::default();
        let token = state.begin();
        assert!(state.apply_error(token));
        assert!(!state.loading());
        assert!(!state.has_searched);
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut state = SearchState::default();
        let first = state.begin();
        let second = state.begin();

        // First submission finishing late must not apply or clear the overlay.
        assert!(!state.apply_results(first, vec![result("stale")]));
        assert!(state.loading());
        assert!(state.results.is_empty());

        assert!(state.apply_results(second, vec![result("fresh")]));
        assert_eq!(state.results[0].name, "fresh");
        assert!(!state.loading());
    }

    #[test]
    fn stale_failure_does_not_settle_newer_request() {
        let mut state = SearchState::default();
        let first = state.begin();
        let _second = state.begin();
        assert!(!state.apply_error(first));
        assert!(state.loading());
    }

    #[test]
    fn query_type_round_trips_through_wire_value() {
        for kind in QueryType::all() {
            assert_eq!(QueryType::from_value(kind.value()), Some(*kind));
        }
        assert_eq!(QueryType::from_value("podcast"), None);
    }
}
