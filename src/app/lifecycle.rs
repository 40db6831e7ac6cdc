// src/app/lifecycle.rs
// The load/refresh state machine: per-document staleness flags, in-flight load guards, and the single user-visible error slot.

/// Identifies one spawned load attempt. Completions carrying a token that
/// is no longer current are discarded by the owner, so a late result can
/// never be applied over newer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadToken(u64);

/// Load/refresh state owned by the app and mutated only on the UI thread.
/// Both flags start stale, forcing the initial loads on startup. Each flag
/// follows the same shape:
///
/// - stale + nothing in flight: `begin_*_load` hands out a token and
///   expects exactly one load to be spawned for it;
/// - stale while a load is in flight: no second load is started, the
///   in-flight completion satisfies the trigger;
/// - `finish_*_load` is the unconditional Stale-to-Fresh transition,
///   success or failure alike. A failed load never retries by itself; a
///   retry requires an explicit new `mark_*_stale`.
#[derive(Debug)]
pub struct Lifecycle {
    config_stale: bool,
    data_stale: bool,
    config_in_flight: Option<LoadToken>,
    data_in_flight: Option<LoadToken>,
    next_token: u64,
    error: Option<String>,
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self {
            config_stale: true,
            data_stale: true,
            config_in_flight: None,
            data_in_flight: None,
            next_token: 0,
            error: None,
        }
    }
}

impl Lifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    // --- Staleness ---

    pub fn mark_config_stale(&mut self) {
        self.config_stale = true;
    }

    pub fn mark_data_stale(&mut self) {
        self.data_stale = true;
    }

    pub fn config_stale(&self) -> bool {
        self.config_stale
    }

    pub fn data_stale(&self) -> bool {
        self.data_stale
    }

    pub fn load_in_flight(&self) -> bool {
        self.config_in_flight.is_some() || self.data_in_flight.is_some()
    }

    // --- Load Attempts ---

    /// Returns a token exactly when a new configuration load must be
    /// spawned: the flag is stale and no load is in flight.
    pub fn begin_config_load(&mut self) -> Option<LoadToken> {
        if !self.config_stale || self.config_in_flight.is_some() {
            return None;
        }
        let token = self.issue_token();
        self.config_in_flight = Some(token);
        Some(token)
    }

    /// Same shape as `begin_config_load`, over the data document.
    pub fn begin_data_load(&mut self) -> Option<LoadToken> {
        if !self.data_stale || self.data_in_flight.is_some() {
            return None;
        }
        let token = self.issue_token();
        self.data_in_flight = Some(token);
        Some(token)
    }

    /// Unconditional Stale-to-Fresh, whether the load succeeded or failed.
    /// Returns false when the completion does not belong to the current
    /// in-flight load; the caller must discard the result in that case.
    pub fn finish_config_load(&mut self, token: LoadToken) -> bool {
        if self.config_in_flight != Some(token) {
            return false;
        }
        self.config_in_flight = None;
        self.config_stale = false;
        true
    }

    pub fn finish_data_load(&mut self, token: LoadToken) -> bool {
        if self.data_in_flight != Some(token) {
            return false;
        }
        self.data_in_flight = None;
        self.data_stale = false;
        true
    }

    // --- Error Slot ---

    /// Last-writer-wins across config loads, data loads, and photo saves.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    /// Clears the banner without touching staleness; dismissal never
    /// retries the failed operation.
    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn issue_token(&mut self) -> LoadToken {
        self.next_token += 1;
        LoadToken(self.next_token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_flags_start_stale() {
        let lifecycle = Lifecycle::new();
        assert!(lifecycle.config_stale());
        assert!(lifecycle.data_stale());
        assert!(!lifecycle.load_in_flight());
    }

    #[test]
    fn begin_hands_out_exactly_one_token_per_staleness_cycle() {
        let mut lifecycle = Lifecycle::new();
        let token = lifecycle.begin_config_load().expect("initial load expected");
        // A second trigger while the load is in flight starts nothing new.
        lifecycle.mark_config_stale();
        assert!(lifecycle.begin_config_load().is_none());
        // The single completion satisfies both triggers.
        assert!(lifecycle.finish_config_load(token));
        assert!(!lifecycle.config_stale());
        assert!(lifecycle.begin_config_load().is_none());
    }

    #[test]
    fn finish_transitions_to_fresh_even_after_failure_path() {
        // The machine does not distinguish success from failure; the owner
        // reports the failure through the error slot instead.
        let mut lifecycle = Lifecycle::new();
        let token = lifecycle.begin_data_load().expect("initial load expected");
        lifecycle.set_error("failed to read data document");
        assert!(lifecycle.finish_data_load(token));
        assert!(!lifecycle.data_stale());
        assert!(lifecycle.error().is_some());
    }

    #[test]
    fn stale_token_completions_are_discarded() {
        let mut lifecycle = Lifecycle::new();
        let first = lifecycle.begin_config_load().expect("initial load expected");
        assert!(lifecycle.finish_config_load(first));
        lifecycle.mark_config_stale();
        let second = lifecycle.begin_config_load().expect("re-staled load expected");
        // The first token no longer identifies the in-flight load.
        assert!(!lifecycle.finish_config_load(first));
        assert!(lifecycle.config_stale());
        assert!(lifecycle.finish_config_load(second));
        assert!(!lifecycle.config_stale());
    }

    #[test]
    fn config_and_data_loads_are_independent() {
        let mut lifecycle = Lifecycle::new();
        let config = lifecycle.begin_config_load().expect("config load expected");
        let data = lifecycle.begin_data_load().expect("data load expected");
        assert!(lifecycle.load_in_flight());
        assert!(lifecycle.finish_data_load(data));
        assert!(lifecycle.load_in_flight());
        assert!(lifecycle.finish_config_load(config));
        assert!(!lifecycle.load_in_flight());
    }

    #[test]
    fn error_slot_is_last_writer_wins_and_dismissable() {
        let mut lifecycle = Lifecycle::new();
        lifecycle.set_error("config load failed");
        lifecycle.set_error("data load failed");
        assert_eq!(lifecycle.error(), Some("data load failed"));
        lifecycle.dismiss_error();
        assert!(lifecycle.error().is_none());
        // Dismissing the banner never changes staleness.
        assert!(lifecycle.config_stale());
        assert!(lifecycle.data_stale());
    }

    #[test]
    fn marking_stale_after_fresh_restarts_the_cycle() {
        let mut lifecycle = Lifecycle::new();
        let token = lifecycle.begin_data_load().expect("initial load expected");
        assert!(lifecycle.finish_data_load(token));
        lifecycle.mark_data_stale();
        assert!(lifecycle.begin_data_load().is_some());
    }
}
