//! Pure state behind the admin list: industry selection, mutation busy flag
//! and the load epoch that keeps out-of-order responses from clobbering a
//! newer list.

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListState {
    industry: String,
    busy: bool,
    load_epoch: u32,
}

impl ListState {
    pub fn industry(&self) -> &str {
        &self.industry
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Change the selected industry. Returns the epoch the caller should
    /// fetch under; `None` means the selection is blank, the list shows
    /// empty and no request goes out.
    pub fn select_industry(&mut self, slug: &str) -> Option<u32> {
        self.industry = slug.trim().to_string();
        self.load_epoch = self.load_epoch.wrapping_add(1);
        if self.industry.is_empty() {
            None
        } else {
            Some(self.load_epoch)
        }
    }

    /// Start a fresh load of the current selection (initial load or the
    /// full reload after a mutation).
    pub fn begin_reload(&mut self) -> Option<u32> {
        if self.industry.is_empty() {
            return None;
        }
        self.load_epoch = self.load_epoch.wrapping_add(1);
        Some(self.load_epoch)
    }

    /// A response may only land if its epoch is still the latest.
    pub fn accept_load(&self, epoch: u32) -> bool {
        self.load_epoch == epoch
    }

    /// Claim the mutation slot. At most one add/edit/remove runs at a time;
    /// returns false when one is already in flight.
    pub fn begin_mutation(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.busy = true;
        true
    }

    pub fn finish_mutation(&mut self) {
        self.busy = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_industry_clears_without_fetching() {
        let mut state = ListState::default();
        assert_eq!(state.select_industry("  "), None);
        assert_eq!(state.industry(), "");
    }

    #[test]
    fn switching_industries_invalidates_the_old_load() {
        let mut state = ListState::default();
        let first = state.select_industry("healthcare").unwrap();
        let second = state.select_industry("retail").unwrap();

        // The healthcare response arrives after the retail switch
        assert!(!state.accept_load(first));
        assert!(state.accept_load(second));
    }

    #[test]
    fn clearing_the_selection_also_invalidates_in_flight_loads() {
        let mut state = ListState::default();
        let epoch = state.select_industry("healthcare").unwrap();
        state.select_industry("");
        assert!(!state.accept_load(epoch));
    }

    #[test]
    fn only_one_mutation_at_a_time() {
        let mut state = ListState::default();
        assert!(state.begin_mutation());
        assert!(!state.begin_mutation());
        state.finish_mutation();
        assert!(state.begin_mutation());
    }

    #[test]
    fn reload_requires_a_selection() {
        let mut state = ListState::default();
        assert_eq!(state.begin_reload(), None);
        state.select_industry("healthcare");
        assert!(state.begin_reload().is_some());
    }
}
