use std::collections::BTreeMap;

/// Top-level layout of the main column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardView {
    #[default]
    Executive,
    Detailed,
}

impl DashboardView {
    pub const ALL: [Self; 2] = [Self::Executive, Self::Detailed];

    pub fn label(self) -> &'static str {
        match self {
            Self::Executive => "Executive View",
            Self::Detailed => "Detailed View",
        }
    }
}

/// Everything the user can change on the dashboard. Lives for one page
/// session and is never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    active_view: DashboardView,
    methods_open: bool,
    exporting: bool,
    /// Project id -> expanded. Missing ids are collapsed.
    expanded: BTreeMap<String, bool>,
}

impl ViewState {
    pub fn active_view(&self) -> DashboardView {
        self.active_view
    }

    pub fn methods_open(&self) -> bool {
        self.methods_open
    }

    pub fn is_exporting(&self) -> bool {
        self.exporting
    }

    pub fn is_expanded(&self, project_id: &str) -> bool {
        self.expanded.get(project_id).copied().unwrap_or(false)
    }

    pub fn select_view(&mut self, view: DashboardView) {
        self.active_view = view;
    }

    pub fn open_calculation_methods(&mut self) {
        self.methods_open = true;
    }

    pub fn close_calculation_methods(&mut self) {
        self.methods_open = false;
    }

    pub fn toggle_project_section(&mut self, project_id: &str) {
        let entry = self.expanded.entry(project_id.to_string()).or_insert(false);
        *entry = !*entry;
    }

    /// Claim the export flag. Returns `false` (and changes nothing) when an
    /// export is already running.
    pub fn begin_export(&mut self) -> bool {
        if self.exporting {
            return false;
        }
        self.exporting = true;
        true
    }

    pub fn end_export(&mut self) {
        self.exporting = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_executive_with_everything_closed() {
        let state = ViewState::default();
        assert_eq!(state.active_view(), DashboardView::Executive);
        assert!(!state.methods_open());
        assert!(!state.is_exporting());
        assert!(!state.is_expanded("pega-referral"));
    }

    #[test]
    fn select_view_is_idempotent() {
        let mut once = ViewState::default();
        once.select_view(DashboardView::Detailed);

        let mut twice = ViewState::default();
        twice.select_view(DashboardView::Detailed);
        twice.select_view(DashboardView::Detailed);

        assert_eq!(once, twice);
        assert_eq!(twice.active_view(), DashboardView::Detailed);
    }

    #[test]
    fn first_toggle_expands_and_second_restores() {
        let mut state = ViewState::default();
        state.toggle_project_section("gwpc-r15-dm");
        assert!(state.is_expanded("gwpc-r15-dm"));
        assert!(!state.is_expanded("pega-es"));

        state.toggle_project_section("gwpc-r15-dm");
        assert!(!state.is_expanded("gwpc-r15-dm"));
    }

    #[test]
    fn sections_toggle_independently() {
        let mut state = ViewState::default();
        state.toggle_project_section("a");
        state.toggle_project_section("b");
        state.toggle_project_section("a");
        assert!(!state.is_expanded("a"));
        assert!(state.is_expanded("b"));
    }

    #[test]
    fn methods_modal_opens_and_closes() {
        let mut state = ViewState::default();
        state.open_calculation_methods();
        assert!(state.methods_open());
        state.close_calculation_methods();
        assert!(!state.methods_open());
    }

    #[test]
    fn second_begin_export_is_ignored() {
        let mut state = ViewState::default();
        assert!(state.begin_export());
        let snapshot = state.clone();
        assert!(!state.begin_export());
        assert_eq!(state, snapshot);
        assert!(state.is_exporting());

        state.end_export();
        assert!(!state.is_exporting());
        assert!(state.begin_export());
    }
}
