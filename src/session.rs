use crate::{
    apply_default_shift, compute_impacts, ImpactResults, Mode, ProjectParameters, ProjectRecord,
    ProjectType,
};

/// The editing state of a project.
///
/// The "after" split follows the default shift of the project type until it is
/// edited directly via [`Session::edit_after`]. From then on, edits of the "before"
/// split or of the project type leave it untouched, until [`Session::reset_after`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    params: ProjectParameters,
    after_edited: bool,
}

impl Session {
    pub fn new(params: ProjectParameters) -> Self {
        Self {
            params,
            after_edited: false,
        }
    }

    /// A session from a persisted project. An explicit "after" split of the record
    /// counts as an edit of it.
    pub fn from_record(record: &ProjectRecord) -> Self {
        Self {
            params: ProjectParameters::default().hydrate(record),
            after_edited: record.modal_split_after.is_some(),
        }
    }

    pub fn parameters(&self) -> &ProjectParameters {
        &self.params
    }

    /// Whether the "after" split was edited directly
    pub fn after_edited(&self) -> bool {
        self.after_edited
    }

    fn derive_after(&mut self) {
        if self.after_edited {
            log::debug!("\"after\" split was edited; keeping it");
            return;
        }
        self.params.modal_split_after =
            apply_default_shift(self.params.modal_split_before, self.params.project_type);
    }

    pub fn set_project_type(&mut self, project_type: ProjectType) {
        log::debug!("project type set to {project_type:?}");
        self.params.project_type = project_type;
        self.derive_after();
    }

    pub fn edit_before(&mut self, mode: Mode, value: f64) {
        self.params.modal_split_before = self.params.modal_split_before.redistribute(mode, value);
        self.derive_after();
    }

    pub fn edit_after(&mut self, mode: Mode, value: f64) {
        self.params.modal_split_after = self.params.modal_split_after.redistribute(mode, value);
        self.after_edited = true;
    }

    /// Discards direct edits of the "after" split and re-derives it
    pub fn reset_after(&mut self) {
        self.after_edited = false;
        self.derive_after();
    }

    /// Mutates any other parameter, e.g. `session.update(|p| p.tree_count = 80.0)`.
    /// The splits should be edited with the dedicated methods.
    pub fn update(&mut self, f: impl FnOnce(&mut ProjectParameters)) {
        f(&mut self.params)
    }

    /// Recomputes all impacts of the current parameters
    pub fn results(&self) -> ImpactResults {
        compute_impacts(&self.params)
    }
}
