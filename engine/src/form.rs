//! Form controller: the draft, its errors, and the edit target.
//!
//! State machine: `Creating` (no edit target) and `Editing(id)`. Only a
//! successful submit, or deleting the record being edited, leaves
//! `Editing`. There is no cancel.

use crate::{
    error::Result, storage::SessionStorage, store::RecordStore, validate::ValidationErrors,
    EmployeeId, Error, Field, FormDraft,
};
use serde::{Deserialize, Serialize};

/// Which write the next successful submit performs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "mode", content = "id")]
pub enum FormMode {
    /// No edit target; submit adds
    Creating,
    /// Submit replaces the record with this id
    Editing(EmployeeId),
}

impl FormMode {
    pub fn is_editing(&self) -> bool {
        matches!(self, FormMode::Editing(_))
    }
}

/// Result of a submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "outcome")]
pub enum SubmitOutcome {
    /// Draft failed validation; nothing was written
    Rejected { errors: ValidationErrors },
    /// New record appended
    Added { id: EmployeeId },
    /// Existing record replaced
    Updated { id: EmployeeId },
}

/// The employee form bound to an injected record store.
#[derive(Debug, Clone)]
pub struct EmployeeForm<S: SessionStorage> {
    store: RecordStore<S>,
    draft: FormDraft,
    errors: ValidationErrors,
    mode: FormMode,
}

impl<S: SessionStorage> EmployeeForm<S> {
    /// Bind an empty form to a loaded store.
    pub fn new(store: RecordStore<S>) -> Self {
        Self {
            store,
            draft: FormDraft::new(),
            errors: ValidationErrors::new(),
            mode: FormMode::Creating,
        }
    }

    pub fn store(&self) -> &RecordStore<S> {
        &self.store
    }

    pub fn into_store(self) -> RecordStore<S> {
        self.store
    }

    pub fn draft(&self) -> &FormDraft {
        &self.draft
    }

    /// Errors from the last rejected submit.
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    /// Label of the submit button for the current mode.
    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            FormMode::Creating => "Add Employee",
            FormMode::Editing(_) => "Update Employee",
        }
    }

    /// Overwrite one draft field. No validation happens here.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    /// [`EmployeeForm::set_field`] addressed by the field's form name.
    pub fn set_field_by_name(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        let field: Field = name.parse()?;
        self.set_field(field, value);
        Ok(())
    }

    /// Load a record into the draft and make it the edit target.
    pub fn start_edit(&mut self, id: &str) -> Result<()> {
        let record = self
            .store
            .get(id)
            .ok_or_else(|| Error::RecordNotFound(id.to_string()))?;

        self.draft = FormDraft::from(&record.employee);
        self.mode = FormMode::Editing(record.id.clone());
        tracing::debug!(%id, "editing employee");
        Ok(())
    }

    /// Validate the draft and, if it passes, add or update.
    ///
    /// A rejected submit keeps the draft and mode and records the errors.
    /// Storage failures are returned as errors and also leave the form as
    /// it was.
    pub fn submit(&mut self) -> Result<SubmitOutcome> {
        let employee = match self.draft.to_employee(self.store.validator()) {
            Ok(employee) => employee,
            Err(Error::Validation(errors)) => {
                tracing::debug!(fields = errors.len(), "submit rejected");
                self.errors = errors.clone();
                return Ok(SubmitOutcome::Rejected { errors });
            }
            Err(e) => return Err(e),
        };

        let outcome = match &self.mode {
            FormMode::Creating => SubmitOutcome::Added {
                id: self.store.add(employee)?,
            },
            FormMode::Editing(id) => {
                self.store.update(id, employee)?;
                SubmitOutcome::Updated { id: id.clone() }
            }
        };

        self.reset();
        Ok(outcome)
    }

    /// Delete a record. Deleting the edit target returns the form to
    /// `Creating` with an empty draft.
    pub fn remove(&mut self, id: &str) -> Result<()> {
        self.store.remove(id)?;
        if self.mode == FormMode::Editing(id.to_string()) {
            self.reset();
        }
        Ok(())
    }

    fn reset(&mut self) {
        self.draft = FormDraft::new();
        self.errors = ValidationErrors::new();
        self.mode = FormMode::Creating;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use crate::{Department, RosterConfig};

    fn test_form() -> EmployeeForm<MemoryStorage> {
        let store = RecordStore::load(MemoryStorage::new(), &RosterConfig::default()).unwrap();
        EmployeeForm::new(store)
    }

    fn fill(form: &mut EmployeeForm<MemoryStorage>, first_name: &str) {
        let values = [
            (Field::FirstName, first_name),
            (Field::LastName, "Lee"),
            (Field::Email, "a@b.com"),
            (Field::Phone, "1234567890"),
            (Field::Gender, "Female"),
            (Field::Department, "IT"),
            (Field::Designation, "Engineer"),
            (Field::Salary, "5000"),
            (Field::JoiningDate, "2024-01-01"),
            (Field::Image, "http://x/y.png"),
            (Field::Status, "Active"),
        ];
        for (field, value) in values {
            form.set_field(field, value);
        }
    }

    fn added_id(outcome: SubmitOutcome) -> EmployeeId {
        match outcome {
            SubmitOutcome::Added { id } => id,
            other => panic!("expected Added, got {:?}", other),
        }
    }

    #[test]
    fn starts_creating_and_empty() {
        let form = test_form();
        assert_eq!(form.mode(), &FormMode::Creating);
        assert!(form.draft().is_empty());
        assert!(form.errors().is_empty());
        assert_eq!(form.submit_label(), "Add Employee");
    }

    #[test]
    fn set_field_does_not_validate() {
        let mut form = test_form();
        form.set_field(Field::Phone, "nope");
        assert_eq!(form.draft().phone, "nope");
        assert!(form.errors().is_empty());
    }

    #[test]
    fn set_field_by_name() {
        let mut form = test_form();
        form.set_field_by_name("joiningDate", "2024-02-02").unwrap();
        assert_eq!(form.draft().joining_date, "2024-02-02");

        assert_eq!(
            form.set_field_by_name("age", "30").unwrap_err(),
            Error::UnknownField("age".into())
        );
    }

    #[test]
    fn valid_submit_adds_and_resets() {
        let mut form = test_form();
        fill(&mut form, "Alice");

        let id = added_id(form.submit().unwrap());
        assert_eq!(form.store().len(), 1);
        assert!(form.store().get(&id).is_some());
        assert!(form.draft().is_empty());
        assert!(form.errors().is_empty());
    }

    #[test]
    fn rejected_submit_keeps_draft_and_store() {
        let mut form = test_form();
        fill(&mut form, "Al");

        let outcome = form.submit().unwrap();
        assert!(matches!(outcome, SubmitOutcome::Rejected { ref errors } if errors.len() == 1));
        assert_eq!(
            form.error(Field::FirstName),
            Some("First name must be at least 3 characters")
        );
        assert_eq!(form.draft().first_name, "Al");
        assert!(form.store().is_empty());
    }

    #[test]
    fn errors_clear_after_successful_submit() {
        let mut form = test_form();
        form.submit().unwrap();
        assert_eq!(form.errors().len(), Field::ALL.len());

        fill(&mut form, "Alice");
        form.submit().unwrap();
        assert!(form.errors().is_empty());
    }

    #[test]
    fn edit_then_submit_updates_in_place() {
        let mut form = test_form();
        fill(&mut form, "Alice");
        let a = added_id(form.submit().unwrap());
        fill(&mut form, "Bobby");
        let b = added_id(form.submit().unwrap());

        form.start_edit(&a).unwrap();
        assert_eq!(form.mode(), &FormMode::Editing(a.clone()));
        assert_eq!(form.submit_label(), "Update Employee");
        assert_eq!(form.draft().first_name, "Alice");
        assert_eq!(form.draft().salary, "5000");

        form.set_field(Field::Department, "Finance");
        assert_eq!(
            form.submit().unwrap(),
            SubmitOutcome::Updated { id: a.clone() }
        );

        assert_eq!(form.mode(), &FormMode::Creating);
        assert_eq!(form.store().len(), 2);
        assert_eq!(form.store().position(&a), Some(0));
        assert_eq!(
            form.store().get(&a).unwrap().employee.department,
            Department::Finance
        );
        assert_eq!(
            form.store().get(&b).unwrap().employee.department,
            Department::IT
        );
    }

    #[test]
    fn rejected_edit_stays_editing() {
        let mut form = test_form();
        fill(&mut form, "Alice");
        let id = added_id(form.submit().unwrap());

        form.start_edit(&id).unwrap();
        form.set_field(Field::Salary, "500");
        form.submit().unwrap();

        assert_eq!(form.error(Field::Salary), Some("Salary must be at least 1000"));
        assert!(form.mode().is_editing());
        assert_eq!(
            form.store().get(&id).unwrap().employee.salary.amount(),
            Some(5000)
        );
    }

    #[test]
    fn start_edit_unknown_id() {
        let mut form = test_form();
        assert_eq!(
            form.start_edit("EMP1").unwrap_err(),
            Error::RecordNotFound("EMP1".into())
        );
        assert_eq!(form.mode(), &FormMode::Creating);
    }

    #[test]
    fn removing_edit_target_returns_to_creating() {
        let mut form = test_form();
        fill(&mut form, "Alice");
        let a = added_id(form.submit().unwrap());
        fill(&mut form, "Bobby");
        let b = added_id(form.submit().unwrap());

        form.start_edit(&a).unwrap();
        form.remove(&b).unwrap();
        assert!(form.mode().is_editing());
        assert_eq!(form.draft().first_name, "Alice");

        form.remove(&a).unwrap();
        assert_eq!(form.mode(), &FormMode::Creating);
        assert!(form.draft().is_empty());
        assert!(form.store().is_empty());
    }

    #[test]
    fn outcome_serializes_tagged() {
        let json = serde_json::to_value(SubmitOutcome::Added { id: "EMP1".into() }).unwrap();
        assert_eq!(json, serde_json::json!({"outcome": "added", "id": "EMP1"}));

        let json = serde_json::to_value(FormMode::Editing("EMP1".into())).unwrap();
        assert_eq!(json, serde_json::json!({"mode": "editing", "id": "EMP1"}));
    }
}
