//! Product-creation wizard state machine.
//!
//! The wizard walks through four steps: category, demographics, flavors and
//! AI suggestions. Every transition is a plain method returning an outcome
//! value; fetching suggestions and showing notifications are left to the
//! caller.

use chrono::NaiveDate;
use thiserror::Error;
use tracing::debug;

use crate::domain::entities::{
    AgeGroup, AiSuggestion, Category, Flavor, Product, ProductId, ProductStatus, Region,
    WizardForm,
};

/// Numbered wizard step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum WizardStep {
    /// Step 1: pick a category.
    #[default]
    Category = 1,
    /// Step 2: pick an age group and a region.
    Demographics = 2,
    /// Step 3: pick flavors, then fetch suggestions.
    Flavors = 3,
    /// Step 4: choose a concept and create it.
    Suggestions = 4,
}

impl WizardStep {
    /// Steps in order.
    pub const ALL: [Self; 4] = [
        Self::Category,
        Self::Demographics,
        Self::Flavors,
        Self::Suggestions,
    ];

    /// One-based step number.
    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Short title for the step indicator.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Category => "Category",
            Self::Demographics => "Demographics",
            Self::Flavors => "Flavors",
            Self::Suggestions => "Suggestions",
        }
    }

    const fn following(self) -> Self {
        match self {
            Self::Category => Self::Demographics,
            Self::Demographics => Self::Flavors,
            Self::Flavors | Self::Suggestions => Self::Suggestions,
        }
    }

    const fn preceding(self) -> Self {
        match self {
            Self::Category | Self::Demographics => Self::Category,
            Self::Flavors => Self::Demographics,
            Self::Suggestions => Self::Flavors,
        }
    }
}

/// Step-scoped validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Step 1 has no category.
    #[error("Please select a category.")]
    CategoryRequired,
    /// Step 2 lacks an age group or region.
    #[error("Please select both age group and region.")]
    DemographicsRequired,
    /// Step 3 has no flavor.
    #[error("Please select at least one flavor.")]
    FlavorsRequired,
}

/// Error currently shown by the wizard.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    /// The current step failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The suggestion request failed; carries the user-facing message.
    #[error("{0}")]
    Suggestions(String),
}

/// Result of [`Wizard::next`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextOutcome {
    /// The wizard moved to the given step.
    Advanced(WizardStep),
    /// Step 3 is valid; the caller must fetch suggestions for this form and
    /// report back through [`Wizard::suggestions_loaded`] or
    /// [`Wizard::suggestions_failed`].
    FetchSuggestions(WizardForm),
    /// Validation failed; nothing changed.
    Invalid(ValidationError),
    /// A suggestion fetch is already in flight.
    Busy,
    /// Already on the last step.
    Unchanged,
}

/// Result of [`Wizard::select`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The concept is now selected.
    Selected,
    /// The concept was already selected.
    Unchanged,
    /// No concept at that index.
    OutOfRange,
    /// A suggestion request is in flight.
    Busy,
}

/// Reasons the create transition is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CreateError {
    /// Create was attempted before step 4.
    #[error("products can only be created from the suggestions step (currently on {0:?})")]
    WrongStep(WizardStep),
    /// Step 4 has no concept selected.
    #[error("Please select a product concept before creating.")]
    NoSelection,
}

/// Wizard session state.
#[derive(Debug, Clone, Default)]
pub struct Wizard {
    step: WizardStep,
    form: WizardForm,
    suggestions: Vec<AiSuggestion>,
    selected: Option<usize>,
    error: Option<WizardError>,
    fetch_pending: bool,
}

impl Wizard {
    /// Creates a wizard on step 1 with an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current step.
    #[must_use]
    pub const fn step(&self) -> WizardStep {
        self.step
    }

    /// Returns the answers collected so far.
    #[must_use]
    pub const fn form(&self) -> &WizardForm {
        &self.form
    }

    /// Returns the concepts loaded for step 4.
    #[must_use]
    pub fn suggestions(&self) -> &[AiSuggestion] {
        &self.suggestions
    }

    /// Returns the selected concept.
    #[must_use]
    pub fn selected(&self) -> Option<&AiSuggestion> {
        self.selected.and_then(|idx| self.suggestions.get(idx))
    }

    /// Returns the index of the selected concept.
    #[must_use]
    pub const fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Returns the error shown on the current step.
    #[must_use]
    pub const fn error(&self) -> Option<&WizardError> {
        self.error.as_ref()
    }

    /// Returns whether a suggestion request is in flight.
    #[must_use]
    pub const fn is_fetching(&self) -> bool {
        self.fetch_pending
    }

    /// Create is offered only on the last step with a concept selected.
    #[must_use]
    pub fn can_create(&self) -> bool {
        self.step == WizardStep::Suggestions && self.selected().is_some() && !self.fetch_pending
    }

    /// Sets the step 1 category.
    ///
    /// Form edits are refused while a suggestion request is in flight, so
    /// the concepts returned always match the form that was sent. Each setter
    /// returns whether the edit was applied.
    pub fn set_category(&mut self, category: Category) -> bool {
        if self.fetch_pending {
            return false;
        }
        self.form.category = Some(category);
        true
    }

    /// Sets the step 2 age group.
    pub fn set_age_group(&mut self, age_group: AgeGroup) -> bool {
        if self.fetch_pending {
            return false;
        }
        self.form.age_group = Some(age_group);
        true
    }

    /// Sets the step 2 region.
    pub fn set_region(&mut self, region: Region) -> bool {
        if self.fetch_pending {
            return false;
        }
        self.form.region = Some(region);
        true
    }

    /// Returns the flavor's new membership, or `None` while a fetch is pending.
    pub fn toggle_flavor(&mut self, flavor: Flavor) -> Option<bool> {
        if self.fetch_pending {
            return None;
        }
        Some(self.form.toggle_flavor(flavor))
    }

    fn validate(&self) -> Result<(), ValidationError> {
        match self.step {
            WizardStep::Category if self.form.category.is_none() => {
                Err(ValidationError::CategoryRequired)
            }
            WizardStep::Demographics
                if self.form.age_group.is_none() || self.form.region.is_none() =>
            {
                Err(ValidationError::DemographicsRequired)
            }
            WizardStep::Flavors if self.form.flavors.is_empty() => {
                Err(ValidationError::FlavorsRequired)
            }
            _ => Ok(()),
        }
    }

    /// Attempts to move forward one step.
    pub fn next(&mut self) -> NextOutcome {
        if self.fetch_pending {
            return NextOutcome::Busy;
        }

        if let Err(e) = self.validate() {
            debug!(step = ?self.step, error = %e, "Wizard step invalid");
            self.error = Some(e.into());
            return NextOutcome::Invalid(e);
        }
        self.error = None;

        match self.step {
            WizardStep::Category | WizardStep::Demographics => {
                self.step = self.step.following();
                NextOutcome::Advanced(self.step)
            }
            WizardStep::Flavors => {
                self.fetch_pending = true;
                NextOutcome::FetchSuggestions(self.form.clone())
            }
            WizardStep::Suggestions => NextOutcome::Unchanged,
        }
    }

    /// Commits the step 3 to 4 transition. Returns false when no fetch was
    /// pending, in which case the result is discarded.
    pub fn suggestions_loaded(&mut self, suggestions: Vec<AiSuggestion>) -> bool {
        if !self.fetch_pending {
            debug!("Discarding suggestions for an abandoned request");
            return false;
        }
        self.fetch_pending = false;
        self.suggestions = suggestions;
        self.selected = None;
        self.error = None;
        self.step = WizardStep::Suggestions;
        true
    }

    /// Records a failed suggestion fetch. The step and form are untouched.
    pub fn suggestions_failed(&mut self, message: impl Into<String>) -> bool {
        if !self.fetch_pending {
            return false;
        }
        self.fetch_pending = false;
        self.error = Some(WizardError::Suggestions(message.into()));
        true
    }

    /// Abandons an in-flight suggestion request without moving. Returns true
    /// when a request was pending.
    pub fn cancel_fetch(&mut self) -> bool {
        std::mem::replace(&mut self.fetch_pending, false)
    }

    /// Moves back one step (never below the first) and clears errors. An
    /// in-flight suggestion request is abandoned.
    pub fn previous(&mut self) -> WizardStep {
        self.fetch_pending = false;
        self.step = self.step.preceding();
        self.error = None;
        self.step
    }

    /// Selects the suggestion at `index`.
    pub fn select(&mut self, index: usize) -> SelectOutcome {
        if self.fetch_pending {
            return SelectOutcome::Busy;
        }
        if index >= self.suggestions.len() {
            return SelectOutcome::OutOfRange;
        }
        if self.selected == Some(index) {
            return SelectOutcome::Unchanged;
        }
        self.selected = Some(index);
        SelectOutcome::Selected
    }

    /// Builds the product for the selected concept and resets the wizard.
    ///
    /// # Errors
    /// Returns [`CreateError`] when not on the suggestions step or nothing is
    /// selected; the wizard is left as it was.
    pub fn create(&mut self, id: ProductId, today: NaiveDate) -> Result<Product, CreateError> {
        if self.step != WizardStep::Suggestions {
            return Err(CreateError::WrongStep(self.step));
        }
        let (Some(suggestion), Some(category)) = (self.selected(), self.form.category) else {
            return Err(CreateError::NoSelection);
        };

        let product = Product::new(
            id,
            suggestion.name.clone(),
            category,
            suggestion.score,
            ProductStatus::Testing,
            today,
        );

        self.reset();
        Ok(product)
    }

    /// Discards the whole session.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
    }

    fn wizard_at_flavors() -> Wizard {
        let mut wizard = Wizard::new();
        wizard.set_category(Category::Beverages);
        assert_eq!(wizard.next(), NextOutcome::Advanced(WizardStep::Demographics));
        wizard.set_age_group(AgeGroup::From18To25);
        wizard.set_region(Region::Europe);
        assert_eq!(wizard.next(), NextOutcome::Advanced(WizardStep::Flavors));
        wizard
    }

    fn wizard_with_suggestions() -> Wizard {
        let mut wizard = wizard_at_flavors();
        wizard.toggle_flavor(Flavor::Sweet);
        assert!(matches!(wizard.next(), NextOutcome::FetchSuggestions(_)));
        wizard.suggestions_loaded(vec![
            AiSuggestion::new("Tropical Fizz", 90, "Sparkling mango and passionfruit"),
            AiSuggestion::new("Berry Bliss", 84, "Mixed berry smoothie"),
        ]);
        wizard
    }

    #[test]
    fn test_next_without_category_is_rejected() {
        let mut wizard = Wizard::new();

        let outcome = wizard.next();

        assert_eq!(outcome, NextOutcome::Invalid(ValidationError::CategoryRequired));
        assert_eq!(wizard.step(), WizardStep::Category);
        assert_eq!(
            wizard.error(),
            Some(&WizardError::Validation(ValidationError::CategoryRequired))
        );
    }

    #[test]
    fn test_demographics_need_both_fields() {
        let mut wizard = Wizard::new();
        wizard.set_category(Category::Snacks);
        wizard.next();
        wizard.set_region(Region::AsiaPacific);

        assert_eq!(
            wizard.next(),
            NextOutcome::Invalid(ValidationError::DemographicsRequired)
        );
        assert_eq!(wizard.step(), WizardStep::Demographics);
    }

    #[test]
    fn test_flavors_need_one_selection() {
        let mut wizard = wizard_at_flavors();
        assert_eq!(
            wizard.next(),
            NextOutcome::Invalid(ValidationError::FlavorsRequired)
        );
        assert!(!wizard.is_fetching());
    }

    #[test]
    fn test_valid_flavors_request_fetch_without_advancing() {
        let mut wizard = wizard_at_flavors();
        wizard.toggle_flavor(Flavor::Sweet);

        let NextOutcome::FetchSuggestions(form) = wizard.next() else {
            panic!("expected a fetch request");
        };

        assert_eq!(form.category, Some(Category::Beverages));
        assert_eq!(wizard.step(), WizardStep::Flavors);
        assert!(wizard.is_fetching());
        assert_eq!(wizard.next(), NextOutcome::Busy);
    }

    #[test]
    fn test_failed_fetch_keeps_step_and_form() {
        let mut wizard = wizard_at_flavors();
        wizard.toggle_flavor(Flavor::Sweet);
        wizard.next();
        let form_before = wizard.form().clone();

        assert!(wizard.suggestions_failed("Failed to fetch AI suggestions."));

        assert_eq!(wizard.step(), WizardStep::Flavors);
        assert_eq!(wizard.form(), &form_before);
        assert_eq!(
            wizard.error(),
            Some(&WizardError::Suggestions(
                "Failed to fetch AI suggestions.".to_string()
            ))
        );
        assert!(!wizard.is_fetching());
    }

    #[test]
    fn test_retry_after_failure_is_manual() {
        let mut wizard = wizard_at_flavors();
        wizard.toggle_flavor(Flavor::Umami);
        wizard.next();
        wizard.suggestions_failed("boom");

        assert!(matches!(wizard.next(), NextOutcome::FetchSuggestions(_)));
        assert!(wizard.error().is_none());
    }

    #[test]
    fn test_loaded_suggestions_advance() {
        let wizard = wizard_with_suggestions();
        assert_eq!(wizard.step(), WizardStep::Suggestions);
        assert_eq!(wizard.suggestions().len(), 2);
        assert!(wizard.selected().is_none());
        assert!(!wizard.can_create());
    }

    #[test]
    fn test_result_after_previous_is_discarded() {
        let mut wizard = wizard_at_flavors();
        wizard.toggle_flavor(Flavor::Sweet);
        wizard.next();
        wizard.previous();

        assert!(!wizard.suggestions_loaded(vec![AiSuggestion::new("Late", 10, "")]));
        assert_eq!(wizard.step(), WizardStep::Demographics);
        assert!(wizard.suggestions().is_empty());
    }

    #[test]
    fn test_cancelled_fetch_keeps_step() {
        let mut wizard = wizard_at_flavors();
        wizard.toggle_flavor(Flavor::Herbal);
        wizard.next();

        assert!(wizard.cancel_fetch());
        assert!(!wizard.cancel_fetch());
        assert!(!wizard.suggestions_failed("late failure"));
        assert_eq!(wizard.step(), WizardStep::Flavors);
        assert!(wizard.error().is_none());
        let form = wizard.form().clone();
        assert_eq!(wizard.next(), NextOutcome::FetchSuggestions(form));
    }

    #[test]
    fn test_form_is_frozen_while_suggestions_pending() {
        let mut wizard = wizard_at_flavors();
        wizard.toggle_flavor(Flavor::Sweet);
        let NextOutcome::FetchSuggestions(sent) = wizard.next() else {
            panic!("expected a fetch request");
        };

        assert_eq!(wizard.toggle_flavor(Flavor::Sweet), None);
        assert_eq!(wizard.toggle_flavor(Flavor::Spicy), None);
        assert!(!wizard.set_category(Category::Snacks));
        assert!(!wizard.set_age_group(AgeGroup::From36To45));
        assert!(!wizard.set_region(Region::NorthAmerica));
        assert_eq!(wizard.select(0), SelectOutcome::Busy);
        assert_eq!(wizard.form(), &sent);

        assert!(wizard.suggestions_loaded(vec![AiSuggestion::new("Tropical Fizz", 90, "")]));
        assert_eq!(wizard.form(), &sent);
        assert_eq!(wizard.select(0), SelectOutcome::Selected);
        let product = wizard
            .create(ProductId::new("7"), today())
            .expect("selection present");
        assert_eq!(product.category(), Category::Beverages);
    }

    #[test]
    fn test_form_edits_resume_after_failed_fetch() {
        let mut wizard = wizard_at_flavors();
        wizard.toggle_flavor(Flavor::Sweet);
        wizard.next();
        wizard.suggestions_failed("boom");

        assert_eq!(wizard.toggle_flavor(Flavor::Sweet), Some(false));
        assert!(wizard.form().flavors.is_empty());
    }

    #[test]
    fn test_previous_floors_at_first_step_and_clears_errors() {
        let mut wizard = Wizard::new();
        wizard.next();
        assert!(wizard.error().is_some());

        assert_eq!(wizard.previous(), WizardStep::Category);
        assert!(wizard.error().is_none());
    }

    #[test]
    fn test_select_is_idempotent() {
        let mut wizard = wizard_with_suggestions();
        assert_eq!(wizard.select(0), SelectOutcome::Selected);
        assert_eq!(wizard.select(0), SelectOutcome::Unchanged);
        assert_eq!(wizard.select(1), SelectOutcome::Selected);
        assert_eq!(wizard.selected().map(|s| s.name.as_str()), Some("Berry Bliss"));
        assert_eq!(wizard.select(9), SelectOutcome::OutOfRange);
        assert_eq!(wizard.selected_index(), Some(1));
    }

    #[test]
    fn test_create_without_selection_is_rejected() {
        let mut wizard = wizard_with_suggestions();

        let result = wizard.create(ProductId::new("1"), today());

        assert_eq!(result, Err(CreateError::NoSelection));
        assert_eq!(wizard.step(), WizardStep::Suggestions);
        assert_eq!(wizard.suggestions().len(), 2);
    }

    #[test]
    fn test_create_on_wrong_step_is_rejected() {
        let mut wizard = Wizard::new();
        assert_eq!(
            wizard.create(ProductId::new("1"), today()),
            Err(CreateError::WrongStep(WizardStep::Category))
        );
    }

    #[test]
    fn test_create_builds_testing_product_and_resets() {
        let mut wizard = wizard_with_suggestions();
        wizard.select(0);

        let product = wizard
            .create(ProductId::new("42"), today())
            .expect("selection present");

        assert_eq!(product.name(), "Tropical Fizz");
        assert_eq!(product.category(), Category::Beverages);
        assert_eq!(product.score(), 90);
        assert_eq!(product.status(), ProductStatus::Testing);
        assert_eq!(product.created(), today());

        assert_eq!(wizard.step(), WizardStep::Category);
        assert!(wizard.form().is_empty());
        assert!(wizard.suggestions().is_empty());
        assert!(wizard.selected().is_none());
    }

    #[test]
    fn test_step_numbers() {
        let numbers: Vec<u8> = WizardStep::ALL.iter().map(|s| s.number()).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
    }
}
