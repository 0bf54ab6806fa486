//! AI suggestion generation for the wizard's third step.

use std::sync::Arc;

use tracing::{info, warn};

use crate::application::services::NotificationManager;
use crate::application::store::AppStore;
use crate::application::wizard::{NextOutcome, Wizard};
use crate::domain::entities::{AiSuggestion, WizardForm};
use crate::domain::errors::ApiError;
use crate::domain::ports::FlavorDataPort;

/// Error recorded and shown when suggestions cannot be fetched.
pub const SUGGESTIONS_FAILED: &str = "Failed to fetch AI suggestions.";

/// Requests AI product concepts for a finished form.
#[derive(Clone)]
pub struct GenerateSuggestionsUseCase {
    data: Arc<dyn FlavorDataPort>,
}

impl GenerateSuggestionsUseCase {
    /// Creates the use case over a data port.
    #[must_use]
    pub const fn new(data: Arc<dyn FlavorDataPort>) -> Self {
        Self { data }
    }

    /// # Errors
    /// Returns the collaborator error unchanged.
    pub async fn execute(&self, form: &WizardForm) -> Result<Vec<AiSuggestion>, ApiError> {
        self.data.fetch_ai_suggestions(form).await
    }

    /// Runs `Next` on the wizard, performing the suggestion fetch inline when
    /// step 3 asks for it. The store's loading flag brackets the request.
    pub async fn advance(
        &self,
        wizard: &mut Wizard,
        store: &mut AppStore,
        notifications: &mut NotificationManager,
    ) -> NextOutcome {
        let outcome = wizard.next();
        if let NextOutcome::FetchSuggestions(form) = &outcome {
            store.set_loading(true);
            let result = self.execute(form).await;
            store.set_loading(false);
            apply_suggestions(wizard, notifications, result);
        }
        outcome
    }
}

/// Feeds a finished suggestion request back into the wizard, raising a
/// notification on failure. Returns true when the wizard accepted the result.
pub fn apply_suggestions(
    wizard: &mut Wizard,
    notifications: &mut NotificationManager,
    result: Result<Vec<AiSuggestion>, ApiError>,
) -> bool {
    match result {
        Ok(suggestions) => {
            let count = suggestions.len();
            let accepted = wizard.suggestions_loaded(suggestions);
            if accepted {
                info!(count, "AI suggestions received");
            }
            accepted
        }
        Err(e) => {
            warn!(error = %e, "AI suggestion request failed");
            let accepted = wizard.suggestions_failed(SUGGESTIONS_FAILED);
            if accepted {
                notifications.error(SUGGESTIONS_FAILED);
            }
            accepted
        }
    }
}
