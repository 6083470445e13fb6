//! Delete confirmation flow
//!
//! Two-step destructive action for products and COA documents:
//! `Idle -> ConfirmationShown -> Deleting -> {Succeeded, Failed}`.
//! Each dialog owns its own flow instance and target; there is no shared
//! "pending delete" state between dialogs.

use crate::{ApiClient, ClientResult};

/// What the confirmation dialog is about to delete
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteTarget {
    Product(String),
    /// COA document attached to the given product
    Coa(String),
}

impl DeleteTarget {
    pub fn product_id(&self) -> &str {
        match self {
            DeleteTarget::Product(id) | DeleteTarget::Coa(id) => id,
        }
    }
}

/// Dialog state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteState {
    Idle,
    ConfirmationShown,
    Deleting,
    Succeeded,
    /// Equivalent to `ConfirmationShown` plus an inline error; the user may
    /// confirm again manually.
    Failed { message: String },
}

/// One delete-confirmation dialog
#[derive(Debug)]
pub struct DeleteFlow {
    state: DeleteState,
    target: Option<DeleteTarget>,
}

impl DeleteFlow {
    pub fn new() -> Self {
        Self {
            state: DeleteState::Idle,
            target: None,
        }
    }

    pub fn state(&self) -> &DeleteState {
        &self.state
    }

    pub fn target(&self) -> Option<&DeleteTarget> {
        self.target.as_ref()
    }

    /// Whether the confirm control is clickable
    pub fn confirm_enabled(&self) -> bool {
        matches!(
            self.state,
            DeleteState::ConfirmationShown | DeleteState::Failed { .. }
        )
    }

    /// Delete affordance clicked: capture the target and show the dialog.
    pub fn request(&mut self, target: DeleteTarget) {
        self.target = Some(target);
        self.state = DeleteState::ConfirmationShown;
    }

    /// Dialog dismissed without confirming.
    pub fn cancel(&mut self) {
        if self.confirm_enabled() {
            self.state = DeleteState::Idle;
            self.target = None;
        }
    }

    /// Confirm clicked: disable the control and hand out the target.
    ///
    /// Returns `None` unless the flow is confirmable, so a double click
    /// cannot start a second submission. The transition to `Deleting`
    /// happens here, before any network activity.
    pub fn begin(&mut self) -> Option<DeleteTarget> {
        if !self.confirm_enabled() {
            return None;
        }
        self.state = DeleteState::Deleting;
        self.target.clone()
    }

    /// Record the backend's verdict for the in-flight delete.
    pub fn complete(&mut self, result: Result<(), String>) {
        if self.state != DeleteState::Deleting {
            tracing::warn!(state = ?self.state, "delete completion in unexpected state");
            return;
        }
        self.state = match result {
            Ok(()) => DeleteState::Succeeded,
            Err(message) => DeleteState::Failed { message },
        };
    }

    /// Drive one full confirm: exactly one network call per invocation.
    pub async fn run(&mut self, client: &ApiClient) -> &DeleteState {
        let Some(target) = self.begin() else {
            return &self.state;
        };

        let result: ClientResult<()> = match &target {
            DeleteTarget::Product(id) => client.delete_product(id).await,
            DeleteTarget::Coa(id) => client.delete_coa(id).await,
        };

        match result {
            Ok(()) => self.complete(Ok(())),
            Err(err) => {
                tracing::warn!(target = ?target, error = %err, "delete failed");
                self.complete(Err(err.inline_message()));
            }
        }
        &self.state
    }
}

impl Default for DeleteFlow {
    fn default() -> Self {
        Self::new()
    }
}
