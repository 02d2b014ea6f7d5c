use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use hub_api::TechHubApi;
use hub_core::{AddTechForm, EditTechForm, Tech};

use crate::error::SessionError;
use crate::outcome::Outcome;
use crate::session::SessionManager;

#[derive(Debug, Default)]
struct InventoryState {
    techs: Vec<Tech>,
    add_modal_open: bool,
    edit_modal_open: bool,
    selected: Option<Tech>,
}

/// Handle to the current user's technology list and its dialog state.
pub struct TechInventoryManager<A> {
    inner: Arc<Inner<A>>,
}

struct Inner<A> {
    session: SessionManager<A>,
    state: Mutex<InventoryState>,
    torn_down: AtomicBool,
}

impl<A> Clone for TechInventoryManager<A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A: TechHubApi> TechInventoryManager<A> {
    /// Seed the list from the session user's techs.
    ///
    /// The copy is taken once; later profile reloads do not flow into it.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotAuthenticated`] if the session has no user.
    pub fn new(session: &SessionManager<A>) -> Result<Self, SessionError> {
        let user = session.user().ok_or(SessionError::NotAuthenticated)?;
        Ok(Self {
            inner: Arc::new(Inner {
                session: session.clone(),
                state: Mutex::new(InventoryState {
                    techs: user.techs,
                    ..InventoryState::default()
                }),
                torn_down: AtomicBool::new(false),
            }),
        })
    }

    #[must_use]
    pub fn techs(&self) -> Vec<Tech> {
        crate::lock(&self.inner.state).techs.clone()
    }

    #[must_use]
    pub fn is_add_modal_open(&self) -> bool {
        crate::lock(&self.inner.state).add_modal_open
    }

    #[must_use]
    pub fn is_edit_modal_open(&self) -> bool {
        crate::lock(&self.inner.state).edit_modal_open
    }

    #[must_use]
    pub fn selected_tech(&self) -> Option<Tech> {
        crate::lock(&self.inner.state).selected.clone()
    }

    pub fn open_add_modal(&self) {
        crate::lock(&self.inner.state).add_modal_open = true;
    }

    /// Close the add dialog. Also drops any selection.
    pub fn close_add_modal(&self) {
        let mut state = crate::lock(&self.inner.state);
        state.add_modal_open = false;
        state.selected = None;
    }

    /// Select `tech_id` and open the edit dialog for it.
    ///
    /// Returns `false`, leaving state untouched, if the id is not in the list.
    pub fn open_edit_modal(&self, tech_id: &str) -> bool {
        let mut state = crate::lock(&self.inner.state);
        let Some(tech) = state.techs.iter().find(|tech| tech.id == tech_id).cloned() else {
            return false;
        };
        state.selected = Some(tech);
        state.edit_modal_open = true;
        true
    }

    /// Close the edit dialog and drop the selection.
    pub fn close_edit_modal(&self) {
        let mut state = crate::lock(&self.inner.state);
        state.edit_modal_open = false;
        state.selected = None;
    }

    pub fn select_tech(&self, tech: Option<Tech>) {
        crate::lock(&self.inner.state).selected = tech;
    }

    /// Stop mirroring responses into the list.
    ///
    /// Requests still in flight complete, notify, and run cleanup, but no longer
    /// add, edit or remove entries.
    pub fn teardown(&self) {
        self.inner.torn_down.store(true, Ordering::SeqCst);
    }

    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        self.inner.torn_down.load(Ordering::SeqCst)
    }

    /// Create a tech and append the server's record to the end of the list.
    pub async fn add_tech(
        &self,
        form: &AddTechForm,
        mut loading: impl FnMut(bool) + Send,
    ) -> Outcome<Tech> {
        loading(true);
        let outcome = match self.inner.session.token() {
            None => self.reject_unauthenticated(),
            Some(token) => match self.api().create_tech(&token, form).await {
                Ok(tech) => {
                    self.mutate_list(|techs| techs.push(tech.clone()));
                    self.inner.session.notifier().success("Technology added");
                    Outcome::success(tech)
                }
                Err(error) => self.report_failure("add tech", &error),
            },
        };
        loading(false);
        self.close_add_modal();
        outcome
    }

    /// Delete a tech and drop it from the list.
    pub async fn remove_tech(
        &self,
        tech_id: &str,
        mut loading: impl FnMut(bool) + Send,
    ) -> Outcome<()> {
        loading(true);
        let outcome = match self.inner.session.token() {
            None => self.reject_unauthenticated(),
            Some(token) => match self.api().delete_tech(&token, tech_id).await {
                Ok(()) => {
                    self.mutate_list(|techs| techs.retain(|tech| tech.id != tech_id));
                    self.inner.session.notifier().success("Technology removed");
                    Outcome::success(())
                }
                Err(error) => self.report_failure("remove tech", &error),
            },
        };
        self.close_edit_modal();
        loading(false);
        outcome
    }

    /// Change a tech's status.
    ///
    /// The local entry takes the status that was sent; its other fields are
    /// kept. The returned value is the server's record.
    pub async fn edit_tech(
        &self,
        tech_id: &str,
        form: &EditTechForm,
        mut loading: impl FnMut(bool) + Send,
    ) -> Outcome<Tech> {
        loading(true);
        let outcome = match self.inner.session.token() {
            None => self.reject_unauthenticated(),
            Some(token) => match self.api().update_tech(&token, tech_id, form).await {
                Ok(tech) => {
                    let status = form.status;
                    self.mutate_list(|techs| {
                        for entry in techs.iter_mut().filter(|entry| entry.id == tech_id) {
                            entry.status = status;
                        }
                    });
                    self.inner.session.notifier().success("Technology updated");
                    Outcome::success(tech)
                }
                Err(error) => self.report_failure("edit tech", &error),
            },
        };
        self.close_edit_modal();
        loading(false);
        outcome
    }

    fn api(&self) -> &A {
        self.inner.session.api()
    }

    /// Apply `change` to the list as it is now, unless torn down.
    fn mutate_list(&self, change: impl FnOnce(&mut Vec<Tech>)) {
        if self.is_torn_down() {
            tracing::debug!("inventory torn down; dropping list update");
            return;
        }
        change(&mut crate::lock(&self.inner.state).techs);
    }

    fn reject_unauthenticated<T>(&self) -> Outcome<T> {
        let message = SessionError::NotAuthenticated.to_string();
        self.inner.session.notifier().error(&message);
        Outcome::failure(message)
    }

    fn report_failure<T>(&self, operation: &str, error: &hub_api::ApiError) -> Outcome<T> {
        tracing::warn!(%error, operation, "tech request failed");
        let message = error.user_message();
        self.inner.session.notifier().error(&message);
        Outcome::failure(message)
    }
}
