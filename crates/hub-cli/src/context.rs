use std::sync::Arc;

use anyhow::Context;
use hub_api::ApiClient;
use hub_auth::{FileStore, KeyringStore, SessionStore, SystemStore};
use hub_config::{HubConfig, StoreBackend, StoreConfig};
use hub_core::User;
use hub_session::{Restore, SessionError, SessionManager, TechInventoryManager, View};

use crate::cli::GlobalFlags;
use crate::notify::TerminalNotifier;
use crate::progress::Progress;
use crate::views;

/// Shared application resources built once per invocation.
pub struct AppContext {
    pub config: HubConfig,
    pub store: SessionStore,
    pub session: SessionManager<ApiClient>,
}

/// An authenticated session together with its technology list.
pub struct Authenticated {
    pub user: User,
    pub inventory: TechInventoryManager<ApiClient>,
}

impl AppContext {
    pub fn init(config: HubConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let store = build_store(&config.store)?;
        let api = ApiClient::new(&config.api).context("failed to build TechHub API client")?;
        tracing::debug!(base_url = api.base_url(), "api client ready");

        let session = SessionManager::new(
            Arc::new(api),
            store.clone(),
            Arc::new(TerminalNotifier::new(flags.quiet)),
        );

        Ok(Self {
            config,
            store,
            session,
        })
    }

    /// Restore the persisted session and seed the technology list from it.
    ///
    /// Without a usable session the landing view is rendered and the command
    /// fails with "not authenticated".
    pub async fn authenticate(&self, flags: &GlobalFlags) -> anyhow::Result<Authenticated> {
        let spinner = Progress::spinner("Restoring session");
        let restore = self.session.restore().await;
        spinner.finish_clear();

        let authenticated = self.session.is_authenticated();
        if let Some(view) = redirect_after_restore(&restore, authenticated) {
            self.navigate(view, restore_notice(&restore).as_deref(), flags)?;
        }

        if let Restore::LoggedOut { message, .. } = &restore {
            return Err(anyhow::Error::new(SessionError::NotAuthenticated)
                .context(format!("stored session could not be verified: {message}")));
        }

        let inventory = TechInventoryManager::new(&self.session)?;
        let user = self.session.user().ok_or(SessionError::NotAuthenticated)?;
        Ok(Authenticated { user, inventory })
    }

    /// Render the view an operation asked for.
    pub fn navigate(
        &self,
        view: View,
        notice: Option<&str>,
        flags: &GlobalFlags,
    ) -> anyhow::Result<()> {
        match (view, self.session.user()) {
            (View::Dashboard, Some(user)) => views::show_dashboard(&user, &user.techs, flags),
            (View::Dashboard, None) | (View::Landing, _) => views::show_landing(notice, flags),
        }
    }
}

/// Where to go once restore has run.
///
/// The session layer asks for the landing view when it drops a stored session;
/// a command that needs a session goes there too when none was stored.
fn redirect_after_restore(restore: &Restore, authenticated: bool) -> Option<View> {
    restore
        .requested_view()
        .or_else(|| (!authenticated).then_some(View::Landing))
}

fn restore_notice(restore: &Restore) -> Option<String> {
    match restore {
        Restore::LoggedOut { rejected: true, .. } => {
            Some(String::from("Your session has expired. Log in again."))
        }
        Restore::LoggedOut { message, .. } => {
            Some(format!("Could not verify your session: {message}"))
        }
        Restore::NoToken | Restore::Restored(_) | Restore::AlreadyInitialized => None,
    }
}

fn build_store(config: &StoreConfig) -> anyhow::Result<SessionStore> {
    let file = || -> anyhow::Result<FileStore> {
        match config.resolved_dir() {
            Some(dir) => Ok(FileStore::new(dir)),
            None => FileStore::in_home().context("no directory for the credentials file"),
        }
    };

    let store = match config.backend {
        StoreBackend::Auto => SessionStore::new(SystemStore::new(KeyringStore::new(), file()?)),
        StoreBackend::Keyring => SessionStore::new(KeyringStore::new()),
        StoreBackend::File => SessionStore::new(file()?),
    };
    tracing::debug!(backend = ?config.backend, "session store ready");
    Ok(store)
}
