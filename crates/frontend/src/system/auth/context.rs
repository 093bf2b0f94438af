use std::sync::Arc;

use arcus_core::system::auth::{AuthError, CredentialStore, Session, SessionUser};
use leptos::prelude::*;

use super::{api, storage};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user: Option<SessionUser>,
}

impl AuthState {
    fn from_session(session: Session) -> Self {
        Self {
            access_token: Some(session.token),
            user: Some(session.user),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some() && self.user.is_some()
    }
}

/// Auth context provider component
///
/// The persisted session is read before the first render, so a page reload
/// never flashes the login screen for a signed-in user.
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let restored = storage::session_manager()
        .restore()
        .map(AuthState::from_session)
        .unwrap_or_default();
    let (auth_state, set_auth_state) = signal(restored);

    provide_context(auth_state);
    provide_context(set_auth_state);
    // Built once: `demo()` hashes every account.
    provide_context(Arc::new(CredentialStore::demo()));

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Accounts a login is checked against.
pub fn use_credentials() -> Arc<CredentialStore> {
    use_context::<Arc<CredentialStore>>().expect("AuthProvider not found in component tree")
}

/// Signed-in user, `None` on the login screen.
pub fn use_current_user() -> Signal<Option<SessionUser>> {
    let (auth_state, _) = use_auth();
    Signal::derive(move || auth_state.get().user)
}

/// Helper: Perform login
///
/// A session that cannot be persisted still signs the user in; it just will
/// not survive a reload.
pub async fn do_login(
    set_auth_state: WriteSignal<AuthState>,
    credentials: Arc<CredentialStore>,
    email: String,
    password: String,
    delay_ms: u32,
) -> Result<SessionUser, AuthError> {
    let session = match api::login(&credentials, email.clone(), password, delay_ms).await {
        Ok(session) => session,
        Err(e) => {
            log::warn!("login rejected for {}", email);
            return Err(e);
        }
    };

    if let Err(e) = storage::session_manager().persist(&session) {
        log::warn!("session not persisted: {}", e);
    }

    let user = session.user.clone();
    log::info!("user {} signed in", user.id);
    set_auth_state.set(AuthState::from_session(session));
    Ok(user)
}

/// Helper: Perform logout
pub fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    storage::session_manager().clear();
    set_auth_state.set(AuthState::default());
    log::info!("user signed out");
}
