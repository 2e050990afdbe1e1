//! The session controller: owns the auth state machine.
//!
//! Every screen, command or task that cares whether the user is signed in
//! talks to one [`SessionController`]. It is responsible for:
//! - Deciding the initial state from the stored token ([`bootstrap`](SessionController::bootstrap))
//! - Logging in, registering and logging out
//! - Keeping the token store in step with the state
//! - Publishing every change to observers as one atomic snapshot
//!
//! # Concurrency note
//!
//! Transitions are serialized by an async mutex. A logout issued while a
//! login is still waiting on the network runs after that login finishes,
//! so the final state is always the result of the last transition issued.
//! Plain API calls made through [`client`](SessionController::client)
//! never take this lock.
//!
//! Once a transition holds the lock it runs on its own task. Dropping the
//! future returned by `login` (a timeout, a closed view) only discards the
//! result: the transition still finishes, so the store and the published
//! state never disagree.

use std::future::Future;
use std::sync::Arc;

use gameshelf_client::{ApiClient, ApiError};
use gameshelf_protocol::UserProfile;
use gameshelf_store::KeyValueStore;
use gameshelf_transport::Transport;
use tokio::sync::{Mutex, watch};

use crate::auth::{LOGIN_FAILED_MESSAGE, REGISTRATION_FAILED_MESSAGE, failure_message};
use crate::{AccessToken, AuthSnapshot, SessionError, SessionState};

/// Owns the session state and the client it authorizes.
///
/// ## Lifecycle
///
/// ```text
/// bootstrap() ──→ [Authenticated] ──logout()──→ [Unauthenticated]
///      │                ↑                            │
///      ▼                └──────── login() ───────────┘
/// [Unauthenticated]                  register() = create account + login()
/// ```
///
/// Cloning is cheap and every clone drives the same session. Transitions
/// need a tokio runtime.
pub struct SessionController<T: Transport, S: KeyValueStore> {
    inner: Arc<Inner<T, S>>,
}

impl<T: Transport, S: KeyValueStore> Clone for SessionController<T, S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

struct Inner<T: Transport, S: KeyValueStore> {
    client: ApiClient<T, S>,

    /// The current snapshot. Replaced whole on every transition.
    state: watch::Sender<AuthSnapshot>,

    /// Held for the duration of a transition, including after its caller
    /// has gone away.
    transitions: Arc<Mutex<()>>,
}

impl<T: Transport, S: KeyValueStore> SessionController<T, S> {
    /// Creates a controller in the [`Unknown`](SessionState::Unknown)
    /// state. Call [`bootstrap`](Self::bootstrap) next.
    pub fn new(client: ApiClient<T, S>) -> Self {
        Self {
            inner: Arc::new(Inner {
                client,
                state: watch::Sender::new(AuthSnapshot::default()),
                transitions: Arc::new(Mutex::new(())),
            }),
        }
    }

    /// The API client. Its requests carry whatever token the store holds
    /// at the moment each one is sent.
    pub fn client(&self) -> &ApiClient<T, S> {
        &self.inner.client
    }

    /// The current snapshot.
    pub fn snapshot(&self) -> AuthSnapshot {
        self.inner.state.borrow().clone()
    }

    /// A receiver that sees every snapshot published from now on.
    pub fn subscribe(&self) -> watch::Receiver<AuthSnapshot> {
        self.inner.state.subscribe()
    }

    // -- Transitions -------------------------------------------------------

    /// Decides the initial state from the stored token.
    ///
    /// - no token → signed out
    /// - token the service accepts → [`Authenticated`](SessionState::Authenticated)
    /// - token the service rejects, or no answer at all → the token is
    ///   removed and the user is signed out, without an error message
    ///
    /// Safe to run more than once; with the same stored token and the same
    /// service answer it lands in the same state every time.
    pub async fn bootstrap(&self) -> AuthSnapshot {
        self.run(|inner| async move { inner.bootstrap().await })
            .await
            .unwrap_or_else(|| self.snapshot())
    }

    /// Signs in with email and password.
    ///
    /// On success the new token is stored and the profile fetched with
    /// it. On failure any stored token is removed and the published state
    /// carries the message also returned in the error.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), SessionError> {
        let (email, password) = (email.to_owned(), password.to_owned());
        self.run(move |inner| async move { inner.login(&email, &password).await })
            .await
            .unwrap_or_else(|| Err(SessionError::LoginFailed(LOGIN_FAILED_MESSAGE.into())))
    }

    /// Creates an account, then signs in with the same credentials.
    ///
    /// If the account can't be created no login is attempted. If it is
    /// created but the login fails, the result is the login's failure.
    pub async fn register(&self, email: &str, password: &str) -> Result<(), SessionError> {
        let (email, password) = (email.to_owned(), password.to_owned());
        self.run(move |inner| async move { inner.register(&email, &password).await })
            .await
            .unwrap_or_else(|| {
                Err(SessionError::RegistrationFailed(
                    REGISTRATION_FAILED_MESSAGE.into(),
                ))
            })
    }

    /// Signs out.
    ///
    /// Always ends signed out. If the stored token can't be removed the
    /// failure is logged and only costs the next restart: that bootstrap
    /// will find the token and try it.
    pub async fn logout(&self) {
        self.run(|inner| async move { inner.logout().await }).await;
    }

    /// Drops the last login/registration error without changing whether
    /// the user is signed in.
    pub fn clear_error(&self) {
        self.inner
            .state
            .send_if_modified(|snapshot| match &mut snapshot.state {
                SessionState::Unauthenticated { error } if error.is_some() => {
                    *error = None;
                    true
                }
                _ => false,
            });
    }

    /// Waits for the transition lock, then runs `transition` to completion
    /// on its own task.
    ///
    /// The lock is taken here, before spawning, so transitions run in the
    /// order they were issued. `None` means the runtime shut down under
    /// the task.
    async fn run<R, F, Fut>(&self, transition: F) -> Option<R>
    where
        F: FnOnce(Arc<Inner<T, S>>) -> Fut,
        Fut: Future<Output = R> + Send + 'static,
        R: Send + 'static,
    {
        let guard = Arc::clone(&self.inner.transitions).lock_owned().await;
        let work = transition(Arc::clone(&self.inner));

        let task = tokio::spawn(async move {
            let result = work.await;
            drop(guard);
            result
        });

        match task.await {
            Ok(result) => Some(result),
            Err(e) if e.is_panic() => std::panic::resume_unwind(e.into_panic()),
            Err(e) => {
                tracing::warn!(error = %e, "session transition cancelled");
                None
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Transition bodies. Callers hold the transition lock.
// ---------------------------------------------------------------------------

impl<T: Transport, S: KeyValueStore> Inner<T, S> {
    async fn bootstrap(&self) -> AuthSnapshot {
        self.publish(AuthSnapshot {
            state: SessionState::Unknown,
            loading: true,
        });

        let Some(token) = self.client.token_store().token().await else {
            tracing::info!("no stored session token");
            return self.settle(SessionState::signed_out());
        };

        match self.client.me_with_token(&token).await {
            Ok(profile) => {
                tracing::info!(user_id = %profile.id, "restored stored session");
                self.settle(authenticated(token, profile))
            }
            Err(e) => {
                tracing::warn!(error = %e, "stored session token rejected, discarding");
                self.forget_token().await;
                self.settle(SessionState::signed_out())
            }
        }
    }

    async fn login(&self, email: &str, password: &str) -> Result<(), SessionError> {
        self.begin();

        let issued = match self.client.login(email, password).await {
            Ok(issued) => issued,
            Err(e) => return Err(self.login_failed(&e).await),
        };

        if !self
            .client
            .token_store()
            .save_token(&issued.access_token)
            .await
        {
            tracing::warn!("session token not persisted; it won't survive a restart");
        }

        // The fresh token goes in explicitly so this doesn't depend on the
        // write above having landed.
        match self.client.me_with_token(&issued.access_token).await {
            Ok(profile) => {
                tracing::info!(user_id = %profile.id, "signed in");
                self.settle(authenticated(issued.access_token, profile));
                Ok(())
            }
            Err(e) => Err(self.login_failed(&e).await),
        }
    }

    async fn register(&self, email: &str, password: &str) -> Result<(), SessionError> {
        self.begin();

        match self.client.register(email, password).await {
            Ok(profile) => {
                tracing::info!(user_id = %profile.id, "account created");
            }
            Err(e) => {
                let message = failure_message(&e, REGISTRATION_FAILED_MESSAGE);
                tracing::warn!(error = %e, "registration failed");
                self.forget_token().await;
                self.settle(SessionState::Unauthenticated {
                    error: Some(message.clone()),
                });
                return Err(SessionError::RegistrationFailed(message));
            }
        }

        self.login(email, password).await
    }

    async fn logout(&self) {
        self.forget_token().await;
        self.settle(SessionState::signed_out());
        tracing::info!("signed out");
    }

    /// Signs out with `err`'s message. Whatever token the store held,
    /// old session or freshly issued, goes with it.
    async fn login_failed(&self, err: &ApiError) -> SessionError {
        let message = failure_message(err, LOGIN_FAILED_MESSAGE);
        tracing::warn!(error = %err, "login failed");
        self.forget_token().await;
        self.settle(SessionState::Unauthenticated {
            error: Some(message.clone()),
        });
        SessionError::LoginFailed(message)
    }

    /// Marks a transition in flight and clears any stale error.
    fn begin(&self) {
        self.state.send_modify(|snapshot| {
            snapshot.loading = true;
            if let SessionState::Unauthenticated { error } = &mut snapshot.state {
                *error = None;
            }
        });
    }

    async fn forget_token(&self) {
        if !self.client.token_store().clear_token().await {
            tracing::warn!("stored session token could not be removed");
        }
    }

    fn settle(&self, state: SessionState) -> AuthSnapshot {
        let snapshot = AuthSnapshot::settled(state);
        self.publish(snapshot.clone());
        snapshot
    }

    fn publish(&self, snapshot: AuthSnapshot) {
        // send_replace never fails, with or without receivers.
        self.state.send_replace(snapshot);
    }
}

fn authenticated(token: String, profile: UserProfile) -> SessionState {
    SessionState::Authenticated {
        token: AccessToken::new(token),
        profile,
    }
}
