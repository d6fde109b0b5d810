//! Main authentication service implementation

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::session::SessionUpdate;
use crate::domain::entities::token::AccessClaims;
use crate::domain::entities::user::{AuthProvider, SocialProfile, User};
use crate::domain::value_objects::{LoginResponse, RefreshResponse};
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::{SessionRepository, UserRepository};
use crate::services::token::TokenIssuer;

use super::stage::RefreshStage;
use super::traits::LoginValidator;

/// Authentication service for the session-bound token lifecycle
///
/// Holds no session state of its own. Every decision about whether a
/// refresh token is still live is made against the session repository.
pub struct AuthenticationService<U, S, V>
where
    U: UserRepository,
    S: SessionRepository,
    V: LoginValidator,
{
    /// User directory, read on login and on every refresh
    user_repository: Arc<U>,
    /// Session registry holding the live rotation hash
    session_repository: Arc<S>,
    /// External credential check
    login_validator: Arc<V>,
    /// Token signing and hash generation
    token_issuer: Arc<TokenIssuer>,
}

impl<U, S, V> AuthenticationService<U, S, V>
where
    U: UserRepository,
    S: SessionRepository,
    V: LoginValidator,
{
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `user_repository` - Lookup of users and their current role
    /// * `session_repository` - Durable session storage
    /// * `login_validator` - Credential and social profile validation
    /// * `token_issuer` - Token pair issuing and verification
    pub fn new(
        user_repository: Arc<U>,
        session_repository: Arc<S>,
        login_validator: Arc<V>,
        token_issuer: Arc<TokenIssuer>,
    ) -> Self {
        Self {
            user_repository,
            session_repository,
            login_validator,
            token_issuer,
        }
    }

    /// Validate email credentials and log the user in
    ///
    /// # Returns
    ///
    /// * `Ok(LoginResponse)` - Tokens for a new session plus the user
    /// * `Err(DomainError)` - Credentials rejected, no role, or storage failure
    pub async fn validate_login(&self, email: &str, password: &str) -> DomainResult<LoginResponse> {
        let user = self
            .login_validator
            .validate_email_login(email, password)
            .await
            .map_err(|e| {
                tracing::info!(provider = %AuthProvider::Email, "Login rejected by validator");
                e
            })?;

        self.login(user).await
    }

    /// Validate a social profile and log the user in
    ///
    /// `provider` must be a social provider; `AuthProvider::Email` is a
    /// validation error.
    pub async fn validate_social_login(
        &self,
        provider: AuthProvider,
        profile: &SocialProfile,
    ) -> DomainResult<LoginResponse> {
        if !provider.is_social() {
            return Err(DomainError::Validation {
                message: format!("{} is not a social login provider", provider),
            });
        }

        let user = self
            .login_validator
            .validate_social_login(provider, profile)
            .await
            .map_err(|e| {
                tracing::info!(provider = %provider, "Social login rejected by validator");
                e
            })?;

        self.login(user).await
    }

    /// Start a new session for an already authenticated user
    ///
    /// The session row is created before signing because the access and
    /// refresh claims embed its id. The hash returned by the issuer is then
    /// written to the row. If signing or that write fails the row is deleted
    /// again.
    ///
    /// # Returns
    ///
    /// * `Ok(LoginResponse)` - Token pair for the new session plus the user
    /// * `Err(DomainError::Auth(AuthError::RoleMissing))` - User has no role; no session is created
    /// * `Err(DomainError)` - Signing or storage failure
    pub async fn login(&self, user: User) -> DomainResult<LoginResponse> {
        let role = user.role.ok_or_else(|| {
            tracing::warn!(user_id = %user.id, "Login refused: user has no role");
            DomainError::Auth(AuthError::RoleMissing)
        })?;

        let session = self.session_repository.create(user.id).await?;

        let issued = match self.token_issuer.issue(user.id, role, session.id) {
            Ok(issued) => issued,
            Err(e) => {
                self.discard_session(session.id).await;
                return Err(e);
            }
        };

        match self
            .session_repository
            .update(session.id, SessionUpdate::hash(issued.hash.clone()))
            .await
        {
            Ok(true) => {}
            Ok(false) => {
                tracing::warn!(
                    user_id = %user.id,
                    session_id = %session.id,
                    "Session disappeared before its hash was stored"
                );
                self.discard_session(session.id).await;
                return Err(DomainError::Auth(AuthError::SessionNotFound));
            }
            Err(e) => {
                self.discard_session(session.id).await;
                return Err(e);
            }
        }

        tracing::info!(
            user_id = %user.id,
            session_id = %session.id,
            provider = %user.provider,
            "User logged in"
        );

        Ok(LoginResponse::new(issued, user))
    }

    /// Rotate a session's refresh token
    ///
    /// The presented hash must equal the one stored on the session. The
    /// user's role is read again so the new access token reflects it. The
    /// new hash is stored with a compare-and-swap against the presented
    /// one, so of two concurrent refreshes with the same hash only one wins.
    ///
    /// # Returns
    ///
    /// * `Ok(RefreshResponse)` - New token pair, no user payload
    /// * `Err(DomainError::Auth(_))` - Session missing, hash stale, user or
    ///   role missing, or lost a concurrent rotation
    /// * `Err(DomainError)` - Signing or storage failure
    ///
    /// # Example
    ///
    /// ```no_run
    /// use kt_core::repositories::{SessionRepository, UserRepository};
    /// use kt_core::services::{AuthenticationService, LoginValidator};
    /// use uuid::Uuid;
    ///
    /// async fn rotate<U, S, V>(service: &AuthenticationService<U, S, V>, session_id: Uuid, hash: &str)
    /// where
    ///     U: UserRepository,
    ///     S: SessionRepository,
    ///     V: LoginValidator,
    /// {
    ///     match service.refresh(session_id, hash).await {
    ///         Ok(response) => println!("New access token expires at {}", response.token_expires_at_ms),
    ///         Err(e) if e.is_unauthorized() => eprintln!("Login again: {}", e),
    ///         Err(e) => eprintln!("Refresh failed: {}", e),
    ///     }
    /// }
    /// ```
    pub async fn refresh(&self, session_id: Uuid, presented_hash: &str) -> DomainResult<RefreshResponse> {
        tracing::debug!(session_id = %session_id, stage = %RefreshStage::Received, "Refresh requested");

        // Step 1: Session lookup
        let mut stage = RefreshStage::SessionLookup;
        let session = match self.session_repository.find_by_id(session_id).await? {
            Some(session) => session,
            None => return Err(reject(stage, session_id, AuthError::SessionNotFound)),
        };

        // Step 2: Anti-replay check against the stored hash
        stage = RefreshStage::HashCheck;
        if !session.matches_hash(presented_hash) {
            return Err(reject(stage, session_id, AuthError::SessionHashMismatch));
        }

        // Step 3: Current role
        stage = RefreshStage::RoleLookup;
        let user = match self.user_repository.find_by_id(session.user_id).await? {
            Some(user) => user,
            None => return Err(reject(stage, session_id, AuthError::UserNotFound)),
        };
        let role = match user.role {
            Some(role) => role,
            None => return Err(reject(stage, session_id, AuthError::RoleMissing)),
        };

        // Step 4: Reissue and rotate
        stage = RefreshStage::Reissue;
        let issued = self.token_issuer.issue(session.user_id, role, session.id)?;

        let rotated = self
            .session_repository
            .rotate_hash(session.id, presented_hash, &issued.hash)
            .await?;
        if !rotated {
            return Err(reject(stage, session_id, AuthError::SessionRotationConflict));
        }

        stage = RefreshStage::Done;
        tracing::info!(
            user_id = %session.user_id,
            session_id = %session_id,
            role = %role,
            stage = %stage,
            "Session refreshed"
        );

        Ok(RefreshResponse::from(issued))
    }

    /// Refresh using the raw refresh token
    ///
    /// Verifies signature and expiry under the refresh secret, then runs
    /// [`refresh`](Self::refresh) with the session id and hash it carries.
    pub async fn refresh_with_token(&self, refresh_token: &str) -> DomainResult<RefreshResponse> {
        let claims = self.token_issuer.verify_refresh_token(refresh_token)?;
        self.refresh(claims.session_id, &claims.hash).await
    }

    /// Verify an access token for request authentication
    ///
    /// Signature and expiry only. A logged-out session's access token stays
    /// valid until it expires.
    pub fn verify_access_token(&self, access_token: &str) -> DomainResult<AccessClaims> {
        self.token_issuer.verify_access_token(access_token)
    }

    /// Logout a single session
    ///
    /// Idempotent: an unknown session is not an error.
    pub async fn logout(&self, session_id: Uuid) -> DomainResult<()> {
        let deleted = self.session_repository.delete_by_id(session_id).await?;
        tracing::info!(session_id = %session_id, deleted, "Session logged out");
        Ok(())
    }

    /// Logout every session of a user
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - Number of sessions removed
    pub async fn logout_all(&self, user_id: Uuid) -> DomainResult<usize> {
        let deleted = self.session_repository.delete_by_user_id(user_id).await?;
        tracing::info!(user_id = %user_id, deleted, "All sessions logged out");
        Ok(deleted)
    }

    /// Remove a session whose login could not complete
    async fn discard_session(&self, session_id: Uuid) {
        if let Err(e) = self.session_repository.delete_by_id(session_id).await {
            tracing::error!(
                session_id = %session_id,
                error = %e,
                "Failed to remove session after issuing failed"
            );
        }
    }
}

fn reject(stage: RefreshStage, session_id: Uuid, error: AuthError) -> DomainError {
    tracing::warn!(
        stage = %stage,
        session_id = %session_id,
        reason = %error,
        "Refresh rejected"
    );
    DomainError::Auth(error)
}
