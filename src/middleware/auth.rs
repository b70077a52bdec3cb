//! API key authentication gate.
//!
//! [`AuthGate::wrap`] turns a handler that needs an authenticated [`User`]
//! into a plain axum handler:
//! 1. Extract the API key from the `Authorization` header
//! 2. Resolve it to a user through a [`UserResolver`]
//! 3. Call the wrapped handler with the request and the user
//!
//! A failed step answers with an [`AppError`] and the wrapped handler is
//! never called.

use std::{future::Future, pin::Pin, sync::Arc};

use axum::{
    extract::Request,
    http::HeaderMap,
    response::{IntoResponse, Response},
};

use crate::{
    error::AppError,
    middleware::api_key::{self, ApiKeyError},
    models::user::User,
    services::user_service::UserResolver,
};

/// Reads the API key out of request headers.
pub type KeyExtractor = fn(&HeaderMap) -> Result<String, ApiKeyError>;

/// Future returned by handlers produced with [`AuthGate::wrap`].
pub type GatedFuture = Pin<Box<dyn Future<Output = Response> + Send>>;

/// Authentication gate with explicitly injected collaborators.
///
/// Cloning is cheap and shares the resolver. The gate keeps no per-request
/// state, so one gate may wrap any number of handlers.
pub struct AuthGate<R> {
    extract: KeyExtractor,
    resolver: Arc<R>,
}

impl<R> Clone for AuthGate<R> {
    fn clone(&self) -> Self {
        Self {
            extract: self.extract,
            resolver: Arc::clone(&self.resolver),
        }
    }
}

impl<R: UserResolver> AuthGate<R> {
    /// Gate reading `Authorization: ApiKey <key>`.
    pub fn new(resolver: R) -> Self {
        Self::with_extractor(api_key::get_api_key, resolver)
    }

    pub fn with_extractor(extract: KeyExtractor, resolver: R) -> Self {
        Self {
            extract,
            resolver: Arc::new(resolver),
        }
    }

    /// Step one: read the API key from the headers.
    pub fn extract_key(&self, headers: &HeaderMap) -> Result<String, AppError> {
        (self.extract)(headers).map_err(|err| {
            tracing::warn!(error = %err, "rejecting request without usable api key");
            AppError::AuthRequired(err)
        })
    }

    /// Step two: resolve the API key to its user.
    ///
    /// Any resolver failure, not only a missing user, becomes `UserNotFound`.
    pub async fn resolve(&self, api_key: &str) -> Result<User, AppError> {
        let user = self
            .resolver
            .user_by_api_key(api_key)
            .await
            .map_err(|err| {
                tracing::warn!(error = %err, "rejecting request with unresolved api key");
                AppError::UserNotFound(err)
            })?;

        tracing::debug!(user_id = %user.id, "request authenticated");
        Ok(user)
    }

    /// Wrap a handler that requires an authenticated user.
    ///
    /// The result is registrable directly on a router, e.g.
    /// `get(gate.wrap(handlers::users::get_user))`.
    pub fn wrap<H, Fut, Res>(
        &self,
        handler: H,
    ) -> impl FnOnce(Request) -> GatedFuture + Clone + Send + Sync + use<R, H, Fut, Res>
    where
        H: FnOnce(Request, User) -> Fut + Clone + Send + Sync + 'static,
        Fut: Future<Output = Res> + Send + 'static,
        Res: IntoResponse + 'static,
    {
        let gate = self.clone();

        move |request: Request| -> GatedFuture {
            Box::pin(async move {
                // The body is not Sync, so no borrow of the request may live across an await.
                let api_key = match gate.extract_key(request.headers()) {
                    Ok(api_key) => api_key,
                    Err(err) => return err.into_response(),
                };

                match gate.resolve(&api_key).await {
                    Ok(user) => handler(request, user).await.into_response(),
                    Err(err) => err.into_response(),
                }
            })
        }
    }
}
