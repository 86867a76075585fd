//! User wrapper enforcing custom attribute permissions.

use std::any::Any;
use std::sync::Arc;

use custom_attributes_sdk::{AttributeMap, User};

use super::definition::Method;
use super::filter;
use super::service::ConfigurationService;

/// Wraps a host [`User`], filtering its attributes through the configured
/// definitions.
///
/// - `attributes()` drops keys the wrapper's method may not see: read-mode
///   wrappers hide non-readable keys, write-mode wrappers (handed to the host
///   on creation) hide non-writable ones.
/// - `set_attributes()` always drops non-writable keys before forwarding.
///
/// Everything else is forwarded unchanged.
pub struct CustomAttributeUser {
    inner: Arc<dyn User>,
    method: Method,
    service: Arc<ConfigurationService>,
}

impl CustomAttributeUser {
    #[must_use]
    pub fn new(service: Arc<ConfigurationService>, method: Method, user: Arc<dyn User>) -> Self {
        Self {
            inner: user,
            method,
            service,
        }
    }

    /// Wrap `user` for reading unless it is already wrapped.
    #[must_use]
    pub fn decorate(service: &Arc<ConfigurationService>, user: Arc<dyn User>) -> Arc<dyn User> {
        if user.as_any().is::<Self>() {
            return user;
        }
        Arc::new(Self::new(Arc::clone(service), Method::Read, user))
    }

    /// Wrap the undecorated form of `user` for writing.
    #[must_use]
    pub fn decorate_for_write(
        service: &Arc<ConfigurationService>,
        user: Arc<dyn User>,
    ) -> Arc<dyn User> {
        Arc::new(Self::new(
            Arc::clone(service),
            Method::Write,
            Self::undecorate(user),
        ))
    }

    /// Strip the wrapper if `user` is one, otherwise return it as is.
    #[must_use]
    pub fn undecorate(user: Arc<dyn User>) -> Arc<dyn User> {
        let inner = user.as_any().downcast_ref::<Self>().map(Self::undecorated);
        inner.unwrap_or(user)
    }

    /// The wrapped host user.
    #[must_use]
    pub fn undecorated(&self) -> Arc<dyn User> {
        Arc::clone(&self.inner)
    }
}

impl User for CustomAttributeUser {
    fn identifier(&self) -> String {
        self.inner.identifier()
    }

    fn password(&self) -> Option<String> {
        self.inner.password()
    }

    fn set_password(&self, password: Option<String>) {
        self.inner.set_password(password);
    }

    fn attributes(&self) -> AttributeMap {
        filter::apply(
            self.method,
            &self.service.definitions(),
            &self.inner.attributes(),
        )
    }

    fn set_attributes(&self, attributes: AttributeMap) {
        let filtered = filter::apply(Method::Write, &self.service.definitions(), &attributes);
        self.inner.set_attributes(filtered);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
