//! User context wrapper exposing the custom attribute policy to the host.

use std::sync::Arc;

use custom_attributes_sdk::{DirectoryError, Form, UserContext, UserDirectory};

use super::directory::CustomAttributeDirectory;
use super::fields::group_by_form;
use super::service::ConfigurationService;

/// Wraps the user context of another extension, filtering user attributes and
/// appending the custom attribute forms to its schema.
pub struct CustomAttributeUserContext {
    inner: Arc<dyn UserContext>,
    service: Arc<ConfigurationService>,
}

impl CustomAttributeUserContext {
    #[must_use]
    pub fn new(inner: Arc<dyn UserContext>, service: Arc<ConfigurationService>) -> Self {
        Self { inner, service }
    }

    /// The wrapped host context.
    #[must_use]
    pub fn undecorated(&self) -> Arc<dyn UserContext> {
        Arc::clone(&self.inner)
    }
}

impl UserContext for CustomAttributeUserContext {
    fn identifier(&self) -> String {
        self.inner.identifier()
    }

    fn user_directory(&self) -> Result<Arc<dyn UserDirectory>, DirectoryError> {
        let directory = self.inner.user_directory()?;
        Ok(Arc::new(CustomAttributeDirectory::new(
            directory,
            Arc::clone(&self.service),
        )))
    }

    /// Host forms first, then one form per custom form name in first-seen
    /// order.
    fn user_attributes(&self) -> Vec<Form> {
        let mut forms = self.inner.user_attributes();
        forms.extend(group_by_form(&self.service.definitions()));
        forms
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use custom_attributes_sdk::memory::{
        InMemoryDirectory, InMemoryUser, InMemoryUserContext, StaticSettingsSource,
    };
    use custom_attributes_sdk::{Field, FieldKind};

    use super::*;
    use crate::config::CustomAttributesConfig;

    fn native_forms() -> Vec<Form> {
        vec![Form::new(
            "profile",
            vec![
                Field::new("full-name", FieldKind::Text { options: None }),
                Field::new("email-address", FieldKind::Email),
            ],
        )]
    }

    fn context(raw: Option<&str>) -> CustomAttributeUserContext {
        let settings = match raw {
            Some(raw) => StaticSettingsSource::new().with_property("custom-attributes", raw),
            None => StaticSettingsSource::new(),
        };
        let host = InMemoryUserContext::new("mysql", Arc::new(InMemoryDirectory::new()))
            .with_forms(native_forms());
        CustomAttributeUserContext::new(
            Arc::new(host),
            Arc::new(ConfigurationService::new(
                Arc::new(settings),
                CustomAttributesConfig::default(),
            )),
        )
    }

    #[test]
    fn schema_without_configuration_is_native_only() {
        assert_eq!(context(None).user_attributes(), native_forms());
        assert_eq!(context(Some("")).user_attributes(), native_forms());
    }

    #[test]
    fn custom_forms_follow_native_forms() {
        let ctx = context(Some(
            "rw:Access:vpnEnabled:boolean:true,rw:Profile:department:text,r:Access:shell:terminal-color-scheme",
        ));

        let forms = ctx.user_attributes();
        let names: Vec<&str> = forms.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["profile", "Access", "Profile"]);
        assert_eq!(forms[1].fields.len(), 2);
        assert_eq!(forms[1].fields[1].kind, FieldKind::TerminalColorScheme);
    }

    #[test]
    fn identifier_is_forwarded() {
        let ctx = context(None);
        assert_eq!(ctx.identifier(), "mysql");
        assert_eq!(ctx.undecorated().identifier(), "mysql");
    }

    #[tokio::test]
    async fn user_directory_is_decorated() {
        let ctx = context(Some("w:Secrets:pin:password"));
        let directory = ctx.user_directory().unwrap();

        directory
            .add(Arc::new(
                InMemoryUser::new("al").with_attributes([("pin", "1"), ("age", "2")]),
            ))
            .await
            .unwrap();

        let user = directory.get("al").await.unwrap().unwrap();
        assert_eq!(user.attributes().len(), 1);
        assert!(user.attributes().contains_key("age"));
    }
}
