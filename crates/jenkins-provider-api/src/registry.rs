//! Resource dispatch by type name
//!
//! The host looks a resource up by the type name used in its configuration
//! (`jenkins_credential`, `jenkins_credential_secret`) and then drives the
//! lifecycle through the returned [`Resource`].

use std::collections::BTreeMap;

use crate::resource::Resource;

#[derive(Default)]
pub struct ResourceRegistry {
    resources: BTreeMap<String, Box<dyn Resource>>,
}

impl ResourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `resource` under its type name, returning any resource it
    /// displaced
    pub fn register(&mut self, resource: Box<dyn Resource>) -> Option<Box<dyn Resource>> {
        let type_name = resource.type_name().to_string();
        self.resources.insert(type_name, resource)
    }

    pub fn get(&self, type_name: &str) -> Option<&dyn Resource> {
        self.resources.get(type_name).map(|r| r.as_ref())
    }

    pub fn is_registered(&self, type_name: &str) -> bool {
        self.resources.contains_key(type_name)
    }

    /// Registered type names in sorted order
    pub fn resource_types(&self) -> Vec<String> {
        self.resources.keys().cloned().collect()
    }

    pub fn count(&self) -> usize {
        self.resources.len()
    }
}
