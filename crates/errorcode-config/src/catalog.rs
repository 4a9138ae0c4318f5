use errorcode_core::{Catalog, CatalogError, TemplateDefinition};
use serde::Deserialize;

/// Catalog extensions
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogConfig {
    /// Additional templates, registered in order after the built-ins
    #[serde(default)]
    pub templates: Vec<TemplateDefinition>,
}

impl CatalogConfig {
    /// Build the built-in catalog extended with the configured templates
    ///
    /// # Errors
    ///
    /// Returns the first registration failure, e.g. a custom code that is
    /// already used in the same scope
    pub fn build(&self) -> Result<Catalog, CatalogError> {
        let mut catalog = Catalog::builtin();
        for definition in &self.templates {
            catalog.register(definition.clone())?;
        }
        Ok(catalog)
    }
}
