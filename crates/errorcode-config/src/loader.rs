use std::path::Path;

use anyhow::Context;
use errorcode_core::Catalog;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, a placeholder cannot be
    /// expanded, the TOML is malformed, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;

        Self::from_toml(&raw)
    }

    /// Parse and validate configuration from TOML text
    ///
    /// # Errors
    ///
    /// Returns an error if a placeholder cannot be expanded, the TOML is
    /// malformed, or validation fails
    pub fn from_toml(raw: &str) -> anyhow::Result<Self> {
        let expanded = crate::env::expand_env(raw).context("config variable expansion failed")?;

        let config: Self = toml::from_str(&expanded).context("failed to parse config")?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if the log filter is blank or a configured template
    /// cannot be registered
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.log.filter.trim().is_empty() {
            anyhow::bail!("log.filter must not be empty");
        }

        self.catalog.build().context("invalid catalog template")?;

        Ok(())
    }

    /// Built-in catalog extended with the configured templates
    ///
    /// # Errors
    ///
    /// Returns an error if a configured template cannot be registered
    pub fn catalog(&self) -> anyhow::Result<Catalog> {
        Ok(self.catalog.build()?)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use errorcode_core::scope;

    use super::*;
    use crate::LogFormat;

    #[test]
    fn empty_config_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.log.filter, "info");
        assert_eq!(config.log.format, LogFormat::Text);
        assert!(config.catalog.templates.is_empty());
        assert_eq!(config.catalog().unwrap().len(), errorcode_core::BUILTIN.len());
    }

    #[test]
    fn full_config() {
        let raw = r#"
            [log]
            filter = "errorcode_core=debug"
            format = "json"

            [[catalog.templates]]
            name = "CoreProxyUpstreamTimeout"
            scope = "dongfeng.svc.core.proxy"
            custom_code = "E1000"
            detail = "upstream timed out"
            status = 504
        "#;

        let config = Config::from_toml(raw).unwrap();
        assert_eq!(config.log.format, LogFormat::Json);

        let catalog = config.catalog().unwrap();
        let template = catalog.find(scope::CORE_PROXY, "E1000").unwrap();
        assert_eq!(template.name(), "CoreProxyUpstreamTimeout");
        insta::assert_snapshot!(
            template.error(),
            @r#"{"id":"dongfeng.svc.core.proxy","code":504,"custom_code":"E1000","detail":"upstream timed out","status":"Gateway Timeout"}"#
        );
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = Config::from_toml("[log]\nlevel = \"info\"\n").unwrap_err();
        assert!(format!("{err:#}").contains("unknown field"), "{err:#}");
    }

    #[test]
    fn reused_code_fails_validation() {
        let raw = r#"
            [[catalog.templates]]
            name = "Imposter"
            scope = "dongfeng.svc.generic"
            custom_code = "E0001"
            detail = "imposter"
            status = 401
        "#;

        let err = Config::from_toml(raw).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("invalid catalog template"), "{message}");
        assert!(message.contains("GenericNotAuthorized"), "{message}");
    }

    #[test]
    fn blank_filter_fails_validation() {
        let err = Config::from_toml("[log]\nfilter = \" \"\n").unwrap_err();
        assert_eq!(err.to_string(), "log.filter must not be empty");
    }

    #[test]
    fn placeholders_expand_before_parsing() {
        temp_env::with_var("ERRORCODE_TEST_STATUS_DETAIL", Some("core is down"), || {
            let raw = r#"
                [[catalog.templates]]
                name = "CoreDown"
                scope = "dongfeng.svc.core.server"
                custom_code = "E2000"
                detail = "{{ env.ERRORCODE_TEST_STATUS_DETAIL }}"
                status = 503
            "#;

            let catalog = Config::from_toml(raw).unwrap().catalog().unwrap();
            assert_eq!(catalog.get("CoreDown").unwrap().default_detail(), "core is down");
        });
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[log]\nfilter = \"warn\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.log.filter, "warn");
    }

    #[test]
    fn missing_file() {
        let err = Config::load(Path::new("/nonexistent/errorcode.toml")).unwrap_err();
        assert!(err.to_string().starts_with("failed to read config file"));
    }
}
