//! Programmatic configuration files for integration tests

use std::{fmt::Write as _, io::Write as _};

use errorcode_config::Config;
use tempfile::NamedTempFile;

/// Builds a configuration file on disk
#[derive(Default)]
pub struct ConfigBuilder {
    body: String,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_log(mut self, filter: &str, format: &str) -> Self {
        let _ = write!(self.body, "[log]\nfilter = \"{filter}\"\nformat = \"{format}\"\n\n");
        self
    }

    pub fn with_template(mut self, name: &str, scope: &str, custom_code: &str, detail: &str, status: u16) -> Self {
        let _ = write!(
            self.body,
            "[[catalog.templates]]\nname = \"{name}\"\nscope = \"{scope}\"\ncustom_code = \"{custom_code}\"\ndetail = \"{detail}\"\nstatus = {status}\n\n"
        );
        self
    }

    pub fn write(self) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("create temp config");
        file.write_all(self.body.as_bytes()).expect("write temp config");
        file
    }

    pub fn load(self) -> anyhow::Result<Config> {
        let file = self.write();
        Config::load(file.path())
    }
}
