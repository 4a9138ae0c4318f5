use std::fmt::Write;

use errorcode_core::{Catalog, ErrorTemplate, payload};

use crate::args::Command;

/// Execute a subcommand and return what should be printed
pub fn run(command: &Command, catalog: &Catalog) -> anyhow::Result<String> {
    match command {
        Command::List { scope } => Ok(list(catalog, scope.as_deref())),
        Command::Show { name } => Ok(show(template(catalog, name)?)),
        Command::New { name, detail } => {
            let value = template(catalog, name)?.instantiate(detail.as_deref());
            tracing::info!(template = %name, code = value.code(), "minted error");
            Ok(value.to_json())
        }
        Command::Decode { payload } => Ok(decode(payload)),
        Command::Forward { payload } => {
            let value = errorcode_core::passthrough(payload.as_str());
            if value.is_degraded() {
                tracing::warn!("payload is not structured; codes were not forwarded");
            }
            Ok(value.to_json())
        }
    }
}

fn template<'a>(catalog: &'a Catalog, name: &str) -> anyhow::Result<&'a ErrorTemplate> {
    catalog
        .get(name)
        .ok_or_else(|| anyhow::anyhow!("unknown error template: {name}"))
}

fn list(catalog: &Catalog, scope: Option<&str>) -> String {
    let mut out = String::new();

    for template in catalog.iter().filter(|t| scope.is_none_or(|scope| t.scope_id() == scope)) {
        let _ = writeln!(
            out,
            "{:<30} {:<26} {:<9} {} {}",
            template.name(),
            template.scope_id(),
            template.custom_code(),
            template.http_status().as_u16(),
            template.default_detail(),
        );
    }

    out.trim_end().to_owned()
}

fn show(template: &ErrorTemplate) -> String {
    format!(
        "name: {}\nscope: {}\ncustom_code: {}\ndetail: {}\nstatus: {}\nkind: {}",
        template.name(),
        template.scope_id(),
        template.custom_code(),
        template.default_detail(),
        template.http_status(),
        template.kind(),
    )
}

fn decode(raw: &str) -> String {
    let parsed = payload::parse(raw);
    format!(
        "parsed: {}\ncode: {}\ncustom_code: {}\ndetail: {}",
        parsed.parsed, parsed.code, parsed.custom_code, parsed.detail
    )
}
