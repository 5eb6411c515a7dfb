use crate::conf::{default_config, resolve_path};
use anyhow::{Context, Result, bail};
use rust_embed::RustEmbed;
use std::fs;
use std::path::Path;

#[derive(RustEmbed)]
#[folder = "config-templates/"]
pub struct ConfigTemplates;

pub const CONFIG_TEMPLATE: &str = "log_analyzer.toml";
pub const REPORT_TEMPLATE: &str = "report.html";

/// Writes the default config to `path`.
///
/// The default logs directory and report template are created as well when
/// they do not exist yet, so the written config passes `check` as is.
pub fn init(path: &Path, force: bool) -> Result<()> {
    init_in(Path::new(""), path, force)
}

/// Like [`init`], with the default relative paths taken relative to `root`.
pub fn init_in(root: &Path, path: &Path, force: bool) -> Result<()> {
    if path.extension().is_some_and(|ext| ext != "toml") {
        bail!("{} must be a .toml file", path.display());
    }

    if path.exists() && !force {
        bail!(
            "config file '{}' already exists (use --force to overwrite)",
            path.display()
        );
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, embedded(CONFIG_TEMPLATE)?)
        .with_context(|| format!("failed to write config file {}", path.display()))?;
    println!("✔ Config written to {}", path.display());

    let defaults = default_config();

    let logs_dir = root.join(resolve_path(&defaults.logs.dir));
    if !logs_dir.exists() {
        fs::create_dir_all(&logs_dir)
            .with_context(|| format!("failed to create {}", logs_dir.display()))?;
        println!("✔ Created logs directory {}", logs_dir.display());
    }

    let template = root.join(resolve_path(&defaults.report.template_file_path));
    if !template.exists() {
        if let Some(parent) = template.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&template, embedded(REPORT_TEMPLATE)?)
            .with_context(|| format!("failed to write report template {}", template.display()))?;
        println!("✔ Report template written to {}", template.display());
    }

    Ok(())
}

fn embedded(name: &str) -> Result<Vec<u8>> {
    ConfigTemplates::get(name)
        .map(|file| file.data.into_owned())
        .with_context(|| format!("missing embedded template {name}"))
}
