use std::path::Path;

use ayeen_core::{SettingChange, SettingKey};

use crate::cli::HostScheme;
use crate::commands::common::{format_setting_line, open_store};
use crate::error::CliError;

pub async fn run_set(
    field: &str,
    value: &str,
    db_path: &Path,
    scheme: HostScheme,
) -> Result<(), CliError> {
    let key: SettingKey = field.trim().parse()?;
    let change = SettingChange::parse(key, value)?;

    let mut store = open_store(db_path, scheme).await?;
    store.update_setting(change)?.wait().await;

    println!("{}", format_setting_line(store.settings(), key));
    Ok(())
}

pub async fn run_reset(db_path: &Path, scheme: HostScheme) -> Result<(), CliError> {
    let mut store = open_store(db_path, scheme).await?;
    store.reset_settings().wait().await;
    println!("Settings reset to defaults");
    Ok(())
}
