use std::path::Path;

use crate::cli::HostScheme;
use crate::commands::common::{format_report_lines, open_store, SettingsReport};
use crate::error::CliError;

pub async fn run_show(as_json: bool, db_path: &Path, scheme: HostScheme) -> Result<(), CliError> {
    let store = open_store(db_path, scheme).await?;
    let report = SettingsReport::from_store(&store);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for line in format_report_lines(&report) {
            println!("{line}");
        }
    }

    Ok(())
}
