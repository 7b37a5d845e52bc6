//! Configuration CLI command

use crate::config::paths::ReceiptPaths;
use crate::config::settings::Settings;
use crate::error::ReceiptResult;

/// Handle `receipt config`
///
/// Writes the current settings to disk when no settings file exists yet, so
/// there is a file to edit.
pub fn handle_config_command(paths: &ReceiptPaths, settings: &Settings) -> ReceiptResult<()> {
    let settings_file = paths.settings_file();
    let created = !settings_file.exists();
    if created {
        settings.save(paths)?;
    }

    println!("Receipt CLI Configuration");
    println!("=========================");
    println!("Base directory:  {}", paths.base_dir().display());
    println!(
        "Settings file:   {}{}",
        settings_file.display(),
        if created { " (created)" } else { "" }
    );
    println!("Print directory: {}", paths.print_dir().display());
    println!("Audit log:       {}", paths.audit_log().display());
    println!("Diagnostic log:  {}", paths.log_file().display());
    println!();
    println!("Settings:");
    println!("  Print backend: {}", settings.print_backend);
    println!(
        "  Open command:  {}",
        settings.open_command.as_deref().unwrap_or("(platform default)")
    );
    println!("  Escape HTML:   {}", settings.escape_html);
    println!("  Audit enabled: {}", settings.audit_enabled);
    println!("  Log level:     {}", settings.log_level);

    Ok(())
}
