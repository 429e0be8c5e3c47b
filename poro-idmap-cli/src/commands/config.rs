use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use poro_idmap_lib::{SettingSource, Settings};
use poro_idmap_lib::settings::settings_path;

use crate::CliError;

/// Show resolved settings and where each value came from.
pub(crate) fn run_config_show() -> Result<(), CliError> {
    let path = settings_path();
    let settings = Settings::load_from(&path)?;

    println!(
        "{}",
        "poro-idmap Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    println!();

    if path.exists() {
        println!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        println!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    println!();

    let (input, input_source) = settings.resolve_input(None);
    let (output, output_source) = settings.resolve_output(None);
    let (policy, policy_source) = settings.malformed_row_policy(None);

    let source_str = |s: SettingSource| format!("({})", s);
    println!(
        "  {:<16} {} {}",
        "input",
        input.display(),
        source_str(input_source).if_supports_color(Stdout, |t| t.dimmed()),
    );
    println!(
        "  {:<16} {} {}",
        "output",
        output.display(),
        source_str(output_source).if_supports_color(Stdout, |t| t.dimmed()),
    );
    println!(
        "  {:<16} {:?} {}",
        "malformed rows",
        policy,
        source_str(policy_source).if_supports_color(Stdout, |t| t.dimmed()),
    );

    Ok(())
}

/// Print the settings file path.
pub(crate) fn run_config_path() {
    println!("{}", settings_path().display());
}
