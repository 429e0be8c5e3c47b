use std::io::{self, Write};
use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use poro_idmap_lib::{ConvertOptions, MapStats, Settings, convert};

use super::write_stats;
use crate::CliError;

/// Run the convert command.
///
/// The settings file at `settings_file` is only read when the command line
/// leaves the input, output or strictness unset.
pub(crate) fn run_convert(
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    strict: Option<bool>,
    settings_file: &Path,
) -> Result<(), CliError> {
    let settings = if input.is_some() && output.is_some() && strict.is_some() {
        Settings::default()
    } else {
        Settings::load_from(settings_file)?
    };
    let (input, input_source) = settings.resolve_input(input);
    let (output, output_source) = settings.resolve_output(output);
    let (policy, policy_source) = settings.malformed_row_policy(strict);

    log::debug!("Input: {} ({})", input.display(), input_source);
    log::debug!("Output: {} ({})", output.display(), output_source);
    log::debug!("Malformed rows: {:?} ({})", policy, policy_source);

    let options = ConvertOptions::new().malformed_rows(policy);
    let report = convert(&input, &output, &options)?;

    log::debug!(
        "Read {} rows: {} blank card IDs, {} without marketplace IDs, {} duplicates",
        report.rows_read,
        report.blank_card_ids,
        report.rows_without_ids,
        report.duplicates,
    );
    if report.malformed_rows > 0 {
        log::warn!(
            "{} Skipped {} malformed row(s)",
            "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
            report.malformed_rows,
        );
    }

    write_summary(&mut io::stdout().lock(), &report.stats, &output)?;
    Ok(())
}

/// Completion line, the four counts, then the output path.
fn write_summary(out: &mut impl Write, stats: &MapStats, output: &Path) -> io::Result<()> {
    writeln!(out, "Conversion complete!")?;
    write_stats(out, stats)?;
    writeln!(out, "Output written to: {}", output.display())?;
    Ok(())
}
