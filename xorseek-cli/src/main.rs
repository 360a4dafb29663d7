extern crate libxorseek;

use clap::Parser;
use miette::{IntoDiagnostic, Result};

#[derive(Parser, Debug)]
#[command(name = "xorseek CLI")]
#[command(about, author, version, long_about = None)]
struct Cli {
    /// Known plaintext prefix (ASCII)
    known_prefix: String,
    /// Hex-encoded ciphertext, at least as long as the prefix
    known_output_hex: String,
}

pub fn main() -> Result<()> {
    let stdout = console::Term::stdout();
    let cli = Cli::parse();

    let prefix = cli.known_prefix.as_bytes();
    let ciphertext = hex::decode(&cli.known_output_hex).into_diagnostic()?;

    let bar = indicatif::ProgressBar::new(u64::from(libxorseek::SEED_SPACE));
    bar.set_style(get_bar_style()?);

    let result = libxorseek::search::recover(prefix, &ciphertext, || bar.inc(1))
        .into_diagnostic()?;

    bar.finish_and_clear();

    if let Some(recovery) = result {
        let text = format!("Seed: {:08X}", recovery.seed);
        stdout.write_line(&text).into_diagnostic()?;

        let decoded = String::from_utf8_lossy(&recovery.plaintext);
        let text = format!("Flag: {decoded}");
        stdout.write_line(&text).into_diagnostic()?;
    }

    Ok(())
}

fn get_bar_style() -> Result<indicatif::ProgressStyle> {
    Ok(
        indicatif::ProgressStyle::with_template("[{bar:32}] {pos:>7}/{len:7} seeds")
            .into_diagnostic()?
            .progress_chars("=>-"),
    )
}
