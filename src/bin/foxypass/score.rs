use std::io;

use anyhow::Context;
use console::Style;

use foxypass::{score_password, StrengthReport, StrengthTier};

use crate::ProgError;

pub(crate) fn score(password: Option<String>, json: bool) -> Result<(), ProgError> {
    let password = match password {
        Some(p) => p,
        None => rpassword::prompt_password("Password to score: ")
            .context("failed to read password from TTY")?,
    };
    let report = score_password(&password);
    if json {
        serde_json::to_writer_pretty(io::stdout().lock(), &report)
            .context("failed to write report as JSON to stdout")?;
        println!();
    } else {
        println!("{}", describe(&report));
    }
    Ok(())
}

/// A one-line, colored summary of a report, e.g. `[███████████████     ] Good - Strong (7/9)`.
pub(crate) fn describe(report: &StrengthReport) -> String {
    let style = tier_style(report.tier);
    format!(
        "{} {} ({}/9)",
        meter(report.tier, &style),
        style.apply_to(report.label),
        report.score
    )
}

fn meter(tier: StrengthTier, style: &Style) -> String {
    const WIDTH: usize = 20;
    let filled = WIDTH * usize::from(tier.meter_percent()) / 100;
    format!(
        "[{}{}]",
        style.apply_to("█".repeat(filled)),
        " ".repeat(WIDTH - filled)
    )
}

fn tier_style(tier: StrengthTier) -> Style {
    match tier {
        StrengthTier::Excellent | StrengthTier::Good => Style::new().green(),
        StrengthTier::Fair => Style::new().yellow(),
        StrengthTier::Weak | StrengthTier::VeryWeak => Style::new().red(),
    }
}
