use std::io;
use std::path::PathBuf;

use anyhow::Context;
use serde::Serialize;

use foxypass::{CharacterClass, Password, StrengthReport};

use crate::config::{self, Settings};
use crate::table::{display_table, TableDisplay};
use crate::ProgError;

#[derive(clap::Args)]
pub(crate) struct GenerateOptions {
    /// Length of each password, from 8 to 128 characters.
    #[arg(short, long)]
    length: Option<usize>,
    /// Leave out uppercase letters.
    #[arg(long)]
    no_uppercase: bool,
    /// Leave out lowercase letters.
    #[arg(long)]
    no_lowercase: bool,
    /// Leave out digits.
    #[arg(long)]
    no_digits: bool,
    /// Leave out special characters.
    #[arg(long)]
    no_special: bool,
    /// How many passwords to generate.
    #[arg(short = 'n', long)]
    count: Option<usize>,
    /// Copy the (first) password to the clipboard.
    #[arg(short, long)]
    copy: bool,
    /// After copying, clear the clipboard after this many seconds. 0 leaves it alone.
    #[arg(long, value_name = "SECS")]
    clear_clipboard_after: Option<u64>,
    /// Print the passwords and their strength as JSON.
    #[arg(long)]
    json: bool,
}

impl GenerateOptions {
    /// Override settings from the config file with those given on the command line.
    fn apply_to(&self, settings: &mut Settings) {
        if let Some(length) = self.length {
            settings.request.length = length;
        }
        let excluded = [
            (self.no_uppercase, CharacterClass::Uppercase),
            (self.no_lowercase, CharacterClass::Lowercase),
            (self.no_digits, CharacterClass::Digit),
            (self.no_special, CharacterClass::Special),
        ];
        for (exclude, class) in excluded {
            if exclude {
                settings.request.classes.remove(&class);
            }
        }
        if let Some(count) = self.count {
            settings.count = count;
        }
        if let Some(secs) = self.clear_clipboard_after {
            settings.clear_clipboard_after = std::time::Duration::from_secs(secs);
        }
    }
}

pub(crate) fn generate(
    config_path: Option<PathBuf>,
    options: GenerateOptions,
) -> Result<(), ProgError> {
    let mut settings = config::load_settings(config_path)?;
    options.apply_to(&mut settings);
    if settings.count == 0 {
        return Err(ProgError::ZeroCount);
    }

    let mut rng = foxypass::os_entropy();
    let passwords = foxypass::generate_passwords(&mut rng, &settings.request, settings.count)?;
    let generated = passwords
        .into_iter()
        .map(|password| Generated {
            strength: password.strength(),
            password,
        })
        .collect::<Vec<_>>();

    if options.json {
        serde_json::to_writer_pretty(io::stdout().lock(), &generated)
            .context("failed to write passwords as JSON to stdout")?;
        println!();
    } else if let [single] = generated.as_slice() {
        println!("{}", single.password.as_str());
        eprintln!("{}", crate::score::describe(&single.strength));
    } else {
        let rows = generated
            .iter()
            .enumerate()
            .map(|(index, g)| Row {
                number: (index + 1).to_string(),
                generated: g,
            })
            .collect::<Vec<_>>();
        display_table(&rows, io::stdout().lock()).context("failed to output table")?;
    }

    if options.copy {
        crate::clipboard::copy_password(
            generated[0].password.as_str(),
            settings.clear_clipboard_after,
        )?;
    }
    Ok(())
}

#[derive(Serialize)]
struct Generated {
    password: Password,
    strength: StrengthReport,
}

struct Row<'a> {
    number: String,
    generated: &'a Generated,
}

impl TableDisplay for Row<'_> {
    fn columns() -> usize {
        3
    }

    fn column_name(column_index: usize) -> &'static str {
        match column_index {
            0 => "#",
            1 => "Password",
            2 => "Strength",
            _ => panic!(),
        }
    }

    fn item(&self, column_index: usize) -> &str {
        match column_index {
            0 => self.number.as_str(),
            1 => self.generated.password.as_str(),
            2 => self.generated.strength.label,
            _ => panic!(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use clap::Parser;

    use foxypass::CharacterClass;

    use super::GenerateOptions;
    use crate::config::Settings;

    #[derive(Parser)]
    struct Wrapper {
        #[command(flatten)]
        options: GenerateOptions,
    }

    fn settings_after(args: &[&str]) -> Settings {
        let wrapper = Wrapper::parse_from(std::iter::once("generate").chain(args.iter().copied()));
        let mut settings = Settings::from_config(Default::default());
        wrapper.options.apply_to(&mut settings);
        settings
    }

    #[test]
    fn no_flags_keeps_defaults() {
        let settings = settings_after(&[]);
        assert_eq!(settings.request.length, 16);
        assert_eq!(settings.request.classes.len(), 4);
        assert_eq!(settings.count, 1);
    }

    #[test]
    fn flags_override_settings() {
        let settings = settings_after(&[
            "--length",
            "40",
            "--no-special",
            "--no-uppercase",
            "-n",
            "3",
            "--clear-clipboard-after",
            "10",
        ]);
        assert_eq!(settings.request.length, 40);
        assert_eq!(
            settings.request.classes.into_iter().collect::<Vec<_>>(),
            [CharacterClass::Lowercase, CharacterClass::Digit]
        );
        assert_eq!(settings.count, 3);
        assert_eq!(settings.clear_clipboard_after, Duration::from_secs(10));
    }

    #[test]
    fn excluding_everything_leaves_an_invalid_request() {
        let settings = settings_after(&["--no-uppercase", "--no-lowercase", "--no-digits", "--no-special"]);
        assert_eq!(
            settings.request.validate().unwrap_err().kind(),
            foxypass::ErrorKind::InvalidRequest
        );
    }
}
