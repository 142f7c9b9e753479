//! Pick generation options at a prompt.

use std::path::PathBuf;

use anyhow::Context;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, MultiSelect};

use foxypass::{CharacterClass, GenerationRequest, MAX_LENGTH, MIN_LENGTH};

use crate::ProgError;

pub(crate) fn interactive(config_path: Option<PathBuf>) -> Result<(), ProgError> {
    let settings = crate::config::load_settings(config_path)?;
    let theme = ColorfulTheme::default();

    let length = Input::<usize>::with_theme(&theme)
        .with_prompt(format!("Password length ({MIN_LENGTH}-{MAX_LENGTH})"))
        .default(settings.request.length)
        .validate_with(|length: &usize| -> Result<(), String> {
            if (MIN_LENGTH..=MAX_LENGTH).contains(length) {
                Ok(())
            } else {
                Err(format!(
                    "The length must be between {MIN_LENGTH} and {MAX_LENGTH}."
                ))
            }
        })
        .interact_text()
        .context("failed to get your answer to a prompt")?;

    let labels = CharacterClass::ALL.map(class_label);
    let defaults = CharacterClass::ALL.map(|class| settings.request.classes.contains(&class));
    let selection = MultiSelect::with_theme(&theme)
        .with_prompt("Characters to include (space toggles, enter accepts)")
        .items(&labels)
        .defaults(&defaults)
        .interact()
        .context("failed to get your answer to a prompt")?;
    if selection.is_empty() {
        return Err(ProgError::NoClassesSelected);
    }

    let request = GenerationRequest::new(
        length,
        selection.into_iter().map(|index| CharacterClass::ALL[index]),
    )?;

    let mut rng = foxypass::os_entropy();
    loop {
        let password = foxypass::generate_password(&mut rng, &request)?;
        let strength = password.strength();
        println!("{}", password.as_str());
        eprintln!("{}", crate::score::describe(&strength));

        let copy = Confirm::with_theme(&theme)
            .with_prompt("Copy to the clipboard?")
            .default(false)
            .interact()
            .context("failed to prompt you, somehow")?;
        if copy {
            crate::clipboard::copy_password(password.as_str(), settings.clear_clipboard_after)?;
        }

        let again = Confirm::with_theme(&theme)
            .with_prompt("Generate another?")
            .default(false)
            .interact()
            .context("failed to prompt you, somehow")?;
        if !again {
            break;
        }
    }
    Ok(())
}

fn class_label(class: CharacterClass) -> String {
    let description = match class {
        CharacterClass::Uppercase => "Uppercase letters",
        CharacterClass::Lowercase => "Lowercase letters",
        CharacterClass::Digit => "Digits",
        CharacterClass::Special => "Special characters",
    };
    format!("{description} ({})", class.alphabet())
}
