//! Defaults for the command-line tool, optionally loaded from a YAML file.

use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use serde::Deserialize;

use foxypass::{CharacterClass, GenerationRequest};

/// The contents of a config file. Everything is optional; missing values fall back to the
/// built-in defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct ConfigFile {
    pub length: Option<usize>,
    pub classes: Option<Vec<CharacterClass>>,
    pub count: Option<usize>,
    /// Seconds.
    pub clear_clipboard_after: Option<u64>,
}

/// Fully resolved settings for a run.
#[derive(Debug)]
pub(crate) struct Settings {
    pub request: GenerationRequest,
    pub count: usize,
    /// Zero means the clipboard is left alone.
    pub clear_clipboard_after: Duration,
}

impl Settings {
    pub fn from_config(config: ConfigFile) -> Settings {
        let mut request = GenerationRequest::default();
        if let Some(length) = config.length {
            request.length = length;
        }
        if let Some(classes) = config.classes {
            request.classes = classes.into_iter().collect();
        }
        Settings {
            request,
            count: config.count.unwrap_or(1),
            clear_clipboard_after: Duration::from_secs(config.clear_clipboard_after.unwrap_or(0)),
        }
    }
}

/// Load settings from the config file, if there is one.
///
/// An explicitly named file (by argument, or by `$FOXYPASS_CONFIG`) must exist; the default
/// location is only read if something is there.
pub(crate) fn load_settings(explicit_path: Option<PathBuf>) -> anyhow::Result<Settings> {
    let config = match config_path(
        explicit_path,
        env::var_os("FOXYPASS_CONFIG"),
        env::var_os("HOME"),
    ) {
        ConfigPath::Required(path) => read_config(&path)?,
        ConfigPath::IfPresent(path) if path.is_file() => read_config(&path)?,
        ConfigPath::IfPresent(_) | ConfigPath::None => ConfigFile::default(),
    };
    Ok(Settings::from_config(config))
}

#[derive(Debug, Eq, PartialEq)]
enum ConfigPath {
    Required(PathBuf),
    IfPresent(PathBuf),
    None,
}

fn config_path(
    explicit_path: Option<PathBuf>,
    env_path: Option<OsString>,
    home: Option<OsString>,
) -> ConfigPath {
    if let Some(path) = explicit_path {
        return ConfigPath::Required(path);
    }
    if let Some(path) = env_path.filter(|p| !p.is_empty()) {
        return ConfigPath::Required(PathBuf::from(path));
    }
    match home {
        Some(home) => {
            let mut p = PathBuf::from(home);
            p.push(".config");
            p.push("foxypass");
            p.push("config.yaml");
            ConfigPath::IfPresent(p)
        }
        None => ConfigPath::None,
    }
}

fn read_config(path: &Path) -> anyhow::Result<ConfigFile> {
    log::debug!("reading config from {}", path.display());
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    if contents.trim().is_empty() {
        return Ok(ConfigFile::default());
    }
    serde_yaml::from_str(&contents)
        .with_context(|| format!("failed to parse config file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::path::PathBuf;
    use std::time::Duration;

    use foxypass::CharacterClass;

    use super::{config_path, read_config, ConfigPath, Settings};

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn built_in_defaults() {
        let settings = Settings::from_config(Default::default());
        assert_eq!(settings.request.length, 16);
        assert_eq!(settings.request.classes.len(), 4);
        assert_eq!(settings.count, 1);
        assert_eq!(settings.clear_clipboard_after, Duration::ZERO);
    }

    #[test]
    fn reads_all_fields() {
        let file = write_config(
            "length: 24\nclasses: [lowercase, digit]\ncount: 5\nclear_clipboard_after: 30\n",
        );
        let settings = Settings::from_config(read_config(file.path()).unwrap());
        assert_eq!(settings.request.length, 24);
        assert_eq!(
            settings.request.classes.into_iter().collect::<Vec<_>>(),
            [CharacterClass::Lowercase, CharacterClass::Digit]
        );
        assert_eq!(settings.count, 5);
        assert_eq!(settings.clear_clipboard_after, Duration::from_secs(30));
    }

    #[test]
    fn empty_file_is_all_defaults() {
        let file = write_config("\n");
        let settings = Settings::from_config(read_config(file.path()).unwrap());
        assert_eq!(settings.request.length, 16);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let file = write_config("lenght: 24\n");
        assert!(read_config(file.path()).is_err());
    }

    #[test]
    fn unknown_classes_are_rejected() {
        let file = write_config("classes: [emoji]\n");
        assert!(read_config(file.path()).is_err());
    }

    #[test]
    fn config_path_precedence() {
        assert_eq!(
            config_path(
                Some(PathBuf::from("/a.yaml")),
                Some("/b.yaml".into()),
                Some("/home/u".into())
            ),
            ConfigPath::Required(PathBuf::from("/a.yaml"))
        );
        assert_eq!(
            config_path(None, Some("/b.yaml".into()), Some("/home/u".into())),
            ConfigPath::Required(PathBuf::from("/b.yaml"))
        );
        assert_eq!(
            config_path(None, Some("".into()), Some("/home/u".into())),
            ConfigPath::IfPresent(PathBuf::from("/home/u/.config/foxypass/config.yaml"))
        );
        assert_eq!(config_path(None, None, None), ConfigPath::None);
    }
}
