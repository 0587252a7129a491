// SPDX-License-Identifier: MPL-2.0
//! Fluent bundle management and string lookup.

use crate::config::Config;
use fluent_bundle::{FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use unic_langid::{langid, LanguageIdentifier};

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

const DEFAULT_LOCALE: LanguageIdentifier = langid!("en-US");

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("available_locales", &self.available_locales)
            .field("current_locale", &self.current_locale)
            .finish()
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, None, &Config::default())
    }
}

impl I18n {
    /// Loads embedded translations, then any `.ftl` files found in
    /// `i18n_dir`, and selects the startup locale.
    pub fn new(cli_lang: Option<String>, i18n_dir: Option<String>, config: &Config) -> Self {
        let mut sources: HashMap<LanguageIdentifier, String> = HashMap::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale) = locale_from_filename(filename) else {
                continue;
            };
            if let Some(content) = Asset::get(filename) {
                sources.insert(
                    locale,
                    String::from_utf8_lossy(content.data.as_ref()).into_owned(),
                );
            }
        }

        if let Some(dir) = i18n_dir {
            load_directory(Path::new(&dir), &mut sources);
        }

        let mut bundles = HashMap::new();
        for (locale, source) in sources {
            if let Some(bundle) = build_bundle(&locale, source) {
                bundles.insert(locale, bundle);
            }
        }

        let mut available_locales: Vec<LanguageIdentifier> = bundles.keys().cloned().collect();
        available_locales.sort_by_key(ToString::to_string);

        let current_locale = resolve_locale(cli_lang, config, &available_locales)
            .unwrap_or(DEFAULT_LOCALE);

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    /// Locales with a successfully parsed bundle, sorted by tag.
    #[must_use]
    pub fn available_locales(&self) -> &[LanguageIdentifier] {
        &self.available_locales
    }

    #[must_use]
    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    /// Switches locale. Unknown locales are ignored.
    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        } else {
            log::debug!("Ignoring unavailable locale {locale}");
        }
    }

    /// Translates `key` in the current locale, falling back to `en-US`.
    ///
    /// Returns `MISSING: <key>` when neither bundle has a value.
    #[must_use]
    pub fn tr(&self, key: &str) -> String {
        self.lookup(&self.current_locale, key)
            .or_else(|| self.lookup(&DEFAULT_LOCALE, key))
            .unwrap_or_else(|| format!("MISSING: {key}"))
    }

    fn lookup(&self, locale: &LanguageIdentifier, key: &str) -> Option<String> {
        let bundle = self.bundles.get(locale)?;
        let pattern = bundle.get_message(key)?.value()?;
        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, None, &mut errors);
        if errors.is_empty() {
            Some(value.into_owned())
        } else {
            log::warn!("Failed to format '{key}' for {locale}: {errors:?}");
            None
        }
    }
}

fn locale_from_filename(filename: &str) -> Option<LanguageIdentifier> {
    filename
        .strip_suffix(".ftl")
        .and_then(|stem| stem.parse::<LanguageIdentifier>().ok())
}

fn load_directory(dir: &Path, sources: &mut HashMap<LanguageIdentifier, String>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            log::warn!("Cannot read i18n directory {}: {}", dir.display(), err);
            return;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        let Some(locale) = path
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(locale_from_filename)
        else {
            continue;
        };
        match fs::read_to_string(&path) {
            Ok(content) => {
                log::debug!("Loaded translations for {locale} from {}", path.display());
                sources.insert(locale, content);
            }
            Err(err) => log::warn!("Cannot read {}: {}", path.display(), err),
        }
    }
}

fn build_bundle(
    locale: &LanguageIdentifier,
    source: String,
) -> Option<FluentBundle<FluentResource>> {
    let resource = match FluentResource::try_new(source) {
        Ok(resource) => resource,
        Err((_, errors)) => {
            log::warn!("Skipping {locale}: {} FTL parse error(s)", errors.len());
            return None;
        }
    };

    let mut bundle = FluentBundle::new(vec![locale.clone()]);
    bundle.set_use_isolating(false);
    if let Err(errors) = bundle.add_resource(resource) {
        log::warn!("Duplicate messages in {locale}: {errors:?}");
    }
    Some(bundle)
}

fn parse_available(
    lang: Option<&str>,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let lang = lang?.parse::<LanguageIdentifier>().ok()?;
    if available.contains(&lang) {
        return Some(lang);
    }
    // "fr-CA" still finds "fr".
    let language_only = LanguageIdentifier::from_parts(lang.language, None, None, &[]);
    available.contains(&language_only).then_some(language_only)
}

pub(crate) fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    parse_available(cli_lang.as_deref(), available)
        .or_else(|| parse_available(config.general.language.as_deref(), available))
        .or_else(|| parse_available(sys_locale::get_locale().as_deref(), available))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, GeneralConfig};
    use tempfile::tempdir;

    fn available() -> Vec<LanguageIdentifier> {
        vec![langid!("en-US"), langid!("fr")]
    }

    #[test]
    fn cli_language_wins() {
        let config = Config {
            general: GeneralConfig {
                language: Some("en-US".to_string()),
                ..GeneralConfig::default()
            },
            ..Config::default()
        };
        let lang = resolve_locale(Some("fr".to_string()), &config, &available());
        assert_eq!(lang, Some(langid!("fr")));
    }

    #[test]
    fn config_language_used_without_cli() {
        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        let lang = resolve_locale(None, &config, &available());
        assert_eq!(lang, Some(langid!("fr")));
    }

    #[test]
    fn regional_variant_falls_back_to_language() {
        let lang = resolve_locale(Some("fr-CA".to_string()), &Config::default(), &available());
        assert_eq!(lang, Some(langid!("fr")));
    }

    #[test]
    fn unknown_cli_language_is_skipped() {
        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        let lang = resolve_locale(Some("xx-invalid-".to_string()), &config, &available());
        assert_eq!(lang, Some(langid!("fr")));
    }

    #[test]
    fn embedded_locales_are_loaded() {
        let i18n = I18n::new(Some("en-US".to_string()), None, &Config::default());
        assert!(i18n.available_locales().contains(&langid!("en-US")));
        assert!(i18n.available_locales().contains(&langid!("fr")));
        assert_eq!(i18n.tr("window-title"), "Pull to Refresh");
    }

    #[test]
    fn set_locale_switches_translations() {
        let mut i18n = I18n::new(Some("en-US".to_string()), None, &Config::default());
        i18n.set_locale(langid!("fr"));
        assert_eq!(i18n.current_locale(), &langid!("fr"));
        assert_eq!(i18n.tr("cat-of-the-day-title"), "Le chat du jour");

        i18n.set_locale(langid!("de"));
        assert_eq!(i18n.current_locale(), &langid!("fr"));
    }

    #[test]
    fn missing_key_is_marked() {
        let i18n = I18n::new(Some("en-US".to_string()), None, &Config::default());
        assert_eq!(i18n.tr("no-such-key"), "MISSING: no-such-key");
    }

    #[test]
    fn directory_adds_and_overrides_locales() {
        let dir = tempdir().expect("failed to create temp dir");
        fs::write(dir.path().join("de.ftl"), "window-title = Zum Aktualisieren ziehen\n")
            .expect("write de.ftl");
        fs::write(dir.path().join("en-US.ftl"), "window-title = Custom\n")
            .expect("write en-US.ftl");
        fs::write(dir.path().join("notes.txt"), "ignored").expect("write notes");

        let dir_str = dir.path().to_string_lossy().into_owned();
        let mut i18n = I18n::new(Some("en-US".to_string()), Some(dir_str), &Config::default());

        assert_eq!(i18n.tr("window-title"), "Custom");
        i18n.set_locale(langid!("de"));
        assert_eq!(i18n.tr("window-title"), "Zum Aktualisieren ziehen");
        // Keys the override lacks fall back to en-US, which was replaced too.
        assert_eq!(i18n.tr("pull-hint"), "MISSING: pull-hint");
    }

    #[test]
    fn broken_ftl_file_is_skipped() {
        let dir = tempdir().expect("failed to create temp dir");
        fs::write(dir.path().join("de.ftl"), "= = =\n").expect("write de.ftl");

        let dir_str = dir.path().to_string_lossy().into_owned();
        let i18n = I18n::new(Some("de".to_string()), Some(dir_str), &Config::default());
        assert!(!i18n.available_locales().contains(&langid!("de")));
    }

    #[test]
    fn missing_directory_keeps_embedded_locales() {
        let i18n = I18n::new(
            Some("fr".to_string()),
            Some("/definitely/not/here".to_string()),
            &Config::default(),
        );
        assert_eq!(i18n.current_locale(), &langid!("fr"));
    }
}
