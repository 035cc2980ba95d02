use crate::config::Config;
use fluent_bundle::{FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

const FALLBACK_LOCALE: &str = "en-US";

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Config::default())
    }
}

impl I18n {
    pub fn new(cli_lang: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            match load_bundle(file.as_ref()) {
                Some((locale, bundle)) => {
                    bundles.insert(locale.clone(), bundle);
                    available_locales.push(locale);
                }
                None => eprintln!("Skipping unusable translation asset: {}", file.as_ref()),
            }
        }

        let current_locale = resolve_locale(cli_lang, config, &available_locales)
            .unwrap_or_else(|| FALLBACK_LOCALE.parse().expect("fallback locale is valid"));

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    /// Look up `key` in the current locale's bundle. Unknown keys come
    /// back as `MISSING: key` so they are visible in the UI instead of
    /// blank.
    pub fn tr(&self, key: &str) -> String {
        let Some(bundle) = self.bundles.get(&self.current_locale) else {
            return format!("MISSING: {key}");
        };
        let Some(pattern) = bundle.get_message(key).and_then(|msg| msg.value()) else {
            return format!("MISSING: {key}");
        };

        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, None, &mut errors);
        if errors.is_empty() {
            value.to_string()
        } else {
            format!("MISSING: {key}")
        }
    }
}

/// Parse one embedded `<locale>.ftl` file into a Fluent bundle.
fn load_bundle(filename: &str) -> Option<(LanguageIdentifier, FluentBundle<FluentResource>)> {
    let locale: LanguageIdentifier = filename.strip_suffix(".ftl")?.parse().ok()?;
    let content = Asset::get(filename)?;
    let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
    let resource = FluentResource::try_new(source).ok()?;

    let mut bundle = FluentBundle::new(vec![locale.clone()]);
    bundle.add_resource(resource).ok()?;
    Some((locale, bundle))
}

/// Pick the UI locale: CLI flag first, then the config file, then the
/// OS locale. Candidates not shipped with the binary are skipped.
fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let candidates = [cli_lang, config.language.clone(), sys_locale::get_locale()];

    candidates
        .into_iter()
        .flatten()
        .filter_map(|raw| raw.parse::<LanguageIdentifier>().ok())
        .find(|lang| available.contains(lang))
}
