//! Module name normalization.

use feeder_types::ModuleKind;

/// Names accepted for each module, besides the canonical one.
const ALIASES: &[(&str, ModuleKind)] = &[("mlat-client", ModuleKind::FaMlatClient)];

/// Map a raw module token to its kind.
///
/// Matching ignores case and every whitespace, hyphen and underscore
/// character, so `"dump1090 - fa"`, `"DUMP1090FA"` and `"dump1090_fa"` all
/// name the same module. Unrecognized or empty input is `Unknown`.
pub fn normalize(raw: &str) -> ModuleKind {
    let key = matching_key(raw);
    if key.is_empty() {
        return ModuleKind::Unknown;
    }

    ModuleKind::KNOWN
        .iter()
        .map(|kind| (kind.as_str(), *kind))
        .chain(ALIASES.iter().copied())
        .find(|(name, _)| matching_key(name) == key)
        .map(|(_, kind)| kind)
        .unwrap_or(ModuleKind::Unknown)
}

fn matching_key(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}
