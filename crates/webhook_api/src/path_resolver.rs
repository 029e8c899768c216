//! Translation of media source paths into the paths the media server uses.

use autoscan_common::RemapRule;

/// Remap `path` with a service's ordered rules.
///
/// Every rule is a first-occurrence replacement against the *unmodified* `path`; rules do not
/// compose, so only the last rule in the list decides the result. A rule whose `from` does not
/// occur leaves `path` unchanged. No rules means no remapping.
pub fn remap(path: &str, rules: &[RemapRule]) -> String {
    match rules.last() {
        Some(rule) => path.replacen(&rule.from, &rule.to, 1),
        None => String::from(path),
    }
}
