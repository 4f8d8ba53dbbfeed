//! Key path to environment variable name conversion.

/// Substitutions applied, in order, to every key segment.
///
/// `_` and `-` are dropped before `.` is turned into `_`, so the separators
/// introduced for dotted keys survive.
const REPLACEMENTS: [(&str, &str); 3] = [("_", ""), ("-", ""), (".", "_")];

/// Convert a single YAML key into its environment variable form.
///
/// `other_key` becomes `OTHERKEY`, `configuration.key` becomes
/// `CONFIGURATION_KEY`.
pub fn segment_to_name(segment: &str) -> String {
    REPLACEMENTS
        .iter()
        .fold(segment.to_string(), |name, &(from, to)| name.replace(from, to))
        .to_ascii_uppercase()
}

/// Convert a full key path into one environment variable name.
///
/// Each segment is converted with [`segment_to_name`] and the results are
/// joined with `_`.
pub fn path_to_name<S: AsRef<str>>(path: &[S]) -> String {
    path.iter()
        .map(|segment| segment_to_name(segment.as_ref()))
        .collect::<Vec<_>>()
        .join("_")
}
