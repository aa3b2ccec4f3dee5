use crate::compat::Vec;

/// Ad-tag parameters offered for quick insertion, in display order.
pub const DEFAULT_SUGGESTIONS: &[&str] = &[
    "url",
    "vpmute",
    "plcmt",
    "wta",
    "gdpr",
    "addtl_consent",
    "gdpr_consent",
    "max_ad_duration",
    "min_ad_duration",
    "cust_params",
    "rdid",
    "idtype",
    "an",
    "msid",
];

/// Default suggestions whose key is not already among `current_keys`.
pub fn available_suggestions<'a, I>(current_keys: I) -> Vec<&'static str>
where
    I: IntoIterator<Item = &'a str>,
{
    let current: Vec<&str> = current_keys.into_iter().collect();
    DEFAULT_SUGGESTIONS
        .iter()
        .copied()
        .filter(|suggestion| !current.contains(suggestion))
        .collect()
}
