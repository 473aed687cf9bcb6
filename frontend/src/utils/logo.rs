use crate::config::ThemeConfig;
use crate::state::theme::ThemeMode;

pub const CACHE_BUST_PARAM: &str = "v";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconTokens {
    pub light: String,
    pub dark: String,
}

impl IconTokens {
    pub fn from_config(config: &ThemeConfig) -> Self {
        Self {
            light: config.light_token.clone(),
            dark: config.dark_token.clone(),
        }
    }

    pub fn for_mode(&self, mode: ThemeMode) -> &str {
        match mode {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
        }
    }
}

/// Rewrites `src` to reference the logo variant for `mode`.
///
/// Only the first token occurrence is replaced; the rest of the path is kept
/// byte for byte. Returns `None` when the path carries neither token.
pub fn swap_icon_token(
    src: &str,
    tokens: &IconTokens,
    mode: ThemeMode,
    cache_stamp: Option<i64>,
) -> Option<String> {
    let (start, len) = [tokens.light.as_str(), tokens.dark.as_str()]
        .into_iter()
        .filter_map(|token| src.find(token).map(|at| (at, token.len())))
        .min_by_key(|(at, _)| *at)?;

    let mut swapped = String::with_capacity(src.len() + 16);
    swapped.push_str(&src[..start]);
    swapped.push_str(tokens.for_mode(mode));
    swapped.push_str(&src[start + len..]);

    Some(match cache_stamp {
        Some(stamp) => with_cache_bust(&swapped, stamp),
        None => swapped,
    })
}

/// Sets `v=<stamp>` on the URL, replacing an earlier stamp so repeated swaps
/// do not pile parameters up.
pub fn with_cache_bust(url: &str, stamp: i64) -> String {
    let (rest, fragment) = match url.find('#') {
        Some(at) => url.split_at(at),
        None => (url, ""),
    };
    let (path, query) = match rest.find('?') {
        Some(at) => (&rest[..at], &rest[at + 1..]),
        None => (rest, ""),
    };

    let prefix = format!("{}=", CACHE_BUST_PARAM);
    let mut params: Vec<String> = query
        .split('&')
        .filter(|param| {
            !param.is_empty() && *param != CACHE_BUST_PARAM && !param.starts_with(&prefix)
        })
        .map(str::to_string)
        .collect();
    params.push(format!("{}{}", prefix, stamp));

    format!("{}?{}{}", path, params.join("&"), fragment)
}
