use std::path::{Path, PathBuf};

use crate::client::ClientConfig;
use crate::error::{BartError, Result};

pub(crate) const DEFAULT_URL: &str = "https://api.bart.gov/api";

#[derive(Debug, Default, PartialEq)]
struct RcConfig {
    url: Option<String>,
    key: Option<String>,
    verify: Option<bool>,
}

/// Resolve client settings: explicit arguments, then `BART_API_URL` /
/// `BART_API_KEY`, then the first rc file found.
pub(crate) fn load_config(
    url: Option<String>,
    key: Option<String>,
    verify: Option<bool>,
) -> Result<ClientConfig> {
    let mut url = url.or_else(|| std::env::var("BART_API_URL").ok());
    let mut key = key.or_else(|| std::env::var("BART_API_KEY").ok());

    let rc_candidates = rc_candidates();
    let mut file_verify: Option<bool> = None;

    if url.is_none() || key.is_none() || verify.is_none() {
        if let Some(rc_path) = rc_candidates.iter().find(|p| p.exists()) {
            let cfg = read_rc(rc_path)?;
            url = url.or(cfg.url);
            key = key.or(cfg.key);
            file_verify = cfg.verify;
        }
    }

    let key = key.filter(|k| !k.trim().is_empty()).ok_or_else(|| {
        let searched = rc_candidates
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        BartError::Config(if searched.is_empty() {
            "missing key (set BART_API_KEY or create .bartrc)".to_string()
        } else {
            format!("missing key (set BART_API_KEY or put `key:` in one of: {searched})")
        })
    })?;

    Ok(ClientConfig {
        url: url.unwrap_or_else(|| DEFAULT_URL.to_string()),
        key: key.trim().to_string(),
        verify: verify.or(file_verify).unwrap_or(true),
    })
}

fn read_rc(path: &Path) -> Result<RcConfig> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        BartError::Config(format!(
            "failed to read configuration file {}: {e}",
            path.display()
        ))
    })?;
    Ok(parse_rc(&text))
}

fn parse_rc(text: &str) -> RcConfig {
    let mut cfg = RcConfig::default();

    // `key:` may stand alone with its value on the following line.
    let mut pending_key: Option<&str> = None;

    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(pk) = pending_key.take() {
            if !line.contains(':') {
                let v = strip_quotes(line).to_string();
                match pk {
                    "url" => cfg.url = Some(v),
                    "key" => cfg.key = Some(v),
                    _ => {}
                }
                continue;
            }
        }

        // URLs contain ':' themselves; only the first one separates the field.
        if let Some((k, v)) = line.split_once(':') {
            let v = strip_quotes(v.trim());
            match k.trim() {
                field @ ("url" | "key") if v.is_empty() => pending_key = Some(field),
                "url" => cfg.url = Some(v.to_string()),
                "key" => cfg.key = Some(v.to_string()),
                "verify" if !v.is_empty() => cfg.verify = Some(v != "0"),
                _ => {}
            }
        }
    }

    cfg
}

fn strip_quotes(s: &str) -> &str {
    let s = s.trim();
    if s.len() >= 2
        && ((s.starts_with('"') && s.ends_with('"')) || (s.starts_with('\'') && s.ends_with('\'')))
    {
        &s[1..s.len() - 1]
    } else {
        s
    }
}

fn rc_candidates() -> Vec<PathBuf> {
    // BART_RC wins outright; otherwise ./.bartrc, then ~/.bartrc.
    if let Ok(p) = std::env::var("BART_RC") {
        return vec![PathBuf::from(p)];
    }

    let mut v = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        v.push(cwd.join(".bartrc"));
    }
    if let Some(home) = dirs::home_dir() {
        v.push(home.join(".bartrc"));
    }
    v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_inline_values() {
        let cfg = parse_rc(
            "# BART credentials\nurl: https://api.bart.gov/api\nkey: 'MW9S-E7SL-26DU-VV8V'\nverify: 0\n",
        );
        assert_eq!(
            cfg,
            RcConfig {
                url: Some("https://api.bart.gov/api".to_string()),
                key: Some("MW9S-E7SL-26DU-VV8V".to_string()),
                verify: Some(false),
            }
        );
    }

    #[test]
    fn parses_value_on_next_line() {
        let cfg = parse_rc("key:\n  \"ABCD-1234\"\n");
        assert_eq!(cfg.key.as_deref(), Some("ABCD-1234"));
        assert_eq!(cfg.url, None);
    }

    #[test]
    fn ignores_unknown_fields() {
        let cfg = parse_rc("colour: blue\nverify: 1\n");
        assert_eq!(cfg.verify, Some(true));
        assert_eq!(cfg.key, None);
    }

    #[test]
    fn explicit_arguments_win() {
        let cfg = load_config(
            Some("http://localhost:9999".to_string()),
            Some(" abc ".to_string()),
            Some(false),
        )
        .unwrap();
        assert_eq!(cfg.url, "http://localhost:9999");
        assert_eq!(cfg.key, "abc");
        assert!(!cfg.verify);
    }

    #[test]
    fn strip_quotes_handles_short_input() {
        assert_eq!(strip_quotes("\""), "\"");
        assert_eq!(strip_quotes("''"), "");
        assert_eq!(strip_quotes("plain"), "plain");
    }
}
