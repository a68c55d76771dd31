use crate::{Env, KeyValue, RUNTIME_MARKER, SERVICE_TYPE_ENV};

/// Result of decoding a container environment.
#[derive(Debug, Default)]
pub struct DecodedEnv<'a> {
    /// Recovered variables, without the runtime sentinel.
    pub env: Env,
    /// Entries that are not of the form `KEY=VALUE`.
    pub skipped: Vec<&'a str>,
}

/// Encode a runtime environment as container `KEY=VALUE` entries.
///
/// A caller-supplied `SERVICE_TYPE` is replaced by the runtime sentinel,
/// which is always the last entry and always present exactly once.
pub fn encode_env(env: &Env) -> Vec<String> {
    let mut entries: Vec<String> = env
        .iter()
        .filter(|(key, _)| *key != SERVICE_TYPE_ENV)
        .map(|(key, value)| KeyValue::new(key, value).to_entry())
        .collect();
    entries.push(KeyValue::new(SERVICE_TYPE_ENV, RUNTIME_MARKER).to_entry());
    entries
}

/// Decode container `KEY=VALUE` entries back into a runtime environment.
///
/// The runtime sentinel is stripped. Malformed entries are collected in
/// [`DecodedEnv::skipped`] instead of failing the decode.
pub fn decode_env<'a, I>(entries: I) -> DecodedEnv<'a>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out = DecodedEnv::default();
    for entry in entries {
        match KeyValue::parse_entry(entry) {
            Some(kv) if kv.key() == SERVICE_TYPE_ENV && kv.value() == RUNTIME_MARKER => {}
            Some(kv) => {
                let (key, value) = kv.into_parts();
                out.env.insert(key, value);
            }
            None => out.skipped.push(entry),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentinel_count(entries: &[String]) -> usize {
        entries
            .iter()
            .filter(|e| e.as_str() == "SERVICE_TYPE=runtime")
            .count()
    }

    #[test]
    fn empty_env_still_gets_sentinel() {
        let entries = encode_env(&Env::new());
        assert_eq!(entries, vec!["SERVICE_TYPE=runtime"]);
    }

    #[test]
    fn sentinel_is_present_exactly_once() {
        let cases: Vec<Env> = vec![
            Env::new(),
            [("FOO", "bar")].into_iter().collect(),
            [("SERVICE_TYPE", "runtime")].into_iter().collect(),
            [("SERVICE_TYPE", "gateway"), ("A", "b")].into_iter().collect(),
        ];

        for env in cases {
            let entries = encode_env(&env);
            assert_eq!(sentinel_count(&entries), 1, "env: {env:?}");
            assert!(!entries.iter().any(|e| e == "SERVICE_TYPE=gateway"));
            assert_eq!(entries.last().map(String::as_str), Some("SERVICE_TYPE=runtime"));
        }
    }

    #[test]
    fn encode_keeps_caller_entries() {
        let env: Env = [("FOO", "bar"), ("OPTS", "-Da=b")].into_iter().collect();
        let entries = encode_env(&env);
        assert_eq!(entries, vec!["FOO=bar", "OPTS=-Da=b", "SERVICE_TYPE=runtime"]);
    }

    #[test]
    fn decode_strips_sentinel_and_keeps_values_with_separator() {
        let raw = ["FOO=bar", "OPTS=-Da=b", "SERVICE_TYPE=runtime"];
        let decoded = decode_env(raw);

        assert!(decoded.skipped.is_empty());
        assert_eq!(decoded.env.len(), 2);
        assert_eq!(decoded.env.get("FOO"), Some("bar"));
        assert_eq!(decoded.env.get("OPTS"), Some("-Da=b"));
        assert!(!decoded.env.contains_key("SERVICE_TYPE"));
    }

    #[test]
    fn decode_keeps_foreign_service_type() {
        let decoded = decode_env(["SERVICE_TYPE=gateway"]);
        assert_eq!(decoded.env.get("SERVICE_TYPE"), Some("gateway"));
    }

    #[test]
    fn decode_reports_malformed_entries() {
        let decoded = decode_env(["GOOD=1", "garbage", "=nokey"]);
        assert_eq!(decoded.env.get("GOOD"), Some("1"));
        assert_eq!(decoded.skipped, vec!["garbage", "=nokey"]);
    }

    #[test]
    fn encode_then_decode_recovers_env() {
        let env: Env = [("A", "1"), ("B", "x=y"), ("C", "")].into_iter().collect();
        let entries = encode_env(&env);
        let decoded = decode_env(entries.iter().map(String::as_str));
        assert_eq!(decoded.env, env);
    }
}
