//! # Tooling payload decoder.
//!
//! The broker sends its plugin list as a JSON array serialized *into a string*
//! field, because descriptor fields do not fit the notification's typed params.
//! This module turns that string back into [`PluginDescriptor`]s.
//!
//! ## Rules
//! - absent or empty input → `None`, not an error
//! - the JSON literal `null` → `None`, not an error
//! - anything else must be a JSON array of objects, otherwise the whole payload is
//!   rejected (no partial lists)
//! - no retries

use crate::broker::PluginDescriptor;
use crate::error::RelayError;
use crate::observers::RelayObserver;

/// Decodes a tooling payload, returning the cause on failure.
///
/// `Ok(None)` means there was nothing to decode.
pub fn try_decode_tooling(raw: Option<&str>) -> Result<Option<Vec<PluginDescriptor>>, RelayError> {
    match raw {
        None | Some("") => Ok(None),
        Some(s) => serde_json::from_str::<Option<Vec<PluginDescriptor>>>(s)
            .map_err(|source| RelayError::Decode { source }),
    }
}

/// Decodes a tooling payload, reporting failures to `observer` and degrading to `None`.
pub fn decode_tooling(
    raw: Option<&str>,
    observer: &dyn RelayObserver,
) -> Option<Vec<PluginDescriptor>> {
    match try_decode_tooling(raw) {
        Ok(decoded) => decoded,
        Err(err) => {
            observer.on_decode_failed(raw.unwrap_or_default(), &err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::broker::InboundStatusMessage;
    use crate::events::EventKind;

    #[derive(Default)]
    struct Failures(Mutex<Vec<String>>);

    impl RelayObserver for Failures {
        fn on_dropped(&self, _: EventKind, _: &InboundStatusMessage, _: &RelayError) {}

        fn on_decode_failed(&self, raw: &str, _: &RelayError) {
            self.0.lock().unwrap().push(raw.to_string());
        }
    }

    #[test]
    fn test_absent_and_empty_are_none() {
        let obs = Failures::default();
        assert_eq!(decode_tooling(None, &obs), None);
        assert_eq!(decode_tooling(Some(""), &obs), None);
        assert!(obs.0.lock().unwrap().is_empty());
    }

    #[test]
    fn test_json_null_is_none_without_report() {
        let obs = Failures::default();
        assert_eq!(try_decode_tooling(Some("null")).unwrap(), None);
        assert_eq!(decode_tooling(Some("null"), &obs), None);
        assert!(obs.0.lock().unwrap().is_empty());
    }

    #[test]
    fn test_order_is_preserved() {
        let out = try_decode_tooling(Some(r#"[{"id":"b"},{"id":"a"}]"#))
            .unwrap()
            .unwrap();
        let ids: Vec<_> = out.iter().map(|d| d.id()).collect();
        assert_eq!(ids, vec![Some("b"), Some("a")]);
    }

    #[test]
    fn test_empty_array_is_some_empty() {
        assert_eq!(try_decode_tooling(Some("[]")).unwrap(), Some(Vec::new()));
    }

    #[test]
    fn test_malformed_is_reported() {
        let obs = Failures::default();
        assert_eq!(decode_tooling(Some("{not json"), &obs), None);
        assert_eq!(*obs.0.lock().unwrap(), vec!["{not json".to_string()]);
    }

    #[test]
    fn test_no_partial_lists() {
        let err = try_decode_tooling(Some(r#"[{"id":"p1"}, 42]"#)).unwrap_err();
        assert_eq!(err.as_label(), "tooling_decode_failed");
    }

    #[test]
    fn test_whitespace_is_not_empty() {
        assert!(try_decode_tooling(Some("  ")).is_err());
    }
}
