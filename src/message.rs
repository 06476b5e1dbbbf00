//! In-memory representation of a single Syslog message.

use chrono::{DateTime, FixedOffset};

use crate::facility::Facility;
use crate::severity::Severity;
use crate::structured_data::StructuredElement;

const BOM: char = '\u{feff}';

/// A RFC5424-protocol syslog message.
///
/// Borrows from the line it was parsed from. Optional fields that were
/// written as the NILVALUE `-` are `None`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Message<'a> {
    pub prival: u8,
    pub version: u16,
    pub timestamp: DateTime<FixedOffset>,
    pub hostname: Option<&'a str>,
    pub app_name: Option<&'a str>,
    pub procid: Option<&'a str>,
    pub msgid: Option<&'a str>,
    /// `None` for `-`, otherwise at least one element.
    pub structured_data: Option<Vec<StructuredElement<'a>>>,
    pub msg: Option<&'a str>,
}

impl<'a> Message<'a> {
    /// `prival / 8`
    pub fn facility(&self) -> u8 {
        self.prival >> 3
    }

    /// `prival % 8`
    pub fn severity(&self) -> u8 {
        self.prival & 0x7
    }

    /// The facility by name. Only `None` if `prival` was set above 191 by hand.
    pub fn facility_kind(&self) -> Option<Facility> {
        Facility::from_code(self.facility())
    }

    pub fn severity_kind(&self) -> Option<Severity> {
        Severity::from_code(self.severity())
    }

    /// PROCID as a process id, when it is numeric.
    pub fn pid(&self) -> Option<u32> {
        self.procid.and_then(|procid| procid.parse().ok())
    }

    /// First structured-data element with the given id.
    pub fn element(&self, id: &str) -> Option<&StructuredElement<'a>> {
        self.structured_data
            .as_deref()
            .and_then(|elements| elements.iter().find(|element| element.id == id))
    }

    /// Whether MSG starts with a UTF-8 byte order mark.
    pub fn has_bom(&self) -> bool {
        self.msg.is_some_and(|msg| msg.starts_with(BOM))
    }

    /// MSG without its leading byte order mark, if any.
    pub fn text(&self) -> Option<&'a str> {
        self.msg.map(|msg| msg.strip_prefix(BOM).unwrap_or(msg))
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use chrono::TimeZone;

    use super::*;

    fn message(prival: u8) -> Message<'static> {
        Message {
            prival,
            version: 1,
            timestamp: FixedOffset::east_opt(0)
                .unwrap()
                .with_ymd_and_hms(2003, 10, 11, 22, 14, 15)
                .unwrap(),
            hostname: None,
            app_name: None,
            procid: None,
            msgid: None,
            structured_data: None,
            msg: None,
        }
    }

    #[test]
    fn priority() {
        for prival in 0..=191u8 {
            let msg = message(prival);
            assert_eq!(msg.facility() * 8 + msg.severity(), prival);
            assert!(msg.facility_kind().is_some());
            assert!(msg.severity_kind().is_some());
        }

        let msg = message(165);
        assert_eq!(msg.facility_kind(), Some(Facility::LOCAL4));
        assert_eq!(msg.severity_kind(), Some(Severity::NOTICE));
    }

    #[test]
    fn pid() {
        let mut msg = message(34);
        assert_eq!(msg.pid(), None);
        msg.procid = Some("8710");
        assert_eq!(msg.pid(), Some(8710));
        msg.procid = Some("web.3");
        assert_eq!(msg.pid(), None);
    }

    #[test]
    fn bom() {
        let mut msg = message(34);
        assert!(!msg.has_bom());
        assert_eq!(msg.text(), None);

        msg.msg = Some("\u{feff}'su root' failed");
        assert!(msg.has_bom());
        assert_eq!(msg.text(), Some("'su root' failed"));

        msg.msg = Some("plain");
        assert!(!msg.has_bom());
        assert_eq!(msg.text(), Some("plain"));
    }

    #[test]
    fn element_lookup() {
        let mut msg = message(165);
        assert!(msg.element("origin").is_none());

        msg.structured_data = Some(vec![
            StructuredElement {
                id: "meta",
                params: vec![("sequenceId", Cow::Borrowed("1"))],
            },
            StructuredElement {
                id: "origin",
                params: vec![("ip", Cow::Borrowed("192.0.2.1"))],
            },
        ]);
        let origin = msg.element("origin").expect("origin element");
        assert_eq!(origin.get("ip"), Some("192.0.2.1"));
    }
}
