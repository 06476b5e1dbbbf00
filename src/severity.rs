/// Syslog Severities from RFC 5424.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(non_camel_case_types)]
pub enum Severity {
    EMERG = 0,
    ALERT = 1,
    CRIT = 2,
    ERR = 3,
    WARNING = 4,
    NOTICE = 5,
    INFO = 6,
    DEBUG = 7,
}

impl Severity {
    /// Convert a severity code (`prival & 7`) into a `Severity`
    pub fn from_code(code: u8) -> Option<Self> {
        let severity = match code {
            0 => Severity::EMERG,
            1 => Severity::ALERT,
            2 => Severity::CRIT,
            3 => Severity::ERR,
            4 => Severity::WARNING,
            5 => Severity::NOTICE,
            6 => Severity::INFO,
            7 => Severity::DEBUG,
            _ => return None,
        };

        Some(severity)
    }

    /// The numeric code used on the wire.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Convert a syslog severity into a unique string representation
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::EMERG => "emerg",
            Severity::ALERT => "alert",
            Severity::CRIT => "crit",
            Severity::ERR => "err",
            Severity::WARNING => "warning",
            Severity::NOTICE => "notice",
            Severity::INFO => "info",
            Severity::DEBUG => "debug",
        }
    }
}

impl TryFrom<u8> for Severity {
    type Error = u8;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Severity::from_code(code).ok_or(code)
    }
}

#[cfg(test)]
mod tests {
    use super::Severity;

    #[test]
    fn deref() {
        assert_eq!(Severity::EMERG.as_str(), "emerg");
        assert_eq!(Severity::ALERT.as_str(), "alert");
        assert_eq!(Severity::CRIT.as_str(), "crit");
        assert_eq!(Severity::ERR.as_str(), "err");
        assert_eq!(Severity::WARNING.as_str(), "warning");
        assert_eq!(Severity::NOTICE.as_str(), "notice");
        assert_eq!(Severity::INFO.as_str(), "info");
        assert_eq!(Severity::DEBUG.as_str(), "debug");
    }

    #[test]
    fn codes() {
        assert_eq!(Severity::from_code(2), Some(Severity::CRIT));
        assert_eq!(Severity::NOTICE.code(), 5);
        assert_eq!(Severity::from_code(8), None);
    }

    #[test]
    fn try_from_code() {
        assert_eq!(Severity::try_from(0u8), Ok(Severity::EMERG));
        assert_eq!(Severity::try_from(7u8), Ok(Severity::DEBUG));
        assert_eq!(Severity::try_from(8u8), Err(8));
    }
}
