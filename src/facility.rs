/// The subsystem a message came from, the upper five bits of PRIVAL.
///
/// Codes follow the table in RFC 5424 section 6.2.1; the lowercase names
/// returned by [`Facility::as_str`] are the ones syslog.conf selectors use.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Ord, PartialOrd, Hash)]
#[allow(non_camel_case_types)]
pub enum Facility {
    KERN = 0,
    USER = 1,
    MAIL = 2,
    DAEMON = 3,
    AUTH = 4,
    SYSLOG = 5,
    LPR = 6,
    NEWS = 7,
    UUCP = 8,
    CRON = 9,
    AUTHPRIV = 10,
    FTP = 11,
    NTP = 12,
    AUDIT = 13,
    ALERT = 14,
    CLOCKD = 15,
    LOCAL0 = 16,
    LOCAL1 = 17,
    LOCAL2 = 18,
    LOCAL3 = 19,
    LOCAL4 = 20,
    LOCAL5 = 21,
    LOCAL6 = 22,
    LOCAL7 = 23,
}

// Indexed by facility code.
const FACILITIES: [Facility; 24] = [
    Facility::KERN,
    Facility::USER,
    Facility::MAIL,
    Facility::DAEMON,
    Facility::AUTH,
    Facility::SYSLOG,
    Facility::LPR,
    Facility::NEWS,
    Facility::UUCP,
    Facility::CRON,
    Facility::AUTHPRIV,
    Facility::FTP,
    Facility::NTP,
    Facility::AUDIT,
    Facility::ALERT,
    Facility::CLOCKD,
    Facility::LOCAL0,
    Facility::LOCAL1,
    Facility::LOCAL2,
    Facility::LOCAL3,
    Facility::LOCAL4,
    Facility::LOCAL5,
    Facility::LOCAL6,
    Facility::LOCAL7,
];

const NAMES: [&str; 24] = [
    "kern", "user", "mail", "daemon", "auth", "syslog", "lpr", "news", "uucp", "cron",
    "authpriv", "ftp", "ntp", "audit", "alert", "clockd", "local0", "local1", "local2",
    "local3", "local4", "local5", "local6", "local7",
];

impl Facility {
    /// Look up the facility for `prival >> 3`.
    pub fn from_code(code: u8) -> Option<Self> {
        FACILITIES.get(code as usize).copied()
    }

    /// The numeric code used on the wire.
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn as_str(self) -> &'static str {
        NAMES[self as usize]
    }
}

impl TryFrom<u8> for Facility {
    type Error = u8;

    /// Fails with the offending code when it is above 23.
    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Facility::from_code(code).ok_or(code)
    }
}

#[cfg(test)]
mod tests {
    use super::Facility;

    #[test]
    fn names() {
        assert_eq!(Facility::KERN.as_str(), "kern");
        assert_eq!(Facility::AUTHPRIV.as_str(), "authpriv");
        assert_eq!(Facility::CLOCKD.as_str(), "clockd");
        assert_eq!(Facility::LOCAL4.as_str(), "local4");
        assert_eq!(Facility::LOCAL7.as_str(), "local7");
    }

    #[test]
    fn codes() {
        for code in 0..24u8 {
            let fac = Facility::from_code(code).expect("codes 0..24 are valid");
            assert_eq!(fac.code(), code);
        }
        assert_eq!(Facility::from_code(24), None);
    }

    #[test]
    fn try_from_code() {
        assert_eq!(Facility::try_from(4u8), Ok(Facility::AUTH));
        assert_eq!(Facility::try_from(23u8), Ok(Facility::LOCAL7));
        assert_eq!(Facility::try_from(24u8), Err(24));
    }
}
