//! The RFC 5424 grammar.
//!
//! ```text
//! SYSLOG-MSG      = HEADER SP STRUCTURED-DATA [SP MSG]
//! HEADER          = PRI VERSION SP TIMESTAMP SP HOSTNAME SP APP-NAME SP PROCID SP MSGID
//! STRUCTURED-DATA = NILVALUE / 1*SD-ELEMENT
//! SD-ELEMENT      = "[" SD-ID *(SP SD-PARAM) "]"
//! SD-PARAM        = PARAM-NAME "=" %d34 PARAM-VALUE %d34
//! ```
//!
//! A hand-written recursive descent parser. Each production takes the
//! input and a cursor `offset`; on success the cursor is moved past what
//! was consumed, on failure a `Mismatch` names the production and the
//! byte offset where it gave up.

use std::borrow::Cow;

use chrono::{DateTime, FixedOffset};

use crate::error::{MatchResult, Mismatch};
use crate::escape::unescape;
use crate::timestamp::timestamp;
use crate::{Message, ParseError, StructuredElement};

/// Top level production; named in every error for a rejected line.
pub(crate) const SYSLOG_MSG: &str = "HEADER SP STRUCTURED_DATA (SP MSG)?";

const NILVALUE: u8 = b'-';
const MAX_PRIVAL: u32 = 191;

struct Header<'a> {
    prival: u8,
    version: u16,
    timestamp: DateTime<FixedOffset>,
    hostname: Option<&'a str>,
    app_name: Option<&'a str>,
    procid: Option<&'a str>,
    msgid: Option<&'a str>,
}

impl<'a> Header<'a> {
    fn into_message(
        self,
        structured_data: Option<Vec<StructuredElement<'a>>>,
        msg: Option<&'a str>,
    ) -> Message<'a> {
        Message {
            prival: self.prival,
            version: self.version,
            timestamp: self.timestamp,
            hostname: self.hostname,
            app_name: self.app_name,
            procid: self.procid,
            msgid: self.msgid,
            structured_data,
            msg,
        }
    }
}

#[inline]
fn is_printusascii(ch: u8) -> bool {
    (33..=126).contains(&ch)
}

#[inline]
fn is_sd_name_char(ch: u8) -> bool {
    is_printusascii(ch) && ch != b'=' && ch != b']' && ch != b'"'
}

#[inline]
fn expect_char(
    buf: &[u8],
    offset: &mut usize,
    ch: u8,
    production: &'static str,
) -> MatchResult<()> {
    if buf.get(*offset) != Some(&ch) {
        return Err(Mismatch::new(production, *offset));
    }

    *offset += 1;
    Ok(())
}

#[inline]
fn sp(buf: &[u8], offset: &mut usize) -> MatchResult<()> {
    expect_char(buf, offset, b' ', "SP")
}

/// Take a non-empty run of bytes matching `f`.
fn take_while1<'a, F>(
    input: &'a str,
    offset: &mut usize,
    f: F,
    production: &'static str,
) -> MatchResult<&'a str>
where
    F: Fn(u8) -> bool,
{
    let start = *offset;
    let len = input.as_bytes()[start..]
        .iter()
        .take_while(|ch| f(**ch))
        .count();
    if len == 0 {
        return Err(Mismatch::new(production, start));
    }

    *offset = start + len;
    Ok(&input[start..start + len])
}

// https://datatracker.ietf.org/doc/html/rfc5424#section-6.2.1
fn pri(buf: &[u8], offset: &mut usize) -> MatchResult<u8> {
    expect_char(buf, offset, b'<', "PRI")?;

    let start = *offset;
    let mut prival = 0u32;
    while *offset - start < 3 {
        match buf.get(*offset) {
            Some(ch) if ch.is_ascii_digit() => prival = prival * 10 + (ch - b'0') as u32,
            _ => break,
        }
        *offset += 1;
    }
    if *offset == start || prival > MAX_PRIVAL {
        return Err(Mismatch::new("PRIVAL", start));
    }

    expect_char(buf, offset, b'>', "PRI")?;
    Ok(prival as u8)
}

// https://datatracker.ietf.org/doc/html/rfc5424#section-6.2.2
fn version(buf: &[u8], offset: &mut usize) -> MatchResult<u16> {
    let start = *offset;
    match buf.get(start) {
        Some(b'1'..=b'9') => (),
        _ => return Err(Mismatch::new("VERSION", start)),
    }

    let mut version = 0u16;
    while *offset - start < 3 {
        match buf.get(*offset) {
            Some(ch) if ch.is_ascii_digit() => version = version * 10 + (ch - b'0') as u16,
            _ => break,
        }
        *offset += 1;
    }

    Ok(version)
}

/// HOSTNAME, APP-NAME, PROCID and MSGID: NILVALUE or 1*PRINTUSASCII.
///
/// Only a token that is exactly `-` is the NILVALUE; `-web1west` is a value.
fn field<'a>(
    input: &'a str,
    offset: &mut usize,
    production: &'static str,
) -> MatchResult<Option<&'a str>> {
    let token = take_while1(input, offset, is_printusascii, production)?;
    if token.as_bytes() == [NILVALUE] {
        Ok(None)
    } else {
        Ok(Some(token))
    }
}

fn header<'a>(input: &'a str, offset: &mut usize) -> MatchResult<Header<'a>> {
    let buf = input.as_bytes();

    let prival = pri(buf, offset)?;
    let version = version(buf, offset)?;
    sp(buf, offset)?;
    let timestamp = timestamp(buf, offset)?;
    sp(buf, offset)?;
    let hostname = field(input, offset, "HOSTNAME")?;
    sp(buf, offset)?;
    let app_name = field(input, offset, "APP_NAME")?;
    sp(buf, offset)?;
    let procid = field(input, offset, "PROCID")?;
    sp(buf, offset)?;
    let msgid = field(input, offset, "MSGID")?;

    Ok(Header {
        prival,
        version,
        timestamp,
        hostname,
        app_name,
        procid,
        msgid,
    })
}

/// A quoted PARAM-VALUE; returns it unescaped.
///
/// Inside the quotes `"`, `\` and `]` must be escaped, so a bare `]` is a
/// mismatch and the first unescaped `"` ends the value.
fn param_value<'a>(input: &'a str, offset: &mut usize) -> MatchResult<Cow<'a, str>> {
    let buf = input.as_bytes();
    expect_char(buf, offset, b'"', "SD_PARAM")?;

    let start = *offset;
    let mut pos = start;
    while let Some(ch) = buf.get(pos) {
        match ch {
            b'\\' => match buf.get(pos + 1) {
                Some(b'"' | b'\\' | b']') => pos += 2,
                _ => pos += 1,
            },
            b'"' => {
                *offset = pos + 1;
                return Ok(unescape(&input[start..pos]));
            }
            b']' => return Err(Mismatch::new("PARAM_VALUE", pos)),
            _ => pos += 1,
        }
    }

    Err(Mismatch::new("PARAM_VALUE", buf.len()))
}

fn sd_param<'a>(input: &'a str, offset: &mut usize) -> MatchResult<(&'a str, Cow<'a, str>)> {
    let name = take_while1(input, offset, is_sd_name_char, "PARAM_NAME")?;
    expect_char(input.as_bytes(), offset, b'=', "SD_PARAM")?;
    let value = param_value(input, offset)?;

    Ok((name, value))
}

// example: [exampleSDID@32473 iut="3" eventSource="Application" eventID="1011"]
fn sd_element<'a>(input: &'a str, offset: &mut usize) -> MatchResult<StructuredElement<'a>> {
    let buf = input.as_bytes();
    expect_char(buf, offset, b'[', "SD_ELEMENT")?;

    let id = take_while1(input, offset, is_sd_name_char, "SD_ID")?;
    let mut params: Vec<(&str, Cow<str>)> = Vec::new();
    while buf.get(*offset) == Some(&b' ') {
        *offset += 1;

        let start = *offset;
        let (name, value) = sd_param(input, offset)?;
        if params.iter().any(|(existing, _)| *existing == name) {
            return Err(Mismatch::new("SD_PARAM", start));
        }
        params.push((name, value));
    }

    expect_char(buf, offset, b']', "SD_ELEMENT")?;
    Ok(StructuredElement { id, params })
}

fn structured_data<'a>(
    input: &'a str,
    offset: &mut usize,
) -> MatchResult<Option<Vec<StructuredElement<'a>>>> {
    let buf = input.as_bytes();
    match buf.get(*offset) {
        Some(&NILVALUE) => {
            *offset += 1;
            return Ok(None);
        }
        Some(b'[') => (),
        _ => return Err(Mismatch::new("STRUCTURED_DATA", *offset)),
    }

    // 4 is RawVec::MIN_NON_ZERO_CAP
    let mut elements = Vec::with_capacity(4);
    while buf.get(*offset) == Some(&b'[') {
        elements.push(sd_element(input, offset)?);
    }

    Ok(Some(elements))
}

/// Everything after the cursor, `None` when nothing is left.
fn msg<'a>(input: &'a str, offset: &mut usize) -> Option<&'a str> {
    let rest = &input[*offset..];
    *offset = input.len();
    if rest.is_empty() {
        None
    } else {
        Some(rest)
    }
}

/// `HEADER SP STRUCTURED-DATA (SP MSG)?`
fn syslog_msg(input: &str) -> MatchResult<Message<'_>> {
    let buf = input.as_bytes();
    let mut offset = 0;

    let header = header(input, &mut offset)?;
    sp(buf, &mut offset)?;
    let structured_data = structured_data(input, &mut offset)?;
    let msg = if offset < buf.len() {
        sp(buf, &mut offset)?;
        msg(input, &mut offset)
    } else {
        None
    };

    Ok(header.into_message(structured_data, msg))
}

/// `HEADER SP MSG`, the fallback for senders that leave STRUCTURED-DATA
/// out instead of writing `-`.
fn syslog_msg_relaxed(input: &str) -> MatchResult<Message<'_>> {
    let mut offset = 0;

    let header = header(input, &mut offset)?;
    sp(input.as_bytes(), &mut offset)?;
    let msg = msg(input, &mut offset);

    Ok(header.into_message(None, msg))
}

/// Match a whole line. The strict production is always tried first; the
/// relaxed one only when it fails and `allow_missing_structured_data` is set.
pub(crate) fn parse(
    input: &str,
    allow_missing_structured_data: bool,
) -> Result<Message<'_>, ParseError> {
    let mismatch = match syslog_msg(input) {
        Ok(message) => return Ok(message),
        Err(strict) if allow_missing_structured_data => match syslog_msg_relaxed(input) {
            Ok(message) => return Ok(message),
            // report whichever alternative got further
            Err(relaxed) if relaxed.offset > strict.offset => relaxed,
            Err(_) => strict,
        },
        Err(strict) => strict,
    };

    Err(ParseError::at(input, Mismatch::new(SYSLOG_MSG, 0))
        .caused_by(ParseError::at(input, mismatch)))
}

/// Parse a line into a `Message` object
///
/// # Arguments
///
///  * `input`: one line, without its trailing newline
///
/// # Returns
///
///  * `ParseError` if the line is not an RFC5424 message
///
/// # Example
///
/// ```
/// use syslog5424::rfc5424::parse_message;
///
/// let message = parse_message("<78>1 2016-01-15T00:04:01+00:00 host1 CROND 10391 - [meta sequenceId=\"29\"] some_message").unwrap();
///
/// assert!(message.hostname.unwrap() == "host1");
/// ```
pub fn parse_message(input: &str) -> Result<Message<'_>, ParseError> {
    parse(input, false)
}
