//! Parser for [RFC 5424](https://tools.ietf.org/html/rfc5424) Syslog messages. Not to be confused
//! with the older [RFC 3164](https://tools.ietf.org/html/rfc3164) BSD Syslog protocol, which many
//! systems still emit and which is not supported here.
//!
//! Structured data is fully supported: param values come back unescaped,
//! and timestamps keep both their sub-second precision and the offset they
//! were written with.
//!
//! Usually, you'll just call [`parse_message`] with one line of text, or
//! build a [`Parser`] when you need to accept senders that leave the
//! STRUCTURED-DATA field out.
//!
//! # Example
//!
//! A simple syslog server
//!
//! ```no_run
//! use std::net::UdpSocket;
//! use std::str;
//!
//! let s = UdpSocket::bind("127.0.0.1:10514").unwrap();
//! let parser = syslog5424::Parser::new();
//! let mut buf = [0u8; 2048];
//! loop {
//!     let (data_read, _) = s.recv_from(&mut buf).unwrap();
//!     let line = str::from_utf8(&buf[..data_read]).unwrap().trim_end_matches('\n');
//!     match parser.parse(line) {
//!         Ok(msg) => println!("{} {} {:?} {:?}", msg.facility(), msg.severity(), msg.hostname, msg.msg),
//!         Err(err) => eprintln!("{err}"),
//!     }
//! }
//! ```
//!
//! # Unimplemented Features
//!
//!  * Theoretically, you can send arbitrary (non-unicode) bytes for the message part of a syslog
//!    message. Rust doesn't have a convenient way to only treat *some* of a buffer as utf-8,
//!    so only `&str` input is accepted.
//!  * The RFC length limits of HOSTNAME, APP-NAME, PROCID, MSGID and SD names are not enforced.
//!

mod error;
mod escape;
mod facility;
mod message;
mod parser;
pub mod rfc5424;
mod severity;
mod structured_data;
mod timestamp;

pub use error::ParseError;
pub use escape::{escape, unescape};
pub use facility::Facility;
pub use message::Message;
pub use parser::{Parser, ParserConfig};
pub use rfc5424::parse_message;
pub use severity::Severity;
pub use structured_data::StructuredElement;
pub use timestamp::parse_timestamp;
