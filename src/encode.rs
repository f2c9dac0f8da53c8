//! Reply-payload encoding.
//!
//! Every reply datagram carries the same two-part message: the sender's IP
//! address rendered as text, immediately followed (no separator) by the
//! current UNIX timestamp in decimal.  This module is responsible for:
//! - Building that plain-text message from an address string and a timestamp.
//! - Encoding each byte of it as an 8-character '0'/'1' group, MSB first.
//! - Joining the groups with single spaces, except that the group ending the
//!   IP-address portion and the final group are each followed by a line break.
//! - Decoding a well-formed encoded message back into its raw bytes.
//!
//! No I/O happens here — this is pure data transformation.
//!
//! # Wire format
//!
//! ```text
//! 00110001 00111001 00111000 ... 00110111\n
//! 00110001 00110111 ... 00110000\n
//! ```
//!
//! First line: one octet group per byte of the IP-address text.
//! Second line: one octet group per decimal digit of the timestamp.
//! The message always ends with a trailing line break.
//!
//! Addresses are assumed to render as plain ASCII (dotted-decimal IPv4 or
//! simple IPv6 text), so byte indices and character indices coincide.

use thiserror::Error;

/// A reply in both its human-readable and on-wire forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyPayload {
    /// IP-address text directly followed by the decimal timestamp.
    pub plain: String,
    /// Space/line-break separated octet groups; this is what goes on the wire.
    pub encoded: String,
}

impl ReplyPayload {
    /// Build the reply for a sender addressed by `ip` at time `unix_seconds`.
    pub fn build(ip: &str, unix_seconds: u64) -> Self {
        let plain = format!("{ip}{unix_seconds}");
        let encoded = encode_octets(plain.as_bytes(), ip.len());
        Self { plain, encoded }
    }
}

/// Encode `data` as octet groups, breaking the line after the group at index
/// `ip_len - 1` and after the final group; all other separators are a single
/// space.
///
/// When both break conditions land on the same byte (possible only if the
/// message is all address and no timestamp) a single line break is emitted.
pub fn encode_octets(data: &[u8], ip_len: usize) -> String {
    use std::fmt::Write as _;

    // 8 digit characters plus one separator per byte.
    let mut out = String::with_capacity(data.len() * 9);
    for (i, byte) in data.iter().enumerate() {
        let _ = write!(out, "{byte:08b}");
        out.push(if i + 1 == ip_len || i + 1 == data.len() {
            '\n'
        } else {
            ' '
        });
    }
    out
}

/// Decode an octet-group message back into the raw bytes it encodes.
///
/// Splitting tolerates any mix of space and line-break separators, so this
/// inverts [`encode_octets`] regardless of where the line breaks fell.
pub fn decode_octets(encoded: &str) -> Result<Vec<u8>, DecodeError> {
    encoded
        .split_whitespace()
        .map(|group| {
            if group.len() != 8 {
                return Err(DecodeError::BadGroupLength(group.to_owned()));
            }
            group.bytes().try_fold(0u8, |acc, digit| match digit {
                b'0' => Ok(acc << 1),
                b'1' => Ok(acc << 1 | 1),
                _ => Err(DecodeError::BadDigit(group.to_owned())),
            })
        })
        .collect()
}

/// Errors that can arise when parsing an encoded message.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// A group was not exactly 8 characters long.
    #[error("octet group '{0}' is not 8 characters")]
    BadGroupLength(String),
    /// A group contained a character other than '0' or '1'.
    #[error("octet group '{0}' contains a non-binary digit")]
    BadDigit(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_byte_encodes_msb_first() {
        // 'a' = 0x61 = 0110_0001
        assert_eq!(encode_octets(b"a", 1), "01100001\n");
    }

    #[test]
    fn zero_pads_to_eight_digits() {
        assert_eq!(encode_octets(&[1], 1), "00000001\n");
        assert_eq!(encode_octets(&[255], 1), "11111111\n");
    }

    #[test]
    fn line_break_after_ip_portion_and_after_last_group() {
        // "ab" is the address, "1" the timestamp digit.
        let encoded = encode_octets(b"ab1", 2);
        assert_eq!(encoded, "01100001 01100010\n00110001\n");
    }

    #[test]
    fn exactly_two_line_breaks_when_both_portions_nonempty() {
        let reply = ReplyPayload::build("10.0.0.1", 1_234_567_890);
        assert_eq!(reply.encoded.matches('\n').count(), 2);
        assert!(reply.encoded.ends_with('\n'));
    }

    #[test]
    fn all_other_separators_are_single_spaces() {
        let reply = ReplyPayload::build("10.0.0.1", 99);
        // plain is 10 bytes: 10 groups, 2 newlines, 8 spaces.
        assert_eq!(reply.plain.len(), 10);
        assert_eq!(reply.encoded.matches(' ').count(), 8);
        assert!(!reply.encoded.contains("  "));
        assert!(!reply.encoded.contains(" \n"));
        assert!(!reply.encoded.contains("\n "));
    }

    #[test]
    fn coinciding_break_indices_emit_one_separator() {
        // Degenerate case: the whole message is the address.
        let encoded = encode_octets(b"x", 1);
        assert_eq!(encoded, "01111000\n");
        assert_eq!(encoded.matches('\n').count(), 1);
    }

    #[test]
    fn build_concatenates_ip_and_timestamp_without_separator() {
        let reply = ReplyPayload::build("198.51.100.7", 1_700_000_000);
        assert_eq!(reply.plain, "198.51.100.71700000000");
    }

    #[test]
    fn scenario_known_address_and_time() {
        let reply = ReplyPayload::build("198.51.100.7", 1_700_000_000);

        let lines: Vec<&str> = reply.encoded.split_terminator('\n').collect();
        assert_eq!(lines.len(), 2);

        // 12 groups for "198.51.100.7", 10 for "1700000000".
        assert_eq!(lines[0].split(' ').count(), 12);
        assert_eq!(lines[1].split(' ').count(), 10);

        // ASCII codes of '1', '9', '8' open the first line.
        assert!(lines[0].starts_with("00110001 00111001 00111000"));
    }

    #[test]
    fn decode_inverts_encode() {
        let reply = ReplyPayload::build("192.0.2.33", 1_700_000_000);
        let decoded = decode_octets(&reply.encoded).unwrap();
        assert_eq!(decoded, reply.plain.as_bytes());
    }

    #[test]
    fn reencoding_decoded_bytes_is_identity() {
        let ip = "203.0.113.9";
        let reply = ReplyPayload::build(ip, 1_600_000_000);
        let decoded = decode_octets(&reply.encoded).unwrap();
        assert_eq!(encode_octets(&decoded, ip.len()), reply.encoded);
    }

    #[test]
    fn decode_rejects_short_group() {
        assert_eq!(
            decode_octets("0110001"),
            Err(DecodeError::BadGroupLength("0110001".into()))
        );
    }

    #[test]
    fn decode_rejects_non_binary_digit() {
        assert_eq!(
            decode_octets("01102001"),
            Err(DecodeError::BadDigit("01102001".into()))
        );
    }

    #[test]
    fn decode_empty_message_yields_no_bytes() {
        assert_eq!(decode_octets(""), Ok(Vec::new()));
    }

    #[test]
    fn ipv6_text_encodes_like_any_ascii() {
        let reply = ReplyPayload::build("::1", 0);
        let decoded = decode_octets(&reply.encoded).unwrap();
        assert_eq!(decoded, b"::10");
        // "::1" ends at byte index 2, so the break follows the third group.
        assert_eq!(reply.encoded.matches('\n').count(), 2);
    }
}
