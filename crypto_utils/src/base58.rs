use crate::hash::sha256d;

pub const BASE58_ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

pub fn base58_encode(data: &[u8]) -> String {
    let zeros = data.iter().take_while(|&&b| b == 0).count();

    // Little-endian base-58 digits of the big-endian input.
    let mut digits: Vec<u8> = Vec::with_capacity(data.len() * 138 / 100 + 1);
    for &byte in &data[zeros..] {
        let mut carry = byte as u32;
        for digit in digits.iter_mut() {
            carry += (*digit as u32) << 8;
            *digit = (carry % 58) as u8;
            carry /= 58;
        }
        while carry > 0 {
            digits.push((carry % 58) as u8);
            carry /= 58;
        }
    }

    let mut encoded = String::with_capacity(zeros + digits.len());
    encoded.extend(std::iter::repeat_n('1', zeros));
    encoded.extend(
        digits
            .iter()
            .rev()
            .map(|&d| BASE58_ALPHABET[d as usize] as char),
    );
    encoded
}

/// Base58 of `payload || sha256d(payload)[..4]`.
pub fn base58_check_encode(payload: &[u8]) -> String {
    let checksum = sha256d(payload);
    let mut extended = Vec::with_capacity(payload.len() + 4);
    extended.extend_from_slice(payload);
    extended.extend_from_slice(&checksum[..4]);
    base58_encode(&extended)
}
