//! Save code text transform
//!
//! JSON text is compressed, read as one big-endian unsigned integer and
//! written out with one digit per alphabet symbol (base 57). The alphabet
//! leaves out glyphs that are easy to misread when copied by hand (`0`, `1`,
//! `I`, `O`, `l`).

use num_bigint::BigUint;

use super::save_game::SaveError;

pub const ALPHABET: &str = "23456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";
const BASE: u32 = ALPHABET.len() as u32;

/// Compress `text` and spell it in the save alphabet
pub fn encode_text(text: &str) -> Result<String, SaveError> {
    let bytes = lz_str::compress_to_uint8_array(text);
    // Leading zero bytes would not survive the integer round trip
    if bytes.first() == Some(&0) {
        return Err(SaveError::LeadingZero);
    }
    Ok(spell(&BigUint::from_bytes_be(&bytes)))
}

/// Reverse of [`encode_text`]; surrounding whitespace is ignored
pub fn decode_text(code: &str) -> Result<String, SaveError> {
    let code = code.trim();
    if code.is_empty() {
        return Err(SaveError::Empty);
    }

    // Compressed output is a sequence of 16-bit units
    let bytes = read(code)?.to_bytes_be();
    if bytes.len() % 2 != 0 {
        return Err(SaveError::Decompress);
    }
    let units = lz_str::decompress_from_uint8_array(&bytes).ok_or(SaveError::Decompress)?;
    String::from_utf16(&units).map_err(|_| SaveError::Decompress)
}

/// Most significant digit first; zero is a single first symbol
fn spell(value: &BigUint) -> String {
    let alphabet = ALPHABET.as_bytes();
    value
        .to_radix_be(BASE)
        .into_iter()
        .map(|digit| char::from(alphabet[usize::from(digit)]))
        .collect()
}

fn read(code: &str) -> Result<BigUint, SaveError> {
    let digits = code
        .chars()
        .map(|c| digit_of(c).ok_or(SaveError::UnknownCharacter(c)))
        .collect::<Result<Vec<u8>, _>>()?;
    BigUint::from_radix_be(&digits, BASE).ok_or(SaveError::Decompress)
}

fn digit_of(c: char) -> Option<u8> {
    ALPHABET.find(c).map(|i| i as u8)
}
