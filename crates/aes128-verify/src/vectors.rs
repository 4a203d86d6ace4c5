//! Test vector table and hex parsing.

use anyhow::{bail, Context, Result};

/// One known-answer triple: encrypting `plaintext` under `key` must yield
/// `ciphertext`, and decrypting `ciphertext` must yield `plaintext`.
pub struct TestVector {
    pub name: String,
    pub key: [u8; 16],
    pub plaintext: [u8; 16],
    pub ciphertext: [u8; 16],
}

/// The built-in vector set: the FIPS-197 appendix C.1 block, the classic
/// Rijndael vector, the degenerate all-zero and all-ff cases, and four
/// variable-key vectors with a zero plaintext.
pub fn builtin() -> Vec<TestVector> {
    const RAW: &[(&str, &str, &str, &str)] = &[
        (
            "NIST FIPS 197 Appendix C.1",
            "000102030405060708090a0b0c0d0e0f",
            "00112233445566778899aabbccddeeff",
            "69c4e0d86a7b0430d8cdb78070b4c55a",
        ),
        (
            "Rijndael reference vector",
            "2b7e151628aed2a6abf7158809cf4f3c",
            "3243f6a8885a308d313198a2e0370734",
            "3925841d02dc09fbdc118597196a0b32",
        ),
        (
            "All zeros",
            "00000000000000000000000000000000",
            "00000000000000000000000000000000",
            "66e94bd4ef8a2c3b884cfa59ca342b2e",
        ),
        (
            "All ones",
            "ffffffffffffffffffffffffffffffff",
            "ffffffffffffffffffffffffffffffff",
            "a1f6258c877d5fcd8964484538bfc92c",
        ),
        (
            "Variable key 1",
            "10a58869d74be5a374cf867cfb473859",
            "00000000000000000000000000000000",
            "6d251e6944b051e04eaa6fb4dbf78465",
        ),
        (
            "Variable key 2",
            "caea65cdbb75e9169ecd22ebe6e54675",
            "00000000000000000000000000000000",
            "6e29201190152df4ee058139def610bb",
        ),
        (
            "Variable key 3",
            "a2e2fa9baf7d20822ca9f0542f764a41",
            "00000000000000000000000000000000",
            "c3b44b95d9d2f25670eee9a0de099fa3",
        ),
        (
            "Variable key 4",
            "b6364ac4e1de1e285eaf144a2415f7a0",
            "00000000000000000000000000000000",
            "5d9b05578fc944b3cf1ccf0e746cd581",
        ),
    ];

    RAW.iter()
        .map(|(name, key, pt, ct)| TestVector {
            name: (*name).to_string(),
            key: parse_hex16(key).expect("built-in vector"),
            plaintext: parse_hex16(pt).expect("built-in vector"),
            ciphertext: parse_hex16(ct).expect("built-in vector"),
        })
        .collect()
}

/// Decodes a 16-byte hex field, ignoring spaces and `_` separators.
pub fn parse_hex16(field: &str) -> Result<[u8; 16]> {
    let cleaned: String = field.chars().filter(|c| *c != ' ' && *c != '_').collect();
    let bytes = hex::decode(cleaned.trim()).context("decode hex field")?;
    if bytes.len() != 16 {
        bail!("expected 16 bytes (32 hex characters), got {}", bytes.len());
    }
    let mut out = [0u8; 16];
    out.copy_from_slice(&bytes);
    Ok(out)
}

/// Parses a vector file: one `key plaintext ciphertext` triple per line,
/// blank lines and `#` comments skipped.
pub fn parse_file(contents: &str) -> Result<Vec<TestVector>> {
    let mut vectors = Vec::new();
    for (line_no, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 3 {
            bail!(
                "line {}: expected 3 hex fields (key plaintext ciphertext), got {}",
                line_no + 1,
                fields.len()
            );
        }
        vectors.push(TestVector {
            name: format!("line {}", line_no + 1),
            key: parse_hex16(fields[0]).with_context(|| format!("line {}: key", line_no + 1))?,
            plaintext: parse_hex16(fields[1])
                .with_context(|| format!("line {}: plaintext", line_no + 1))?,
            ciphertext: parse_hex16(fields[2])
                .with_context(|| format!("line {}: ciphertext", line_no + 1))?,
        });
    }
    if vectors.is_empty() {
        bail!("vector file contains no test vectors");
    }
    Ok(vectors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_has_eight_vectors() {
        assert_eq!(builtin().len(), 8);
    }

    #[test]
    fn hex_field_tolerates_separators() {
        let spaced = parse_hex16("00010203 04050607_08090a0b 0c0d0e0f").unwrap();
        let plain = parse_hex16("000102030405060708090a0b0c0d0e0f").unwrap();
        assert_eq!(spaced, plain);
    }

    #[test]
    fn hex_field_rejects_wrong_width_and_bad_digits() {
        assert!(parse_hex16("0011").is_err());
        assert!(parse_hex16("zz112233445566778899aabbccddeeff").is_err());
    }

    #[test]
    fn vector_file_parsing() {
        let contents = "\
# comment line
000102030405060708090a0b0c0d0e0f 00112233445566778899aabbccddeeff 69c4e0d86a7b0430d8cdb78070b4c55a

00000000000000000000000000000000 00000000000000000000000000000000 66e94bd4ef8a2c3b884cfa59ca342b2e
";
        let vectors = parse_file(contents).unwrap();
        assert_eq!(vectors.len(), 2);
        assert_eq!(vectors[0].name, "line 2");
        assert_eq!(vectors[1].key, [0u8; 16]);
    }

    #[test]
    fn vector_file_rejects_malformed_lines() {
        assert!(parse_file("deadbeef\n").is_err());
        assert!(parse_file("# only comments\n").is_err());
    }
}
