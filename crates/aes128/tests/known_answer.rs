//! Known-answer tests against published AES-128 vectors.

use aes128::{decrypt_block, encrypt_block, expand_key};

struct Vector {
    name: &'static str,
    key: &'static str,
    plaintext: &'static str,
    ciphertext: &'static str,
}

const VECTORS: &[Vector] = &[
    Vector {
        name: "fips-197 appendix c.1",
        key: "000102030405060708090a0b0c0d0e0f",
        plaintext: "00112233445566778899aabbccddeeff",
        ciphertext: "69c4e0d86a7b0430d8cdb78070b4c55a",
    },
    Vector {
        name: "rijndael reference vector",
        key: "2b7e151628aed2a6abf7158809cf4f3c",
        plaintext: "3243f6a8885a308d313198a2e0370734",
        ciphertext: "3925841d02dc09fbdc118597196a0b32",
    },
    Vector {
        name: "all-zero key and block",
        key: "00000000000000000000000000000000",
        plaintext: "00000000000000000000000000000000",
        ciphertext: "66e94bd4ef8a2c3b884cfa59ca342b2e",
    },
    Vector {
        name: "all-ff key and block",
        key: "ffffffffffffffffffffffffffffffff",
        plaintext: "ffffffffffffffffffffffffffffffff",
        ciphertext: "a1f6258c877d5fcd8964484538bfc92c",
    },
    Vector {
        name: "varkey vector 1",
        key: "10a58869d74be5a374cf867cfb473859",
        plaintext: "00000000000000000000000000000000",
        ciphertext: "6d251e6944b051e04eaa6fb4dbf78465",
    },
    Vector {
        name: "varkey vector 2",
        key: "caea65cdbb75e9169ecd22ebe6e54675",
        plaintext: "00000000000000000000000000000000",
        ciphertext: "6e29201190152df4ee058139def610bb",
    },
    Vector {
        name: "varkey vector 3",
        key: "a2e2fa9baf7d20822ca9f0542f764a41",
        plaintext: "00000000000000000000000000000000",
        ciphertext: "c3b44b95d9d2f25670eee9a0de099fa3",
    },
    Vector {
        name: "varkey vector 4",
        key: "b6364ac4e1de1e285eaf144a2415f7a0",
        plaintext: "00000000000000000000000000000000",
        ciphertext: "5d9b05578fc944b3cf1ccf0e746cd581",
    },
];

fn unhex(s: &str) -> Vec<u8> {
    hex::decode(s).expect("test vector hex")
}

#[test]
fn encrypt_matches_every_vector() {
    for v in VECTORS {
        let schedule = expand_key(&unhex(v.key)).unwrap();
        let ct = encrypt_block(&schedule, &unhex(v.plaintext)).unwrap();
        assert_eq!(hex::encode(ct), v.ciphertext, "{}", v.name);
    }
}

#[test]
fn decrypt_matches_every_vector() {
    for v in VECTORS {
        let schedule = expand_key(&unhex(v.key)).unwrap();
        let pt = decrypt_block(&schedule, &unhex(v.ciphertext)).unwrap();
        assert_eq!(hex::encode(pt), v.plaintext, "{}", v.name);
    }
}

#[test]
fn repeated_calls_are_deterministic() {
    let schedule = expand_key(&unhex(VECTORS[0].key)).unwrap();
    let plaintext = unhex(VECTORS[0].plaintext);
    let first = encrypt_block(&schedule, &plaintext).unwrap();
    for _ in 0..10 {
        assert_eq!(encrypt_block(&schedule, &plaintext).unwrap(), first);
    }
    let again = expand_key(&unhex(VECTORS[0].key)).unwrap();
    assert_eq!(encrypt_block(&again, &plaintext).unwrap(), first);
}
