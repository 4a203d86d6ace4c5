//! Encrypts the FIPS-197 appendix C.1 block and checks the known answer.

use aes128::{decrypt_block, encrypt_block, expand_key};

fn main() {
    let key = hex::decode("000102030405060708090a0b0c0d0e0f").unwrap();
    let plaintext = hex::decode("00112233445566778899aabbccddeeff").unwrap();

    let schedule = expand_key(&key).unwrap();
    let ciphertext = encrypt_block(&schedule, &plaintext).unwrap();
    assert_eq!(
        hex::encode(ciphertext),
        "69c4e0d86a7b0430d8cdb78070b4c55a"
    );
    assert_eq!(
        decrypt_block(&schedule, &ciphertext).unwrap().as_slice(),
        plaintext.as_slice()
    );

    println!("appendix C.1 vector verified; ciphertext matches the standard");
}
