//! Block and stream cipher suites against published test vectors
//!
//! ECB vectors come from FIPS 197 appendix C, the CBC and CTR vectors from
//! NIST SP 800-38A, the DES vector from the classic FIPS 46 walkthrough and
//! the ChaCha20 keystream from RFC 8439 / RFC 7539 appendix A.1.

use cipherkit_symmetric::{decrypt, encrypt, Cipher, CipherKind, Error, Operation, Padding};
use cipherkit_tests::h;

const FIPS197_PLAINTEXT: &str = "00112233445566778899aabbccddeeff";

// SP 800-38A common material
const NIST_KEY_128: &str = "2b7e151628aed2a6abf7158809cf4f3c";
const NIST_KEY_256: &str = "603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4";
const NIST_PLAINTEXT_2B: &str =
    "6bc1bee22e409f96e93d7e117393172aae2d8a571e03ac9c9eb76fac45af8e51";
const NIST_CBC_IV: &str = "000102030405060708090a0b0c0d0e0f";
const NIST_CTR_IV: &str = "f0f1f2f3f4f5f6f7f8f9fafbfcfdfeff";

#[test]
fn aes_ecb_fips197_vectors() {
    let cases = [
        (
            CipherKind::Aes128Ecb,
            "000102030405060708090a0b0c0d0e0f",
            "69c4e0d86a7b0430d8cdb78070b4c55a",
        ),
        (
            CipherKind::Aes192Ecb,
            "000102030405060708090a0b0c0d0e0f1011121314151617",
            "dda97ca4864cdfe06eaf70a0ec0d7191",
        ),
        (
            CipherKind::Aes256Ecb,
            "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f",
            "8ea2b7ca516745bfeafc49904b496089",
        ),
    ];
    for (kind, key, expected) in cases {
        let ciphertext = encrypt(
            kind,
            Padding::None,
            &h(key),
            &[],
            &h(FIPS197_PLAINTEXT),
        )
        .unwrap();
        assert_eq!(ciphertext, h(expected), "{kind} encrypt");

        let plaintext = decrypt(kind, Padding::None, &h(key), &[], &ciphertext).unwrap();
        assert_eq!(plaintext, h(FIPS197_PLAINTEXT), "{kind} decrypt");
    }
}

#[test]
fn aes_cbc_sp800_38a_vectors() {
    let cases = [
        (
            CipherKind::Aes128Cbc,
            NIST_KEY_128,
            "7649abac8119b246cee98e9b12e9197d5086cb9b507219ee95db113a917678b2",
        ),
        (
            CipherKind::Aes256Cbc,
            NIST_KEY_256,
            "f58c4c04d6e5f1ba779eabfb5f7bfbd69cfc4e967edb808d679f777bc6702c7d",
        ),
    ];
    for (kind, key, expected) in cases {
        let ciphertext = encrypt(
            kind,
            Padding::None,
            &h(key),
            &h(NIST_CBC_IV),
            &h(NIST_PLAINTEXT_2B),
        )
        .unwrap();
        assert_eq!(ciphertext, h(expected), "{kind}");

        let plaintext = decrypt(kind, Padding::None, &h(key), &h(NIST_CBC_IV), &ciphertext)
            .unwrap();
        assert_eq!(plaintext, h(NIST_PLAINTEXT_2B));
    }
}

#[test]
fn aes_cbc_pkcs7_prefix_matches_raw_vector() {
    // With PKCS#7 a full extra block is appended; the leading blocks must
    // still match the unpadded SP 800-38A ciphertext.
    let ciphertext = encrypt(
        CipherKind::Aes128Cbc,
        Padding::Pkcs7,
        &h(NIST_KEY_128),
        &h(NIST_CBC_IV),
        &h(NIST_PLAINTEXT_2B),
    )
    .unwrap();
    assert_eq!(ciphertext.len(), 48);
    assert_eq!(
        &ciphertext[..32],
        &h("7649abac8119b246cee98e9b12e9197d5086cb9b507219ee95db113a917678b2")[..]
    );
}

#[test]
fn aes_ctr_sp800_38a_vectors() {
    let cases = [
        (
            CipherKind::Aes128Ctr,
            NIST_KEY_128,
            "874d6191b620e3261bef6864990db6ce9806f66b7970fdff8617187bb9fffdff",
        ),
        (
            CipherKind::Aes256Ctr,
            NIST_KEY_256,
            "601ec313775789a5b7a7f504bbf3d228f443e3ca4d62b59aca84e990cacaf5c5",
        ),
    ];
    for (kind, key, expected) in cases {
        let ciphertext = encrypt(
            kind,
            Padding::None,
            &h(key),
            &h(NIST_CTR_IV),
            &h(NIST_PLAINTEXT_2B),
        )
        .unwrap();
        assert_eq!(ciphertext, h(expected), "{kind}");

        // CTR is its own inverse
        let plaintext = decrypt(kind, Padding::None, &h(key), &h(NIST_CTR_IV), &ciphertext)
            .unwrap();
        assert_eq!(plaintext, h(NIST_PLAINTEXT_2B));
    }
}

#[test]
fn des_classic_vector() {
    let key = h("133457799bbcdff1");
    let ciphertext = encrypt(
        CipherKind::DesEcb,
        Padding::None,
        &key,
        &[],
        &h("0123456789abcdef"),
    )
    .unwrap();
    assert_eq!(ciphertext, h("85e813540f0ab405"));
}

#[test]
fn des3_round_trips_with_three_distinct_subkeys() {
    let key = h("0123456789abcdef23456789abcdef01456789abcdef0123");
    let iv = h("0001020304050607");
    let message = b"an eight-byte-aligned message!!!";
    assert_eq!(message.len() % 8, 0);

    let ciphertext = encrypt(CipherKind::Des3Cbc, Padding::None, &key, &iv, message).unwrap();
    assert_ne!(&ciphertext[..], &message[..]);
    let plaintext = decrypt(CipherKind::Des3Cbc, Padding::None, &key, &iv, &ciphertext).unwrap();
    assert_eq!(plaintext, message);
}

#[test]
fn chacha20_zero_keystream_rfc7539() {
    // Encrypting zeros yields the raw keystream of the all-zero key/nonce.
    let ciphertext = encrypt(
        CipherKind::ChaCha20,
        Padding::None,
        &[0u8; 32],
        &[0u8; 12],
        &[0u8; 64],
    )
    .unwrap();
    assert_eq!(
        ciphertext,
        h("76b8e0ada0f13d90405d6ae55386bd28bdd219b8a08ded1aa836efcc8b770dc7\
           da41597c5157488d7724e03fb8d84a376a43b8f41518a11cc387b669b2ee6586")
    );
}

#[test]
fn every_padding_round_trips_unaligned_input() {
    let key = h(NIST_KEY_128);
    let iv = h(NIST_CBC_IV);
    let message = b"nineteen byte text!";
    assert_eq!(message.len(), 19);

    for padding in [Padding::Pkcs7, Padding::Iso7816, Padding::AnsiX923] {
        let ciphertext =
            encrypt(CipherKind::Aes128Cbc, padding, &key, &iv, message).unwrap();
        assert_eq!(ciphertext.len(), 32, "{padding}");
        let plaintext =
            decrypt(CipherKind::Aes128Cbc, padding, &key, &iv, &ciphertext).unwrap();
        assert_eq!(plaintext, message, "{padding}");
    }
}

#[test]
fn zeros_padding_adds_nothing_to_aligned_input() {
    let key = h(NIST_KEY_128);
    let iv = h(NIST_CBC_IV);
    let message = h(NIST_PLAINTEXT_2B);

    let ciphertext =
        encrypt(CipherKind::Aes128Cbc, Padding::Zeros, &key, &iv, &message).unwrap();
    assert_eq!(ciphertext.len(), message.len());

    // Unaligned input is zero-filled; trailing zeros cannot survive a round
    // trip under this scheme.
    let short = b"ends with data\x01";
    let ciphertext = encrypt(CipherKind::Aes128Cbc, Padding::Zeros, &key, &iv, short).unwrap();
    assert_eq!(ciphertext.len(), 16);
    let plaintext = decrypt(CipherKind::Aes128Cbc, Padding::Zeros, &key, &iv, &ciphertext)
        .unwrap();
    assert_eq!(plaintext, short);
}

#[test]
fn no_padding_rejects_unaligned_input() {
    let err = encrypt(
        CipherKind::Aes128Cbc,
        Padding::None,
        &h(NIST_KEY_128),
        &h(NIST_CBC_IV),
        b"seventeen bytes!!",
    )
    .unwrap_err();
    assert!(matches!(err, Error::InvalidParameter { .. }));
}

#[test]
fn ecb_rejects_empty_and_unaligned_input() {
    let key = h(NIST_KEY_128);
    assert!(encrypt(CipherKind::Aes128Ecb, Padding::None, &key, &[], &[]).is_err());
    assert!(encrypt(CipherKind::Aes128Ecb, Padding::None, &key, &[], &[0u8; 20]).is_err());
}

#[test]
fn invalid_pkcs7_padding_is_detected() {
    let key = h(NIST_KEY_128);
    let iv = h(NIST_CBC_IV);
    // A block ending in 0x11 (17) can never be valid PKCS#7 for a 16-byte
    // block; encrypting it raw and decrypting padded must fail.
    let block = [0x11u8; 16];
    let ciphertext =
        encrypt(CipherKind::Aes128Cbc, Padding::None, &key, &iv, &block).unwrap();
    let err = decrypt(CipherKind::Aes128Cbc, Padding::Pkcs7, &key, &iv, &ciphertext);
    assert!(matches!(err, Err(Error::InvalidPadding { .. })));
}

#[test]
fn wrong_iv_length_reports_expected_size() {
    let err = encrypt(
        CipherKind::Aes128Cbc,
        Padding::Pkcs7,
        &h(NIST_KEY_128),
        &[0u8; 12],
        b"data",
    )
    .unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidLength {
            expected: 16,
            actual: 12,
            ..
        }
    ));
}

#[test]
fn chunked_updates_match_the_one_shot() {
    let key = h(NIST_KEY_128);
    let iv = h(NIST_CBC_IV);
    let message: Vec<u8> = (0u8..=255).cycle().take(1000).collect();

    let expected = encrypt(CipherKind::Aes128Cbc, Padding::Pkcs7, &key, &iv, &message).unwrap();

    for chunk_size in [1, 7, 16, 33, 256] {
        let mut cipher = Cipher::new(CipherKind::Aes128Cbc);
        cipher.set_key(&key, Operation::Encrypt).unwrap();
        cipher.set_iv(&iv).unwrap();
        cipher.start().unwrap();

        let mut ciphertext = Vec::new();
        for chunk in cipherkit_tests::chunked(&message, chunk_size) {
            ciphertext.extend(cipher.update(chunk).unwrap());
        }
        ciphertext.extend(cipher.finish().unwrap());
        assert_eq!(ciphertext, expected, "chunk size {chunk_size}");
    }
}

#[test]
fn chunked_decryption_withholds_the_padded_block() {
    let key = h(NIST_KEY_128);
    let iv = h(NIST_CBC_IV);
    let message = b"a message spanning a few cbc blocks";
    let ciphertext =
        encrypt(CipherKind::Aes128Cbc, Padding::Pkcs7, &key, &iv, message).unwrap();

    let mut cipher = Cipher::new(CipherKind::Aes128Cbc);
    cipher.set_key(&key, Operation::Decrypt).unwrap();
    cipher.set_iv(&iv).unwrap();
    cipher.start().unwrap();

    let mut plaintext = cipher.update(&ciphertext).unwrap();
    // The final block stays buffered until finish strips the padding.
    assert_eq!(plaintext.len(), ciphertext.len() - 16);
    plaintext.extend(cipher.finish().unwrap());
    assert_eq!(plaintext, message);
}

#[test]
fn ecb_streaming_requires_whole_blocks_per_update() {
    let key = h(NIST_KEY_128);
    let mut cipher = Cipher::new(CipherKind::Aes128Ecb);
    cipher.set_key(&key, Operation::Encrypt).unwrap();
    cipher.start().unwrap();

    assert!(cipher.update(&[0u8; 16]).is_ok());
    assert!(cipher.update(&[0u8; 15]).is_err());
}

#[test]
fn kind_properties_match_the_published_constants() {
    use cipherkit_params::symmetric as params;
    assert_eq!(CipherKind::Aes128Gcm.tag_size(), params::AEAD_TAG_SIZE);
    assert_eq!(CipherKind::Aes128Gcm.iv_size(), params::GCM_NONCE_SIZE);
    assert_eq!(CipherKind::Aes256Cbc.key_size(), params::AES256_KEY_SIZE);
    assert_eq!(CipherKind::DesCbc.block_size(), params::DES_BLOCK_SIZE);
    assert_eq!(CipherKind::ChaCha20.key_size(), params::CHACHA20_KEY_SIZE);
}

#[test]
fn errors_render_the_cipher_name() {
    let err = encrypt(
        CipherKind::Aes128Cbc,
        Padding::Pkcs7,
        &[0u8; 5],
        &h(NIST_CBC_IV),
        b"x",
    )
    .unwrap_err();
    assert!(err.to_string().contains("AES-128-CBC"));
}

#[test]
fn names_select_ciphers_at_runtime() {
    let kind: CipherKind = "AES-256-CTR".parse().unwrap();
    assert_eq!(kind, CipherKind::Aes256Ctr);
    assert_eq!(kind.to_string(), "AES-256-CTR");

    let roundtrip = |k: CipherKind| k.name().parse::<CipherKind>().unwrap();
    assert_eq!(roundtrip(CipherKind::Des3Cbc), CipherKind::Des3Cbc);
    assert_eq!(roundtrip(CipherKind::ChaCha20Poly1305), CipherKind::ChaCha20Poly1305);
}
