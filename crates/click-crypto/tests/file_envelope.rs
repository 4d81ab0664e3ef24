//! End-to-end flows a caller runs: frame + encrypt + transport encode, and
//! envelope bytes through the 14-bit packer.

use click_crypto::{
    base64url_decode, base64url_encode, decrypt_file, encrypt_file, pack, unpack, CryptoError,
};

#[test]
fn framed_envelope_through_base64url() {
    let data = b"attachment bytes \x00\x01\x02";
    let envelope = encrypt_file(data, "report.pdf", "s3cret").unwrap();

    let wire = base64url_encode(&envelope);
    let received = base64url_decode(&wire).unwrap();

    let (decrypted, name) = decrypt_file(&received, "s3cret").unwrap();
    assert_eq!(decrypted, data);
    assert_eq!(name, "report.pdf");
}

#[test]
fn envelope_survives_chunk_packing() {
    let envelope = encrypt_file(b"short secret", "a.txt", "pw").unwrap();
    let chunks = pack(&envelope).unwrap();
    let restored = unpack(&chunks);

    let (data, name) = decrypt_file(&restored, "pw").unwrap();
    assert_eq!(data, b"short secret");
    assert_eq!(name, "a.txt");
}

#[test]
fn wrong_password_is_authentication_failure_not_parse_error() {
    let envelope = encrypt_file(b"data", "f", "right").unwrap();
    let err = decrypt_file(&envelope, "wrong").unwrap_err();
    assert!(matches!(err, CryptoError::AuthenticationFailed));
}
