//! Pattern-boundary and file-level extraction tests.
//!
//! Each `#[case]` is one input line; the expectation is the symbol it yields,
//! if any.

use std::fs;

use psa_core::{extract_from_file, extract_symbols, ExtractError, Symbol};
use rstest::rstest;

#[rstest]
#[case("#define PSA_WANT_FOO 1", Some("PSA_WANT_FOO"))]
#[case("#define PSA_WANT_FOO", Some("PSA_WANT_FOO"))]
#[case("#define    PSA_WANT_ALG_SHA_256   1", Some("PSA_WANT_ALG_SHA_256"))]
#[case("#define PSA_WANT_KEY_TYPE_AES 1 /* comment */", Some("PSA_WANT_KEY_TYPE_AES"))]
#[case("#define PSA_WANT_ECC_SECP_R1_256(x) 1", Some("PSA_WANT_ECC_SECP_R1_256"))]
// Zero spaces are accepted: the separator is ` *`.
#[case("#definePSA_WANT_FOO", Some("PSA_WANT_FOO"))]
#[case("#define NOT_PSA_WANT_FOO", None)]
#[case("// #define PSA_WANT_FOO", None)]
#[case(" #define PSA_WANT_FOO 1", None)]
#[case("#define\tPSA_WANT_FOO 1", None)]
#[case("# define PSA_WANT_FOO 1", None)]
#[case("#undef PSA_WANT_FOO", None)]
#[case("#define PSA_WANT_ 1", None)]
#[case("#define psa_want_foo 1", None)]
fn pattern_boundaries(#[case] line: &str, #[case] expected: Option<&str>) {
    let found = extract_symbols(line);
    let expected: Vec<Symbol> = expected.into_iter().map(Symbol::from).collect();
    assert_eq!(found, expected, "line: {line:?}");
}

#[test]
fn realistic_header_keeps_order() {
    let header = "\
/**
 * \\file psa/crypto_config.h
 */
#ifndef PSA_CRYPTO_CONFIG_H
#define PSA_CRYPTO_CONFIG_H

#define PSA_WANT_ALG_CBC_NO_PADDING             1
#define PSA_WANT_ALG_CBC_PKCS7                  1
#define PSA_WANT_ALG_CCM                        1
/* #define PSA_WANT_ALG_XTS                     1 */

#define PSA_WANT_KEY_TYPE_AES                   1

#endif /* PSA_CRYPTO_CONFIG_H */
";
    let names: Vec<String> = extract_symbols(header).into_iter().map(|s| s.0).collect();
    assert_eq!(
        names,
        [
            "PSA_WANT_ALG_CBC_NO_PADDING",
            "PSA_WANT_ALG_CBC_PKCS7",
            "PSA_WANT_ALG_CCM",
            "PSA_WANT_KEY_TYPE_AES",
        ]
    );
}

#[test]
fn reads_symbols_from_file() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let path = dir.path().join("crypto_config.h");
    fs::write(
        &path,
        "#define PSA_WANT_KEY_TYPE_AES 1\n#define PSA_WANT_ALG_SHA_256 1\n",
    )
    .expect("write");

    let symbols = extract_from_file(&path).expect("extract");
    assert_eq!(
        symbols,
        vec![
            Symbol::from("PSA_WANT_KEY_TYPE_AES"),
            Symbol::from("PSA_WANT_ALG_SHA_256"),
        ]
    );
}

#[test]
fn non_utf8_input_is_an_io_error() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let path = dir.path().join("binary.h");
    fs::write(&path, [0xff, 0xfe, 0x00, 0x23]).expect("write");

    let err = extract_from_file(&path).unwrap_err();
    let ExtractError::Io { source, .. } = &err;
    assert_eq!(source.kind(), std::io::ErrorKind::InvalidData);
}
