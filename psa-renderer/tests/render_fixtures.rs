//! Byte-exact rendering fixtures for both documents.
//!
//! These texts are what previously generated files contain; any drift here
//! breaks `--check` against existing trees.

use psa_core::{GenConfig, Symbol};
use psa_renderer::{DocumentKind, Renderer, TemplateContext};

const KCONFIG_HEADER: &str = "\
# Copyright (c) 2024 Nordic Semiconductor ASA
# SPDX-License-Identifier: Apache-2.0

# This file was automatically generated by create_psa_files.py
# from: ../../../modules/crypto/mbedtls/include/psa/crypto_config.h.
# Do not edit it manually.

config MBEDTLS_PSA_CRYPTO_CLIENT
\tbool
\tdefault y
\tdepends on BUILD_WITH_TFM || MBEDTLS_PSA_CRYPTO_C

if MBEDTLS_PSA_CRYPTO_CLIENT

config PSA_CRYPTO_ENABLE_ALL
\tbool \"All PSA crypto features\"
";

const KCONFIG_FOOTER: &str = "\nendif # MBEDTLS_PSA_CRYPTO_CLIENT\n";

const HEADER_HEADER: &str = "\
/*
 * Copyright (c) 2024 Nordic Semiconductor ASA
 *
 * SPDX-License-Identifier: Apache-2.0
 */

/* This file was automatically generated by create_psa_files.py
 * from: ../../../modules/crypto/mbedtls/include/psa/crypto_config.h
 * Do not edit it manually.
 */

#ifndef CONFIG_PSA_H
#define CONFIG_PSA_H
";

const HEADER_FOOTER: &str = "\n#endif /* CONFIG_PSA_H */\n";

fn render(kind: DocumentKind, symbols: &[&str]) -> String {
    let symbols: Vec<Symbol> = symbols.iter().map(|s| Symbol::from(*s)).collect();
    let ctx = TemplateContext::new(&GenConfig::default(), &symbols);
    Renderer::new().expect("renderer").render(&ctx, kind).expect("render")
}

fn kconfig_block(sym: &str) -> String {
    format!(
        "\nconfig {sym}\n\tbool \"{sym}\" if !MBEDTLS_PROMPTLESS\n\tdefault y if PSA_CRYPTO_ENABLE_ALL\n"
    )
}

fn header_block(sym: &str) -> String {
    format!("\n#if defined(CONFIG_{sym})\n#define {sym}   1\n#endif\n")
}

#[test]
fn empty_kconfig_is_header_plus_footer() {
    assert_eq!(
        render(DocumentKind::Kconfig, &[]),
        format!("{KCONFIG_HEADER}{KCONFIG_FOOTER}")
    );
}

#[test]
fn empty_header_is_header_plus_footer() {
    assert_eq!(
        render(DocumentKind::Header, &[]),
        format!("{HEADER_HEADER}{HEADER_FOOTER}")
    );
}

#[test]
fn two_symbol_kconfig_is_exact() {
    let expected = format!(
        "{KCONFIG_HEADER}{}{}{KCONFIG_FOOTER}",
        kconfig_block("PSA_WANT_KEY_TYPE_AES"),
        kconfig_block("PSA_WANT_ALG_SHA_256"),
    );
    assert_eq!(
        render(
            DocumentKind::Kconfig,
            &["PSA_WANT_KEY_TYPE_AES", "PSA_WANT_ALG_SHA_256"]
        ),
        expected
    );
}

#[test]
fn two_symbol_header_is_exact() {
    let expected = format!(
        "{HEADER_HEADER}{}{}{HEADER_FOOTER}",
        header_block("PSA_WANT_KEY_TYPE_AES"),
        header_block("PSA_WANT_ALG_SHA_256"),
    );
    assert_eq!(
        render(
            DocumentKind::Header,
            &["PSA_WANT_KEY_TYPE_AES", "PSA_WANT_ALG_SHA_256"]
        ),
        expected
    );
}

#[test]
fn block_order_follows_symbol_order() {
    for kind in DocumentKind::all() {
        let out = render(*kind, &["PSA_WANT_B", "PSA_WANT_A"]);
        let b = out.find("PSA_WANT_B").expect("B present");
        let a = out.find("PSA_WANT_A").expect("A present");
        assert!(b < a, "{kind:?}: B must precede A");
    }
}

#[test]
fn duplicates_are_rendered_twice() {
    let out = render(DocumentKind::Header, &["PSA_WANT_A", "PSA_WANT_A"]);
    assert_eq!(out.matches("#if defined(CONFIG_PSA_WANT_A)").count(), 2);
}

#[test]
fn rendering_is_deterministic() {
    let symbols = ["PSA_WANT_ALG_CCM", "PSA_WANT_ALG_GCM", "PSA_WANT_KEY_TYPE_AES"];
    for kind in DocumentKind::all() {
        assert_eq!(render(*kind, &symbols), render(*kind, &symbols));
    }
}

#[test]
fn generator_name_is_configurable() {
    let mut cfg = GenConfig::default();
    cfg.generator = "psa-gen".to_string();
    let ctx = TemplateContext::new(&cfg, &[]);
    let out = Renderer::new()
        .expect("renderer")
        .render(&ctx, DocumentKind::Kconfig)
        .expect("render");
    assert!(out.contains("# This file was automatically generated by psa-gen\n"));
}
