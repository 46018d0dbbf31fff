//! Template context — the values both documents are rendered from.

use serde::Serialize;

use psa_core::{GenConfig, Symbol};

/// Rendering payload shared by every [`DocumentKind`](crate::DocumentKind).
///
/// `generator` and `input_path` only feed the provenance comments; the
/// symbol list drives the repeated blocks, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateContext {
    pub generator: String,
    pub input_path: String,
    pub symbols: Vec<Symbol>,
}

impl TemplateContext {
    pub fn new(config: &GenConfig, symbols: &[Symbol]) -> Self {
        Self {
            generator: config.generator.clone(),
            input_path: config.provenance_input(),
            symbols: symbols.to_vec(),
        }
    }

    pub(crate) fn to_tera(&self) -> Result<tera::Context, tera::Error> {
        tera::Context::from_serialize(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provenance_comes_from_config() {
        let mut cfg = GenConfig::with_module_dir("/somewhere/else");
        cfg.generator = "psa-gen".to_string();
        let ctx = TemplateContext::new(&cfg, &[]);
        assert_eq!(ctx.generator, "psa-gen");
        assert_eq!(
            ctx.input_path,
            "../../../modules/crypto/mbedtls/include/psa/crypto_config.h"
        );
    }

    #[test]
    fn tera_context_exposes_symbols() {
        let ctx = TemplateContext::new(&GenConfig::default(), &[Symbol::from("PSA_WANT_A")]);
        let tera_ctx = ctx.to_tera().unwrap();
        let symbols = tera_ctx.get("symbols").expect("symbols key");
        assert_eq!(symbols.as_array().map(|a| a.len()), Some(1));
    }
}
