//! Extraction of translation call sites from source documents.
//!
//! A call site is a call to the configured translation function by plain name
//! with a string literal as its first argument: `t("home.title")`. Anything
//! else (`i18n.t("x")`, `t(key)`, `` t(`x`) ``) is deliberately not matched.

use serde::Serialize;
use swc_ecma_ast::{CallExpr, Callee, Expr, Lit};
use swc_ecma_visit::{Visit, VisitWith};

use crate::core::{
    parsers::source::{ParsedSource, SourceLanguage, parse_source},
    utils::{LineIndex, Position},
};

/// One translation call with a literal key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallSite {
    /// The literal's value, unquoted.
    pub key: String,
    /// Byte offset of the literal's opening quote.
    pub start: usize,
    /// Byte offset just past the literal's closing quote.
    pub end: usize,
    /// Editor position of `end`.
    pub end_position: Position,
}

/// Scan a document with the default (TSX) grammar.
///
/// Returns an empty list when the text does not parse.
pub fn scan(text: &str, function_name: &str) -> Vec<CallSite> {
    scan_with_language(text, function_name, SourceLanguage::default())
}

/// Scan a document with the grammar of `language`.
///
/// Returns an empty list when the text does not parse: a document in the
/// middle of an edit simply has no call sites.
pub fn scan_with_language(
    text: &str,
    function_name: &str,
    language: SourceLanguage,
) -> Vec<CallSite> {
    match parse_source(text.to_string(), None, language) {
        Ok(parsed) => collect_call_sites(&parsed, text, function_name),
        Err(e) => {
            tracing::debug!(error = %e, "source did not parse, no call sites");
            Vec::new()
        }
    }
}

/// Walk a parsed module and collect matching call sites in source order.
pub fn collect_call_sites(parsed: &ParsedSource, text: &str, function_name: &str) -> Vec<CallSite> {
    let line_index = LineIndex::new(text);
    let mut collector = TranslationCallCollector {
        function_name,
        parsed,
        line_index: &line_index,
        call_sites: Vec::new(),
    };
    parsed.module.visit_with(&mut collector);
    collector.call_sites
}

struct TranslationCallCollector<'a> {
    function_name: &'a str,
    parsed: &'a ParsedSource,
    line_index: &'a LineIndex<'a>,
    call_sites: Vec<CallSite>,
}

impl TranslationCallCollector<'_> {
    fn is_translation_callee(&self, callee: &Callee) -> bool {
        // Only a plain identifier matches: member, computed and parenthesized
        // callees are different expression kinds
        matches!(
            callee,
            Callee::Expr(expr) if matches!(&**expr, Expr::Ident(ident) if ident.sym.as_str() == self.function_name)
        )
    }
}

impl Visit for TranslationCallCollector<'_> {
    fn visit_call_expr(&mut self, node: &CallExpr) {
        if self.is_translation_callee(&node.callee)
            && let Some(arg) = node.args.first()
            && arg.spread.is_none()
            && let Expr::Lit(Lit::Str(literal)) = &*arg.expr
            && let Some(key) = literal.value.as_str()
        {
            let start = self.parsed.offset_of(literal.span.lo);
            let end = self.parsed.offset_of(literal.span.hi);
            self.call_sites.push(CallSite {
                key: key.to_string(),
                start,
                end,
                end_position: self.line_index.position(end),
            });
        }

        // Arguments may contain further calls: t("a", { b: t("b") })
        node.visit_children_with(self);
    }
}
