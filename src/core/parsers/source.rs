use std::{path::Path, sync::Arc};

use anyhow::{Result, anyhow};
use swc_common::{BytePos, FileName, GLOBALS, Globals, SourceMap};
use swc_ecma_ast::Module;
use swc_ecma_parser::{EsSyntax, Parser, StringInput, Syntax, TsSyntax};

/// Language of a source document, named after the editor language identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SourceLanguage {
    TypeScript,
    /// TypeScript with JSX. Also the fallback grammar when the language is
    /// unknown, since it accepts the widest range of input.
    #[default]
    TypeScriptReact,
    JavaScript,
    JavaScriptReact,
}

impl SourceLanguage {
    pub const ALL: [SourceLanguage; 4] = [
        SourceLanguage::TypeScript,
        SourceLanguage::TypeScriptReact,
        SourceLanguage::JavaScript,
        SourceLanguage::JavaScriptReact,
    ];

    /// Editor language identifier (`typescriptreact`, ...).
    pub fn id(self) -> &'static str {
        match self {
            SourceLanguage::TypeScript => "typescript",
            SourceLanguage::TypeScriptReact => "typescriptreact",
            SourceLanguage::JavaScript => "javascript",
            SourceLanguage::JavaScriptReact => "javascriptreact",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.id() == id)
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("ts" | "mts" | "cts") => Some(SourceLanguage::TypeScript),
            Some("tsx") => Some(SourceLanguage::TypeScriptReact),
            Some("js" | "mjs" | "cjs") => Some(SourceLanguage::JavaScript),
            Some("jsx") => Some(SourceLanguage::JavaScriptReact),
            _ => None,
        }
    }

    fn syntax(self) -> Syntax {
        match self {
            SourceLanguage::TypeScript => Syntax::Typescript(TsSyntax {
                decorators: true,
                ..Default::default()
            }),
            SourceLanguage::TypeScriptReact => Syntax::Typescript(TsSyntax {
                tsx: true,
                decorators: true,
                ..Default::default()
            }),
            SourceLanguage::JavaScript | SourceLanguage::JavaScriptReact => {
                Syntax::Es(EsSyntax {
                    jsx: true,
                    decorators: true,
                    ..Default::default()
                })
            }
        }
    }
}

pub struct ParsedSource {
    pub module: Module,
    /// Position of the first byte of the document in the source map.
    /// Span positions minus this value are byte offsets into the text.
    pub start_pos: BytePos,
    /// Bytes of the document the source map never saw (a leading BOM).
    pub leading_bytes: usize,
}

impl ParsedSource {
    /// Byte offset of a span position within the original text.
    pub fn offset_of(&self, pos: BytePos) -> usize {
        self.leading_bytes + (pos.0 - self.start_pos.0) as usize
    }
}

/// Parse a source document into a module AST.
///
/// Any syntax error fails the whole parse, including errors the parser was
/// able to recover from: a partial tree of a half-edited file is not trusted.
pub fn parse_source(
    code: String,
    file_name: Option<&Path>,
    language: SourceLanguage,
) -> Result<ParsedSource> {
    let source_map = Arc::new(SourceMap::default());

    // Wrap in GLOBALS.set() for thread safety
    GLOBALS.set(&Globals::new(), || {
        let name = match file_name {
            Some(path) => FileName::Real(path.to_path_buf()),
            None => FileName::Anon,
        };
        let text_len = code.len();
        let source_file = source_map.new_source_file(name.into(), code);
        // The source map strips a leading U+FEFF
        let leading_bytes = text_len.saturating_sub(source_file.src.len());

        let mut parser = Parser::new(
            language.syntax(),
            StringInput::from(&*source_file),
            None,
        );

        let module = parser
            .parse_module()
            .map_err(|e| anyhow!("Failed to parse {} source: {:?}", language.id(), e))?;

        if let Some(error) = parser.take_errors().into_iter().next() {
            return Err(anyhow!(
                "Failed to parse {} source: {:?}",
                language.id(),
                error
            ));
        }

        Ok(ParsedSource {
            module,
            start_pos: source_file.start_pos,
            leading_bytes,
        })
    })
}
