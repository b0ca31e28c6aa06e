use std::sync::Arc;

use anyhow::{Result, anyhow};
use swc_common::{FileName, Globals, SourceMap};
use swc_ecma_ast::Module;
use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax};

/// A parsed source file: the module AST plus the source map needed to turn
/// spans back into line/column positions.
pub struct ParsedSource {
    pub module: Module,
    pub source_map: Arc<SourceMap>,
}

/// Parse TS/TSX/JS/JSX source code into an AST.
///
/// Accepts a shared SourceMap for thread-safe parallel parsing. The
/// TypeScript syntax with `tsx` enabled is a superset of everything the
/// scanner picks up, so a single syntax configuration covers all four
/// extensions.
pub fn parse_source(code: String, file_path: &str, source_map: Arc<SourceMap>) -> Result<ParsedSource> {
    use swc_common::GLOBALS;

    // Wrap in GLOBALS.set() for thread safety
    GLOBALS.set(&Globals::new(), || {
        let source_file = source_map.new_source_file(FileName::Real(file_path.into()).into(), code);

        let syntax = Syntax::Typescript(TsSyntax {
            tsx: true,
            ..Default::default()
        });

        let mut parser = Parser::new(syntax, StringInput::from(&*source_file), None);

        let module = parser
            .parse_module()
            .map_err(|e| anyhow!("Failed to parse tsx string: {:?}", e))?;

        Ok(ParsedSource { module, source_map })
    })
}
