use grafter_core::{DynamicTypeHierarchy, TypeHierarchy, TypeKind};

use grafter_program::{LanguageProgram, Program};

use crate::analyze::analyze_file;
use crate::compile::compile_file;
use crate::config::CompileConfig;
use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::model::RuleFile;
use crate::parser::parse;

/// Parse a source that must be free of syntax errors.
pub fn parse_rules(source: &str) -> RuleFile {
    let (file, diagnostics) = parse(source, &CompileConfig::default()).expect("within limits");
    assert!(diagnostics.is_empty(), "unexpected syntax errors:\n{diagnostics}");
    file
}

pub fn analyze_with(source: &str, hierarchy: Option<&dyn TypeHierarchy>) -> Diagnostics {
    let file = parse_rules(source);
    let mut diagnostics = Diagnostics::new();
    analyze_file(&file, hierarchy, &mut diagnostics);
    diagnostics
}

/// Kinds reported when analyzing without a hierarchy.
pub fn analysis_errors(source: &str) -> Vec<DiagnosticKind> {
    analyze_with(source, None).kinds()
}

/// Compile a source that must analyze cleanly, without a hierarchy.
pub fn compile_rules(source: &str) -> Program {
    compile_rules_with(source, None, &CompileConfig::default())
}

pub fn compile_rules_with(
    source: &str,
    hierarchy: Option<&dyn TypeHierarchy>,
    config: &CompileConfig,
) -> Program {
    let file = parse_rules(source);
    let mut diagnostics = Diagnostics::new();
    analyze_file(&file, hierarchy, &mut diagnostics);
    assert!(
        !diagnostics.has_errors(),
        "unexpected analysis errors:\n{diagnostics}"
    );
    compile_file(&file, hierarchy, config).expect("compiles")
}

pub fn default_language(program: &Program) -> &LanguageProgram {
    program.language("default").expect("default language")
}

pub fn expressions() -> DynamicTypeHierarchy {
    let mut h = DynamicTypeHierarchy::new();
    h.add_type("Expression", None, TypeKind::Abstract).unwrap();
    h.add_type("Addition", Some("Expression"), TypeKind::Ordinary)
        .unwrap();
    h.add_type("Identifier", Some("Expression"), TypeKind::Literal)
        .unwrap();
    h.add_type("Number", Some("Expression"), TypeKind::Literal)
        .unwrap();
    h.add_type("Statement", None, TypeKind::Ordinary).unwrap();
    h.add_type("StatementList", None, TypeKind::List).unwrap();
    h
}
