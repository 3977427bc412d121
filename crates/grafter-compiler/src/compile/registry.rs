//! Rule registry: composes strategies and builders into rule programs,
//! one session per language.

use grafter_core::{Interner, TypeHierarchy};
use grafter_program::{LanguageProgram, Program, RuleProgram};
use indexmap::IndexMap;
use tracing::debug;

use super::builder::compile_result;
use super::session::CompileSession;
use super::strategy::{compile_strategy, min_consumed};
use crate::Result;
use crate::config::CompileConfig;
use crate::model::{Rule, RuleFile};

/// Compile one rule and append it to the session's rule list.
pub fn compile_rule(session: &mut CompileSession<'_>, rule: &Rule) -> Result<()> {
    let strategy = compile_strategy(session, rule)?;
    let result = compile_result(session, &rule.result);
    let id = session.next_rule_id();

    let program = RuleProgram {
        id,
        text: rule.to_string(),
        span: (rule.range.start().into(), rule.range.end().into()),
        min_consumed: min_consumed(&strategy),
        needs_fragment: !result.is_hole(),
        strategy,
        result,
    };
    debug!(
        %id,
        language = session.language(),
        min_consumed = program.min_consumed,
        "registered rule"
    );
    session.push_rule(program);
    Ok(())
}

/// Compile every rule of an analyzed file.
///
/// Blocks naming the same language share one session; their rules keep
/// source order.
pub fn compile_file(
    file: &RuleFile,
    hierarchy: Option<&dyn TypeHierarchy>,
    config: &CompileConfig,
) -> Result<Program> {
    let mut by_language: IndexMap<&str, Vec<&Rule>> = IndexMap::new();
    for block in &file.blocks {
        by_language
            .entry(block.name.as_str())
            .or_default()
            .extend(&block.rules);
    }

    let mut strings = Interner::new();
    let mut languages = IndexMap::with_capacity(by_language.len());
    for (name, rules) in by_language {
        let language = compile_language(name, &rules, &mut strings, hierarchy, config)?;
        languages.insert(name.to_string(), language);
    }
    Ok(Program::new(strings, languages))
}

fn compile_language(
    name: &str,
    rules: &[&Rule],
    strings: &mut Interner,
    hierarchy: Option<&dyn TypeHierarchy>,
    config: &CompileConfig,
) -> Result<LanguageProgram> {
    let mut session = CompileSession::new(name, strings, hierarchy, config);
    for rule in rules {
        compile_rule(&mut session, rule)?;
    }
    Ok(session.finish())
}
