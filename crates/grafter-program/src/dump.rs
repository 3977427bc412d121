//! Human-readable dump of compiled rule artifacts.
//!
//! Layout per language: matcher table, builder table, rules. Every section
//! lists entries in id order so the output is stable across runs.

use std::fmt::Write as _;

use grafter_core::Interner;

use crate::builder::{BuilderProc, ChildSource, DataSource, ResultProgram};
use crate::matcher::{Condition, Extraction, MatcherUnit, TypeTest};
use crate::module::{LanguageProgram, Program};
use crate::rule::RuleProgram;
use crate::strategy::MatchMode;

/// Generate a dump of every language in the program.
pub fn dump(program: &Program) -> String {
    let mut out = String::new();
    for (i, language) in program.languages().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        dump_language(&mut out, language, program.strings());
    }
    out
}

/// Generate a dump of one language.
pub fn dump_language(out: &mut String, language: &LanguageProgram, strings: &Interner) {
    writeln!(out, "language {}", language.name).unwrap();

    out.push_str("matchers:\n");
    for unit in &language.matchers {
        dump_matcher(out, unit, strings);
    }

    if !language.builders.is_empty() {
        out.push_str("builders:\n");
        for proc in &language.builders {
            dump_builder(out, proc, strings);
        }
    }

    out.push_str("rules:\n");
    for rule in &language.rules {
        dump_rule(out, rule);
    }
}

fn dump_matcher(out: &mut String, unit: &MatcherUnit, strings: &Interner) {
    write!(out, "  {} {} `{}`", unit.id, unit.name, unit.key).unwrap();
    if unit.negated {
        out.push_str(" negated");
    }
    out.push('\n');

    for cond in &unit.conditions {
        writeln!(out, "    {}", format_condition(cond, strings)).unwrap();
    }
    for cond in &unit.children_procedure {
        writeln!(out, "      {}", format_condition(cond, strings)).unwrap();
    }
    for extraction in &unit.extractions {
        writeln!(out, "    {}", format_extraction(extraction)).unwrap();
    }
}

fn dump_builder(out: &mut String, proc: &BuilderProc, strings: &Interner) {
    write!(out, "  {} {}", proc.id, strings.resolve(proc.node_type)).unwrap();
    if proc.needs_captures {
        out.push_str(" (captures)");
    }
    out.push('\n');

    match &proc.data {
        Some(DataSource::Static(s)) => writeln!(out, "    data <- {s:?}").unwrap(),
        Some(DataSource::Hole(hole)) => writeln!(out, "    data <- {hole}").unwrap(),
        None => {}
    }

    if !proc.children.is_empty() {
        let children: Vec<String> = proc
            .children
            .iter()
            .map(|child| match child {
                ChildSource::Hole(hole) => hole.to_string(),
                ChildSource::Builder(id) => id.to_string(),
                ChildSource::Null => "null".to_string(),
            })
            .collect();
        writeln!(out, "    children <- {}", children.join(", ")).unwrap();
    }
}

fn dump_rule(out: &mut String, rule: &RuleProgram) {
    writeln!(
        out,
        "  {} {} min={} `{}`",
        rule.id,
        rule.strategy.kind_name(),
        rule.min_consumed,
        rule.text
    )
    .unwrap();

    for checker in rule.strategy.checkers() {
        let mode = match checker.mode {
            MatchMode::Normal => "",
            MatchMode::Optional => " optional",
            MatchMode::Repeated => " repeated",
        };
        writeln!(out, "    {} {}{}", checker.name, checker.matcher, mode).unwrap();
    }

    let result = match &rule.result {
        ResultProgram::Null => "null".to_string(),
        ResultProgram::Hole(hole) => hole.to_string(),
        ResultProgram::Subtree(id) => id.to_string(),
    };
    writeln!(out, "    result {result}").unwrap();
}

fn format_type_test(test: &TypeTest, strings: &Interner) -> String {
    let name = strings.resolve(test.name);
    if test.accepts.len() == 1 && test.accepts[0] == test.name {
        return name.to_string();
    }
    let accepts: Vec<&str> = test.accepts.iter().map(|s| strings.resolve(*s)).collect();
    format!("{name}: {}", accepts.join(" | "))
}

fn format_ids(ids: &[crate::MatcherId]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn format_condition(cond: &Condition, strings: &Interner) -> String {
    match cond {
        Condition::Type(test) => format!("is-a {}", format_type_test(test, strings)),
        Condition::ChildCount(n) => format!("children == {n}"),
        Condition::MinChildCount(n) => format!("children >= {n}"),
        Condition::DataEquals(s) => format!("data == {s:?}"),
        Condition::HasData => "has data".to_string(),
        Condition::CharRange { first, last } => format!("char in {first:?}..{last:?}"),
        Condition::Child { index, matcher } => format!("child[{index}] matches {matcher}"),
        Condition::RemainingChildren { start, types } => {
            format!("children[{start}..] is-a {}", format_type_test(types, strings))
        }
        Condition::MatchesChildren => "matches children:".to_string(),
        Condition::AnyOf(ids) => format!("any of {}", format_ids(ids)),
        Condition::AllOf(ids) => format!("all of {}", format_ids(ids)),
    }
}

pub fn format_extraction(extraction: &Extraction) -> String {
    match extraction {
        Extraction::Node(hole) => format!("{hole} <- node"),
        Extraction::Data(hole) => format!("{hole} <- data"),
        Extraction::Child { hole, index } => format!("{hole} <- [child[{index}]]"),
        Extraction::Remaining { hole, start } => format!("{hole} <- children[{start}..]"),
        Extraction::Nested { index, matcher } => format!("child[{index}] via {matcher}"),
        Extraction::FirstOf(ids) => format!("first of {}", format_ids(ids)),
        Extraction::Each(ids) => format!("each of {}", format_ids(ids)),
    }
}
