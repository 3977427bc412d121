//! Staged entry point: source → parsed → analyzed → compiled.
//!
//! ```ignore
//! let program = RuleSetBuilder::new(source)
//!     .with_hierarchy(&hierarchy)
//!     .parse()?
//!     .analyze()
//!     .compile()?;
//! ```

use std::ops::Deref;

use grafter_core::TypeHierarchy;
use grafter_program::Program;

use crate::analyze::analyze_file;
use crate::compile::compile_file;
use crate::config::CompileConfig;
use crate::diagnostics::Diagnostics;
use crate::model::RuleFile;
use crate::parser::{ParseResult, Parser, lex};
use crate::{Error, Result};

pub struct RuleSetBuilder<'h> {
    source: String,
    hierarchy: Option<&'h dyn TypeHierarchy>,
    config: CompileConfig,
}

impl<'h> RuleSetBuilder<'h> {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            hierarchy: None,
            config: CompileConfig::default(),
        }
    }

    /// Start from rules built in code, skipping the parser.
    pub fn from_model(file: RuleFile) -> RuleSetParsed<'h> {
        RuleSetParsed {
            source: None,
            file,
            diagnostics: Diagnostics::new(),
            hierarchy: None,
            config: CompileConfig::default(),
            fuel_consumed: 0,
        }
    }

    pub fn with_hierarchy(mut self, hierarchy: &'h dyn TypeHierarchy) -> Self {
        self.hierarchy = Some(hierarchy);
        self
    }

    pub fn with_config(mut self, config: CompileConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_parse_fuel(mut self, fuel: u32) -> Self {
        self.config.parse_fuel = fuel;
        self
    }

    pub fn with_recursion_limit(mut self, limit: u32) -> Self {
        self.config.recursion_limit = limit;
        self
    }

    pub fn with_children_inline_limit(mut self, limit: usize) -> Self {
        self.config.children_inline_limit = limit;
        self
    }

    pub fn with_default_language(mut self, name: impl Into<String>) -> Self {
        self.config.default_language = name.into();
        self
    }

    /// Fails only when a parser limit is hit; syntax errors are diagnostics.
    pub fn parse(self) -> Result<RuleSetParsed<'h>> {
        let ParseResult {
            file,
            diagnostics,
            exec_fuel_consumed,
        } = Parser::new(
            &self.source,
            lex(&self.source),
            self.config.parse_fuel,
            self.config.recursion_limit,
            self.config.default_language.clone(),
        )
        .parse()?;

        Ok(RuleSetParsed {
            source: Some(self.source),
            file,
            diagnostics,
            hierarchy: self.hierarchy,
            config: self.config,
            fuel_consumed: exec_fuel_consumed,
        })
    }
}

pub struct RuleSetParsed<'h> {
    source: Option<String>,
    file: RuleFile,
    diagnostics: Diagnostics,
    hierarchy: Option<&'h dyn TypeHierarchy>,
    config: CompileConfig,
    fuel_consumed: u32,
}

impl<'h> RuleSetParsed<'h> {
    pub fn with_hierarchy(mut self, hierarchy: &'h dyn TypeHierarchy) -> Self {
        self.hierarchy = Some(hierarchy);
        self
    }

    pub fn with_config(mut self, config: CompileConfig) -> Self {
        self.config = config;
        self
    }

    pub fn parser_fuel_consumed(&self) -> u32 {
        self.fuel_consumed
    }

    /// Rule source text; `None` for rules built in code.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn file(&self) -> &RuleFile {
        &self.file
    }

    pub fn config(&self) -> &CompileConfig {
        &self.config
    }

    /// Syntax diagnostics.
    pub fn parse_diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn analyze(self) -> RuleSetAnalyzed<'h> {
        let mut diagnostics = Diagnostics::new();
        analyze_file(&self.file, self.hierarchy, &mut diagnostics);
        RuleSetAnalyzed {
            parsed: self,
            diagnostics,
        }
    }
}

pub struct RuleSetAnalyzed<'h> {
    parsed: RuleSetParsed<'h>,
    diagnostics: Diagnostics,
}

impl RuleSetAnalyzed<'_> {
    pub fn is_valid(&self) -> bool {
        !self.parsed.diagnostics.has_errors() && !self.diagnostics.has_errors()
    }

    /// Semantic diagnostics.
    pub fn analysis_diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Syntax and semantic diagnostics, in that order.
    pub fn diagnostics(&self) -> Diagnostics {
        let mut all = self.parsed.diagnostics.clone();
        all.extend(self.diagnostics.clone());
        all
    }

    /// Render every diagnostic against the rule source.
    pub fn render_diagnostics(&self) -> String {
        self.diagnostics().render(self.parsed.source().unwrap_or_default())
    }

    /// Returns `Err(RuleParseError)` or `Err(RuleAnalyzeError)` if any
    /// diagnostics are errors.
    pub fn compile(&self) -> Result<Program> {
        if self.parsed.diagnostics.has_errors() {
            return Err(Error::RuleParseError(self.parsed.diagnostics.clone()));
        }
        if self.diagnostics.has_errors() {
            return Err(Error::RuleAnalyzeError(self.diagnostics.clone()));
        }
        compile_file(&self.parsed.file, self.parsed.hierarchy, &self.parsed.config)
    }
}

impl<'h> Deref for RuleSetAnalyzed<'h> {
    type Target = RuleSetParsed<'h>;

    fn deref(&self) -> &Self::Target {
        &self.parsed
    }
}

impl TryFrom<&str> for RuleSetAnalyzed<'static> {
    type Error = Error;

    fn try_from(source: &str) -> Result<Self> {
        Ok(RuleSetBuilder::new(source).parse()?.analyze())
    }
}
