//! Rule engine: the host side of the lint rule contract.
//!
//! A rule exposes immutable metadata ([`RuleMeta`], read once at
//! registration) and a `create` entry point that builds a fresh visitor for
//! one file's traversal. The visitor's node-category dispatch is the
//! statically checked [`swc_ecma_visit::Visit`] trait: a rule overrides
//! exactly the node hooks it cares about (import declarations, call
//! expressions) and ignores everything else.
//!
//! [`RuleContext`] is constructed fresh for every file and rule. It exposes
//! exactly one capability to rule code: [`RuleContext::report`]. Nothing is
//! shared or reused across files, so analyzing many files in parallel needs
//! no synchronization beyond each file owning its own context.

use std::cell::RefCell;

use swc_common::Span;
use swc_ecma_ast::Module;
use swc_ecma_visit::{Visit, VisitWith};

/// Classification of a rule. Findings of a `Problem` rule describe code that
/// is considered incorrect, not merely stylistic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    Problem,
}

/// Immutable rule metadata, read once when the rule is registered.
///
/// `messages` maps stable message ids to fixed templates with no
/// placeholders: every occurrence of a finding renders identically. Rules
/// take no configuration, so there is no options schema.
#[derive(Debug)]
pub struct RuleMeta {
    /// Stable rule identifier (e.g. `no-use-effect`).
    pub name: &'static str,
    pub kind: RuleKind,
    /// One-line documentation string.
    pub description: &'static str,
    /// Whether the rule is part of the recommended preset.
    pub recommended: bool,
    /// Message-id to template table.
    pub messages: &'static [(&'static str, &'static str)],
}

impl RuleMeta {
    /// Look up a message template by id.
    pub fn message(&self, id: &str) -> Option<&'static str> {
        self.messages
            .iter()
            .find(|(message_id, _)| *message_id == id)
            .map(|(_, template)| *template)
    }
}

/// A single finding: the syntax node span to underline and the id of the
/// message describing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Diagnostic {
    pub span: Span,
    pub message_id: &'static str,
}

/// Per-file, per-rule traversal state handed to a rule's visitor.
///
/// Created at traversal start and discarded at traversal end. Reusing a
/// context across files would leak findings between them, so [`run_rule`]
/// always allocates a fresh one.
#[derive(Debug, Default)]
pub struct RuleContext {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl RuleContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finding anchored at `span`.
    pub fn report(&self, span: Span, message_id: &'static str) {
        self.diagnostics
            .borrow_mut()
            .push(Diagnostic { span, message_id });
    }

    /// Consume the context, yielding findings in traversal order.
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics.into_inner()
    }
}

/// A lint rule: metadata plus a visitor factory.
///
/// `create` is invoked once per file with that file's fresh context; the
/// returned visitor holds whatever traversal state the rule needs (e.g. a
/// binding table) and reports through the context.
pub trait LintRule {
    type Visitor<'a>: Visit + 'a
    where
        Self: 'a;

    fn meta(&self) -> &'static RuleMeta;

    fn create<'a>(&'a self, context: &'a RuleContext) -> Self::Visitor<'a>;
}

/// Drive one rule over one parsed module.
///
/// A single forward depth-first pass with no backtracking or re-visitation:
/// the host walks the tree once, the visitor fires on matching node
/// categories, and the accumulated diagnostics are returned. Running this
/// twice over the same module yields identical results.
pub fn run_rule<R: LintRule>(rule: &R, module: &Module) -> Vec<Diagnostic> {
    let context = RuleContext::new();
    let mut visitor = rule.create(&context);
    module.visit_with(&mut visitor);
    drop(visitor);
    context.into_diagnostics()
}
