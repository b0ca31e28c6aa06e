//! Disallow direct usage of `useEffect`.
//!
//! Two cooperating passes over one file, sharing the visitor's binding
//! table:
//!
//! - the import walk records which local identifiers denote `useEffect`
//!   imported from `react`, including renamed imports
//!   (`import { useEffect as fx } from 'react'`);
//! - the call walk reports every invocation whose callee resolves through
//!   that table, plus the qualified form `React.useEffect(...)`, which is
//!   matched textually against the conventional default-import name without
//!   verifying the import itself.
//!
//! Findings are anchored at the callee, never at the import specifier, so an
//! unused import produces nothing and an aliased call is still caught.

use std::collections::HashMap;

use swc_ecma_ast::{CallExpr, Callee, Expr, ImportDecl, ImportSpecifier, MemberProp, ModuleExportName};
use swc_ecma_visit::{Visit, VisitWith};

use crate::linter::{LintRule, RuleContext, RuleKind, RuleMeta};

pub const RULE_NAME: &str = "no-use-effect";

pub const MESSAGE_ID: &str = "noUseEffect";

/// Fixed message template; identical for every occurrence.
pub const MESSAGE: &str =
    "Direct usage of useEffect is not allowed. Use useMajboori instead and provide a reason.";

/// Module the forbidden symbol is exported from.
const REACT_MODULE: &str = "react";

/// Exported name of the forbidden symbol.
const USE_EFFECT: &str = "useEffect";

/// Conventional default-import name used for qualified access. Matched
/// textually: `React.useEffect(...)` is reported whether or not `React` was
/// actually imported from `react`, trading a sliver of precision for not
/// having to do import analysis on the namespace object.
const REACT_NAMESPACE: &str = "React";

pub static META: RuleMeta = RuleMeta {
    name: RULE_NAME,
    kind: RuleKind::Problem,
    description: "Disallow direct usage of useEffect. Use useMajboori instead.",
    recommended: true,
    messages: &[(MESSAGE_ID, MESSAGE)],
};

/// How a local name resolves to the forbidden symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Binding {
    source_module: String,
    imported_name: String,
}

pub struct NoUseEffect;

impl LintRule for NoUseEffect {
    type Visitor<'a>
        = NoUseEffectVisitor<'a>
    where
        Self: 'a;

    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn create<'a>(&'a self, context: &'a RuleContext) -> NoUseEffectVisitor<'a> {
        NoUseEffectVisitor {
            context,
            bindings: HashMap::new(),
        }
    }
}

pub struct NoUseEffectVisitor<'a> {
    context: &'a RuleContext,
    /// Local names that currently denote `useEffect`, keyed by local name.
    /// Later imports of the same local name overwrite earlier ones.
    bindings: HashMap<String, Binding>,
}

impl Visit for NoUseEffectVisitor<'_> {
    fn visit_import_decl(&mut self, node: &ImportDecl) {
        let Some(module_path) = node.src.value.as_str() else {
            return;
        };

        for specifier in &node.specifiers {
            match specifier {
                ImportSpecifier::Named(named) => {
                    let local_name = named.local.sym.to_string();
                    let imported_name = named
                        .imported
                        .as_ref()
                        .map(|imported| match imported {
                            ModuleExportName::Ident(ident) => ident.sym.to_string(),
                            ModuleExportName::Str(s) => s.value.to_string_lossy().to_string(),
                        })
                        .unwrap_or_else(|| local_name.clone());

                    if module_path == REACT_MODULE && imported_name == USE_EFFECT {
                        self.bindings.insert(
                            local_name,
                            Binding {
                                source_module: module_path.to_string(),
                                imported_name,
                            },
                        );
                    } else {
                        // Last-write-wins: a later import re-binding the same
                        // local name shadows any tracked binding.
                        self.bindings.remove(&local_name);
                    }
                }
                ImportSpecifier::Default(default) => {
                    self.bindings.remove(default.local.sym.as_str());
                }
                ImportSpecifier::Namespace(ns) => {
                    self.bindings.remove(ns.local.sym.as_str());
                }
            }
        }
    }

    fn visit_call_expr(&mut self, node: &CallExpr) {
        if let Callee::Expr(expr) = &node.callee {
            match &**expr {
                // Direct call through a tracked binding: useEffect(...) or
                // an alias like fx(...)
                Expr::Ident(ident) => {
                    if let Some(binding) = self.bindings.get(ident.sym.as_str())
                        && binding.source_module == REACT_MODULE
                        && binding.imported_name == USE_EFFECT
                    {
                        self.context.report(ident.span, MESSAGE_ID);
                    }
                }
                // Qualified call: React.useEffect(...)
                Expr::Member(member) => {
                    if let Expr::Ident(obj) = &*member.obj
                        && obj.sym.as_str() == REACT_NAMESPACE
                        && let MemberProp::Ident(prop) = &member.prop
                        && prop.sym.as_str() == USE_EFFECT
                    {
                        self.context.report(member.span, MESSAGE_ID);
                    }
                }
                // Computed access, call results, parenthesized wrappers and
                // every other callee shape: not a match.
                _ => {}
            }
        }

        node.visit_children_with(self);
    }
}
