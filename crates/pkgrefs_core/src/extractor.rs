use log::trace;
use oxc_ast::ast::*;
use oxc_ast_visit::{Visit, walk};

use crate::types::{RawReference, ReferenceTag};

/// The syntactic shapes that name an external module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReferenceSite<'s> {
    /// `export { a } from "x"`, `export * from "x"`
    ReExport(&'s str),
    /// `import a from "x"`, `import type { A } from "x"`, `import "x"`
    Import(&'s str, ReferenceTag),
    /// `import a = require("x")`
    ImportEquals(&'s str),
    /// `import("x")`
    DynamicImport(&'s str),
    /// `require("x")`
    Require(&'s str),
}

impl ReferenceSite<'_> {
    fn into_raw(self) -> RawReference {
        let (specifier, tag) = match self {
            ReferenceSite::Import(specifier, tag) => (specifier, tag),
            ReferenceSite::ReExport(specifier)
            | ReferenceSite::ImportEquals(specifier)
            | ReferenceSite::DynamicImport(specifier)
            | ReferenceSite::Require(specifier) => (specifier, ReferenceTag::Normal),
        };
        RawReference { specifier: specifier.to_string(), tag }
    }
}

/// Walk a parsed program and list every module reference site in source order.
///
/// Duplicates are kept and specifiers are not normalized.
pub fn extract_raw_references(program: &Program<'_>) -> Vec<RawReference> {
    let mut collector = ReferenceCollector::default();
    collector.visit_program(program);
    collector.references
}

#[derive(Default)]
struct ReferenceCollector {
    references: Vec<RawReference>,
}

impl ReferenceCollector {
    fn record(&mut self, site: ReferenceSite<'_>) {
        trace!("Found reference site: {:?}", site);
        self.references.push(site.into_raw());
    }
}

impl<'a> Visit<'a> for ReferenceCollector {
    fn visit_import_declaration(&mut self, it: &ImportDeclaration<'a>) {
        self.record(ReferenceSite::Import(it.source.value.as_str(), import_tag(it)));
    }

    fn visit_export_named_declaration(&mut self, it: &ExportNamedDeclaration<'a>) {
        match &it.source {
            Some(source) => self.record(ReferenceSite::ReExport(source.value.as_str())),
            // `export function f() { return require("x") }`
            None => walk::walk_export_named_declaration(self, it),
        }
    }

    fn visit_export_all_declaration(&mut self, it: &ExportAllDeclaration<'a>) {
        self.record(ReferenceSite::ReExport(it.source.value.as_str()));
    }

    fn visit_ts_import_equals_declaration(&mut self, it: &TSImportEqualsDeclaration<'a>) {
        match &it.module_reference {
            TSModuleReference::ExternalModuleReference(external) => {
                self.record(ReferenceSite::ImportEquals(external.expression.value.as_str()));
            }
            // `import X = A.B` names a namespace, not a module
            _ => walk::walk_ts_import_equals_declaration(self, it),
        }
    }

    fn visit_import_expression(&mut self, it: &ImportExpression<'a>) {
        match dynamic_import_site(it) {
            Some(site) => self.record(site),
            None => walk::walk_import_expression(self, it),
        }
    }

    fn visit_call_expression(&mut self, it: &CallExpression<'a>) {
        match require_site(it) {
            Some(site) => self.record(site),
            None => walk::walk_call_expression(self, it),
        }
    }
}

/// A declaration is type-only when the whole clause is marked `type`, or when it has
/// bindings and every one of them is an individually type-only named binding.
fn import_tag(decl: &ImportDeclaration<'_>) -> ReferenceTag {
    if decl.import_kind.is_type() {
        return ReferenceTag::TypeOnly;
    }

    let all_bindings_type_only = decl.specifiers.as_ref().is_some_and(|specifiers| {
        !specifiers.is_empty()
            && specifiers.iter().all(|spec| match spec {
                ImportDeclarationSpecifier::ImportSpecifier(s) => s.import_kind.is_type(),
                ImportDeclarationSpecifier::ImportDefaultSpecifier(_) => false,
                ImportDeclarationSpecifier::ImportNamespaceSpecifier(_) => false,
            })
    });

    if all_bindings_type_only { ReferenceTag::TypeOnly } else { ReferenceTag::Normal }
}

/// `import("x")` with nothing but a string literal argument.
fn dynamic_import_site<'s>(expr: &'s ImportExpression<'_>) -> Option<ReferenceSite<'s>> {
    // `import.source("x")` and `import.defer("x")` do not use the bare import callee
    if expr.phase.is_some() || expr.options.is_some() {
        return None;
    }
    match &expr.source {
        Expression::StringLiteral(sl) => Some(ReferenceSite::DynamicImport(sl.value.as_str())),
        _ => None,
    }
}

/// `require("x")`: a bare `require` callee with exactly one string literal argument.
fn require_site<'s>(call: &'s CallExpression<'_>) -> Option<ReferenceSite<'s>> {
    let Expression::Identifier(callee) = &call.callee else {
        return None;
    };
    // `require<T>("x")` and `require?.("x")` carry extra syntax
    if callee.name.as_str() != "require"
        || call.optional
        || call.type_arguments.is_some()
        || call.arguments.len() != 1
    {
        return None;
    }
    match call.arguments[0].as_expression() {
        Some(Expression::StringLiteral(sl)) => Some(ReferenceSite::Require(sl.value.as_str())),
        _ => None,
    }
}
