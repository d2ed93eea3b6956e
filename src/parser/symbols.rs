//! Symbol tables consulted while parsing.
//!
//! Three tables live for the duration of one parse:
//! - prototypes: declared functions and their arity
//! - functions: defined functions and their arity
//! - variables: names in scope inside the current function body
//!
//! Checks return the diagnostic describing the conflict; the caller attaches
//! the position and turns it into a rule failure.

use std::collections::HashMap;

use crate::{ast::ast::Prototype, errors::errors::ErrorImpl};

/// Functions every translation unit starts with: `(name, parameter names)`.
pub const BUILTIN_FUNCTIONS: &[(&str, &[&str])] = &[("printnum", &["i"])];

/// Prototype nodes for the built-in functions, in declaration order.
pub fn builtin_prototypes() -> Vec<Prototype> {
    BUILTIN_FUNCTIONS
        .iter()
        .map(|(name, params)| Prototype::new(*name, params.iter().map(|param| param.to_string()).collect()))
        .collect()
}

#[derive(Debug, Default)]
pub struct SymbolTables {
    prototypes: HashMap<String, usize>,
    functions: HashMap<String, usize>,
    variables: Vec<String>,
}

impl SymbolTables {
    /// Empty tables seeded with the built-in functions.
    pub fn new() -> Self {
        let mut tables = SymbolTables::default();
        tables.reset();
        tables
    }

    /// Clears every table and re-seeds the built-in functions.
    pub fn reset(&mut self) {
        self.prototypes.clear();
        self.functions.clear();
        self.variables.clear();

        for prototype in builtin_prototypes() {
            self.declare(&prototype);
        }
    }

    /// A declaration conflicts with an earlier one of different arity, or
    /// with any definition of the same name.
    pub fn check_declaration(&self, prototype: &Prototype) -> Result<(), ErrorImpl> {
        self.check_signature(prototype)
    }

    /// A definition conflicts with a declaration of different arity, or with
    /// any earlier definition of the same name.
    pub fn check_definition(&self, prototype: &Prototype) -> Result<(), ErrorImpl> {
        self.check_signature(prototype)
    }

    fn check_signature(&self, prototype: &Prototype) -> Result<(), ErrorImpl> {
        if self.is_defined(&prototype.name) {
            return Err(ErrorImpl::FunctionAlreadyDefined { function: prototype.name.clone() });
        }

        match self.prototypes.get(&prototype.name) {
            Some(&declared) if declared != prototype.arity() => Err(ErrorImpl::FunctionAlreadyDeclared {
                function: prototype.name.clone(),
                declared,
                found: prototype.arity(),
            }),
            _ => Ok(()),
        }
    }

    pub fn declare(&mut self, prototype: &Prototype) {
        self.prototypes.insert(prototype.name.clone(), prototype.arity());
    }

    pub fn define(&mut self, prototype: &Prototype) {
        self.functions.insert(prototype.name.clone(), prototype.arity());
    }

    /// Arity of a callable name, looking at declarations before definitions.
    pub fn arity_of(&self, name: &str) -> Option<usize> {
        self.prototypes.get(name).or_else(|| self.functions.get(name)).copied()
    }

    pub fn is_declared(&self, name: &str) -> bool {
        self.prototypes.contains_key(name)
    }

    pub fn is_defined(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Opens the scope of a function body: only its parameters are visible.
    pub fn enter_function(&mut self, prototype: &Prototype) {
        self.variables.clear();
        self.variables.extend(prototype.params.iter().cloned());
    }

    pub fn declare_local(&mut self, name: &str) -> Result<(), ErrorImpl> {
        if self.is_variable(name) {
            Err(ErrorImpl::VariableAlreadyDeclared { variable: name.to_string() })
        } else {
            self.variables.push(name.to_string());
            Ok(())
        }
    }

    pub fn is_variable(&self, name: &str) -> bool {
        self.variables.iter().any(|variable| variable == name)
    }

    pub fn variables(&self) -> &[String] {
        &self.variables
    }
}
