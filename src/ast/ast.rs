use std::fmt::Display;

use super::statements::Stmt;

/// Translation Unit
///
/// The root of one parsed source file: every prototype declaration followed
/// by every function definition, both in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TranslationUnit {
    prototypes: Vec<Prototype>,
    functions: Vec<FunctionDefinition>,
}

impl TranslationUnit {
    pub fn new() -> Self {
        TranslationUnit::default()
    }

    pub fn add_prototype(&mut self, prototype: Prototype) {
        self.prototypes.push(prototype);
    }

    pub fn add_function(&mut self, function: FunctionDefinition) {
        self.functions.push(function);
    }

    pub fn add(&mut self, declaration: ExternalDecl) {
        match declaration {
            ExternalDecl::Prototype(prototype) => self.add_prototype(prototype),
            ExternalDecl::Function(function) => self.add_function(function),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.prototypes.is_empty() && self.functions.is_empty()
    }

    /// Returns the i-th prototype, if present.
    pub fn prototype(&self, i: usize) -> Option<&Prototype> {
        self.prototypes.get(i)
    }

    /// Returns the i-th function definition, if present.
    pub fn function(&self, i: usize) -> Option<&FunctionDefinition> {
        self.functions.get(i)
    }

    pub fn prototypes(&self) -> &[Prototype] {
        &self.prototypes
    }

    pub fn functions(&self) -> &[FunctionDefinition] {
        &self.functions
    }
}

/// Either half of an external declaration, before it is filed into the unit.
#[derive(Debug, Clone, PartialEq)]
pub enum ExternalDecl {
    Prototype(Prototype),
    Function(FunctionDefinition),
}

/// Prototype
///
/// A function signature. Every parameter is an `int`.
#[derive(Debug, Clone, PartialEq)]
pub struct Prototype {
    pub name: String,
    pub params: Vec<String>,
}

impl Prototype {
    pub fn new(name: impl Into<String>, params: Vec<String>) -> Self {
        Prototype {
            name: name.into(),
            params,
        }
    }

    pub fn param(&self, i: usize) -> Option<&str> {
        self.params.get(i).map(String::as_str)
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

/// Function Definition
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDefinition {
    pub prototype: Prototype,
    pub body: FunctionBody,
}

impl FunctionDefinition {
    pub fn new(prototype: Prototype, body: FunctionBody) -> Self {
        FunctionDefinition { prototype, body }
    }

    pub fn name(&self) -> &str {
        &self.prototype.name
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclKind {
    Parameter,
    Local,
}

/// Variable Declaration
#[derive(Debug, Clone, PartialEq)]
pub struct VariableDecl {
    pub name: String,
    pub kind: DeclKind,
}

impl VariableDecl {
    pub fn new(name: impl Into<String>, kind: DeclKind) -> Self {
        VariableDecl {
            name: name.into(),
            kind,
        }
    }
}

/// Function Body
///
/// Parameters come first in `variable_decls`, followed by the locals in
/// source order. The last statement of a parsed body is always a return.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FunctionBody {
    pub variable_decls: Vec<VariableDecl>,
    pub statements: Vec<Stmt>,
}

impl FunctionBody {
    pub fn new() -> Self {
        FunctionBody::default()
    }

    pub fn add_variable_decl(&mut self, decl: VariableDecl) {
        self.variable_decls.push(decl);
    }

    pub fn add_statement(&mut self, stmt: Stmt) {
        self.statements.push(stmt);
    }

    pub fn variable_decl(&self, i: usize) -> Option<&VariableDecl> {
        self.variable_decls.get(i)
    }

    pub fn statement(&self, i: usize) -> Option<&Stmt> {
        self.statements.get(i)
    }

    pub fn locals(&self) -> impl Iterator<Item = &VariableDecl> {
        self.variable_decls.iter().filter(|decl| decl.kind == DeclKind::Local)
    }
}

impl Display for Prototype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "int {}(", self.name)?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "int {}", param)?;
        }
        write!(f, ")")
    }
}

impl Display for FunctionDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} {{", self.prototype)?;
        for decl in self.body.locals() {
            writeln!(f, "    int {};", decl.name)?;
        }
        for stmt in &self.body.statements {
            writeln!(f, "    {}", stmt)?;
        }
        write!(f, "}}")
    }
}

impl Display for TranslationUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for prototype in &self.prototypes {
            writeln!(f, "{};", prototype)?;
        }
        for function in &self.functions {
            writeln!(f, "{}", function)?;
        }
        Ok(())
    }
}
