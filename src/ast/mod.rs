/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Translation unit, prototypes, function definitions and bodies
/// - expressions: Definitions for the expression kinds
/// - statements: Definitions for the statement kinds
///
/// Every node exclusively owns its children; nothing is shared between two
/// parents.
pub mod ast;
pub mod expressions;
pub mod statements;
