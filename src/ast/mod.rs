/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - expressions: Definitions for the expression node kinds and operator tags
/// - statements: Program root and statement node kinds
/// - types: Type-keyword tags used by variable declarations
pub mod expressions;
pub mod statements;
pub mod types;
