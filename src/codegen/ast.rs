//! Minimal Go syntax tree for generated model files

/// A Go source file
#[derive(Debug, Clone, PartialEq)]
pub struct GoFile {
    pub package: String,
    /// Import paths, unquoted
    pub imports: Vec<String>,
    pub decls: Vec<Decl>,
}

/// A top-level declaration
#[derive(Debug, Clone, PartialEq)]
pub enum Decl {
    Struct(StructDecl),
    Method(MethodDecl),
}

/// `type Name struct { ... }`
#[derive(Debug, Clone, PartialEq)]
pub struct StructDecl {
    /// Leading `//` comment text
    pub doc: Option<String>,
    pub name: String,
    pub fields: Vec<StructField>,
}

/// One struct member
#[derive(Debug, Clone, PartialEq)]
pub struct StructField {
    pub name: String,
    pub ty: String,
    /// Struct tag content, without the surrounding quotes
    pub tag: Option<String>,
    /// Trailing `//` comment text
    pub comment: Option<String>,
}

/// `func (recv *Type) Name() Result { body }`
#[derive(Debug, Clone, PartialEq)]
pub struct MethodDecl {
    pub receiver: String,
    pub receiver_type: String,
    pub pointer_receiver: bool,
    pub name: String,
    pub results: Vec<String>,
    pub body: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Return(Vec<Expr>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// String literal; the printer takes care of quoting
    Str(String),
}
