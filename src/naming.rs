//! Field-name validation and the class naming derived from it.
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NamingError {
    #[error("field name is empty")]
    Empty,

    #[error("`{0}` is not a valid Java identifier")]
    NotAnIdentifier(String),

    #[error("`{0}` is a reserved word in Java")]
    Reserved(String),
}

static JAVA_IDENTIFIER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\p{L}_$][\p{L}\p{N}_$]*$").expect("Invalid regex")
});

const RESERVED: &[&str] = &[
    "_", "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class",
    "const", "continue", "default", "do", "double", "else", "enum", "extends", "false", "final",
    "finally", "float", "for", "goto", "if", "implements", "import", "instanceof", "int",
    "interface", "long", "native", "new", "null", "package", "private", "protected", "public",
    "return", "short", "static", "strictfp", "super", "switch", "synchronized", "this", "throw",
    "throws", "transient", "true", "try", "void", "volatile", "while",
];

pub fn is_reserved(word: &str) -> bool {
    RESERVED.contains(&word)
}

/// Uppercase the first character, leave the rest unchanged.
pub fn capitalize(name: &str) -> Result<String, NamingError> {
    let mut chars = name.chars();
    let first = chars.next().ok_or(NamingError::Empty)?;
    Ok(first.to_uppercase().chain(chars).collect())
}

/// A field name must work as a builder method name, so it has to be a
/// plain Java identifier.
pub fn validate_field_name(name: &str) -> Result<(), NamingError> {
    if name.is_empty() {
        return Err(NamingError::Empty);
    }
    if is_reserved(name) {
        return Err(NamingError::Reserved(name.to_string()));
    }
    if !JAVA_IDENTIFIER.is_match(name) {
        return Err(NamingError::NotAnIdentifier(name.to_string()));
    }
    Ok(())
}

/// `getCity` for `city`.
pub fn accessor(name: &str) -> Result<String, NamingError> {
    validate_field_name(name)?;
    Ok(format!("get{}", capitalize(name)?))
}

/// Name of a generated class and its place under the outer class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassSpec {
    pub name: String,
    /// Dot-joined chain from the outer class, e.g. `OuterClass.Address.Geo`.
    pub qualified: String,
    var: String,
}

impl ClassSpec {
    pub fn root(name: &str) -> Self {
        Self { name: name.to_string(), qualified: name.to_string(), var: name.to_lowercase() }
    }

    /// Class for the nested object introduced by `field`.
    pub fn child(&self, field: &str) -> Result<Self, NamingError> {
        validate_field_name(field)?;
        let name = capitalize(field)?;
        // `Int` is a fine field but `int` is not a variable
        let var = name.to_lowercase();
        if is_reserved(&var) {
            return Err(NamingError::Reserved(var));
        }
        let qualified = format!("{}.{}", self.qualified, name);
        Ok(Self { name, qualified, var })
    }

    /// Stem of the instance variables declared for this class.
    pub fn var_name(&self) -> String {
        self.var.clone()
    }

    /// Stem built from every class below the outer one, e.g. `workaddress`
    /// for `OuterClass.Work.Address`.
    pub fn chained_var(&self) -> String {
        self.qualified
            .split('.')
            .skip(1)
            .collect::<String>()
            .to_lowercase()
    }

    pub fn with_var(mut self, var: String) -> Self {
        self.var = var;
        self
    }
}
