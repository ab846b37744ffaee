//! Fixed generator settings.
//!
//! The output shape is a hard contract, so none of these are exposed on the
//! command line; they live here to keep the literals in one place.
use crate::codegen::Indent;

#[derive(Debug, Clone)]
pub struct GeneratorSettings {
    /// Class under test; every nested class lives under it.
    pub outer_class: &'static str,
    /// Written to the current working directory.
    pub output_file: &'static str,
    /// Indentation of the root block inside the test method.
    pub base_indent: Indent,
    /// Extra indentation per nesting level.
    pub indent_step: usize,
    /// Extra indentation of builder calls relative to their block.
    pub builder_continuation: usize,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            outer_class: "OuterClass",
            output_file: "GeneratedTest.java",
            base_indent: Indent(8),
            indent_step: 4,
            builder_continuation: 8,
        }
    }
}

impl GeneratorSettings {
    pub fn test_class(&self) -> String {
        format!("{}Test", self.outer_class)
    }

    pub fn test_method(&self) -> String {
        format!("test{}AllConstructorsAndBuilder", self.outer_class)
    }
}
