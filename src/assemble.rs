//! Wrap the walked schema in the fixed JUnit test class.
use crate::codegen::{Codegen, Indent};
use crate::error::GenError;
use crate::ir::Nested;
use crate::settings::GeneratorSettings;
use crate::walker::SchemaWalker;

const IMPORTS: &[&str] = &[
    "import org.junit.jupiter.api.Test;",
    "",
    "import java.util.Arrays;",
    "",
    "import static org.junit.jupiter.api.Assertions.assertEquals;",
    "import static org.junit.jupiter.api.Assertions.assertNotNull;",
];

pub fn assemble(root: &Nested) -> Result<String, GenError> {
    assemble_with(root, &GeneratorSettings::default())
}

/// Pure transformation: the whole text is built before anything is written.
pub fn assemble_with(root: &Nested, settings: &GeneratorSettings) -> Result<String, GenError> {
    let body = SchemaWalker::new(settings).walk_root(root)?;

    let top = Indent(0);
    let member = top.deeper(settings.indent_step);

    let mut cg = Codegen::new();
    for import in IMPORTS {
        cg.line(top, import);
    }
    cg.blank();
    cg.line(top, format!("public class {} {{", settings.test_class()));
    cg.blank();
    cg.line(member, "@Test");
    cg.line(member, format!("public void {}() {{", settings.test_method()));
    body.emit(&mut cg);
    cg.line(member, "}");
    cg.line(top, "}");
    Ok(cg.into_string())
}
