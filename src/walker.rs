//! Recursive schema walk producing one test block per nested object.
//!
//! Each object yields a `Fragment`: the constructor arguments, builder calls
//! and assertions for its own fields, plus the already-rendered blocks of its
//! nested children. Children are rendered first so every instance variable is
//! declared before the parent constructor references it.
use indexmap::IndexSet;

use crate::codegen::{Codegen, Indent};
use crate::error::GenError;
use crate::ir::{self, Nested, SchemaNode};
use crate::literal;
use crate::naming::{self, ClassSpec};
use crate::settings::GeneratorSettings;

#[derive(Debug)]
pub struct Fragment {
    pub class: ClassSpec,
    pub indent: Indent,
    pub constructor_args: Vec<String>,
    /// `.field(value)` calls in field order.
    pub builder_calls: Vec<String>,
    /// Complete statements in field order.
    pub assertions: Vec<String>,
    /// Rendered blocks of nested children, in field order.
    nested: Codegen,
    builder_continuation: usize,
}

impl Fragment {
    fn new(class: ClassSpec, indent: Indent, builder_continuation: usize) -> Self {
        Self {
            class,
            indent,
            constructor_args: Vec::new(),
            builder_calls: Vec::new(),
            assertions: Vec::new(),
            nested: Codegen::new(),
            builder_continuation,
        }
    }

    fn push_value(&mut self, key: &str, var: &str, getter: &str, lit: String) {
        self.builder_calls.push(format!(".{key}({lit})"));
        self.assertions.push(format!("assertEquals({lit}, {var}.{getter}());"));
        self.constructor_args.push(lit);
    }

    /// Child blocks first, then this object's three constructions and its assertions.
    pub fn emit(self, cg: &mut Codegen) {
        let Fragment { class, indent, constructor_args, builder_calls, assertions, nested, builder_continuation } = self;
        let q = &class.qualified;
        let v = class.var_name();
        let cont = indent.deeper(builder_continuation);

        cg.append(nested);
        cg.blank();
        cg.line(indent, "// When using AllArgsConstructor");
        cg.line(indent, format!("{q} {v}AllArgs = new {q}({});", constructor_args.join(", ")));
        cg.line(indent, "// When using Builder");
        cg.line(indent, format!("{q} {v}Builder = {q}.builder()"));
        for call in &builder_calls {
            cg.line(cont, call);
        }
        cg.line(cont, ".build();");
        cg.line(indent, "// When using NoArgsConstructor");
        cg.line(indent, format!("{q} {v}NoArgs = new {q}();"));
        cg.line(indent, "// Then");
        cg.line(indent, format!("assertNotNull({v}AllArgs);"));
        cg.line(indent, format!("assertNotNull({v}Builder);"));
        cg.line(indent, format!("assertNotNull({v}NoArgs);"));
        cg.line(indent, format!("{q} {v} = {v}AllArgs;"));
        for assertion in &assertions {
            cg.line(indent, assertion);
        }
        cg.blank();
    }

}

#[cfg(test)]
impl Fragment {
    pub fn render(self) -> String {
        let mut cg = Codegen::new();
        self.emit(&mut cg);
        cg.into_string()
    }
}

/// Walks one document. Tracks the instance variables declared so far, since
/// every block lands in the same test method.
pub struct SchemaWalker<'a> {
    settings: &'a GeneratorSettings,
    declared: IndexSet<String>,
}

impl<'a> SchemaWalker<'a> {
    pub fn new(settings: &'a GeneratorSettings) -> Self {
        Self { settings, declared: IndexSet::new() }
    }

    /// Walk the document root as the outer class.
    pub fn walk_root(&mut self, root: &Nested) -> Result<Fragment, GenError> {
        let class = ClassSpec::root(self.settings.outer_class);
        self.walk(root, &class, self.settings.base_indent, ir::ROOT_PATH)
    }

    pub fn walk(
        &mut self,
        node: &Nested,
        class: &ClassSpec,
        indent: Indent,
        path: &str,
    ) -> Result<Fragment, GenError> {
        let var = class.var_name();
        self.declared.insert(var.clone());

        let mut frag = Fragment::new(class.clone(), indent, self.settings.builder_continuation);

        for (key, value) in &node.fields {
            let field_path = ir::field_path(path, key);
            let getter = naming::accessor(key).map_err(|e| GenError::naming(&field_path, e))?;

            match value {
                SchemaNode::Scalar(scalar) => {
                    let lit = literal::render_scalar(scalar).map_err(|e| GenError::render(&field_path, e))?;
                    frag.push_value(key, &var, &getter, lit);
                }
                SchemaNode::List(items) => {
                    let lit = literal::render_list(items).map_err(|e| GenError::render(&field_path, e))?;
                    frag.push_value(key, &var, &getter, lit);
                }
                SchemaNode::Nested(child) => {
                    let child_class = class.child(key).map_err(|e| GenError::naming(&field_path, e))?;
                    let child_class = self.claim_var(child_class);
                    let inner = self.walk(
                        child,
                        &child_class,
                        indent.deeper(self.settings.indent_step),
                        &field_path,
                    )?;
                    inner.emit(&mut frag.nested);

                    let child_var = child_class.var_name();
                    frag.constructor_args.push(child_var.clone());
                    frag.builder_calls.push(format!(".{key}({child_var})"));
                    frag.assertions.push(format!("assertNotNull({var}.{getter}());"));
                    grandchild_assertions(&mut frag, &var, &getter, child, &field_path)?;
                }
            }
        }

        Ok(frag)
    }

    /// Keep the field-derived stem unless an earlier block already declared
    /// it; then fall back to the class chain, numbered if that is taken too.
    fn claim_var(&self, class: ClassSpec) -> ClassSpec {
        if !self.declared.contains(&class.var_name()) {
            return class;
        }
        let chained = class.chained_var();
        let mut candidate = chained.clone();
        let mut n = 2;
        while self.declared.contains(&candidate) || naming::is_reserved(&candidate) {
            candidate = format!("{chained}{n}");
            n += 1;
        }
        class.with_var(candidate)
    }
}

/// One shallow assertion per field of `child`, reached through the parent's
/// accessor. Deeper levels are left to the child's own block.
fn grandchild_assertions(
    frag: &mut Fragment,
    var: &str,
    getter: &str,
    child: &Nested,
    child_path: &str,
) -> Result<(), GenError> {
    for (key, value) in &child.fields {
        let path = ir::field_path(child_path, key);
        let inner_getter = naming::accessor(key).map_err(|e| GenError::naming(&path, e))?;
        let chain = format!("{var}.{getter}().{inner_getter}()");
        match literal::render_node(value).map_err(|e| GenError::render(&path, e))? {
            Some(lit) => frag.assertions.push(format!("assertEquals({lit}, {chain});")),
            None => frag.assertions.push(format!("assertNotNull({chain});")),
        }
    }
    Ok(())
}
