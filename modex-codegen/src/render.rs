//! Rendering the namespace tree into dialect-specific text.

use modex_core::Dialect;
use modex_manifest::IndexOptions;

use crate::tree::{ModuleTree, Namespace, Node};

/// Notice emitted on the first line of every generated file.
const GENERATED_NOTICE: &str = "This file was auto-generated by modex, DO NOT edit it directly";

/// Token set for one output dialect.
///
/// The recursive renderer is shared; implementations only supply syntax.
pub trait DialectSyntax {
    /// Opening line for a named namespace.
    fn namespace_open(&self, name: &str) -> String;

    /// Closing token, for dialects that delimit blocks.
    fn namespace_close(&self) -> Option<&'static str>;

    /// Separator between sibling entries.
    fn entry_separator(&self) -> &'static str;

    /// A leaf binding of a module name to its require reference.
    fn alias_binding(&self, name: &str, reference: &str) -> String;

    /// Prefix for header comment lines.
    fn comment_prefix(&self) -> &'static str;

    /// Line opening the export expression.
    fn prologue(&self) -> &'static str;

    /// Text closing the export expression, including the EOF marker.
    fn epilogue(&self) -> &'static str;
}

/// Indentation-significant CoffeeScript output.
pub struct CoffeeSyntax;

impl DialectSyntax for CoffeeSyntax {
    fn namespace_open(&self, name: &str) -> String {
        format!("{}:", name)
    }

    fn namespace_close(&self) -> Option<&'static str> {
        None
    }

    fn entry_separator(&self) -> &'static str {
        "\n"
    }

    fn alias_binding(&self, name: &str, reference: &str) -> String {
        format!("{}: require \"{}\"", name, reference)
    }

    fn comment_prefix(&self) -> &'static str {
        "#!"
    }

    fn prologue(&self) -> &'static str {
        "module.exports = exports =\n"
    }

    fn epilogue(&self) -> &'static str {
        "\n#EOF\n"
    }
}

/// Brace-delimited JavaScript output.
pub struct JsSyntax;

impl DialectSyntax for JsSyntax {
    fn namespace_open(&self, name: &str) -> String {
        format!("\"{}\": {{", name)
    }

    fn namespace_close(&self) -> Option<&'static str> {
        Some("}")
    }

    fn entry_separator(&self) -> &'static str {
        ",\n"
    }

    fn alias_binding(&self, name: &str, reference: &str) -> String {
        format!("\"{}\": require(\"{}\")", name, reference)
    }

    fn comment_prefix(&self) -> &'static str {
        "//!"
    }

    fn prologue(&self) -> &'static str {
        "module.exports = exports = {\n"
    }

    fn epilogue(&self) -> &'static str {
        "};\n//EOF\n"
    }
}

/// Syntax strategy for a dialect.
pub fn syntax_for(dialect: Dialect) -> &'static dyn DialectSyntax {
    match dialect {
        Dialect::Coffee => &CoffeeSyntax,
        Dialect::Js => &JsSyntax,
    }
}

/// Render the tree body without the export wrapper.
///
/// Entries start at one indent level; the root itself emits nothing.
pub fn render_body(tree: &ModuleTree, options: &IndexOptions) -> String {
    let syntax = syntax_for(options.format);
    render_namespace(tree.root(), 1, syntax, options)
}

/// Render the complete index file: header notice, export prologue, body,
/// and the dialect's EOF marker.
pub fn render_index(tree: &ModuleTree, options: &IndexOptions) -> String {
    let syntax = syntax_for(options.format);

    let mut out = String::new();
    out.push_str(syntax.comment_prefix());
    out.push(' ');
    out.push_str(GENERATED_NOTICE);
    out.push('\n');
    if let Some(notice) = &options.notice {
        out.push_str(syntax.comment_prefix());
        out.push(' ');
        out.push_str(notice);
        out.push('\n');
    }

    out.push_str(syntax.prologue());
    let body = render_body(tree, options);
    if !body.is_empty() {
        out.push_str(&body);
        out.push('\n');
    }
    out.push_str(syntax.epilogue());
    out
}

fn render_namespace(
    namespace: &Namespace,
    depth: usize,
    syntax: &dyn DialectSyntax,
    options: &IndexOptions,
) -> String {
    let pad = options.indent.as_str().repeat(depth);

    let entries: Vec<String> = namespace
        .iter()
        .map(|(name, node)| match node {
            Node::Alias(reference) => {
                format!("{}{}", pad, syntax.alias_binding(name, reference))
            }
            Node::Namespace(child) => {
                let mut block = format!("{}{}\n", pad, syntax.namespace_open(name));
                block.push_str(&render_namespace(child, depth + 1, syntax, options));
                if let Some(close) = syntax.namespace_close() {
                    block.push('\n');
                    block.push_str(&pad);
                    block.push_str(close);
                }
                block
            }
        })
        .collect();

    entries.join(syntax.entry_separator())
}
