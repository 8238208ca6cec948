//! Template Composition Engine.
//!
//! A fixed registry of named fragments plus the helpers every fragment can
//! call. One engine is built per artifact kind; the `ref` and `var_dict`
//! helpers are bound to that kind's reference syntax at construction time.

use std::collections::BTreeMap;

use minijinja::{Environment, Error, ErrorKind, State, UndefinedBehavior, Value};
use serde::Serialize;

use crate::domain::identifiers::naming::{
    archive_identifier_of, identifier_of, scoped_identifier_dict, scoped_identifier_of,
    stage_identifier_of, stamp_identifier_of, url_identifier_of,
};
use crate::domain::{Fragment, TemplateError};

/// Unit of indentation used by [`indent_wrap`].
const INDENT_UNIT: &str = "\t";

/// Name reported for failures of [`TemplateEngine::render_str`].
const INLINE_TEMPLATE_NAME: &str = "<inline>";

/// Immutable fragment registry with composition helpers.
#[derive(Debug)]
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Register `fragments` and bind helpers to `reference`.
    ///
    /// A later fragment with the same name replaces an earlier one, which is
    /// how an artifact kind overrides a shared fragment.
    pub fn new<I>(reference: fn(&str) -> String, fragments: I) -> Result<Self, TemplateError>
    where
        I: IntoIterator<Item = Fragment>,
    {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);

        register_helpers(&mut env, reference);

        for fragment in fragments {
            let Fragment { name, source } = fragment;
            env.add_template_owned(name.clone(), source).map_err(|e| {
                TemplateError::Register { name: name.clone(), details: describe(&e) }
            })?;
        }

        Ok(Self { env })
    }

    /// Whether a fragment of this name is registered.
    pub fn has_fragment(&self, name: &str) -> bool {
        self.env.get_template(name).is_ok()
    }

    /// Render a registered fragment.
    pub fn render<S: Serialize>(&self, name: &str, ctx: &S) -> Result<String, TemplateError> {
        let template =
            self.env.get_template(name).map_err(|_| TemplateError::NotFound(name.to_string()))?;
        template
            .render(ctx)
            .map_err(|e| TemplateError::Render { name: name.to_string(), details: describe(&e) })
    }

    /// Parse and render an inline template.
    pub fn render_str<S: Serialize>(&self, source: &str, ctx: &S) -> Result<String, TemplateError> {
        self.env.render_str(source, ctx).map_err(|e| TemplateError::Render {
            name: INLINE_TEMPLATE_NAME.to_string(),
            details: describe(&e),
        })
    }
}

fn register_helpers(env: &mut Environment<'static>, reference: fn(&str) -> String) {
    env.add_function("identifier", |name: &str| identifier_of(name));
    env.add_function("url_identifier", |name: &str| url_identifier_of(name));
    env.add_function("archive_identifier", |name: &str| archive_identifier_of(name));
    env.add_function("stamp_identifier", |name: &str| stamp_identifier_of(name));
    env.add_function("scoped_identifier", |tool: &str, key: &str| {
        scoped_identifier_of(tool, key)
    });
    env.add_function("stage_id", |name: &str| stage_identifier_of(name));

    env.add_function("ref", move |id: &str| reference(id));
    env.add_function("var_dict", move |tool: &str, keys: Value| -> Result<Value, Error> {
        let keys = collect_keys(&keys)?;
        let dict: BTreeMap<String, String> =
            scoped_identifier_dict(tool, keys.iter().map(String::as_str), reference);
        Ok(Value::from_serialize(&dict))
    });

    env.add_function("include", include);
    env.add_function("tpl", tpl);

    env.add_filter("indent_wrap", |text: String, depth: usize| indent_wrap(&text, depth));
    env.add_filter("make_value", |value: String| make_value(&value));
    env.add_filter("arg_value", |value: String| arg_value(&value));
}

/// Render the registered fragment `name` with `ctx`.
fn include(state: &State, name: &str, ctx: Value) -> Result<String, Error> {
    let template = state.env().get_template(name).map_err(|_| {
        Error::new(ErrorKind::TemplateNotFound, format!("fragment '{}' is not registered", name))
    })?;
    template.render(ctx).map_err(|e| {
        Error::new(ErrorKind::InvalidOperation, format!("failed to include fragment '{}'", name))
            .with_source(e)
    })
}

/// Render an inline template string with `ctx`.
fn tpl(state: &State, source: &str, ctx: Value) -> Result<String, Error> {
    state.env().render_str(source, ctx).map_err(|e| {
        let message = format!("failed to render inline template '{}'", source);
        Error::new(ErrorKind::InvalidOperation, message).with_source(e)
    })
}

fn collect_keys(keys: &Value) -> Result<Vec<String>, Error> {
    keys.try_iter()?
        .map(|key| {
            key.as_str().map(str::to_string).ok_or_else(|| {
                let message = format!("variable key {} is not a string", key);
                Error::new(ErrorKind::InvalidOperation, message)
            })
        })
        .collect()
}

/// Nest `text` `depth` levels deep.
///
/// Every non-empty line gets `depth` indent units and the block is preceded
/// by a line break unless it already starts with one. Depth 0 is the
/// identity, and wrapping at `n` then `m` equals wrapping at `n + m`.
pub fn indent_wrap(text: &str, depth: usize) -> String {
    if depth == 0 {
        return text.to_string();
    }

    let indent = INDENT_UNIT.repeat(depth);
    let mut out = String::with_capacity(text.len() + indent.len() * (text.lines().count() + 1));
    if !text.starts_with('\n') {
        out.push('\n');
    }
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        if !line.is_empty() {
            out.push_str(&indent);
            out.push_str(line);
        }
    }
    out
}

/// Escape a literal for the right-hand side of a make assignment.
pub fn make_value(value: &str) -> String {
    value.replace('#', "\\#")
}

/// Quote a literal for an `ARG name=value` default when it needs quoting.
pub fn arg_value(value: &str) -> String {
    let needs_quotes = value.is_empty()
        || value.chars().any(|c| c.is_whitespace() || matches!(c, '"' | '\'' | '\\'));
    if needs_quotes {
        serde_json::to_string(value).unwrap_or_else(|_| format!("\"{}\"", value))
    } else {
        value.to_string()
    }
}

/// Flatten an error and its sources into one line.
pub(crate) fn describe(err: &Error) -> String {
    let mut message = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
