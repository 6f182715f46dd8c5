use serde_json::Value as JsonValue;
use thiserror::Error;

use super::context::{Handler, PropsElContext};

/// Failures signalled by an expression engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ElError {
    /// A well-formed path that names nothing in the data.
    #[error("cannot resolve `{0}`")]
    Unresolved(String),

    #[error("malformed expression `{0}`")]
    Syntax(String),

    /// An event expression that yields no handlers.
    #[error("`{0}` does not name a handler")]
    NotCallable(String),
}

/// Evaluates expression bodies (the text inside `${…}`).
pub trait ExprEngine: Send + Sync {
    fn eval(&self, expr: &str, ctx: &PropsElContext) -> Result<JsonValue, ElError>;

    /// Handlers the expression names, in declaration order.
    fn eval_handlers(&self, expr: &str, ctx: &PropsElContext) -> Result<Vec<Handler>, ElError>;
}

// ── PathEngine ────────────────────────────────────────────────────────────

/// The default engine: literals and data lookups, no operators.
///
/// Accepted forms:
///
/// ```text
/// 'text'  "text"  12  -1.5  true  false  null
/// user.name   items[0].title   grid[1][2]
/// ```
///
/// Handler expressions are a bare name from the context's handler table.
#[derive(Debug, Default, Clone, Copy)]
pub struct PathEngine;

enum Step<'a> {
    Key(&'a str),
    Index(usize),
}

impl ExprEngine for PathEngine {
    fn eval(&self, expr: &str, ctx: &PropsElContext) -> Result<JsonValue, ElError> {
        let src = expr.trim();
        if let Some(v) = literal(src) {
            return Ok(v);
        }
        let steps = parse_path(src).ok_or_else(|| ElError::Syntax(expr.to_string()))?;
        let mut cur = ctx.data();
        for step in steps {
            let next = match step {
                Step::Key(k) => cur.get(k),
                Step::Index(i) => cur.get(i),
            };
            cur = next.ok_or_else(|| ElError::Unresolved(src.to_string()))?;
        }
        Ok(cur.clone())
    }

    fn eval_handlers(&self, expr: &str, ctx: &PropsElContext) -> Result<Vec<Handler>, ElError> {
        let name = expr.trim();
        match ctx.handlers(name) {
            Some(list) if !list.is_empty() => Ok(list.to_vec()),
            _ => Err(ElError::NotCallable(name.to_string())),
        }
    }
}

fn literal(src: &str) -> Option<JsonValue> {
    match src {
        "true" => return Some(JsonValue::Bool(true)),
        "false" => return Some(JsonValue::Bool(false)),
        "null" => return Some(JsonValue::Null),
        _ => {}
    }
    for q in ['\'', '"'] {
        if src.len() >= 2 && src.starts_with(q) && src.ends_with(q) {
            return Some(JsonValue::String(src[1..src.len() - 1].to_string()));
        }
    }
    if let Ok(i) = src.parse::<i64>() {
        return Some(JsonValue::from(i));
    }
    src.parse::<f64>()
        .ok()
        .and_then(serde_json::Number::from_f64)
        .map(JsonValue::Number)
}

fn parse_path(src: &str) -> Option<Vec<Step<'_>>> {
    let mut steps = Vec::new();
    for part in src.split('.') {
        let (key, mut rest) = part.split_at(part.find('[').unwrap_or(part.len()));
        let ident = |c: char| c.is_ascii_alphanumeric() || c == '_' || c == '$';
        if key.is_empty() || !key.chars().all(ident) {
            return None;
        }
        steps.push(Step::Key(key));
        while !rest.is_empty() {
            let inner = rest.strip_prefix('[')?;
            let close = inner.find(']')?;
            steps.push(Step::Index(inner[..close].trim().parse().ok()?));
            rest = &inner[close + 1..];
        }
    }
    Some(steps)
}
