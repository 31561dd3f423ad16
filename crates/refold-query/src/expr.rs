//! Query expression tree.
//!
//! Represents the expressions folding composes before they are rendered into
//! the `q` and `aq` strings of a [`QueryDescriptor`](crate::QueryDescriptor).

use crate::FieldName;

/// A query expression.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryExpr {
    /// Free text or a pre-built expression, rendered verbatim.
    Keywords(String),

    /// Field equality: `@field=value`.
    FieldEquals {
        /// The field to compare.
        field: FieldName,
        /// The value the field must equal.
        value: String,
    },

    /// Explicit parentheses around an expression.
    Group(Box<Self>),

    /// Disjunction: at least one sub-expression must match.
    Or(Vec<Self>),
}

impl QueryExpr {
    /// Creates a verbatim keyword expression.
    pub fn keywords(text: impl Into<String>) -> Self {
        Self::Keywords(text.into())
    }

    /// Creates a field equality expression.
    pub fn field_equals(field: FieldName, value: impl Into<String>) -> Self {
        Self::FieldEquals {
            field,
            value: value.into(),
        }
    }

    /// Wraps an expression in parentheses.
    pub fn group(expr: Self) -> Self {
        Self::Group(Box::new(expr))
    }

    /// Creates an Or expression, flattening nested Ors.
    pub fn or(exprs: Vec<Self>) -> Self {
        let mut flattened: Vec<Self> = exprs
            .into_iter()
            .flat_map(|e| match e {
                Self::Or(inner) => inner,
                other => vec![other],
            })
            .collect();

        if flattened.len() == 1 {
            flattened.swap_remove(0)
        } else {
            Self::Or(flattened)
        }
    }

    /// Renders the expression in query syntax, e.g. `(foo bar) OR @uri`.
    pub fn to_query_string(&self) -> String {
        match self {
            Self::Keywords(s) => s.clone(),
            Self::FieldEquals { field, value } => format!("{field}={}", quote_value(value)),
            Self::Group(inner) => format!("({})", inner.to_query_string()),
            Self::Or(exprs) => exprs
                .iter()
                .map(Self::to_query_string)
                .collect::<Vec<_>>()
                .join(" OR "),
        }
    }
}

/// Quotes a field value unless it is a bare word.
///
/// Bare words consist of ASCII alphanumerics, `_`, `-` and `.`. Anything else
/// is wrapped in double quotes with embedded quotes and backslashes escaped.
pub fn quote_value(value: &str) -> String {
    let bare = !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));
    if bare {
        return value.to_string();
    }

    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        if matches!(c, '"' | '\\') {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}
