use serde::Serialize;
use std::borrow::Cow;

/// A value bound to one placeholder of a ranking clause
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Param {
    /// A value supplied by the ranking itself (e.g. the display name pattern)
    Text(String),
    /// Slot for the executor's full-text query value
    SearchQuery,
}

/// How placeholders are spelled when a fragment is rendered.
///
/// `start` is the number given to the first placeholder, so a clause can be
/// appended after parameters the host query already uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaceholderStyle {
    /// `?`
    #[default]
    Anonymous,
    /// `?1`, `?2`, ... (SQLite numbered parameters)
    Numbered { start: usize },
    /// `$1`, `$2`, ... (native Postgres)
    Dollar { start: usize },
}

impl PlaceholderStyle {
    fn placeholder(self, index: usize) -> Cow<'static, str> {
        match self {
            PlaceholderStyle::Anonymous => Cow::Borrowed("?"),
            PlaceholderStyle::Numbered { start } => Cow::Owned(format!("?{}", start + index)),
            PlaceholderStyle::Dollar { start } => Cow::Owned(format!("${}", start + index)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Piece {
    Sql(Cow<'static, str>),
    Bind(Param),
}

/// A piece of SQL with its parameter slots kept in place.
///
/// Placeholders are only produced at render time, so the parameter list
/// always follows the order the slots appear in the text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment {
    pieces: Vec<Piece>,
}

impl Fragment {
    pub fn sql(text: impl Into<Cow<'static, str>>) -> Self {
        Self::default().push_sql(text)
    }

    pub fn push_sql(mut self, text: impl Into<Cow<'static, str>>) -> Self {
        self.pieces.push(Piece::Sql(text.into()));
        self
    }

    pub fn bind(mut self, param: Param) -> Self {
        self.pieces.push(Piece::Bind(param));
        self
    }

    pub fn append(mut self, other: Fragment) -> Self {
        self.pieces.extend(other.pieces);
        self
    }

    /// Concatenates fragments with `separator` between each pair
    pub fn join(parts: impl IntoIterator<Item = Fragment>, separator: &'static str) -> Self {
        let mut joined = Fragment::default();
        for (i, part) in parts.into_iter().enumerate() {
            if i > 0 {
                joined = joined.push_sql(separator);
            }
            joined = joined.append(part);
        }
        joined
    }

    pub fn params(&self) -> impl Iterator<Item = &Param> {
        self.pieces.iter().filter_map(|piece| match piece {
            Piece::Bind(param) => Some(param),
            Piece::Sql(_) => None,
        })
    }

    /// Produces the SQL text and the parameters in placeholder order
    pub fn render(&self, style: PlaceholderStyle) -> (String, Vec<Param>) {
        let mut sql = String::new();
        let mut params = Vec::new();

        for piece in &self.pieces {
            match piece {
                Piece::Sql(text) => sql.push_str(text),
                Piece::Bind(param) => {
                    sql.push_str(&style.placeholder(params.len()));
                    params.push(param.clone());
                }
            }
        }

        (sql, params)
    }
}

/// Multiplies factors together
pub fn product(factors: impl IntoIterator<Item = Fragment>) -> Fragment {
    Fragment::join(factors, "\n* ")
}

/// Marks a sort key as descending
pub fn desc(key: Fragment) -> Fragment {
    key.push_sql(" DESC")
}

/// Joins sort keys into an ORDER BY body
pub fn order_by(keys: impl IntoIterator<Item = Fragment>) -> Fragment {
    Fragment::join(keys, ",\n")
}
