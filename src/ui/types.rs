//! Common types for the picker abstraction layer

/// Field separator of the picker line protocol
///
/// A control character that never appears in note titles, so columns can be
/// split back apart without escaping.
pub const FIELD_DELIMITER: char = '\x01';

/// Index of the identifier column in every [`Row`]
pub const ID_COLUMN: usize = 0;

/// One candidate line sent to the picker
///
/// Column [`ID_COLUMN`] holds the identifier the selection is mapped back
/// with. Columns never contain line breaks or the [`FIELD_DELIMITER`], so a
/// row always serializes to exactly one line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    columns: Vec<String>,
}

impl Row {
    /// Create a row, flattening columns for line-oriented transport
    ///
    /// Line breaks become spaces and delimiter characters are dropped.
    #[must_use]
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            columns: columns
                .into_iter()
                .map(|column| flatten(column.as_ref()))
                .collect(),
        }
    }

    /// Parse a line written back by the picker
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let line = line.strip_suffix('\r').unwrap_or(line);
        Self {
            columns: line.split(FIELD_DELIMITER).map(ToString::to_string).collect(),
        }
    }

    /// Identifier column, if the row has any column
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.columns.get(ID_COLUMN).map(String::as_str)
    }

    /// All columns
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Serialize to a single protocol line, without the trailing newline
    #[must_use]
    pub fn to_line(&self) -> String {
        let mut delimiter = [0; 4];
        self.columns.join(FIELD_DELIMITER.encode_utf8(&mut delimiter))
    }
}

/// Rows chosen by the user, in selection order
pub type Selection = Vec<Row>;

/// Key binding offered in the picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    /// Key chord, e.g. `Ctrl-N`
    pub keys: String,
    /// Human-readable description shown in the picker header
    pub description: String,
    /// Picker action run when the chord is pressed
    pub action: String,
}

impl Binding {
    /// Create a new binding
    #[must_use]
    pub fn new(
        keys: impl Into<String>,
        description: impl Into<String>,
        action: impl Into<String>,
    ) -> Self {
        Self {
            keys: keys.into(),
            description: description.into(),
            action: action.into(),
        }
    }
}

fn flatten(column: &str) -> String {
    column
        .chars()
        .filter(|c| *c != FIELD_DELIMITER)
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect()
}
