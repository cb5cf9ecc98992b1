//! In-memory notebook document.
//!
//! Only `cells`, `cell_type` and `source` are interpreted. Every other field
//! is carried as raw JSON and written back in its original position.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The type tag of a cell. Never changed by translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellType {
    Markdown,
    Code,
    Raw,
    /// A type this tool does not know; passed through untouched.
    Other(String),
}

impl CellType {
    fn parse(tag: &str) -> Self {
        match tag {
            "markdown" => Self::Markdown,
            "code" => Self::Code,
            "raw" => Self::Raw,
            other => Self::Other(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct Cell {
    pub cell_type: CellType,
    /// Source lines; their concatenation is the cell body, line breaks
    /// included.
    pub source: Vec<String>,
    fields: Map<String, Value>,
}

impl Cell {
    pub fn new(cell_type: &str, source: &str) -> Self {
        let mut fields = Map::new();
        fields.insert("cell_type".to_string(), Value::from(cell_type));
        fields.insert("metadata".to_string(), Value::Object(Map::new()));
        fields.insert("source".to_string(), Value::Array(Vec::new()));
        Self {
            cell_type: CellType::parse(cell_type),
            source: split_lines(source),
            fields,
        }
    }

    /// The cell body as one string.
    pub fn text(&self) -> String {
        self.source.concat()
    }

    /// Replaces the body, splitting it back into lines.
    pub fn set_text(&mut self, text: &str) {
        self.source = split_lines(text);
    }

    /// A field other than `cell_type` and `source`, as stored in the file.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}

/// Splits `text` into lines that keep their terminators.
pub fn split_lines(text: &str) -> Vec<String> {
    text.split_inclusive('\n').map(String::from).collect()
}

impl TryFrom<Map<String, Value>> for Cell {
    type Error = String;

    fn try_from(fields: Map<String, Value>) -> Result<Self, Self::Error> {
        let cell_type = fields
            .get("cell_type")
            .and_then(Value::as_str)
            .map(CellType::parse)
            .ok_or("cell without a string `cell_type`")?;

        // nbformat allows a single string as well as a list of lines
        let source = match fields.get("source") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::String(text)) => split_lines(text),
            Some(Value::Array(lines)) => lines
                .iter()
                .map(|line| {
                    line.as_str()
                        .map(String::from)
                        .ok_or("non-string entry in cell `source`")
                })
                .collect::<Result<_, _>>()?,
            Some(_) => return Err("cell `source` is neither a string nor a list".to_string()),
        };

        Ok(Self {
            cell_type,
            source,
            fields,
        })
    }
}

impl From<Cell> for Map<String, Value> {
    fn from(cell: Cell) -> Self {
        let mut fields = cell.fields;
        let source = cell.source.into_iter().map(Value::String).collect();
        fields.insert("source".to_string(), Value::Array(source));
        fields
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct Notebook {
    pub cells: Vec<Cell>,
    fields: Map<String, Value>,
}

/// Cell counts of a notebook.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellStats {
    pub total: usize,
    pub code: usize,
    pub markdown: usize,
}

impl Notebook {
    pub fn new(cells: Vec<Cell>) -> Self {
        let mut fields = Map::new();
        fields.insert("cells".to_string(), Value::Array(Vec::new()));
        fields.insert("metadata".to_string(), Value::Object(Map::new()));
        fields.insert("nbformat".to_string(), Value::from(4));
        fields.insert("nbformat_minor".to_string(), Value::from(5));
        Self { cells, fields }
    }

    pub fn stats(&self) -> CellStats {
        let count = |kind: CellType| self.cells.iter().filter(|c| c.cell_type == kind).count();
        CellStats {
            total: self.cells.len(),
            code: count(CellType::Code),
            markdown: count(CellType::Markdown),
        }
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}

impl TryFrom<Map<String, Value>> for Notebook {
    type Error = String;

    fn try_from(mut fields: Map<String, Value>) -> Result<Self, Self::Error> {
        let cells = match fields.get_mut("cells").map(Value::take) {
            Some(Value::Array(cells)) => cells,
            Some(_) => return Err("`cells` is not a list".to_string()),
            None => return Err("missing `cells`; is this a Jupyter notebook?".to_string()),
        };

        let cells = cells
            .into_iter()
            .enumerate()
            .map(|(index, cell)| match cell {
                Value::Object(map) => Cell::try_from(map).map_err(|e| format!("cell {index}: {e}")),
                _ => Err(format!("cell {index}: not an object")),
            })
            .collect::<Result<_, _>>()?;

        Ok(Self { cells, fields })
    }
}

impl From<Notebook> for Map<String, Value> {
    fn from(notebook: Notebook) -> Self {
        let mut fields = notebook.fields;
        let cells = notebook
            .cells
            .into_iter()
            .map(|cell| Value::Object(cell.into()))
            .collect();
        fields.insert("cells".to_string(), Value::Array(cells));
        fields
    }
}
