use crate::errors::HookError;

/// Row-oriented view over a query result, modelled on the host platform's
/// cursor: positioned before the first row until `move_to_next` is called.
pub trait Cursor: Send {
    fn column_names(&self) -> Result<Vec<String>, HookError>;

    fn move_to_next(&mut self) -> Result<bool, HookError>;

    /// Value of `column` in the current row, coerced to text. `None` for SQL NULL.
    fn get_string(&self, column: usize) -> Result<Option<String>, HookError>;

    fn close(&mut self);

    fn is_closed(&self) -> bool;
}

#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Null,
    Integer(i64),
    Float(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl CellValue {
    pub fn to_cursor_string(&self) -> Result<Option<String>, HookError> {
        match self {
            Self::Null => Ok(None),
            Self::Integer(v) => Ok(Some(v.to_string())),
            Self::Float(v) => Ok(Some(v.to_string())),
            Self::Text(v) => Ok(Some(v.clone())),
            Self::Blob(_) => Err(HookError::Capture("unable to convert BLOB to string".into())),
        }
    }
}

impl From<i64> for CellValue {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for CellValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for CellValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<Vec<u8>> for CellValue {
    fn from(v: Vec<u8>) -> Self {
        Self::Blob(v)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

/// In-memory cursor over a fixed table.
#[derive(Debug, Clone)]
pub struct MatrixCursor {
    columns: Vec<String>,
    rows: Vec<Vec<CellValue>>,
    position: Option<usize>,
    closed: bool,
}

impl MatrixCursor {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
            position: None,
            closed: false,
        }
    }

    pub fn add_row(&mut self, row: Vec<CellValue>) -> Result<(), HookError> {
        if row.len() != self.columns.len() {
            return Err(HookError::InvalidArguments(format!(
                "row has {} values, cursor has {} columns",
                row.len(),
                self.columns.len()
            )));
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn current_row(&self) -> Result<&[CellValue], HookError> {
        if self.closed {
            return Err(HookError::CursorClosed);
        }
        self.position
            .and_then(|p| self.rows.get(p))
            .map(Vec::as_slice)
            .ok_or_else(|| HookError::Capture("cursor is not positioned on a row".into()))
    }
}

impl Cursor for MatrixCursor {
    fn column_names(&self) -> Result<Vec<String>, HookError> {
        Ok(self.columns.clone())
    }

    fn move_to_next(&mut self) -> Result<bool, HookError> {
        if self.closed {
            return Err(HookError::CursorClosed);
        }
        let next = self.position.map_or(0, |p| p + 1);
        if next < self.rows.len() {
            self.position = Some(next);
            Ok(true)
        } else {
            self.position = Some(self.rows.len());
            Ok(false)
        }
    }

    fn get_string(&self, column: usize) -> Result<Option<String>, HookError> {
        let row = self.current_row()?;
        row.get(column)
            .ok_or_else(|| HookError::Capture(format!("column index {} out of range", column)))?
            .to_cursor_string()
    }

    fn close(&mut self) {
        self.closed = true;
    }

    fn is_closed(&self) -> bool {
        self.closed
    }
}
