use std::collections::HashMap;
use std::fmt;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;
use serde::ser::{Serialize, SerializeMap, Serializer};
use tokio::sync::mpsc;
use crate::errors::HookError;
use super::control::HookControl;
use super::cursor::Cursor;
use tracing::{debug, info, warn};

/// Extra arguments passed alongside a query (the platform's query bundle).
pub type QueryArgs = HashMap<String, String>;

/// The query surface of a content provider.
pub trait ContentProvider: Send + Sync {
    fn query(
        &self,
        uri: &str,
        projection: Option<&[String]>,
        query_args: Option<&QueryArgs>,
    ) -> Option<Box<dyn Cursor>>;
}

/// One row of a captured result. Cells keep the cursor's column order and
/// serialize as a JSON object in that order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedRow {
    pub cells: Vec<(String, Option<String>)>,
}

impl CapturedRow {
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(name, _)| name == column)
            .and_then(|(_, value)| value.as_deref())
    }
}

impl Serialize for CapturedRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cells.len()))?;
        for (name, value) in &self.cells {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl fmt::Display for CapturedRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct InterceptedQuery {
    pub uri: String,
    pub columns: Vec<String>,
    pub rows: Vec<CapturedRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum HookEvent {
    Intercepted { uri: String },
    Captured(InterceptedQuery),
    CaptureFailed { uri: String, error: HookError },
}

/// Closes the wrapped cursor when dropped, whichever way the reader exits.
pub(crate) struct CursorGuard<'a> {
    cursor: &'a mut dyn Cursor,
}

impl<'a> CursorGuard<'a> {
    pub(crate) fn new(cursor: &'a mut dyn Cursor) -> Self {
        Self { cursor }
    }
}

impl<'a> Deref for CursorGuard<'a> {
    type Target = dyn Cursor + 'a;

    fn deref(&self) -> &Self::Target {
        self.cursor
    }
}

impl<'a> DerefMut for CursorGuard<'a> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.cursor
    }
}

impl Drop for CursorGuard<'_> {
    fn drop(&mut self) {
        self.cursor.close();
    }
}

/// Read every row of `cursor`, logging as it goes. The cursor is closed on
/// return, including when reading fails part way.
pub fn capture(uri: &str, cursor: &mut dyn Cursor) -> Result<InterceptedQuery, HookError> {
    let mut guard = CursorGuard::new(cursor);

    let columns = guard.column_names()?;
    info!(uri, columns = %columns.join(", "), "Captured columns");

    let mut rows = Vec::new();
    while guard.move_to_next()? {
        let mut cells = Vec::with_capacity(columns.len());
        for (index, name) in columns.iter().enumerate() {
            cells.push((name.clone(), guard.get_string(index)?));
        }
        let row = CapturedRow { cells };
        info!(uri, row = %row, "Captured row");
        rows.push(row);
    }

    Ok(InterceptedQuery { uri: uri.to_string(), columns, rows })
}

/// Wraps a provider so that every query is logged and its result captured,
/// then handed back to the caller exactly as the wrapped provider returned it.
pub struct QueryInterceptor<P> {
    inner: P,
    control: Arc<HookControl>,
    event_tx: Option<mpsc::UnboundedSender<HookEvent>>,
}

impl<P: ContentProvider> QueryInterceptor<P> {
    pub fn new(inner: P, control: Arc<HookControl>) -> Self {
        Self { inner, control, event_tx: None }
    }

    /// Attach a channel that receives every hook event. Sending never blocks
    /// the thread issuing the query.
    pub fn with_event_channel(mut self, tx: mpsc::UnboundedSender<HookEvent>) -> Self {
        self.event_tx = Some(tx);
        self
    }

    pub fn control(&self) -> &Arc<HookControl> {
        &self.control
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }

    fn emit(&self, event: HookEvent) {
        if let Some(ref tx) = self.event_tx {
            let _ = tx.send(event);
        }
    }
}

impl<P: ContentProvider> ContentProvider for QueryInterceptor<P> {
    fn query(
        &self,
        uri: &str,
        projection: Option<&[String]>,
        query_args: Option<&QueryArgs>,
    ) -> Option<Box<dyn Cursor>> {
        let authority = self.control.authority();
        info!(uri, authority = authority.as_deref().unwrap_or("-"), "Query intercepted");
        self.emit(HookEvent::Intercepted { uri: uri.to_string() });

        let mut result = self.inner.query(uri, projection, query_args);

        match result.as_deref_mut() {
            Some(cursor) => match capture(uri, cursor) {
                Ok(captured) => {
                    debug!(uri, rows = captured.rows.len(), "Capture complete");
                    self.emit(HookEvent::Captured(captured));
                }
                Err(error) => {
                    warn!(uri, error = %error, "Capture failed, returning delegated result unchanged");
                    self.emit(HookEvent::CaptureFailed { uri: uri.to_string(), error });
                }
            },
            None => debug!(uri, "Delegated query returned no cursor"),
        }

        result
    }
}
