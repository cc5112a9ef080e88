//! In-process observation of content provider queries.
//!
//! [`QueryInterceptor`] wraps a [`ContentProvider`]: it logs each query,
//! forwards it, captures the returned table and hands the result back
//! untouched. [`HookControl`] is the operator's side channel into the hook.

pub mod control;
pub mod cursor;
pub mod interceptor;

pub use control::HookControl;
pub use cursor::{CellValue, Cursor, MatrixCursor};
pub use interceptor::{
    capture, CapturedRow, ContentProvider, HookEvent, InterceptedQuery, QueryArgs, QueryInterceptor,
};
