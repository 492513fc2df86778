//! Paged record table state shared by the users and counsellors screens.
//!
//! DESIGN
//! ======
//! All rows are loaded at once; paging is a client-side slice. The edit
//! dialog works on a copy of one row (`editing`) that replaces the original
//! by id when saved.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use crate::net::types::EditableRecord;

pub const ROWS_PER_PAGE_OPTIONS: [usize; 3] = [10, 25, 50];
pub const DEFAULT_ROWS_PER_PAGE: usize = 10;

#[derive(Clone, Debug, PartialEq)]
pub struct TableState<T> {
    pub rows: Vec<T>,
    pub loading: bool,
    pub page: usize,
    pub rows_per_page: usize,
    pub editing: Option<T>,
}

impl<T> Default for TableState<T> {
    fn default() -> Self {
        Self { rows: Vec::new(), loading: false, page: 0, rows_per_page: DEFAULT_ROWS_PER_PAGE, editing: None }
    }
}

impl<T: EditableRecord> TableState<T> {
    pub fn set_rows(&mut self, rows: Vec<T>) {
        self.rows = rows;
        self.page = self.page.min(self.last_page());
    }

    /// Rows on the current page.
    pub fn visible(&self) -> &[T] {
        let start = (self.page * self.rows_per_page).min(self.rows.len());
        let end = (start + self.rows_per_page).min(self.rows.len());
        &self.rows[start..end]
    }

    /// Zero-based index of the last page (0 when empty).
    pub fn last_page(&self) -> usize {
        self.rows.len().saturating_sub(1) / self.rows_per_page.max(1)
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.min(self.last_page());
    }

    pub fn has_prev(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self) -> bool {
        self.page < self.last_page()
    }

    /// Change page size; unknown sizes are ignored. Always returns to page 0.
    pub fn set_rows_per_page(&mut self, rows_per_page: usize) {
        if ROWS_PER_PAGE_OPTIONS.contains(&rows_per_page) {
            self.rows_per_page = rows_per_page;
            self.page = 0;
        }
    }

    /// Pager caption, e.g. `11–20 of 42`.
    pub fn range_label(&self) -> String {
        let count = self.rows.len();
        if count == 0 {
            return "0–0 of 0".to_owned();
        }
        let from = self.page * self.rows_per_page + 1;
        let to = ((self.page + 1) * self.rows_per_page).min(count);
        format!("{from}–{to} of {count}")
    }

    pub fn begin_edit(&mut self, id: &str) {
        self.editing = self.rows.iter().find(|row| row.id() == id).cloned();
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Update one field of the record being edited.
    ///
    /// # Errors
    ///
    /// Returns the record's validation message for input the field rejects.
    pub fn edit_field(&mut self, name: &str, value: &str) -> Result<(), String> {
        match self.editing.as_mut() {
            Some(record) => record.set_field(name, value),
            None => Ok(()),
        }
    }

    /// Write the edited copy back over the row with the same id.
    pub fn commit_edit(&mut self) -> Option<T> {
        let edited = self.editing.take()?;
        if let Some(row) = self.rows.iter_mut().find(|row| row.id() == edited.id()) {
            *row = edited.clone();
        }
        Some(edited)
    }

    pub fn remove(&mut self, id: &str) {
        self.rows.retain(|row| row.id() != id);
        self.page = self.page.min(self.last_page());
    }
}
