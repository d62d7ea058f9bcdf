/// User table state: rows, sorting and bulk selection
///
/// The table renders exclusively from these records. Sorting
/// physically reorders the row vector; each sortable column remembers
/// the direction it was last flipped to, and that memory survives
/// sorting other columns. Status changes never mutate rows in place:
/// the server is asked first and the whole table is rebuilt from a
/// fresh fetch afterwards.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::state::data::{Role, User};

// ========== Columns ==========

/// One header cell of the user table
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub title: &'static str,
    pub sortable: bool,
}

/// Header layout, left to right. Sorting addresses columns by this
/// positional index.
pub const COLUMNS: &[Column] = &[
    Column { title: "", sortable: false }, // selection checkbox
    Column { title: "ID", sortable: true },
    Column { title: "Username", sortable: true },
    Column { title: "Name", sortable: true },
    Column { title: "Email", sortable: true },
    Column { title: "Role", sortable: true },
    Column { title: "Status", sortable: true },
    Column { title: "Registered", sortable: true },
    Column { title: "Actions", sortable: false },
];

/// Direction a column was last flipped to.
///
/// Note this is a label for the flip memory, not a description of the
/// visible row order: the comparator maps `Descending` to ascending
/// text order and `Ascending` to the exact reverse. The panel this
/// console replaces shipped that pairing, and the rows people see
/// must not change out from under them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn flipped(self) -> SortOrder {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    /// Arrow glyph for the active header
    pub fn arrow(self) -> &'static str {
        match self {
            SortOrder::Ascending => "↑",
            SortOrder::Descending => "↓",
        }
    }
}

/// One rendered row: the user record plus its checkbox state
#[derive(Debug, Clone, PartialEq)]
pub struct RowState {
    pub user: User,
    pub selected: bool,
}

impl RowState {
    fn new(user: User) -> Self {
        Self {
            user,
            selected: false,
        }
    }

    /// Text content of this row's cell in the given column, as used
    /// for display and for sorting. Unknown columns are empty.
    pub fn cell_text(&self, column: usize) -> String {
        match column {
            1 => self.user.id.to_string(),
            2 => self.user.username.clone(),
            3 => self.user.full_name.clone(),
            4 => self.user.email.clone(),
            5 => self.user.role.label().to_string(),
            6 => self.user.status_label().to_string(),
            7 => self.user.created_on(),
            _ => String::new(),
        }
    }
}

/// Case-insensitive text comparison with the original string as
/// tiebreaker, over trimmed input. All columns compare as text, even
/// numeric-looking ones.
pub fn compare_text(a: &str, b: &str) -> Ordering {
    let a = a.trim();
    let b = b.trim();
    match a.to_lowercase().cmp(&b.to_lowercase()) {
        Ordering::Equal => a.cmp(b),
        unequal => unequal,
    }
}

// ========== Table State ==========

/// Derived counters for the dashboard cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UserStats {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
    pub admins: usize,
}

#[derive(Debug, Clone, Default)]
pub struct UserTable {
    rows: Vec<RowState>,
    /// Remembered flip direction per column index
    orders: HashMap<usize, SortOrder>,
    /// The column currently showing its direction arrow
    active_sort: Option<usize>,
    master_checked: bool,
}

impl UserTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the table contents after a fetch. Selection and sort
    /// memory start over: the new rows arrive in server order.
    pub fn set_rows(&mut self, users: Vec<User>) {
        self.rows = users.into_iter().map(RowState::new).collect();
        self.orders.clear();
        self.active_sort = None;
        self.master_checked = false;
    }

    pub fn rows(&self) -> &[RowState] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The user behind a row, if it is still present
    pub fn user(&self, id: i64) -> Option<&User> {
        self.rows.iter().map(|r| &r.user).find(|u| u.id == id)
    }

    pub fn stats(&self) -> UserStats {
        let mut stats = UserStats {
            total: self.rows.len(),
            ..UserStats::default()
        };
        for row in &self.rows {
            if row.user.active {
                stats.active += 1;
            } else {
                stats.inactive += 1;
            }
            if row.user.role == Role::Admin {
                stats.admins += 1;
            }
        }
        stats
    }

    // ========== Sorting ==========

    /// Handles a click on a column header.
    ///
    /// Flips the column's remembered direction (fresh columns start
    /// from `Ascending`, so the first click records `Descending`) and
    /// reorders the rows: `Descending` lays the cell text out in
    /// ascending comparator order, `Ascending` in the exact reverse.
    /// Tables with fewer than two rows, unknown column indexes and
    /// unsortable columns change nothing at all.
    pub fn sort_by_column(&mut self, column: usize) {
        if self.rows.len() < 2 {
            return;
        }
        match COLUMNS.get(column) {
            Some(col) if col.sortable => {}
            _ => return,
        }

        let flipped = self
            .orders
            .get(&column)
            .copied()
            .unwrap_or(SortOrder::Ascending)
            .flipped();
        self.orders.insert(column, flipped);
        self.active_sort = Some(column);

        self.rows.sort_by(|a, b| {
            let ordering = compare_text(&a.cell_text(column), &b.cell_text(column));
            match flipped {
                SortOrder::Descending => ordering,
                SortOrder::Ascending => ordering.reverse(),
            }
        });
    }

    /// The remembered direction of a column, if it was ever sorted
    pub fn recorded_order(&self, column: usize) -> Option<SortOrder> {
        self.orders.get(&column).copied()
    }

    /// The arrow to draw on a header: only the most recently sorted
    /// column shows one, and it reflects that column's recorded
    /// direction
    pub fn indicator(&self, column: usize) -> Option<SortOrder> {
        if self.active_sort == Some(column) {
            self.recorded_order(column)
        } else {
            None
        }
    }

    // ========== Selection ==========

    /// Master checkbox: drives every row checkbox to the same state
    pub fn toggle_master(&mut self, checked: bool) {
        self.master_checked = checked;
        for row in &mut self.rows {
            row.selected = checked;
        }
    }

    /// One row's checkbox changed
    pub fn set_row_selected(&mut self, id: i64, selected: bool) {
        if let Some(row) = self.rows.iter_mut().find(|r| r.user.id == id) {
            row.selected = selected;
        }
        // TODO: unchecking a row leaves the master checkbox checked;
        // reconcile it against the rows here
    }

    pub fn master_checked(&self) -> bool {
        self.master_checked
    }

    /// How many rows are ticked; the bulk-actions bar shows iff > 0
    pub fn selected_count(&self) -> usize {
        self.rows.iter().filter(|r| r.selected).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn user(id: i64, username: &str, full_name: &str, active: bool) -> User {
        User {
            id,
            username: username.to_string(),
            email: format!("{username}@example.com"),
            full_name: full_name.to_string(),
            phone: None,
            role: Role::User,
            active,
            created_at: NaiveDate::from_ymd_opt(2025, 5, 27)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap(),
        }
    }

    fn table_with_names(names: &[&str]) -> UserTable {
        let mut table = UserTable::new();
        table.set_rows(
            names
                .iter()
                .enumerate()
                .map(|(i, name)| user(i as i64 + 1, &format!("u{i}"), name, true))
                .collect(),
        );
        table
    }

    fn names(table: &UserTable) -> Vec<String> {
        table.rows().iter().map(|r| r.user.full_name.clone()).collect()
    }

    const NAME_COL: usize = 3;

    #[test]
    fn test_first_click_ascends_and_records_descending() {
        let mut table = table_with_names(&["Bob", "Alice", "Carol"]);

        table.sort_by_column(NAME_COL);

        assert_eq!(names(&table), vec!["Alice", "Bob", "Carol"]);
        assert_eq!(table.recorded_order(NAME_COL), Some(SortOrder::Descending));
        assert_eq!(table.indicator(NAME_COL), Some(SortOrder::Descending));
    }

    #[test]
    fn test_second_click_reverses_exactly() {
        let mut table = table_with_names(&["Bob", "Alice", "Carol"]);

        table.sort_by_column(NAME_COL);
        let first_pass = names(&table);
        table.sort_by_column(NAME_COL);

        let mut reversed = first_pass.clone();
        reversed.reverse();
        assert_eq!(names(&table), reversed);
        assert_eq!(table.recorded_order(NAME_COL), Some(SortOrder::Ascending));
    }

    #[test]
    fn test_comparison_ignores_case_but_breaks_ties_on_original() {
        assert_eq!(compare_text("alpha", "Zeta"), Ordering::Less);
        assert_eq!(compare_text("  alice  ", "alice"), Ordering::Equal);
        // Same letters, different case: original text decides
        assert_eq!(compare_text("Alice", "alice"), Ordering::Less);
        // Never numeric
        assert_eq!(compare_text("10", "2"), Ordering::Less);
    }

    #[test]
    fn test_other_columns_keep_their_recorded_order() {
        let mut table = table_with_names(&["Bob", "Alice", "Carol"]);

        table.sort_by_column(NAME_COL);
        assert_eq!(table.recorded_order(NAME_COL), Some(SortOrder::Descending));

        let username_col = 2;
        table.sort_by_column(username_col);

        // The arrow moved, the memory stayed
        assert_eq!(table.indicator(NAME_COL), None);
        assert_eq!(table.recorded_order(NAME_COL), Some(SortOrder::Descending));
        assert_eq!(table.indicator(username_col), Some(SortOrder::Descending));

        // Re-clicking the first column resumes from its memory
        table.sort_by_column(NAME_COL);
        assert_eq!(table.recorded_order(NAME_COL), Some(SortOrder::Ascending));
    }

    #[test]
    fn test_tiny_tables_do_not_sort() {
        let mut table = table_with_names(&["Only"]);
        table.sort_by_column(NAME_COL);

        assert_eq!(names(&table), vec!["Only"]);
        assert_eq!(table.recorded_order(NAME_COL), None);
        assert_eq!(table.indicator(NAME_COL), None);
    }

    #[test]
    fn test_bad_columns_do_not_sort() {
        let mut table = table_with_names(&["Bob", "Alice"]);

        table.sort_by_column(99);
        table.sort_by_column(0); // checkbox column
        table.sort_by_column(8); // actions column

        assert_eq!(names(&table), vec!["Bob", "Alice"]);
        assert!(table.indicator(0).is_none());
    }

    #[test]
    fn test_master_checkbox_drives_all_rows() {
        let mut table = table_with_names(&["Bob", "Alice", "Carol"]);

        table.toggle_master(true);
        assert!(table.rows().iter().all(|r| r.selected));
        assert_eq!(table.selected_count(), 3);
        assert!(table.master_checked());

        table.toggle_master(false);
        assert!(table.rows().iter().all(|r| !r.selected));
        assert_eq!(table.selected_count(), 0);
    }

    #[test]
    fn test_row_selection_counts() {
        let mut table = table_with_names(&["Bob", "Alice"]);

        table.set_row_selected(1, true);
        assert_eq!(table.selected_count(), 1);

        // Unknown row id changes nothing
        table.set_row_selected(999, true);
        assert_eq!(table.selected_count(), 1);

        table.set_row_selected(1, false);
        assert_eq!(table.selected_count(), 0);
    }

    #[test]
    fn test_refresh_resets_sort_and_selection() {
        let mut table = table_with_names(&["Bob", "Alice"]);
        table.sort_by_column(NAME_COL);
        table.toggle_master(true);

        table.set_rows(vec![user(5, "dana", "Dana", false)]);

        assert_eq!(table.recorded_order(NAME_COL), None);
        assert_eq!(table.selected_count(), 0);
        assert!(!table.master_checked());
        assert_eq!(table.stats().inactive, 1);
    }

    #[test]
    fn test_stats_count_roles_and_status() {
        let mut table = UserTable::new();
        let mut admin = user(1, "root", "Root", true);
        admin.role = Role::Admin;
        table.set_rows(vec![
            admin,
            user(2, "bob", "Bob", true),
            user(3, "carol", "Carol", false),
        ]);

        let stats = table.stats();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.active, 2);
        assert_eq!(stats.inactive, 1);
        assert_eq!(stats.admins, 1);
    }
}
