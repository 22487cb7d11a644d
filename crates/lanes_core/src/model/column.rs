//! Fixed board column configuration.
//!
//! # Invariants
//! - Columns map 1:1 onto [`Status`] values and keep board order.
//! - The table is static; column identity never changes at runtime.

use crate::model::todo::Status;

/// Presentation metadata for one status column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    pub status: Status,
    pub title: &'static str,
    /// Header accent color, hex.
    pub color: &'static str,
    pub subtitle: &'static str,
}

/// The 7 board columns in display order.
pub const COLUMNS: [ColumnSpec; 7] = [
    ColumnSpec {
        status: Status::NoStatus,
        title: "No Status",
        color: "#8b949e",
        subtitle: "Unassigned items",
    },
    ColumnSpec {
        status: Status::Backlog,
        title: "Backlog",
        color: "#f85149",
        subtitle: "Items to be reviewed",
    },
    ColumnSpec {
        status: Status::InDesign,
        title: "In Design",
        color: "#f6a434",
        subtitle: "Needs Tech Architecting & UX/UI",
    },
    ColumnSpec {
        status: Status::ReadyToEstimate,
        title: "Ready to Estimate",
        color: "#6f42c1",
        subtitle: "Ready to review and scope",
    },
    ColumnSpec {
        status: Status::Todo,
        title: "Todo",
        color: "#0366d6",
        subtitle: "This item hasn't been started",
    },
    ColumnSpec {
        status: Status::InProgress,
        title: "In Progress",
        color: "#28a745",
        subtitle: "This is actively being worked on",
    },
    ColumnSpec {
        status: Status::Closed,
        title: "Closed",
        color: "#656d76",
        subtitle: "Completed items",
    },
];

/// Looks up the column spec for a status.
pub fn column_for(status: Status) -> &'static ColumnSpec {
    // Status::ALL and COLUMNS share ordering, so position lookup is safe.
    &COLUMNS[status as usize]
}

#[cfg(test)]
mod tests {
    use super::{column_for, COLUMNS};
    use crate::model::todo::Status;

    #[test]
    fn columns_cover_every_status_in_order() {
        assert_eq!(COLUMNS.len(), Status::ALL.len());
        for (column, status) in COLUMNS.iter().zip(Status::ALL) {
            assert_eq!(column.status, status);
        }
    }

    #[test]
    fn column_lookup_matches_status() {
        assert_eq!(column_for(Status::InProgress).title, "In Progress");
        assert_eq!(column_for(Status::NoStatus).title, "No Status");
    }
}
