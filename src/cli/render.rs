// src/cli/render.rs
//
// Plain-text rendering of lists, records and reports.

use serde::Serialize;
use serde_json::Value;

use recruit_console::common::helpers::{capitalize, humanize_field};
use recruit_console::listing::{ListSnapshot, PaginationState};
use recruit_console::resources::{Deletion, Record, Resource};
use recruit_console::services::{DashboardSummary, LookupTable, Lookups};

const MAX_CELL: usize = 40;
const DELETED_COLUMN: &str = "deleted";

/// Renders a list page: table, empty state or error, then pagination.
pub fn list_view<R: Resource>(snapshot: &ListSnapshot<R::Item>) -> String {
    if let Some(message) = snapshot.error() {
        return format!("Error: {}\n", message);
    }

    if snapshot.is_empty() {
        let hint = if snapshot.filters.is_active() {
            " matching the current filters"
        } else {
            ""
        };
        return format!("No {} found{}.\n", R::PLURAL, hint);
    }

    let mut out = match R::DELETION {
        Deletion::Hard => table(R::COLUMNS, &snapshot.items),
        // soft-deleted rows stay listed, so mark them
        Deletion::Soft => {
            let columns: Vec<&str> = R::COLUMNS
                .iter()
                .copied()
                .chain([DELETED_COLUMN])
                .collect();
            let rows: Vec<Value> = snapshot
                .items
                .iter()
                .map(|item| {
                    let mut row = serde_json::to_value(item).unwrap_or(Value::Null);
                    if let Some(fields) = row.as_object_mut() {
                        fields.insert(DELETED_COLUMN.to_string(), Value::Bool(item.is_deleted()));
                    }
                    row
                })
                .collect();
            table(&columns, &rows)
        }
    };
    if snapshot.shows_pagination() {
        out.push_str(&pagination_line(&snapshot.pagination));
        out.push('\n');
    } else {
        out.push_str(&format!("{} total\n", snapshot.pagination.total_count));
    }
    out
}

pub fn table<T: Serialize>(columns: &[&str], items: &[T]) -> String {
    let rows: Vec<Vec<String>> = items
        .iter()
        .map(|item| {
            let value = serde_json::to_value(item).unwrap_or(Value::Null);
            columns
                .iter()
                .map(|column| cell(value.get(*column)))
                .collect()
        })
        .collect();

    let headers: Vec<String> = columns.iter().map(|c| humanize_field(c)).collect();
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            rows.iter()
                .map(|row| row[i].chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    out.push_str(&line(&headers, &widths));
    out.push_str(&line(
        &widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>(),
        &widths,
    ));
    for row in &rows {
        out.push_str(&line(row, &widths));
    }
    out
}

fn line(cells: &[String], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect();
    format!("{}\n", padded.join("  ").trim_end())
}

fn cell(value: Option<&Value>) -> String {
    let text = match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(b)) => if *b { "yes" } else { "no" }.to_string(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| cell(Some(item)))
            .collect::<Vec<_>>()
            .join(","),
        Some(other) => other.to_string(),
    };

    if text.chars().count() > MAX_CELL {
        let cut: String = text.chars().take(MAX_CELL - 1).collect();
        format!("{}…", cut)
    } else {
        text
    }
}

/// "Page 2 of 5 (41 total)  1 2 [3] 4 5"
pub fn pagination_line(pagination: &PaginationState) -> String {
    let links: Vec<String> = pagination
        .page_links()
        .into_iter()
        .map(|link| match link {
            Some(page) if page == pagination.current_page => format!("[{}]", page),
            Some(page) => page.to_string(),
            None => "…".to_string(),
        })
        .collect();

    let previous = if pagination.has_previous() { "‹ " } else { "" };
    let next = if pagination.has_next() { " ›" } else { "" };

    format!(
        "Page {} of {} ({} total)  {}{}{}",
        pagination.current_page,
        pagination.total_pages,
        pagination.total_count,
        previous,
        links.join(" "),
        next
    )
}

pub fn record<T: Serialize>(item: &T) -> String {
    serde_json::to_string_pretty(item).unwrap_or_else(|e| format!("<unprintable: {}>", e))
}

pub fn lookups(lookups: &Lookups) -> String {
    let sections: [(&str, &LookupTable); 5] = [
        ("statuses", &lookups.statuses),
        ("job types", &lookups.job_types),
        ("skills", &lookups.skills),
        ("qualifications", &lookups.qualifications),
        ("roles", &lookups.roles),
    ];

    let mut out = String::new();
    for (title, table) in sections {
        out.push_str(&format!("{} ({})\n", capitalize(title), table.len()));
        for item in table.items() {
            out.push_str(&format!("  {:>4}  {}\n", item.id, item.name));
        }
    }
    out
}

pub fn dashboard(summary: &DashboardSummary) -> String {
    let mut out = String::new();
    out.push_str(&format!("Open jobs             {}\n", summary.open_jobs));
    out.push_str(&format!("Candidates            {}\n", summary.total_candidates));
    out.push_str(&format!("Applications          {}\n", summary.total_applications));
    out.push_str(&format!("Interviews scheduled  {}\n", summary.interviews_scheduled));
    out.push_str(&format!("Offers released       {}\n", summary.offers_released));
    out.push_str(&format!(
        "Hires                 {} ({:.1}%)\n",
        summary.hires,
        summary.hire_rate()
    ));

    if !summary.pipeline.is_empty() {
        out.push_str("\nPipeline\n");
        for stage in &summary.pipeline {
            out.push_str(&format!("  {:<14} {}\n", stage.status, stage.count));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use recruit_console::listing::{FilterState, ListStatus};
    use recruit_console::resources::{NamedRecord, Skills, User, Users};

    fn snapshot(items: Vec<NamedRecord>, total: u64) -> ListSnapshot<NamedRecord> {
        let mut pagination = PaginationState::new(10);
        pagination.update(total, 10);
        ListSnapshot {
            status: ListStatus::Loaded,
            items,
            filters: FilterState::new().with("search", "React"),
            pagination,
        }
    }

    #[test]
    fn test_empty_state() {
        let out = list_view::<Skills>(&snapshot(Vec::new(), 0));
        assert_eq!(out, "No skills found matching the current filters.\n");
    }

    #[test]
    fn test_table_columns_and_cells() {
        let items = vec![NamedRecord {
            id: 3,
            name: "Rust".to_string(),
            description: None,
        }];
        let out = list_view::<Skills>(&snapshot(items, 1));

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Id  Name  Description");
        assert_eq!(lines[2], "3   Rust");
        assert_eq!(lines[3], "1 total");
    }

    #[test]
    fn test_pagination_line_marks_current_page() {
        let mut pagination = PaginationState::new(10);
        pagination.update(45, 10);
        pagination.current_page = 3;
        assert_eq!(
            pagination_line(&pagination),
            "Page 3 of 5 (45 total)  ‹ 1 2 [3] 4 5 ›"
        );

        pagination.current_page = 1;
        assert_eq!(
            pagination_line(&pagination),
            "Page 1 of 5 (45 total)  [1] 2 3 4 5 ›"
        );
        pagination.current_page = 5;
        assert!(pagination_line(&pagination).ends_with("[5]"));
    }

    #[test]
    fn test_soft_deleted_rows_are_marked() {
        let user = |id: i64, deleted: bool| User {
            id,
            name: format!("User {}", id),
            email: format!("u{}@example.com", id),
            role_id: 2,
            role_name: Some("HR".to_string()),
            is_deleted: deleted,
            created_at: None,
        };
        let mut pagination = PaginationState::new(10);
        pagination.update(2, 10);
        let snapshot = ListSnapshot {
            status: ListStatus::Loaded,
            items: vec![user(1, false), user(2, true)],
            filters: FilterState::new(),
            pagination,
        };

        let out = list_view::<Users>(&snapshot);
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].ends_with("Deleted"));
        assert!(lines[2].ends_with("no"));
        assert!(lines[3].ends_with("yes"));
    }

    #[test]
    fn test_long_cells_are_truncated() {
        let long = Value::String("x".repeat(60));
        assert_eq!(cell(Some(&long)).chars().count(), MAX_CELL);
        assert_eq!(cell(Some(&Value::Bool(true))), "yes");
        assert_eq!(cell(Some(&serde_json::json!([1, 2]))), "1,2");
    }
}
