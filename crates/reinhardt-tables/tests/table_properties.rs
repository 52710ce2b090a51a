//! Property tests for the table pipeline

use proptest::prelude::*;
use reinhardt_pagination::{OpaqueCursorCodec, SortDirection};
use reinhardt_tables::{CellValue, Column, PagerAction, QueryParams, Row, TableSettings, TableView};

fn view() -> TableView<OpaqueCursorCodec> {
	TableView::new(
		vec![
			Column::new("id", "ID").sortable(true),
			Column::new("title", "Title").sortable(true),
			Column::new("group", "Group").sortable(true),
			Column::new("notes", "Notes"),
		],
		OpaqueCursorCodec::new(),
	)
	.with_settings(TableSettings::default().page_sizes(vec![1, 2, 3, 5, 7], 5))
}

fn rows_strategy() -> impl Strategy<Value = Vec<Row>> {
	(0usize..25)
		.prop_flat_map(|n| {
			let rows: Vec<Row> = (0..n)
				.map(|i| {
					Row::new()
						.with("id", format!("id{:03}", i))
						.with("title", format!("row {}", i))
						.with("group", (i % 3) as i64)
				})
				.collect();
			Just(rows).prop_shuffle()
		})
}

fn sort_strategy() -> impl Strategy<Value = &'static str> {
	prop_oneof![Just("id"), Just("title"), Just("group")]
}

/// Ids in display order: a stable sort on `column`, ties kept in input order
fn expected_ids(rows: &[Row], column: &str, descending: bool) -> Vec<String> {
	let mut sorted: Vec<&Row> = rows.iter().collect();
	sorted.sort_by(|a, b| {
		let a = a.get(column).unwrap_or(&CellValue::Null);
		let b = b.get(column).unwrap_or(&CellValue::Null);
		if descending { b.compare(a) } else { a.compare(b) }
	});
	sorted
		.into_iter()
		.map(|row| row.get("id").map(ToString::to_string).unwrap_or_default())
		.collect()
}

fn ids(rows: &[Row]) -> Vec<String> {
	rows.iter()
		.map(|row| row.get("id").map(ToString::to_string).unwrap_or_default())
		.collect()
}

proptest! {
	#[test]
	fn prop_next_traversal_visits_every_row_once(
		rows in rows_strategy(),
		limit in prop_oneof![Just(1usize), Just(2), Just(3), Just(5), Just(7)],
		descending in any::<bool>(),
	) {
		let view = view();
		let base = QueryParams::new()
			.with("limit", limit.to_string())
			.with("desc", if descending { "1" } else { "" });

		let mut expected = ids(&rows);
		expected.sort();
		if descending {
			expected.reverse();
		}

		let mut seen = Vec::new();
		let mut request = base.clone();
		for _ in 0..=rows.len() + 1 {
			let table = view.table(&rows, &request).unwrap();
			let pager = table.pager().unwrap();
			prop_assert!(table.rows().len() <= limit);
			if !table.rows().is_empty() {
				prop_assert_eq!(pager.start_ordinal(), seen.len() + 1);
				prop_assert_eq!(pager.end_ordinal(), seen.len() + table.rows().len());
			}
			seen.extend(ids(table.rows()));
			match pager.offset(PagerAction::Next) {
				Some(next) => request = base.clone().with("offset", next),
				None => break,
			}
		}

		prop_assert_eq!(seen, expected);
	}

	#[test]
	fn prop_traversal_follows_every_sort_column(
		rows in rows_strategy(),
		sort in sort_strategy(),
		limit in prop_oneof![Just(1usize), Just(2), Just(3), Just(5), Just(7)],
		descending in any::<bool>(),
	) {
		let view = view();
		let base = QueryParams::new()
			.with("sort", sort)
			.with("limit", limit.to_string())
			.with("desc", if descending { "1" } else { "" });

		let mut pages: Vec<(QueryParams, Vec<String>)> = Vec::new();
		let mut request = base.clone();
		for _ in 0..=rows.len() + 1 {
			let table = view.table(&rows, &request).unwrap();
			let pager = table.pager().unwrap();
			if !table.rows().is_empty() {
				let seen: usize = pages.iter().map(|(_, page)| page.len()).sum();
				prop_assert_eq!(pager.start_ordinal(), seen + 1);
				prop_assert_eq!(pager.end_ordinal(), seen + table.rows().len());
				pages.push((request.clone(), ids(table.rows())));
			}
			match pager.offset(PagerAction::Next) {
				Some(next) => request = base.clone().with("offset", next),
				None => break,
			}
		}

		let visited: Vec<String> = pages.iter().flat_map(|(_, page)| page.clone()).collect();
		prop_assert_eq!(visited, expected_ids(&rows, sort, descending));

		if let Some((last_request, _)) = pages.last() {
			let mut index = pages.len() - 1;
			let mut request = last_request.clone();
			loop {
				let table = view.table(&rows, &request).unwrap();
				prop_assert_eq!(&ids(table.rows()), &pages[index].1);
				match table.pager().unwrap().offset(PagerAction::Previous) {
					Some(prev) => {
						prop_assert!(index > 0);
						index -= 1;
						request = base.clone().with("offset", prev);
					}
					None => {
						prop_assert_eq!(index, 0);
						break;
					}
				}
			}
		}
	}

	#[test]
	fn prop_request_values_never_fail(
		rows in rows_strategy(),
		sort in "\\PC{0,12}",
		offset in "\\PC{0,24}",
		limit in "\\PC{0,6}",
		asc in "\\PC{0,3}",
		desc in "\\PC{0,3}",
	) {
		let request = QueryParams::new()
			.with("sort", sort.as_str())
			.with("offset", offset)
			.with("limit", limit)
			.with("asc", asc)
			.with("desc", desc);

		let table = view().table(&rows, &request).unwrap();

		let active = &table.sort().unwrap().column;
		if sort == "id" || sort == "title" || sort == "group" {
			prop_assert_eq!(active, &sort);
		} else {
			prop_assert_eq!(active, "id");
		}
		prop_assert!(table.rows().len() <= table.pager().unwrap().limit());
	}

	#[test]
	fn prop_sort_direction_flags(asc in any::<bool>(), desc in any::<bool>()) {
		let request = QueryParams::new()
			.with("asc", if asc { "1" } else { "" })
			.with("desc", if desc { "1" } else { "" });

		let table = view().table(&[], &request).unwrap();

		let expected = if desc && !asc { SortDirection::Descending } else { SortDirection::Ascending };
		prop_assert_eq!(table.sort().unwrap().direction, expected);
	}
}
