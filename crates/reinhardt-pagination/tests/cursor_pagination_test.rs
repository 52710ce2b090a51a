//! Cursor pagination over the planet catalogue, keyed by creation date

use chrono::NaiveDateTime;
use reinhardt_pagination::{
	Cursor, CursorCodec, CursorPaginator, Page, PageSizeOptions, PaginationError, SortDirection,
	TimestampCursorCodec,
};
use rstest::{fixture, rstest};

const PLANETS: [(&str, &str); 30] = [
	("Mercury", "2024-01-01 12:00:00"),
	("Venus", "2024-01-05 14:30:00"),
	("Earth", "2024-01-10 10:00:00"),
	("Mars", "2024-02-01 16:15:00"),
	("Jupiter", "2024-02-05 08:45:00"),
	("Saturn", "2024-02-15 19:30:00"),
	("Uranus", "2024-03-01 12:00:00"),
	("Neptune", "2024-03-10 18:00:00"),
	("Pluto", "2024-04-01 10:00:00"),
	("Ceres", "2024-04-10 13:00:00"),
	("Haumea", "2024-05-01 11:00:00"),
	("Makemake", "2024-05-05 15:00:00"),
	("Eris", "2024-06-01 09:00:00"),
	("Europa", "2024-06-10 10:30:00"),
	("Ganymede", "2024-07-01 14:15:00"),
	("Callisto", "2024-07-15 16:00:00"),
	("Titan", "2024-08-01 09:45:00"),
	("Enceladus", "2024-08-15 13:30:00"),
	("Triton", "2024-09-01 11:15:00"),
	("Charon", "2024-09-15 17:00:00"),
	("Oberon", "2024-10-01 14:00:00"),
	("Rhea", "2024-10-05 20:00:00"),
	("Dione", "2024-10-10 13:30:00"),
	("Iapetus", "2024-10-15 15:00:00"),
	("Tethys", "2024-10-20 10:00:00"),
	("Umbriel", "2024-10-25 12:00:00"),
	("Ariel", "2024-11-01 14:30:00"),
	("Miranda", "2024-11-05 09:00:00"),
	("Phobos", "2024-11-10 16:30:00"),
	("Deimos", "2024-11-15 18:00:00"),
];

type Planet = (&'static str, &'static str);

#[fixture]
fn paginator() -> CursorPaginator<TimestampCursorCodec> {
	CursorPaginator::new(TimestampCursorCodec::new())
}

fn planets(direction: SortDirection) -> Vec<Planet> {
	let mut rows = PLANETS.to_vec();
	if direction == SortDirection::Descending {
		rows.reverse();
	}
	rows
}

fn paginate(
	paginator: &CursorPaginator<TimestampCursorCodec>,
	offset: Option<&str>,
	limit: Option<&str>,
	direction: SortDirection,
) -> Page<Planet> {
	let request = paginator.request(offset, limit, direction);
	let codec = paginator.codec();
	paginator
		.paginate(&planets(direction), |row| codec.parse_field(row.1), &request)
		.unwrap()
}

fn titles(page: &Page<Planet>) -> Vec<&'static str> {
	page.rows.iter().map(|row| row.0).collect()
}

fn date(value: &str) -> NaiveDateTime {
	NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S").unwrap()
}

#[rstest]
fn test_first_page_ascending(paginator: CursorPaginator<TimestampCursorCodec>) {
	// Act
	let page = paginate(&paginator, None, Some("5"), SortDirection::Ascending);

	// Assert
	assert_eq!(titles(&page), vec!["Mercury", "Venus", "Earth", "Mars", "Jupiter"]);
	assert_eq!(page.start_ordinal, 1);
	assert_eq!(page.end_ordinal, 5);
	assert_eq!(page.prev_offset, None);
	assert_eq!(page.first_offset, None);
	assert_eq!(page.next_offset.as_deref(), Some("20240205084500"));
	assert_eq!(page.last_offset.as_deref(), Some("20241020100000"));
	assert_eq!(page.total_results, 30);
	assert_eq!(page.total_pages(), 6);
}

#[rstest]
fn test_first_page_descending(paginator: CursorPaginator<TimestampCursorCodec>) {
	// Act
	let page = paginate(&paginator, None, Some("5"), SortDirection::Descending);

	// Assert
	assert_eq!(titles(&page), vec!["Deimos", "Phobos", "Miranda", "Ariel", "Umbriel"]);
	assert_eq!(page.start_ordinal, 1);
	assert_eq!(page.end_ordinal, 5);
	assert_eq!(page.next_offset.as_deref(), Some("20241025120000"));
}

#[rstest]
#[case::not_allowed(Some("999"))]
#[case::not_a_number(Some("lots"))]
#[case::missing(None)]
fn test_page_size_fallback(
	paginator: CursorPaginator<TimestampCursorCodec>,
	#[case] limit: Option<&str>,
) {
	// Act
	let page = paginate(&paginator, None, limit, SortDirection::Ascending);

	// Assert
	assert_eq!(page.limit, 5);
	assert_eq!(page.len(), 5);
}

#[rstest]
fn test_second_page_prev_is_beginning(paginator: CursorPaginator<TimestampCursorCodec>) {
	// Act
	let page = paginate(&paginator, Some("20240205084500"), Some("5"), SortDirection::Ascending);

	// Assert
	assert_eq!(titles(&page), vec!["Saturn", "Uranus", "Neptune", "Pluto", "Ceres"]);
	assert_eq!(page.start_ordinal, 6);
	assert_eq!(page.end_ordinal, 10);
	assert_eq!(page.prev_offset.as_deref(), Some("-"));

	let back = paginate(&paginator, page.prev_offset.as_deref(), Some("5"), SortDirection::Ascending);
	assert_eq!(titles(&back), vec!["Mercury", "Venus", "Earth", "Mars", "Jupiter"]);
	assert_eq!(back.start_ordinal, 1);
}

#[rstest]
fn test_third_page_prev_goes_back_one_page(paginator: CursorPaginator<TimestampCursorCodec>) {
	// Act
	let page = paginate(&paginator, Some("20240410130000"), Some("5"), SortDirection::Ascending);
	let back = paginate(&paginator, page.prev_offset.as_deref(), Some("5"), SortDirection::Ascending);

	// Assert
	assert_eq!(titles(&page)[0], "Haumea");
	assert_eq!(page.prev_offset.as_deref(), Some("20240205084500"));
	assert_eq!(titles(&back), vec!["Saturn", "Uranus", "Neptune", "Pluto", "Ceres"]);
}

#[rstest]
fn test_last_page(paginator: CursorPaginator<TimestampCursorCodec>) {
	// Arrange
	let first = paginate(&paginator, None, Some("10"), SortDirection::Ascending);

	// Act
	let last = paginate(&paginator, first.last_offset.as_deref(), Some("10"), SortDirection::Ascending);

	// Assert
	assert_eq!(last.len(), 10);
	assert_eq!(last.start_ordinal, 21);
	assert_eq!(last.end_ordinal, 30);
	assert_eq!(titles(&last).last(), Some(&"Deimos"));
	// a full final page still offers a next token that leads to an empty page
	let beyond = paginate(&paginator, last.next_offset.as_deref(), Some("10"), SortDirection::Ascending);
	assert!(beyond.is_empty());
	assert!(beyond.is_pending());
}

#[rstest]
#[case::garbage(Some("not-a-date"))]
#[case::wrong_length(Some("2024"))]
#[case::empty(Some(""))]
fn test_malformed_offset_starts_over(
	paginator: CursorPaginator<TimestampCursorCodec>,
	#[case] offset: Option<&str>,
) {
	// Act
	let page = paginate(&paginator, offset, Some("5"), SortDirection::Ascending);

	// Assert
	assert_eq!(titles(&page)[0], "Mercury");
	assert_eq!(page.current_offset, None);
	assert_eq!(page.prev_offset, None);
}

#[rstest]
fn test_empty_collection(paginator: CursorPaginator<TimestampCursorCodec>) {
	// Arrange
	let rows: Vec<Planet> = Vec::new();
	let request = paginator.request(None, Some("5"), SortDirection::Ascending);
	let codec = paginator.codec();

	// Act
	let page = paginator
		.paginate(&rows, |row| codec.parse_field(row.1), &request)
		.unwrap();

	// Assert
	assert!(page.is_empty());
	assert!(page.end_ordinal < page.start_ordinal);
	assert_eq!(page.first_offset, None);
	assert_eq!(page.prev_offset, None);
	assert_eq!(page.next_offset, None);
	assert_eq!(page.last_offset, None);
	assert_eq!(page.total_pages(), 0);
}

#[rstest]
fn test_unparseable_row_key_is_an_error(paginator: CursorPaginator<TimestampCursorCodec>) {
	// Arrange
	let rows = vec![("Mercury", "yesterday")];
	let request = paginator.request(None, None, SortDirection::Ascending);
	let codec = paginator.codec();

	// Act
	let result = paginator.paginate(&rows, |row| codec.parse_field(row.1), &request);

	// Assert
	assert!(matches!(result, Err(PaginationError::InvalidCursorField { .. })));
}

#[rstest]
fn test_custom_page_sizes() {
	// Arrange
	let options = PageSizeOptions::new(vec![3, 7], 3).unwrap();
	let paginator = CursorPaginator::new(TimestampCursorCodec::new()).page_sizes(options);

	// Act
	let page = paginate(&paginator, None, Some("7"), SortDirection::Ascending);
	let fallback = paginate(&paginator, None, Some("5"), SortDirection::Ascending);

	// Assert
	assert_eq!(page.len(), 7);
	assert_eq!(fallback.len(), 3);
}

#[rstest]
fn test_current_offset_is_canonical(paginator: CursorPaginator<TimestampCursorCodec>) {
	// Act
	let page = paginate(&paginator, Some("  20240205084500 "), Some("5"), SortDirection::Ascending);

	// Assert
	assert_eq!(page.current_offset.as_deref(), Some("20240205084500"));
	assert_eq!(
		paginator.codec().try_decode("20240205084500").unwrap(),
		Cursor::After(date("2024-02-05 08:45:00"))
	);
}
