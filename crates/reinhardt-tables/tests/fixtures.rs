//! Common test fixtures for reinhardt-tables tests

#![allow(dead_code)]

use reinhardt_pagination::TimestampCursorCodec;
use reinhardt_tables::{Align, CellValue, Column, Row, TableSettings, TableView};
use rstest::*;

/// Planets and moons: title, page id, diameter (km), distance from the
/// sun (million km) and creation date
pub const PLANETS: [(&str, i64, f64, f64, &str); 30] = [
	("Mercury", 1, 4879.0, 57.9, "2024-01-01 12:00:00"),
	("Venus", 2, 12104.0, 108.2, "2024-01-05 14:30:00"),
	("Earth", 3, 12742.0, 149.6, "2024-01-10 10:00:00"),
	("Mars", 4, 6779.0, 227.9, "2024-02-01 16:15:00"),
	("Jupiter", 5, 139820.0, 778.5, "2024-02-05 08:45:00"),
	("Saturn", 6, 116460.0, 1434.0, "2024-02-15 19:30:00"),
	("Uranus", 7, 50724.0, 2871.0, "2024-03-01 12:00:00"),
	("Neptune", 8, 49244.0, 4495.0, "2024-03-10 18:00:00"),
	("Pluto", 9, 2376.0, 5906.0, "2024-04-01 10:00:00"),
	("Ceres", 10, 946.0, 414.0, "2024-04-10 13:00:00"),
	("Haumea", 11, 1632.0, 6484.0, "2024-05-01 11:00:00"),
	("Makemake", 12, 1434.0, 6795.0, "2024-05-05 15:00:00"),
	("Eris", 13, 2326.0, 10105.0, "2024-06-01 09:00:00"),
	("Europa", 14, 3122.0, 778.5, "2024-06-10 10:30:00"),
	("Ganymede", 15, 5268.0, 778.5, "2024-07-01 14:15:00"),
	("Callisto", 16, 4821.0, 778.5, "2024-07-15 16:00:00"),
	("Titan", 17, 5150.0, 1434.0, "2024-08-01 09:45:00"),
	("Enceladus", 18, 504.0, 1434.0, "2024-08-15 13:30:00"),
	("Triton", 19, 2707.0, 4495.0, "2024-09-01 11:15:00"),
	("Charon", 20, 1212.0, 5906.0, "2024-09-15 17:00:00"),
	("Oberon", 21, 1523.0, 2871.0, "2024-10-01 14:00:00"),
	("Rhea", 22, 1528.0, 1434.0, "2024-10-05 20:00:00"),
	("Dione", 23, 1122.0, 1434.0, "2024-10-10 13:30:00"),
	("Iapetus", 24, 1469.0, 1434.0, "2024-10-15 15:00:00"),
	("Tethys", 25, 1060.0, 1434.0, "2024-10-20 10:00:00"),
	("Umbriel", 26, 1190.0, 2871.0, "2024-10-25 12:00:00"),
	("Ariel", 27, 1158.0, 2871.0, "2024-11-01 14:30:00"),
	("Miranda", 28, 471.0, 2871.0, "2024-11-05 09:00:00"),
	("Phobos", 29, 22.4, 227.9, "2024-11-10 16:30:00"),
	("Deimos", 30, 12.4, 227.9, "2024-11-15 18:00:00"),
];

/// Whole measurements are stored as integers, the rest as floats
fn measurement(value: f64) -> CellValue {
	if value.fract() == 0.0 {
		CellValue::Integer(value as i64)
	} else {
		CellValue::Float(value)
	}
}

/// Fixture providing the planet rows in catalogue order
#[fixture]
pub fn planet_rows() -> Vec<Row> {
	PLANETS
		.iter()
		.map(|(title, page_id, diameter, distance, created)| {
			Row::new()
				.with("title", *title)
				.with("page_id", *page_id)
				.with("diameter_km", measurement(*diameter))
				.with("distance_from_sun_million_km", measurement(*distance))
				.with("creation_date", *created)
		})
		.collect()
}

/// Fixture providing the planet columns, all sortable
#[fixture]
pub fn planet_columns() -> Vec<Column> {
	vec![
		Column::new("title", "Title").sortable(true),
		Column::new("page_id", "Page ID").sortable(true).align(Align::Number),
		Column::new("diameter_km", "Diameter (km)")
			.sortable(true)
			.align(Align::Number),
		Column::new("distance_from_sun_million_km", "Distance from Sun (m. km)")
			.sortable(true)
			.align(Align::Number),
		Column::new("creation_date", "Creation Date").sortable(true),
	]
}

/// Fixture providing a view sorted and paginated by creation date
#[fixture]
pub fn planet_view(planet_columns: Vec<Column>) -> TableView<TimestampCursorCodec> {
	TableView::new(planet_columns, TimestampCursorCodec::new())
		.with_default_sort("creation_date")
		.with_cursor_field("creation_date")
		.with_settings(TableSettings::default())
}

/// Titles of the rows of a page, in display order
pub fn titles(rows: &[Row]) -> Vec<String> {
	rows.iter()
		.map(|row| row.get("title").map(ToString::to_string).unwrap_or_default())
		.collect()
}
