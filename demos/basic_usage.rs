//! Basic solar zenith calculation example.

use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use solar_zenith::{array, insolation, psa, time::CivilDateTime};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Example 1: local civil time with an explicit UTC offset
    let local = CivilDateTime::new(2023, 6, 21, 12, 0, 0)?;
    let latitude = 37.7749; // San Francisco
    let longitude = -122.4194;
    let position = psa::solar_position(&local, -7.0, longitude, latitude);

    // Example 2: the same moment through chrono
    let datetime_fixed = "2023-06-21T12:00:00-07:00".parse::<DateTime<FixedOffset>>()?;
    let datetime_utc = Utc.with_ymd_and_hms(2023, 6, 21, 19, 0, 0).unwrap(); // 19:00 UTC = 12:00 PDT
    let zenith_fixed = psa::zenith_angle_from_datetime(&datetime_fixed, longitude, latitude);
    let zenith_utc = psa::zenith_angle_from_datetime(&datetime_utc, longitude, latitude);

    println!("Solar position for San Francisco on June 21, 2023 at noon Pacific Time:");
    println!("  Zenith angle: {:.4}°", position.zenith_angle());
    println!("  Elevation: {:.4}°", position.elevation_angle());
    println!("  Azimuth: {:.4}°", position.azimuth());
    println!("  Zenith via FixedOffset: {zenith_fixed:.4}°");
    println!("  Zenith via UTC: {zenith_utc:.4}°");

    let parts = psa::time_dependent_parts(&local, -7.0);
    println!("  Earth-sun distance: {:.5} AU", parts.earth_sun_distance());
    println!(
        "  Insolation: {:.1} W/m² (daily mean {:.1} W/m²)",
        insolation::insolation_with_time_dependent_parts(longitude, latitude, &parts),
        insolation::daily_insolation(latitude, &parts)
    );

    // Example 3: a coarse day/night map at one instant
    let parts = psa::time_dependent_parts(&CivilDateTime::new(2020, 1, 1, 0, 0, 0)?, 0.0);
    let longitudes: Vec<f64> = (-180..180).step_by(10).map(f64::from).collect();
    let latitudes: Vec<f64> = (-80..=80).rev().step_by(20).map(f64::from).collect();
    let grid = array::zenith_angle_grid(&parts, &longitudes, &latitudes);

    println!("\nDay (#) and night (.) on 2020-01-01 00:00 UTC, 180°W to 170°E:");
    for (row, lat) in grid.rows().into_iter().zip(&latitudes) {
        let line: String = row
            .iter()
            .map(|&z| if z > 90.0 { '.' } else { '#' })
            .collect();
        println!("  {lat:>5.0}° {line}");
    }

    Ok(())
}
