//! CSV loader for freight tariff tables (simple format)

use margen_domain::model::{FreightTable, TariffPoint};

/// Load a freight tariff table from a simple CSV file
///
/// Expected columns (no header required):
/// distance_km, tariff_per_ton
pub fn load_tariff_table_from_csv(path: &std::path::Path) -> Result<FreightTable, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read CSV file: {}", e))?;
    let mut points = Vec::new();
    let mut lines = content.lines();
    let first_line = lines.next().ok_or("CSV file is empty")?;
    let headers: Vec<&str> = first_line.split(',').map(|s| s.trim()).collect();
    let is_header = headers.iter().any(|h| {
        h.to_lowercase().contains("dist")
            || h.to_lowercase().contains("km")
            || h.to_lowercase().contains("tarif")
            || h.to_lowercase().contains("tariff")
    });
    if !is_header {
        if let Some(point) = parse_csv_line(first_line) {
            points.push(point);
        }
    }
    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(point) = parse_csv_line(line) {
            points.push(point);
        }
    }
    FreightTable::new(points).map_err(|e| format!("Invalid tariff table: {}", e))
}

fn parse_csv_line(line: &str) -> Option<TariffPoint> {
    let fields: Vec<&str> = line.split(',').map(|s| s.trim()).collect();
    if fields.len() < 2 {
        return None;
    }
    let distance_km: f64 = fields.first()?.parse().ok()?;
    let tariff_per_ton: f64 = fields.get(1)?.parse().ok()?;

    Some(TariffPoint {
        distance_km,
        tariff_per_ton,
    })
}
