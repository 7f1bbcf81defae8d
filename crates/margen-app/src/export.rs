//! Excel export functionality

use margen_domain::service::CropMargin;
use margen_types::{Error, Result};
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::path::Path;

/// Export a crop comparison to an Excel file
pub fn export_comparison_to_excel(margins: &[CropMargin], output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    // Add summary sheet
    let summary_sheet = workbook.add_worksheet();
    write_summary_sheet(summary_sheet, margins)?;

    // Add details sheet
    let details_sheet = workbook.add_worksheet();
    write_details_sheet(details_sheet, margins)?;

    // Save workbook
    workbook
        .save(output_path)
        .map_err(|e| Error::Excel(e.to_string()))?;

    Ok(())
}

fn write_summary_sheet(sheet: &mut Worksheet, margins: &[CropMargin]) -> Result<()> {
    sheet
        .set_name("Summary")
        .map_err(|e| Error::Excel(e.to_string()))?;

    // Header format
    let header_format = Format::new().set_bold();

    sheet
        .write_string_with_format(0, 0, "Crop Margin Comparison", &header_format)
        .map_err(|e| Error::Excel(e.to_string()))?;

    sheet
        .write_string(2, 0, "Crops:")
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_number(2, 1, margins.len() as f64)
        .map_err(|e| Error::Excel(e.to_string()))?;

    let planted: f64 = margins.iter().map(|m| m.inputs.area_ha).sum();
    sheet
        .write_string(3, 0, "Planted area (ha):")
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_number(3, 1, planted)
        .map_err(|e| Error::Excel(e.to_string()))?;

    let margin_total: f64 = margins.iter().map(|m| m.result.totals.direct_margin).sum();
    sheet
        .write_string(4, 0, "Direct margin (USD):")
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_number(4, 1, margin_total)
        .map_err(|e| Error::Excel(e.to_string()))?;

    // Grade distribution
    sheet
        .write_string_with_format(6, 0, "Grade Distribution", &header_format)
        .map_err(|e| Error::Excel(e.to_string()))?;

    let mut grade_counts = std::collections::HashMap::new();
    for margin in margins {
        *grade_counts
            .entry(margin.result.grade().label_en().to_string())
            .or_insert(0) += 1;
    }

    let mut row = 7;
    for (grade, count) in &grade_counts {
        sheet
            .write_string(row, 0, grade)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 1, *count as f64)
            .map_err(|e| Error::Excel(e.to_string()))?;
        row += 1;
    }

    Ok(())
}

fn write_details_sheet(sheet: &mut Worksheet, margins: &[CropMargin]) -> Result<()> {
    sheet
        .set_name("Details")
        .map_err(|e| Error::Excel(e.to_string()))?;

    // Header format
    let header_format = Format::new().set_bold();

    let headers = [
        "Crop",
        "Area (ha)",
        "Yield (t/ha)",
        "Price (USD/t)",
        "Gross Income (USD/ha)",
        "Direct Costs (USD/ha)",
        "Freight (USD/ha)",
        "Gross Margin (USD/ha)",
        "Rent (USD/ha)",
        "Direct Margin (USD/ha)",
        "Direct Margin (USD)",
        "Return on Cost (%)",
        "Grade",
    ];

    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    for (i, margin) in margins.iter().enumerate() {
        let row = (i + 1) as u32;
        let per_ha = &margin.result.per_ha;
        sheet
            .write_string(row, 0, margin.name())
            .map_err(|e| Error::Excel(e.to_string()))?;

        let numbers = [
            margin.inputs.area_ha,
            margin.inputs.yield_ton_per_ha,
            margin.inputs.price_per_ton,
            per_ha.gross_income,
            per_ha.direct_costs,
            per_ha.freight_cost,
            per_ha.gross_margin,
            per_ha.rent_charge,
            per_ha.direct_margin,
            margin.result.totals.direct_margin,
            margin.result.return_on_cost_pct,
        ];
        for (j, value) in numbers.iter().enumerate() {
            sheet
                .write_number(row, (j + 1) as u16, *value)
                .map_err(|e| Error::Excel(e.to_string()))?;
        }
        sheet
            .write_string(row, 12, margin.result.grade().label_en())
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    Ok(())
}
