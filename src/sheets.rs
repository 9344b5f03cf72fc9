//! Sheet builders for the config-driven generator
//!
//! Each config section renders to one worksheet: a bold filled header row
//! followed by one data row per record. Sheet and column names are the
//! Arabic labels the workbook's users expect.

use rust_xlsxwriter::{Color, Workbook, Worksheet};

use crate::config::{Building, Expense, RentPayment, Tenant, Unit};
use crate::dates::parse_date;
use crate::error::Result;
use crate::format::{body_format, date_format, header_format, rent_row_fill};

pub const SHEET_BUILDINGS: &str = "العمارات";
pub const SHEET_UNITS: &str = "الوحدات";
pub const SHEET_TENANTS: &str = "المستأجرين";
pub const SHEET_RENTS: &str = "الإيجارات";
pub const SHEET_EXPENSES: &str = "المصروفات";

/// Width applied to every column of every sheet.
const COLUMN_WIDTH: f64 = 15.0;

pub(crate) fn write_header(sheet: &mut Worksheet, headers: &[&str]) -> Result<()> {
    let format = header_format();
    for (col, header) in headers.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *header, &format)?;
        sheet.set_column_width(col as u16, COLUMN_WIDTH)?;
    }
    Ok(())
}

fn write_date(
    sheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: Option<&str>,
    fill: Option<Color>,
) -> Result<()> {
    let format = date_format(fill);
    match parse_date(value) {
        Some(date) => sheet.write_datetime_with_format(row, col, &date, &format)?,
        None => sheet.write_blank(row, col, &format)?,
    };
    Ok(())
}

pub fn create_buildings_sheet(workbook: &mut Workbook, buildings: &[Building]) -> Result<()> {
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_BUILDINGS)?;
    write_header(sheet, &["اسم العمارة", "عدد الوحدات", "ملاحظات"])?;

    let format = body_format(None);
    for (idx, building) in buildings.iter().enumerate() {
        let row = idx as u32 + 1;
        sheet.write_string_with_format(row, 0, &building.name, &format)?;
        sheet.write_number_with_format(row, 1, building.units, &format)?;
        sheet.write_string_with_format(row, 2, &building.notes, &format)?;
    }
    Ok(())
}

pub fn create_units_sheet(workbook: &mut Workbook, units: &[Unit]) -> Result<()> {
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_UNITS)?;
    write_header(
        sheet,
        &[
            "رقم الوحدة",
            "العمارة",
            "التصنيف",
            "الإيجار الشهري",
            "الحالة",
            "ملاحظات",
        ],
    )?;

    let format = body_format(None);
    for (idx, unit) in units.iter().enumerate() {
        let row = idx as u32 + 1;
        sheet.write_string_with_format(row, 0, &unit.unit_no, &format)?;
        sheet.write_string_with_format(row, 1, &unit.building, &format)?;
        sheet.write_string_with_format(row, 2, &unit.unit_type, &format)?;
        sheet.write_number_with_format(row, 3, unit.rent, &format)?;
        sheet.write_string_with_format(row, 4, &unit.status, &format)?;
        sheet.write_string_with_format(row, 5, &unit.notes, &format)?;
    }
    Ok(())
}

pub fn create_tenants_sheet(workbook: &mut Workbook, tenants: &[Tenant]) -> Result<()> {
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_TENANTS)?;
    write_header(
        sheet,
        &[
            "رقم الوحدة",
            "اسم المستأجر",
            "رقم الهوية",
            "رقم الجوال",
            "تاريخ بداية العقد",
            "تاريخ نهاية العقد",
            "قيمة الإيجار",
            "البريد الإلكتروني",
            "ملاحظات",
        ],
    )?;

    let format = body_format(None);
    for (idx, tenant) in tenants.iter().enumerate() {
        let row = idx as u32 + 1;
        sheet.write_string_with_format(row, 0, &tenant.unit_no, &format)?;
        sheet.write_string_with_format(row, 1, &tenant.name, &format)?;
        sheet.write_string_with_format(row, 2, &tenant.id, &format)?;
        sheet.write_string_with_format(row, 3, &tenant.mobile, &format)?;
        write_date(sheet, row, 4, tenant.start_date.as_deref(), None)?;
        write_date(sheet, row, 5, tenant.end_date.as_deref(), None)?;
        sheet.write_number_with_format(row, 6, tenant.rent, &format)?;
        sheet.write_string_with_format(row, 7, &tenant.email, &format)?;
        sheet.write_string_with_format(row, 8, &tenant.notes, &format)?;
    }
    Ok(())
}

pub fn create_rents_sheet(workbook: &mut Workbook, rents: &[RentPayment]) -> Result<()> {
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_RENTS)?;
    write_header(
        sheet,
        &[
            "رقم الوحدة",
            "الشهر",
            "السنة",
            "قيمة الإيجار",
            "تاريخ الدفع",
            "طريقة الدفع",
            "الحالة",
            "ملاحظات",
        ],
    )?;

    for (idx, rent) in rents.iter().enumerate() {
        let row = idx as u32 + 1;

        // Unpaid rows get the highlight fill across every cell.
        let fill = rent_row_fill(&rent.status);
        let format = body_format(fill);

        sheet.write_string_with_format(row, 0, &rent.unit_no, &format)?;
        sheet.write_string_with_format(row, 1, &rent.month, &format)?;
        sheet.write_number_with_format(row, 2, rent.year, &format)?;
        sheet.write_number_with_format(row, 3, rent.amount, &format)?;
        write_date(sheet, row, 4, rent.date.as_deref(), fill)?;
        sheet.write_string_with_format(row, 5, &rent.method, &format)?;
        sheet.write_string_with_format(row, 6, &rent.status, &format)?;
        sheet.write_string_with_format(row, 7, &rent.notes, &format)?;
    }
    Ok(())
}

pub fn create_expenses_sheet(workbook: &mut Workbook, expenses: &[Expense]) -> Result<()> {
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_EXPENSES)?;
    write_header(
        sheet,
        &[
            "العمارة",
            "التاريخ",
            "نوع المصروفات",
            "القيمة",
            "الفئة",
            "ملاحظات",
        ],
    )?;

    let format = body_format(None);
    for (idx, expense) in expenses.iter().enumerate() {
        let row = idx as u32 + 1;
        sheet.write_string_with_format(row, 0, &expense.building, &format)?;
        write_date(sheet, row, 1, expense.date.as_deref(), None)?;
        sheet.write_string_with_format(row, 2, &expense.expense_type, &format)?;
        sheet.write_number_with_format(row, 3, expense.amount, &format)?;
        sheet.write_string_with_format(row, 4, &expense.category, &format)?;
        sheet.write_string_with_format(row, 5, &expense.notes, &format)?;
    }
    Ok(())
}
