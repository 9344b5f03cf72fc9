//! The legacy sample workbook
//!
//! Writes a fixed demo dataset (two buildings of five units each, five
//! tenants) plus derived revenue/expense summaries. Useful as a starting
//! template before a real config file exists.

use rust_xlsxwriter::Workbook;

use crate::error::Result;
use crate::format::body_format;
use crate::sheets::write_header;

pub const SHEET_SAMPLE_PROPERTIES: &str = "بيانات العقارات";
pub const SHEET_SAMPLE_TENANTS: &str = "بيانات المستأجرين";
pub const SHEET_SAMPLE_REVENUES: &str = "تقارير الإيرادات";
pub const SHEET_SAMPLE_EXPENSES: &str = "المصروفات";
pub const SHEET_SAMPLE_NEW_DATA: &str = "إضافة بيانات جديدة";

/// Months covered by the sample revenue/expense reports. The second month is
/// written with zero values as a fill-in-later placeholder.
const REPORT_MONTHS: [&str; 2] = ["2024-07", "2024-08"];

#[derive(Debug, Clone)]
pub struct SampleProperty {
    pub building: &'static str,
    pub unit_no: u32,
    pub unit_type: &'static str,
    pub monthly_rent: f64,
    pub daily_rent: f64,
    pub monthly_maintenance: f64,
}

#[derive(Debug, Clone)]
pub struct SampleTenant {
    pub name: &'static str,
    pub unit_no: u32,
    pub contract_start: &'static str,
    pub rent: f64,
    pub payment_status: &'static str,
}

/// Aggregated totals for one building, accumulated from its unit rows.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildingTotals {
    pub building: String,
    pub monthly_rent: f64,
    pub weekly_rent: f64,
    pub monthly_maintenance: f64,
}

impl BuildingTotals {
    fn new(building: &str) -> Self {
        Self {
            building: building.to_string(),
            monthly_rent: 0.0,
            weekly_rent: 0.0,
            monthly_maintenance: 0.0,
        }
    }

    pub fn weekly_maintenance(&self) -> f64 {
        self.monthly_maintenance / 4.0
    }
}

fn property(
    building: &'static str,
    unit_no: u32,
    unit_type: &'static str,
    monthly_rent: f64,
    daily_rent: f64,
    monthly_maintenance: f64,
) -> SampleProperty {
    SampleProperty {
        building,
        unit_no,
        unit_type,
        monthly_rent,
        daily_rent,
        monthly_maintenance,
    }
}

pub fn sample_properties() -> Vec<SampleProperty> {
    vec![
        property("العمارة 1", 1, "شقة", 5000.0, 200.0, 300.0),
        property("العمارة 1", 2, "شقة", 5500.0, 220.0, 350.0),
        property("العمارة 1", 3, "شقة", 6000.0, 240.0, 400.0),
        property("العمارة 1", 4, "استوديو", 3000.0, 150.0, 200.0),
        property("العمارة 1", 5, "استوديو", 3200.0, 160.0, 220.0),
        property("العمارة 2", 1, "شقة", 6500.0, 250.0, 450.0),
        property("العمارة 2", 2, "شقة", 7000.0, 270.0, 500.0),
        property("العمارة 2", 3, "شقة", 7200.0, 280.0, 520.0),
        property("العمارة 2", 4, "استوديو", 3500.0, 180.0, 250.0),
        property("العمارة 2", 5, "استوديو", 3700.0, 190.0, 270.0),
    ]
}

pub fn sample_tenants() -> Vec<SampleTenant> {
    vec![
        SampleTenant {
            name: "أحمد علي",
            unit_no: 1,
            contract_start: "2024-01-01",
            rent: 5000.0,
            payment_status: "مدفوع",
        },
        SampleTenant {
            name: "محمد سعيد",
            unit_no: 2,
            contract_start: "2024-02-01",
            rent: 5500.0,
            payment_status: "مدفوع",
        },
        SampleTenant {
            name: "خالد عمر",
            unit_no: 3,
            contract_start: "2024-03-01",
            rent: 6000.0,
            payment_status: "لم يدفع",
        },
        SampleTenant {
            name: "سامي حسن",
            unit_no: 4,
            contract_start: "2024-04-01",
            rent: 3000.0,
            payment_status: "مدفوع",
        },
        SampleTenant {
            name: "يوسف أحمد",
            unit_no: 5,
            contract_start: "2024-05-01",
            rent: 3200.0,
            payment_status: "لم يدفع",
        },
    ]
}

/// Sum rents and maintenance per building, grouped on the building name in
/// first-seen order. Weekly revenue is daily rent times seven.
pub fn building_totals(properties: &[SampleProperty]) -> Vec<BuildingTotals> {
    let mut totals: Vec<BuildingTotals> = Vec::new();

    for property in properties {
        let entry = match totals
            .iter()
            .position(|t| t.building == property.building)
        {
            Some(pos) => &mut totals[pos],
            None => {
                totals.push(BuildingTotals::new(property.building));
                let last = totals.len() - 1;
                &mut totals[last]
            }
        };

        entry.monthly_rent += property.monthly_rent;
        entry.weekly_rent += property.daily_rent * 7.0;
        entry.monthly_maintenance += property.monthly_maintenance;
    }

    totals
}

/// Build the full sample workbook in memory.
pub fn generate_sample_workbook() -> Result<Workbook> {
    let mut workbook = Workbook::new();

    let properties = sample_properties();
    let tenants = sample_tenants();
    let totals = building_totals(&properties);

    create_properties_sheet(&mut workbook, &properties)?;
    create_tenants_sheet(&mut workbook, &tenants)?;
    create_revenue_sheet(&mut workbook, &totals)?;
    create_expense_sheet(&mut workbook, &totals)?;
    create_new_data_sheet(&mut workbook)?;

    Ok(workbook)
}

fn create_properties_sheet(
    workbook: &mut Workbook,
    properties: &[SampleProperty],
) -> Result<()> {
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_SAMPLE_PROPERTIES)?;
    write_header(
        sheet,
        &[
            "اسم العمارة",
            "رقم الوحدة",
            "نوع الوحدة",
            "الإيجار الشهري",
            "الإيجار اليومي",
            "تكاليف الصيانة الشهرية",
        ],
    )?;

    let format = body_format(None);
    for (idx, property) in properties.iter().enumerate() {
        let row = idx as u32 + 1;
        sheet.write_string_with_format(row, 0, property.building, &format)?;
        sheet.write_number_with_format(row, 1, property.unit_no, &format)?;
        sheet.write_string_with_format(row, 2, property.unit_type, &format)?;
        sheet.write_number_with_format(row, 3, property.monthly_rent, &format)?;
        sheet.write_number_with_format(row, 4, property.daily_rent, &format)?;
        sheet.write_number_with_format(row, 5, property.monthly_maintenance, &format)?;
    }
    Ok(())
}

fn create_tenants_sheet(workbook: &mut Workbook, tenants: &[SampleTenant]) -> Result<()> {
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_SAMPLE_TENANTS)?;
    write_header(
        sheet,
        &[
            "اسم المستأجر",
            "رقم الوحدة",
            "تاريخ بدء العقد",
            "قيمة الإيجار",
            "حالة الدفعات",
        ],
    )?;

    let format = body_format(None);
    for (idx, tenant) in tenants.iter().enumerate() {
        let row = idx as u32 + 1;
        sheet.write_string_with_format(row, 0, tenant.name, &format)?;
        sheet.write_number_with_format(row, 1, tenant.unit_no, &format)?;
        sheet.write_string_with_format(row, 2, tenant.contract_start, &format)?;
        sheet.write_number_with_format(row, 3, tenant.rent, &format)?;
        sheet.write_string_with_format(row, 4, tenant.payment_status, &format)?;
    }
    Ok(())
}

fn create_revenue_sheet(workbook: &mut Workbook, totals: &[BuildingTotals]) -> Result<()> {
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_SAMPLE_REVENUES)?;
    write_header(
        sheet,
        &[
            "اسم العمارة",
            "الإيرادات الشهرية",
            "الإيرادات الأسبوعية",
            "التاريخ",
        ],
    )?;

    let format = body_format(None);
    let mut row = 1u32;
    for entry in totals {
        sheet.write_string_with_format(row, 0, &entry.building, &format)?;
        sheet.write_number_with_format(row, 1, entry.monthly_rent, &format)?;
        sheet.write_number_with_format(row, 2, entry.weekly_rent, &format)?;
        sheet.write_string_with_format(row, 3, REPORT_MONTHS[0], &format)?;
        row += 1;

        sheet.write_string_with_format(row, 0, &entry.building, &format)?;
        sheet.write_number_with_format(row, 1, 0.0, &format)?;
        sheet.write_number_with_format(row, 2, 0.0, &format)?;
        sheet.write_string_with_format(row, 3, REPORT_MONTHS[1], &format)?;
        row += 1;
    }
    Ok(())
}

fn create_expense_sheet(workbook: &mut Workbook, totals: &[BuildingTotals]) -> Result<()> {
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_SAMPLE_EXPENSES)?;
    write_header(
        sheet,
        &[
            "اسم العمارة",
            "المصروفات الشهرية",
            "المصروفات الأسبوعية",
            "التاريخ",
        ],
    )?;

    let format = body_format(None);
    let mut row = 1u32;
    for entry in totals {
        sheet.write_string_with_format(row, 0, &entry.building, &format)?;
        sheet.write_number_with_format(row, 1, entry.monthly_maintenance, &format)?;
        sheet.write_number_with_format(row, 2, entry.weekly_maintenance(), &format)?;
        sheet.write_string_with_format(row, 3, REPORT_MONTHS[0], &format)?;
        row += 1;

        sheet.write_string_with_format(row, 0, &entry.building, &format)?;
        sheet.write_number_with_format(row, 1, 0.0, &format)?;
        sheet.write_number_with_format(row, 2, 0.0, &format)?;
        sheet.write_string_with_format(row, 3, REPORT_MONTHS[1], &format)?;
        row += 1;
    }
    Ok(())
}

fn create_new_data_sheet(workbook: &mut Workbook) -> Result<()> {
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_SAMPLE_NEW_DATA)?;
    write_header(sheet, &["نوع البيانات", "الوصف"])?;

    let rows = [
        ("عمارة جديدة", "إدخال بيانات عمارة جديدة"),
        ("وحدة جديدة", "إدخال بيانات وحدة جديدة"),
        ("مستأجر جديد", "إدخال بيانات مستأجر جديد"),
    ];

    let format = body_format(None);
    for (idx, (kind, description)) in rows.iter().enumerate() {
        let row = idx as u32 + 1;
        sheet.write_string_with_format(row, 0, *kind, &format)?;
        sheet.write_string_with_format(row, 1, *description, &format)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals_group_by_building_in_first_seen_order() {
        let totals = building_totals(&sample_properties());

        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].building, "العمارة 1");
        assert_eq!(totals[1].building, "العمارة 2");
    }

    #[test]
    fn test_revenue_totals() {
        let totals = building_totals(&sample_properties());

        assert_eq!(totals[0].monthly_rent, 22700.0);
        assert_eq!(totals[1].monthly_rent, 27900.0);
        assert_eq!(totals[0].weekly_rent, 6790.0);
        assert_eq!(totals[1].weekly_rent, 8190.0);
    }

    #[test]
    fn test_expense_totals() {
        let totals = building_totals(&sample_properties());

        assert_eq!(totals[0].monthly_maintenance, 1470.0);
        assert_eq!(totals[1].monthly_maintenance, 1990.0);
        assert_eq!(totals[0].weekly_maintenance(), 367.5);
        assert_eq!(totals[1].weekly_maintenance(), 497.5);
    }

    #[test]
    fn test_sample_workbook_has_all_sheets() {
        let mut workbook = generate_sample_workbook().unwrap();

        for name in [
            SHEET_SAMPLE_PROPERTIES,
            SHEET_SAMPLE_TENANTS,
            SHEET_SAMPLE_REVENUES,
            SHEET_SAMPLE_EXPENSES,
            SHEET_SAMPLE_NEW_DATA,
        ] {
            assert!(
                workbook.worksheet_from_name(name).is_ok(),
                "missing sheet {name}"
            );
        }
    }
}
