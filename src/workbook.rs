//! Workbook assembly and the single save step

use std::fs;
use std::io;
use std::path::Path;

use rust_xlsxwriter::Workbook;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::sheets::{
    create_buildings_sheet, create_expenses_sheet, create_rents_sheet, create_tenants_sheet,
    create_units_sheet,
};

/// Assemble the full workbook in memory, one sheet per config section.
pub fn generate_workbook(config: &Config) -> Result<Workbook> {
    let mut workbook = Workbook::new();

    create_buildings_sheet(&mut workbook, &config.buildings)?;
    create_units_sheet(&mut workbook, &config.units)?;
    create_tenants_sheet(&mut workbook, &config.tenants)?;
    create_rents_sheet(&mut workbook, &config.rents_paid)?;
    create_expenses_sheet(&mut workbook, &config.expenses)?;

    Ok(workbook)
}

/// Serialize the workbook and write it to `path`.
///
/// Serialization happens into a buffer first, so a failed run never leaves a
/// partial file behind. A permission error usually means the file is open in
/// Excel, which gets its own message.
pub fn save_workbook(workbook: &mut Workbook, path: &Path) -> Result<()> {
    let buffer = workbook.save_to_buffer()?;

    fs::write(path, buffer).map_err(|err| match err.kind() {
        io::ErrorKind::PermissionDenied => Error::OutputLocked {
            path: path.to_path_buf(),
        },
        _ => Error::Io(err),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheets::{
        SHEET_BUILDINGS, SHEET_EXPENSES, SHEET_RENTS, SHEET_TENANTS, SHEET_UNITS,
    };

    #[test]
    fn test_empty_config_creates_all_sheets() {
        let mut workbook = generate_workbook(&Config::default()).unwrap();

        for name in [
            SHEET_BUILDINGS,
            SHEET_UNITS,
            SHEET_TENANTS,
            SHEET_RENTS,
            SHEET_EXPENSES,
        ] {
            assert!(
                workbook.worksheet_from_name(name).is_ok(),
                "missing sheet {name}"
            );
        }
    }

    #[test]
    fn test_save_rejects_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("out.xlsx");

        let mut workbook = generate_workbook(&Config::default()).unwrap();
        let err = save_workbook(&mut workbook, &path).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
