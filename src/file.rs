// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use rust_xlsxwriter::{Format, Workbook};

use crate::config::consts::NAME_HEADER;
use crate::config::options::ExportOptions;
use crate::data::PlayerRecord;
use crate::error::{Error, Result};

/// Widest sheet Excel accepts (column XFD).
pub const MAX_COLUMNS: usize = 16_384;

/// Header row plus one row per player. `None` cells are left blank.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

/// Column 1 is the player name, then one column per wanted title in order.
/// Stats with titles outside the list (e.g. the rating) are not shown.
pub fn build_grid(records: &[PlayerRecord], titles: &[String]) -> Grid {
    let mut headers = Vec::with_capacity(titles.len() + 1);
    headers.push(s!(NAME_HEADER));
    headers.extend(titles.iter().cloned());

    let rows = records
        .iter()
        .map(|rec| {
            let mut row = Vec::with_capacity(titles.len() + 1);
            row.push(Some(rec.name.clone()));
            row.extend(titles.iter().map(|t| rec.stat(t).map(String::from)));
            row
        })
        .collect();

    Grid { headers, rows }
}

/// Write the grid as a single-sheet workbook, replacing any existing file.
pub fn write_xlsx(grid: &Grid, path: &Path, sheet_name: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let width = grid.headers.len();
    if width > MAX_COLUMNS {
        return Err(Error::TooManyColumns(width));
    }

    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();
    let sheet = workbook.add_worksheet();
    sheet.set_name(sheet_name)?;

    for (col, h) in grid.headers.iter().enumerate() {
        sheet.write_string_with_format(0, column(col)?, h, &bold)?;
    }
    for (i, row) in grid.rows.iter().enumerate() {
        let r = (i + 1) as u32;
        for (col, cell) in row.iter().enumerate() {
            if let Some(v) = cell {
                sheet.write_string(r, column(col)?, v)?;
            }
        }
    }

    workbook.save(path)?;
    Ok(())
}

fn column(col: usize) -> Result<u16> {
    u16::try_from(col).map_err(|_| Error::TooManyColumns(col + 1))
}

/// Full re-export of everything collected so far. Returns the path written.
pub fn export_records(
    export: &ExportOptions,
    records: &[PlayerRecord],
    titles: &[String],
) -> Result<PathBuf> {
    let path = export.out_path().to_path_buf();
    let grid = build_grid(records, titles);
    write_xlsx(&grid, &path, &export.sheet_name)?;
    log::info!("Exported {} players to {}", grid.rows.len(), path.display());
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> std::io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(std::io::Error::other(format!(
            "Path exists but is not a directory: {}",
            dir.display()
        )));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::StatEntry;

    fn titles(v: &[&str]) -> Vec<String> {
        v.iter().map(|t| s!(*t)).collect()
    }

    #[test]
    fn header_is_name_then_titles() {
        let t = titles(&["Win %", "Avg KDA", "Kills"]);
        let grid = build_grid(&[], &t);
        assert_eq!(grid.headers, vec!["Player Name", "Win %", "Avg KDA", "Kills"]);
        assert!(grid.rows.is_empty());
    }

    #[test]
    fn rating_never_lands_in_a_column() {
        let rec = PlayerRecord::new("A", vec![
            StatEntry::new("MMR Rating", "1500"),
            StatEntry::new("Kills", "10"),
        ]);
        let grid = build_grid(&[rec], &titles(&["Win %", "Kills"]));
        assert_eq!(grid.rows[0], vec![Some(s!("A")), None, Some(s!("10"))]);
    }

    #[test]
    fn record_without_stats_keeps_blank_row() {
        let grid = build_grid(&[PlayerRecord::new("Empty", vec![])], &titles(&["Win %", "Kills"]));
        assert_eq!(grid.rows, vec![vec![Some(s!("Empty")), None, None]]);
    }

    #[test]
    fn duplicate_title_exports_later_value() {
        let rec = PlayerRecord::new("A", vec![
            StatEntry::new("Win %", "55%"),
            StatEntry::new("Win %", "56%"),
        ]);
        let grid = build_grid(&[rec], &titles(&["Win %"]));
        assert_eq!(grid.rows[0][1].as_deref(), Some("56%"));
    }

    #[test]
    fn too_many_titles_is_an_error_not_a_wrap() {
        let t: Vec<String> = (0..MAX_COLUMNS).map(|i| format!("T{i}")).collect();
        let grid = build_grid(&[], &t);
        let path = std::env::temp_dir().join("halo_unit_too_wide.xlsx");
        let err = write_xlsx(&grid, &path, "Player Stats").unwrap_err();
        assert!(matches!(err, Error::TooManyColumns(n) if n == MAX_COLUMNS + 1));
        assert_eq!(column(70_000).unwrap_err().to_string(), Error::TooManyColumns(70_001).to_string());
    }

    #[test]
    fn grid_is_deterministic() {
        let recs = vec![
            PlayerRecord::new("A", vec![StatEntry::new("Kills", "1")]),
            PlayerRecord::new("B", vec![StatEntry::new("Deaths", "2")]),
        ];
        let t = titles(&["Kills", "Deaths"]);
        assert_eq!(build_grid(&recs, &t), build_grid(&recs, &t));
    }
}
