use std::fmt;

use super::formatters::{or_dash, write_table, yes_no};
use super::view_models::{
    BackupViewModel, CompanyListViewModel, CreatedViewModel, CrewListViewModel,
    DeactivatedViewModel, DeletedViewModel, ExportViewModel, InitViewModel, ReportViewModel,
    SnapshotViewModel, StatusViewModel, TableViewModel, WorkerListViewModel, WorkerViewModel,
};
use crewbook_store::{PpeSnapshot, Table};

fn write_data_table(f: &mut fmt::Formatter<'_>, table: &Table) -> fmt::Result {
    write_table(f, &table.columns, &table.string_rows())
}

fn write_written(f: &mut fmt::Formatter<'_>, paths: &[std::path::PathBuf]) -> fmt::Result {
    for path in paths {
        writeln!(f, "Wrote {}", path.display())?;
    }
    Ok(())
}

fn write_snapshot(f: &mut fmt::Formatter<'_>, ppe: &PpeSnapshot) -> fmt::Result {
    writeln!(
        f,
        "  Gloves:   issued {}  returned {}",
        or_dash(ppe.gloves_issued_date.as_deref()),
        or_dash(ppe.gloves_returned_date.as_deref())
    )?;
    writeln!(
        f,
        "  Sleeves:  issued {}  returned {}",
        or_dash(ppe.sleeves_issued_date.as_deref()),
        or_dash(ppe.sleeves_returned_date.as_deref())
    )
}

impl fmt::Display for CreatedViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} id: {}", self.entity, self.id)
    }
}

impl fmt::Display for CompanyListViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers = vec!["id".to_string(), "name".to_string()];
        let rows: Vec<Vec<String>> = self
            .companies
            .iter()
            .map(|c| vec![c.id.to_string(), c.name.clone()])
            .collect();
        write_table(f, &headers, &rows)
    }
}

impl fmt::Display for CrewListViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers = vec!["id".to_string(), "crew".to_string(), "foreman".to_string()];
        let rows: Vec<Vec<String>> = self
            .crews
            .iter()
            .map(|c| {
                vec![
                    c.id.to_string(),
                    c.crew_code.clone(),
                    or_dash(c.foreman_name.as_deref()).to_string(),
                ]
            })
            .collect();
        write_table(f, &headers, &rows)
    }
}

impl fmt::Display for WorkerListViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers: Vec<String> = ["id", "name", "company", "crew", "start", "active"]
            .iter()
            .map(|h| h.to_string())
            .collect();
        let rows: Vec<Vec<String>> = self
            .workers
            .iter()
            .map(|w| {
                vec![
                    w.id.to_string(),
                    w.full_name.clone(),
                    w.company.clone(),
                    w.crew.clone(),
                    or_dash(w.start_date.as_deref()).to_string(),
                    yes_no(w.active).to_string(),
                ]
            })
            .collect();
        write_table(f, &headers, &rows)
    }
}

impl fmt::Display for WorkerViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let w = &self.worker;
        writeln!(f, "#{} {}", w.id, w.full_name)?;
        writeln!(f, "  Company:  {}  Crew: {}", w.company_id, w.crew_id)?;
        writeln!(f, "  Start:    {}", or_dash(w.start_date.as_deref()))?;
        writeln!(
            f,
            "  Active:   {}{}",
            yes_no(w.active),
            w.termination_date
                .as_deref()
                .map(|d| format!(" (terminated {})", d))
                .unwrap_or_default()
        )?;
        write_snapshot(f, &w.ppe)?;
        if let Some(notes) = &w.notes {
            writeln!(f, "  Notes:    {}", notes)?;
        }
        Ok(())
    }
}

impl fmt::Display for DeactivatedViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Worker {} inactive as of {}",
            self.id, self.termination_date
        )
    }
}

impl fmt::Display for DeletedViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = &self.deleted;
        writeln!(
            f,
            "Removed worker {} with {} warnings, {} accidents, {} sick hour rows, {} PPE events",
            self.id, d.warnings, d.accidents, d.sick_hours, d.ppe_events
        )
    }
}

impl fmt::Display for SnapshotViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Worker {}", self.worker_id)?;
        write_snapshot(f, &self.ppe)
    }
}

impl fmt::Display for ReportViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_data_table(f, &self.history)?;
        if let Some(totals) = &self.totals {
            writeln!(f)?;
            writeln!(f, "Totals")?;
            write_data_table(f, totals)?;
        }
        write_written(f, &self.written)
    }
}

impl fmt::Display for TableViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_data_table(f, &self.rows)?;
        write_written(f, &self.written)
    }
}

impl fmt::Display for BackupViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} ({} bytes, entry {})",
            self.backup.archive.display(),
            self.backup.bytes,
            self.backup.entry
        )
    }
}

impl fmt::Display for ExportViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers = vec!["table".to_string(), "rows".to_string(), "file".to_string()];
        let rows: Vec<Vec<String>> = self
            .tables
            .iter()
            .map(|t| {
                vec![
                    t.table.to_string(),
                    t.rows.to_string(),
                    t.path.display().to_string(),
                ]
            })
            .collect();
        write_table(f, &headers, &rows)
    }
}

impl fmt::Display for StatusViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Data dir:  {}", self.data_dir.display())?;
        writeln!(
            f,
            "Store:     {}{}",
            self.store_path.display(),
            if self.store_exists { "" } else { " (missing)" }
        )?;
        writeln!(f, "Workers:   {}", self.worker_count)
    }
}

impl fmt::Display for InitViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let init = &self.init;
        writeln!(
            f,
            "Config:  {}{}",
            init.config_path.display(),
            if init.config_created { " (created)" } else { "" }
        )?;
        writeln!(
            f,
            "Store:   {}{}",
            init.store_path.display(),
            if init.seeded { " (from seed)" } else { "" }
        )
    }
}
