use chrono::NaiveDate;
use clap::Args;
use std::path::PathBuf;

/// Date range and name filter shared by every history report.
#[derive(Debug, Clone, Default, Args)]
pub struct HistoryArgs {
    /// First day included (default: reports.default_from)
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// Last day included (default: today)
    #[arg(long)]
    pub to: Option<NaiveDate>,

    /// Only workers whose name contains this text
    #[arg(long)]
    pub name: Option<String>,

    /// Also write the history rows to this CSV file
    #[arg(long, value_name = "PATH")]
    pub csv: Option<PathBuf>,
}

/// History arguments plus the per-worker totals export.
#[derive(Debug, Clone, Default, Args)]
pub struct TotalsArgs {
    #[command(flatten)]
    pub history: HistoryArgs,

    /// Also write the per-worker totals to this CSV file
    #[arg(long, value_name = "PATH")]
    pub totals_csv: Option<PathBuf>,
}

/// `--<field> DATE` and `--blank-<field>` for one PPE snapshot column.
///
/// `blank` wins over a date given on the same field.
#[derive(Debug, Clone, Copy, Default)]
pub struct SnapshotFlag {
    pub date: Option<NaiveDate>,
    pub blank: bool,
}

#[derive(Debug, Clone, Default, Args)]
pub struct SnapshotArgs {
    #[arg(long)]
    pub gloves_issued: Option<NaiveDate>,
    #[arg(long)]
    pub blank_gloves_issued: bool,

    #[arg(long)]
    pub gloves_returned: Option<NaiveDate>,
    #[arg(long)]
    pub blank_gloves_returned: bool,

    #[arg(long)]
    pub sleeves_issued: Option<NaiveDate>,
    #[arg(long)]
    pub blank_sleeves_issued: bool,

    #[arg(long)]
    pub sleeves_returned: Option<NaiveDate>,
    #[arg(long)]
    pub blank_sleeves_returned: bool,
}

impl SnapshotArgs {
    /// Fields in editor order: gloves issued/returned, sleeves issued/returned.
    pub fn flags(&self) -> [SnapshotFlag; 4] {
        [
            SnapshotFlag {
                date: self.gloves_issued,
                blank: self.blank_gloves_issued,
            },
            SnapshotFlag {
                date: self.gloves_returned,
                blank: self.blank_gloves_returned,
            },
            SnapshotFlag {
                date: self.sleeves_issued,
                blank: self.blank_sleeves_issued,
            },
            SnapshotFlag {
                date: self.sleeves_returned,
                blank: self.blank_sleeves_returned,
            },
        ]
    }
}
