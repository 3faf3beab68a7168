use std::fmt;

/// Write `rows` under `headers` as left-aligned columns separated by two
/// spaces. Widths count characters, not bytes.
pub fn write_table(
    f: &mut fmt::Formatter<'_>,
    headers: &[String],
    rows: &[Vec<String>],
) -> fmt::Result {
    if rows.is_empty() {
        return writeln!(f, "(no rows)");
    }

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    write_row(f, headers, &widths)?;
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    write_row(f, &rule, &widths)?;
    for row in rows {
        write_row(f, row, &widths)?;
    }
    Ok(())
}

fn write_row(f: &mut fmt::Formatter<'_>, cells: &[String], widths: &[usize]) -> fmt::Result {
    let last = cells.len().saturating_sub(1);
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if i == last {
            write!(f, "{}", cell)?;
        } else {
            write!(f, "{:<width$}  ", cell, width = width)?;
        }
    }
    writeln!(f)
}

pub fn or_dash(value: Option<&str>) -> &str {
    value.filter(|v| !v.is_empty()).unwrap_or("-")
}

pub fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Grid(Vec<String>, Vec<Vec<String>>);

    impl fmt::Display for Grid {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write_table(f, &self.0, &self.1)
        }
    }

    fn strings(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_columns_align_to_widest_cell() {
        let grid = Grid(
            strings(&["worker", "hours"]),
            vec![strings(&["Ana Lopez", "8.0"]), strings(&["Luis", "14.5"])],
        );

        insta::assert_snapshot!(grid.to_string(), @r"
        worker     hours
        ---------  -----
        Ana Lopez  8.0
        Luis       14.5
        ");
    }

    #[test]
    fn test_empty_rows() {
        let grid = Grid(strings(&["worker"]), Vec::new());
        assert_eq!(grid.to_string(), "(no rows)\n");
    }

    #[test]
    fn test_or_dash() {
        assert_eq!(or_dash(None), "-");
        assert_eq!(or_dash(Some("")), "-");
        assert_eq!(or_dash(Some("2025-01-01")), "2025-01-01");
    }
}
