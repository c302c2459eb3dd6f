use std::io::Write;
use std::path::Path;

use crate::dashboard::DashboardController;

/// Write the current display values as `index,<series...>` rows.
///
/// Rows run to the longest series. Shorter series and non-finite samples
/// leave their cell empty.
pub fn write_display_csv<W: Write>(w: &mut W, controller: &DashboardController) -> std::io::Result<()> {
    let names: Vec<&str> = controller.registry().iter().map(|s| s.name()).collect();
    write!(w, "index")?;
    for name in &names {
        write!(w, ",{}", csv_field(name))?;
    }
    writeln!(w)?;

    let rows = controller.bindings().iter().map(|b| b.len()).max().unwrap_or(0);
    for j in 0..rows {
        write!(w, "{j}")?;
        for b in controller.bindings() {
            match b.y_display().get(j) {
                Some(v) if v.is_finite() => write!(w, ",{v}")?,
                _ => write!(w, ",")?,
            }
        }
        writeln!(w)?;
    }
    Ok(())
}

pub fn save_display_csv<P: AsRef<Path>>(path: P, controller: &DashboardController) -> std::io::Result<()> {
    let mut f = std::io::BufWriter::new(std::fs::File::create(path)?);
    write_display_csv(&mut f, controller)?;
    f.flush()
}

fn csv_field(s: &str) -> String {
    if s.contains(|c| matches!(c, ',' | '"' | '\n')) {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
