//! Console status printed at the end of a run.

use std::io::{self, Write};
use std::path::Path;

use pricewatch_core::Alert;

/// Confirm both output paths, then list triggered alerts or say there were none.
pub fn print_status<W: Write>(
    out: &mut W,
    csv_path: &Path,
    summary_path: &Path,
    alerts: &[Alert],
) -> io::Result<()> {
    writeln!(out, "Done.")?;
    writeln!(out, "Saved: {}", csv_path.display())?;
    writeln!(out, "Saved: {}", summary_path.display())?;

    if alerts.is_empty() {
        writeln!(out, "\n No alerts triggered")?;
    } else {
        writeln!(out, "\n {} alert(s) triggered:", alerts.len())?;
        for alert in alerts {
            writeln!(out, " {alert}")?;
        }
    }

    Ok(())
}
