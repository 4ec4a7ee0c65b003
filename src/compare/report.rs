use super::{BlockReport, Window};
use std::collections::BTreeMap;

/// Header line naming the two files of a pair. The window is appended only
/// when it deviates from the defaults, matching what was typed on the
/// command line (`-1` = unbounded).
pub fn pair_header(file1: &str, file2: &str, window: &Window) -> String {
    if window.is_whole() {
        format!("# Compare {} vs. {}", file1, file2)
    } else {
        let size = window.size().map_or(-1, |size| size as i64);
        format!(
            "# Compare {} vs. {} [off={} size={}]",
            file1,
            file2,
            window.offset(),
            size
        )
    }
}

const COLUMNS: [&str; 5] = [
    "Block Size",
    "Blocks-Mismatched",
    "Blocks-Matched",
    "Blocks-Total",
    "Percent Matched",
];

/// Render the per-block-size table for one pair, sizes ascending, numbers
/// right-aligned under their headers.
pub fn render_table(reports: &BTreeMap<u64, BlockReport>) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<10}    {:>17}    {:>14}    {:>12}    {:>15}\n",
        COLUMNS[0], COLUMNS[1], COLUMNS[2], COLUMNS[3], COLUMNS[4]
    ));
    for (size, report) in reports {
        let percent = format!("{:.2}%", report.percent_matched());
        out.push_str(&format!(
            "{:<10}    {:>17}    {:>14}    {:>12}    {:>15}\n",
            size,
            report.mismatched,
            report.matched,
            report.total(),
            percent
        ));
    }
    out
}
