//! 删除确认与预览

use std::io::{self, BufRead, Write};

use zone_sweeper_client::DnsRecord;

/// Render the deletion preview: one header line plus one fixed-width row
/// per record (id, type, name, content).
pub fn render_preview(records: &[DnsRecord]) -> String {
    let mut out = String::new();
    out.push_str("The following records will be deleted:\n");
    out.push_str(&format!("{:<36} {:<6} {:<40} CONTENT\n", "ID", "TYPE", "NAME"));
    out.push_str(&"-".repeat(110));
    out.push('\n');
    for record in records {
        out.push_str(&format!(
            "{:<36} {:<6} {:<40} {}\n",
            record.id, record.record_type, record.name, record.content
        ));
    }
    out
}

/// Ask the user to confirm deletion of `records` on stdin.
pub fn confirm(records: &[DnsRecord], assume_yes: bool) -> bool {
    confirm_with_reader(records, assume_yes, &mut io::stdin().lock())
}

/// 空集一律拒绝；`assume_yes` 时不读取任何输入。
///
/// 只有去掉首尾空白、折叠大小写后的 `"y"` / `"yes"` 算确认，
/// 其余输入（包括空行与 EOF）一律视为否。
pub fn confirm_with_reader<R: BufRead>(records: &[DnsRecord], assume_yes: bool, reader: &mut R) -> bool {
    if records.is_empty() {
        println!("No matching records found.");
        return false;
    }

    print!("{}", render_preview(records));

    if assume_yes {
        return true;
    }

    print!("Proceed with deletion? [y/N]: ");
    let _ = io::stdout().flush();

    let mut answer = String::new();
    if reader.read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
