use crate::report::ReportData;

pub fn render_report_json(data: &ReportData) -> Result<String, serde_json::Error> {
    let mut out = serde_json::to_string_pretty(data)?;
    out.push('\n');
    Ok(out)
}
