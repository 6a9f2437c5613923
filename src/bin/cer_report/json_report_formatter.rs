use transcript_cer::Report;

pub fn render(report: &Report) -> Result<String, String> {
    let mut rendered = serde_json::to_string_pretty(report).map_err(|err| {
        format!(
            "Failed to serialize report for {} candidates: {err}",
            report.meta.candidate_count
        )
    })?;
    rendered.push('\n');
    Ok(rendered)
}
