use crate::domain::entities::history::HistoryItem;
use crate::domain::ports::history::HistorySource;
use crate::domain::services::history_filter::filter_history;
use crate::domain::value_objects::severity_tag::SeverityTag;
use crate::presentation::cli::formatters::diagnosis_fmt::print_section_header;
use crate::presentation::cli::formatters::history_fmt::format_history_table;

/// Lists past analyses matching `tag`.
///
/// # Errors
///
/// Returns an error if the history cannot be loaded or JSON serialization fails.
pub fn run_history(source: &dyn HistorySource, tag: SeverityTag, json: bool) -> anyhow::Result<()> {
    let items = source.load()?;
    let visible = filter_history(&items, tag);

    if json {
        print_history_json(&visible)?;
    } else {
        print_section_header(&format!("📜 Analysis history [{tag}]"));
        println!("{}", format_history_table(&visible, tag));
    }
    Ok(())
}

fn print_history_json(items: &[HistoryItem]) -> anyhow::Result<()> {
    let output = serde_json::to_string_pretty(items)?;
    println!("{output}");
    Ok(())
}
