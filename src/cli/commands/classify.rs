use crate::cli::parser::Commands;
use crate::core::calculator::classify::{classify, is_reportable};
use crate::errors::AppResult;
use crate::utils::colors::paint_category;
use textwrap::Options;

const LABEL_WIDTH: usize = 16;

/// Handle the `classify` command: one line per text with its category and
/// whether it would appear in the novedades report.
pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Classify { texts } = cmd {
        let indent = " ".repeat(LABEL_WIDTH + 4);
        let options = Options::new(80).subsequent_indent(&indent);

        for text in texts {
            let category = classify(text);
            let label = format!("{:<width$}", category.label(), width = LABEL_WIDTH);
            let marker = if is_reportable(category) { "*" } else { " " };
            let shown = if text.is_empty() { "(empty)" } else { text.as_str() };

            let line = format!("{label} {marker}  {shown}");
            let wrapped = textwrap::fill(&line, &options);
            // Color only the label; the rest stays plain.
            match wrapped.strip_prefix(&label) {
                Some(rest) => println!("{}{}", paint_category(category, &label), rest),
                None => println!("{wrapped}"),
            }
        }
    }
    Ok(())
}
