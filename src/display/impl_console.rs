use crate::display::interface::ResultDisplay;
use crate::identify::render::View;
use std::error::Error;
use std::io::Write;

const BAR_WIDTH: usize = 20;

/// Draws the view as a framed block of text.
pub struct ResultDisplayConsole<W: Write + Send + Sync> {
    out: W,
}

impl ResultDisplayConsole<std::io::Stdout> {
    pub fn new() -> Self {
        Self::with_writer(std::io::stdout())
    }
}

impl<W: Write + Send + Sync> ResultDisplayConsole<W> {
    pub fn with_writer(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

pub fn confidence_bar(percent: u8) -> String {
    let filled = (usize::from(percent.min(100)) * BAR_WIDTH + 50) / 100;
    format!(
        "[{}{}] {}%",
        "█".repeat(filled),
        "░".repeat(BAR_WIDTH - filled),
        percent
    )
}

pub fn lines(view: &View) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some(file_name) = &view.file_name {
        lines.push(format!("📷 {}", file_name));
    }
    if !view.headline.is_empty() {
        lines.push(view.headline.clone());
    }
    if let Some(percent) = view.confidence {
        lines.push(confidence_bar(percent));
    }
    for (label, value) in &view.catalogue_hint {
        lines.push(format!("{}: {}", label, value));
    }

    if let Some(panel) = &view.info_panel {
        lines.push(String::new());
        lines.push(panel.title.clone());
        for section in &panel.sections {
            lines.push(format!("  {}", section.title));
            if let Some(text) = &section.text {
                lines.push(format!("    {}", text));
            }
            for item in &section.items {
                lines.push(format!("    • {}", item));
            }
        }
        if let Some(message) = &panel.empty_message {
            lines.push(format!("  {}", message));
        }
    }

    if let Some(warning) = &view.warning {
        lines.push(String::new());
        lines.push(format!("⚠ {}", warning));
    }

    lines
}

impl<W: Write + Send + Sync> ResultDisplay for ResultDisplayConsole<W> {
    fn show(&mut self, view: &View) -> Result<(), Box<dyn Error + Send + Sync>> {
        let lines = lines(view);
        let width = lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);

        writeln!(self.out, "┌{}┐", "─".repeat(width + 2))?;
        for line in &lines {
            let padding = width - line.chars().count();
            writeln!(self.out, "│ {}{} │", line, " ".repeat(padding))?;
        }
        writeln!(self.out, "└{}┘", "─".repeat(width + 2))?;
        self.out.flush()?;

        Ok(())
    }
}
