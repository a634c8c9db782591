//! Top-level error reported from `main`.

use miette::Diagnostic;

#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum Error {
    /// Terminal setup, drawing or teardown failed.
    #[error("terminal I/O error: {0}")]
    #[diagnostic(
        code(todo_tui::io),
        help("the terminal may be left in raw mode; run `reset` to restore it")
    )]
    Io(#[from] std::io::Error),
}

/// Install the miette report handler.
pub fn install_report_handler() {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .context_lines(3)
                .tab_width(4)
                .break_words(true)
                .build(),
        )
    }))
    .ok(); // Ignore if already set
}
