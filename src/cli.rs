use clap::Parser;

/// Terminal to-do list. Tasks live in memory for the session; overdue tasks
/// are highlighted in the list view.
#[derive(Parser)]
#[command(name = "todo", version, about = "Terminal to-do list with overdue highlighting")]
pub struct Cli {
    /// Evaluation date for overdue highlighting (mm/dd/yyyy).
    /// Defaults to the local calendar date.
    #[arg(long)]
    pub today: Option<String>,
}
