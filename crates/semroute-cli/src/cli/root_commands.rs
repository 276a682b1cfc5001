use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Print the body of the definition matching a signature.
    Extract(ExtractArgs),
    /// Generate a one-line description of a symbol.
    Brief(BriefArgs),
    /// Build or refresh the skill index.
    Index {
        #[command(subcommand)]
        action: IndexCommands,
    },
    /// Keyword search over the skill index.
    Search(SearchArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ExtractArgs {
    /// Source file, relative to the project root.
    #[arg(long)]
    pub file: String,
    /// Declared signature, e.g. "void Widget::draw() const".
    #[arg(long)]
    pub signature: String,
}

#[derive(Clone, Debug, Args)]
pub struct BriefArgs {
    /// Module the symbol belongs to.
    #[arg(long)]
    pub module: String,
    #[arg(long)]
    pub signature: String,
    /// Source file to extract the implementation from, relative to the project root.
    #[arg(long)]
    pub file: Option<String>,
}

#[derive(Clone, Debug, Subcommand)]
pub enum IndexCommands {
    /// Summarize every source file from scratch.
    Build,
    /// Re-summarize only changed files and drop deleted ones.
    Update,
}

#[derive(Clone, Debug, Args)]
pub struct SearchArgs {
    pub query: String,
}
