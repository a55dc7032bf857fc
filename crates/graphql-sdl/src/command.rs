use crate::Cli;
use crate::CommandResult;

/// A subcommand. Implementors consume themselves along with the parsed
/// top-level [`Cli`] flags.
pub(crate) trait RunnableCommand: std::fmt::Debug {
    async fn run(self, cli: Cli) -> CommandResult;
}
