use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Draft(args) => commands::draft::handle(&args, ctx, flags),
        Commands::Answer(args) => commands::answer::handle(&args, ctx, flags),
        Commands::Report(args) => commands::report::handle(&args, ctx, flags),
        Commands::Save(args) => commands::save::handle(&args, ctx, flags),
        Commands::Migrate(args) => commands::migrate::handle(&args, flags),
        Commands::Catalogue(_) | Commands::Schema(_) => {
            unreachable!("catalogue/schema are pre-dispatched in main")
        }
    }
}
