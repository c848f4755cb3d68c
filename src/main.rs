use clap::Parser;
use miette::Result;
use relkit::cli::{Cli, Commands};

fn main() -> Result<()> {
    // Reset SIGPIPE to default behavior (terminate silently) for proper Unix piping.
    // Without this, piping to `head`, `grep -q`, etc. causes a panic on broken pipe.
    // This is standard practice for CLI tools that output to stdout.
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }
    // Install miette's fancy error handler for beautiful diagnostics
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    let global = cli.global;

    match cli.command {
        Commands::Import(args) => relkit::cli::commands::import::run(args),
        Commands::Calc(args) => relkit::cli::commands::calc::run(args, &global),
        Commands::Analysis(cmd) => relkit::cli::commands::analysis::run(cmd, &global),
        Commands::Environments(args) => relkit::cli::commands::environments::run(args),
        Commands::Components(args) => relkit::cli::commands::components::run(args),
    }
}
