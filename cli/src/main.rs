mod commands;
mod terminal;

use commands::{CommandLine, check};
use terminal::{logging, print, prompt, report::Reporter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg = commands.config();

    let mut reporter = Reporter::new(cfg.color);
    logging::init_logging(&cfg);
    print::banner(cfg.no_banner, cfg.quiet);

    let path = match commands.file {
        Some(path) => path,
        None => prompt::ask_for_path()?,
    };

    check::check(&path, &cfg, &mut reporter).await?;

    print::end_of_program(cfg.quiet);
    Ok(())
}
