use anyhow::Result;
use clap::Parser;

use doctr_cli::cli::commands::{configure, styles, translate};
use doctr_cli::cli::{Args, Command};
use doctr_cli::config::ResolveOptions;
use doctr_cli::output::{self, OutputConfig};
use doctr_cli::{logging, translation};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    output::init(OutputConfig {
        quiet: args.quiet,
        no_color: args.no_color || OutputConfig::default().no_color,
    });
    logging::init(args.verbose);

    match args.command {
        Some(Command::Languages) => {
            translation::print_languages();
        }
        Some(Command::Styles) => {
            styles::list_presets();
        }
        Some(Command::Configure { show }) => {
            configure::run_configure(show)?;
        }
        None => {
            let options = translate::TranslateOptions {
                file: args.file,
                resolve: ResolveOptions {
                    from: args.from,
                    to: args.to,
                    style: args.style,
                    format: args.format,
                    context: args.context,
                    model: args.model,
                    endpoint: args.endpoint,
                },
                extras: args.extras,
                output: args.output,
                save: args.save,
            };
            translate::run_translate(options).await?;
        }
    }

    Ok(())
}
