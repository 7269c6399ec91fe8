use std::process::ExitCode;

use anyhow::Result;
use clap::Parser as _;
use tracing::debug;
use userdir_business::{UserForm, UserId};
use userdir_cli::cli::{Cli, Commands};
use userdir_cli::commands::{
    PromptGate, UserChanges, run_create, run_delete, run_list, run_show, run_update,
};
use userdir_cli::context::{EndpointArgs, build_client, resolve_config};
use userdir_cli::output::Output;
use userdir_cli::timing;

#[tokio::main]
async fn main() -> ExitCode {
    let out = Output::new();
    match run(&out).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            out.error(format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}

async fn run(out: &Output) -> Result<()> {
    let dotenv = dotenvy::dotenv();
    let cli = Cli::parse();
    timing::init_tracing(cli.verbose, cli.timing);

    if let Err(err) = dotenv {
        debug!("no .env file loaded: {err}");
    }

    let config = resolve_config(EndpointArgs {
        host: cli.host,
        port: cli.port,
        base: cli.base,
    })?;
    let mut client = build_client(&config);

    match cli.command {
        Commands::List => run_list(&mut client, out).await,
        Commands::Show { id } => run_show(&client, out, UserId(id)).await,
        Commands::Create { name, email, phone } => {
            let form = UserForm {
                name,
                email,
                phone_number: phone,
            };
            run_create(&mut client, out, form).await
        }
        Commands::Update {
            id,
            name,
            email,
            phone,
        } => {
            let changes = UserChanges {
                name,
                email,
                phone_number: phone,
            };
            run_update(&mut client, out, UserId(id), changes).await
        }
        Commands::Delete { id, yes } => {
            if yes {
                debug!("confirmation skipped with --yes");
                run_delete(&mut client, out, UserId(id), &|_: UserId| true).await
            } else {
                run_delete(&mut client, out, UserId(id), &PromptGate).await
            }
        }
    }
}
