pub(crate) mod common;
pub(crate) mod subscription;
pub(crate) mod topic;

use crate::args::{subscription::SubscriptionAction, topic::TopicAction};
use clap::{Args, Command as ClapCommand};
use clap::{Parser, Subcommand};
use clap_complete::{generate, Generator, Shell};
use figlet_rs::FIGfont;
use pubsub_sdk::args::Args as PubSubArgs;
use std::path::PathBuf;

static CARGO_BIN_NAME: &str = env!("CARGO_BIN_NAME");

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub(crate) struct PubSubConsoleArgs {
    #[clap(flatten, verbatim_doc_comment)]
    pub(crate) pubsub: PubSubArgs,

    #[clap(flatten, verbatim_doc_comment)]
    pub(crate) cli: CliOptions,

    #[clap(subcommand)]
    pub(crate) command: Option<Command>,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub(crate) struct CliOptions {
    /// Quiet mode (disabled stdout printing)
    #[clap(short, long, default_value_t = false)]
    pub(crate) quiet: bool,

    /// Debug mode (verbose printing to given file)
    ///
    /// The RUST_LOG environment variable narrows what is written,
    /// by default everything down to the trace level is.
    #[clap(short, long, verbatim_doc_comment)]
    pub(crate) debug: Option<PathBuf>,

    /// Shell completion generator for pubsubctl command
    ///
    /// Option prints shell completion code on standard output for selected shell.
    /// Redirect standard output to file and follow and use selected shell means
    /// to enable completion for pubsubctl command.
    /// Option cannot be combined with other options.
    ///
    /// Example:
    ///  source <(pubsubctl --generate bash)
    /// or
    ///  pubsubctl --generate bash > pubsubctl_completion.bash
    ///  source pubsubctl_completion.bash
    #[clap(verbatim_doc_comment)]
    #[clap(long = "generate", value_enum)]
    pub(crate) generator: Option<Shell>,
}

#[derive(Debug, Clone, Subcommand)]
pub(crate) enum Command {
    /// Manage Cloud Pub/Sub topics
    #[command(subcommand, visible_alias = "t")]
    Topics(TopicAction),
    /// Manage Cloud Pub/Sub subscriptions
    #[command(subcommand, visible_alias = "s")]
    Subscriptions(SubscriptionAction),
}

impl PubSubConsoleArgs {
    pub(crate) fn generate_completion<G: Generator>(&self, generator: G) {
        generate(
            generator,
            &mut PubSubConsoleArgs::augment_args_for_update(
                ClapCommand::new(CARGO_BIN_NAME).bin_name(CARGO_BIN_NAME),
            ),
            CARGO_BIN_NAME,
            &mut std::io::stdout(),
        );
    }

    pub(crate) fn print_overview() {
        let mut cli = PubSubConsoleArgs::augment_args_for_update(
            ClapCommand::new(CARGO_BIN_NAME).bin_name(CARGO_BIN_NAME),
        );

        let full_help = cli.render_help().to_string();
        let help = match full_help.find("Options:") {
            Some(options) => &full_help[..options],
            None => full_help.as_str(),
        };

        let font = FIGfont::standard().ok();
        if let Some(figure) = font.as_ref().and_then(|font| font.convert("PubSub CLI")) {
            println!("{figure}");
        }
        println!("{help}");
        println!("Run '{CARGO_BIN_NAME} --help' for full help message.");
        println!("Run '{CARGO_BIN_NAME} COMMAND --help' for more information on a command.");
    }
}
