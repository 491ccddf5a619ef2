mod args;
mod error;
mod logging;

use crate::args::{
    subscription::SubscriptionAction, topic::TopicAction, Command, PubSubConsoleArgs,
};
use crate::error::PubSubCmdError;
use crate::logging::Logging;
use clap::Parser;
use pubsub_sdk::cli::{
    message::publish_message::PublishMessageCmd,
    subscriptions::{
        create_subscriptions::CreateSubscriptionsCmd,
        delete_subscriptions::DeleteSubscriptionsCmd, get_subscriptions::GetSubscriptionsCmd,
    },
    topics::{
        create_topics::CreateTopicsCmd, delete_topics::DeleteTopicsCmd,
        get_topic_subscriptions::GetTopicSubscriptionsCmd, get_topics::GetTopicsCmd,
    },
};
use pubsub_sdk::cli_command::{CliCommand, PRINT_TARGET};
use pubsub_sdk::client_provider;
use pubsub_sdk::client_provider::ClientProviderConfig;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{event, Level};

fn get_command(command: Command) -> Box<dyn CliCommand> {
    match command {
        Command::Topics(command) => match command {
            TopicAction::Create(args) => Box::new(CreateTopicsCmd::new(args.topic_ids)),
            TopicAction::Delete(args) => Box::new(DeleteTopicsCmd::new(args.topic_ids)),
            TopicAction::List(args) => Box::new(GetTopicsCmd::new(args.list_mode.into())),
            TopicAction::ListSubscriptions(args) => Box::new(GetTopicSubscriptionsCmd::new(
                args.topic_id.unwrap_or_default(),
                args.list_mode.into(),
            )),
            TopicAction::Publish(args) => Box::new(PublishMessageCmd::new(
                args.topic_id.unwrap_or_default(),
                args.message,
                args.attributes,
            )),
        },
        Command::Subscriptions(command) => match command {
            SubscriptionAction::Create(args) => Box::new(CreateSubscriptionsCmd::new(
                args.topic,
                args.subscription_ids,
                args.ack_deadline,
            )),
            SubscriptionAction::Delete(args) => {
                Box::new(DeleteSubscriptionsCmd::new(args.subscription_ids))
            }
            SubscriptionAction::List(args) => {
                Box::new(GetSubscriptionsCmd::new(args.list_mode.into()))
            }
        },
    }
}

async fn run(args: PubSubConsoleArgs) -> Result<(), PubSubCmdError> {
    let Some(command) = args.command else {
        PubSubConsoleArgs::print_overview();
        return Ok(());
    };

    let _logging = Logging::init(args.cli.quiet, args.cli.debug.as_deref())?;

    // Arguments are checked before any request is sent to the service
    let mut command = get_command(command);
    command.validate()?;

    let client_provider_config = Arc::new(ClientProviderConfig::from_args(args.pubsub)?);
    let client = client_provider::get_client(client_provider_config).await?;

    event!(target: PRINT_TARGET, Level::INFO, "Executing {}", command.explain());
    command.execute_cmd(client.as_ref()).await?;

    client.disconnect().await?;

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = PubSubConsoleArgs::parse();

    if let Some(generator) = args.cli.generator {
        args.generate_completion(generator);
        return ExitCode::SUCCESS;
    }

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error:#}");
            ExitCode::FAILURE
        }
    }
}
