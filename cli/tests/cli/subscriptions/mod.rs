mod test_subscription_delete_command;
