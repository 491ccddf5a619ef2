pub mod publish_message;
