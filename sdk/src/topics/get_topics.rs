/// `GetTopics` command is used to list all topics of the project.
/// It has no additional payload.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct GetTopics {}
