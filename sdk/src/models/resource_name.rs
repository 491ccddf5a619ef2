use crate::error::PubSubError;
use std::fmt::{Display, Formatter};

pub(crate) const PROJECTS: &str = "projects";
const MIN_ID_LENGTH: usize = 3;
const MAX_ID_LENGTH: usize = 255;
const RESERVED_ID_PREFIX: &str = "goog";
const ID_SYMBOLS: &str = "-_.~+%";
const PROJECT_SYMBOLS: &str = "-_.:";

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum ResourceKind {
    Topic,
    Subscription,
}

impl ResourceKind {
    pub fn collection(&self) -> &'static str {
        match self {
            ResourceKind::Topic => "topics",
            ResourceKind::Subscription => "subscriptions",
        }
    }

    fn not_specified(&self) -> PubSubError {
        match self {
            ResourceKind::Topic => PubSubError::TopicNotSpecified,
            ResourceKind::Subscription => PubSubError::SubscriptionNotSpecified,
        }
    }
}

/// `ResourceName` is the fully-qualified name of a topic or subscription,
/// `projects/{project}/{topics|subscriptions}/{id}`.
///
/// Short ids are expanded against the given project, fully-qualified names
/// are accepted as they are (including names from another project).
///
/// An id is 3 to 255 characters long, starts with a letter, does not start
/// with `goog` and contains only letters, digits and `-_.~+%`. Names are
/// never trimmed, surrounding whitespace makes them invalid.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct ResourceName {
    project: String,
    kind: ResourceKind,
    id: String,
}

impl ResourceName {
    pub fn topic(project: &str, value: &str) -> Result<Self, PubSubError> {
        Self::parse(project, ResourceKind::Topic, value)
    }

    pub fn subscription(project: &str, value: &str) -> Result<Self, PubSubError> {
        Self::parse(project, ResourceKind::Subscription, value)
    }

    pub fn parse(project: &str, kind: ResourceKind, value: &str) -> Result<Self, PubSubError> {
        let (name_project, id) = Self::split(kind, value)?;
        let project = match name_project {
            Some(name_project) => name_project,
            None if is_valid_project(project) => project,
            None => return Err(PubSubError::InvalidResourceName(project.to_string())),
        };

        Ok(Self {
            project: project.to_string(),
            kind,
            id: id.to_string(),
        })
    }

    /// Check a short id or fully-qualified name without expanding it.
    pub fn validate(kind: ResourceKind, value: &str) -> Result<(), PubSubError> {
        Self::split(kind, value).map(|_| ())
    }

    /// The unescaped path segments of the name, `[projects, project, collection, id]`.
    pub fn path_segments(&self) -> [&str; 4] {
        [PROJECTS, &self.project, self.kind.collection(), &self.id]
    }

    fn split(kind: ResourceKind, value: &str) -> Result<(Option<&str>, &str), PubSubError> {
        if value.trim().is_empty() {
            return Err(kind.not_specified());
        }

        let invalid = || PubSubError::InvalidResourceName(value.to_string());
        let Some(path) = value.strip_prefix(PROJECTS).and_then(|path| path.strip_prefix('/'))
        else {
            return match is_valid_id(value) {
                true => Ok((None, value)),
                false => Err(invalid()),
            };
        };

        match path.split('/').collect::<Vec<_>>().as_slice() {
            [project, collection, id]
                if *collection == kind.collection() && is_valid_project(project) && is_valid_id(id) =>
            {
                Ok((Some(*project), *id))
            }
            _ => Err(invalid()),
        }
    }
}

fn is_valid_id(id: &str) -> bool {
    (MIN_ID_LENGTH..=MAX_ID_LENGTH).contains(&id.len())
        && id.starts_with(|c: char| c.is_ascii_alphabetic())
        && !id.starts_with(RESERVED_ID_PREFIX)
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || ID_SYMBOLS.contains(c))
}

pub(crate) fn is_valid_project(project: &str) -> bool {
    !project.is_empty()
        && project
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || PROJECT_SYMBOLS.contains(c))
}

impl Display for ResourceName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path_segments().join("/"))
    }
}
