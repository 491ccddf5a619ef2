pub mod message;
pub mod resource_name;
pub mod subscription;
pub mod topic;
