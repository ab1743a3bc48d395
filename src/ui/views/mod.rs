pub mod interactive;
pub mod lesson;
pub mod library;
pub mod profile;
pub mod skill_tree;
pub mod topic;
