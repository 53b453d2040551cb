mod project_dir;
pub mod project_name;

pub use project_dir::ProjectDir;
