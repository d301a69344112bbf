use clap::Parser;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

#[derive(Debug, Parser)]
#[command(name = "todo")]
#[command(about = "Manage a todo list kept by a todo-api server", long_about = None)]
pub struct Config {
    /// Base URL of the todo API
    #[arg(long, env = "TODO_API_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,
}
