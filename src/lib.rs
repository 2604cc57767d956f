pub mod auth;
pub mod chat;
pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod tasks;
pub mod ui;

use std::sync::Arc;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use colored::Colorize;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::chat::ChatSession;
use crate::client::ApiClient;
use crate::config::ClientConfig;
use crate::model::types::{CreateTask, TaskStatus, UpdateTask};
use crate::ui::output;

/// Command-line interface.
#[derive(Parser, Debug)]
#[command(
    name = "taskbridge",
    version,
    about = "Terminal client for the task backend with a chat assistant"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Task operations
    Tasks {
        #[command(subcommand)]
        command: TaskCommands,
    },
    /// Interactive chat with the task assistant
    Chat {
        /// User id of the active session (defaults to $TASKBRIDGE_USER)
        #[arg(long, env = "TASKBRIDGE_USER")]
        user: Option<String>,
    },
    /// Generate shell completions to stdout
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
    /// Generate man page to stdout
    Man,
}

#[derive(Subcommand, Debug)]
pub enum TaskCommands {
    /// List tasks, one page at a time
    List {
        /// Page number (1-based)
        #[arg(long, default_value_t = 1)]
        page: u32,

        /// Tasks per page
        #[arg(long, default_value_t = 100)]
        page_size: u32,
    },
    /// Create a new task
    Add {
        title: String,

        #[arg(long)]
        description: Option<String>,

        /// pending, in_progress, or completed
        #[arg(long)]
        status: Option<TaskStatus>,
    },
    /// Update fields of an existing task
    Update {
        id: i64,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        status: Option<TaskStatus>,
    },
    /// Mark a task completed
    Done { id: i64 },
    /// Delete a task
    Rm { id: i64 },
    /// Show a single task
    Show { id: i64 },
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Tasks { command } => {
            let client = ApiClient::new(&ClientConfig::from_env())?;
            run_task_command(&client, command).await
        }
        Commands::Chat { user } => {
            let client = ApiClient::new(&ClientConfig::from_env())?;
            run_chat(Arc::new(client), user).await
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "taskbridge", &mut std::io::stdout());
            Ok(())
        }
        Commands::Man => {
            let cmd = Cli::command();
            let man = clap_mangen::Man::new(cmd);
            let mut out = std::io::stdout();
            man.render(&mut out)?;
            Ok(())
        }
    }
}

async fn run_task_command(client: &ApiClient, command: TaskCommands) -> Result<()> {
    match command {
        TaskCommands::List { page, page_size } => {
            let listing = client.tasks().list(page, page_size).await?;
            if listing.tasks.is_empty() {
                println!("No tasks on page {}.", listing.page);
                return Ok(());
            }
            for task in &listing.tasks {
                println!("{}", output::task_row(task));
            }
            println!(
                "\n{}",
                format!("page {} ({} tasks)", listing.page, listing.total).dimmed()
            );
        }
        TaskCommands::Add {
            title,
            description,
            status,
        } => {
            let task = client
                .tasks()
                .create(&CreateTask {
                    title,
                    description,
                    status,
                })
                .await?;
            println!("Created task {}.", task.id);
        }
        TaskCommands::Update {
            id,
            title,
            description,
            status,
        } => {
            let task = client
                .tasks()
                .update(
                    id,
                    &UpdateTask {
                        title,
                        description,
                        status,
                    },
                )
                .await?;
            println!("Updated task {}.", task.id);
        }
        TaskCommands::Done { id } => {
            client
                .tasks()
                .update(
                    id,
                    &UpdateTask {
                        status: Some(TaskStatus::Completed),
                        ..Default::default()
                    },
                )
                .await?;
            println!("Task {id} completed.");
        }
        TaskCommands::Rm { id } => {
            client.tasks().delete(id).await?;
            println!("Task {id} deleted.");
        }
        TaskCommands::Show { id } => {
            let task = client.tasks().get(id).await?;
            println!("{}", output::task_detail(&task));
        }
    }
    Ok(())
}

/// Line-oriented chat REPL. `/reset` starts a fresh conversation, `/quit`
/// exits.
async fn run_chat(client: Arc<ApiClient>, user: Option<String>) -> Result<()> {
    let session = ChatSession::new(client, user);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    println!("{}", "Chat with the task assistant. /reset, /quit".dimmed());
    stdout.write_all(b"> ").await?;
    stdout.flush().await?;

    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            "/quit" | "/exit" => break,
            "/reset" => {
                session.reset();
                println!("{}", "Started a new conversation.".dimmed());
            }
            input => match session.send_message(input).await {
                Ok(chat::SendOutcome::Sent) => {
                    let messages = session.messages();
                    if let Some(reply) = messages
                        .iter()
                        .rev()
                        .find(|m| m.role == chat::ChatRole::Assistant)
                    {
                        if !reply.tool_calls.is_empty() {
                            println!("{}", output::tool_call_badges(&reply.tool_calls));
                        }
                        println!("{}", reply.content);
                    }
                }
                Ok(chat::SendOutcome::Ignored) => {}
                Err(err) => {
                    eprintln!("{}", err.to_string().red());
                    if err.is_auth() {
                        break;
                    }
                }
            },
        }
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;
    }

    Ok(())
}
