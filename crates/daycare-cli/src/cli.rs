use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use daycare_core::VERSION;

/// Daycare - roster, billing and calendar views for a daycare business
#[derive(Parser)]
#[command(name = "daycare")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a JSON dataset (seed data when omitted)
    #[arg(short, long, global = true, env = "DAYCARE_DATA")]
    pub data: Option<String>,

    /// Path to the config file
    #[arg(long, global = true, env = "DAYCARE_CONFIG")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII symbols and borders only
    #[arg(long, global = true)]
    pub ascii: bool,
}

/// Output flags shared by every listing command
#[derive(Args, Clone, Default)]
pub struct OutputArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `expenses` command
#[derive(Args)]
pub struct ExpensesArgs {
    /// Text to look for in description or category
    #[arg(value_name = "QUERY", default_value = "")]
    pub query: String,

    /// Expense category, or "all"
    #[arg(short, long, default_value = "all")]
    pub category: String,

    /// Only expenses dated in this month (YYYY-MM)
    #[arg(long, value_name = "MONTH")]
    pub month: Option<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for the `categories` command
#[derive(Args)]
pub struct CategoriesArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `invoices` command
#[derive(Args)]
pub struct InvoicesArgs {
    /// Text to look for in child name, parent name or invoice number
    #[arg(value_name = "QUERY", default_value = "")]
    pub query: String,

    /// Invoice status (paid, pending, overdue), or "all"
    #[arg(short, long, default_value = "all")]
    pub status: String,

    /// Only invoices due in this month (YYYY-MM)
    #[arg(long, value_name = "MONTH")]
    pub due_month: Option<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for the `children` command
#[derive(Args)]
pub struct ChildrenArgs {
    /// Text to look for in name or classroom
    #[arg(value_name = "QUERY", default_value = "")]
    pub query: String,

    /// Age group (toddlers, preschool), or "all"
    #[arg(short, long, default_value = "all")]
    pub group: String,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for the `teachers` command
#[derive(Args)]
pub struct TeachersArgs {
    /// Text to look for in name, email or position
    #[arg(value_name = "QUERY", default_value = "")]
    pub query: String,

    /// Teacher status (active, "on leave", training), or "all"
    #[arg(short, long, default_value = "all")]
    pub status: String,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for the `events` command
#[derive(Args)]
pub struct EventsArgs {
    /// Show events on one day (YYYY-MM-DD)
    #[arg(long, value_name = "DATE", conflicts_with = "month")]
    pub on: Option<String>,

    /// Show events in one month (YYYY-MM); defaults to the current month
    #[arg(long, value_name = "MONTH")]
    pub month: Option<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for the `notifications` command
#[derive(Args)]
pub struct NotificationsArgs {
    /// Notification type (info, alert, reminder), or "all"
    #[arg(short, long, default_value = "all")]
    pub kind: String,

    /// Only unread notifications
    #[arg(long)]
    pub unread: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List expenses, filtered by text and category
    Expenses(ExpensesArgs),

    /// List the expense category options
    Categories(CategoriesArgs),

    /// List invoices, filtered by text and status
    Invoices(InvoicesArgs),

    /// List enrolled children, filtered by text and age group
    Children(ChildrenArgs),

    /// List teachers, filtered by text and status
    Teachers(TeachersArgs),

    /// Show calendar events for a day or month
    Events(EventsArgs),

    /// List notifications, filtered by type
    Notifications(NotificationsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
