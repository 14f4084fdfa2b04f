use clap::{Parser, Subcommand};

/// Command-line interface definition for rvendas
/// Terminal dashboard for the sales (vendas) REST API
#[derive(Parser)]
#[command(
    name = "rvendas",
    version = env!("CARGO_PKG_VERSION"),
    about = "A terminal sales dashboard: log in, list sales by date range, look up, add and delete records through the vendas REST API",
    long_about = None
)]
pub struct Cli {
    /// Override the local storage path (session token and internal log)
    #[arg(global = true, long = "storage")]
    pub storage: Option<String>,

    /// Override the API base URL (e.g. http://localhost:8080)
    #[arg(global = true, long = "api-url")]
    pub api_url: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file and local storage
    Init,

    /// Show the effective configuration
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Authenticate against the API and store the session token
    Login {
        /// User name
        #[arg(long = "user", short = 'u')]
        user: String,

        /// Password (read from stdin when omitted)
        #[arg(long = "password", short = 'p')]
        password: Option<String>,
    },

    /// Forget the stored session token (the server is not contacted)
    Logout,

    /// Show whether a session token is stored
    Status,

    /// List sales, optionally filtered by sale date
    List {
        /// First sale date to include (YYYY-MM-DD)
        #[arg(long = "from")]
        from: Option<String>,

        /// Last sale date to include (YYYY-MM-DD)
        #[arg(long = "to")]
        to: Option<String>,

        /// Also render per-product and per-day charts
        #[arg(long = "charts")]
        charts: bool,
    },

    /// Look up a single sale by id
    Find {
        /// Sale id
        id: String,
    },

    /// Create a new sale, then refresh the list
    Add {
        /// Product name
        #[arg(long = "product")]
        product: Option<String>,

        /// Quantity sold (positive integer)
        #[arg(long = "quantity")]
        quantity: Option<String>,

        /// Sale date (YYYY-MM-DD)
        #[arg(long = "date")]
        date: Option<String>,

        /// Total value in BRL (e.g. 59.90 or 59,90)
        #[arg(long = "value")]
        value: Option<String>,

        /// Start of the date filter used for the refreshed list
        #[arg(long = "from")]
        from: Option<String>,

        /// End of the date filter used for the refreshed list
        #[arg(long = "to")]
        to: Option<String>,
    },

    /// Delete a sale by id, then refresh the list
    Del {
        /// Sale id
        id: u64,

        /// Skip the confirmation prompt
        #[arg(long = "yes", short = 'y')]
        yes: bool,

        /// Start of the date filter used for the refreshed list
        #[arg(long = "from")]
        from: Option<String>,

        /// End of the date filter used for the refreshed list
        #[arg(long = "to")]
        to: Option<String>,
    },

    /// Print the internal log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
