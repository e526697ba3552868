use clap::Subcommand;

use market_console::model::{EntityId, ProductCategory, Role};

#[derive(Subcommand)]
pub(crate) enum RemoteCommands {
    /// Show the configured backend
    Show {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
    /// Set the backend URL and request timeout
    Set {
        #[arg(long)]
        url: String,
        /// Request timeout in seconds, 0 to disable
        #[arg(long)]
        timeout_secs: Option<u64>,
    },
}

#[derive(Subcommand)]
pub(crate) enum UsersCommands {
    /// List users
    List {
        /// Match against name or email
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        role: Option<Role>,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
    /// Show a user
    Get {
        id: EntityId,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
    /// Update a user
    Update {
        id: EntityId,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        role: Role,
        /// New password (left unchanged when omitted)
        #[arg(long)]
        password: Option<String>,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete a user
    Delete { id: EntityId },
}

#[derive(Subcommand)]
pub(crate) enum StoresCommands {
    /// List stores
    List {
        /// Match against name or location
        #[arg(long)]
        search: Option<String>,
        /// Only stores managed by the logged-in user
        #[arg(long, conflicts_with = "manager")]
        mine: bool,
        /// Only stores managed by this user id (server-side)
        #[arg(long)]
        manager: Option<EntityId>,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
    /// Show a store
    Get {
        id: EntityId,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
    /// Create a store
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        location: String,
        /// Manager user id (defaults to the logged-in user)
        #[arg(long)]
        manager: Option<EntityId>,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
    /// Update a store
    Update {
        id: EntityId,
        #[arg(long)]
        name: String,
        #[arg(long)]
        location: String,
        #[arg(long)]
        manager: Option<EntityId>,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete a store
    Delete { id: EntityId },
}

#[derive(Subcommand)]
pub(crate) enum ProductsCommands {
    /// List products
    List {
        /// Match against name or description
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        category: Option<ProductCategory>,
        #[arg(long)]
        store: Option<EntityId>,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
    /// Show a product
    Get {
        id: EntityId,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
    /// Server-side keyword search
    Search {
        keyword: String,
        /// Restrict the search to one store
        #[arg(long)]
        store: Option<EntityId>,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
    /// Create a product
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        category: ProductCategory,
        #[arg(long)]
        store: EntityId,
        #[arg(long)]
        price: f64,
        #[arg(long)]
        description: Option<String>,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
    /// Update a product
    Update {
        id: EntityId,
        #[arg(long)]
        name: String,
        #[arg(long)]
        category: ProductCategory,
        #[arg(long)]
        store: EntityId,
        #[arg(long)]
        price: f64,
        #[arg(long)]
        description: Option<String>,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete a product
    Delete { id: EntityId },
}
