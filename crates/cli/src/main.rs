//! Bodega CLI - Admin dashboard from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Sign in (password can also come from BODEGA_ADMIN_PASSWORD)
//! bodega login -e admin@example.com -p 'secret'
//!
//! # Dashboard tiles
//! bodega dashboard
//!
//! # Category management
//! bodega category list --search bever
//! bodega category add -n "Beverages" -i https://cdn/beverages.png
//!
//! # Product management
//! bodega product add -n "Oat Milk" -c cat-1 --price 4.50 --image oat.png
//!
//! # Order management
//! bodega order list --sort total --desc
//! bodega order set-status ORD123 "Order Shipped"
//! ```
//!
//! # Commands
//!
//! - `login` / `logout` - session management
//! - `dashboard` - aggregate counts
//! - `category` / `product` / `order` - per-resource management

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "bodega")]
#[command(author, version, about = "Bodega admin dashboard CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in and persist the session
    Login {
        /// Admin email address
        #[arg(short, long)]
        email: String,

        /// Admin password (falls back to BODEGA_ADMIN_PASSWORD)
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Drop the persisted session
    Logout,
    /// Show aggregate dashboard counts
    Dashboard,
    /// Manage categories
    Category {
        #[command(subcommand)]
        action: CategoryAction,
    },
    /// Manage products
    Product {
        #[command(subcommand)]
        action: ProductAction,
    },
    /// Manage orders
    Order {
        #[command(subcommand)]
        action: OrderAction,
    },
}

#[derive(Subcommand)]
enum CategoryAction {
    /// List categories
    List {
        /// Case-insensitive substring search on the name
        #[arg(short, long)]
        search: Option<String>,

        /// Column to sort by (e.g. name)
        #[arg(long)]
        sort: Option<String>,

        /// Sort descending
        #[arg(long)]
        desc: bool,
    },
    /// Create a category
    Add {
        /// Display name
        #[arg(short, long)]
        name: String,

        /// Image URL
        #[arg(short, long)]
        image: Option<String>,
    },
    /// Update a category
    Update {
        /// Category id
        id: String,

        /// New display name
        #[arg(short, long)]
        name: String,

        /// New image URL
        #[arg(short, long)]
        image: Option<String>,
    },
    /// Delete a category
    Remove {
        /// Category id
        id: String,
    },
}

#[derive(Subcommand)]
enum ProductAction {
    /// List products
    List {
        /// Case-insensitive substring search on name/brand/description
        #[arg(short, long)]
        search: Option<String>,

        /// Column to sort by (e.g. name, price, stock)
        #[arg(long)]
        sort: Option<String>,

        /// Sort descending
        #[arg(long)]
        desc: bool,

        /// Only products in this category id
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Create a product
    Add {
        /// Product name
        #[arg(short, long)]
        name: String,

        /// Owning category id
        #[arg(short, long)]
        category: String,

        /// Description
        #[arg(short, long, default_value = "")]
        description: String,

        /// Brand
        #[arg(short, long, default_value = "")]
        brand: String,

        /// Unit price (decimal, e.g. 4.50)
        #[arg(long)]
        price: String,

        /// Units on hand
        #[arg(long, default_value_t = 0)]
        stock: u32,

        /// Image files to upload (repeatable)
        #[arg(long)]
        image: Vec<std::path::PathBuf>,

        /// Mark as featured
        #[arg(long)]
        featured: bool,
    },
    /// Update a product
    Update {
        /// Product id
        id: String,

        /// Product name
        #[arg(short, long)]
        name: String,

        /// Owning category id
        #[arg(short, long)]
        category: String,

        /// Description
        #[arg(short, long, default_value = "")]
        description: String,

        /// Brand
        #[arg(short, long, default_value = "")]
        brand: String,

        /// Unit price (decimal, e.g. 4.50)
        #[arg(long)]
        price: String,

        /// Units on hand
        #[arg(long, default_value_t = 0)]
        stock: u32,

        /// Image files to upload (repeatable)
        #[arg(long)]
        image: Vec<std::path::PathBuf>,

        /// Mark as featured
        #[arg(long)]
        featured: bool,
    },
    /// Delete a product
    Remove {
        /// Product id
        id: String,
    },
}

#[derive(Subcommand)]
enum OrderAction {
    /// List orders
    List {
        /// Case-insensitive substring search on order id / customer name
        #[arg(short, long)]
        search: Option<String>,

        /// Column to sort by (id, customer, date, total, status)
        #[arg(long)]
        sort: Option<String>,

        /// Sort descending
        #[arg(long)]
        desc: bool,
    },
    /// Show one order in detail
    Show {
        /// Order id (e.g. ORD123)
        id: String,
    },
    /// Assign a new status to an order
    SetStatus {
        /// Order id (e.g. ORD123)
        id: String,

        /// New status label (e.g. "Order Shipped")
        status: String,

        /// Reject assignments the lifecycle does not allow
        #[arg(long)]
        enforce: bool,
    },
    /// Print the status lifecycle
    Statuses,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Login { email, password } => {
            commands::auth::login(&email, password).await?;
        }
        Commands::Logout => commands::auth::logout().await?,
        Commands::Dashboard => commands::dashboard::show().await?,
        Commands::Category { action } => match action {
            CategoryAction::List { search, sort, desc } => {
                commands::category::list(search.as_deref(), sort.as_deref(), desc).await?;
            }
            CategoryAction::Add { name, image } => {
                commands::category::add(&name, image).await?;
            }
            CategoryAction::Update { id, name, image } => {
                commands::category::update(&id, &name, image).await?;
            }
            CategoryAction::Remove { id } => commands::category::remove(&id).await?,
        },
        Commands::Product { action } => match action {
            ProductAction::List {
                search,
                sort,
                desc,
                category,
            } => {
                commands::product::list(
                    search.as_deref(),
                    sort.as_deref(),
                    desc,
                    category.as_deref(),
                )
                .await?;
            }
            ProductAction::Add {
                name,
                category,
                description,
                brand,
                price,
                stock,
                image,
                featured,
            } => {
                let draft = commands::product::build_draft(
                    &name,
                    &category,
                    &description,
                    &brand,
                    &price,
                    stock,
                    &image,
                    featured,
                )?;
                commands::product::add(draft).await?;
            }
            ProductAction::Update {
                id,
                name,
                category,
                description,
                brand,
                price,
                stock,
                image,
                featured,
            } => {
                let draft = commands::product::build_draft(
                    &name,
                    &category,
                    &description,
                    &brand,
                    &price,
                    stock,
                    &image,
                    featured,
                )?;
                commands::product::update(&id, draft).await?;
            }
            ProductAction::Remove { id } => commands::product::remove(&id).await?,
        },
        Commands::Order { action } => match action {
            OrderAction::List { search, sort, desc } => {
                commands::order::list(search.as_deref(), sort.as_deref(), desc).await?;
            }
            OrderAction::Show { id } => commands::order::show(&id).await?,
            OrderAction::SetStatus {
                id,
                status,
                enforce,
            } => {
                commands::order::set_status(&id, &status, enforce).await?;
            }
            OrderAction::Statuses => commands::order::statuses(),
        },
    }
    Ok(())
}
