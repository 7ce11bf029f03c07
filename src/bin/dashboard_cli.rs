use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use rust_decimal::Decimal;
use serde::Serialize;

use materials_dashboard::{
    config::{self, AppConfig},
    events::ActivityLog,
    filters::ListParams,
    models::{Currency, CARD_MATERIAL_PREVIEW},
    repositories::RecordStore,
    seed,
    services::{
        analytics::InventoryMetrics,
        inventory::InventoryView,
        materials::{parse_price, parse_quantity, MaterialView},
        ClientDirectoryService, DashboardOverview, InventoryService, MaterialCatalogService,
        MutationOutcome,
    },
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut context = CliContext::initialize()?;

    match cli.command {
        Commands::Materials(command) => handle_materials_command(&mut context, command, cli.json)?,
        Commands::Inventory(command) => handle_inventory_command(&context, command, cli.json)?,
        Commands::Clients(command) => handle_clients_command(&context, command, cli.json)?,
        Commands::Overview => handle_overview(&context, cli.json)?,
    }

    Ok(())
}

#[derive(Parser)]
#[command(
    name = "dashboard-cli",
    about = "Browse and edit the materials dashboard collections",
    version
)]
struct Cli {
    #[arg(
        long,
        global = true,
        action = ArgAction::SetTrue,
        help = "Render command output as pretty JSON"
    )]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(subcommand)]
    Materials(MaterialsCommands),
    #[command(subcommand)]
    Inventory(InventoryCommands),
    #[command(subcommand)]
    Clients(ClientsCommands),
    /// Stat cards, alert and recent activity
    Overview,
}

#[derive(Subcommand)]
enum MaterialsCommands {
    List(MaterialListArgs),
    SetPrice(SetPriceArgs),
    SetQuantity(SetQuantityArgs),
}

#[derive(Subcommand)]
enum InventoryCommands {
    List(InventoryListArgs),
    Summary,
}

#[derive(Subcommand)]
enum ClientsCommands {
    List(ClientListArgs),
    Show(ShowClientArgs),
}

#[derive(Args)]
struct MaterialListArgs {
    #[arg(long, help = "Case-insensitive text matched against name and category")]
    search: Option<String>,
    #[arg(long, help = "Category name, or All")]
    category: Option<String>,
}

#[derive(Args)]
struct SetPriceArgs {
    #[arg(help = "Material id")]
    id: String,
    #[arg(help = "New unit price", allow_hyphen_values = true)]
    price: String,
}

#[derive(Args)]
struct SetQuantityArgs {
    #[arg(help = "Material id")]
    id: String,
    #[arg(help = "New on-hand quantity", allow_hyphen_values = true)]
    quantity: String,
}

#[derive(Args)]
struct InventoryListArgs {
    #[arg(long, help = "Case-insensitive text matched against name and category")]
    search: Option<String>,
    #[arg(long, help = "Category name, or All")]
    category: Option<String>,
    #[arg(long, help = "Stock status, or All")]
    status: Option<String>,
}

#[derive(Args)]
struct ClientListArgs {
    #[arg(long, help = "Case-insensitive text matched against name, company and email")]
    search: Option<String>,
    #[arg(long, help = "Active, Inactive or All")]
    status: Option<String>,
}

#[derive(Args)]
struct ShowClientArgs {
    #[arg(help = "Client id")]
    id: String,
}

struct CliContext {
    config: AppConfig,
    materials: MaterialCatalogService,
    inventory: InventoryService,
    clients: ClientDirectoryService,
    activity: ActivityLog,
}

impl CliContext {
    fn initialize() -> Result<Self> {
        let config = config::load_config().context("failed to load application config")?;
        config::init_tracing(config.log_level(), config.log_json);

        let materials = MaterialCatalogService::new(
            RecordStore::new(seed::sample_materials()).context("invalid material seed")?,
            config.low_stock_threshold,
        );
        let inventory = InventoryService::new(
            RecordStore::new(seed::sample_inventory()).context("invalid inventory seed")?,
            config.low_stock_alerts,
        );
        let clients = ClientDirectoryService::new(
            RecordStore::new(seed::sample_clients()).context("invalid client seed")?,
        );
        let activity = ActivityLog::new(config.activity_log_capacity);

        Ok(Self {
            config,
            materials,
            inventory,
            clients,
            activity,
        })
    }

    fn currency(&self) -> Currency {
        self.config.currency
    }
}

#[derive(Serialize)]
struct MaterialEdit<'a> {
    material: &'a MaterialView,
    summary: &'a InventoryMetrics,
}

fn handle_materials_command(
    context: &mut CliContext,
    command: MaterialsCommands,
    json: bool,
) -> Result<()> {
    match command {
        MaterialsCommands::List(args) => {
            let params = ListParams {
                search: args.search,
                category: args.category,
                status: None,
            };
            let materials = context.materials.list(&params.material_filter()?);
            if json {
                return print_json(&materials);
            }
            if materials.is_empty() {
                println!("No materials found");
            }
            for material in &materials {
                render_material(material, context.currency());
            }
            Ok(())
        }
        MaterialsCommands::SetPrice(args) => {
            let price = parse_price(&args.price)?;
            let outcome = context.materials.update_price(&args.id, price)?;
            finish_edit(context, outcome, &args.id, json)
        }
        MaterialsCommands::SetQuantity(args) => {
            let quantity = parse_quantity(&args.quantity)?;
            let outcome = context.materials.update_quantity(&args.id, quantity)?;
            finish_edit(context, outcome, &args.id, json)
        }
    }
}

fn finish_edit(
    context: &mut CliContext,
    outcome: MutationOutcome,
    id: &str,
    json: bool,
) -> Result<()> {
    let view = match outcome {
        MutationOutcome::Updated { view, event } => {
            context.activity.record(&event);
            view
        }
        MutationOutcome::Unmatched => {
            println!("No material with id {}; nothing changed", id);
            return Ok(());
        }
    };
    let summary = context.materials.summary();

    if json {
        return print_json(&MaterialEdit {
            material: &view,
            summary: &summary,
        });
    }
    render_material(&view, context.currency());
    for entry in context.activity.recent(1) {
        println!("  {}: {} ({})", entry.action, entry.item, entry.detail);
    }
    render_summary("Catalog", &summary, context.currency());
    Ok(())
}

fn handle_inventory_command(
    context: &CliContext,
    command: InventoryCommands,
    json: bool,
) -> Result<()> {
    match command {
        InventoryCommands::List(args) => {
            let params = ListParams {
                search: args.search,
                category: args.category,
                status: args.status,
            };
            let items = context.inventory.list(&params.inventory_filter()?);
            if json {
                return print_json(&items);
            }
            if items.is_empty() {
                println!("No inventory items found");
            }
            for item in &items {
                render_inventory_item(item, context.currency());
            }
            Ok(())
        }
        InventoryCommands::Summary => {
            let summary = context.inventory.summary();
            if json {
                return print_json(&summary);
            }
            render_summary("Inventory", &summary, context.currency());
            if let Some(alert) = context.inventory.alert() {
                println!("! {}", alert.message);
            }
            Ok(())
        }
    }
}

fn handle_clients_command(
    context: &CliContext,
    command: ClientsCommands,
    json: bool,
) -> Result<()> {
    let currency = context.currency();
    match command {
        ClientsCommands::List(args) => {
            let params = ListParams {
                search: args.search,
                category: None,
                status: args.status,
            };
            let clients = context.clients.list(&params.client_filter()?);
            if json {
                return print_json(&clients);
            }
            if clients.is_empty() {
                println!("No clients found");
            }
            for client in &clients {
                println!(
                    "- Client {} • {} ({}) • {} • {} orders • {}",
                    client.id,
                    client.name,
                    client.company,
                    client.status,
                    client.total_orders,
                    money(client.total_value, currency)
                );
            }
            Ok(())
        }
        ClientsCommands::Show(args) => {
            let Some(client) = context.clients.get(&args.id) else {
                println!("No client with id {}", args.id);
                return Ok(());
            };
            if json {
                return print_json(&client);
            }
            println!("Client {} • {} • {}", client.id, client.name, client.status);
            println!("  Company: {}", client.company);
            println!("  Email:   {}", client.email);
            println!("  Phone:   {}", client.phone);
            println!("  Address: {}", client.address);
            println!(
                "  Orders:  {} totalling {}",
                client.total_orders,
                money(client.total_value, currency)
            );
            if let Some(average) = client.average_order_value() {
                println!("  Average: {}", money(average, currency));
            }
            let preview = client.material_preview(CARD_MATERIAL_PREVIEW);
            let mut materials = preview.shown.join(", ");
            if preview.remaining > 0 {
                materials.push_str(&format!(" +{} more", preview.remaining));
            }
            println!("  Materials: {}", materials);
            Ok(())
        }
    }
}

fn handle_overview(context: &CliContext, json: bool) -> Result<()> {
    let overview = DashboardOverview::compute(
        &context.materials,
        &context.inventory,
        &context.clients,
        &context.activity,
        context.config.recent_activity_limit,
    );
    if json {
        return print_json(&overview);
    }

    let stats = &overview.stats;
    println!("Total materials:  {}", stats.total_materials);
    println!("Active clients:   {}", stats.active_clients);
    println!(
        "Client value:     {}",
        money(stats.client_value, context.currency())
    );
    println!("Low stock items:  {}", stats.low_stock_items);
    if let Some(alert) = &overview.alert {
        println!("! {}", alert.message);
    }
    if overview.recent_activity.is_empty() {
        println!("No recent activity");
    }
    for entry in &overview.recent_activity {
        println!(
            "  {} • {}: {} ({})",
            entry.occurred_at.format("%Y-%m-%d %H:%M:%S"),
            entry.action,
            entry.item,
            entry.detail
        );
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn money(amount: Decimal, currency: Currency) -> String {
    format!("{}{:.2}", currency.symbol(), amount)
}

fn render_material(view: &MaterialView, currency: Currency) {
    let material = &view.material;
    println!(
        "- Material {} • {} • {} • {} per {} • {} {} • {} • {}",
        material.id,
        material.name,
        material.category,
        money(material.price, currency),
        material.unit,
        material.quantity,
        material.unit,
        view.status,
        material.supplier
    );
}

fn render_inventory_item(view: &InventoryView, currency: Currency) {
    let item = &view.item;
    let fill = view
        .fill_percentage
        .map(|pct| format!("{}%", pct))
        .unwrap_or_else(|| "n/a".to_string());
    println!(
        "- Item {} • {} • {} • {}/{} {} (min {}, fill {}) • {} • {} • value {}",
        item.id,
        item.name,
        item.location,
        item.current_stock,
        item.max_stock,
        item.unit,
        item.min_stock,
        fill,
        view.status,
        item.trend,
        money(view.stock_value, currency)
    );
}

fn render_summary(label: &str, summary: &InventoryMetrics, currency: Currency) {
    println!(
        "{}: {} items • {} low stock • {} out of stock • value {}",
        label,
        summary.total_items,
        summary.low_stock_items,
        summary.out_of_stock_items,
        money(summary.total_value, currency)
    );
}
