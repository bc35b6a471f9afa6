#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;

use std::io;
use std::path;
use std::sync::Arc;

use anyhow::bail;
use anyhow::Result;
use chrono::Utc;
use clap::builder::PossibleValuesParser;
use clap::value_parser;
use clap::Arg;
use clap::ArgAction;
use clap::ArgMatches;
use clap::Command;
use clap_complete::generate;
use clap_complete::Generator;
use clap_complete::Shell;
use serde_json::Value;
use strum::VariantNames;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use yansi::Paint;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::is_valid_email;
use crate::domain::models::AuthVisibility;
use crate::domain::models::CartLine;
use crate::domain::models::MessageHandler;
use crate::domain::models::OrderPage;
use crate::domain::models::OrderStatus;
use crate::domain::models::OutgoingMessage;
use crate::domain::models::ProductQuery;
use crate::domain::models::StaticMapOptions;
use crate::domain::models::Theme;
use crate::domain::models::ThemeChange;
use crate::domain::services::format_date;
use crate::domain::services::format_price;
use crate::domain::services::format_relative_time;
use crate::domain::services::parse_timestamp;
use crate::domain::services::ChatPoller;
use crate::domain::services::ThemeManager;
use crate::infrastructure::api::check_auth_status;
use crate::infrastructure::api::ApiClient;
use crate::infrastructure::api::DEFAULT_NEARBY_RADIUS;
use crate::infrastructure::api::DEFAULT_TRENDING_LIMIT;
use crate::infrastructure::storage::FileStore;

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
    std::process::exit(0);
}

fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    return Ok(());
}

fn required<T: Clone + Send + Sync + 'static>(matches: &ArgMatches, name: &str) -> Result<T> {
    if let Some(val) = matches.get_one::<T>(name) {
        return Ok(val.clone());
    }

    bail!(format!("Missing required argument '{name}'"));
}

fn text_field<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    return value
        .get(key)
        .and_then(|e| return e.as_str())
        .filter(|e| return !e.is_empty());
}

fn format_product_line(product: &Value) -> String {
    let mut res = format!(
        "- (ID: {}) {}",
        product["id"],
        text_field(product, "title").unwrap_or("Sans titre")
    );

    if let Some(price) = product.get("price").and_then(|e| return e.as_f64()) {
        res = format!("{res}, {}", format_price(price));
    }

    for key in ["condition", "location"] {
        if let Some(val) = text_field(product, key) {
            res = format!("{res}, {val}");
        }
    }

    return res;
}

fn format_product_list(res: &Value) -> String {
    let products = res["products"]
        .as_array()
        .map(|products| {
            return products
                .iter()
                .map(format_product_line)
                .collect::<Vec<String>>();
        })
        .unwrap_or_default();

    if products.is_empty() {
        return "Aucun produit trouvé.".to_string();
    }

    let pagination = &res["pagination"];
    return format!(
        "{}\n\nPage {}/{}, {} produit(s)",
        products.join("\n"),
        pagination["page"],
        pagination["pages"],
        pagination["total"]
    );
}

fn format_message_line(message: &Value) -> String {
    let sender = &message["sender"];
    let author = text_field(sender, "first_name")
        .or_else(|| return text_field(sender, "username"))
        .map(|e| return e.to_string())
        .unwrap_or_else(|| return format!("#{}", message["sender_id"]));

    let content = text_field(message, "content").unwrap_or_default();
    let Some(created_at) = text_field(message, "created_at") else {
        return format!("{author}: {content}");
    };

    let sent = match parse_timestamp(created_at) {
        Ok(date) => format!(
            "{} ({})",
            format_date(&date),
            format_relative_time(&date, Utc::now())
        ),
        Err(_) => created_at.to_string(),
    };

    return format!("[{sent}] {author}: {content}");
}

fn format_theme_change(change: &ThemeChange) -> String {
    let (attribute, value) = change.root_attribute();
    return format!(
        "{attribute}=\"{value}\"\n{} {}",
        change.button.icon, change.button.label
    );
}

async fn create_config_file() -> Result<()> {
    let config_file_path_str = Config::default(ConfigKey::ConfigFile);
    let config_file_path = path::PathBuf::from(&config_file_path_str);
    if config_file_path.exists() {
        bail!(format!(
            "Config file already exists at {config_file_path_str}"
        ));
    }

    if let Some(parent) = config_file_path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent).await?;
        }
    }

    let mut file = fs::File::create(&config_file_path).await?;
    file.write_all(Config::serialize_default(build()).as_bytes())
        .await?;

    println!("Created default config file at {config_file_path_str}");
    return Ok(());
}

/// Builds the API client, signing in first when credentials were passed so
/// the session cookie covers the command.
async fn connect(matches: &ArgMatches) -> Result<ApiClient> {
    let client = ApiClient::from_config()?;

    let email = matches.get_one::<String>("email");
    let password = matches.get_one::<String>("password");
    if let (Some(email), Some(password)) = (email, password) {
        if !is_valid_email(email) {
            bail!(format!("Invalid email address: {email}"));
        }
        client.login(email, password).await?;
    }

    return Ok(client);
}

async fn watch_messages(client: ApiClient) -> Result<()> {
    let policy = Config::poll_policy()?;
    let mut poller = ChatPoller::new(Arc::new(client), policy);

    let handler: MessageHandler = Arc::new(|messages: Vec<Value>| {
        for message in messages {
            println!("{}", format_message_line(&message));
        }
    });

    println!(
        "Checking for new messages every {}s. Press Ctrl-C to stop.",
        policy.interval.as_secs()
    );
    poller.start(Some(handler));
    tokio::signal::ctrl_c().await?;
    poller.stop();

    return Ok(());
}

fn system_preference(matches: &ArgMatches) -> Option<bool> {
    return matches
        .get_one::<String>("system")
        .map(|e| return e == Theme::Dark.as_ref());
}

fn run_theme(matches: &ArgMatches) -> Result<()> {
    let (mut manager, initial) = ThemeManager::init(FileStore::default(), system_preference(matches))?;

    let change = match matches.subcommand() {
        Some(("toggle", _)) => manager.toggle()?,
        Some(("set", set_matches)) => {
            let theme = required::<String>(set_matches, "theme")?.parse::<Theme>()?;
            manager.set(theme)?
        }
        Some(("reset", _)) => manager.reset(system_preference(matches))?,
        Some(("system", system_matches)) => {
            let prefers_dark = required::<String>(system_matches, "appearance")? == Theme::Dark.as_ref();
            match manager.on_system_change(prefers_dark)? {
                Some(change) => change,
                None => {
                    println!("Theme unchanged: {}", manager.current());
                    return Ok(());
                }
            }
        }
        _ => initial,
    };

    println!("{}", format_theme_change(&change));
    return Ok(());
}

fn arg_id(help: &str) -> Arg {
    return Arg::new("id")
        .short('i')
        .long("id")
        .help(help.to_string())
        .value_parser(value_parser!(u64))
        .required(true);
}

fn arg_coordinates() -> [Arg; 2] {
    return [
        Arg::new("lat")
            .long("lat")
            .help("Latitude")
            .value_parser(value_parser!(f64))
            .allow_negative_numbers(true)
            .required(true),
        Arg::new("lon")
            .long("lon")
            .help("Longitude")
            .value_parser(value_parser!(f64))
            .allow_negative_numbers(true)
            .required(true),
    ];
}

fn arg_json() -> Arg {
    return Arg::new("json")
        .long("json")
        .help("Print the raw JSON response.")
        .action(ArgAction::SetTrue);
}

fn arg_page() -> Arg {
    return Arg::new("page")
        .short('p')
        .long("page")
        .help("Page number")
        .value_parser(value_parser!(u32))
        .default_value("1");
}

fn subcommand_completions() -> Command {
    return Command::new("completions")
        .about("Generates shell completions.")
        .arg(
            clap::Arg::new("shell")
                .short('s')
                .long("shell")
                .help("Which shell to generate completions for.")
                .action(ArgAction::Set)
                .value_parser(value_parser!(Shell))
                .required(true),
        );
}

fn subcommand_config() -> Command {
    return Command::new("config")
        .about("Configuration file options.")
        .subcommand(
            Command::new("create").about("Saves the default config file to the configuration file path. This command will fail if the file exists already.")
        )
        .subcommand(
            Command::new("default").about("Outputs the default configuration file to stdout.")
        )
        .subcommand(
            Command::new("path").about("Returns the default path for the configuration file.")
        );
}

fn subcommand_auth() -> Command {
    return Command::new("auth")
        .about("Sign in and inspect the current session.")
        .arg_required_else_help(true)
        .subcommand(Command::new("login").about("Sign in with --email and --password and print the user."))
        .subcommand(Command::new("logout").about("Close the current session."))
        .subcommand(Command::new("me").about("Print the signed in user."))
        .subcommand(Command::new("session").about("Print whether the session is authenticated."));
}

fn subcommand_products() -> Command {
    return Command::new("products")
        .about("Browse the catalogue.")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("list")
                .about("List products matching the given filters.")
                .arg(arg_page())
                .arg(Arg::new("per-page").long("per-page").help("Products per page").value_parser(value_parser!(u32)))
                .arg(Arg::new("category").long("category").help("Category filter"))
                .arg(Arg::new("search").short('s').long("search").help("Full text search"))
                .arg(Arg::new("min-price").long("min-price").help("Minimum price").value_parser(value_parser!(f64)))
                .arg(Arg::new("max-price").long("max-price").help("Maximum price").value_parser(value_parser!(f64)))
                .arg(Arg::new("condition").long("condition").help("Item condition"))
                .arg(Arg::new("brand").long("brand").help("Brand filter"))
                .arg(Arg::new("location").long("location").help("Location filter"))
                .arg(Arg::new("sort-by").long("sort-by").help("Sort field"))
                .arg(
                    Arg::new("sort-order")
                        .long("sort-order")
                        .help("Sort direction")
                        .value_parser(PossibleValuesParser::new(["asc", "desc"])),
                )
                .arg(arg_json()),
        )
        .subcommand(Command::new("show").about("Show a single product.").arg(arg_id("Product ID")))
        .subcommand(Command::new("categories").about("List categories."))
        .subcommand(
            Command::new("brands")
                .about("List brands, optionally within a category.")
                .arg(Arg::new("category").long("category").help("Category filter")),
        )
        .subcommand(
            Command::new("trending").about("List trending products.").arg(
                Arg::new("limit")
                    .short('l')
                    .long("limit")
                    .help("Number of products")
                    .value_parser(value_parser!(u32))
                    .default_value(DEFAULT_TRENDING_LIMIT.to_string()),
            ),
        )
        .subcommand(Command::new("favorites").about("List favorite products."))
        .subcommand(
            Command::new("favorite")
                .about("Add a product to favorites, or remove it if already there.")
                .arg(arg_id("Product ID")),
        )
        .subcommand(
            Command::new("compare").about("Compare several products.").arg(
                Arg::new("ids")
                    .long("ids")
                    .help("Comma separated product IDs")
                    .value_parser(value_parser!(u64))
                    .value_delimiter(',')
                    .num_args(1..)
                    .required(true),
            ),
        );
}

fn subcommand_messages() -> Command {
    return Command::new("messages")
        .about("Read and send chat messages.")
        .arg_required_else_help(true)
        .subcommand(Command::new("conversations").about("List conversations."))
        .subcommand(Command::new("unread").about("Print the unread message count."))
        .subcommand(
            Command::new("send")
                .about("Send a message.")
                .arg(Arg::new("to").long("to").help("Receiver user ID").value_parser(value_parser!(u64)).required(true))
                .arg(Arg::new("content").long("content").help("Message text").required(true))
                .arg(Arg::new("product").long("product").help("Product the message is about").value_parser(value_parser!(u64))),
        )
        .subcommand(Command::new("watch").about("Print incoming messages as they arrive until interrupted."));
}

fn subcommand_cart() -> Command {
    return Command::new("cart")
        .about("Manage the shopping cart.")
        .arg_required_else_help(true)
        .subcommand(Command::new("show").about("Print the cart."))
        .subcommand(
            Command::new("add")
                .about("Add a product to the cart.")
                .arg(arg_id("Product ID"))
                .arg(
                    Arg::new("quantity")
                        .short('q')
                        .long("quantity")
                        .help("Quantity")
                        .value_parser(value_parser!(u32))
                        .default_value("1"),
                ),
        )
        .subcommand(Command::new("remove").about("Remove a product from the cart.").arg(arg_id("Product ID")))
        .subcommand(Command::new("clear").about("Empty the cart."));
}

fn subcommand_orders() -> Command {
    let arg_status = Arg::new("status")
        .long("status")
        .help("Only orders in this status")
        .value_parser(PossibleValuesParser::new(OrderStatus::VARIANTS));

    return Command::new("orders")
        .about("Purchases and sales.")
        .arg_required_else_help(true)
        .subcommand(Command::new("list").about("List your orders.").arg(arg_page()).arg(arg_status.clone()))
        .subcommand(Command::new("sales").about("List orders for your products.").arg(arg_page()).arg(arg_status))
        .subcommand(Command::new("show").about("Show a single order.").arg(arg_id("Order ID")));
}

fn subcommand_location() -> Command {
    let map_args = [
        Arg::new("zoom").long("zoom").help("Zoom level").value_parser(value_parser!(u8)).default_value("15"),
        Arg::new("width").long("width").help("Width in pixels").value_parser(value_parser!(u32)).default_value("400"),
        Arg::new("height").long("height").help("Height in pixels").value_parser(value_parser!(u32)).default_value("300"),
        Arg::new("no-marker").long("no-marker").help("Hide the center marker.").action(ArgAction::SetTrue),
    ];

    return Command::new("location")
        .about("Geocoding and maps.")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("geocode")
                .about("Resolve an address to coordinates.")
                .arg(Arg::new("address").short('a').long("address").help("Address").required(true)),
        )
        .subcommand(
            Command::new("map-url")
                .about("Print the static map URL for coordinates.")
                .args(arg_coordinates())
                .args(map_args.clone()),
        )
        .subcommand(
            Command::new("map")
                .about("Download the static map for coordinates as a PNG.")
                .args(arg_coordinates())
                .args(map_args)
                .arg(Arg::new("output").short('o').long("output").help("PNG output path").default_value("map.png")),
        )
        .subcommand(
            Command::new("nearby")
                .about("List products around coordinates.")
                .args(arg_coordinates())
                .arg(
                    Arg::new("radius")
                        .short('r')
                        .long("radius")
                        .help("Radius in kilometers")
                        .value_parser(value_parser!(f64))
                        .default_value(DEFAULT_NEARBY_RADIUS.to_string()),
                ),
        );
}

fn subcommand_payments() -> Command {
    return Command::new("payments")
        .about("Payment methods and history.")
        .arg_required_else_help(true)
        .subcommand(Command::new("methods").about("List payment methods."))
        .subcommand(Command::new("history").about("List past payments.").arg(arg_page()))
        .subcommand(Command::new("pending").about("List pending payments."));
}

fn subcommand_premium() -> Command {
    return Command::new("premium")
        .about("Premium subscription.")
        .arg_required_else_help(true)
        .subcommand(Command::new("plans").about("List premium plans."))
        .subcommand(Command::new("current").about("Print the current plan."))
        .subcommand(Command::new("usage").about("Print premium usage statistics."));
}

fn subcommand_theme() -> Command {
    let appearance = PossibleValuesParser::new(Theme::VARIANTS);

    return Command::new("theme")
        .about("Light and dark display preference.")
        .arg(
            Arg::new("system")
                .long("system")
                .help("Current system appearance, used while no theme is pinned.")
                .value_parser(appearance.clone())
                .global(true),
        )
        .subcommand(Command::new("show").about("Print the active theme."))
        .subcommand(Command::new("toggle").about("Switch to the other theme and pin it."))
        .subcommand(
            Command::new("set")
                .about("Pin a theme.")
                .arg(Arg::new("theme").value_parser(appearance.clone()).required(true)),
        )
        .subcommand(Command::new("reset").about("Forget the pinned theme and follow the system."))
        .subcommand(
            Command::new("system")
                .about("Apply a system appearance change. Ignored while a theme is pinned.")
                .arg(Arg::new("appearance").value_parser(appearance).required(true)),
        );
}

pub fn build() -> Command {
    let about = format!(
        "{}\n\nVersion: {}",
        env!("CARGO_PKG_DESCRIPTION"),
        env!("CARGO_PKG_VERSION"),
    );

    return Command::new("kitala")
        .about(about)
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .arg_required_else_help(true)
        .subcommand(subcommand_auth())
        .subcommand(subcommand_products())
        .subcommand(subcommand_messages())
        .subcommand(subcommand_cart())
        .subcommand(subcommand_orders())
        .subcommand(subcommand_location())
        .subcommand(subcommand_payments())
        .subcommand(subcommand_premium())
        .subcommand(subcommand_theme())
        .subcommand(subcommand_completions())
        .subcommand(subcommand_config())
        .arg(
            Arg::new(ConfigKey::ConfigFile.to_string())
                .short('c')
                .long(ConfigKey::ConfigFile.to_string())
                .env("KITALA_CONFIG_FILE")
                .num_args(1)
                .help(format!("Path to configuration file [default: {}]", Config::default(ConfigKey::ConfigFile)))
                .global(true)
        )
        .arg(
            Arg::new(ConfigKey::ApiURL.to_string())
                .short('u')
                .long(ConfigKey::ApiURL.to_string())
                .env("KITALA_API_URL")
                .num_args(1)
                .help(format!("Origin of the marketplace API. [default: {}]", Config::default(ConfigKey::ApiURL)))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::RequestTimeout.to_string())
                .long(ConfigKey::RequestTimeout.to_string())
                .env("KITALA_REQUEST_TIMEOUT")
                .num_args(1)
                .help(format!("Time to wait in milliseconds for an API response, 0 waits forever. [default: {}]", Config::default(ConfigKey::RequestTimeout)))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::PreferencesFile.to_string())
                .long(ConfigKey::PreferencesFile.to_string())
                .env("KITALA_PREFERENCES_FILE")
                .num_args(1)
                .help(format!("File storing display preferences such as the theme. [default: {}]", Config::default(ConfigKey::PreferencesFile)))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::PollInterval.to_string())
                .long(ConfigKey::PollInterval.to_string())
                .env("KITALA_POLL_INTERVAL")
                .num_args(1)
                .help(format!("Seconds between two checks for new messages. [default: {}]", Config::default(ConfigKey::PollInterval)))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::PollBackoff.to_string())
                .long(ConfigKey::PollBackoff.to_string())
                .env("KITALA_POLL_BACKOFF")
                .num_args(1)
                .help(format!("Multiplier applied to the message check interval after each failure, 1 disables backoff. [default: {}]", Config::default(ConfigKey::PollBackoff)))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::PollMaxInterval.to_string())
                .long(ConfigKey::PollMaxInterval.to_string())
                .env("KITALA_POLL_MAX_INTERVAL")
                .num_args(1)
                .help(format!("Upper bound in seconds for the backed off message check interval. [default: {}]", Config::default(ConfigKey::PollMaxInterval)))
                .global(true),
        )
        .arg(
            Arg::new("email")
                .long("email")
                .env("KITALA_EMAIL")
                .num_args(1)
                .help("Account email. With --password, signs in before running the command.")
                .global(true),
        )
        .arg(
            Arg::new("password")
                .long("password")
                .env("KITALA_PASSWORD")
                .hide_env_values(true)
                .num_args(1)
                .help("Account password.")
                .global(true),
        );
}

async fn run_auth(matches: &ArgMatches, client: &ApiClient) -> Result<()> {
    match matches.subcommand() {
        Some(("login", _)) => {
            if matches.get_one::<String>("email").is_none()
                || matches.get_one::<String>("password").is_none()
            {
                bail!("Missing --email and --password");
            }
            print_json(&client.current_user().await?)?;
        }
        Some(("logout", _)) => print_json(&client.logout().await?)?,
        Some(("me", _)) => print_json(&client.current_user().await?)?,
        Some(("session", _)) => {
            let authenticated = check_auth_status(client).await;
            let visibility = AuthVisibility::for_status(authenticated);
            println!(
                "authenticated: {authenticated}\nauth-required: {}\nguest-only: {}",
                visibility.auth_required, visibility.guest_only
            );
        }
        _ => subcommand_auth().print_long_help()?,
    }

    return Ok(());
}

async fn run_products(matches: &ArgMatches, client: &ApiClient) -> Result<()> {
    match matches.subcommand() {
        Some(("list", list_matches)) => {
            let query = ProductQuery {
                page: list_matches.get_one::<u32>("page").copied(),
                per_page: list_matches.get_one::<u32>("per-page").copied(),
                category: list_matches.get_one::<String>("category").cloned(),
                search: list_matches.get_one::<String>("search").cloned(),
                min_price: list_matches.get_one::<f64>("min-price").copied(),
                max_price: list_matches.get_one::<f64>("max-price").copied(),
                condition: list_matches.get_one::<String>("condition").cloned(),
                brand: list_matches.get_one::<String>("brand").cloned(),
                location: list_matches.get_one::<String>("location").cloned(),
                sort_by: list_matches.get_one::<String>("sort-by").cloned(),
                sort_order: list_matches.get_one::<String>("sort-order").cloned(),
            };

            let res = client.products(&query).await?;
            if list_matches.get_flag("json") {
                print_json(&res)?;
            } else {
                println!("{}", format_product_list(&res));
            }
        }
        Some(("show", show_matches)) => {
            print_json(&client.product(required(show_matches, "id")?).await?)?;
        }
        Some(("categories", _)) => print_json(&client.categories().await?)?,
        Some(("brands", brand_matches)) => {
            let category = brand_matches.get_one::<String>("category");
            print_json(&client.brands(category.map(|e| return e.as_str())).await?)?;
        }
        Some(("trending", trending_matches)) => {
            print_json(&client.trending_products(required(trending_matches, "limit")?).await?)?;
        }
        Some(("favorites", _)) => print_json(&client.user_favorites().await?)?,
        Some(("favorite", favorite_matches)) => {
            print_json(&client.toggle_favorite(required(favorite_matches, "id")?).await?)?;
        }
        Some(("compare", compare_matches)) => {
            let ids = compare_matches
                .get_many::<u64>("ids")
                .map(|ids| return ids.copied().collect::<Vec<u64>>())
                .unwrap_or_default();
            print_json(&client.compare_products(&ids).await?)?;
        }
        _ => subcommand_products().print_long_help()?,
    }

    return Ok(());
}

async fn run_messages(matches: &ArgMatches, client: ApiClient) -> Result<()> {
    match matches.subcommand() {
        Some(("conversations", _)) => print_json(&client.conversations().await?)?,
        Some(("unread", _)) => print_json(&client.unread_count().await?)?,
        Some(("send", send_matches)) => {
            let message = OutgoingMessage {
                receiver_id: required(send_matches, "to")?,
                content: required(send_matches, "content")?,
                product_id: send_matches.get_one::<u64>("product").copied(),
            };
            print_json(&client.send_message(&message).await?)?;
        }
        Some(("watch", _)) => watch_messages(client).await?,
        _ => subcommand_messages().print_long_help()?,
    }

    return Ok(());
}

async fn run_cart(matches: &ArgMatches, client: &ApiClient) -> Result<()> {
    match matches.subcommand() {
        Some(("show", _)) => print_json(&client.cart().await?)?,
        Some(("add", add_matches)) => {
            let line = CartLine {
                product_id: required(add_matches, "id")?,
                quantity: required(add_matches, "quantity")?,
            };
            print_json(&client.add_to_cart(line).await?)?;
        }
        Some(("remove", remove_matches)) => {
            print_json(&client.remove_from_cart(required(remove_matches, "id")?).await?)?;
        }
        Some(("clear", _)) => print_json(&client.clear_cart().await?)?,
        _ => subcommand_cart().print_long_help()?,
    }

    return Ok(());
}

fn order_page(matches: &ArgMatches) -> Result<OrderPage> {
    let mut status = None;
    if let Some(val) = matches.get_one::<String>("status") {
        status = Some(val.parse::<OrderStatus>()?);
    }

    return Ok(OrderPage {
        status,
        page: required(matches, "page")?,
    });
}

async fn run_orders(matches: &ArgMatches, client: &ApiClient) -> Result<()> {
    match matches.subcommand() {
        Some(("list", list_matches)) => {
            print_json(&client.my_orders(&order_page(list_matches)?).await?)?;
        }
        Some(("sales", sales_matches)) => {
            print_json(&client.my_sales(&order_page(sales_matches)?).await?)?;
        }
        Some(("show", show_matches)) => {
            print_json(&client.order(required(show_matches, "id")?).await?)?;
        }
        _ => subcommand_orders().print_long_help()?,
    }

    return Ok(());
}

fn map_options(matches: &ArgMatches) -> Result<StaticMapOptions> {
    return Ok(StaticMapOptions {
        zoom: required(matches, "zoom")?,
        width: required(matches, "width")?,
        height: required(matches, "height")?,
        marker: !matches.get_flag("no-marker"),
    });
}

async fn run_location(matches: &ArgMatches, client: &ApiClient) -> Result<()> {
    match matches.subcommand() {
        Some(("geocode", geocode_matches)) => {
            let address = required::<String>(geocode_matches, "address")?;
            print_json(&client.geocode(&address).await?)?;
        }
        Some(("map-url", map_matches)) => {
            let url = client.static_map_url(
                required(map_matches, "lat")?,
                required(map_matches, "lon")?,
                &map_options(map_matches)?,
            )?;
            println!("{url}");
        }
        Some(("map", map_matches)) => {
            let image = client
                .static_map_base64(
                    required(map_matches, "lat")?,
                    required(map_matches, "lon")?,
                    &map_options(map_matches)?,
                )
                .await?;

            let output = required::<String>(map_matches, "output")?;
            fs::write(&output, image.png_bytes()?).await?;
            println!("Saved {}x{} map to {output}", image.width, image.height);
        }
        Some(("nearby", nearby_matches)) => {
            let res = client
                .nearby_products(
                    required(nearby_matches, "lat")?,
                    required(nearby_matches, "lon")?,
                    required(nearby_matches, "radius")?,
                )
                .await?;
            print_json(&res)?;
        }
        _ => subcommand_location().print_long_help()?,
    }

    return Ok(());
}

async fn run_payments(matches: &ArgMatches, client: &ApiClient) -> Result<()> {
    match matches.subcommand() {
        Some(("methods", _)) => print_json(&client.payment_methods().await?)?,
        Some(("history", history_matches)) => {
            print_json(&client.payment_history(required(history_matches, "page")?).await?)?;
        }
        Some(("pending", _)) => print_json(&client.pending_payments().await?)?,
        _ => subcommand_payments().print_long_help()?,
    }

    return Ok(());
}

async fn run_premium(matches: &ArgMatches, client: &ApiClient) -> Result<()> {
    match matches.subcommand() {
        Some(("plans", _)) => print_json(&client.premium_plans().await?)?,
        Some(("current", _)) => print_json(&client.current_plan().await?)?,
        Some(("usage", _)) => print_json(&client.premium_usage_stats().await?)?,
        _ => subcommand_premium().print_long_help()?,
    }

    return Ok(());
}

pub async fn parse() -> Result<()> {
    let matches = build().get_matches();

    match matches.subcommand() {
        Some(("completions", subcmd_matches)) => {
            if let Some(completions) = subcmd_matches.get_one::<Shell>("shell").copied() {
                let mut app = build();
                print_completions(completions, &mut app);
            }
        }
        Some(("config", subcmd_matches)) => match subcmd_matches.subcommand() {
            Some(("create", _)) => create_config_file().await?,
            Some(("default", _)) => println!("{}", Config::serialize_default(build())),
            Some(("path", _)) => println!("{}", Config::default(ConfigKey::ConfigFile)),
            _ => subcommand_config().print_long_help()?,
        },
        Some(("theme", subcmd_matches)) => {
            Config::load(vec![&matches, subcmd_matches]).await?;
            run_theme(subcmd_matches)?;
        }
        Some((name, subcmd_matches)) => {
            Config::load(vec![&matches, subcmd_matches]).await?;
            let client = connect(subcmd_matches).await?;

            match name {
                "auth" => run_auth(subcmd_matches, &client).await?,
                "products" => run_products(subcmd_matches, &client).await?,
                "messages" => run_messages(subcmd_matches, client).await?,
                "cart" => run_cart(subcmd_matches, &client).await?,
                "orders" => run_orders(subcmd_matches, &client).await?,
                "location" => run_location(subcmd_matches, &client).await?,
                "payments" => run_payments(subcmd_matches, &client).await?,
                "premium" => run_premium(subcmd_matches, &client).await?,
                _ => bail!(format!("Unknown command: {}", Paint::red(name))),
            }
        }
        None => build().print_long_help()?,
    }

    return Ok(());
}
