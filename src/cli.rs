use envbind::{docs, EnvRecord};
use tracing_subscriber::EnvFilter;

#[derive(Debug, EnvRecord)]
#[field(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct DemoVars {
    /// Deployment stage, e.g. production or staging
    #[field(env = "APP_ENV")]
    pub environment: String,

    /// Database name
    pub db_name: String,

    #[field(doc = "Opaque key passed through to the application")]
    pub some_key: String,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("docs") => print!("{}", docs::render_markdown::<DemoVars>()),
        Some("-h") | Some("--help") => print_usage(),
        _ => {
            let sources: Vec<&str> = args.iter().map(String::as_str).collect();
            show_vars(&sources);
        }
    }
}

fn print_usage() {
    println!("Usage: envbind-demo [docs | SOURCES...]");
    println!("Commands:");
    println!("  docs        - Print the variables DemoVars reads as a markdown table");
    println!("  SOURCES...  - Dotenv files to preload before loading DemoVars (default: .env)");
}

fn show_vars(sources: &[&str]) {
    let vars = DemoVars::load(sources);
    println!("Environment loaded successfully!");
    println!("  environment: {}", vars.environment);
    println!("  db_name: {}", vars.db_name);
    println!("  some_key: {}", vars.some_key);
}
