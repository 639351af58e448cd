//! restconf-cli — issue RESTCONF requests from the command line
//!
//! Usage:
//!   restconf-cli [OPTIONS] root
//!   restconf-cli [OPTIONS] get <path> [--content <config|nonconfig|all>]
//!   restconf-cli [OPTIONS] put|post|patch|action <path> <body>
//!   restconf-cli [OPTIONS] delete <path>
//!   restconf-cli [OPTIONS] query <body>

use restconf_client::{tls, ClassifyExt, ClientConfig, ContentFilter, RestconfClient};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default)]
struct GlobalOptions {
    config_path: Option<String>,
    insecure: bool,
    quiet_tls: bool,
    yang_patch: bool,
    content: Option<String>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (opts, rest) = match parse_global_options(&args) {
        Ok(parsed) => parsed,
        Err(msg) => {
            eprintln!("Error: {msg}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    let Some(command) = rest.first() else {
        print_usage();
        std::process::exit(1);
    };

    match command.as_str() {
        "version" | "--version" | "-V" => {
            println!("restconf-cli {}", env!("CARGO_PKG_VERSION"));
            return;
        }
        "help" | "--help" | "-h" => {
            print_usage();
            return;
        }
        _ => {}
    }

    let client = match build_client(&opts) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&client, &opts, command, &rest[1..]).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn print_usage() {
    println!(
        r#"restconf-cli — RESTCONF command-line client

USAGE:
    restconf-cli [OPTIONS] <COMMAND> [ARGS]

COMMANDS:
    root                              GET /restconf/
    get <path>                        GET /restconf/data/<path>
    delete <path>                     DELETE /restconf/data/<path>
    put <path> <body>                 PUT /restconf/data/<path>
    post <path> <body>                POST /restconf/data/<path>
    patch <path> <body>               PATCH /restconf/data/<path>
    action <path> <body>              POST /restconf/operations/<path>
    query <body>                      POST /restconf/tailf/query/
    version                           Show version information
    help                              Show this help message

OPTIONS:
    --config <file>                   YAML client configuration
    --content <config|nonconfig|all>  Content filter for get (default: config)
    --insecure                        Do not verify TLS certificates
    --quiet-tls                       Suppress the insecure TLS warning
    --yang-patch                      Parse errors as YANG Patch status

ENVIRONMENT:
    RESTCONF_CONFIG                   Path to the YAML client configuration
    RUST_LOG                          Log filter (e.g. restconf_client=debug)"#
    );
}

fn parse_global_options(args: &[String]) -> Result<(GlobalOptions, Vec<String>), String> {
    let mut opts = GlobalOptions::default();
    let mut rest = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                opts.config_path = Some(iter.next().ok_or("--config needs a file")?.clone());
            }
            "--content" => {
                opts.content = Some(iter.next().ok_or("--content needs a value")?.clone());
            }
            "--insecure" => opts.insecure = true,
            "--quiet-tls" => opts.quiet_tls = true,
            "--yang-patch" => opts.yang_patch = true,
            _ => rest.push(arg.clone()),
        }
    }

    Ok((opts, rest))
}

fn build_client(opts: &GlobalOptions) -> restconf_client::Result<RestconfClient> {
    let path = opts
        .config_path
        .clone()
        .or_else(|| std::env::var("RESTCONF_CONFIG").ok());

    let mut config = match path {
        Some(p) => ClientConfig::load(p)?,
        None => ClientConfig::default(),
    };
    if opts.insecure {
        config.verify_tls = false;
    }
    // Composition root: the only place the process-wide switch is flipped.
    if opts.quiet_tls || config.disable_warning {
        tls::suppress_insecure_warnings();
    }

    RestconfClient::new(config)
}

fn required<'a>(args: &'a [String], idx: usize, name: &str) -> restconf_client::Result<&'a str> {
    args.get(idx).map(String::as_str).ok_or_else(|| {
        restconf_client::Error::configuration_with_context(
            format!("missing argument <{name}>"),
            restconf_client::ErrorContext::new().with_source("restconf-cli"),
        )
    })
}

async fn run(
    client: &RestconfClient,
    opts: &GlobalOptions,
    command: &str,
    args: &[String],
) -> restconf_client::Result<()> {
    let response = match command {
        "root" => client.get_root().await?,
        "get" => {
            let content = match opts.content.as_deref() {
                Some(c) => c.parse::<ContentFilter>()?,
                None => ContentFilter::Config,
            };
            client
                .get_with(required(args, 0, "path")?, Some(content), None)
                .await?
        }
        "delete" => client.delete(required(args, 0, "path")?, None).await?,
        "put" => {
            client
                .put(required(args, 1, "body")?, required(args, 0, "path")?, None)
                .await?
        }
        "post" => {
            client
                .post(required(args, 1, "body")?, required(args, 0, "path")?, None)
                .await?
        }
        "patch" => {
            client
                .patch(required(args, 1, "body")?, required(args, 0, "path")?, None)
                .await?
        }
        "action" => {
            client
                .action(required(args, 1, "body")?, required(args, 0, "path")?, None)
                .await?
        }
        "query" => client.query(required(args, 0, "body")?, None).await?,
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    let status = response.status();
    if !status.is_success() {
        let err = response.classify(opts.yang_patch).await?;
        println!("{err}");
        std::process::exit(1);
    }

    println!("{status}");
    let body = response
        .text()
        .await
        .map_err(|e| restconf_client::Error::Transport(e.into()))?;
    if !body.is_empty() {
        println!("{body}");
    }
    Ok(())
}
